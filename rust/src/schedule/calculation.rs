//! Critical path calculation using forward and backward passes.

use rustc_hash::FxHashMap;

use crate::interner::TaskSlot;
use crate::models::{Task, TaskId};
use crate::{log_changes, log_checks};

use super::graph::TaskGraph;
use super::types::{ScheduleError, ScheduleResult, TaskTiming};

/// Calculate early/late times, float and the critical path for every task.
///
/// The input is only read. On any structural error nothing is computed.
///
/// # Arguments
/// * `tasks` - Snapshot of all tasks in the schedule
/// * `verbosity` - Logging level (see `crate::logging`)
///
/// # Returns
/// * `Ok(ScheduleResult)` with timings keyed by task id
/// * `Err(ScheduleError)` for invalid ids, durations, dangling references,
///   cycles, or chains whose total duration does not fit in an `i64`
pub fn calculate_schedule(tasks: &[Task], verbosity: u8) -> Result<ScheduleResult, ScheduleError> {
    let graph = TaskGraph::build(tasks, verbosity)?;
    if graph.is_empty() {
        log_changes!(verbosity, "no tasks to schedule");
    }
    let topo_order = graph.topological_order(verbosity)?;

    let (early_start, early_finish) = forward_pass(&graph, &topo_order)?;
    let project_duration = early_finish.iter().copied().max().unwrap_or(0);
    log_changes!(
        verbosity,
        "forward pass: {} tasks, project duration {}",
        graph.len(),
        project_duration
    );

    let (late_start, late_finish) = backward_pass(&graph, &topo_order, project_duration);

    let mut task_timings: FxHashMap<TaskId, TaskTiming> =
        FxHashMap::with_capacity_and_hasher(graph.len(), Default::default());
    let mut rank = vec![0usize; graph.len()];

    for (position, &slot) in topo_order.iter().enumerate() {
        rank[slot] = position;
        let timing = TaskTiming {
            early_start: early_start[slot],
            early_finish: early_finish[slot],
            late_start: late_start[slot],
            late_finish: late_finish[slot],
            float: late_start[slot] - early_start[slot],
        };
        log_checks!(
            verbosity,
            "task {}: es={} ef={} ls={} lf={} float={}",
            graph.id(slot),
            timing.early_start,
            timing.early_finish,
            timing.late_start,
            timing.late_finish,
            timing.float
        );
        task_timings.insert(graph.id(slot), timing);
    }

    let mut critical: Vec<TaskSlot> = topo_order
        .iter()
        .copied()
        .filter(|&slot| late_start[slot] == early_start[slot])
        .collect();
    critical.sort_by_key(|&slot| (early_start[slot], rank[slot]));
    let critical_path: Vec<TaskId> = critical.into_iter().map(|slot| graph.id(slot)).collect();

    log_changes!(
        verbosity,
        "backward pass: {} of {} tasks critical",
        critical_path.len(),
        graph.len()
    );

    Ok(ScheduleResult {
        task_timings,
        topo_order: topo_order.into_iter().map(|slot| graph.id(slot)).collect(),
        project_duration,
        critical_path,
    })
}

/// Earliest start and finish of every slot.
///
/// Every later time is bounded by some early finish, so checking the additions
/// here keeps the backward pass and float in range too.
fn forward_pass(
    graph: &TaskGraph,
    topo_order: &[TaskSlot],
) -> Result<(Vec<i64>, Vec<i64>), ScheduleError> {
    let n = graph.len();
    let mut early_start = vec![0i64; n];
    let mut early_finish = vec![0i64; n];

    for &slot in topo_order {
        let start = graph.deps[slot]
            .iter()
            .map(|&dep| early_finish[dep])
            .max()
            .unwrap_or(0);
        early_start[slot] = start;
        early_finish[slot] =
            start
                .checked_add(graph.durations[slot])
                .ok_or(ScheduleError::DurationOverflow {
                    task_id: graph.id(slot),
                })?;
    }

    Ok((early_start, early_finish))
}

/// Latest start and finish of every slot that keeps `project_duration`.
fn backward_pass(
    graph: &TaskGraph,
    topo_order: &[TaskSlot],
    project_duration: i64,
) -> (Vec<i64>, Vec<i64>) {
    let n = graph.len();
    let mut late_start = vec![0i64; n];
    let mut late_finish = vec![0i64; n];

    for &slot in topo_order.iter().rev() {
        // Sinks must finish by the end of the project
        let finish = if graph.is_sink(slot) {
            project_duration
        } else {
            graph.dependents[slot]
                .iter()
                .map(|&dependent| late_start[dependent])
                .min()
                .unwrap_or(project_duration)
        };
        late_finish[slot] = finish;
        late_start[slot] = finish - graph.durations[slot];
    }

    (late_start, late_finish)
}
