//! Validated dependency graph over a task snapshot.

use std::collections::VecDeque;

use crate::interner::{TaskIdInterner, TaskSlot};
use crate::log_debug;
use crate::models::{Task, TaskId};

use super::types::ScheduleError;

/// Task data laid out for the passes. All lookups are direct vector indexing by slot.
///
/// Slots follow input order.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    pub index: TaskIdInterner,
    pub durations: Vec<i64>,
    /// Dependencies of each task, deduplicated.
    pub deps: Vec<Vec<TaskSlot>>,
    /// Successors of each task (tasks that list it as a dependency).
    pub dependents: Vec<Vec<TaskSlot>>,
}

impl TaskGraph {
    /// Validate `tasks` and build the graph.
    ///
    /// Ids and durations are checked task by task in input order, then
    /// dependency references. The first problem found is returned.
    pub fn build(tasks: &[Task], verbosity: u8) -> Result<Self, ScheduleError> {
        let n = tasks.len();
        let mut index = TaskIdInterner::with_capacity(n);
        let mut durations = Vec::with_capacity(n);

        for task in tasks {
            if task.id == 0 {
                return Err(ScheduleError::InvalidTaskId(task.id));
            }
            if index.insert(task.id).is_none() {
                return Err(ScheduleError::DuplicateTaskId(task.id));
            }
            if task.duration < 0 {
                return Err(ScheduleError::InvalidDuration {
                    task_id: task.id,
                    duration: task.duration,
                });
            }
            durations.push(task.duration);
        }

        let mut deps: Vec<Vec<TaskSlot>> = vec![Vec::new(); n];
        let mut dependents: Vec<Vec<TaskSlot>> = vec![Vec::new(); n];

        for (slot, task) in tasks.iter().enumerate() {
            for &dep_id in &task.dependencies {
                let dep_slot = index
                    .slot(dep_id)
                    .ok_or(ScheduleError::DanglingDependency {
                        task_id: task.id,
                        dependency_id: dep_id,
                    })?;
                deps[slot].push(dep_slot);
            }
            deps[slot].sort_unstable();
            deps[slot].dedup();
            for &dep_slot in &deps[slot] {
                dependents[dep_slot].push(slot);
            }
        }

        log_debug!(
            verbosity,
            "graph: {} tasks, {} dependency edges",
            n,
            deps.iter().map(Vec::len).sum::<usize>()
        );

        Ok(Self {
            index,
            durations,
            deps,
            dependents,
        })
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn id(&self, slot: TaskSlot) -> TaskId {
        self.index.id(slot)
    }

    pub fn is_sink(&self, slot: TaskSlot) -> bool {
        self.dependents[slot].is_empty()
    }

    /// Order slots so that every task comes after all of its dependencies (Kahn's algorithm).
    ///
    /// Sources are queued in input order, so the result is deterministic. Tasks
    /// left unordered sit on or behind a cycle and are reported by id.
    pub fn topological_order(&self, verbosity: u8) -> Result<Vec<TaskSlot>, ScheduleError> {
        let mut in_degree: Vec<usize> = self.deps.iter().map(Vec::len).collect();

        let mut queue: VecDeque<TaskSlot> = in_degree
            .iter()
            .enumerate()
            .filter(|(_, &degree)| degree == 0)
            .map(|(slot, _)| slot)
            .collect();

        log_debug!(
            verbosity,
            "sources: {:?}",
            queue.iter().map(|&s| self.id(s)).collect::<Vec<_>>()
        );

        let mut result: Vec<TaskSlot> = Vec::with_capacity(self.len());

        while let Some(slot) = queue.pop_front() {
            result.push(slot);

            for &dependent in &self.dependents[slot] {
                in_degree[dependent] -= 1;
                if in_degree[dependent] == 0 {
                    queue.push_back(dependent);
                }
            }
        }

        if result.len() != self.len() {
            let mut task_ids: Vec<TaskId> = in_degree
                .iter()
                .enumerate()
                .filter(|(_, &degree)| degree > 0)
                .map(|(slot, _)| self.id(slot))
                .collect();
            task_ids.sort_unstable();
            return Err(ScheduleError::CyclicDependency { task_ids });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: TaskId, duration: i64, deps: Vec<TaskId>) -> Task {
        Task::new(id, format!("Task {}", id), duration, deps)
    }

    fn ordered_ids(graph: &TaskGraph) -> Vec<TaskId> {
        graph
            .topological_order(0)
            .unwrap()
            .into_iter()
            .map(|slot| graph.id(slot))
            .collect()
    }

    #[test]
    fn test_build_links_dependents() {
        let tasks = vec![
            make_task(1, 3, vec![]),
            make_task(2, 4, vec![1]),
            make_task(3, 5, vec![1]),
        ];
        let graph = TaskGraph::build(&tasks, 0).unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.dependents[0], vec![1, 2]);
        assert!(graph.is_sink(1));
        assert!(!graph.is_sink(0));
    }

    #[test]
    fn test_duplicate_dependency_collapsed() {
        let tasks = vec![make_task(1, 3, vec![]), make_task(2, 4, vec![1, 1, 1])];
        let graph = TaskGraph::build(&tasks, 0).unwrap();

        assert_eq!(graph.deps[1], vec![0]);
        assert_eq!(graph.dependents[0], vec![1]);
    }

    #[test]
    fn test_order_ignores_id_numbering() {
        // 30 -> 20 -> 10, ids descending along the chain
        let tasks = vec![
            make_task(10, 1, vec![20]),
            make_task(20, 1, vec![30]),
            make_task(30, 1, vec![]),
        ];
        let graph = TaskGraph::build(&tasks, 0).unwrap();

        assert_eq!(ordered_ids(&graph), vec![30, 20, 10]);
    }

    #[test]
    fn test_sources_in_input_order() {
        let tasks = vec![
            make_task(5, 1, vec![]),
            make_task(2, 1, vec![]),
            make_task(9, 1, vec![5, 2]),
        ];
        let graph = TaskGraph::build(&tasks, 0).unwrap();

        assert_eq!(ordered_ids(&graph), vec![5, 2, 9]);
    }

    #[test]
    fn test_two_task_cycle() {
        let tasks = vec![make_task(1, 2, vec![2]), make_task(2, 2, vec![1])];
        let graph = TaskGraph::build(&tasks, 0).unwrap();

        assert_eq!(
            graph.topological_order(0),
            Err(ScheduleError::CyclicDependency {
                task_ids: vec![1, 2]
            })
        );
    }

    #[test]
    fn test_self_dependency_is_cycle() {
        let tasks = vec![make_task(1, 2, vec![]), make_task(2, 2, vec![2])];
        let graph = TaskGraph::build(&tasks, 0).unwrap();

        assert_eq!(
            graph.topological_order(0),
            Err(ScheduleError::CyclicDependency { task_ids: vec![2] })
        );
    }

    #[test]
    fn test_cycle_reports_blocked_downstream_tasks() {
        // 2 <-> 3 cycle, 4 waits on it, 1 is fine
        let tasks = vec![
            make_task(1, 1, vec![]),
            make_task(2, 1, vec![1, 3]),
            make_task(3, 1, vec![2]),
            make_task(4, 1, vec![3]),
        ];
        let graph = TaskGraph::build(&tasks, 0).unwrap();

        assert_eq!(
            graph.topological_order(0),
            Err(ScheduleError::CyclicDependency {
                task_ids: vec![2, 3, 4]
            })
        );
    }

    #[test]
    fn test_dangling_dependency() {
        let tasks = vec![make_task(1, 2, vec![]), make_task(2, 2, vec![1, 7])];
        let err = TaskGraph::build(&tasks, 0).unwrap_err();

        assert_eq!(
            err,
            ScheduleError::DanglingDependency {
                task_id: 2,
                dependency_id: 7
            }
        );
    }

    #[test]
    fn test_negative_duration() {
        let tasks = vec![make_task(1, -1, vec![])];
        let err = TaskGraph::build(&tasks, 0).unwrap_err();

        assert_eq!(
            err,
            ScheduleError::InvalidDuration {
                task_id: 1,
                duration: -1
            }
        );
    }

    #[test]
    fn test_duplicate_and_zero_ids() {
        let tasks = vec![make_task(1, 1, vec![]), make_task(1, 2, vec![])];
        assert_eq!(
            TaskGraph::build(&tasks, 0).unwrap_err(),
            ScheduleError::DuplicateTaskId(1)
        );

        let tasks = vec![make_task(0, 1, vec![])];
        assert_eq!(
            TaskGraph::build(&tasks, 0).unwrap_err(),
            ScheduleError::InvalidTaskId(0)
        );
    }

    #[test]
    fn test_id_checks_precede_dependency_checks() {
        // Task 1 has a dangling reference, task 2 a negative duration
        let tasks = vec![make_task(1, 1, vec![99]), make_task(2, -4, vec![])];
        assert_eq!(
            TaskGraph::build(&tasks, 0).unwrap_err(),
            ScheduleError::InvalidDuration {
                task_id: 2,
                duration: -4
            }
        );
    }
}
