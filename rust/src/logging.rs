//! Logging macros for the schedule calculator with verbosity level control.
//!
//! Nothing is formatted when the configured verbosity is below a macro's level.
//! Levels:
//! - 0: SILENT (errors are returned, never printed)
//! - 1: CHANGES (one line per pass: task count, project duration, critical count)
//! - 2: CHECKS (computed values for every task)
//! - 3: DEBUG (graph construction and topological ordering)

pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_CHANGES: u8 = 1;
pub const VERBOSITY_CHECKS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Log a pass-level summary (verbosity >= 1).
#[macro_export]
macro_rules! log_changes {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_CHANGES {
            eprintln!("[sitecpm] {}", format_args!($($arg)*));
        }
    };
}

/// Log per-task computed values (verbosity >= 2).
#[macro_export]
macro_rules! log_checks {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_CHECKS {
            eprintln!("[sitecpm]   {}", format_args!($($arg)*));
        }
    };
}

/// Log graph internals (verbosity >= 3).
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            eprintln!("[sitecpm]     {}", format_args!($($arg)*));
        }
    };
}
