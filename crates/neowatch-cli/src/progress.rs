use std::io::{self, Write};

use neowatch_core::ProgressSink;

/// Rewrites a single stderr line as days settle, ending it on the last one.
#[derive(Debug, Default)]
pub struct StderrProgress;

impl ProgressSink for StderrProgress {
    fn on_progress(&self, completed: usize, total: usize) {
        let mut stderr = io::stderr().lock();
        // Progress is cosmetic; a closed stderr must not fail the load.
        let _ = write!(stderr, "\r{}", progress_line(completed, total));
        if completed >= total {
            let _ = writeln!(stderr);
        }
        let _ = stderr.flush();
    }
}

/// Ignores every update.
#[derive(Debug, Default)]
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn on_progress(&self, _completed: usize, _total: usize) {}
}

pub fn progress_line(completed: usize, total: usize) -> String {
    let percent = if total == 0 {
        100
    } else {
        completed * 100 / total
    };
    format!("{percent:>3}% {completed}/{total} days loaded")
}
