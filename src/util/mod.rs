//! Runtime measurement and debug dumping helpers

use std::fmt;
use std::time::{Duration, Instant};

/// Wall-clock stopwatch started at construction.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time formatted as milliseconds with 3 decimal places,
    /// e.g. `"12.345ms"`.
    pub fn elapsed_ms(&self) -> String {
        format_ms(self.elapsed())
    }
}

/// Resource-usage snapshot for a completed run.
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub start: Instant,
    pub end: Instant,
    pub elapsed: Duration,
    /// Human-readable elapsed time, `"<n>.nnnms"`
    pub runtime: String,
}

/// Measure elapsed time since `start`.
pub fn runtime(start: Instant) -> RuntimeInfo {
    let end = Instant::now();
    let elapsed = end.duration_since(start);
    RuntimeInfo {
        start,
        end,
        elapsed,
        runtime: format_ms(elapsed),
    }
}

fn format_ms(elapsed: Duration) -> String {
    format!("{:.3}ms", elapsed.as_secs_f64() * 1000.0)
}

/// Debug-format a set of values, one per line.
pub fn dump_vars(vars: &[&dyn fmt::Debug]) -> String {
    let mut out = String::new();
    for var in vars {
        out.push_str(&format!("{var:?}\n"));
    }
    out
}

/// Pretty debug-format a single value.
pub fn export_var(var: &dyn fmt::Debug) -> String {
    format!("{var:#?}")
}
