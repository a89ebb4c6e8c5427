//! Generation reporting.

use std::time::{Duration, Instant};

/// Stores report state.
pub enum ReportState {
    /// No state.
    None,
    /// The state for reporting every Nth board.
    Count(u32),
    /// The last instant been reported.
    Duration(Instant),
}

/// Specifies report settings when generating the sequence.
#[derive(Copy, Clone)]
pub enum Report {
    /// No report.
    None,
    /// Report every Nth board.
    Count(u32),
    /// Report every duration.
    Duration(Duration),
}

impl Report {
    /// Gets the start state of reporting.
    pub fn start(&self) -> ReportState {
        match self {
            Report::None => ReportState::None,
            Report::Count(_) => ReportState::Count(0),
            Report::Duration(_) => ReportState::Duration(Instant::now()),
        }
    }

    /// Update the report state and return `true` if should report.
    pub fn update(&self, state: &mut ReportState, count: u32) -> bool {
        use ReportState::*;
        match (self, state) {
            (Report::None, None) => false,
            (Report::Count(n), Count(last)) => {
                if count >= *last + n {
                    *last += n;
                    true
                } else {false}
            }
            (Report::Duration(dur), Duration(last)) => {
                let now = Instant::now();
                if now >= *last + *dur {
                    *last = now;
                    true
                } else {false}
            }
            _ => false,
        }
    }
}
