//! Stage run status.

use serde::Serialize;

/// Status of the active stage's run.
///
/// `Idle` is the initial state for every stage; `Running` is entered by
/// `run()`; exactly one of the remaining three is terminal for the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Idle,
    Running,
    Success,
    Error,
    Warning,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Idle => "IDLE",
            Status::Running => "RUNNING",
            Status::Success => "SUCCESS",
            Status::Error => "ERROR",
            Status::Warning => "WARNING",
        }
    }

    /// True once a run has reached a terminal outcome for the stage.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Success | Status::Error | Status::Warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(!Status::Idle.is_terminal());
        assert!(!Status::Running.is_terminal());
        assert!(Status::Success.is_terminal());
        assert!(Status::Error.is_terminal());
        assert!(Status::Warning.is_terminal());
    }
}
