//! Clock injection for the simulator.
//!
//! Core never reads system time on its own. Callers inject a [`Clock`], which
//! keeps log timestamps deterministic under test and leaves scheduling
//! entirely to the collaborator driving the simulation.

use time::macros::format_description;
use time::OffsetDateTime;

/// Source of wall-clock time for log timestamps.
pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

/// Production clock reading UTC system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Fixed clock for tests. Defaults to the Unix epoch.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub at: OffsetDateTime,
}

impl Default for FixedClock {
    fn default() -> Self {
        Self {
            at: OffsetDateTime::UNIX_EPOCH,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.at
    }
}

/// Format a timestamp the way the log console displays it.
pub fn format_timestamp(t: OffsetDateTime) -> String {
    let fmt = format_description!("[hour]:[minute]:[second]");
    t.format(fmt).unwrap_or_else(|_| "--:--:--".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_stable() {
        let c = FixedClock::default();
        assert_eq!(c.now(), c.now());
        assert_eq!(format_timestamp(c.now()), "00:00:00");
    }

    #[test]
    fn timestamp_format_is_hms() {
        let t = OffsetDateTime::UNIX_EPOCH + time::Duration::seconds(3661);
        assert_eq!(format_timestamp(t), "01:01:01");
    }
}
