//! The pipeline simulator.
//!
//! [`PipelineSimulator`] owns the single mutable state object of the demo and
//! exposes the four transition operations plus a read-only snapshot. The
//! source's framework state container becomes a plain owned struct with an
//! explicit notify-on-change hook; the source's deferred callback becomes an
//! explicit [`RunTicket`] the scheduling collaborator hands back to
//! [`PipelineSimulator::complete`]. Tickets carry a generation counter: any
//! operation that moves the state on invalidates outstanding tickets, so a
//! stale completion never overwrites newer state.

use serde::Serialize;

use pipevis_content::{CodeSample, Content, Stage};

use crate::clock::{self, Clock};
use crate::errors::{SimError, SimResult};
use crate::log::{LogEntry, LogLevel};
use crate::outcome;
use crate::score::{compute_security_score, Maturity};
use crate::status::Status;

/// Handle for one scheduled run completion.
///
/// Obtained from [`PipelineSimulator::run`] and redeemed via
/// [`PipelineSimulator::complete`] after the simulated scan delay. A ticket
/// whose generation has been superseded is silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTicket {
    generation: u64,
}

/// Read-only view of the pipeline state for renderers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSnapshot {
    /// Monotonic change counter, bumped on every mutating operation.
    pub revision: u64,
    pub current_stage_index: usize,
    pub stage_id: &'static str,
    pub status: Status,
    pub is_secure: bool,
    pub security_score: u8,
    pub maturity: Maturity,
    pub logs: Vec<LogEntry>,
    /// The code sample currently on display.
    pub code: &'static CodeSample,
}

/// Observer invoked after every mutating operation.
pub type Observer = Box<dyn FnMut(&PipelineSnapshot) + Send>;

/// Owns pipeline state and implements the transition operations.
pub struct PipelineSimulator {
    content: Content,
    clock: Box<dyn Clock + Send>,

    current_stage_index: usize,
    status: Status,
    is_secure: bool,
    logs: Vec<LogEntry>,

    /// Invalidates outstanding run tickets when bumped.
    generation: u64,
    revision: u64,
    observer: Option<Observer>,
}

impl std::fmt::Debug for PipelineSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineSimulator")
            .field("current_stage_index", &self.current_stage_index)
            .field("status", &self.status)
            .field("is_secure", &self.is_secure)
            .field("generation", &self.generation)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl PipelineSimulator {
    /// Create a simulator in the initial session state.
    pub fn new(content: Content, clock: Box<dyn Clock + Send>) -> SimResult<Self> {
        if content.stages.is_empty() {
            return Err(SimError::invalid_argument("stage table must not be empty"));
        }
        Ok(Self {
            content,
            clock,
            current_stage_index: 0,
            status: Status::Idle,
            is_secure: false,
            logs: Vec::new(),
            generation: 0,
            revision: 0,
            observer: None,
        })
    }

    /// Register the notify-on-change hook. Replaces any previous observer.
    pub fn set_observer(&mut self, observer: Observer) {
        self.observer = Some(observer);
    }

    /// Start a simulated run of the current stage.
    ///
    /// Returns a ticket the caller schedules [`Self::complete`] with after the
    /// simulated scan delay. Calling while a run is already in flight is
    /// ignored and returns `None`, so a completion is never scheduled twice.
    pub fn run(&mut self) -> Option<RunTicket> {
        if self.status == Status::Running {
            return None;
        }

        let stage = self.current_stage();
        let name = stage.name;
        let checks = stage.security_checks.join(", ");

        self.logs.clear();
        self.add_log(format!("Starting stage: {name}..."), LogLevel::Info);
        self.add_log(format!("Running security checks: {checks}"), LogLevel::Info);
        self.status = Status::Running;
        self.generation += 1;
        self.touch();

        Some(RunTicket {
            generation: self.generation,
        })
    }

    /// Apply the delayed outcome of a run.
    ///
    /// Returns `Ok(true)` if the outcome was applied, `Ok(false)` if the
    /// ticket was stale (superseded by reset, fix, advance, or a newer run).
    /// An unknown stage id in the static table is an invariant violation.
    pub fn complete(&mut self, ticket: RunTicket) -> SimResult<bool> {
        if ticket.generation != self.generation || self.status != Status::Running {
            return Ok(false);
        }

        let outcome = outcome::script_for(self.current_stage(), self.is_secure, self.current_sample())?;
        for (level, message) in outcome.entries {
            self.add_log(message, level);
        }
        self.status = outcome.status;
        self.touch();
        Ok(true)
    }

    /// Move to the next stage.
    ///
    /// Only meaningful after a successful run; a silent no-op otherwise, and
    /// always a no-op on the final stage.
    pub fn advance(&mut self) {
        if self.status != Status::Success {
            return;
        }
        if self.current_stage_index + 1 >= self.content.stages.len() {
            return;
        }

        self.current_stage_index += 1;
        self.status = Status::Idle;
        self.logs.clear();
        self.generation += 1;
        self.touch();
    }

    /// Apply the security fix: swap in the secure sample and confirm in the log.
    ///
    /// Allowed from any state. Repeat calls leave `is_secure` unchanged but
    /// still clear and re-append the confirmation entries.
    pub fn apply_fix(&mut self) {
        self.is_secure = true;
        self.status = Status::Idle;
        self.logs.clear();
        self.generation += 1;

        self.add_log("Applying security patches...", LogLevel::Info);
        self.add_log("Implemented parameterized queries", LogLevel::Success);
        self.add_log("Removed hardcoded secrets", LogLevel::Success);
        self.add_log("Enhanced input validation", LogLevel::Success);
        self.touch();
    }

    /// Restore the initial session state.
    pub fn reset(&mut self) {
        self.current_stage_index = 0;
        self.status = Status::Idle;
        self.is_secure = false;
        self.logs.clear();
        self.generation += 1;
        self.touch();
    }

    /// Append a log entry stamped with the injected clock.
    pub fn add_log(&mut self, message: impl Into<String>, level: LogLevel) {
        let timestamp = clock::format_timestamp(self.clock.now());
        self.logs.push(LogEntry::new(timestamp, message, level));
    }

    /// The derived security score, recomputed on every read.
    pub fn security_score(&self) -> u8 {
        compute_security_score(self.is_secure, self.current_stage_index)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_secure(&self) -> bool {
        self.is_secure
    }

    pub fn current_stage_index(&self) -> usize {
        self.current_stage_index
    }

    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    /// The static stage table this simulator was constructed with.
    pub fn stages(&self) -> &'static [Stage] {
        self.content.stages
    }

    /// Build a read-only snapshot of the current state.
    pub fn snapshot(&self) -> PipelineSnapshot {
        let score = self.security_score();
        PipelineSnapshot {
            revision: self.revision,
            current_stage_index: self.current_stage_index,
            stage_id: self.current_stage().id,
            status: self.status,
            is_secure: self.is_secure,
            security_score: score,
            maturity: Maturity::from_score(score),
            logs: self.logs.clone(),
            code: self.current_sample(),
        }
    }

    fn current_stage(&self) -> &'static Stage {
        // Index invariant: 0 <= current_stage_index < stages.len().
        &self.content.stages[self.current_stage_index]
    }

    fn current_sample(&self) -> &'static CodeSample {
        if self.is_secure {
            self.content.secure
        } else {
            self.content.vulnerable
        }
    }

    fn touch(&mut self) {
        self.revision += 1;
        if self.observer.is_some() {
            let snap = self.snapshot();
            if let Some(observer) = self.observer.as_mut() {
                observer(&snap);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn sim() -> PipelineSimulator {
        PipelineSimulator::new(Content::builtin(), Box::new(FixedClock::default()))
            .expect("builtin content is valid")
    }

    #[test]
    fn initial_state() {
        let s = sim();
        let snap = s.snapshot();
        assert_eq!(snap.current_stage_index, 0);
        assert_eq!(snap.status, Status::Idle);
        assert!(!snap.is_secure);
        assert!(snap.logs.is_empty());
        assert_eq!(snap.security_score, 0);
        assert_eq!(snap.maturity, Maturity::Vulnerable);
        assert_eq!(snap.stage_id, "code");
    }

    #[test]
    fn empty_stage_table_is_rejected() {
        let mut content = Content::builtin();
        content.stages = &[];
        let err = PipelineSimulator::new(content, Box::new(FixedClock::default())).unwrap_err();
        assert!(matches!(err, SimError::InvalidArgument { .. }));
    }

    #[test]
    fn run_sets_running_and_seeds_logs() {
        let mut s = sim();
        let ticket = s.run();
        assert!(ticket.is_some());
        assert_eq!(s.status(), Status::Running);
        assert_eq!(s.logs().len(), 2);
        assert!(s.logs()[0].message.contains("Code & Commit"));
        assert!(s.logs()[1].message.contains("Secret Detection"));
    }

    #[test]
    fn run_while_running_is_ignored() {
        let mut s = sim();
        let first = s.run();
        assert!(first.is_some());
        assert!(s.run().is_none());
        // The original ticket still completes.
        assert!(s.complete(first.unwrap()).unwrap());
    }

    #[test]
    fn insecure_code_run_fails_with_critical_findings() {
        let mut s = sim();
        let ticket = s.run().unwrap();
        assert!(s.complete(ticket).unwrap());
        assert_eq!(s.status(), Status::Error);
        assert!(s.logs().iter().filter(|e| e.is_error()).count() >= 2);
    }

    #[test]
    fn secure_code_run_passes_without_errors() {
        let mut s = sim();
        s.apply_fix();
        let ticket = s.run().unwrap();
        assert!(s.complete(ticket).unwrap());
        assert_eq!(s.status(), Status::Success);
        assert_eq!(s.logs().iter().filter(|e| e.is_error()).count(), 0);
    }

    #[test]
    fn advance_requires_success() {
        let mut s = sim();
        s.advance();
        assert_eq!(s.current_stage_index(), 0);

        let ticket = s.run().unwrap();
        s.complete(ticket).unwrap();
        assert_eq!(s.status(), Status::Error);
        s.advance();
        assert_eq!(s.current_stage_index(), 0);
    }

    #[test]
    fn advance_after_success_moves_one_stage() {
        let mut s = sim();
        s.apply_fix();
        let ticket = s.run().unwrap();
        s.complete(ticket).unwrap();
        assert_eq!(s.status(), Status::Success);

        s.advance();
        assert_eq!(s.current_stage_index(), 1);
        assert_eq!(s.status(), Status::Idle);
        assert!(s.logs().is_empty());
        assert_eq!(s.security_score(), 55);
    }

    #[test]
    fn advance_on_last_stage_is_a_no_op() {
        let mut s = sim();
        s.apply_fix();
        for _ in 0..4 {
            let ticket = s.run().unwrap();
            s.complete(ticket).unwrap();
            s.advance();
        }
        assert_eq!(s.current_stage_index(), 4);

        let ticket = s.run().unwrap();
        s.complete(ticket).unwrap();
        assert_eq!(s.status(), Status::Success);
        s.advance();
        assert_eq!(s.current_stage_index(), 4);
        assert_eq!(s.security_score(), 100);
    }

    #[test]
    fn apply_fix_is_idempotent_on_the_flag() {
        let mut s = sim();
        s.apply_fix();
        assert!(s.is_secure());
        let logs_after_first = s.logs().len();

        s.apply_fix();
        assert!(s.is_secure());
        assert_eq!(s.logs().len(), logs_after_first);
        assert!(s.logs().iter().any(|e| e.level == LogLevel::Success));
        assert_eq!(s.snapshot().code.title, "Secure Authentication Implementation");
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut s = sim();
        s.apply_fix();
        let ticket = s.run().unwrap();
        s.complete(ticket).unwrap();
        s.advance();
        s.reset();

        let snap = s.snapshot();
        assert_eq!(snap.current_stage_index, 0);
        assert_eq!(snap.status, Status::Idle);
        assert!(!snap.is_secure);
        assert!(snap.logs.is_empty());
        assert_eq!(snap.security_score, 0);
        assert_eq!(snap.code.title, "Vulnerable Authentication Endpoint");
    }

    #[test]
    fn stale_ticket_after_reset_does_nothing() {
        let mut s = sim();
        let ticket = s.run().unwrap();
        s.reset();

        let snap_before = s.snapshot();
        assert!(!s.complete(ticket).unwrap());
        let snap_after = s.snapshot();
        assert_eq!(snap_after.status, Status::Idle);
        assert!(snap_after.logs.is_empty());
        assert_eq!(snap_before.revision, snap_after.revision);
    }

    #[test]
    fn newer_run_supersedes_older_ticket() {
        let mut s = sim();
        let old = s.run().unwrap();
        s.reset();
        let new = s.run().unwrap();

        assert!(!s.complete(old).unwrap());
        assert_eq!(s.status(), Status::Running);
        assert!(s.complete(new).unwrap());
        assert!(s.status().is_terminal());
    }

    #[test]
    fn observer_fires_on_every_mutation() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);

        let mut s = sim();
        s.set_observer(Box::new(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        let ticket = s.run().unwrap();
        s.complete(ticket).unwrap();
        s.apply_fix();
        s.reset();
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn snapshot_serializes_to_camel_case() {
        let s = sim();
        let json = serde_json::to_value(s.snapshot()).unwrap();
        assert!(json.get("currentStageIndex").is_some());
        assert!(json.get("securityScore").is_some());
        assert!(json.get("isSecure").is_some());
        assert_eq!(json["status"], "IDLE");
    }
}
