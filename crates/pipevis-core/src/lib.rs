//! pipevis-core: the pipeline-state and security-score simulation engine.
//!
//! This crate owns the finite state machine behind the DevSecOps demo: stage
//! progression, simulated scan outcomes, log accumulation, and the derived
//! security score. It is synchronous and deterministic-friendly: timestamps
//! come from an injected [`clock::Clock`], and the delay between starting a
//! scan and its outcome is driven by the caller through a [`simulator::RunTicket`],
//! so a scheduler that has been superseded can never overwrite newer state.
//!
//! Rendering, scheduling, and static content live in collaborator crates;
//! this crate only exposes a snapshot to read and four operations to call.

pub mod clock;
pub mod errors;
pub mod log;
pub mod outcome;
pub mod score;
pub mod simulator;
pub mod status;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{SimError, SimResult};
pub use log::{LogEntry, LogLevel};
pub use score::{compute_security_score, Maturity};
pub use simulator::{PipelineSimulator, PipelineSnapshot, RunTicket};
pub use status::Status;
