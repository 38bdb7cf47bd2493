//! Drives the simulated scan delay.
//!
//! The core hands back a run ticket; this module sleeps out the configured
//! delay and redeems it. Supersession is the core's job: a ticket invalidated
//! by reset, fix, advance, or a newer run completes as a no-op.

use std::time::Duration;

use tracing::{debug, warn};

use pipevis_core::RunTicket;

use crate::state::AppState;

/// Schedule the delayed outcome of a run.
pub fn schedule_completion(state: AppState, ticket: RunTicket, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        match state.sim.lock().complete(ticket) {
            Ok(true) => {}
            Ok(false) => debug!("discarded stale run completion"),
            Err(e) => warn!(error = %e, "run completion failed"),
        }
    });
}
