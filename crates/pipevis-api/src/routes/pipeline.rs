use axum::extract::State;
use axum::Json;

use pipevis_core::PipelineSnapshot;

use crate::scheduler;
use crate::state::AppState;

/// Read-only snapshot of the pipeline state.
pub async fn get_pipeline(State(state): State<AppState>) -> Json<PipelineSnapshot> {
    Json(state.sim.lock().snapshot())
}

/// Start a simulated run of the current stage.
///
/// Ignored if a run is already in flight; the response is always the
/// post-operation snapshot.
pub async fn run(State(state): State<AppState>) -> Json<PipelineSnapshot> {
    let (ticket, snapshot) = {
        let mut sim = state.sim.lock();
        (sim.run(), sim.snapshot())
    };

    if let Some(ticket) = ticket {
        scheduler::schedule_completion(state.clone(), ticket, state.cfg.scan_delay());
    }

    Json(snapshot)
}

/// Move to the next stage. Silent no-op outside its precondition.
pub async fn advance(State(state): State<AppState>) -> Json<PipelineSnapshot> {
    let mut sim = state.sim.lock();
    sim.advance();
    Json(sim.snapshot())
}

/// Apply the security fix.
pub async fn fix(State(state): State<AppState>) -> Json<PipelineSnapshot> {
    let mut sim = state.sim.lock();
    sim.apply_fix();
    Json(sim.snapshot())
}

/// Restore the initial session state.
pub async fn reset(State(state): State<AppState>) -> Json<PipelineSnapshot> {
    let mut sim = state.sim.lock();
    sim.reset();
    Json(sim.snapshot())
}
