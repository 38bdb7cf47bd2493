use axum::extract::{Path, State};
use axum::Json;

use pipevis_content::Stage;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// The static stage table, in pipeline order.
pub async fn list_stages(State(state): State<AppState>) -> Json<&'static [Stage]> {
    Json(state.sim.lock().stages())
}

/// One stage by id.
pub async fn get_stage(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<&'static Stage>> {
    let stages = state.sim.lock().stages();
    stages
        .iter()
        .find(|s| s.id == id)
        .map(Json)
        .ok_or(ApiError::NotFound)
}
