use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

mod health;
mod pipeline;
mod stages;

pub fn router() -> Router<AppState> {
    let v1 = Router::new()
        .route("/pipeline", get(pipeline::get_pipeline))
        .route("/pipeline/run", post(pipeline::run))
        .route("/pipeline/advance", post(pipeline::advance))
        .route("/pipeline/fix", post(pipeline::fix))
        .route("/pipeline/reset", post(pipeline::reset))
        .route("/stages", get(stages::list_stages))
        .route("/stages/:id", get(stages::get_stage));

    Router::new()
        .route("/healthz", get(health::healthz))
        .nest("/v1", v1)
}
