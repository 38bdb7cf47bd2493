use axum::Router;
use tower_http::trace::TraceLayer;

mod cors;

pub fn wrap(router: Router) -> Router {
    router
        .layer(TraceLayer::new_for_http())
        .layer(cors::layer())
}
