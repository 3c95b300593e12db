use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::{AppState, controllers::preorders_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    let submit_cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let list_cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    router
        .route(
            "/submit-preorder",
            post(preorders_controller::submit_preorder)
                .options(preorders_controller::submit_preflight)
                .fallback(preorders_controller::method_not_allowed)
                .layer(submit_cors),
        )
        .route(
            "/get-preorders",
            get(preorders_controller::get_preorders)
                .options(preorders_controller::list_preflight)
                .fallback(preorders_controller::method_not_allowed)
                .layer(list_cors),
        )
}
