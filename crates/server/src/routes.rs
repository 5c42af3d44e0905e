use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Ping;

use crate::state::ServerState;

pub mod entries;

pub async fn ping() -> Json<Ping> {
    Json(Ping::default())
}

/// Build the full application router.
///
/// Lookup and delete paths are served with and without the trailing slash.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let entry_routes = Router::new()
        .route("/entries", get(entries::list))
        .route("/entry/add", post(entries::create))
        .route("/entry/", get(entries::get_by_id))
        .route("/entry", get(entries::get_by_id))
        .route("/ingredient/update", put(entries::update_ingredients))
        .route("/entry/update", put(entries::update_entry))
        .route("/entry/softdelete/", delete(entries::soft_delete))
        .route("/entry/softdelete", delete(entries::soft_delete))
        .route("/entry/delete/", delete(entries::hard_delete))
        .route("/entry/delete", delete(entries::hard_delete));

    Router::new()
        .route("/ping", get(ping))
        .merge(entry_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx 以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
