//! # Star Service アプリケーション構築
//!
//! State を受け取り、ルーターとミドルウェアレイヤーを組み立てる。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use starboard_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{
    ReadinessState,
    StarState,
    health_check,
    list_stars,
    readiness_check,
    star_dashboard,
    star_dashboard_by_uid,
    unstar_dashboard,
    unstar_dashboard_by_uid,
};

/// ルーターを構築する
///
/// レイヤーは下から順に適用される: Request ID の採番 → リクエストスパン → Request ID の返却。
pub fn build_router(star_state: Arc<StarState>, readiness_state: Arc<ReadinessState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .merge(
            Router::new()
                .route("/user/stars", get(list_stars))
                .route(
                    "/user/stars/dashboard/{dashboard_id}",
                    post(star_dashboard).delete(unstar_dashboard),
                )
                .route(
                    "/user/stars/dashboard/uid/{dashboard_uid}",
                    post(star_dashboard_by_uid).delete(unstar_dashboard_by_uid),
                )
                .with_state(star_state),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
