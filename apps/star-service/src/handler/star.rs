//! # スターハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /user/stars` - スターを付けたダッシュボード UID の一覧
//! - `POST /user/stars/dashboard/{dashboard_id}` - 数値 ID でスター追加（非推奨）
//! - `POST /user/stars/dashboard/uid/{dashboard_uid}` - UID でスター追加
//! - `DELETE /user/stars/dashboard/{dashboard_id}` - 数値 ID でスター解除（非推奨）
//! - `DELETE /user/stars/dashboard/uid/{dashboard_uid}` - UID でスター解除
//!
//! パスパラメータは文字列のまま受け取り、検証はユースケースで行う。
//! パーセントデコードに失敗したセグメント（不正な UTF-8 など）は空文字列として
//! ユースケースに渡し、他の不正値と同じ JSON エラーレスポンスにする。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::HeaderMap,
    response::IntoResponse,
};
use starboard_domain::org::OrgId;
use starboard_shared::MessageResponse;

use crate::{
    caller::{identity_from_headers, org_id_from_headers},
    error::StarError,
    usecase::StarUseCaseImpl,
};

/// スター API の共有状態
pub struct StarState {
    pub usecase:        StarUseCaseImpl,
    /// `X-Org-Id` ヘッダーがない場合の組織 ID
    pub default_org_id: OrgId,
}

/// パスパラメータを取り出す（デコード失敗時は空文字列）
fn path_segment(path: Result<Path<String>, PathRejection>) -> String {
    match path {
        Ok(Path(segment)) => segment,
        Err(rejection) => {
            tracing::debug!(%rejection, "パスパラメータのデコードに失敗");
            String::new()
        }
    }
}

/// GET /user/stars
///
/// ## レスポンス
///
/// - `200 OK`: UID 文字列の配列（順序不定）
/// - `400 Bad Request`: ユーザーに解決できない呼び出し元
/// - `500 Internal Server Error`: ストアの失敗
#[tracing::instrument(skip_all)]
pub async fn list_stars(
    State(state): State<Arc<StarState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, StarError> {
    let identity = identity_from_headers(&headers);

    let stars = state.usecase.list_stars(&identity).await?;

    Ok(Json(stars.into_uid_strings()))
}

/// POST /user/stars/dashboard/{dashboard_id}
#[tracing::instrument(skip_all)]
pub async fn star_dashboard(
    State(state): State<Arc<StarState>>,
    dashboard_id: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, StarError> {
    let dashboard_id = path_segment(dashboard_id);
    let identity = identity_from_headers(&headers);

    state
        .usecase
        .star_by_legacy_id(&identity, &dashboard_id)
        .await?;

    Ok(Json(MessageResponse::new("Dashboard starred!")))
}

/// POST /user/stars/dashboard/uid/{dashboard_uid}
///
/// ## レスポンス
///
/// - `200 OK`: `{"message": "Dashboard starred!"}`
/// - `400 Bad Request`: 不正な UID・組織 ID、ユーザーに解決できない呼び出し元
/// - `404 Not Found`: 組織内にダッシュボードが存在しない
/// - `500 Internal Server Error`: ストアの失敗
#[tracing::instrument(skip_all)]
pub async fn star_dashboard_by_uid(
    State(state): State<Arc<StarState>>,
    dashboard_uid: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, StarError> {
    let dashboard_uid = path_segment(dashboard_uid);
    let identity = identity_from_headers(&headers);
    let org_id = org_id_from_headers(&headers, state.default_org_id)?;

    state
        .usecase
        .star_by_uid(&identity, &dashboard_uid, org_id)
        .await?;

    Ok(Json(MessageResponse::new("Dashboard starred!")))
}

/// DELETE /user/stars/dashboard/{dashboard_id}
#[tracing::instrument(skip_all)]
pub async fn unstar_dashboard(
    State(state): State<Arc<StarState>>,
    dashboard_id: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, StarError> {
    let dashboard_id = path_segment(dashboard_id);
    let identity = identity_from_headers(&headers);

    state
        .usecase
        .unstar_by_legacy_id(&identity, &dashboard_id)
        .await?;

    Ok(Json(MessageResponse::new("Dashboard unstarred")))
}

/// DELETE /user/stars/dashboard/uid/{dashboard_uid}
#[tracing::instrument(skip_all)]
pub async fn unstar_dashboard_by_uid(
    State(state): State<Arc<StarState>>,
    dashboard_uid: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, StarError> {
    let dashboard_uid = path_segment(dashboard_uid);
    let identity = identity_from_headers(&headers);
    let org_id = org_id_from_headers(&headers, state.default_org_id)?;

    state
        .usecase
        .unstar_by_uid(&identity, &dashboard_uid, org_id)
        .await?;

    Ok(Json(MessageResponse::new("Dashboard unstarred")))
}
