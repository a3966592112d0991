//! # 呼び出し元コンテキスト
//!
//! 認証は上流のプロキシが担当し、結果を以下のヘッダーで渡す:
//!
//! - `X-Identity-Id`: 型付き識別子（例: `user:42`）。省略時は匿名
//! - `X-Org-Id`: 組織 ID。省略時は設定の既定値

use axum::http::HeaderMap;
use starboard_domain::{identity::Identity, org::OrgId};

use crate::error::StarError;

pub const IDENTITY_HEADER: &str = "x-identity-id";
pub const ORG_HEADER: &str = "x-org-id";

/// `X-Identity-Id` ヘッダーから呼び出し元を解決する
pub fn identity_from_headers(headers: &HeaderMap) -> Identity {
    match headers.get(IDENTITY_HEADER) {
        Some(value) => Identity::parse(&String::from_utf8_lossy(value.as_bytes())),
        None => Identity::anonymous(),
    }
}

/// `X-Org-Id` ヘッダーから組織 ID を解決する
///
/// # エラー
///
/// 整数でない、または 0 以下の場合は `StarError::InvalidInput`。
pub fn org_id_from_headers(headers: &HeaderMap, default: OrgId) -> Result<OrgId, StarError> {
    let Some(value) = headers.get(ORG_HEADER) else {
        return Ok(default);
    };

    value
        .to_str()
        .ok()
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .and_then(|id| OrgId::new(id).ok())
        .ok_or_else(|| StarError::invalid_input("Invalid org ID"))
}
