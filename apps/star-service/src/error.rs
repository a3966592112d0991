//! # Star Service エラー定義
//!
//! Star Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! クライアントに返すのは人間向けのメッセージのみ。
//! 下位のインフラエラーは `#[source]` として保持し、ログにだけ出力する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use starboard_domain::DomainError;
use starboard_infra::InfraError;
use starboard_shared::{ErrorResponse, event_log::error};
use thiserror::Error;

/// ユーザー・サービスアカウント以外の呼び出し元に返すメッセージ
pub const INVALID_CALLER_MESSAGE: &str = "Only users and service accounts can star dashboards";

/// ダッシュボードが解決できない場合のメッセージ
pub const DASHBOARD_NOT_FOUND_MESSAGE: &str = "Dashboard not found";

/// Star Service で発生するエラー
#[derive(Debug, Error)]
pub enum StarError {
    /// 不正な入力（パスパラメータ、ヘッダー）
    #[error("{0}")]
    InvalidInput(String),

    /// ユーザーに解決できない呼び出し元
    #[error("Only users and service accounts can star dashboards")]
    InvalidCaller {
        /// 呼び出し元の型付き識別子
        identity: String,
    },

    /// ダッシュボードが見つからない
    #[error("{0}")]
    NotFound(String),

    /// 協調者（ストア）の失敗
    #[error("{message}")]
    Internal {
        message: &'static str,
        #[source]
        source:  InfraError,
    },
}

impl StarError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn internal(message: &'static str, source: InfraError) -> Self {
        Self::Internal { message, source }
    }

    /// HTTP ステータスコード
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::InvalidCaller { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for StarError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::InvalidInput(msg),
            DomainError::InvalidCaller(identity) => Self::InvalidCaller { identity },
            DomainError::NotFound { .. } => Self::NotFound(DASHBOARD_NOT_FOUND_MESSAGE.to_string()),
        }
    }
}

impl IntoResponse for StarError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Internal { message, source } => {
                tracing::error!(
                    error.category = error::category::INFRASTRUCTURE,
                    error.kind = error::kind::DATABASE,
                    span_trace = %source.span_trace(),
                    "{}: {}",
                    message,
                    source
                );
            }
            Self::InvalidCaller { identity } => {
                tracing::debug!(%identity, "ユーザーに解決できない呼び出し元");
            }
            Self::InvalidInput(_) | Self::NotFound(_) => {}
        }

        let body = ErrorResponse::new(status.as_u16(), self.to_string());
        (status, Json(body)).into_response()
    }
}
