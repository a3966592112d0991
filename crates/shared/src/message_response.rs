//! # メッセージレスポンス
//!
//! 更新系エンドポイントの成功レスポンス `{ "message": "..." }` を提供する。

use serde::{Deserialize, Serialize};

/// 成功メッセージのみを返すレスポンス型
///
/// ## 使用例
///
/// ```
/// use starboard_shared::MessageResponse;
///
/// let response = MessageResponse::new("Dashboard starred!");
/// assert_eq!(response.message, "Dashboard starred!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// 新しい `MessageResponse` を作成する
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
