//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換はサービス側の責務（shared に axum 依存を入れない）
//! - JSON 形状は `{ "status": 400, "message": "..." }`

use serde::{Deserialize, Serialize};

/// エラーレスポンス
///
/// `status` は HTTP ステータスコード、`message` は人間可読なメッセージ。
/// 内部エラーの詳細（DB エラーなど）はログにのみ出力し、ここには含めない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   pub status:  u16,
   pub message: String,
}

impl ErrorResponse {
   /// 汎用コンストラクタ
   pub fn new(status: u16, message: impl Into<String>) -> Self {
      Self {
         status,
         message: message.into(),
      }
   }

   /// 400 Bad Request
   pub fn bad_request(message: impl Into<String>) -> Self {
      Self::new(400, message)
   }

   /// 404 Not Found
   pub fn not_found(message: impl Into<String>) -> Self {
      Self::new(404, message)
   }

   /// 500 Internal Server Error
   pub fn internal_error(message: impl Into<String>) -> Self {
      Self::new(500, message)
   }

   /// 503 Service Unavailable
   pub fn service_unavailable(message: impl Into<String>) -> Self {
      Self::new(503, message)
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_new_で全フィールドが正しく設定される() {
      let error = ErrorResponse::new(418, "I'm a teapot");

      assert_eq!(error.status, 418);
      assert_eq!(error.message, "I'm a teapot");
   }

   #[test]
   fn test_jsonシリアライズでstatusとmessageのみを出力する() {
      let error = ErrorResponse::not_found("Dashboard not found");
      let json = serde_json::to_value(&error).unwrap();

      assert_eq!(
         json,
         serde_json::json!({
            "status": 404,
            "message": "Dashboard not found"
         })
      );
   }

   #[test]
   fn test_全便利コンストラクタのstatusが正しい() {
      assert_eq!(ErrorResponse::bad_request("").status, 400);
      assert_eq!(ErrorResponse::not_found("").status, 404);
      assert_eq!(ErrorResponse::internal_error("").status, 500);
      assert_eq!(ErrorResponse::service_unavailable("").status, 503);
   }

   #[test]
   fn test_jsonデシリアライズが正しく動作する() {
      let json = r#"{"status": 400, "message": "Invalid dashboard UID"}"#;
      let error: ErrorResponse = serde_json::from_str(json).unwrap();

      assert_eq!(error, ErrorResponse::bad_request("Invalid dashboard UID"));
   }
}
