//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//! | `InvalidCaller` | 400 Bad Request | ユーザー / サービスアカウント以外の呼び出し元 |
//! | `NotFound` | 404 Not Found | エンティティが存在しない |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値がビジネスルールに違反している場合に使用する。
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// 呼び出し元がユーザー識別子に解決できない
    ///
    /// 匿名ユーザー、API キー、レンダラーなど、ユーザーでもサービスアカウントでもない
    /// アイデンティティで個人スコープの操作を行おうとした場合に使用する。
    #[error("呼び出し元をユーザーとして解決できません: {0}")]
    InvalidCaller(String),

    /// エンティティが見つからない
    #[error("{entity_type} が見つかりません: {id}")]
    NotFound {
        /// エンティティの種類（"Dashboard" など）
        entity_type: &'static str,
        /// 検索に使用した識別子
        id:          String,
    },
}
