//! # Starboard ドメイン層
//!
//! ダッシュボードのスター（お気に入り）機能のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **値オブジェクト**: 識別子（UserId, OrgId, DashboardId, DashboardUid）は
//!   Newtype で型安全性を確保し、生成時に検証する
//! - **直和型**: ダッシュボード参照（数値 ID / UID）と呼び出し元の
//!   アイデンティティ種別を enum で表現し、明示的なパターンマッチで扱う
//! - **インフラ非依存**: DB やHTTP フレームワークには一切依存しない
//!
//! ## 依存関係の方向
//!
//! ```text
//! star-service → infra → domain
//!        ↘                ↑
//!          ────────────────
//! ```
//!
//! ## モジュール構成
//!
//! - [`clock`] - 時刻プロバイダ
//! - [`dashboard`] - ダッシュボード参照とダッシュボードレコード
//! - [`error`] - ドメインエラー
//! - [`identity`] - 呼び出し元アイデンティティ
//! - [`org`] - 組織 ID
//! - [`star`] - スターレコードとスター解除コマンド
//! - [`user`] - ユーザー ID
//!
//! ## 使用例
//!
//! ```rust
//! use starboard_domain::{identity::Identity, user::UserId};
//!
//! let identity = Identity::parse("user:42");
//! assert_eq!(identity.user_identifier().unwrap(), UserId::new(42).unwrap());
//! ```

#[macro_use]
mod macros;

pub mod clock;
pub mod dashboard;
pub mod error;
pub mod identity;
pub mod org;
pub mod star;
pub mod user;

pub use error::DomainError;
