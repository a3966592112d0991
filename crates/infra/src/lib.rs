//! # Starboard インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! スター機能が依存する 2 つの協調者（スターストアとダッシュボード検索）を
//! リポジトリトレイトとして定義し、PostgreSQL 実装を提供する。
//! ユースケース層はトレイトにのみ依存するため、テストではインメモリ実装に差し替えられる。
//!
//! ## 依存関係
//!
//! ```text
//! star-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL 接続プールとマイグレーション
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと PostgreSQL 実装
//! - `mock` - インメモリ実装（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use starboard_infra::{db, repository::PostgresStarRepository};
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = db::create_pool("postgres://localhost/starboard").await?;
//!     db::run_migrations(&pool).await?;
//!     let stars = PostgresStarRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
