//! # リポジトリ実装
//!
//! スター機能が依存するストアとダッシュボード検索のトレイトと、
//! その PostgreSQL 実装を提供する。
//!
//! - [`StarRepository`]: スターの追加・削除・一覧
//! - [`DashboardRepository`]: 組織スコープのダッシュボード検索

pub mod dashboard_repository;
pub mod star_repository;

pub use dashboard_repository::{DashboardRepository, PostgresDashboardRepository};
pub use star_repository::{PostgresStarRepository, StarRepository};
