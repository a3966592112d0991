//! # ユースケース層
//!
//! Star Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリ・時刻・非推奨警告の出力先を `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラはパスとヘッダーの抽出のみ行い、検証順序はユースケースが決める

pub mod star;

pub use star::StarUseCaseImpl;
