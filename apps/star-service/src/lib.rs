//! # Star Service ライブラリ
//!
//! ダッシュボードのスター API を提供する。
//! バイナリ（`main.rs`）と統合テストの双方からルーターを組み立てられるよう、
//! 各モジュールを公開する。

pub mod app_builder;
pub mod caller;
pub mod config;
pub mod deprecation;
pub mod error;
pub mod handler;
pub mod usecase;
