//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、検証とビジネスロジックはユースケースに委譲

pub mod health;
pub mod star;

pub use health::{ReadinessState, health_check, readiness_check};
pub use star::{
    StarState,
    list_stars,
    star_dashboard,
    star_dashboard_by_uid,
    unstar_dashboard,
    unstar_dashboard_by_uid,
};
