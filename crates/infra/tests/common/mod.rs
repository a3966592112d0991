//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するシードデータとヘルパー。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use starboard_domain::{
    dashboard::{Dashboard, DashboardId, DashboardUid},
    org::OrgId,
    user::UserId,
};

/// テスト用の固定日時
pub fn test_now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

pub fn user_id(id: i64) -> UserId {
    UserId::new(id).unwrap()
}

pub fn org_id(id: i64) -> OrgId {
    OrgId::new(id).unwrap()
}

pub fn uid(value: &str) -> DashboardUid {
    DashboardUid::new(value).unwrap()
}

/// ダッシュボードを直接 INSERT し、採番された数値 ID で組み立てたエンティティを返す
pub async fn insert_dashboard(pool: &PgPool, org: i64, uid_value: &str, title: &str) -> Dashboard {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO dashboard (org_id, uid, title) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(org)
    .bind(uid_value)
    .bind(title)
    .fetch_one(pool)
    .await
    .unwrap();

    Dashboard::new(DashboardId::new(id).unwrap(), uid(uid_value), org_id(org), title)
}

/// star テーブルの件数
pub async fn count_stars(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM star")
        .fetch_one(pool)
        .await
        .unwrap()
}
