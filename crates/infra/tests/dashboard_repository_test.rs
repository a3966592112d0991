//! DashboardRepository 統合テスト
//!
//! 実行方法:
//! ```bash
//! DATABASE_URL=postgres://localhost/starboard \
//!   cargo test -p starboard-infra --test dashboard_repository_test -- --ignored
//! ```

mod common;

use common::{insert_dashboard, org_id, uid};
use pretty_assertions::assert_eq;
use sqlx::PgPool;
use starboard_domain::dashboard::DashboardRef;
use starboard_infra::repository::{DashboardRepository, PostgresDashboardRepository};

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_uidでダッシュボードを検索できる(pool: PgPool) {
    let expected = insert_dashboard(&pool, 1, "abc", "Overview").await;
    let sut = PostgresDashboardRepository::new(pool);

    let found = sut
        .find_by_ref(org_id(1), &DashboardRef::ByUid(uid("abc")))
        .await
        .unwrap();

    assert_eq!(found, Some(expected));
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_数値idでダッシュボードを検索できる(pool: PgPool) {
    let expected = insert_dashboard(&pool, 1, "abc", "Overview").await;
    let sut = PostgresDashboardRepository::new(pool);

    let found = sut
        .find_by_ref(org_id(1), &DashboardRef::ById(expected.id()))
        .await
        .unwrap();

    assert_eq!(found, Some(expected));
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_他の組織のダッシュボードは見つからない(pool: PgPool) {
    insert_dashboard(&pool, 2, "abc", "Other org").await;
    let sut = PostgresDashboardRepository::new(pool);

    let found = sut
        .find_by_ref(org_id(1), &DashboardRef::ByUid(uid("abc")))
        .await
        .unwrap();

    assert_eq!(found, None);
}
