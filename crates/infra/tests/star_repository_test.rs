//! StarRepository 統合テスト
//!
//! データベースを使用したテスト。sqlx::test マクロがテストごとに
//! 専用のデータベースを作成し、マイグレーションを適用する。
//!
//! 実行方法:
//! ```bash
//! DATABASE_URL=postgres://localhost/starboard \
//!   cargo test -p starboard-infra --test star_repository_test -- --ignored
//! ```

mod common;

use common::{count_stars, insert_dashboard, org_id, test_now, uid, user_id};
use pretty_assertions::assert_eq;
use sqlx::PgPool;
use starboard_domain::{
    dashboard::DashboardId,
    star::{Star, UnstarCommand},
};
use starboard_infra::repository::{PostgresStarRepository, StarRepository};

fn sorted(mut uids: Vec<String>) -> Vec<String> {
    uids.sort();
    uids
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_uid指定のスターを追加して一覧できる(pool: PgPool) {
    let dashboard = insert_dashboard(&pool, 1, "abc", "Overview").await;
    let sut = PostgresStarRepository::new(pool.clone());

    sut.add(&Star::for_dashboard(user_id(1), &dashboard, org_id(1), test_now()))
        .await
        .unwrap();

    let uids = sut.find_uids_by_user(user_id(1)).await.unwrap();
    assert_eq!(uids.into_uid_strings(), vec!["abc".to_string()]);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_同じダッシュボードへの追加はべき等である(pool: PgPool) {
    let dashboard = insert_dashboard(&pool, 1, "abc", "Overview").await;
    let sut = PostgresStarRepository::new(pool.clone());
    let star = Star::for_dashboard(user_id(1), &dashboard, org_id(1), test_now());

    sut.add(&star).await.unwrap();
    sut.add(&star).await.unwrap();

    assert_eq!(count_stars(&pool).await, 1);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_レガシーレコードはダッシュボードのuidで一覧される(pool: PgPool) {
    let dashboard = insert_dashboard(&pool, 1, "legacy-uid", "Legacy").await;
    let sut = PostgresStarRepository::new(pool.clone());

    sut.add(&Star::legacy(user_id(1), dashboard.id(), test_now()))
        .await
        .unwrap();

    let uids = sut.find_uids_by_user(user_id(1)).await.unwrap();
    assert_eq!(uids.into_uid_strings(), vec!["legacy-uid".to_string()]);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_存在しないダッシュボードへのレガシースターは一覧に含まれない(pool: PgPool) {
    let sut = PostgresStarRepository::new(pool.clone());

    sut.add(&Star::legacy(user_id(1), DashboardId::new(999).unwrap(), test_now()))
        .await
        .unwrap();

    assert!(sut.find_uids_by_user(user_id(1)).await.unwrap().is_empty());
    assert_eq!(count_stars(&pool).await, 1);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_レガシーとuid指定の追加は1件にまとまる(pool: PgPool) {
    let dashboard = insert_dashboard(&pool, 1, "abc", "Overview").await;
    let sut = PostgresStarRepository::new(pool.clone());

    sut.add(&Star::legacy(user_id(1), dashboard.id(), test_now()))
        .await
        .unwrap();
    sut.add(&Star::for_dashboard(user_id(1), &dashboard, org_id(1), test_now()))
        .await
        .unwrap();

    assert_eq!(count_stars(&pool).await, 1);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_一覧は他ユーザーのスターを含まない(pool: PgPool) {
    let a = insert_dashboard(&pool, 1, "a", "A").await;
    let b = insert_dashboard(&pool, 1, "b", "B").await;
    let sut = PostgresStarRepository::new(pool.clone());

    sut.add(&Star::for_dashboard(user_id(1), &a, org_id(1), test_now()))
        .await
        .unwrap();
    sut.add(&Star::for_dashboard(user_id(1), &b, org_id(1), test_now()))
        .await
        .unwrap();
    sut.add(&Star::for_dashboard(user_id(2), &b, org_id(1), test_now()))
        .await
        .unwrap();

    let uids = sut.find_uids_by_user(user_id(1)).await.unwrap();
    assert_eq!(sorted(uids.into_uid_strings()), vec!["a".to_string(), "b".to_string()]);
    let uids = sut.find_uids_by_user(user_id(2)).await.unwrap();
    assert_eq!(uids.into_uid_strings(), vec!["b".to_string()]);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_uid指定の削除はレガシーレコードも削除する(pool: PgPool) {
    let dashboard = insert_dashboard(&pool, 1, "abc", "Overview").await;
    let sut = PostgresStarRepository::new(pool.clone());

    sut.add(&Star::legacy(user_id(1), dashboard.id(), test_now()))
        .await
        .unwrap();
    sut.delete(&UnstarCommand::by_uid(user_id(1), uid("abc"), org_id(1)))
        .await
        .unwrap();

    assert_eq!(count_stars(&pool).await, 0);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_uid指定の削除は他の組織のスターを残す(pool: PgPool) {
    let org1 = insert_dashboard(&pool, 1, "shared", "Org1").await;
    let org2 = insert_dashboard(&pool, 2, "shared", "Org2").await;
    let sut = PostgresStarRepository::new(pool.clone());

    sut.add(&Star::for_dashboard(user_id(1), &org1, org_id(1), test_now()))
        .await
        .unwrap();
    sut.add(&Star::for_dashboard(user_id(1), &org2, org_id(2), test_now()))
        .await
        .unwrap();
    sut.delete(&UnstarCommand::by_uid(user_id(1), uid("shared"), org_id(1)))
        .await
        .unwrap();

    assert_eq!(count_stars(&pool).await, 1);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_存在しないスターの削除は成功する(pool: PgPool) {
    let sut = PostgresStarRepository::new(pool.clone());

    let result = sut
        .delete(&UnstarCommand::legacy(user_id(1), DashboardId::new(42).unwrap()))
        .await;

    assert!(result.is_ok());
}
