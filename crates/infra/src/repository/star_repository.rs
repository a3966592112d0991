//! # StarRepository
//!
//! スターの永続化を担当するリポジトリ。
//!
//! ## 一意性の保証
//!
//! - UID を持たないレガシーレコード: `(user_id, dashboard_id)` で一意
//! - UID を持つレコード: `(user_id, org_id, dashboard_uid)` で一意
//!
//! 追加はべき等。同じキーのスターが既にあれば更新日時のみ更新する。
//! 削除は対象が存在しなくても成功する。

use async_trait::async_trait;
use starboard_domain::{
    dashboard::DashboardUid,
    star::{Star, UnstarCommand, UnstarTarget, UserStars},
    user::UserId,
};
use sqlx::PgPool;

use crate::error::InfraError;

/// スターリポジトリトレイト
#[async_trait]
pub trait StarRepository: Send + Sync {
    /// ユーザーがスターを付けたダッシュボード UID の集合を取得する
    ///
    /// レガシーレコードは数値 ID からダッシュボードの UID を引き当てる。
    /// 引き当てられないレコード（ダッシュボード削除済みなど）は含まない。
    async fn find_uids_by_user(&self, user_id: UserId) -> Result<UserStars, InfraError>;

    /// スターを追加する（べき等）
    async fn add(&self, star: &Star) -> Result<(), InfraError>;

    /// スターを削除する（対象なしでも成功）
    async fn delete(&self, command: &UnstarCommand) -> Result<(), InfraError>;
}

/// PostgreSQL 実装の StarRepository
#[derive(Debug, Clone)]
pub struct PostgresStarRepository {
    pool: PgPool,
}

impl PostgresStarRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StarRepository for PostgresStarRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(%user_id))]
    async fn find_uids_by_user(&self, user_id: UserId) -> Result<UserStars, InfraError> {
        let rows: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT COALESCE(s.dashboard_uid, d.uid)
            FROM star s
            LEFT JOIN dashboard d ON d.id = s.dashboard_id
            WHERE s.user_id = $1
              AND COALESCE(s.dashboard_uid, d.uid) IS NOT NULL
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|uid| {
                DashboardUid::new(uid)
                    .map_err(|e| InfraError::unexpected(format!("不正なダッシュボード UID: {e}")))
            })
            .collect()
    }

    #[tracing::instrument(
        skip_all,
        level = "debug",
        fields(user_id = %star.user_id(), dashboard_id = %star.dashboard_id())
    )]
    async fn add(&self, star: &Star) -> Result<(), InfraError> {
        let mut tx = self.pool.begin().await?;

        // 同じ UID を指す古いレコード（ダッシュボード再作成前の数値 ID）を置き換える
        if let (Some(uid), Some(org_id)) = (star.dashboard_uid(), star.org_id()) {
            sqlx::query(
                r#"
                DELETE FROM star
                WHERE user_id = $1
                  AND org_id = $2
                  AND dashboard_uid = $3
                  AND dashboard_id <> $4
                "#,
            )
            .bind(star.user_id().as_i64())
            .bind(org_id.as_i64())
            .bind(uid.as_str())
            .bind(star.dashboard_id().as_i64())
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query(
            r#"
            INSERT INTO star (user_id, dashboard_id, dashboard_uid, org_id, updated)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id, dashboard_id) DO UPDATE SET
                dashboard_uid = COALESCE(EXCLUDED.dashboard_uid, star.dashboard_uid),
                org_id = COALESCE(EXCLUDED.org_id, star.org_id),
                updated = EXCLUDED.updated
            "#,
        )
        .bind(star.user_id().as_i64())
        .bind(star.dashboard_id().as_i64())
        .bind(star.dashboard_uid().map(DashboardUid::as_str))
        .bind(star.org_id().map(|id| id.as_i64()))
        .bind(star.updated_at())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(user_id = %command.user_id))]
    async fn delete(&self, command: &UnstarCommand) -> Result<(), InfraError> {
        match &command.target {
            UnstarTarget::Legacy(dashboard_id) => {
                sqlx::query("DELETE FROM star WHERE user_id = $1 AND dashboard_id = $2")
                    .bind(command.user_id.as_i64())
                    .bind(dashboard_id.as_i64())
                    .execute(&self.pool)
                    .await?;
            }
            UnstarTarget::Uid { uid, org_id } => {
                // UID を持たないレガシーレコードも数値 ID 経由で削除する
                sqlx::query(
                    r#"
                    DELETE FROM star
                    WHERE user_id = $1
                      AND (
                        (org_id = $2 AND dashboard_uid = $3)
                        OR dashboard_id IN (
                            SELECT id FROM dashboard WHERE org_id = $2 AND uid = $3
                        )
                      )
                    "#,
                )
                .bind(command.user_id.as_i64())
                .bind(org_id.as_i64())
                .bind(uid.as_str())
                .execute(&self.pool)
                .await?;
            }
        }
        Ok(())
    }
}
