//! # DashboardRepository
//!
//! スター操作の前にダッシュボードの存在を確認するための読み取り専用リポジトリ。
//! 検索は常に組織スコープで行う。

use async_trait::async_trait;
use starboard_domain::{
    dashboard::{Dashboard, DashboardId, DashboardRef, DashboardUid},
    org::OrgId,
};
use sqlx::PgPool;

use crate::error::InfraError;

/// ダッシュボードリポジトリトレイト
#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// 組織内のダッシュボードを数値 ID または UID で検索する
    async fn find_by_ref(
        &self,
        org_id: OrgId,
        dashboard_ref: &DashboardRef,
    ) -> Result<Option<Dashboard>, InfraError>;
}

/// PostgreSQL 実装の DashboardRepository
#[derive(Debug, Clone)]
pub struct PostgresDashboardRepository {
    pool: PgPool,
}

impl PostgresDashboardRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

type DashboardRow = (i64, i64, String, String);

fn into_dashboard((id, org_id, uid, title): DashboardRow) -> Result<Dashboard, InfraError> {
    let id = DashboardId::new(id).map_err(|e| InfraError::unexpected(e.to_string()))?;
    let org_id = OrgId::new(org_id).map_err(|e| InfraError::unexpected(e.to_string()))?;
    let uid = DashboardUid::new(uid).map_err(|e| InfraError::unexpected(e.to_string()))?;
    Ok(Dashboard::new(id, uid, org_id, title))
}

#[async_trait]
impl DashboardRepository for PostgresDashboardRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(%org_id, %dashboard_ref))]
    async fn find_by_ref(
        &self,
        org_id: OrgId,
        dashboard_ref: &DashboardRef,
    ) -> Result<Option<Dashboard>, InfraError> {
        let row: Option<DashboardRow> = match dashboard_ref {
            DashboardRef::ById(id) => {
                sqlx::query_as(
                    "SELECT id, org_id, uid, title FROM dashboard WHERE org_id = $1 AND id = $2",
                )
                .bind(org_id.as_i64())
                .bind(id.as_i64())
                .fetch_optional(&self.pool)
                .await?
            }
            DashboardRef::ByUid(uid) => {
                sqlx::query_as(
                    "SELECT id, org_id, uid, title FROM dashboard WHERE org_id = $1 AND uid = $2",
                )
                .bind(org_id.as_i64())
                .bind(uid.as_str())
                .fetch_optional(&self.pool)
                .await?
            }
        };

        row.map(into_dashboard).transpose()
    }
}
