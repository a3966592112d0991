//! # スターユースケース
//!
//! ダッシュボードのスター追加・解除・一覧を実装する。
//!
//! ## 検証順序
//!
//! | 操作 | 順序 |
//! |------|------|
//! | 数値 ID 指定（レガシー） | 非推奨警告 → ID パース → ID が正 → 呼び出し元解決 → ストア |
//! | UID 指定 | (ハンドラ) 組織 ID ヘッダー → UID 非空 → 呼び出し元解決 → ダッシュボード検索（追加のみ）→ ストア |
//! | 一覧 | 呼び出し元解決 → ストア |
//!
//! UID 指定の組織 ID はハンドラが `X-Org-Id` ヘッダーから解決するため、
//! 不正な組織 ID は呼び出し元や UID の不正より先に 400 となる。
//! 検証に失敗した場合、協調者は一切呼び出さない。

use std::sync::Arc;

use starboard_domain::{
    DomainError,
    clock::Clock,
    dashboard::{DashboardId, DashboardRef, DashboardUid},
    identity::Identity,
    org::OrgId,
    star::{Star, UnstarCommand, UserStars},
};
use starboard_infra::repository::{DashboardRepository, StarRepository};
use starboard_shared::{
    event_log::{error, event},
    log_business_event,
};

use crate::{deprecation::DeprecationSink, error::StarError};

const LEGACY_STAR_ROUTE: &str = "POST /user/stars/dashboard/{dashboard_id}";
const STAR_BY_UID_ROUTE: &str = "POST /user/stars/dashboard/uid/{dashboard_uid}";
const LEGACY_UNSTAR_ROUTE: &str = "DELETE /user/stars/dashboard/{dashboard_id}";
const UNSTAR_BY_UID_ROUTE: &str = "DELETE /user/stars/dashboard/uid/{dashboard_uid}";

/// スターユースケースの実装
pub struct StarUseCaseImpl {
    star_repository:      Arc<dyn StarRepository>,
    dashboard_repository: Arc<dyn DashboardRepository>,
    clock:                Arc<dyn Clock>,
    deprecation_sink:     Arc<dyn DeprecationSink>,
}

impl StarUseCaseImpl {
    pub fn new(
        star_repository: Arc<dyn StarRepository>,
        dashboard_repository: Arc<dyn DashboardRepository>,
        clock: Arc<dyn Clock>,
        deprecation_sink: Arc<dyn DeprecationSink>,
    ) -> Self {
        Self {
            star_repository,
            dashboard_repository,
            clock,
            deprecation_sink,
        }
    }

    /// 呼び出し元がスターを付けたダッシュボード UID を一覧する
    pub async fn list_stars(&self, identity: &Identity) -> Result<UserStars, StarError> {
        let user_id = identity.user_identifier()?;

        self.star_repository
            .find_uids_by_user(user_id)
            .await
            .map_err(|e| StarError::internal("Failed to get user stars", e))
    }

    /// 数値 ID でスターを付ける（非推奨）
    ///
    /// ダッシュボードの存在確認は行わない。
    pub async fn star_by_legacy_id(
        &self,
        identity: &Identity,
        raw_id: &str,
    ) -> Result<(), StarError> {
        self.deprecation_sink.warn(LEGACY_STAR_ROUTE, STAR_BY_UID_ROUTE);

        let dashboard_id = parse_legacy_id(raw_id)?;
        let user_id = identity.user_identifier()?;

        let star = Star::legacy(user_id, dashboard_id, self.clock.now());
        self.star_repository
            .add(&star)
            .await
            .map_err(|e| StarError::internal("Failed to star dashboard", e))?;

        log_business_event!(
            event.category = event::category::STAR,
            event.action = event::action::STAR_ADDED,
            event.entity_type = event::entity_type::DASHBOARD,
            event.entity_id = %dashboard_id,
            event.actor_id = %user_id,
            event.result = event::result::SUCCESS,
            "スター追加（数値 ID）"
        );

        Ok(())
    }

    /// UID でスターを付ける
    ///
    /// 組織内でダッシュボードを解決できない場合（検索エラーを含む）は NotFound。
    pub async fn star_by_uid(
        &self,
        identity: &Identity,
        raw_uid: &str,
        org_id: OrgId,
    ) -> Result<(), StarError> {
        let uid = parse_uid(raw_uid)?;
        let user_id = identity.user_identifier()?;

        let dashboard = match self
            .dashboard_repository
            .find_by_ref(org_id, &DashboardRef::ByUid(uid.clone()))
            .await
        {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(
                    error.category = error::category::INFRASTRUCTURE,
                    error.kind = error::kind::DASHBOARD_LOOKUP,
                    %org_id,
                    %uid,
                    "ダッシュボード検索に失敗: {}",
                    e
                );
                None
            }
        }
        .ok_or_else(|| DomainError::NotFound {
            entity_type: "Dashboard",
            id:          uid.to_string(),
        })?;

        let star = Star::for_dashboard(user_id, &dashboard, org_id, self.clock.now());
        self.star_repository
            .add(&star)
            .await
            .map_err(|e| StarError::internal("Failed to star dashboard", e))?;

        log_business_event!(
            event.category = event::category::STAR,
            event.action = event::action::STAR_ADDED,
            event.entity_type = event::entity_type::DASHBOARD,
            event.entity_id = %uid,
            event.actor_id = %user_id,
            event.org_id = %org_id,
            event.result = event::result::SUCCESS,
            "スター追加"
        );

        Ok(())
    }

    /// 数値 ID でスターを外す（非推奨）
    pub async fn unstar_by_legacy_id(
        &self,
        identity: &Identity,
        raw_id: &str,
    ) -> Result<(), StarError> {
        self.deprecation_sink.warn(LEGACY_UNSTAR_ROUTE, UNSTAR_BY_UID_ROUTE);

        let dashboard_id = parse_legacy_id(raw_id)?;
        let user_id = identity.user_identifier()?;

        self.star_repository
            .delete(&UnstarCommand::legacy(user_id, dashboard_id))
            .await
            .map_err(|e| StarError::internal("Failed to unstar dashboard", e))?;

        log_business_event!(
            event.category = event::category::STAR,
            event.action = event::action::STAR_REMOVED,
            event.entity_type = event::entity_type::DASHBOARD,
            event.entity_id = %dashboard_id,
            event.actor_id = %user_id,
            event.result = event::result::SUCCESS,
            "スター解除（数値 ID）"
        );

        Ok(())
    }

    /// UID でスターを外す
    ///
    /// ダッシュボードの存在確認は行わない。
    pub async fn unstar_by_uid(
        &self,
        identity: &Identity,
        raw_uid: &str,
        org_id: OrgId,
    ) -> Result<(), StarError> {
        let uid = parse_uid(raw_uid)?;
        let user_id = identity.user_identifier()?;

        self.star_repository
            .delete(&UnstarCommand::by_uid(user_id, uid.clone(), org_id))
            .await
            .map_err(|e| StarError::internal("Failed to unstar dashboard", e))?;

        log_business_event!(
            event.category = event::category::STAR,
            event.action = event::action::STAR_REMOVED,
            event.entity_type = event::entity_type::DASHBOARD,
            event.entity_id = %uid,
            event.actor_id = %user_id,
            event.org_id = %org_id,
            event.result = event::result::SUCCESS,
            "スター解除"
        );

        Ok(())
    }
}

/// パスの数値 ID を検証する
fn parse_legacy_id(raw_id: &str) -> Result<DashboardId, StarError> {
    let id: i64 = raw_id
        .parse()
        .map_err(|_| StarError::invalid_input("Invalid dashboard ID"))?;
    DashboardId::new(id).map_err(|_| StarError::invalid_input("Missing dashboard id"))
}

/// パスの UID を検証する
fn parse_uid(raw_uid: &str) -> Result<DashboardUid, StarError> {
    DashboardUid::new(raw_uid).map_err(|_| StarError::invalid_input("Invalid dashboard UID"))
}
