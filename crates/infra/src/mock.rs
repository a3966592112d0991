//! # テスト用モックリポジトリ
//!
//! ユースケーステスト・ルーターテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! starboard-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! 呼び出し回数を記録するため、「ストアが呼ばれていないこと」を検証できる。
//! `failing()` で生成したモックはすべての呼び出しで [`InfraError`] を返す。

use std::sync::{
    Arc,
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use starboard_domain::{
    dashboard::{Dashboard, DashboardRef, DashboardUid},
    org::OrgId,
    star::{Star, UnstarCommand, UnstarTarget, UserStars},
    user::UserId,
};

use crate::{
    error::InfraError,
    repository::{DashboardRepository, StarRepository},
};

// ===== MockDashboardRepository =====

#[derive(Clone, Default)]
pub struct MockDashboardRepository {
    dashboards:   Arc<Mutex<Vec<Dashboard>>>,
    lookup_calls: Arc<AtomicUsize>,
    failing:      bool,
}

impl MockDashboardRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// すべての検索でエラーを返すモック
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn add_dashboard(&self, dashboard: Dashboard) {
        self.dashboards.lock().unwrap().push(dashboard);
    }

    /// `find_by_ref` の呼び出し回数
    pub fn lookup_calls(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }

    fn snapshot(&self) -> Vec<Dashboard> {
        self.dashboards.lock().unwrap().clone()
    }
}

#[async_trait]
impl DashboardRepository for MockDashboardRepository {
    async fn find_by_ref(
        &self,
        org_id: OrgId,
        dashboard_ref: &DashboardRef,
    ) -> Result<Option<Dashboard>, InfraError> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(InfraError::unexpected("dashboard lookup failed"));
        }
        Ok(self
            .dashboards
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.org_id() == org_id && d.matches(dashboard_ref))
            .cloned())
    }
}

// ===== MockStarRepository =====

#[derive(Clone, Default)]
pub struct MockStarRepository {
    stars:        Arc<Mutex<Vec<Star>>>,
    dashboards:   MockDashboardRepository,
    add_calls:    Arc<AtomicUsize>,
    delete_calls: Arc<AtomicUsize>,
    list_calls:   Arc<AtomicUsize>,
    failing:      bool,
}

impl MockStarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// レガシーレコードの UID 解決に使うダッシュボードを共有する
    pub fn with_dashboards(dashboards: &MockDashboardRepository) -> Self {
        Self {
            dashboards: dashboards.clone(),
            ..Self::default()
        }
    }

    /// すべての呼び出しでエラーを返すモック
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// 保存済みのスターのスナップショット
    pub fn stars(&self) -> Vec<Star> {
        self.stars.lock().unwrap().clone()
    }

    pub fn add_calls(&self) -> usize {
        self.add_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn resolve_uid(&self, star: &Star) -> Option<DashboardUid> {
        if let Some(uid) = star.dashboard_uid() {
            return Some(uid.clone());
        }
        self.dashboards
            .snapshot()
            .into_iter()
            .find(|d| d.id() == star.dashboard_id())
            .map(|d| d.uid().clone())
    }
}

#[async_trait]
impl StarRepository for MockStarRepository {
    async fn find_uids_by_user(&self, user_id: UserId) -> Result<UserStars, InfraError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(InfraError::unexpected("star store unavailable"));
        }
        Ok(self
            .stars()
            .iter()
            .filter(|s| s.user_id() == user_id)
            .filter_map(|s| self.resolve_uid(s))
            .collect())
    }

    async fn add(&self, star: &Star) -> Result<(), InfraError> {
        self.add_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(InfraError::unexpected("star store unavailable"));
        }
        let mut stars = self.stars.lock().unwrap();
        stars.retain(|s| {
            !(s.same_key(star)
                || (s.user_id() == star.user_id() && s.dashboard_id() == star.dashboard_id()))
        });
        stars.push(star.clone());
        Ok(())
    }

    async fn delete(&self, command: &UnstarCommand) -> Result<(), InfraError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(InfraError::unexpected("star store unavailable"));
        }
        let legacy_ids: Vec<_> = match &command.target {
            UnstarTarget::Legacy(_) => Vec::new(),
            UnstarTarget::Uid { uid, org_id } => self
                .dashboards
                .snapshot()
                .into_iter()
                .filter(|d| d.org_id() == *org_id && d.uid() == uid)
                .map(|d| d.id())
                .collect(),
        };
        self.stars.lock().unwrap().retain(|s| {
            let by_legacy_id = s.user_id() == command.user_id && legacy_ids.contains(&s.dashboard_id());
            !(command.targets(s) || by_legacy_id)
        });
        Ok(())
    }
}
