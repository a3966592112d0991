//! # スター
//!
//! 「このユーザーがこのダッシュボードにスターを付けた」という記録と、
//! その削除コマンド、ユーザーごとのスター集合を定義する。
//!
//! ## 一意性
//!
//! (ユーザー, UID) の組につき有効なスターは高々 1 件。
//! UID を持たないレガシーレコードは (ユーザー, 数値 ID) で一意となる。
//! この制約はストア側で保証し、ドメイン層では検証しない。

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::{
    dashboard::{Dashboard, DashboardId, DashboardUid},
    org::OrgId,
    user::UserId,
};

/// スターレコード
///
/// レガシー経路（数値 ID 指定）で作成されたレコードは UID と組織 ID を持たない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Star {
    user_id:       UserId,
    dashboard_id:  DashboardId,
    dashboard_uid: Option<DashboardUid>,
    org_id:        Option<OrgId>,
    updated_at:    DateTime<Utc>,
}

impl Star {
    /// 数値 ID のみでスターを作成する（レガシー経路）
    ///
    /// ダッシュボードの存在確認は行わない。
    pub fn legacy(user_id: UserId, dashboard_id: DashboardId, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            dashboard_id,
            dashboard_uid: None,
            org_id: None,
            updated_at: now,
        }
    }

    /// 解決済みのダッシュボードに対してスターを作成する
    pub fn for_dashboard(
        user_id: UserId,
        dashboard: &Dashboard,
        org_id: OrgId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            dashboard_id: dashboard.id(),
            dashboard_uid: Some(dashboard.uid().clone()),
            org_id: Some(org_id),
            updated_at: now,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn dashboard_id(&self) -> DashboardId {
        self.dashboard_id
    }

    pub fn dashboard_uid(&self) -> Option<&DashboardUid> {
        self.dashboard_uid.as_ref()
    }

    pub fn org_id(&self) -> Option<OrgId> {
        self.org_id
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// 同じ一意性キーを持つレコードか
    pub fn same_key(&self, other: &Star) -> bool {
        if self.user_id != other.user_id {
            return false;
        }
        match (&self.dashboard_uid, &other.dashboard_uid) {
            (Some(a), Some(b)) => a == b && self.org_id == other.org_id,
            _ => self.dashboard_id == other.dashboard_id,
        }
    }
}

/// スター解除の対象
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnstarTarget {
    /// 数値 ID 指定（レガシー経路）
    Legacy(DashboardId),
    /// UID + 組織 ID 指定
    Uid { uid: DashboardUid, org_id: OrgId },
}

/// スター解除コマンド
///
/// 対象のスターが存在しなくてもエラーにしない（ストアの振る舞いに委ねる）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnstarCommand {
    pub user_id: UserId,
    pub target:  UnstarTarget,
}

impl UnstarCommand {
    pub fn legacy(user_id: UserId, dashboard_id: DashboardId) -> Self {
        Self {
            user_id,
            target: UnstarTarget::Legacy(dashboard_id),
        }
    }

    pub fn by_uid(user_id: UserId, uid: DashboardUid, org_id: OrgId) -> Self {
        Self {
            user_id,
            target: UnstarTarget::Uid { uid, org_id },
        }
    }

    /// このコマンドがスターレコードを削除対象とするか
    pub fn targets(&self, star: &Star) -> bool {
        if star.user_id != self.user_id {
            return false;
        }
        match &self.target {
            UnstarTarget::Legacy(id) => star.dashboard_id == *id,
            UnstarTarget::Uid { uid, org_id } => {
                star.dashboard_uid.as_ref() == Some(uid) && star.org_id == Some(*org_id)
            }
        }
    }
}

/// ユーザーがスターを付けたダッシュボード UID の集合
///
/// 読み取り専用のビュー。順序は保証しない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserStars {
    uids: HashSet<DashboardUid>,
}

impl UserStars {
    pub fn new(uids: HashSet<DashboardUid>) -> Self {
        Self { uids }
    }

    pub fn contains(&self, uid: &DashboardUid) -> bool {
        self.uids.contains(uid)
    }

    pub fn len(&self) -> usize {
        self.uids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uids.is_empty()
    }

    /// UID 文字列のリストに変換する（順序不定）
    pub fn into_uid_strings(self) -> Vec<String> {
        self.uids.into_iter().map(DashboardUid::into_string).collect()
    }
}

impl FromIterator<DashboardUid> for UserStars {
    fn from_iter<I: IntoIterator<Item = DashboardUid>>(iter: I) -> Self {
        Self {
            uids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn user(id: i64) -> UserId {
        UserId::new(id).unwrap()
    }

    fn dashboard() -> Dashboard {
        Dashboard::new(
            DashboardId::new(42).unwrap(),
            DashboardUid::new("abc123").unwrap(),
            OrgId::new(1).unwrap(),
            "Overview",
        )
    }

    #[test]
    fn test_legacyスターはuidと組織idを持たない() {
        let star = Star::legacy(user(1), DashboardId::new(42).unwrap(), now());

        assert_eq!(star.dashboard_uid(), None);
        assert_eq!(star.org_id(), None);
        assert_eq!(star.dashboard_id().as_i64(), 42);
    }

    #[test]
    fn test_for_dashboardは解決済みの数値idとuidを持つ() {
        let org_id = OrgId::new(1).unwrap();
        let star = Star::for_dashboard(user(1), &dashboard(), org_id, now());

        assert_eq!(star.dashboard_id().as_i64(), 42);
        assert_eq!(star.dashboard_uid().unwrap().as_str(), "abc123");
        assert_eq!(star.org_id(), Some(org_id));
        assert_eq!(star.updated_at(), now());
    }

    #[test]
    fn test_same_key_は別ユーザーを区別する() {
        let org_id = OrgId::new(1).unwrap();
        let a = Star::for_dashboard(user(1), &dashboard(), org_id, now());
        let b = Star::for_dashboard(user(2), &dashboard(), org_id, now());

        assert!(!a.same_key(&b));
        assert!(a.same_key(&a.clone()));
    }

    #[test]
    fn test_uid指定の解除コマンドは同じ組織のスターのみ対象とする() {
        let star = Star::for_dashboard(user(1), &dashboard(), OrgId::new(1).unwrap(), now());

        let same_org = UnstarCommand::by_uid(
            user(1),
            DashboardUid::new("abc123").unwrap(),
            OrgId::new(1).unwrap(),
        );
        let other_org = UnstarCommand::by_uid(
            user(1),
            DashboardUid::new("abc123").unwrap(),
            OrgId::new(2).unwrap(),
        );

        assert!(same_org.targets(&star));
        assert!(!other_org.targets(&star));
    }

    #[test]
    fn test_legacy解除コマンドは数値idで対象を判定する() {
        let star = Star::legacy(user(1), DashboardId::new(42).unwrap(), now());

        assert!(UnstarCommand::legacy(user(1), DashboardId::new(42).unwrap()).targets(&star));
        assert!(!UnstarCommand::legacy(user(2), DashboardId::new(42).unwrap()).targets(&star));
    }

    #[test]
    fn test_user_stars_は重複を持たない() {
        let stars: UserStars = ["a", "b", "a"]
            .into_iter()
            .map(|s| DashboardUid::new(s).unwrap())
            .collect();

        assert_eq!(stars.len(), 2);
        assert!(stars.contains(&DashboardUid::new("a").unwrap()));

        let mut uids = stars.into_uid_strings();
        uids.sort();
        assert_eq!(uids, vec!["a".to_string(), "b".to_string()]);
    }
}
