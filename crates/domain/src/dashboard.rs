//! # ダッシュボード
//!
//! スター対象となるダッシュボードの参照とレコードを定義する。
//!
//! ## 二重アドレッシング
//!
//! ダッシュボードは 2 通りの方法で参照できる:
//!
//! - **数値 ID**（レガシー）: 組織スコープの内部整数 ID。非推奨
//! - **UID**（正規）: 組織をまたいで安定した文字列識別子
//!
//! 両者は [`DashboardRef`] で統一的に扱い、リポジトリの検索メソッドに渡す。

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{DomainError, org::OrgId};

define_i64_id! {
    /// ダッシュボードの数値 ID（レガシー）
    pub struct DashboardId {
        label: "ダッシュボード ID",
    }
}

/// ダッシュボード UID（正規の文字列識別子）
///
/// 空文字列は拒否する。それ以外の形式チェックは行わず、
/// 存在確認はリポジトリ検索に委ねる。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct DashboardUid(String);

impl DashboardUid {
    /// UID を作成する
    ///
    /// # エラー
    ///
    /// 空文字列の場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "ダッシュボード UID は必須です".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

/// ダッシュボード参照（数値 ID または UID）
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DashboardRef {
    #[display("id={_0}")]
    ById(DashboardId),
    #[display("uid={_0}")]
    ByUid(DashboardUid),
}

/// ダッシュボードレコード
///
/// スター機能が必要とする最小限の属性のみを保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    id:     DashboardId,
    uid:    DashboardUid,
    org_id: OrgId,
    title:  String,
}

impl Dashboard {
    pub fn new(id: DashboardId, uid: DashboardUid, org_id: OrgId, title: impl Into<String>) -> Self {
        Self {
            id,
            uid,
            org_id,
            title: title.into(),
        }
    }

    pub fn id(&self) -> DashboardId {
        self.id
    }

    pub fn uid(&self) -> &DashboardUid {
        &self.uid
    }

    pub fn org_id(&self) -> OrgId {
        self.org_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// 参照がこのダッシュボードを指しているか
    pub fn matches(&self, dashboard_ref: &DashboardRef) -> bool {
        match dashboard_ref {
            DashboardRef::ById(id) => self.id == *id,
            DashboardRef::ByUid(uid) => self.uid == *uid,
        }
    }
}
