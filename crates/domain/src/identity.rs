//! # 呼び出し元アイデンティティ
//!
//! リクエストを発行した主体を表す直和型。
//!
//! ## 型付き識別子
//!
//! 上流の認証プロキシは呼び出し元を `"<namespace>:<id>"` 形式で渡す。
//!
//! | 形式 | 解決結果 |
//! |------|----------|
//! | `user:42` | [`Identity::User`] |
//! | `service-account:7` | [`Identity::ServiceAccount`] |
//! | `anonymous:0`, `api-key:3`, `render:0` など | [`Identity::Other`] |
//!
//! `user` / `service-account` 名前空間でも ID が正の整数でなければ
//! [`Identity::Other`] として扱う。スターは個人スコープの操作のため、
//! [`Identity::user_identifier`] が受け入れるのはユーザーとサービスアカウントのみ。

use std::str::FromStr;

use derive_more::Display;
use strum::EnumString;

use crate::{DomainError, user::UserId};

/// 匿名アイデンティティの型付き識別子
pub const ANONYMOUS: &str = "anonymous:0";

/// ユーザー識別子に解決できる名前空間
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
enum UserNamespace {
    #[strum(serialize = "user")]
    User,
    #[strum(serialize = "service-account")]
    ServiceAccount,
}

/// 呼び出し元アイデンティティ
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Identity {
    /// 通常のユーザー
    #[display("user:{_0}")]
    User(UserId),
    /// サービスアカウント
    #[display("service-account:{_0}")]
    ServiceAccount(UserId),
    /// 上記以外（匿名、API キー、不正な形式など）。元の型付き識別子を保持する
    #[display("{_0}")]
    Other(String),
}

impl Identity {
    /// 型付き識別子をパースする
    ///
    /// 失敗しない。解釈できない値は [`Identity::Other`] になり、
    /// スター操作時に [`DomainError::InvalidCaller`] として拒否される。
    pub fn parse(typed_id: &str) -> Self {
        let Some((namespace, id)) = typed_id.split_once(':') else {
            return Self::Other(typed_id.to_string());
        };

        let Ok(namespace) = UserNamespace::from_str(namespace) else {
            return Self::Other(typed_id.to_string());
        };

        let Some(user_id) = id.parse::<i64>().ok().and_then(|v| UserId::new(v).ok()) else {
            return Self::Other(typed_id.to_string());
        };

        match namespace {
            UserNamespace::User => Self::User(user_id),
            UserNamespace::ServiceAccount => Self::ServiceAccount(user_id),
        }
    }

    /// 匿名アイデンティティ
    pub fn anonymous() -> Self {
        Self::Other(ANONYMOUS.to_string())
    }

    /// ユーザー識別子に解決する
    ///
    /// ユーザーとサービスアカウントのみ受け入れ、それ以外は
    /// [`DomainError::InvalidCaller`] を返す。
    pub fn user_identifier(&self) -> Result<UserId, DomainError> {
        match self {
            Self::User(id) | Self::ServiceAccount(id) => Ok(*id),
            Self::Other(typed_id) => Err(DomainError::InvalidCaller(typed_id.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_userの型付き識別子はユーザーに解決される() {
        let identity = Identity::parse("user:42");

        assert_eq!(identity, Identity::User(UserId::new(42).unwrap()));
        assert_eq!(identity.user_identifier().unwrap().as_i64(), 42);
    }

    #[test]
    fn test_service_accountの型付き識別子はユーザー識別子に解決される() {
        let identity = Identity::parse("service-account:7");

        assert_eq!(identity, Identity::ServiceAccount(UserId::new(7).unwrap()));
        assert_eq!(identity.user_identifier().unwrap().as_i64(), 7);
    }

    #[rstest]
    #[case("anonymous:0")]
    #[case("api-key:3")]
    #[case("render:0")]
    #[case("user:abc")]
    #[case("user:0")]
    #[case("user:-5")]
    #[case("user")]
    #[case("")]
    fn test_ユーザー以外はinvalid_callerになる(#[case] typed_id: &str) {
        let identity = Identity::parse(typed_id);

        assert_eq!(identity, Identity::Other(typed_id.to_string()));
        assert!(matches!(
            identity.user_identifier(),
            Err(DomainError::InvalidCaller(_))
        ));
    }

    #[test]
    fn test_匿名アイデンティティはinvalid_callerになる() {
        assert!(Identity::anonymous().user_identifier().is_err());
    }

    #[test]
    fn test_displayは型付き識別子を復元する() {
        assert_eq!(Identity::parse("user:42").to_string(), "user:42");
        assert_eq!(
            Identity::parse("service-account:7").to_string(),
            "service-account:7"
        );
        assert_eq!(Identity::parse("api-key:3").to_string(), "api-key:3");
    }
}
