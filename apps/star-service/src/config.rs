//! # Star Service 設定
//!
//! 環境変数から Star Service サーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `STAR_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `STAR_PORT` | **Yes** | ポート番号 |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `STAR_DEFAULT_ORG_ID` | No | `X-Org-Id` ヘッダー省略時の組織 ID（デフォルト: `1`） |
//!
//! ログ形式（`LOG_FORMAT`）は [`starboard_shared::observability::TracingConfig`] が読む。

use std::env;

use starboard_domain::org::OrgId;
use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません（.env を確認してください）")]
    Missing(&'static str),

    /// 環境変数の値が不正
    #[error("{name} の値が不正です: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Star Service サーバーの設定
#[derive(Debug, Clone)]
pub struct StarConfig {
    /// バインドアドレス
    pub host:           String,
    /// ポート番号
    pub port:           u16,
    /// データベース接続 URL
    pub database_url:   String,
    /// `X-Org-Id` ヘッダーがない場合に使う組織 ID
    pub default_org_id: OrgId,
}

impl StarConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー検索関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("STAR_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = lookup("STAR_PORT").ok_or(ConfigError::Missing("STAR_PORT"))?;
        let port = port.parse().map_err(|_| ConfigError::Invalid {
            name:  "STAR_PORT",
            value: port,
        })?;

        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let raw_org_id = lookup("STAR_DEFAULT_ORG_ID").unwrap_or_else(|| "1".to_string());
        let default_org_id = raw_org_id
            .parse::<i64>()
            .ok()
            .and_then(|value| OrgId::new(value).ok())
            .ok_or_else(|| ConfigError::Invalid {
                name:  "STAR_DEFAULT_ORG_ID",
                value: raw_org_id.clone(),
            })?;

        Ok(Self {
            host,
            port,
            database_url,
            default_org_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_必須項目のみで既定値が補われる() {
        let config = StarConfig::from_lookup(lookup_from(&[
            ("STAR_PORT", "3100"),
            ("DATABASE_URL", "postgres://localhost/starboard"),
        ]))
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3100);
        assert_eq!(config.default_org_id.as_i64(), 1);
    }

    #[test]
    fn test_既定の組織idを上書きできる() {
        let config = StarConfig::from_lookup(lookup_from(&[
            ("STAR_HOST", "127.0.0.1"),
            ("STAR_PORT", "3100"),
            ("DATABASE_URL", "postgres://localhost/starboard"),
            ("STAR_DEFAULT_ORG_ID", "7"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.default_org_id.as_i64(), 7);
    }

    #[test]
    fn test_ポート未設定はmissingになる() {
        let result = StarConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x")]));

        assert!(matches!(result, Err(ConfigError::Missing("STAR_PORT"))));
    }

    #[test]
    fn test_数値でないポートはinvalidになる() {
        let result = StarConfig::from_lookup(lookup_from(&[
            ("STAR_PORT", "http"),
            ("DATABASE_URL", "postgres://x"),
        ]));

        assert!(matches!(
            result,
            Err(ConfigError::Invalid { name: "STAR_PORT", .. })
        ));
    }

    #[test]
    fn test_0以下の既定組織idはinvalidになる() {
        let result = StarConfig::from_lookup(lookup_from(&[
            ("STAR_PORT", "3100"),
            ("DATABASE_URL", "postgres://x"),
            ("STAR_DEFAULT_ORG_ID", "0"),
        ]));

        assert!(matches!(
            result,
            Err(ConfigError::Invalid { name: "STAR_DEFAULT_ORG_ID", .. })
        ));
    }
}
