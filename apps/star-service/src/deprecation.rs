//! # 非推奨ルートの警告
//!
//! 数値 ID 指定のレガシールートは呼び出しのたびに警告を出す。
//! 出力先はユースケースに注入し、テストでは記録用の実装に差し替える。

/// 非推奨警告の出力先
pub trait DeprecationSink: Send + Sync {
    /// `route` が非推奨であり `replacement` を使うべきことを通知する
    fn warn(&self, route: &str, replacement: &str);
}

/// `tracing::warn!` で警告を出力する実装
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDeprecationSink;

impl DeprecationSink for TracingDeprecationSink {
    fn warn(&self, route: &str, replacement: &str) {
        tracing::warn!(
            deprecated.route = route,
            deprecated.replacement = replacement,
            "{} is deprecated, please use {} instead",
            route,
            replacement
        );
    }
}
