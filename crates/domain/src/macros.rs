/// 正の整数（i64）をラップする ID 型を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`i64` をラップ）
/// - `derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)`
/// - `new()`: 0 以下を `DomainError::Validation` で拒否する
/// - `as_i64()`: 内部値の取得
///
/// # 使用例
///
/// ```rust
/// use starboard_domain::user::UserId;
///
/// let id = UserId::new(42).unwrap();
/// assert_eq!(id.as_i64(), 42);
/// assert!(UserId::new(0).is_err());
/// ```
macro_rules! define_i64_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[display("{_0}")]
        $vis struct $Name(i64);

        impl $Name {
            /// 正の整数から ID を作成する
            pub fn new(value: i64) -> Result<Self, $crate::DomainError> {
                if value <= 0 {
                    return Err($crate::DomainError::Validation(format!(
                        "{}は正の整数である必要があります: {}",
                        $label, value
                    )));
                }
                Ok(Self(value))
            }

            /// 内部の整数値を取得する
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }
    };
}
