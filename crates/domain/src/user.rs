//! # ユーザー
//!
//! スターの所有者を表すユーザー ID を定義する。
//! サービスアカウントもユーザーと同じ ID 空間を共有する。

define_i64_id! {
    /// ユーザー ID（ユーザー / サービスアカウント共通）
    pub struct UserId {
        label: "ユーザー ID",
    }
}
