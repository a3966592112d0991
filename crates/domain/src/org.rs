//! # 組織
//!
//! ダッシュボードの所属先である組織（Org）の識別子。
//! UID はこの組織スコープ内で一意となる。

define_i64_id! {
    /// 組織 ID
    pub struct OrgId {
        label: "組織 ID",
    }
}
