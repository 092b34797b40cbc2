use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 软删除标记：0 表示未删除，非 0 为删除时刻（Unix 秒）
/// Soft-delete marker: 0 means "not deleted", non-zero is the deletion epoch second
///
/// 删除/恢复的过滤由存储层按索引约定实现，这里只承载取值约定
/// Delete/restore filtering belongs to the storage layer; this type only carries the value convention
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeletedAt(pub i64);

impl DeletedAt {
    /// 未删除 / not deleted
    pub const NULL: DeletedAt = DeletedAt(0);

    /// 以当前时刻构造删除标记 / marker for "deleted now"
    pub fn now() -> Self {
        DeletedAt(chrono::Utc::now().timestamp())
    }

    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    pub fn is_deleted(&self) -> bool {
        self.0 != 0
    }
}

impl From<i64> for DeletedAt {
    fn from(ts: i64) -> Self {
        DeletedAt(ts)
    }
}

/// 基础模型：主键、创建/更新时间与软删除标记
/// Base model: primary key, created/updated timestamps and soft-delete marker
///
/// 可平铺嵌入业务模型 / flatten into a domain record:
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use v_db::db::model::Model;
///
/// #[derive(Serialize, Deserialize)]
/// struct User {
///     #[serde(flatten)]
///     base: Model,
///     name: String,
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct Model {
    /// 主键，由存储层插入时分配，之后不可变
    /// Primary key, assigned by the storage layer on insert, immutable afterwards
    pub id: i64,
    /// 创建时间（Unix 秒），由上层或 ORM 钩子写入
    /// Creation epoch second, written by the caller or mapper hooks
    pub created_at: i64,
    /// 更新时间（Unix 秒）/ last update epoch second
    pub updated_at: i64,
    /// 软删除标记，按约定建索引；未删除时不输出
    /// Soft-delete marker, indexed by convention; omitted from output while unset
    #[serde(default, skip_serializing_if = "DeletedAt::is_null")]
    #[schema(value_type = i64)]
    pub deleted_at: DeletedAt,
}
