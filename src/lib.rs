// v-db 库主入口，按需导出模块
// Library entry: base record template and pagination helpers

pub mod db;
pub use crate::db::error::*;
pub use crate::db::model::*;
pub use crate::db::pagination::*;
pub use crate::db::query::*;

pub mod http;

// 重新导出 tracing 宏，方便上层使用
// Re-export tracing macros for callers' convenience
pub use tracing::{debug, error, info, trace, warn};
