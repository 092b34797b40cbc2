use serde::Serialize;

use crate::db::pagination::Pagination;

/// 分页响应体：附带 total_pages，序列化失败时退化为 null
/// Paged JSON body with total_pages attached; degrades to null on failure
pub fn paged_body<T: Serialize>(p: &Pagination<T>) -> serde_json::Value {
    let mut v = serde_json::to_value(p).unwrap_or(serde_json::Value::Null);
    if let serde_json::Value::Object(ref mut map) = v {
        map.insert(
            "total_pages".to_string(),
            serde_json::Value::from(p.total_pages()),
        );
    }
    v
}
