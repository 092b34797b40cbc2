use thiserror::Error;

pub type Result<T> = std::result::Result<T, DbError>;

/// 数据辅助层错误：仅分页参数编解码会失败
/// Helper-layer errors: only the pagination parameter codec can fail
#[derive(Debug, Error)]
pub enum DbError {
    #[error("查询串解析错误: {0}")]
    Decode(#[from] serde_urlencoded::de::Error),
    #[error("查询串编码错误: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}
