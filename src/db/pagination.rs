use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db::error::Result;

/// 分页默认每页条数 / default items per page
pub const DEFAULT_PAGE_SIZE: i64 = 30;

/// 分页每页条数上限 / max items per page
pub const MAX_PAGE_SIZE: i64 = 1000;

/// 分页能力集：查询构建器只需支持 offset/limit 链式调用
/// Pagination capability set: a query builder only needs chainable offset/limit
pub trait Paged: Sized {
    fn offset(self, n: i64) -> Self;
    fn limit(self, n: i64) -> Self;
}

/// 通用分页容器 / Generic pagination container
///
/// `page`/`page_size` 来自请求（JSON、表单或查询串），`total` 由调用方
/// 以计数查询回填，`items` 为当前页结果
/// `page`/`page_size` come from the request (JSON, form or query string),
/// `total` is filled back by the caller from a count query, `items` holds
/// the current page of results
///
/// 每次请求新建一个实例；`paginate` 会原地修正字段，复用实例会依赖调用顺序
/// Build one per request; `paginate` normalizes fields in place, so reuse
/// is order-dependent
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Pagination<T> {
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub page_size: i64,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub items: Vec<T>,
}

impl<T> Default for Pagination<T> {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 0,
            total: 0,
            items: Vec::new(),
        }
    }
}

impl<T> Pagination<T> {
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page,
            page_size,
            ..Self::default()
        }
    }

    /// 从查询串或表单体解析分页参数 / parse params from a query string or form body
    ///
    /// 缺失字段取零值，由 `paginate` 统一修正
    /// Missing fields default to zero and are normalized by `paginate`
    pub fn from_query(qs: &str) -> Result<Self>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        Ok(serde_urlencoded::from_str(qs)?)
    }

    /// 将 page/page_size 编码为查询串 / encode page/page_size as a query string
    pub fn to_query(&self) -> Result<String> {
        Ok(serde_urlencoded::to_string([
            ("page", self.page),
            ("page_size", self.page_size),
        ])?)
    }

    /// 总页数 / total page count
    ///
    /// `page_size` 非正时直接返回 0，不做浮点除零
    /// Returns 0 outright for a non-positive `page_size` instead of
    /// float-dividing by zero
    pub fn total_pages(&self) -> i64 {
        if self.page_size <= 0 {
            return 0;
        }
        (self.total as f64 / self.page_size as f64).ceil() as i64
    }

    /// 生成分页作用域 / build the pagination scope
    ///
    /// 先原地修正 `page`/`page_size`，再返回一次性闭包，对查询构建器
    /// 施加 offset/limit
    /// Normalizes `page`/`page_size` in place, then returns a one-shot
    /// closure applying offset/limit to a query builder
    pub fn paginate<Q: Paged>(&mut self) -> impl FnOnce(Q) -> Q {
        self.scope(None)
    }

    /// 同 `paginate`，但以入参覆盖每页条数（不做范围检查）
    /// Like `paginate`, but the given page size wins verbatim (no bounds check)
    pub fn paginate_with<Q: Paged>(&mut self, page_size: i64) -> impl FnOnce(Q) -> Q {
        self.scope(Some(page_size))
    }

    fn scope<Q: Paged>(&mut self, override_size: Option<i64>) -> impl FnOnce(Q) -> Q {
        if self.page <= 0 {
            self.page = 1;
        }

        match override_size {
            Some(n) => self.page_size = n,
            None if self.page_size > MAX_PAGE_SIZE => {
                tracing::warn!(
                    page_size = self.page_size,
                    "page_size 超出上限，截断为 {} / clamped to max",
                    MAX_PAGE_SIZE
                );
                self.page_size = MAX_PAGE_SIZE;
            }
            None if self.page_size <= 0 => self.page_size = DEFAULT_PAGE_SIZE,
            None => {}
        }

        let offset = (self.page - 1) * self.page_size;
        let limit = self.page_size;
        tracing::debug!(page = self.page, page_size = limit, offset, "应用分页 / applying pagination");

        move |q: Q| q.offset(offset).limit(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 记录 offset/limit 调用的假查询构建器 / fake builder recording offset/limit
    #[derive(Debug, Default, PartialEq)]
    struct FakeQuery {
        offset: Option<i64>,
        limit: Option<i64>,
    }

    impl Paged for FakeQuery {
        fn offset(mut self, n: i64) -> Self {
            self.offset = Some(n);
            self
        }
        fn limit(mut self, n: i64) -> Self {
            self.limit = Some(n);
            self
        }
    }

    #[test]
    fn test_page_size_default_when_non_positive() {
        for bad in [0, -1, -5] {
            let mut p = Pagination::<()>::new(2, bad);
            let q = p.paginate()(FakeQuery::default());
            assert_eq!(p.page_size, DEFAULT_PAGE_SIZE);
            assert_eq!(q.offset, Some(30));
            assert_eq!(q.limit, Some(30));
        }
    }

    #[test]
    fn test_page_size_clamped_to_max() {
        let mut p = Pagination::<()>::new(0, 2000);
        p.total = 55;
        let q = p.paginate()(FakeQuery::default());
        assert_eq!(p.page, 1);
        assert_eq!(p.page_size, MAX_PAGE_SIZE);
        assert_eq!(q.offset, Some(0));
        assert_eq!(q.limit, Some(1000));
    }

    #[test]
    fn test_page_size_in_range_unchanged() {
        for ok in [1, 30, 999, 1000] {
            let mut p = Pagination::<()>::new(1, ok);
            let _ = p.paginate()(FakeQuery::default());
            assert_eq!(p.page_size, ok);
        }
    }

    #[test]
    fn test_override_wins_verbatim() {
        let mut p = Pagination::<()>::new(3, 10);
        let q = p.paginate_with(5000)(FakeQuery::default());
        assert_eq!(p.page_size, 5000);
        assert_eq!(q.offset, Some(2 * 5000));
        assert_eq!(q.limit, Some(5000));
    }

    #[test]
    fn test_page_normalized_to_one() {
        for bad in [0, -1, -42] {
            let mut p = Pagination::<()>::new(bad, 30);
            let q = p.paginate()(FakeQuery::default());
            assert_eq!(p.page, 1);
            assert_eq!(q.offset, Some(0));
        }
    }

    #[test]
    fn test_offset_formula() {
        let mut p = Pagination::<()>::new(2, -5);
        let q = p.paginate()(FakeQuery::default());
        // (2 - 1) * 30
        assert_eq!(q.offset, Some(30));
    }

    #[test]
    fn test_total_pages_rounding() {
        let mut p = Pagination::<()>::new(1, 30);
        p.total = 0;
        assert_eq!(p.total_pages(), 0);
        p.total = 100;
        assert_eq!(p.total_pages(), 4);
        p.total = 90;
        assert_eq!(p.total_pages(), 3);
        p.total = 1;
        assert_eq!(p.total_pages(), 1);
    }

    #[test]
    fn test_total_pages_zero_page_size() {
        let mut p = Pagination::<()>::new(1, 0);
        p.total = 100;
        assert_eq!(p.total_pages(), 0);
        p.total = 0;
        assert_eq!(p.total_pages(), 0);
    }

    #[test]
    fn test_from_query_partial() {
        let p = Pagination::<()>::from_query("page=2&page_size=50").unwrap();
        assert_eq!(p.page, 2);
        assert_eq!(p.page_size, 50);
        assert_eq!(p.total, 0);
        assert!(p.items.is_empty());

        let p = Pagination::<()>::from_query("page_size=10").unwrap();
        assert_eq!(p.page, 0);
        assert_eq!(p.page_size, 10);
    }

    #[test]
    fn test_to_query_round_trip() {
        let p = Pagination::<()>::new(2, 50);
        assert_eq!(p.to_query().unwrap(), "page=2&page_size=50");
        let back = Pagination::<()>::from_query(&p.to_query().unwrap()).unwrap();
        assert_eq!(back.page, 2);
        assert_eq!(back.page_size, 50);
    }

    #[test]
    fn test_json_field_names() {
        let mut p = Pagination::<i64>::new(1, 30);
        p.total = 2;
        p.items = vec![10, 20];
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["page"], 1);
        assert_eq!(v["page_size"], 30);
        assert_eq!(v["total"], 2);
        assert_eq!(v["items"], serde_json::json!([10, 20]));
    }
}
