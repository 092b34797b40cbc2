use sqlx::{Postgres, QueryBuilder};

use crate::db::pagination::Paged;

/// SELECT 语句构建器（PostgreSQL，仅拼装不执行）
/// SELECT statement builder (PostgreSQL, renders text, never executes)
///
/// 绑定值以 `$n` 占位符呈现，连接与执行交给上层
/// Bind values render as `$n` placeholders; connecting and executing
/// belong to the caller's storage layer
pub struct SelectPg {
    table: String,
    select_cols: Option<Vec<String>>,
    where_parts: Vec<WherePart>,
    order_sql: String,
    limit_sql: String,
    offset_sql: String,
}

enum WherePart {
    Raw(String),
    Bind(serde_json::Value),
}

impl SelectPg {
    /// 指定目标表 / target table
    pub fn table(name: &str) -> Self {
        Self {
            table: name.to_string(),
            select_cols: None,
            where_parts: Vec::new(),
            order_sql: String::new(),
            limit_sql: String::new(),
            offset_sql: String::new(),
        }
    }

    /// 选择列，默认 `*` / select columns, default `*`
    pub fn select(mut self, cols: &[&str]) -> Self {
        self.select_cols = Some(cols.iter().map(|s| s.to_string()).collect());
        self
    }

    /// where 等值 / where equals
    pub fn where_eq(mut self, col: &str, val: impl Into<serde_json::Value>) -> Self {
        if self.where_parts.is_empty() {
            self.where_parts.push(WherePart::Raw(" WHERE ".into()));
        } else {
            self.where_parts.push(WherePart::Raw(" AND ".into()));
        }
        self.where_parts
            .push(WherePart::Raw(format!("\"{}\" = ", col)));
        self.where_parts.push(WherePart::Bind(val.into()));
        self
    }

    /// 排序 / order by
    pub fn order_by(mut self, expr: &str) -> Self {
        self.order_sql = format!(" ORDER BY {}", expr);
        self
    }

    /// 生成语句文本 / render the statement text
    pub fn sql(&self) -> String {
        self.build().sql().to_string()
    }

    /// 生成带绑定值的查询构建器 / build a query builder with binds attached
    pub fn build(&self) -> QueryBuilder<'static, Postgres> {
        let select = match &self.select_cols {
            Some(cols) => cols.join(", "),
            None => "*".to_string(),
        };
        let mut qb =
            QueryBuilder::<Postgres>::new(format!("SELECT {} FROM \"{}\"", select, self.table));
        for p in &self.where_parts {
            match p {
                WherePart::Raw(s) => {
                    qb.push(s);
                }
                WherePart::Bind(v) => push_value(&mut qb, v),
            }
        }
        qb.push(&self.order_sql);
        qb.push(&self.limit_sql);
        qb.push(&self.offset_sql);
        qb
    }
}

impl Paged for SelectPg {
    fn offset(mut self, n: i64) -> Self {
        self.offset_sql = format!(" OFFSET {}", n);
        self
    }

    fn limit(mut self, n: i64) -> Self {
        self.limit_sql = format!(" LIMIT {}", n);
        self
    }
}

fn push_value(qb: &mut QueryBuilder<'static, Postgres>, v: &serde_json::Value) {
    match v {
        serde_json::Value::String(s) => {
            qb.push_bind(s.clone());
        }
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                qb.push_bind(i);
            } else if let Some(f) = n.as_f64() {
                qb.push_bind(f);
            } else {
                qb.push_bind(n.to_string());
            }
        }
        serde_json::Value::Bool(b) => {
            qb.push_bind(*b);
        }
        other => {
            qb.push_bind(other.to_string());
        }
    }
}
