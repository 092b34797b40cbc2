use crate::db::pagination::Pagination;

/// 构建 RFC5988 风格的 Link 响应头（first/last/next/prev）
/// Build an RFC5988-style Link header (first/last/next/prev rels)
pub fn build_link_header<T>(base_url: &str, p: &Pagination<T>) -> String {
    let mut links: Vec<String> = Vec::new();
    let last = p.total_pages();
    let page = p.page.max(1);

    links.push(link_part(base_url, 1, p.page_size, "first"));
    if last > 0 {
        links.push(link_part(base_url, last, p.page_size, "last"));
    }
    if last == 0 || page < last {
        links.push(link_part(base_url, page + 1, p.page_size, "next"));
    }
    if page > 1 {
        links.push(link_part(base_url, page - 1, p.page_size, "prev"));
    }
    links.join(", ")
}

fn link_part(base_url: &str, page: i64, page_size: i64, rel: &str) -> String {
    format!(
        "<{}?page={}&page_size={}>; rel=\"{}\"",
        base_url, page, page_size, rel
    )
}
