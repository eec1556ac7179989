use sea_orm::Order;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::shared::constants::{
    DEFAULT_PAGE_LIMIT, DEFAULT_PAGE_NO, DEFAULT_SORT_FIELD, MAX_PAGE_LIMIT, PAGINATE_TRUE,
};

/// Raw list query string, as sent by clients.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Literal `"true"` switches to a paginated, sorted and filtered slice
    pub paginate: Option<String>,
    /// 1-based page number (default 1)
    pub page_no: Option<String>,
    /// Page size (default 10, at most 100)
    pub page_limit: Option<String>,
    /// Column to sort by, camelCase or snake_case (default `createdAt`)
    pub sort_by: Option<String>,
    /// `ASC` or `DESC` (default `DESC`)
    pub sort_order: Option<String>,
    /// Case-insensitive substring matched against the entity's search column
    pub search: Option<String>,
}

/// `?name=` of the `/search` endpoints.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring of the name
    pub name: Option<String>,
}

impl SearchQuery {
    pub fn pattern(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl From<SortOrder> for Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page_no: u64,
    pub page_limit: u64,
    pub sort_by: String,
    pub sort_order: SortOrder,
    pub search: Option<String>,
}

impl PageRequest {
    /// `(pageNo * limit) - limit`, saturating and kept within Postgres `BIGINT`.
    pub fn offset(&self) -> u64 {
        self.page_no
            .saturating_sub(1)
            .saturating_mul(self.page_limit)
            .min(i64::MAX as u64)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_no: DEFAULT_PAGE_NO,
            page_limit: DEFAULT_PAGE_LIMIT,
            sort_by: DEFAULT_SORT_FIELD.to_string(),
            sort_order: SortOrder::Desc,
            search: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListRequest {
    /// Whole non-deleted collection, no ordering, no filter.
    #[default]
    All,
    Page(PageRequest),
}

impl ListQuery {
    pub fn into_request(self) -> ListRequest {
        if self.paginate.as_deref() != Some(PAGINATE_TRUE) {
            return ListRequest::All;
        }

        let sort_by = self
            .sort_by
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SORT_FIELD.to_string());

        let sort_order = match self.sort_order.as_deref().map(str::trim) {
            Some(order) if order.eq_ignore_ascii_case("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        };

        let search = self
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        ListRequest::Page(PageRequest {
            page_no: positive_or(self.page_no.as_deref(), DEFAULT_PAGE_NO),
            page_limit: positive_or(self.page_limit.as_deref(), DEFAULT_PAGE_LIMIT)
                .min(MAX_PAGE_LIMIT),
            sort_by,
            sort_order,
            search,
        })
    }
}

fn positive_or(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

/// Either the full collection or one page plus the total match count.
/// Serializes as a bare array or as `{count, rows}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecordList<T> {
    All(Vec<T>),
    Page { count: u64, rows: Vec<T> },
}

impl<T> RecordList<T> {
    pub fn rows(&self) -> &[T] {
        match self {
            RecordList::All(rows) => rows,
            RecordList::Page { rows, .. } => rows,
        }
    }

    pub fn into_parts(self) -> (Vec<T>, Option<u64>) {
        match self {
            RecordList::All(rows) => (rows, None),
            RecordList::Page { count, rows } => (rows, Some(count)),
        }
    }

    pub fn from_parts(rows: Vec<T>, count: Option<u64>) -> Self {
        match count {
            Some(count) => RecordList::Page { count, rows },
            None => RecordList::All(rows),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> RecordList<U> {
        let (rows, count) = self.into_parts();
        RecordList::from_parts(rows.into_iter().map(f).collect(), count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(paginate: Option<&str>) -> ListQuery {
        ListQuery {
            paginate: paginate.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_without_paginate_returns_all() {
        assert_eq!(query(None).into_request(), ListRequest::All);
        assert_eq!(query(Some("false")).into_request(), ListRequest::All);
        assert_eq!(query(Some("TRUE")).into_request(), ListRequest::All);
    }

    #[test]
    fn test_paginate_applies_defaults() {
        let request = query(Some("true")).into_request();
        assert_eq!(request, ListRequest::Page(PageRequest::default()));
    }

    #[test]
    fn test_paginate_reads_all_parameters() {
        let raw = ListQuery {
            paginate: Some("true".into()),
            page_no: Some("2".into()),
            page_limit: Some("5".into()),
            sort_by: Some("name".into()),
            sort_order: Some("asc".into()),
            search: Some("  adm ".into()),
        };

        let ListRequest::Page(page) = raw.into_request() else {
            panic!("expected a page request");
        };

        assert_eq!(page.page_no, 2);
        assert_eq!(page.page_limit, 5);
        assert_eq!(page.offset(), 5);
        assert_eq!(page.sort_by, "name");
        assert_eq!(page.sort_order, SortOrder::Asc);
        assert_eq!(page.search.as_deref(), Some("adm"));
    }

    #[test]
    fn test_invalid_numbers_fall_back_to_defaults() {
        let raw = ListQuery {
            paginate: Some("true".into()),
            page_no: Some("abc".into()),
            page_limit: Some("0".into()),
            sort_order: Some("sideways".into()),
            search: Some("   ".into()),
            ..Default::default()
        };

        let ListRequest::Page(page) = raw.into_request() else {
            panic!("expected a page request");
        };

        assert_eq!(page.page_no, DEFAULT_PAGE_NO);
        assert_eq!(page.page_limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(page.sort_order, SortOrder::Desc);
        assert_eq!(page.search, None);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_huge_page_numbers_do_not_overflow() {
        let raw = ListQuery {
            paginate: Some("true".into()),
            page_no: Some(u64::MAX.to_string()),
            page_limit: Some("10".into()),
            ..Default::default()
        };

        let ListRequest::Page(page) = raw.into_request() else {
            panic!("expected a page request");
        };

        assert_eq!(page.page_no, u64::MAX);
        assert_eq!(page.offset(), i64::MAX as u64);
    }

    #[test]
    fn test_page_limit_is_capped() {
        let raw = ListQuery {
            paginate: Some("true".into()),
            page_no: Some("3".into()),
            page_limit: Some("1000000".into()),
            ..Default::default()
        };

        let ListRequest::Page(page) = raw.into_request() else {
            panic!("expected a page request");
        };

        assert_eq!(page.page_limit, MAX_PAGE_LIMIT);
        assert_eq!(page.offset(), 2 * MAX_PAGE_LIMIT);
    }

    #[test]
    fn test_record_list_serializes_both_shapes() {
        let all = RecordList::All(vec![1, 2]);
        assert_eq!(serde_json::to_value(&all).unwrap(), serde_json::json!([1, 2]));

        let page = RecordList::Page {
            count: 12,
            rows: vec![3],
        };
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            serde_json::json!({"count": 12, "rows": [3]})
        );
    }

    #[test]
    fn test_record_list_map_keeps_count() {
        let page = RecordList::Page {
            count: 7,
            rows: vec![1, 2],
        };
        let mapped = page.map(|n| n * 10);
        assert_eq!(
            mapped,
            RecordList::Page {
                count: 7,
                rows: vec![10, 20]
            }
        );
    }
}
