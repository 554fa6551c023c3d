//! Pagination and search parameters shared by every list endpoint.

/// Default number of records per page.
pub const DEFAULT_LIMIT: u64 = 10;

/// Upper bound on records per page.
pub const MAX_LIMIT: u64 = 100;

/// Normalized list query.
///
/// `page` is 1-based as exposed by the API; repositories use [`PageParam::index`]
/// for SeaORM's zero-based paginator.
#[derive(Debug, Clone, PartialEq)]
pub struct PageParam {
    pub page: u64,
    pub limit: u64,
    /// Free text search, already trimmed and never empty.
    pub q: Option<String>,
}

impl PageParam {
    /// Builds a page request, clamping out-of-range values.
    ///
    /// # Arguments
    /// - `page` - Requested 1-based page; `None` or `0` become `1`
    /// - `limit` - Requested page size; `None` or `0` become the default, large values cap at `MAX_LIMIT`
    /// - `q` - Search text; blank text is dropped
    pub fn new(page: Option<u64>, limit: Option<u64>, q: Option<String>) -> Self {
        let page = page.filter(|p| *p > 0).unwrap_or(1);
        let limit = match limit {
            Some(0) | None => DEFAULT_LIMIT,
            Some(l) => l.min(MAX_LIMIT),
        };
        let q = q
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty());

        Self { page, limit, q }
    }

    /// Zero-based page index.
    pub fn index(&self) -> u64 {
        self.page - 1
    }
}

impl Default for PageParam {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

/// One page of records plus totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, param: &PageParam) -> Self {
        Self {
            items,
            total,
            page: param.page,
            limit: param.limit,
        }
    }

    /// Total number of pages.
    pub fn pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}
