//! Paging for the content list endpoints.
//!
//! Clients send `?page=&per_page=`; every list answers with
//! `{ "data": [...], "meta": { page, per_page, total, total_pages } }`.

use serde::{Deserialize, Serialize};

/// `?page=&per_page=` query of a list endpoint.
///
/// Missing values fall back to [`PageRequest::default`]. Values are taken as
/// sent; [`PageRequest::normalized`] brings them into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,
    /// Rows per page.
    pub per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: Self::DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// Page size when the client sends none.
    pub const DEFAULT_PER_PAGE: u32 = 20;
    /// Largest page size a client may ask for.
    pub const MAX_PER_PAGE: u32 = 100;

    /// Page 0 becomes 1 and the page size is clamped to `1..=MAX_PER_PAGE`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.clamp(1, Self::MAX_PER_PAGE),
        }
    }

    /// 0-based page index, as SeaORM's paginator counts.
    #[must_use]
    pub fn index(&self) -> u64 {
        u64::from(self.page.saturating_sub(1))
    }

    /// Rows to skip before this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.index() * self.limit()
    }

    /// Rows on this page.
    #[must_use]
    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }
}

/// One page of rows plus its [`PageMeta`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// Rows of the requested page.
    pub data: Vec<T>,
    /// Position of this page in the whole list.
    pub meta: PageMeta,
}

/// Position of a page in the whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Requested page number.
    pub page: u32,
    /// Requested page size.
    pub per_page: u32,
    /// Rows across all pages.
    pub total: u64,
    /// Number of pages; an empty list still has one.
    pub total_pages: u64,
}

impl PageMeta {
    /// Metadata for `request` over a list of `total` rows.
    #[must_use]
    pub fn new(request: PageRequest, total: u64) -> Self {
        let total_pages = match request.limit() {
            0 => 1,
            limit => total.div_ceil(limit).max(1),
        };
        Self {
            page: request.page,
            per_page: request.per_page,
            total,
            total_pages,
        }
    }
}

impl<T> PageResponse<T> {
    /// Wraps the rows fetched for `request`.
    #[must_use]
    pub fn new(data: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            data,
            meta: PageMeta::new(request, total),
        }
    }

    /// Converts every row, keeping the metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
