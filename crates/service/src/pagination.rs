//! Pagination utilities for service layer
//!
//! `PageRequest` carries a validated 0-based page index and page size;
//! `Page` is the sorted slice returned to callers together with its metadata.

use serde::{Deserialize, Serialize};

use crate::errors::{FieldErrors, ServiceError};

pub const DEFAULT_PAGE: i64 = 0;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;
/// Largest accepted page index; keeps `page * size` well inside the store's offset range.
pub const MAX_PAGE: i64 = i32::MAX as i64;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// 0-based page index
    pub page: u64,
    /// items per page, 1..=100
    pub size: u64,
}

impl PageRequest {
    /// Validate raw inputs; out-of-range values are rejected, not clamped.
    pub fn new(page: i64, size: i64) -> Result<Self, ServiceError> {
        let mut errs = FieldErrors::default();
        if page < 0 {
            errs.push("page", "page must be greater than or equal to 0");
        } else if page > MAX_PAGE {
            errs.push("page", format!("page must be less than or equal to {MAX_PAGE}"));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&size) {
            errs.push("size", format!("size must be between 1 and {MAX_PAGE_SIZE}"));
        }
        if !errs.is_empty() {
            return Err(ServiceError::Validation(errs));
        }
        Ok(Self { page: page as u64, size: size as u64 })
    }

    /// Build from optional query values, applying defaults first.
    pub fn from_query(page: Option<i64>, size: Option<i64>) -> Result<Self, ServiceError> {
        Self::new(page.unwrap_or(DEFAULT_PAGE), size.unwrap_or(DEFAULT_PAGE_SIZE))
    }

    pub fn offset(&self) -> u64 { self.page.saturating_mul(self.size) }
}

impl Default for PageRequest {
    fn default() -> Self { Self { page: DEFAULT_PAGE as u64, size: DEFAULT_PAGE_SIZE as u64 } }
}

/// One page of results plus metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    /// 0-based index of this page
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number_of_elements: u64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let total_pages = total_elements.div_ceil(request.size.max(1));
        Self {
            number_of_elements: content.len() as u64,
            empty: content.is_empty(),
            content,
            number: request.page,
            size: request.size,
            total_elements,
            total_pages,
            first: request.page == 0,
            last: request.page + 1 >= total_pages,
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number_of_elements: self.number_of_elements,
            first: self.first,
            last: self.last,
            empty: self.empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_query_is_empty() {
        let req = PageRequest::from_query(None, None).unwrap();
        assert_eq!(req, PageRequest { page: 0, size: 10 });
        assert_eq!(PageRequest::default(), req);
    }

    #[test]
    fn rejects_negative_page_and_out_of_range_size() {
        let err = PageRequest::new(-1, 0).unwrap_err();
        match err {
            ServiceError::Validation(fields) => {
                assert!(fields.get("page").is_some());
                assert!(fields.get("size").is_some());
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(PageRequest::new(0, 101).is_err());
        assert!(PageRequest::new(0, 100).is_ok());
        assert!(PageRequest::new(0, 1).is_ok());
    }

    #[test]
    fn rejects_page_beyond_int_range() {
        for page in [MAX_PAGE + 1, 1_000_000_000_000_000_000, i64::MAX] {
            match PageRequest::new(page, 100) {
                Err(ServiceError::Validation(fields)) => assert!(fields.get("page").is_some(), "{page}"),
                other => panic!("page {page} should be rejected, got {other:?}"),
            }
        }
        let last = PageRequest::new(MAX_PAGE, MAX_PAGE_SIZE).unwrap();
        assert_eq!(last.offset(), MAX_PAGE as u64 * 100);
    }

    #[test]
    fn offset_is_page_times_size() {
        assert_eq!(PageRequest::new(3, 20).unwrap().offset(), 60);
    }

    #[test]
    fn page_metadata() {
        let req = PageRequest::new(1, 10).unwrap();
        let page = Page::new(vec![1, 2, 3], req, 13);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.number_of_elements, 3);
        assert!(!page.first);
        assert!(page.last);
        assert!(!page.empty);

        let empty: Page<i32> = Page::new(vec![], PageRequest::default(), 0);
        assert_eq!(empty.total_pages, 0);
        assert!(empty.first && empty.last && empty.empty);
    }

    #[test]
    fn map_keeps_metadata() {
        let page = Page::new(vec![1, 2], PageRequest::default(), 2).map(|n| n * 10);
        assert_eq!(page.content, vec![10, 20]);
        assert_eq!(page.total_elements, 2);
    }
}
