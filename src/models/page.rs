//! Pagination models shared by listing endpoints

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: i64 = 0;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Number of rows skipped to reach `page`, or None when it does not fit in
/// a signed 64-bit offset
pub fn page_offset(page: u64, size: u64) -> Option<u64> {
    page.checked_mul(size).filter(|offset| *offset <= i64::MAX as u64)
}

/// Query parameters for paginated listings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    /// Zero-based page index (default: 0)
    pub page: Option<i64>,
    /// Page size (default: 10)
    pub size: Option<i64>,
}

impl PageQuery {
    /// Validate query parameters
    pub fn validate(&self) -> Result<(), String> {
        if let Some(page) = self.page {
            if page < 0 {
                return Err("page cannot be negative".to_string());
            }
        }
        if let Some(size) = self.size {
            if size < 1 {
                return Err("size must be at least 1".to_string());
            }
        }
        if page_offset(self.page(), self.size()).is_none() {
            return Err("page is too large for the requested size".to_string());
        }
        Ok(())
    }

    pub fn page(&self) -> u64 {
        self.page.unwrap_or(DEFAULT_PAGE).max(0) as u64
    }

    pub fn size(&self) -> u64 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE).max(1) as u64
    }
}

/// A page of results plus its position in the full result set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageModel<T> {
    pub content: Vec<T>,
    pub number: u64,
    pub size: u64,
    pub total_pages: u64,
    pub total_elements: u64,
}

impl<T> PageModel<T> {
    pub fn new(content: Vec<T>, number: u64, size: u64, total_elements: u64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(size)
        };

        Self {
            content,
            number,
            size,
            total_pages,
            total_elements,
        }
    }
}
