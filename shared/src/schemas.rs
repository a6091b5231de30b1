use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utilities::errors::AppError;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// One page of an ordered result set.
#[derive(Serialize, Deserialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub has_more: bool,
}

impl<T> PageResult<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            has_more: self.has_more,
        }
    }
}

/// 1-based page request.
#[derive(Deserialize, Serialize, Validate, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, message = "Page size must not be zero!"))]
    pub page_size: usize,
}

fn default_page() -> usize {
    DEFAULT_PAGE
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    pub fn validate_with_limit(&self, max_page_size: usize) -> Result<(), AppError> {
        self.validate()?;

        if self.page_size > max_page_size {
            return Err(AppError::ValidationError(format!(
                "Page size cannot exceed {max_page_size}"
            )));
        }

        Ok(())
    }
}
