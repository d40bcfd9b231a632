//! Pagination query parameters.

use serde::{Deserialize, Serialize};

/// Pagination parameters for the listing endpoint.
///
/// Both values are optional; absent or non-positive values fall back to the
/// defaults rather than failing the request.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// 1-based page number to return.
    pub page: Option<i64>,

    /// Maximum number of entries per page.
    pub page_size: Option<i64>,
}

impl PageQuery {
    /// Default page number.
    const DEFAULT_PAGE: usize = 1;
    /// Default page size.
    const DEFAULT_PAGE_SIZE: usize = 20;

    /// Returns the effective page number.
    pub fn page(&self) -> usize {
        match self.page {
            Some(page) if page > 0 => page as usize,
            _ => Self::DEFAULT_PAGE,
        }
    }

    /// Returns the effective page size.
    pub fn page_size(&self) -> usize {
        match self.page_size {
            Some(size) if size > 0 => size as usize,
            _ => Self::DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_absent() {
        let query = PageQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size(), 20);
    }

    #[test]
    fn defaults_apply_to_non_positive_values() {
        let query = PageQuery {
            page: Some(0),
            page_size: Some(-5),
        };
        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size(), 20);
    }

    #[test]
    fn explicit_values_win() {
        let query = PageQuery {
            page: Some(3),
            page_size: Some(5),
        };
        assert_eq!(query.page(), 3);
        assert_eq!(query.page_size(), 5);
    }
}
