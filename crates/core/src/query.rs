//! Validated caller input: query text and pagination.

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MAX_QUERY_CHARS};
use crate::error::ValidationError;

/// Query text that is non-blank and at most [`MAX_QUERY_CHARS`] characters.
///
/// The text is kept exactly as submitted; trimming is only used to detect
/// blank input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryText(String);

impl QueryText {
    /// # Errors
    /// [`ValidationError::EmptyQuery`] for empty or all-whitespace text,
    /// [`ValidationError::QueryTooLong`] past the character limit.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        let len = raw.chars().count();
        if len > MAX_QUERY_CHARS {
            return Err(ValidationError::QueryTooLong { len });
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for QueryText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One-based page number and page size, both range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// # Errors
    /// Rejects `page < 1` and `page_size` outside `1..=MAX_PAGE_SIZE`.
    pub const fn new(page: u32, page_size: u32) -> Result<Self, ValidationError> {
        if page < 1 {
            return Err(ValidationError::InvalidPage);
        }
        if page_size < 1 || page_size > MAX_PAGE_SIZE {
            return Err(ValidationError::InvalidPageSize);
        }
        Ok(Self { page, page_size })
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// `(page - 1) * page_size`, widened so large page numbers cannot overflow.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.page_size as u64
    }

    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.page_size as u64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, page_size: DEFAULT_PAGE_SIZE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_text_rejects_empty() {
        assert_eq!(QueryText::parse(""), Err(ValidationError::EmptyQuery));
    }

    #[test]
    fn test_query_text_rejects_whitespace_only() {
        assert_eq!(QueryText::parse("  \n\t "), Err(ValidationError::EmptyQuery));
    }

    #[test]
    fn test_query_text_keeps_original_text() {
        let q = QueryText::parse("  Visa for Kenya?  ").unwrap();
        assert_eq!(q.as_str(), "  Visa for Kenya?  ");
    }

    #[test]
    fn test_query_text_limit_counts_chars_not_bytes() {
        let at_limit = "é".repeat(MAX_QUERY_CHARS);
        assert!(QueryText::parse(at_limit).is_ok());

        let over = "a".repeat(MAX_QUERY_CHARS + 1);
        assert_eq!(
            QueryText::parse(over),
            Err(ValidationError::QueryTooLong { len: MAX_QUERY_CHARS + 1 })
        );
    }

    #[test]
    fn test_page_request_offset() {
        assert_eq!(PageRequest::new(1, 10).unwrap().offset(), 0);
        assert_eq!(PageRequest::new(2, 2).unwrap().offset(), 2);
        assert_eq!(PageRequest::new(5, 100).unwrap().offset(), 400);
    }

    #[test]
    fn test_page_request_offset_does_not_overflow() {
        let req = PageRequest::new(u32::MAX, MAX_PAGE_SIZE).unwrap();
        assert_eq!(req.offset(), (u64::from(u32::MAX) - 1) * u64::from(MAX_PAGE_SIZE));
    }

    #[test]
    fn test_page_request_bounds() {
        assert_eq!(PageRequest::new(0, 10), Err(ValidationError::InvalidPage));
        assert_eq!(PageRequest::new(1, 0), Err(ValidationError::InvalidPageSize));
        assert_eq!(PageRequest::new(1, MAX_PAGE_SIZE + 1), Err(ValidationError::InvalidPageSize));
        assert!(PageRequest::new(1, MAX_PAGE_SIZE).is_ok());
    }

    #[test]
    fn test_page_request_default() {
        let req = PageRequest::default();
        assert_eq!(req.page(), 1);
        assert_eq!(req.page_size(), DEFAULT_PAGE_SIZE);
    }
}
