//! Offset pagination for title search

use serde::Serialize;

/// Rows per page of search results
pub const PAGE_SIZE: u64 = 10;

/// Largest offset accepted from a request
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Zero-based offset into the search results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    offset: u64,
}

impl Page {
    /// Offsets above [`MAX_OFFSET`] are clamped to it.
    pub fn new(offset: u64) -> Self {
        Self {
            offset: offset.min(MAX_OFFSET),
        }
    }

    /// Parse the `offset` query parameter.
    ///
    /// Leading digits are used and trailing junk ignored ("20abc" is 20).
    /// Absent, negative, or non-numeric values fall back to the first page;
    /// digit runs too large for [`MAX_OFFSET`] are clamped to it.
    pub fn from_param(raw: Option<&str>) -> Self {
        let digits = raw
            .map(str::trim)
            .map(|s| {
                let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
                &s[..end]
            })
            .unwrap_or("");

        if digits.is_empty() {
            return Self::default();
        }
        Self::new(digits.parse::<u64>().unwrap_or(MAX_OFFSET))
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> u64 {
        PAGE_SIZE
    }

    /// Navigation flags for this page given the total match count.
    pub fn window(&self, total: i64) -> PageWindow {
        let total = total.max(0) as u64;
        PageWindow {
            has_less: self.offset > 0,
            has_more: self.offset.saturating_add(PAGE_SIZE) < total,
            prev_offset: self.offset.saturating_sub(PAGE_SIZE),
            next_offset: self.offset.saturating_add(PAGE_SIZE),
            total,
        }
    }
}

/// Previous/next navigation for one page of results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    pub has_less: bool,
    pub has_more: bool,
    pub prev_offset: u64,
    pub next_offset: u64,
    pub total: u64,
}
