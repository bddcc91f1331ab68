//! Domain types for a numbered-page site.
//!
//! A page is identified by its [`PageIndex`]; the same `NN.html` file name is
//! used for the input template and the output file.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PageIndex(pub u32);

impl PageIndex {
    /// Two-digit zero-padded stem: `1 → "01"`, `42 → "42"`.
    pub fn stem(&self) -> String {
        format!("{:02}", self.0)
    }

    /// Template and output file name: `1 → "01.html"`.
    pub fn file_name(&self) -> String {
        format!("{}.html", self.stem())
    }

    /// Inverse of [`PageIndex::file_name`]. Only canonical names match, so
    /// `"7.html"` and `"007.html"` are not page names.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(".html")?;
        if !stem.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        stem.parse()
            .ok()
            .map(Self)
            .filter(|index: &PageIndex| index.file_name() == name)
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}


// ---------------------------------------------------------------------------
// PageRange
// ---------------------------------------------------------------------------

/// Inclusive range of pages processed by one run, always walked ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub first: PageIndex,
    pub last: PageIndex,
}

impl PageRange {
    pub const DEFAULT_FIRST: u32 = 1;
    pub const DEFAULT_LAST: u32 = 42;

    pub fn new(first: u32, last: u32) -> Self {
        Self {
            first: PageIndex(first),
            last: PageIndex(last),
        }
    }

    /// Number of pages in the range (zero if `first > last`).
    pub fn len(&self) -> usize {
        if self.first > self.last {
            return 0;
        }
        (self.last.0 - self.first.0) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = PageIndex> {
        self.bounds().map(PageIndex)
    }

    /// File names of every page, ascending.
    pub fn file_names(&self) -> Vec<String> {
        self.iter().map(|i| i.file_name()).collect()
    }

    /// Previous page for navigation; clamps to `index` itself on the first page.
    pub fn prev(&self, index: PageIndex) -> PageIndex {
        if index > self.first {
            PageIndex(index.0 - 1)
        } else {
            index
        }
    }

    /// Next page for navigation; clamps to `index` itself on the last page.
    pub fn next(&self, index: PageIndex) -> PageIndex {
        if index < self.last {
            PageIndex(index.0 + 1)
        } else {
            index
        }
    }

    fn bounds(&self) -> RangeInclusive<u32> {
        self.first.0..=self.last.0
    }
}

impl Default for PageRange {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FIRST, Self::DEFAULT_LAST)
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// A page resolved against the site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub index: PageIndex,
    /// `NN.html`, shared by template and output.
    pub name: String,
    /// Configured title, or the file stem when none is configured.
    pub title: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_zero_padded() {
        assert_eq!(PageIndex(1).file_name(), "01.html");
        assert_eq!(PageIndex(9).file_name(), "09.html");
        assert_eq!(PageIndex(10).file_name(), "10.html");
        assert_eq!(PageIndex(42).file_name(), "42.html");
    }

    #[test]
    fn wide_indices_keep_natural_width() {
        assert_eq!(PageIndex(100).file_name(), "100.html");
    }

    #[test]
    fn only_canonical_file_names_parse_back() {
        assert_eq!(PageIndex::from_file_name("07.html"), Some(PageIndex(7)));
        assert_eq!(PageIndex::from_file_name("42.html"), Some(PageIndex(42)));
        assert_eq!(PageIndex::from_file_name("100.html"), Some(PageIndex(100)));
        assert_eq!(PageIndex::from_file_name("7.html"), None);
        assert_eq!(PageIndex::from_file_name("007.html"), None);
        assert_eq!(PageIndex::from_file_name("base.html"), None);
        assert_eq!(PageIndex::from_file_name("01.tera"), None);
        assert_eq!(PageIndex::from_file_name(".html"), None);
    }

    #[test]
    fn default_range_covers_forty_two_pages() {
        let range = PageRange::default();
        assert_eq!(range.len(), 42);
        let names = range.file_names();
        assert_eq!(names.first().map(String::as_str), Some("01.html"));
        assert_eq!(names.last().map(String::as_str), Some("42.html"));
    }

    #[test]
    fn iteration_is_ascending() {
        let indices: Vec<u32> = PageRange::new(3, 6).iter().map(|i| i.0).collect();
        assert_eq!(indices, vec![3, 4, 5, 6]);
    }

    #[test]
    fn inverted_range_is_empty() {
        let range = PageRange::new(5, 4);
        assert!(range.is_empty());
        assert_eq!(range.iter().count(), 0);
    }

    #[test]
    fn navigation_clamps_at_the_edges() {
        let range = PageRange::default();
        assert_eq!(range.prev(PageIndex(1)), PageIndex(1));
        assert_eq!(range.next(PageIndex(1)), PageIndex(2));
        assert_eq!(range.prev(PageIndex(42)), PageIndex(41));
        assert_eq!(range.next(PageIndex(42)), PageIndex(42));
    }
}
