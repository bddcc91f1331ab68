//! Layout context — serializable payload handed to the optional layout template.
//!
//! Page templates themselves always render with an empty context; only the
//! layout wrapper sees these fields.

use serde::{Deserialize, Serialize};

use folio_core::{Page, PageRange};

use crate::error::RenderError;

/// Navigation and body of one page, as seen by the layout template.
///
/// `content` is already-rendered HTML; layouts should emit it with `| safe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutContext {
    pub title: String,
    pub name: String,
    pub index: u32,
    pub content: String,
    /// Previous page, or this page when it is the first one.
    pub prev_url: String,
    /// Next page, or this page when it is the last one.
    pub next_url: String,
    pub is_first: bool,
    pub is_last: bool,
}

impl LayoutContext {
    /// Build the context for `page` within `range`, wrapping `content`.
    pub fn for_page(range: &PageRange, page: &Page, content: String) -> Self {
        LayoutContext {
            title: page.title.clone(),
            name: page.name.clone(),
            index: page.index.0,
            content,
            prev_url: range.prev(page.index).file_name(),
            next_url: range.next(page.index).file_name(),
            is_first: page.index == range.first,
            is_last: page.index == range.last,
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(|e| RenderError::Template {
            name: self.name.clone(),
            source: e,
        })
    }
}
