//! # folio-renderer
//!
//! Tera-based engine that loads numbered page templates by name and renders
//! them with an empty context, optionally wrapped in a layout template.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use folio_core::SiteConfig;
//! use folio_renderer::Renderer;
//!
//! fn render_all(config: &SiteConfig) {
//!     if let Ok(mut renderer) = Renderer::new(config) {
//!         for page in config.pages() {
//!             if let Ok(html) = renderer.render_page(&page) {
//!                 println!("{}: {} bytes", page.name, html.len());
//!             }
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::LayoutContext;
pub use engine::{Renderer, TemplateEngine};
pub use error::RenderError;
