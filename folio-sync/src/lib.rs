//! # folio-sync
//!
//! Page writer and run orchestration.
//!
//! Call [`generate`] to render and write every page of a site, [`diff_site`]
//! to preview what would change, or [`staleness::check`] for a per-page report.

pub mod diff;
pub mod error;
pub mod pipeline;
pub mod staleness;
pub mod writer;

pub use diff::{diff_site, DiffResult, FileDiff};
pub use error::SyncError;
pub use pipeline::{generate, GenerateResult};
pub use staleness::{PageStatus, StalenessSignal};
pub use writer::{write_page, WriteResult};
