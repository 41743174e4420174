//! Page text extraction.
//!
//! The aggregation core only needs one text blob per physical page, in page
//! order, with line breaks preserved. [`PageTextExtractor`] is the seam; the
//! bundled implementation reads PDFs with `lopdf`.

mod pdf;

pub use pdf::LopdfExtractor;

use crate::error::EngineResult;

/// Produces per-page text from a source document.
pub trait PageTextExtractor: Send + Sync {
    /// Returns one string per physical page, in physical page order.
    ///
    /// `source_name` is only used for error reporting.
    fn extract_pages(&self, source_name: &str, bytes: &[u8]) -> EngineResult<Vec<String>>;
}
