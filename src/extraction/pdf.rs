//! PDF page text extraction backed by `lopdf`.

use lopdf::Document;
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};

use super::PageTextExtractor;

/// Extracts page text from PDF bytes using `lopdf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfExtractor;

impl LopdfExtractor {
    /// Creates a new extractor.
    pub fn new() -> Self {
        Self
    }
}

impl PageTextExtractor for LopdfExtractor {
    fn extract_pages(&self, source_name: &str, bytes: &[u8]) -> EngineResult<Vec<String>> {
        let doc = Document::load_mem(bytes).map_err(|e| EngineError::PdfExtraction {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;

        // get_pages is keyed by page number, so iteration is in physical order.
        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        info!(
            source = %source_name,
            pages = page_numbers.len(),
            "Loaded PDF"
        );

        let pages = page_numbers
            .iter()
            .map(|&number| match doc.extract_text(&[number]) {
                Ok(text) => text,
                Err(e) => {
                    // Unreadable pages become blank pages and are skipped downstream.
                    warn!(
                        source = %source_name,
                        page = number,
                        error = %e,
                        "Failed to extract page text"
                    );
                    String::new()
                }
            })
            .collect();

        Ok(pages)
    }
}
