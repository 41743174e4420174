//! Application state for the summary API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::batch::BatchProcessor;
use crate::config::ConfigLoader;
use crate::extraction::{LopdfExtractor, PageTextExtractor};

/// Shared application state.
///
/// Holds the loaded configuration and the batch processor built from it.
#[derive(Clone)]
pub struct AppState {
    /// The loaded service configuration.
    config: Arc<ConfigLoader>,
    /// Runs uploaded documents through extraction and aggregation.
    processor: BatchProcessor,
}

impl AppState {
    /// Creates application state with a custom page text extractor.
    pub fn new(config: ConfigLoader, extractor: Arc<dyn PageTextExtractor>) -> Self {
        let processor = BatchProcessor::new(extractor, config.batch());
        Self {
            config: Arc::new(config),
            processor,
        }
    }

    /// Creates application state that reads PDFs with `lopdf`.
    pub fn with_pdf_extractor(config: ConfigLoader) -> Self {
        Self::new(config, Arc::new(LopdfExtractor::new()))
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the batch processor.
    pub fn processor(&self) -> &BatchProcessor {
        &self.processor
    }
}
