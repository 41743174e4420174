//! Multi-document processing.
//!
//! Documents are independent, so each one is extracted and aggregated on a
//! blocking worker. A semaphore bounds how many run at once and every
//! document gets its own time budget. Results are put back in submission
//! order before the report is built, so output order never depends on which
//! worker finished first.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::aggregation::aggregate_document;
use crate::config::BatchConfig;
use crate::error::{EngineError, EngineResult};
use crate::extraction::PageTextExtractor;
use crate::models::{BatchReport, ConsolidatedTable};

/// Content of a submitted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentContent {
    /// Page texts already extracted by the caller.
    Pages(Vec<String>),
    /// Raw PDF bytes.
    Pdf(Vec<u8>),
}

/// One document submitted for summarization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInput {
    /// Name used to tag rows and report problems, usually the file name.
    pub source_name: String,
    /// The document itself.
    pub content: DocumentContent,
}

impl DocumentInput {
    /// A document given as pre-extracted page texts.
    pub fn from_pages(source_name: impl Into<String>, pages: Vec<String>) -> Self {
        Self {
            source_name: source_name.into(),
            content: DocumentContent::Pages(pages),
        }
    }

    /// A document given as PDF bytes.
    pub fn from_pdf(source_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            source_name: source_name.into(),
            content: DocumentContent::Pdf(bytes),
        }
    }
}

/// Runs extraction and aggregation for a single document, synchronously.
pub fn summarize_document(
    input: &DocumentInput,
    extractor: &dyn PageTextExtractor,
) -> EngineResult<ConsolidatedTable> {
    match &input.content {
        DocumentContent::Pages(pages) => Ok(aggregate_document(pages)),
        DocumentContent::Pdf(bytes) => {
            let pages = extractor.extract_pages(&input.source_name, bytes)?;
            Ok(aggregate_document(&pages))
        }
    }
}

/// Summarizes pre-extracted pages of one document into a report.
pub fn summarize_pages(source_name: impl Into<String>, pages: &[String]) -> BatchReport {
    BatchReport::from_documents(vec![(source_name.into(), Ok(aggregate_document(pages)))])
}

/// Processes documents concurrently and consolidates their rows.
#[derive(Clone)]
pub struct BatchProcessor {
    extractor: Arc<dyn PageTextExtractor>,
    max_workers: usize,
    document_timeout: Duration,
}

impl BatchProcessor {
    /// Creates a processor from the batch settings.
    pub fn new(extractor: Arc<dyn PageTextExtractor>, config: &BatchConfig) -> Self {
        Self {
            extractor,
            max_workers: config.max_workers.max(1),
            document_timeout: Duration::from_secs(config.document_timeout_secs),
        }
    }

    /// Summarizes every document and returns one consolidated report.
    ///
    /// A document that fails to extract or exceeds its time budget is marked
    /// failed in the report; its siblings are unaffected. A timed-out worker
    /// cannot be interrupted: it keeps its blocking thread and its worker slot
    /// until it returns, so at most `max_workers` extractions ever run at
    /// once. Its result is discarded.
    pub async fn process(&self, documents: Vec<DocumentInput>) -> BatchReport {
        let started = Instant::now();
        let total = documents.len();
        let semaphore = Arc::new(Semaphore::new(self.max_workers));
        let mut tasks = JoinSet::new();
        let mut names = Vec::with_capacity(total);

        for (index, document) in documents.into_iter().enumerate() {
            names.push(document.source_name.clone());
            let semaphore = Arc::clone(&semaphore);
            let extractor = Arc::clone(&self.extractor);
            let budget = self.document_timeout;

            tasks.spawn(async move {
                let outcome = run_with_budget(semaphore, extractor, document, budget).await;
                (index, outcome)
            });
        }

        let mut outcomes: Vec<(usize, EngineResult<ConsolidatedTable>)> = Vec::with_capacity(total);
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(result) => outcomes.push(result),
                Err(e) => warn!(error = %e, "Document task did not complete"),
            }
        }
        // Completion order is arbitrary; slot results back by submission index.
        // Any slot left empty belonged to a task that panicked.
        let mut ordered: Vec<Option<EngineResult<ConsolidatedTable>>> =
            (0..total).map(|_| None).collect();
        for (index, outcome) in outcomes {
            ordered[index] = Some(outcome);
        }

        let per_document = names
            .into_iter()
            .zip(ordered)
            .map(|(name, outcome)| {
                let outcome = match outcome {
                    Some(Ok(table)) => Ok(table),
                    Some(Err(e)) => {
                        warn!(source = %name, error = %e, "Document could not be summarized");
                        Err(e.to_string())
                    }
                    None => Err("document processing was aborted".to_string()),
                };
                (name, outcome)
            })
            .collect();

        let report = BatchReport::from_documents(per_document);
        info!(
            documents = total,
            rows = report.rows.len(),
            unproductive = report.unproductive_documents().count(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Batch summarized"
        );
        report
    }
}

async fn run_with_budget(
    semaphore: Arc<Semaphore>,
    extractor: Arc<dyn PageTextExtractor>,
    document: DocumentInput,
    budget: Duration,
) -> EngineResult<ConsolidatedTable> {
    // The semaphore is never closed, so acquiring only waits for a free slot.
    let permit = semaphore.acquire_owned().await;

    let source_name = document.source_name.clone();
    // The slot travels with the blocking job and is released when the job
    // ends, not when the budget expires.
    let work = tokio::task::spawn_blocking(move || {
        let _permit = permit;
        summarize_document(&document, extractor.as_ref())
    });

    match tokio::time::timeout(budget, work).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_error)) => Err(EngineError::PdfExtraction {
            source_name,
            message: format!("worker failed: {}", join_error),
        }),
        Err(_) => Err(EngineError::DocumentTimeout {
            source_name,
            seconds: budget.as_secs(),
        }),
    }
}
