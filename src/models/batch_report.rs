//! Results of summarizing a batch of documents.

use serde::{Deserialize, Serialize};

use super::consolidated_table::{ConsolidatedTable, TABLE_COLUMNS};
use super::employee_summary::EmployeeSummary;

/// An employee row tagged with the document it came from.
///
/// Serialized keys match [`BatchReport::column_names`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcedSummary {
    /// Name of the submitted document (usually the uploaded file name).
    #[serde(rename = "SourceFile")]
    pub source_name: String,
    /// `YYYY-MM` derived from the period end, absent when the page had no dates.
    #[serde(rename = "ReferenceMonth")]
    pub reference_month: Option<String>,
    /// The employee summary itself.
    #[serde(flatten)]
    pub summary: EmployeeSummary,
}

impl SourcedSummary {
    /// Tags a summary with its source document.
    pub fn new(source_name: impl Into<String>, summary: EmployeeSummary) -> Self {
        Self {
            source_name: source_name.into(),
            reference_month: summary.reference_month(),
            summary,
        }
    }
}

/// Outcome of processing one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum DocumentStatus {
    /// The document produced at least one employee row.
    Summarized {
        /// Number of rows contributed.
        rows: usize,
    },
    /// The document had no employee pages.
    Empty,
    /// Extraction failed or timed out.
    Failed {
        /// What went wrong.
        message: String,
    },
}

/// Per-document entry in a batch report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReport {
    /// Name of the submitted document.
    pub source_name: String,
    /// How processing went.
    #[serde(flatten)]
    pub status: DocumentStatus,
}

/// Consolidated result for a batch of documents.
///
/// Rows appear in submission order, then page order within each document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Core column schema followed by `SourceFile` and `ReferenceMonth`.
    pub columns: Vec<String>,
    /// All employee rows.
    pub rows: Vec<SourcedSummary>,
    /// One entry per submitted document, in submission order.
    pub documents: Vec<DocumentReport>,
}

impl BatchReport {
    /// Columns appended to the core schema by the batch layer.
    pub const EXTRA_COLUMNS: [&'static str; 2] = ["SourceFile", "ReferenceMonth"];

    /// Builds a report from per-document results in submission order.
    pub fn from_documents(documents: Vec<(String, Result<ConsolidatedTable, String>)>) -> Self {
        let mut rows = Vec::new();
        let mut reports = Vec::with_capacity(documents.len());

        for (source_name, outcome) in documents {
            let status = match outcome {
                Ok(table) if table.is_empty() => DocumentStatus::Empty,
                Ok(table) => {
                    let count = table.len();
                    rows.extend(
                        table
                            .rows
                            .into_iter()
                            .map(|summary| SourcedSummary::new(source_name.clone(), summary)),
                    );
                    DocumentStatus::Summarized { rows: count }
                }
                Err(message) => DocumentStatus::Failed { message },
            };
            reports.push(DocumentReport {
                source_name,
                status,
            });
        }

        Self {
            columns: Self::column_names(),
            rows,
            documents: reports,
        }
    }

    /// Full column list of the report.
    pub fn column_names() -> Vec<String> {
        TABLE_COLUMNS
            .iter()
            .chain(Self::EXTRA_COLUMNS.iter())
            .map(|c| c.to_string())
            .collect()
    }

    /// Returns true if no document produced a row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Documents that yielded no rows, either empty or failed.
    pub fn unproductive_documents(&self) -> impl Iterator<Item = &DocumentReport> {
        self.documents
            .iter()
            .filter(|d| !matches!(d.status, DocumentStatus::Summarized { .. }))
    }

    /// The rows without their source tags, as one consolidated table.
    pub fn to_table(&self) -> ConsolidatedTable {
        ConsolidatedTable::from_rows(self.rows.iter().map(|r| r.summary.clone()).collect())
    }
}
