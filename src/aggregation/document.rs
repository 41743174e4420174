//! Document aggregation: ordered page texts in, consolidated table out.

use tracing::{debug, info};

use crate::models::ConsolidatedTable;

use super::identity::is_employee_page;
use super::page::aggregate_page;

/// Summarizes every employee page of one document.
///
/// Pages without a `Nome:` label (cover sheets, blank pages, totals) are
/// skipped without producing a row. Rows keep page order. An input with no
/// employee pages yields an empty table that still carries the column
/// schema.
///
/// # Example
///
/// ```
/// use ponto_summary::aggregation::aggregate_document;
///
/// let pages = [
///     "Nome: Maria Silva\nCentro de Custo: Escola Azul\n03/11/2025 Seg 08:00 17:00",
///     "Resumo do periodo",
/// ];
///
/// let table = aggregate_document(&pages);
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.rows[0].name, "Maria Silva");
///
/// let empty = aggregate_document::<&str>(&[]);
/// assert!(empty.is_empty());
/// assert_eq!(empty.columns().len(), 12);
/// ```
pub fn aggregate_document<S: AsRef<str>>(page_texts: &[S]) -> ConsolidatedTable {
    let mut rows = Vec::new();

    for (index, page) in page_texts.iter().enumerate() {
        let page = page.as_ref();
        if !is_employee_page(page) {
            debug!(page = index + 1, "Skipping page without employee label");
            continue;
        }
        rows.push(aggregate_page(page));
    }

    info!(
        pages = page_texts.len(),
        employees = rows.len(),
        "Aggregated timesheet document"
    );

    ConsolidatedTable::from_rows(rows)
}
