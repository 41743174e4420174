//! CSV writer for batch reports.
//!
//! Output columns are the fixed table schema followed by `SourceFile` and
//! `ReferenceMonth`, one line per employee row, in report order.

use csv::WriterBuilder;

use crate::config::ExportConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{BatchReport, ConsolidatedTable};

/// MIME type of the exported file.
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

fn export_error(e: impl std::fmt::Display) -> EngineError {
    EngineError::Export {
        message: e.to_string(),
    }
}

fn delimiter_byte(config: &ExportConfig) -> EngineResult<u8> {
    if config.delimiter.is_ascii() {
        Ok(config.delimiter as u8)
    } else {
        Err(export_error(format!(
            "delimiter '{}' is not ASCII",
            config.delimiter
        )))
    }
}

/// Serializes a batch report as CSV bytes.
///
/// # Example
///
/// ```
/// use ponto_summary::batch::summarize_pages;
/// use ponto_summary::config::ExportConfig;
/// use ponto_summary::export::write_csv;
///
/// let report = summarize_pages(
///     "escola_azul.pdf",
///     &["Nome: Ana\nCentro de Custo: Escola Azul\n03/11/2025 Seg 08:00 17:00".to_string()],
/// );
/// let bytes = write_csv(&report, &ExportConfig::default()).unwrap();
/// let text = String::from_utf8(bytes).unwrap();
/// assert!(text.starts_with("CostCenter;Name;PeriodStart"));
/// assert!(text.contains("escola_azul.pdf;2025-11"));
/// ```
pub fn write_csv(report: &BatchReport, config: &ExportConfig) -> EngineResult<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter_byte(config)?)
        .from_writer(Vec::new());

    writer.write_record(&report.columns).map_err(export_error)?;

    for row in &report.rows {
        let cells = ConsolidatedTable::row_cells(&row.summary);
        writer
            .write_record(
                cells
                    .iter()
                    .map(String::as_str)
                    .chain([
                        row.source_name.as_str(),
                        row.reference_month.as_deref().unwrap_or(""),
                    ]),
            )
            .map_err(export_error)?;
    }

    writer.into_inner().map_err(export_error)
}

/// Serializes a bare consolidated table (no source columns) as CSV bytes.
pub fn write_table_csv(table: &ConsolidatedTable, config: &ExportConfig) -> EngineResult<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter_byte(config)?)
        .from_writer(Vec::new());

    writer.write_record(table.columns()).map_err(export_error)?;
    for row in &table.rows {
        writer
            .write_record(&ConsolidatedTable::row_cells(row))
            .map_err(export_error)?;
    }

    writer.into_inner().map_err(export_error)
}
