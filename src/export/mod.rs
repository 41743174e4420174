//! Spreadsheet export of consolidated reports.

mod csv_sink;
mod xlsx_sink;

pub use csv_sink::{CSV_CONTENT_TYPE, write_csv, write_table_csv};
pub use xlsx_sink::{XLSX_CONTENT_TYPE, write_xlsx};

use crate::config::{ExportConfig, ExportFormat};
use crate::error::EngineResult;
use crate::models::BatchReport;

/// A rendered spreadsheet ready to be served as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    /// Suggested download name.
    pub file_name: String,
    /// MIME type of `bytes`.
    pub content_type: &'static str,
    /// File contents.
    pub bytes: Vec<u8>,
}

/// Renders a report in the requested format.
pub fn export_report(
    report: &BatchReport,
    config: &ExportConfig,
    format: ExportFormat,
) -> EngineResult<ExportedFile> {
    let (bytes, content_type) = match format {
        ExportFormat::Csv => (write_csv(report, config)?, CSV_CONTENT_TYPE),
        ExportFormat::Xlsx => (write_xlsx(report, config)?, XLSX_CONTENT_TYPE),
    };

    Ok(ExportedFile {
        file_name: config.file_name(format),
        content_type,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::summarize_pages;

    fn report() -> BatchReport {
        summarize_pages(
            "escola.pdf",
            &["Nome: Ana\nCentro de Custo: Escola\n03/11/2025 Seg 08:00 17:00".to_string()],
        )
    }

    #[test]
    fn test_csv_export_naming() {
        let file = export_report(&report(), &ExportConfig::default(), ExportFormat::Csv).unwrap();
        assert_eq!(file.file_name, "planilha_mae_ponto.csv");
        assert_eq!(file.content_type, CSV_CONTENT_TYPE);
        assert!(file.bytes.starts_with(b"CostCenter;"));
    }

    #[test]
    fn test_xlsx_export_naming() {
        let file = export_report(&report(), &ExportConfig::default(), ExportFormat::Xlsx).unwrap();
        assert_eq!(file.file_name, "planilha_mae_ponto.xlsx");
        assert_eq!(file.content_type, XLSX_CONTENT_TYPE);
        assert!(file.bytes.starts_with(b"PK"));
    }
}
