//! Excel workbook writer for batch reports.
//!
//! One worksheet, named from the export settings, with the same columns and
//! row order as the CSV export. Counters are written as numbers so the sheet
//! can be summed without conversion; blank periods stay blank cells.

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::config::ExportConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::BatchReport;

/// MIME type of the exported workbook.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

fn export_error(e: XlsxError) -> EngineError {
    EngineError::Export {
        message: e.to_string(),
    }
}

fn write_text(sheet: &mut Worksheet, row: u32, col: u16, value: &str) -> EngineResult<()> {
    if !value.is_empty() {
        sheet.write_string(row, col, value).map_err(export_error)?;
    }
    Ok(())
}

/// Serializes a batch report as an `.xlsx` workbook.
pub fn write_xlsx(report: &BatchReport, config: &ExportConfig) -> EngineResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(&config.sheet_name).map_err(export_error)?;

    for (col, name) in report.columns.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, name, &header)
            .map_err(export_error)?;
    }

    for (index, row) in report.rows.iter().enumerate() {
        let line = (index + 1) as u32;
        let summary = &row.summary;

        write_text(sheet, line, 0, &summary.cost_center)?;
        write_text(sheet, line, 1, &summary.name)?;
        write_text(sheet, line, 2, &summary.period_start_display())?;
        write_text(sheet, line, 3, &summary.period_end_display())?;

        let counters = [
            summary.worked_days,
            summary.excused_days,
            summary.vacation_days,
            summary.unexcused_days,
            summary.leave_days,
            summary.medical_certificate_count,
            summary.holiday_count,
            summary.day_off_count,
        ];
        for (offset, value) in counters.into_iter().enumerate() {
            sheet
                .write_number(line, 4 + offset as u16, value)
                .map_err(export_error)?;
        }

        write_text(sheet, line, 12, &row.source_name)?;
        write_text(sheet, line, 13, row.reference_month.as_deref().unwrap_or(""))?;
    }

    workbook.save_to_buffer().map_err(export_error)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use calamine::{Data, Reader, Xlsx};

    use super::*;
    use crate::batch::summarize_pages;

    fn read_sheet(bytes: Vec<u8>, sheet: &str) -> calamine::Range<Data> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
        workbook.worksheet_range(sheet).unwrap()
    }

    fn text(value: &str) -> Data {
        Data::String(value.to_string())
    }

    #[test]
    fn test_workbook_has_detalhado_sheet_with_rows() {
        let report = summarize_pages(
            "escola_azul.pdf",
            &["Nome: Maria Silva\nCentro de Custo: Escola Azul\n03/11/2025 Seg 08:00 17:00\n04/11/2025 Ter FERIADO".to_string()],
        );
        let bytes = write_xlsx(&report, &ExportConfig::default()).unwrap();
        assert!(bytes.starts_with(b"PK"));

        let range = read_sheet(bytes, "Detalhado");
        assert_eq!(range.get_size(), (2, 14));
        assert_eq!(range.get_value((0, 0)), Some(&text("CostCenter")));
        assert_eq!(range.get_value((0, 13)), Some(&text("ReferenceMonth")));
        assert_eq!(range.get_value((1, 0)), Some(&text("Escola Azul")));
        assert_eq!(range.get_value((1, 1)), Some(&text("Maria Silva")));
        assert_eq!(range.get_value((1, 2)), Some(&text("03/11/2025")));
        assert_eq!(range.get_value((1, 4)), Some(&Data::Float(1.0)));
        assert_eq!(range.get_value((1, 5)), Some(&Data::Float(1.0)));
        assert_eq!(range.get_value((1, 10)), Some(&Data::Float(1.0)));
        assert_eq!(range.get_value((1, 12)), Some(&text("escola_azul.pdf")));
        assert_eq!(range.get_value((1, 13)), Some(&text("2025-11")));
    }

    #[test]
    fn test_blank_period_leaves_empty_cells() {
        let report = summarize_pages("a.pdf", &["Nome: Ana".to_string()]);
        let range = read_sheet(write_xlsx(&report, &ExportConfig::default()).unwrap(), "Detalhado");

        assert_eq!(range.get_value((1, 1)), Some(&text("Ana")));
        assert_eq!(range.get_value((1, 2)), Some(&Data::Empty));
        assert_eq!(range.get_value((1, 4)), Some(&Data::Float(0.0)));
    }

    #[test]
    fn test_custom_sheet_name() {
        let config = ExportConfig {
            sheet_name: "Novembro".to_string(),
            ..ExportConfig::default()
        };
        let report = summarize_pages("capa.pdf", &["Capa".to_string()]);
        let range = read_sheet(write_xlsx(&report, &config).unwrap(), "Novembro");
        assert_eq!(range.get_size(), (1, 14));
    }

    #[test]
    fn test_invalid_sheet_name_is_export_error() {
        let config = ExportConfig {
            sheet_name: "Folha[1]".to_string(),
            ..ExportConfig::default()
        };
        let report = summarize_pages("capa.pdf", &["Capa".to_string()]);
        assert!(matches!(
            write_xlsx(&report, &config),
            Err(EngineError::Export { .. })
        ));
    }
}
