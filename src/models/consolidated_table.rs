//! The consolidated table of employee summaries.

use serde::{Deserialize, Serialize};

use super::employee_summary::EmployeeSummary;

/// Fixed column order of the consolidated table.
pub const TABLE_COLUMNS: [&str; 12] = [
    "CostCenter",
    "Name",
    "PeriodStart",
    "PeriodEnd",
    "WorkedDays",
    "ExcusedDays",
    "VacationDays",
    "UnexcusedDays",
    "LeaveDays",
    "MedicalCertificateCount",
    "HolidayCount",
    "DayOffCount",
];

/// Ordered rows, one per employee page, with a fixed column schema.
///
/// An empty table still reports the full schema through [`columns`](Self::columns)
/// and serializes its `columns` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidatedTable {
    /// Column names in output order.
    pub columns: Vec<String>,
    /// One row per employee page, in input order.
    pub rows: Vec<EmployeeSummary>,
}

impl Default for ConsolidatedTable {
    fn default() -> Self {
        Self::from_rows(Vec::new())
    }
}

impl ConsolidatedTable {
    /// Builds a table over the given rows.
    pub fn from_rows(rows: Vec<EmployeeSummary>) -> Self {
        Self {
            columns: TABLE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    /// Column names in output order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Appends another table's rows after this table's rows.
    ///
    /// No deduplication takes place.
    pub fn append(&mut self, other: ConsolidatedTable) {
        self.rows.extend(other.rows);
    }

    /// Renders a row as cells in [`TABLE_COLUMNS`] order.
    pub fn row_cells(row: &EmployeeSummary) -> [String; 12] {
        [
            row.cost_center.clone(),
            row.name.clone(),
            row.period_start_display(),
            row.period_end_display(),
            row.worked_days.to_string(),
            row.excused_days.to_string(),
            row.vacation_days.to_string(),
            row.unexcused_days.to_string(),
            row.leave_days.to_string(),
            row.medical_certificate_count.to_string(),
            row.holiday_count.to_string(),
            row.day_off_count.to_string(),
        ]
    }
}
