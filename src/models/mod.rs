//! Core data models for the timesheet summary engine.
//!
//! This module contains the domain types shared by the aggregation core,
//! the batch layer, the exporters and the HTTP API.

mod batch_report;
mod consolidated_table;
mod day_category;
mod employee_summary;

pub use batch_report::{BatchReport, DocumentReport, DocumentStatus, SourcedSummary};
pub use consolidated_table::{ConsolidatedTable, TABLE_COLUMNS};
pub use day_category::{DayCategory, ExcuseFlags};
pub use employee_summary::{DATE_FORMAT, EmployeeSummary, UNKNOWN_IDENTITY};
