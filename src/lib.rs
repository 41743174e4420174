//! Timesheet summary engine for "espelho de ponto" reports.
//!
//! This crate turns per-page timesheet text (one page per employee, one PDF
//! per school) into a consolidated table of worked days, excused absences,
//! vacations, unexcused absences and leave days per employee, plus the date
//! range each page covers.

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod batch;
pub mod config;
pub mod error;
pub mod export;
pub mod extraction;
pub mod models;
