//! Per-employee summary produced from one timesheet page.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::day_category::DayCategory;

/// Placeholder used when an identity label is missing from a page.
pub const UNKNOWN_IDENTITY: &str = "DESCONHECIDO";

/// Date format used on timesheet day lines and in summary output.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Summary of one employee page.
///
/// Field names serialize to the fixed column schema
/// (`CostCenter`, `Name`, `PeriodStart`, ...). Period dates serialize as
/// `DD/MM/YYYY`, or as an empty string when the page had no parseable dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeSummary {
    /// Cost center (school) the employee belongs to.
    pub cost_center: String,
    /// Employee name.
    pub name: String,
    /// Earliest dated line on the page.
    #[serde(with = "display_date")]
    pub period_start: Option<NaiveDate>,
    /// Latest dated line on the page.
    #[serde(with = "display_date")]
    pub period_end: Option<NaiveDate>,
    /// Days with two or more real clock times.
    pub worked_days: u32,
    /// Approved excuses and holidays.
    pub excused_days: u32,
    /// Vacation days.
    pub vacation_days: u32,
    /// Unexcused absences, including unmatched lines.
    pub unexcused_days: u32,
    /// Leave-of-absence days.
    pub leave_days: u32,
    /// Excused days citing a medical certificate.
    pub medical_certificate_count: u32,
    /// Excused days marked as holidays.
    pub holiday_count: u32,
    /// Excused days marked as scheduled days off.
    pub day_off_count: u32,
}

impl EmployeeSummary {
    /// Creates an empty summary for the given identity.
    pub fn new(name: impl Into<String>, cost_center: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cost_center: cost_center.into(),
            ..Self::default()
        }
    }

    /// Adds one classified day to the counters.
    ///
    /// Sundays leave every counter untouched.
    pub fn record(&mut self, category: DayCategory) {
        match category {
            DayCategory::Worked => self.worked_days += 1,
            DayCategory::ExcusedAbsence(flags) => {
                self.excused_days += 1;
                if flags.medical_certificate {
                    self.medical_certificate_count += 1;
                }
                if flags.holiday {
                    self.holiday_count += 1;
                }
                if flags.day_off {
                    self.day_off_count += 1;
                }
            }
            DayCategory::Vacation => self.vacation_days += 1,
            DayCategory::Leave => self.leave_days += 1,
            DayCategory::UnexcusedAbsence => self.unexcused_days += 1,
            DayCategory::Sunday => {}
        }
    }

    /// Sum of the five category counters.
    pub fn counted_days(&self) -> u32 {
        self.worked_days
            + self.excused_days
            + self.vacation_days
            + self.unexcused_days
            + self.leave_days
    }

    /// Period start as printed in the table (`DD/MM/YYYY` or empty).
    pub fn period_start_display(&self) -> String {
        display_date::format(self.period_start)
    }

    /// Period end as printed in the table (`DD/MM/YYYY` or empty).
    pub fn period_end_display(&self) -> String {
        display_date::format(self.period_end)
    }

    /// Reference month (`YYYY-MM`) derived from the period end.
    pub fn reference_month(&self) -> Option<String> {
        self.period_end.map(|date| date.format("%Y-%m").to_string())
    }
}

/// Serde adapter for optional `DD/MM/YYYY` dates rendered as blank when absent.
pub(crate) mod display_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn format(date: Option<NaiveDate>) -> String {
        date.map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default()
    }

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExcuseFlags;

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_record_excused_absence_with_multiple_flags() {
        let mut summary = EmployeeSummary::new("Maria Silva", "Escola Azul");
        summary.record(DayCategory::ExcusedAbsence(ExcuseFlags {
            medical_certificate: false,
            holiday: true,
            day_off: true,
        }));

        assert_eq!(summary.excused_days, 1);
        assert_eq!(summary.holiday_count, 1);
        assert_eq!(summary.day_off_count, 1);
        assert_eq!(summary.medical_certificate_count, 0);
    }

    #[test]
    fn test_record_sunday_changes_nothing() {
        let mut summary = EmployeeSummary::new("Maria Silva", "Escola Azul");
        summary.record(DayCategory::Sunday);
        assert_eq!(summary, EmployeeSummary::new("Maria Silva", "Escola Azul"));
    }

    #[test]
    fn test_counted_days_sums_all_counters() {
        let mut summary = EmployeeSummary::new("João", "Escola Verde");
        summary.record(DayCategory::Worked);
        summary.record(DayCategory::Worked);
        summary.record(DayCategory::Vacation);
        summary.record(DayCategory::Leave);
        summary.record(DayCategory::UnexcusedAbsence);
        summary.record(DayCategory::Sunday);
        assert_eq!(summary.counted_days(), 5);
    }

    #[test]
    fn test_serializes_with_column_names_and_display_dates() {
        let mut summary = EmployeeSummary::new("Maria Silva", "Escola Azul");
        summary.period_start = Some(date(1, 11, 2025));
        summary.period_end = Some(date(30, 11, 2025));
        summary.worked_days = 20;

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["CostCenter"], "Escola Azul");
        assert_eq!(json["Name"], "Maria Silva");
        assert_eq!(json["PeriodStart"], "01/11/2025");
        assert_eq!(json["PeriodEnd"], "30/11/2025");
        assert_eq!(json["WorkedDays"], 20);
        assert_eq!(json["MedicalCertificateCount"], 0);
    }

    #[test]
    fn test_missing_period_serializes_as_empty_string() {
        let summary = EmployeeSummary::new(UNKNOWN_IDENTITY, UNKNOWN_IDENTITY);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["PeriodStart"], "");
        assert_eq!(json["PeriodEnd"], "");
    }

    #[test]
    fn test_deserialize_blank_period() {
        let mut summary = EmployeeSummary::new("Ana", "Escola Azul");
        summary.period_end = Some(date(12, 11, 2025));
        let json = serde_json::to_string(&summary).unwrap();

        let parsed: EmployeeSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.period_start, None);
        assert_eq!(parsed.period_end, Some(date(12, 11, 2025)));
    }

    #[test]
    fn test_reference_month_from_period_end() {
        let mut summary = EmployeeSummary::new("Ana", "Escola Azul");
        assert_eq!(summary.reference_month(), None);

        summary.period_end = Some(date(30, 11, 2025));
        assert_eq!(summary.reference_month().as_deref(), Some("2025-11"));
    }
}
