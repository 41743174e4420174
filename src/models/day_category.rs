//! Day categories assigned to timesheet day lines.

use serde::{Deserialize, Serialize};

/// Sub-reasons attached to an excused absence.
///
/// The flags are independent: a single day line may carry several of them
/// (for example a holiday that is also a scheduled day off).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExcuseFlags {
    /// "ATESTADO" appeared on the line.
    pub medical_certificate: bool,
    /// "FERIADO" appeared on the line.
    pub holiday: bool,
    /// "FOLGA" appeared on the line.
    pub day_off: bool,
}

/// The single category a dated timesheet line falls into.
///
/// # Example
///
/// ```
/// use ponto_summary::models::{DayCategory, ExcuseFlags};
///
/// let holiday = DayCategory::ExcusedAbsence(ExcuseFlags {
///     holiday: true,
///     ..ExcuseFlags::default()
/// });
/// assert!(holiday.is_counted());
/// assert!(!DayCategory::Sunday.is_counted());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "category", content = "flags")]
pub enum DayCategory {
    /// Two or more non-zero clock times and no status marker.
    Worked,
    /// Approved excuse ("ABONO APROVADO") or holiday ("FERIADO").
    ExcusedAbsence(ExcuseFlags),
    /// Vacation ("FÉRIAS" / "FERIAS").
    Vacation,
    /// Leave of absence ("AFASTAMENTO").
    Leave,
    /// Sunday rest day. Contributes to the period range only.
    Sunday,
    /// Explicit "FALTA", or the fallback for lines nothing else matched.
    UnexcusedAbsence,
}

impl DayCategory {
    /// Returns true if the category increments one of the summary counters.
    pub fn is_counted(&self) -> bool {
        !matches!(self, DayCategory::Sunday)
    }
}

impl std::fmt::Display for DayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayCategory::Worked => write!(f, "Worked"),
            DayCategory::ExcusedAbsence(_) => write!(f, "ExcusedAbsence"),
            DayCategory::Vacation => write!(f, "Vacation"),
            DayCategory::Leave => write!(f, "Leave"),
            DayCategory::Sunday => write!(f, "Sunday"),
            DayCategory::UnexcusedAbsence => write!(f, "UnexcusedAbsence"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_sunday_is_uncounted() {
        let all = [
            DayCategory::Worked,
            DayCategory::ExcusedAbsence(ExcuseFlags::default()),
            DayCategory::Vacation,
            DayCategory::Leave,
            DayCategory::UnexcusedAbsence,
        ];
        assert!(all.iter().all(DayCategory::is_counted));
        assert!(!DayCategory::Sunday.is_counted());
    }

    #[test]
    fn test_category_serialization_carries_flags() {
        let category = DayCategory::ExcusedAbsence(ExcuseFlags {
            medical_certificate: true,
            holiday: false,
            day_off: true,
        });
        let json = serde_json::to_value(category).unwrap();
        assert_eq!(json["category"], "excused_absence");
        assert_eq!(json["flags"]["medical_certificate"], true);
        assert_eq!(json["flags"]["day_off"], true);
    }

    #[test]
    fn test_unit_category_serialization() {
        assert_eq!(
            serde_json::to_string(&DayCategory::UnexcusedAbsence).unwrap(),
            r#"{"category":"unexcused_absence"}"#
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(DayCategory::Worked.to_string(), "Worked");
        assert_eq!(
            DayCategory::ExcusedAbsence(ExcuseFlags::default()).to_string(),
            "ExcusedAbsence"
        );
    }
}
