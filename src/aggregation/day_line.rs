//! Day-line classification.
//!
//! A day line is any line that starts with a `DD/MM/YYYY` date token. Each
//! one maps to exactly one [`DayCategory`] through an ordered rule table:
//! status markers are checked first, then clock times, and anything left
//! over is an unexcused absence.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use tracing::trace;

use crate::models::{DATE_FORMAT, DayCategory, ExcuseFlags};

static DATE_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2}/[0-9]{2}/[0-9]{4})").unwrap());

static CLOCK_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([0-9]{2}):([0-9]{2})\b").unwrap());

/// Minimum number of non-zero clock times for a line to count as worked.
pub const MIN_REAL_CLOCK_TIMES: usize = 2;

/// Status markers, matched against the uppercased line.
pub mod markers {
    /// Sunday rest day.
    pub const SUNDAY: &str = "DOMINGO";
    /// Vacation, accented spelling.
    pub const VACATION: &str = "FÉRIAS";
    /// Vacation, unaccented spelling.
    pub const VACATION_PLAIN: &str = "FERIAS";
    /// Leave of absence.
    pub const LEAVE: &str = "AFASTAMENTO";
    /// Approved excuse.
    pub const APPROVED_EXCUSE: &str = "ABONO APROVADO";
    /// Holiday.
    pub const HOLIDAY: &str = "FERIADO";
    /// Medical certificate.
    pub const MEDICAL_CERTIFICATE: &str = "ATESTADO";
    /// Scheduled day off.
    pub const DAY_OFF: &str = "FOLGA";
    /// Explicit absence.
    pub const ABSENCE: &str = "FALTA";
}

/// Which rule of the classification table produced a category.
///
/// Useful when auditing why a line landed where it did; the fallback rule in
/// particular is a low-confidence path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassificationRule {
    /// "DOMINGO" present.
    SundayMarker,
    /// "FÉRIAS" or "FERIAS" present.
    VacationMarker,
    /// "AFASTAMENTO" present.
    LeaveMarker,
    /// "ABONO APROVADO" or "FERIADO" present.
    ExcuseMarker,
    /// "FALTA" present.
    AbsenceMarker,
    /// Enough real clock times.
    ClockTimes,
    /// Nothing matched.
    Fallback,
}

/// A classified day line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayLineClassification {
    /// The category assigned to the line.
    pub category: DayCategory,
    /// The rule that decided it.
    pub rule: ClassificationRule,
}

/// Returns the leading `DD/MM/YYYY` token of a day line, if present.
pub fn date_token(line: &str) -> Option<&str> {
    DATE_ANCHOR
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Returns true if the line starts with a `DD/MM/YYYY` token.
pub fn is_day_line(line: &str) -> bool {
    DATE_ANCHOR.is_match(line)
}

/// Parses the leading date of a day line.
///
/// Returns `None` for non-day lines and for tokens that are not real
/// calendar dates (e.g. `31/02/2025`, or any date in year `0000`).
pub fn parse_line_date(line: &str) -> Option<NaiveDate> {
    date_token(line)
        .and_then(|token| NaiveDate::parse_from_str(token, DATE_FORMAT).ok())
        .filter(|date| date.year() >= 1)
}

/// Counts `HH:MM` tokens other than `00:00`.
pub fn count_real_clock_times(line: &str) -> usize {
    CLOCK_TIME
        .captures_iter(line)
        .filter(|caps| &caps[1] != "00" || &caps[2] != "00")
        .count()
}

/// Classifies a timesheet line.
///
/// Returns `None` when the line does not start with a `DD/MM/YYYY` token.
/// Otherwise the first matching rule wins:
///
/// 1. `DOMINGO` → [`DayCategory::Sunday`]
/// 2. `FÉRIAS` / `FERIAS` → [`DayCategory::Vacation`]
/// 3. `AFASTAMENTO` → [`DayCategory::Leave`]
/// 4. `ABONO APROVADO` / `FERIADO` → [`DayCategory::ExcusedAbsence`] with flags
/// 5. `FALTA` → [`DayCategory::UnexcusedAbsence`]
/// 6. two or more non-zero `HH:MM` tokens → [`DayCategory::Worked`]
/// 7. otherwise → [`DayCategory::UnexcusedAbsence`]
///
/// Marker matching is case-insensitive.
///
/// # Example
///
/// ```
/// use ponto_summary::aggregation::classify_day_line;
/// use ponto_summary::models::DayCategory;
///
/// assert_eq!(
///     classify_day_line("03/11/2025 Seg 08:00 12:00 13:00 17:00"),
///     Some(DayCategory::Worked)
/// );
/// assert_eq!(
///     classify_day_line("02/11/2025 DOMINGO FALTA"),
///     Some(DayCategory::Sunday)
/// );
/// assert_eq!(classify_day_line("Nome: Maria Silva"), None);
/// ```
pub fn classify_day_line(line: &str) -> Option<DayCategory> {
    classify_with_rule(line).map(|c| c.category)
}

/// Classifies a timesheet line and reports the deciding rule.
pub fn classify_with_rule(line: &str) -> Option<DayLineClassification> {
    if !is_day_line(line) {
        return None;
    }

    let text = line.to_uppercase();
    let has = |marker: &str| text.contains(marker);

    let (category, rule) = if has(markers::SUNDAY) {
        (DayCategory::Sunday, ClassificationRule::SundayMarker)
    } else if has(markers::VACATION) || has(markers::VACATION_PLAIN) {
        (DayCategory::Vacation, ClassificationRule::VacationMarker)
    } else if has(markers::LEAVE) {
        (DayCategory::Leave, ClassificationRule::LeaveMarker)
    } else if has(markers::APPROVED_EXCUSE) || has(markers::HOLIDAY) {
        let flags = ExcuseFlags {
            medical_certificate: has(markers::MEDICAL_CERTIFICATE),
            holiday: has(markers::HOLIDAY),
            day_off: has(markers::DAY_OFF),
        };
        (
            DayCategory::ExcusedAbsence(flags),
            ClassificationRule::ExcuseMarker,
        )
    } else if has(markers::ABSENCE) {
        (
            DayCategory::UnexcusedAbsence,
            ClassificationRule::AbsenceMarker,
        )
    } else if count_real_clock_times(line) >= MIN_REAL_CLOCK_TIMES {
        (DayCategory::Worked, ClassificationRule::ClockTimes)
    } else {
        trace!(line = %line, "day line matched no rule, counting as unexcused absence");
        (DayCategory::UnexcusedAbsence, ClassificationRule::Fallback)
    };

    Some(DayLineClassification { category, rule })
}
