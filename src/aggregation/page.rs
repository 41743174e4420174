//! Page aggregation: one timesheet page in, one employee summary out.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::EmployeeSummary;

use super::day_line::{classify_day_line, is_day_line, parse_line_date};
use super::identity::{extract_cost_center, extract_name, page_lines};

/// Running min/max over the dates seen on a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodRange {
    bounds: Option<(NaiveDate, NaiveDate)>,
}

impl PeriodRange {
    /// Widens the range to include `date`.
    pub fn include(&mut self, date: NaiveDate) {
        self.bounds = Some(match self.bounds {
            Some((start, end)) => (start.min(date), end.max(date)),
            None => (date, date),
        });
    }

    /// Earliest date seen.
    pub fn start(&self) -> Option<NaiveDate> {
        self.bounds.map(|(start, _)| start)
    }

    /// Latest date seen.
    pub fn end(&self) -> Option<NaiveDate> {
        self.bounds.map(|(_, end)| end)
    }
}

/// Summarizes one timesheet page.
///
/// Identity comes from the `Nome:` and `Centro de Custo:` labels. Every line
/// starting with `DD/MM/YYYY` is classified and counted. Its date, when it
/// is a real calendar date, widens the page period; an unparseable date only
/// drops the line from the period, never from the counters.
///
/// # Example
///
/// ```
/// use ponto_summary::aggregation::aggregate_page;
///
/// let page = "Nome: Maria Silva\n\
///             Centro de Custo: Escola Azul\n\
///             03/11/2025 Seg 08:00 12:00 13:00 17:00\n\
///             02/11/2025 Dom DOMINGO\n";
///
/// let summary = aggregate_page(page);
/// assert_eq!(summary.name, "Maria Silva");
/// assert_eq!(summary.worked_days, 1);
/// assert_eq!(summary.period_start_display(), "02/11/2025");
/// assert_eq!(summary.period_end_display(), "03/11/2025");
/// ```
pub fn aggregate_page(page_text: &str) -> EmployeeSummary {
    let lines = page_lines(page_text);

    let mut summary = EmployeeSummary::new(extract_name(&lines), extract_cost_center(&lines));
    let mut period = PeriodRange::default();
    let mut day_lines = 0usize;

    for line in lines.iter().filter(|line| is_day_line(line)) {
        day_lines += 1;

        if let Some(date) = parse_line_date(line) {
            period.include(date);
        }

        if let Some(category) = classify_day_line(line) {
            summary.record(category);
        }
    }

    summary.period_start = period.start();
    summary.period_end = period.end();

    debug!(
        name = %summary.name,
        cost_center = %summary.cost_center,
        day_lines,
        worked = summary.worked_days,
        excused = summary.excused_days,
        vacation = summary.vacation_days,
        unexcused = summary.unexcused_days,
        leave = summary.leave_days,
        "Aggregated timesheet page"
    );

    summary
}
