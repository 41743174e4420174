//! Classification and aggregation core.
//!
//! Data flows leaf-first: the day-line classifier feeds the page aggregator,
//! which feeds the document aggregator. Everything here is synchronous,
//! stateless and infallible.

mod day_line;
mod document;
mod identity;
mod page;

pub use day_line::{
    ClassificationRule, DayLineClassification, MIN_REAL_CLOCK_TIMES, classify_day_line,
    classify_with_rule, count_real_clock_times, date_token, is_day_line, markers,
    parse_line_date,
};
pub use document::aggregate_document;
pub use identity::{
    COST_CENTER_LABEL, NAME_LABEL, extract_cost_center, extract_name, is_employee_page,
    page_lines,
};
pub use page::{PeriodRange, aggregate_page};
