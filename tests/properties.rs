//! Property tests for page aggregation.
//!
//! Generated pages mix employee headers, noise lines and day lines built
//! from the status markers found on real timesheets.

use chrono::NaiveDate;
use proptest::prelude::*;

use ponto_summary::aggregation::{aggregate_document, aggregate_page, classify_day_line};
use ponto_summary::models::DayCategory;

const DAY_LINE_BODIES: &[&str] = &[
    "Seg 08:00 12:00 13:00 17:00",
    "Ter 07:30 11:30",
    "Qua 08:00",
    "Qui 00:00 00:00 00:00 00:00",
    "Sex FALTA",
    "Sab FOLGA",
    "Dom DOMINGO",
    "Seg FÉRIAS",
    "Ter ferias",
    "Qua AFASTAMENTO",
    "Qui FERIADO",
    "Sex ABONO APROVADO ATESTADO",
    "Seg ABONO APROVADO FOLGA",
    "Ter",
    "Qua 08:00 12:00 DOMINGO FALTA",
];

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2020i32..2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn day_line_strategy() -> impl Strategy<Value = (NaiveDate, String)> {
    (date_strategy(), prop::sample::select(DAY_LINE_BODIES)).prop_map(|(date, body)| {
        (date, format!("{} {}", date.format("%d/%m/%Y"), body))
    })
}

fn render_page(name: &str, lines: &[(NaiveDate, String)]) -> String {
    let mut page = format!("ESPELHO DE PONTO\nNome: {}\nCentro de Custo: Escola\n", name);
    for (_, line) in lines {
        page.push_str(line);
        page.push('\n');
    }
    page.push_str("Total de horas: 00:00\n");
    page
}

proptest! {
    #[test]
    fn test_every_day_line_gets_a_category((_, line) in day_line_strategy()) {
        prop_assert!(classify_day_line(&line).is_some());
    }

    #[test]
    fn test_lines_without_leading_date_are_ignored(text in "[A-Za-z :]{0,40}") {
        prop_assert!(classify_day_line(&text).is_none());
    }

    #[test]
    fn test_counters_account_for_every_day_line(
        lines in prop::collection::vec(day_line_strategy(), 0..40)
    ) {
        let summary = aggregate_page(&render_page("Ana", &lines));

        let sundays = lines
            .iter()
            .filter(|(_, line)| classify_day_line(line) == Some(DayCategory::Sunday))
            .count() as u32;

        prop_assert_eq!(summary.counted_days() + sundays, lines.len() as u32);
        prop_assert!(summary.medical_certificate_count <= summary.excused_days);
        prop_assert!(summary.holiday_count <= summary.excused_days);
        prop_assert!(summary.day_off_count <= summary.excused_days);
    }

    #[test]
    fn test_period_spans_min_and_max_dates(
        lines in prop::collection::vec(day_line_strategy(), 1..40)
    ) {
        let summary = aggregate_page(&render_page("Ana", &lines));

        let min = lines.iter().map(|(date, _)| *date).min();
        let max = lines.iter().map(|(date, _)| *date).max();
        prop_assert_eq!(summary.period_start, min);
        prop_assert_eq!(summary.period_end, max);
    }

    #[test]
    fn test_one_row_per_employee_page(
        pages in prop::collection::vec(
            (any::<bool>(), prop::collection::vec(day_line_strategy(), 0..10)),
            0..8
        )
    ) {
        let texts: Vec<String> = pages
            .iter()
            .enumerate()
            .map(|(i, (is_employee, lines))| {
                if *is_employee {
                    render_page(&format!("Pessoa {}", i), lines)
                } else {
                    "RESUMO GERAL\nCentro de Custo: Escola\n".to_string()
                }
            })
            .collect();

        let table = aggregate_document(&texts);

        let expected: Vec<String> = pages
            .iter()
            .enumerate()
            .filter(|(_, (is_employee, _))| *is_employee)
            .map(|(i, _)| format!("Pessoa {}", i))
            .collect();
        let names: Vec<String> = table.rows.iter().map(|row| row.name.clone()).collect();
        prop_assert_eq!(names, expected);
    }
}
