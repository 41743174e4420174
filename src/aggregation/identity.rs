//! Employee identity extraction from page headers.

use crate::models::UNKNOWN_IDENTITY;

/// Label preceding the employee name. Also marks a page as an employee page.
pub const NAME_LABEL: &str = "Nome:";

/// Label preceding the cost center.
pub const COST_CENTER_LABEL: &str = "Centro de Custo:";

/// Splits page text into lines the way the PDF layer breaks them.
///
/// Accepts `\n`, `\r\n`, lone `\r` and the other Unicode line separators.
/// A trailing separator does not produce an empty final line.
pub fn page_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + ch.len_utf8();
        if ch == '\r' {
            if let Some(&(next_idx, '\n')) = chars.peek() {
                chars.next();
                start = next_idx + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}'
            | '\u{2029}'
    )
}

/// Text after the first occurrence of `label` on `line`, trimmed.
fn after_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.split_once(label).map(|(_, rest)| rest.trim())
}

/// Extracts the employee name.
///
/// Takes the text after the first `Nome:` label. When the label ends its line
/// the following line is used instead. Falls back to `DESCONHECIDO`.
///
/// # Example
///
/// ```
/// use ponto_summary::aggregation::extract_name;
///
/// assert_eq!(extract_name(&["Nome: Maria Silva"]), "Maria Silva");
/// assert_eq!(extract_name(&["Nome:", "  Maria Silva "]), "Maria Silva");
/// assert_eq!(extract_name(&["Centro de Custo: Escola Azul"]), "DESCONHECIDO");
/// ```
pub fn extract_name(lines: &[&str]) -> String {
    for (idx, line) in lines.iter().enumerate() {
        let Some(value) = after_label(line, NAME_LABEL) else {
            continue;
        };
        if !value.is_empty() {
            return value.to_string();
        }
        // Label on its own line; the name wraps onto the next one.
        if let Some(next) = lines.get(idx + 1) {
            return next.trim().to_string();
        }
    }
    UNKNOWN_IDENTITY.to_string()
}

/// Extracts the cost center from the first `Centro de Custo:` line.
///
/// A label with nothing after it yields an empty string. A missing label
/// yields `DESCONHECIDO`.
pub fn extract_cost_center(lines: &[&str]) -> String {
    lines
        .iter()
        .find_map(|line| after_label(line, COST_CENTER_LABEL))
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_IDENTITY.to_string())
}

/// Returns true if the page describes an employee.
pub fn is_employee_page(text: &str) -> bool {
    text.contains(NAME_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_lines_handles_mixed_separators() {
        assert_eq!(page_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_page_lines_keeps_blank_lines_but_not_trailing_one() {
        assert_eq!(page_lines("a\n\nb\n"), vec!["a", "", "b"]);
        assert!(page_lines("").is_empty());
    }

    #[test]
    fn test_page_lines_splits_on_form_feed() {
        assert_eq!(page_lines("a\u{0c}b"), vec!["a", "b"]);
    }

    #[test]
    fn test_name_on_label_line() {
        let lines = ["Empresa X", "Nome:   Maria Silva   Matricula: 123"];
        assert_eq!(extract_name(&lines), "Maria Silva   Matricula: 123");
    }

    #[test]
    fn test_name_on_following_line() {
        let lines = ["Nome:", "João Pereira", "Centro de Custo: Escola Azul"];
        assert_eq!(extract_name(&lines), "João Pereira");
    }

    #[test]
    fn test_name_following_line_may_be_blank() {
        let lines = ["Nome:", "   ", "Nome: Outra Pessoa"];
        assert_eq!(extract_name(&lines), "");
    }

    #[test]
    fn test_name_label_on_last_line_keeps_searching() {
        let lines = ["Cabeçalho", "Nome:"];
        assert_eq!(extract_name(&lines), UNKNOWN_IDENTITY);
    }

    #[test]
    fn test_name_missing_uses_placeholder() {
        assert_eq!(extract_name(&["Relatorio"]), UNKNOWN_IDENTITY);
        assert_eq!(extract_name(&[]), UNKNOWN_IDENTITY);
    }

    #[test]
    fn test_name_label_is_case_sensitive() {
        assert_eq!(extract_name(&["NOME: Maria"]), UNKNOWN_IDENTITY);
    }

    #[test]
    fn test_cost_center_found() {
        let lines = ["Nome: Ana", "Centro de Custo:  Escola Azul "];
        assert_eq!(extract_cost_center(&lines), "Escola Azul");
    }

    #[test]
    fn test_cost_center_uses_first_occurrence() {
        let lines = ["Centro de Custo: Escola Azul", "Centro de Custo: Escola Verde"];
        assert_eq!(extract_cost_center(&lines), "Escola Azul");
    }

    #[test]
    fn test_cost_center_label_without_value_is_empty() {
        assert_eq!(extract_cost_center(&["Centro de Custo:"]), "");
    }

    #[test]
    fn test_cost_center_missing_uses_placeholder() {
        assert_eq!(extract_cost_center(&["Nome: Ana"]), UNKNOWN_IDENTITY);
    }

    #[test]
    fn test_is_employee_page() {
        assert!(is_employee_page("Cabeçalho\nNome: Ana\n"));
        assert!(!is_employee_page("Resumo geral\nTotal de paginas: 3"));
    }
}
