#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
    /// Column holding status labels; the only one that gets colored.
    pub status_column: Option<usize>,
}

/// Display width of a cell. Counts chars, not bytes, so accented names align.
fn display_len(value: &str) -> usize {
    value.chars().count()
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_len(cell))
                .max()
                .unwrap_or(0)
                .max(display_len(header))
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(&truncate_text(header, *width), *width, false, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(display_len(header_line.trim_end()));

    let row_lines = rows
        .iter()
        .map(|row| {
            widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let value = row.get(index).cloned().unwrap_or_else(|| "-".to_string());
                    let truncated = truncate_text(&value, *width);
                    let numeric = looks_numeric(&truncated);
                    let colorize = options.color && options.status_column == Some(index);
                    let cell = if colorize {
                        colorize_status(&truncated)
                    } else {
                        truncated
                    };
                    format_cell(&cell, *width, numeric, colorize)
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>();

    let mut lines = Vec::with_capacity(2 + row_lines.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let mut candidate_idx = None;
        let mut candidate_width = 0usize;
        for (idx, width) in widths.iter().enumerate() {
            let min_width = display_len(headers[idx]).max(6);
            if *width > min_width && *width > candidate_width {
                candidate_idx = Some(idx);
                candidate_width = *width;
            }
        }

        let Some(idx) = candidate_idx else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if display_len(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out = value.chars().take(width - 1).collect::<String>();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit())
}

fn format_cell(value: &str, width: usize, numeric: bool, has_ansi: bool) -> String {
    let plain_len = if has_ansi {
        display_len(&strip_ansi(value))
    } else {
        display_len(value)
    };
    let pad = width.saturating_sub(plain_len);
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

/// Green for delivered, yellow for pending, red for not delivered.
fn colorize_status(value: &str) -> String {
    let code = match value {
        "Entregue" | "delivered" => Some("32"),
        "Pendente" | "pending" => Some("33"),
        "Não entregue" | "not_delivered" => Some("31"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[1;{code}m{value}\u{1b}[0m"),
        None => value.to_string(),
    }
}

fn strip_ansi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            let _ = chars.next();
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
        status_column: None,
    };

    #[test]
    fn accented_cells_align_by_chars() {
        let headers = ["nome", "status"];
        let rows = vec![
            vec!["Indústria São João".to_string(), "Não entregue".to_string()],
            vec!["Acme".to_string(), "Entregue".to_string()],
        ];
        let table = render_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        let status_col = lines[0].find("status").unwrap();
        assert_eq!(lines[0][..status_col].chars().count(), 20);
        assert_eq!(lines[3].chars().position(|c| c == 'E'), Some(20));
        assert!(lines[1].chars().all(|c| c == '-'));
    }

    #[test]
    fn digits_are_right_aligned() {
        let headers = ["index", "cnpj"];
        let rows = vec![
            vec!["0".to_string(), "11222333000181".to_string()],
            vec!["10".to_string(), "1".to_string()],
        ];
        let table = render_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[2].starts_with("    0"));
        assert!(lines[3].ends_with(" 1"));
    }

    #[test]
    fn narrow_terminals_truncate_wide_columns() {
        let headers = ["nome", "cnpj"];
        let rows = vec![vec![
            "Companhia Brasileira de Distribuição".to_string(),
            "47508411000156".to_string(),
        ]];
        let table = render_table(
            &headers,
            &rows,
            TableOptions {
                max_width: Some(30),
                ..PLAIN
            },
        );
        let row = table.lines().nth(2).unwrap();
        assert!(row.contains('…'));
        assert!(row.chars().count() <= 30);
    }

    #[test]
    fn colored_status_keeps_alignment() {
        let colored = colorize_status("Entregue");
        assert!(colored.starts_with("\u{1b}[1;32m"));
        assert_eq!(strip_ansi(&colored), "Entregue");
        assert_eq!(colorize_status("Não verificado"), "Não verificado");
    }

    #[test]
    fn only_the_status_column_is_colored() {
        let headers = ["nome", "status"];
        let rows = vec![vec!["Pendente".to_string(), "Entregue".to_string()]];
        let table = render_table(
            &headers,
            &rows,
            TableOptions {
                color: true,
                status_column: Some(1),
                ..PLAIN
            },
        );
        let row = table.lines().nth(2).unwrap();

        assert!(row.starts_with("Pendente  "));
        assert!(row.ends_with("\u{1b}[1;32mEntregue\u{1b}[0m"));
    }
}
