//! Boxed ASCII table rendering

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

/// Render `rows` under `headers` as a `+---+` bordered table.
///
/// `colorize` may wrap a padded cell in ANSI styling; widths are measured on
/// the plain text.
pub fn render_table(
    headers: &[String],
    rows: &[Vec<String>],
    colorize: Option<&dyn Fn(usize, &str, String) -> String>,
) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.width());
            }
        }
    }

    let border = border_line(&widths);
    let mut out = String::new();

    out.push_str(&border);
    out.push_str(&row_line(headers, &widths, None));
    out.push_str(&border);
    for row in rows {
        out.push_str(&row_line(row, &widths, colorize));
    }
    out.push_str(&border);

    out
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn row_line(
    cells: &[String],
    widths: &[usize],
    colorize: Option<&dyn Fn(usize, &str, String) -> String>,
) -> String {
    let mut line = String::from("|");
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        let padded = format!("{}{}", cell, " ".repeat(width - cell.width()));
        let rendered = match colorize {
            Some(f) => f(i, cell, padded),
            None => padded,
        };
        line.push(' ');
        line.push_str(&rendered);
        line.push_str(" |");
    }
    line.push('\n');
    line
}

/// Colors the cell of a status column by its value.
pub fn status_colorizer(status_column: usize) -> impl Fn(usize, &str, String) -> String {
    move |column, cell, padded| {
        if column != status_column {
            return padded;
        }
        match cell {
            "good" => format!("{}", padded.as_str().green()),
            "recommended" => format!("{}", padded.as_str().yellow()),
            "critical" => format!("{}", padded.as_str().red()),
            _ => padded,
        }
    }
}
