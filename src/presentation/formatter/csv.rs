//! CSV rendering

/// Render a header line followed by one line per row.
pub fn render_csv(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    push_line(&mut out, headers);
    for row in rows {
        push_line(&mut out, row);
    }
    out
}

fn push_line(out: &mut String, cells: &[String]) {
    let line: Vec<String> = cells.iter().map(|c| escape_csv(c)).collect();
    out.push_str(&line.join(","));
    out.push('\n');
}

/// Quote a cell when it contains a delimiter, quote, or line break.
pub fn escape_csv(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
