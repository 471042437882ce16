//! Plain-text extraction from host-provided HTML fragments
//!
//! Check descriptions arrive as small HTML snippets (`<p>`, `<a>`, `<code>`).
//! Rows carry plain text only.

/// Elements removed together with their content.
const BLOCK_ELEMENTS: &[&str] = &["script", "style"];

/// Strip all markup from `input`, returning trimmed plain text.
///
/// `<script>` and `<style>` elements are dropped with their content, every
/// other tag is removed, and numeric plus common named entities are decoded.
pub fn strip_tags(input: &str) -> String {
    let mut text = input.to_string();
    for element in BLOCK_ELEMENTS {
        text = remove_element(&text, element);
    }

    let text = remove_tags(&text);
    decode_entities(&text).trim().to_string()
}

fn remove_element(input: &str, element: &str) -> String {
    // ASCII lowercasing keeps byte offsets aligned with `input`.
    let lower = input.to_ascii_lowercase();
    let open = format!("<{}", element);
    let close = format!("</{}", element);

    let mut out = String::with_capacity(input.len());
    let mut pos = 0;
    while let Some(start) = find_tag(&lower, pos, &open) {
        let Some(close_start) = find_tag(&lower, start, &close) else {
            break;
        };
        let Some(end) = lower[close_start..].find('>').map(|i| i + close_start + 1) else {
            break;
        };
        out.push_str(&input[pos..start]);
        pos = end;
    }
    out.push_str(&input[pos..]);
    out
}

/// Offset of the next `name` tag opener at or after `from`.
///
/// The name must end the tag name, so `<style` does not match `<styles>`.
fn find_tag(lower: &str, from: usize, name: &str) -> Option<usize> {
    let mut pos = from;
    while let Some(start) = lower[pos..].find(name).map(|i| i + pos) {
        let end = start + name.len();
        match lower[end..].chars().next() {
            None => return Some(start),
            Some(c) if c == '>' || c == '/' || c.is_whitespace() => return Some(start),
            Some(_) => pos = end,
        }
    }
    None
}

fn remove_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_tag = false;

    while let Some(c) = chars.next() {
        if in_tag {
            if c == '>' {
                in_tag = false;
            }
            continue;
        }

        if c == '<' {
            let starts_tag = chars
                .peek()
                .map(|next| next.is_ascii_alphabetic() || matches!(next, '/' | '!' | '?'))
                .unwrap_or(false);
            if starts_tag {
                in_tag = true;
                continue;
            }
        }
        out.push(c);
    }

    out
}

fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp..];

        let decoded = candidate
            .find(';')
            .filter(|&semi| semi > 1 && semi <= 10)
            .and_then(|semi| decode_entity(&candidate[1..semi]).map(|c| (c, semi)));

        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &candidate[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }

    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => None,
    }
}
