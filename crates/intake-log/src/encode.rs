//! Row encoding and decoding for the flat file.
//!
//! RFC-4180-style quoting: a field containing a comma, double quote, or
//! line break is wrapped in double quotes, with embedded quotes doubled.
//! The fixed 14-column schema keeps this small enough that no external
//! CSV machinery is warranted.

/// Encode one field, quoting only when necessary.
pub fn encode_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        let mut out = String::with_capacity(field.len() + 2);
        out.push('"');
        for c in field.chars() {
            if c == '"' {
                out.push('"');
            }
            out.push(c);
        }
        out.push('"');
        out
    } else {
        field.to_string()
    }
}

/// Encode one row, newline-terminated.
pub fn encode_row(fields: &[String]) -> String {
    let mut row = fields
        .iter()
        .map(|f| encode_field(f))
        .collect::<Vec<_>>()
        .join(",");
    row.push('\n');
    row
}

/// Split file content into rows of fields, honoring quoted fields that
/// may span lines. The trailing newline of the last row is optional.
pub fn parse_rows(content: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => {
                fields.push(std::mem::take(&mut field));
            }
            '\n' => {
                fields.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut fields));
            }
            '\r' => {
                // Consumed silently; the following '\n' ends the row.
            }
            _ => field.push(c),
        }
    }

    // Final row without a trailing newline.
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        rows.push(fields);
    }

    rows
}
