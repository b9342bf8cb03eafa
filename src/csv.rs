// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV parser (quotes + CRLF tolerant).
/// A row made of a single quoted empty field (`""`) is kept as `[""]`;
/// a truly blank line is skipped.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // doubled quote
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                    quoted = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                let blank = row.len() == 1 && row[0].is_empty() && !quoted;
                if blank {
                    row.clear();
                } else {
                    rows.push(take(&mut row));
                }
                quoted = false;
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without a final newline, even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() || quoted {
        row.push(field);
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single row to any writer, `\n` terminated.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    // One empty cell alone would read back as a blank line.
    if let [only] = row {
        if only.is_empty() {
            return writeln!(w, "\"\"");
        }
    }

    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header line then one single-cell row per item.
pub fn write_column<W: Write>(mut w: W, header: &str, items: &[String], sep: char) -> io::Result<()> {
    write_row(&mut w, &[s!(header)], sep)?;
    for item in items {
        write_row(&mut w, std::slice::from_ref(item), sep)?;
    }
    Ok(())
}

/// Same as `write_column`, into a String.
pub fn column_to_string(header: &str, items: &[String], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_column(&mut buf, header, items, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
