// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant).
/// Blank lines are skipped.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.trim_start_matches('\u{feff}').chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    row.push(field);
    if !(row.len() == 1 && row[0].is_empty()) {
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
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

/// Stringify rows as-is (no transforms).
pub fn rows_to_string<S: AsRef<str>>(rows: &[Vec<S>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_fields_with_separators_quotes_and_newlines() {
        let rows = vec![vec!["a,b", "say \"hi\"", "line1\nline2", "plain"]];
        let out = rows_to_string(&rows, ',');
        assert_eq!(out, "\"a,b\",\"say \"\"hi\"\"\",\"line1\nline2\",plain\n");
    }

    #[test]
    fn parse_reads_back_what_write_produces() {
        let rows = vec![
            vec![s!("Tractate name"), s!("Chapter")],
            vec![s!("בבא קמא"), s!("פרק ד - שור שנגח ד' וה'")],
            vec![s!("a,b"), s!("x\ny")],
        ];
        let text = rows_to_string(&rows, ',');
        assert_eq!(parse_rows(&text, ','), rows);
    }

    #[test]
    fn parse_skips_blank_lines_and_bom() {
        let text = "\u{feff}A,B\r\n\r\n1,2\n";
        assert_eq!(parse_rows(text, ','), vec![vec!["A", "B"], vec!["1", "2"]]);
    }

    #[test]
    fn parse_tsv() {
        assert_eq!(parse_rows("a\tb c\n", '\t'), vec![vec!["a", "b c"]]);
    }
}
