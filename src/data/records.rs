//! Delimited record splitting
//!
//! Reads one record per line and splits it into ordered string fields. Field
//! text is kept as written; only quoting is interpreted:
//! - a quoted field may contain the delimiter (`"a,b"`)
//! - `""` inside a quoted field is a literal quote
//! - an unterminated quote runs to the end of the line

use std::io::{self, BufRead, Lines};

/// Iterator over the records of a line-oriented delimited source.
pub struct Records<R> {
    lines: Lines<R>,
    delimiter: char,
    line: usize,
}

impl<R: BufRead> Records<R> {
    pub fn new(reader: R, delimiter: char) -> Self {
        Self {
            lines: reader.lines(),
            delimiter,
            line: 0,
        }
    }

    /// 1-based number of the last line handed out (0 before the first).
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = io::Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line += 1;
        Some(line.map(|l| split_record(&l, self.delimiter)))
    }
}

/// Split a single line into fields, respecting quoted fields.
///
/// An empty line is one empty field.
pub fn split_record(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else if c == '"' {
            in_quotes = true;
        } else if c == delimiter {
            fields.push(std::mem::take(&mut field));
        } else {
            field.push(c);
        }
    }

    // Add the last field
    fields.push(field);
    fields
}
