//! Record tokenizer for delimited text.
//!
//! Reads whole records (not lines) so that quoted fields may contain the
//! delimiter and embedded newlines. Quoting rules:
//!
//! - A field wrapped in double quotes is taken literally; `""` inside a
//!   quoted field is one literal `"`.
//! - Leading/trailing whitespace around a field is trimmed unless the field
//!   was quoted, where content is preserved byte-for-byte.
//! - Whitespace may sit between a closing quote and the next delimiter or
//!   record end; anything else there flags the record as malformed.
//! - A quote that is still open at end of input is a fatal parse error.
//!
//! Records that contain no content at all (blank or whitespace-only lines)
//! are not emitted.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::{ParseError, ParseResult};

/// One tokenized record, before header/row interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawRecord {
    /// 1-based line number of the record's first line.
    pub(crate) line: usize,
    /// Field values, trimmed unless quoted.
    pub(crate) fields: Vec<String>,
    /// True when any field carried unescaped content after its closing quote.
    pub(crate) trailing_content: bool,
}

/// How a field ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldEnd {
    /// The delimiter; another field follows in the same record.
    Delimiter,
    /// A newline; the record is complete.
    Record,
    /// End of input.
    Eof,
}

struct Field {
    text: String,
    end: FieldEnd,
    quoted: bool,
    trailing_content: bool,
}

/// Tokenize the whole input into records.
pub(crate) fn read_records(text: &str, delimiter: char) -> ParseResult<Vec<RawRecord>> {
    let mut chars = text.chars().peekable();
    let mut line = 1usize;
    let mut records = Vec::new();

    while chars.peek().is_some() {
        let record_line = line;
        let mut fields = Vec::new();
        let mut trailing_content = false;
        let mut blank = true;

        loop {
            let field = read_field(&mut chars, &mut line, delimiter)?;
            if field.quoted || !field.text.is_empty() {
                blank = false;
            }
            trailing_content |= field.trailing_content;
            fields.push(field.text);
            match field.end {
                FieldEnd::Delimiter => {
                    // Even an all-empty record like ",," has structure.
                    blank = false;
                }
                FieldEnd::Record | FieldEnd::Eof => break,
            }
        }

        if !blank {
            records.push(RawRecord {
                line: record_line,
                fields,
                trailing_content,
            });
        }
    }

    Ok(records)
}

fn read_field(
    chars: &mut Peekable<Chars<'_>>,
    line: &mut usize,
    delimiter: char,
) -> ParseResult<Field> {
    // Leading whitespace outside quotes is dropped.
    while matches!(chars.peek(), Some(&(' ' | '\t'))) {
        chars.next();
    }

    if chars.peek() == Some(&'"') {
        read_quoted_field(chars, line, delimiter)
    } else {
        Ok(read_bare_field(chars, line, delimiter))
    }
}

fn read_quoted_field(
    chars: &mut Peekable<Chars<'_>>,
    line: &mut usize,
    delimiter: char,
) -> ParseResult<Field> {
    let open_line = *line;
    chars.next(); // opening quote
    let mut text = String::new();

    loop {
        match chars.next() {
            None => return Err(ParseError::UnterminatedQuote { line: open_line }),
            Some('"') => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    text.push('"');
                } else {
                    break;
                }
            }
            Some(c) => {
                if c == '\n' {
                    *line += 1;
                }
                text.push(c);
            }
        }
    }

    // Only whitespace may separate the closing quote from the delimiter or
    // record end.
    let mut trailing_content = false;
    let end = loop {
        match chars.peek().copied() {
            None => break FieldEnd::Eof,
            Some(c) if c == delimiter => {
                chars.next();
                break FieldEnd::Delimiter;
            }
            Some('\n') => {
                chars.next();
                *line += 1;
                break FieldEnd::Record;
            }
            Some('\r') => {
                chars.next();
                if chars.peek() == Some(&'\n') {
                    chars.next();
                    *line += 1;
                    break FieldEnd::Record;
                }
            }
            Some(' ' | '\t') => {
                chars.next();
            }
            Some(_) => {
                chars.next();
                trailing_content = true;
            }
        }
    };

    Ok(Field {
        text,
        end,
        quoted: true,
        trailing_content,
    })
}

fn read_bare_field(chars: &mut Peekable<Chars<'_>>, line: &mut usize, delimiter: char) -> Field {
    let mut buf = String::new();
    let end = loop {
        match chars.peek().copied() {
            None => break FieldEnd::Eof,
            Some(c) if c == delimiter => {
                chars.next();
                break FieldEnd::Delimiter;
            }
            Some('\n') => {
                chars.next();
                *line += 1;
                break FieldEnd::Record;
            }
            Some('\r') => {
                chars.next();
                if chars.peek() == Some(&'\n') {
                    chars.next();
                    *line += 1;
                    break FieldEnd::Record;
                }
                buf.push('\r');
            }
            Some(c) => {
                chars.next();
                buf.push(c);
            }
        }
    };

    Field {
        text: buf.trim().to_string(),
        end,
        quoted: false,
        trailing_content: false,
    }
}
