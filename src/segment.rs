//! Column breaking for vertical text.
//!
//! Text is consumed in a single pass. A column closes on a newline or when it
//! reaches the configured length, with two exceptions:
//!
//! * kinsoku: a break is never placed right before a character in
//!   [`NO_BREAK_AFTER`]. Those characters hang on the end of the current
//!   column instead of starting the next one.
//! * widow control: a paragraph never ends in a column holding a single
//!   character; that character stays with the column before it.

use crate::error::ConfigurationError;
use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// Closing punctuation that must not start a column.
pub const NO_BREAK_AFTER: [char; 4] = ['。', '、', '」', '』'];

pub fn is_no_break_after(ch: char) -> bool {
    NO_BREAK_AFTER.contains(&ch)
}

/// One vertical line of text, characters in reading order (top to bottom).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Column(Vec<char>);

impl Column {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_string(&self) -> String {
        self.0.iter().collect()
    }

    fn push(&mut self, ch: char) {
        self.0.push(ch);
    }
}

impl From<&str> for Column {
    fn from(value: &str) -> Self {
        Column(value.chars().collect())
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.0 {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Split `text` into columns of roughly `max_column_chars` characters.
///
/// Whitespace other than newlines occupies a slot like any other character.
/// Empty text yields no columns.
pub fn segment_into_columns(text: &str, max_column_chars: usize) -> Result<Vec<Column>, ConfigurationError> {
    if max_column_chars == 0 {
        return Err(ConfigurationError::InvalidMaxColumnChars);
    }

    let mut columns = Vec::new();
    let mut current = Column::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\r' && chars.peek() == Some(&'\n') {
            continue;
        }
        if ch == '\n' {
            if !current.is_empty() {
                columns.push(std::mem::take(&mut current));
            }
            continue;
        }

        current.push(ch);
        if current.len() >= max_column_chars && may_break_before(&chars, max_column_chars) {
            columns.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        columns.push(current);
    }
    Ok(columns)
}

fn may_break_before(rest: &Peekable<Chars<'_>>, max_column_chars: usize) -> bool {
    let mut ahead = rest.clone();
    if ahead.peek().is_some_and(|next| is_no_break_after(*next)) {
        return false;
    }
    max_column_chars == 1 || paragraph_remainder(ahead) != 1
}

/// Characters left before the paragraph ends, counted up to two. A lone `\r`
/// is content; only `\n` or `\r\n` end the paragraph.
fn paragraph_remainder(mut ahead: Peekable<Chars<'_>>) -> usize {
    let mut count = 0;
    while count < 2 {
        match ahead.next() {
            None | Some('\n') => break,
            Some('\r') if ahead.peek() == Some(&'\n') => break,
            Some(_) => count += 1,
        }
    }
    count
}
