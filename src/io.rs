//! Reading a [`DateTime`] field by field from a text stream.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{DateTime, DateTimeError, Field, parse_component};

/// Error type for stream deserialization.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The underlying reader or prompt writer failed.
    #[error("I/O error while reading date-time: {0}")]
    Io(#[from] io::Error),

    /// The input was read but does not form a valid value.
    #[error(transparent)]
    DateTime(#[from] DateTimeError),
}

/// Reads the next whitespace-delimited token, leaving everything after it
/// (including the delimiter) in `reader`. Returns `None` at end of input.
fn next_token<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(None);
        }
        let skip = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
        let reached_token = skip < buf.len();
        reader.consume(skip);
        if reached_token {
            break;
        }
    }

    let mut token = Vec::new();
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        let len = buf.iter().take_while(|b| !b.is_ascii_whitespace()).count();
        token.extend_from_slice(&buf[..len]);
        let reached_end = len < buf.len();
        reader.consume(len);
        if reached_end {
            break;
        }
    }
    Ok(Some(String::from_utf8_lossy(&token).into_owned()))
}

impl DateTime {
    /// Reads six whitespace-delimited integers in the order year, month,
    /// day, hours, minutes, seconds, then normalizes.
    ///
    /// Reading stops right after the seconds token, so a further read from
    /// the same reader continues with the next token. Nothing is returned
    /// unless all six fields were read.
    ///
    /// # Errors
    /// Returns `ReadError::Io` if the reader fails, and
    /// `ReadError::DateTime` for a non-integer token, premature end of
    /// input, or an invalid month.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self, ReadError> {
        read_fields(reader, |_| Ok(()))
    }

    /// Like [`DateTime::read_from`], but writes an `Enter {field}: ` prompt
    /// to `prompt` before each field.
    ///
    /// # Errors
    /// Same as [`DateTime::read_from`]; failures writing the prompt are
    /// reported as `ReadError::Io`.
    pub fn read_interactive<R: BufRead, W: Write>(
        reader: R,
        prompt: &mut W,
    ) -> Result<Self, ReadError> {
        read_fields(reader, |field| {
            write!(prompt, "Enter {field}: ")?;
            prompt.flush()
        })
    }
}

fn read_fields<R, F>(mut reader: R, mut before_field: F) -> Result<DateTime, ReadError>
where
    R: BufRead,
    F: FnMut(Field) -> io::Result<()>,
{
    let mut values = [0_i32; Field::ALL.len()];

    for (slot, field) in values.iter_mut().zip(Field::ALL) {
        before_field(field)?;
        let Some(token) = next_token(&mut reader)? else {
            debug!(%field, "input ended before all fields were read");
            return Err(DateTimeError::UnexpectedEof { field }.into());
        };
        *slot = parse_component(field, &token)?;
    }

    let [year, month, day, hours, minutes, seconds] = values;
    Ok(DateTime::new(day, month, year, hours, minutes, seconds)?)
}
