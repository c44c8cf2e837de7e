//! Line composition for the message of the day.
//!
//! Zips the rows of an ASCII image with a list of messages so that the
//! messages sit to the right of the image's lowest rows:
//!
//! ```text
//! *********
//! *       *
//! * image *
//! *       * message 1
//! ********* message 2
//! ```
//!
//! The composer is a pure iterator over its inputs. It never fails: when
//! there are more messages than image rows the earliest messages are dropped,
//! and [`Lines::dropped`] reports how many.

use std::iter::FusedIterator;

/// ANSI "reset all attributes" sequence, the default reset marker.
pub const RESET: &str = "\x1b[0m";

/// Image rows handed to the composer.
#[derive(Debug, Clone, Copy)]
enum Rows<'a> {
    /// Rows loaded from an image.
    Image(&'a [String]),
    /// No image: this many empty rows, one per message.
    Blank(usize),
}

impl<'a> Rows<'a> {
    fn len(&self) -> usize {
        match self {
            Rows::Image(rows) => rows.len(),
            Rows::Blank(n) => *n,
        }
    }

    fn get(&self, index: usize) -> &'a str {
        match self {
            Rows::Image(rows) => rows[index].as_str(),
            Rows::Blank(_) => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Preamble,
    Color,
    Body(usize),
    Reset,
    Done,
}

/// Lazy sequence of composed output lines. Created by [`compose`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    preamble: &'a str,
    rows: Rows<'a>,
    messages: &'a [String],
    color: &'a str,
    reset: &'a str,
    stage: Stage,
}

/// Compose a preamble, image rows and messages into output lines.
///
/// Produces the preamble, the color tag on its own line, one line per image
/// row and a final reset marker. Messages are bottom-anchored: the message
/// at `i - image_len + messages_len` is appended to row `i` (between a reset
/// marker and the color tag) whenever that index is in range.
///
/// When `image` is `None` the image is treated as `messages.len()` empty
/// rows, so every message gets its own line.
pub fn compose<'a>(
    preamble: &'a str,
    image: Option<&'a [String]>,
    messages: &'a [String],
    color: Option<&'a str>,
) -> Lines<'a> {
    let rows = match image {
        Some(rows) => Rows::Image(rows),
        None => Rows::Blank(messages.len()),
    };

    Lines {
        preamble,
        rows,
        messages,
        color: color.unwrap_or(""),
        reset: RESET,
        stage: Stage::Preamble,
    }
}

impl<'a> Lines<'a> {
    /// Replace the reset marker (defaults to [`RESET`]).
    ///
    /// Used with an empty marker when color output is disabled.
    pub fn with_reset(mut self, reset: &'a str) -> Self {
        self.reset = reset;
        self
    }

    /// Number of leading messages that have no image row to sit beside.
    pub fn dropped(&self) -> usize {
        self.messages.len().saturating_sub(self.rows.len())
    }

    /// Message paired with image row `row`, if any.
    fn message_for(&self, row: usize) -> Option<&'a str> {
        // row - rows_len + messages_len, kept non-negative
        let index = (row + self.messages.len()).checked_sub(self.rows.len())?;
        self.messages.get(index).map(String::as_str)
    }

    fn remaining(&self) -> usize {
        let rows = self.rows.len();
        match self.stage {
            Stage::Preamble => rows + 3,
            Stage::Color => rows + 2,
            Stage::Body(i) => rows - i + 1,
            Stage::Reset => 1,
            Stage::Done => 0,
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let rows = self.rows.len();
        match self.stage {
            Stage::Preamble => {
                self.stage = Stage::Color;
                Some(self.preamble.to_string())
            }
            Stage::Color => {
                self.stage = if rows == 0 { Stage::Reset } else { Stage::Body(0) };
                Some(self.color.to_string())
            }
            Stage::Body(i) => {
                self.stage = if i + 1 < rows {
                    Stage::Body(i + 1)
                } else {
                    Stage::Reset
                };

                let row = self.rows.get(i);
                Some(match self.message_for(i) {
                    Some(message) => {
                        let mut line = String::with_capacity(
                            row.len() + self.reset.len() + message.len() + self.color.len(),
                        );
                        line.push_str(row);
                        line.push_str(self.reset);
                        line.push_str(message);
                        line.push_str(self.color);
                        line
                    }
                    None => row.to_string(),
                })
            }
            Stage::Reset => {
                self.stage = Stage::Done;
                Some(self.reset.to_string())
            }
            Stage::Done => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Lines<'_> {}

impl FusedIterator for Lines<'_> {}
