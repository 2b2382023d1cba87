//! Text stream interop.
//!
//! Output renders a sequence on one line:
//!
//! ```text
//! Sequence (capacity = 5, size = 3): 4 8 15
//! ```
//!
//! Every element is followed by a single space, including the last one, and the
//! line ends with `\n`.
//!
//! Input is a count `n` followed by up to `n` whitespace-separated element tokens.
//! Reading stops at the first token that does not parse (or at the end of input);
//! the elements read so far are kept and the [`ReadOutcome`] is flagged as failed.

use std::fmt;
use std::io::{self, BufRead};
use std::str::FromStr;

use contig_common::{Error, Result};

use crate::Sequence;

/// Result of reading a sequence from a text stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOutcome {
    /// The element count announced by the stream, zero if it could not be read.
    pub requested: usize,
    /// Number of elements actually parsed and appended.
    pub read: usize,
    /// Set when reading stopped early on a malformed or missing token.
    pub failed: bool,
}

impl ReadOutcome {
    /// Returns `true` if every announced element was read.
    pub fn is_complete(&self) -> bool {
        !self.failed
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sequence (capacity = {}, size = {}): ",
            self.capacity(),
            self.len()
        )?;
        for element in self.as_slice() {
            write!(f, "{element} ")?;
        }
        writeln!(f)
    }
}

impl<T: fmt::Display> Sequence<T> {
    /// Writes the formatted sequence to standard output.
    pub fn print(&self) {
        print!("{self}");
    }
}

impl<T: Default + FromStr> Sequence<T> {
    /// Replaces the contents with elements read from `reader`.
    ///
    /// The sequence is cleared first (capacity is kept), then the announced number of
    /// elements is appended one at a time under the usual growth policy. A token that
    /// fails to parse is consumed; nothing after it is.
    ///
    /// Only I/O failures are returned as errors. Malformed input is reported through
    /// [`ReadOutcome::failed`].
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> Result<ReadOutcome> {
        self.clear();
        let mut tokens = Tokens { reader };

        let count = tokens
            .next_token()?
            .and_then(|t| String::from_utf8(t).ok())
            .and_then(|t| t.parse::<usize>().ok());
        let Some(requested) = count else {
            log::debug!("sequence input: missing or malformed element count");
            return Ok(ReadOutcome {
                requested: 0,
                read: 0,
                failed: true,
            });
        };

        let mut failed = false;
        while self.len() < requested {
            let Some(token) = tokens.next_token()? else {
                log::debug!(
                    "sequence input: end of input after {} of {requested} elements",
                    self.len()
                );
                failed = true;
                break;
            };
            let parsed = String::from_utf8(token)
                .map_err(|e| e.into_bytes())
                .and_then(|text| text.parse::<T>().map_err(|_| text.into_bytes()));
            match parsed {
                Ok(value) => {
                    self.push_back(value);
                }
                Err(token) => {
                    log::debug!(
                        "sequence input: malformed element {:?} after {} of {requested}",
                        String::from_utf8_lossy(&token),
                        self.len()
                    );
                    failed = true;
                    break;
                }
            }
        }

        Ok(ReadOutcome {
            requested,
            read: self.len(),
            failed,
        })
    }

    /// Replaces the contents with elements parsed from `input`.
    pub fn read_from_str(&mut self, input: &str) -> Result<ReadOutcome> {
        self.read_from(input.as_bytes())
    }
}

/// Splits a byte stream into whitespace-separated raw tokens, consuming no more
/// input than the token it returns. Tokens are not decoded here; invalid UTF-8 is a
/// malformed token for the caller.
struct Tokens<R> {
    reader: R,
}

impl<R: BufRead> Tokens<R> {
    fn next_token(&mut self) -> Result<Option<Vec<u8>>> {
        let mut token = Vec::new();
        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::io("sequence input", e)),
            };
            if buf.is_empty() {
                break;
            }
            let mut used = 0;
            let mut complete = false;
            for &byte in buf {
                if byte.is_ascii_whitespace() {
                    if !token.is_empty() {
                        complete = true;
                        break;
                    }
                } else {
                    token.push(byte);
                }
                used += 1;
            }
            self.reader.consume(used);
            if complete {
                break;
            }
        }

        Ok((!token.is_empty()).then_some(token))
    }
}
