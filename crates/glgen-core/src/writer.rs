//! Blank line removal for generated source.
//!
//! The filter is a two-state machine driven byte by byte, so the output only
//! depends on the concatenated input, never on how it was split into writes:
//!
//! - `AtLineStart`: a newline here would end an empty line and is dropped.
//!   Any other byte is emitted and moves to `MidLine`.
//! - `MidLine`: bytes are emitted; a newline is emitted and moves back to
//!   `AtLineStart`.
//!
//! The stream starts at `AtLineStart`, which removes leading blank lines.
//! [`BlankLineStrippingWriter::finish`] terminates a trailing partial line.

use std::io::{self, Write};

use tracing::warn;

/// Errors raised by the writer itself. Sink errors are passed through as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StripError {
    /// An earlier write to the sink failed.
    #[error("output sink failed earlier; stream no longer accepts writes")]
    Poisoned,
}

impl From<StripError> for io::Error {
    fn from(err: StripError) -> Self {
        io::Error::other(err)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineState {
    AtLineStart,
    MidLine,
}

/// `io::Write` adapter that collapses runs of newlines into one and drops
/// leading blank lines.
///
/// Single producer only: writes must arrive in order from one owner.
///
/// End the stream with [`finish`](Self::finish). Dropping the writer skips
/// it, so an unterminated last line reaches the sink without its newline.
///
/// When the sink fails partway through a [`write`](Write::write), complete
/// lines earlier in the same buffer may already have been forwarded even
/// though the call returns `Err`. The writer is poisoned from then on, so no
/// retry can duplicate them.
#[derive(Debug)]
pub struct BlankLineStrippingWriter<W: Write> {
    inner: W,
    state: LineState,
    seen_content: bool,
    poisoned: bool,
}

impl<W: Write> BlankLineStrippingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            state: LineState::AtLineStart,
            seen_content: false,
            poisoned: false,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Whether any non-newline byte has been written.
    pub fn seen_content(&self) -> bool {
        self.seen_content
    }

    /// Whether a sink failure has closed the stream.
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// End the stream, terminating a trailing partial line, and return the
    /// sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.ensure_open()?;
        if self.state == LineState::MidLine {
            self.emit(b"\n")?;
            self.state = LineState::AtLineStart;
        }
        self.flush()?;
        Ok(self.inner)
    }

    fn ensure_open(&self) -> io::Result<()> {
        if self.poisoned {
            return Err(StripError::Poisoned.into());
        }
        Ok(())
    }

    fn emit(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.inner.write_all(bytes).inspect_err(|err| {
            warn!(error = %err, "output sink failed, closing stream");
            self.poisoned = true;
        })
    }
}

impl<W: Write> Write for BlankLineStrippingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.ensure_open()?;

        let mut rest = buf;
        while !rest.is_empty() {
            match self.state {
                LineState::AtLineStart => {
                    let blank = rest.iter().take_while(|&&b| b == b'\n').count();
                    rest = &rest[blank..];
                    if !rest.is_empty() {
                        self.state = LineState::MidLine;
                        self.seen_content = true;
                    }
                }
                LineState::MidLine => match rest.iter().position(|&b| b == b'\n') {
                    Some(end) => {
                        self.emit(&rest[..=end])?;
                        rest = &rest[end + 1..];
                        self.state = LineState::AtLineStart;
                    }
                    None => {
                        self.emit(rest)?;
                        rest = &[];
                    }
                },
            }
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.ensure_open()?;
        self.inner.flush().inspect_err(|err| {
            warn!(error = %err, "output sink failed to flush, closing stream");
            self.poisoned = true;
        })
    }
}
