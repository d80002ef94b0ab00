//! Sinks backed by an `io::Write`

use std::io::Write;

use crate::sink::DisplaySink;
use crate::Result;

/// Writes raw markup followed by a newline
pub struct WriterSink<W: Write> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for WriterSink<W> {
    fn display_html(&mut self, markup: &str) -> Result<()> {
        writeln!(self.out, "{}", markup)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Emits markup in the evcxr Jupyter kernel's rich-output framing, so a
/// block printed from a Rust notebook cell is displayed as HTML.
pub struct EvcxrSink<W: Write> {
    out: W,
}

impl EvcxrSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> EvcxrSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for EvcxrSink<W> {
    fn display_html(&mut self, markup: &str) -> Result<()> {
        writeln!(self.out, "EVCXR_BEGIN_CONTENT text/html")?;
        writeln!(self.out, "{}", markup)?;
        writeln!(self.out, "EVCXR_END_CONTENT")?;
        self.out.flush()?;
        Ok(())
    }
}
