//! Display sinks: where rendered markup goes.
//!
//! The host environment decides how markup is shown. The renderer only needs
//! something that accepts an HTML string, which is what [`DisplaySink`] models.

pub mod writer;

pub use writer::{EvcxrSink, WriterSink};

use crate::Result;

/// Consumer of rendered HTML markup
pub trait DisplaySink {
    /// Hand one complete block of markup to the host
    fn display_html(&mut self, markup: &str) -> Result<()>;
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn display_html(&mut self, markup: &str) -> Result<()> {
        (**self).display_html(markup)
    }
}

impl<S: DisplaySink + ?Sized> DisplaySink for Box<S> {
    fn display_html(&mut self, markup: &str) -> Result<()> {
        (**self).display_html(markup)
    }
}

/// Collects every block in memory, in the order received
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    blocks: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    pub fn last(&self) -> Option<&str> {
        self.blocks.last().map(String::as_str)
    }

    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.blocks)
    }
}

impl DisplaySink for BufferSink {
    fn display_html(&mut self, markup: &str) -> Result<()> {
        self.blocks.push(markup.to_string());
        Ok(())
    }
}

/// Discards everything
pub struct NoopSink;

impl NoopSink {
    pub fn new() -> Self {
        NoopSink
    }
}

impl Default for NoopSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for NoopSink {
    fn display_html(&mut self, _markup: &str) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_sink_keeps_order() {
        let mut sink = BufferSink::new();
        sink.display_html("one").unwrap();
        sink.display_html("two").unwrap();
        assert_eq!(sink.blocks(), &["one".to_string(), "two".to_string()]);
        assert_eq!(sink.last(), Some("two"));
        assert_eq!(sink.take().len(), 2);
        assert!(sink.blocks().is_empty());
    }

    fn show<S: DisplaySink>(mut sink: S, markup: &str) {
        sink.display_html(markup).unwrap();
    }

    #[test]
    fn boxed_and_borrowed_sinks_forward() {
        let mut buf = BufferSink::new();
        show(&mut buf, "a");
        assert_eq!(buf.last(), Some("a"));

        let mut boxed: Box<dyn DisplaySink> = Box::new(NoopSink::new());
        assert!(boxed.display_html("ignored").is_ok());
    }
}
