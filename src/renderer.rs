//! The scrollable text renderer.
//!
//! [`ScrollRenderer`] turns [`Content`] into markup and hands it to its sink.
//! Each call is independent; the only state is the configuration and the sink.

use log::{debug, warn};

use crate::markup::{
    escape_html, join_lines, preformatted_block, scrollable_block, to_line_breaks,
};
use crate::sink::DisplaySink;
use crate::{Content, Error, RenderConfig, Result};

/// Build the scrollable-block markup for `content` without displaying it.
pub fn scrollable_markup(content: &Content, height: &str) -> String {
    let inner = match content {
        Content::Lines(items) => join_lines(items.as_slice()),
        Content::Text(text) | Content::Other(text) => to_line_breaks(&escape_html(text)),
    };
    scrollable_block(&inner, height)
}

/// Build the preformatted-block markup for `content` without displaying it.
///
/// Only `Content::Text` is accepted.
pub fn preformatted_markup(content: &Content, height: &str) -> Result<String> {
    match content {
        Content::Text(text) => Ok(preformatted_block(&escape_html(text), height)),
        other => {
            warn!("preformatted block rejected {} content", other.kind());
            Err(Error::InvalidArgument("Expected a string.".to_string()))
        }
    }
}

/// Renders content into a display sink
pub struct ScrollRenderer<S: DisplaySink> {
    config: RenderConfig,
    sink: S,
}

impl<S: DisplaySink> ScrollRenderer<S> {
    pub fn new(sink: S) -> Self {
        Self::with_config(RenderConfig::default(), sink)
    }

    pub fn with_config(config: RenderConfig, sink: S) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Display a list or string as a scrollable block at the configured height.
    ///
    /// List items are joined with `<br>`; newlines in a string become `<br>`.
    pub fn render(&mut self, content: impl Into<Content>) -> Result<()> {
        let height = self.config.height.clone();
        self.render_with_height(content, &height)
    }

    pub fn render_with_height(&mut self, content: impl Into<Content>, height: &str) -> Result<()> {
        let markup = scrollable_markup(&content.into(), height);
        self.emit(&markup, height)
    }

    /// Display a single string in a scrollable `<pre>` block, newlines kept.
    ///
    /// Returns `Error::InvalidArgument` for anything but a string; the sink is
    /// not touched in that case.
    pub fn render_preformatted(&mut self, content: impl Into<Content>) -> Result<()> {
        let height = self.config.height.clone();
        self.render_preformatted_with_height(content, &height)
    }

    pub fn render_preformatted_with_height(
        &mut self,
        content: impl Into<Content>,
        height: &str,
    ) -> Result<()> {
        let markup = preformatted_markup(&content.into(), height)?;
        self.emit(&markup, height)
    }

    fn emit(&mut self, markup: &str, height: &str) -> Result<()> {
        debug!("displaying {} bytes of markup (height {})", markup.len(), height);
        self.sink.display_html(markup)
    }
}
