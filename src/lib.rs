//! scrolltext
//!
//! Render long text as scrollable HTML blocks for notebook-style hosts.
//!
//! # Features
//!
//! - **Scrollable blocks**: lists or strings in a fixed-height monospace box,
//!   with newlines turned into `<br>`
//! - **Preformatted blocks**: a single string inside `<pre>`, newlines kept
//! - **Pluggable sinks**: markup goes to any [`DisplaySink`]; the evcxr
//!   Jupyter kernel is supported out of the box through [`EvcxrSink`]
//!
//! Input `&`, `<` and `>` are always escaped.
//!
//! # Example
//!
//! ```
//! use scrolltext::{BufferSink, RenderConfig, ScrollRenderer};
//!
//! # fn main() -> scrolltext::Result<()> {
//! let config = RenderConfig::default().with_height("100px");
//! let mut renderer = ScrollRenderer::with_config(config, BufferSink::new());
//! renderer.render(vec!["alpha", "beta"])?;
//! assert!(renderer.sink().last().unwrap().contains("alpha<br>beta"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod markup;
pub mod renderer;
pub mod sink;

pub use config::{RenderConfig, DEFAULT_HEIGHT};
pub use content::Content;
pub use error::{Error, Result};
pub use renderer::{preformatted_markup, scrollable_markup, ScrollRenderer};
pub use sink::{BufferSink, DisplaySink, EvcxrSink, NoopSink, WriterSink};

/// Display `content` as a scrollable block on the evcxr kernel (stdout).
pub fn render_scrollable(content: impl Into<Content>, height: &str) -> Result<()> {
    ScrollRenderer::new(EvcxrSink::stdout()).render_with_height(content, height)
}

/// Display a string as a scrollable preformatted block on the evcxr kernel (stdout).
pub fn render_preformatted(content: impl Into<Content>, height: &str) -> Result<()> {
    ScrollRenderer::new(EvcxrSink::stdout()).render_preformatted_with_height(content, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preformatted_free_function_rejects_lists() {
        let err = render_preformatted(vec![1, 2], DEFAULT_HEIGHT).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
