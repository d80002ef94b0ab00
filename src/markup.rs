//! HTML building blocks for scrollable text.
//!
//! Everything here is pure string manipulation: no sink is involved, so these
//! functions are what the renderer and the tests build on.

/// Line-break marker used inside the scrollable container
pub const LINE_BREAK: &str = "<br>";

/// Escape `&`, `<` and `>`.
///
/// `&` goes first so the entities produced for `<` and `>` are not escaped a
/// second time.
///
/// ```
/// assert_eq!(scrolltext::markup::escape_html("a < b & c"), "a &lt; b &amp; c");
/// ```
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Replace each newline with [`LINE_BREAK`]. A `\r\n` pair counts as one newline.
pub fn to_line_breaks(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', LINE_BREAK)
}

/// Escape each item and join them with [`LINE_BREAK`].
pub fn join_lines<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| escape_html(item.as_ref()))
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

/// Wrap already-escaped `inner` markup in the scrollable monospace container.
pub fn scrollable_block(inner: &str, height: &str) -> String {
    format!(
        "<div style='height: {height}; overflow-y: scroll; border: 1px solid lightgray; \
         font-family: monospace; white-space: pre; padding: 5px; background: #f9f9f9;'>\
         {inner}</div>"
    )
}

/// Wrap already-escaped `inner` text in a scrollable `<pre>` block.
pub fn preformatted_block(inner: &str, height: &str) -> String {
    format!(
        "<div style=\"height:{height}; overflow-y:scroll; border:1px solid lightgray; \
         padding:5px; background:#f9f9f9;\">\
         <pre style=\"font-family: monospace; white-space: pre;\">{inner}</pre></div>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_order_avoids_double_escaping() {
        assert_eq!(escape_html("<&>"), "&lt;&amp;&gt;");
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn escape_leaves_quotes_alone() {
        assert_eq!(escape_html("say \"hi\" 'there'"), "say \"hi\" 'there'");
    }

    #[test]
    fn line_breaks_cover_crlf() {
        assert_eq!(to_line_breaks("a\nb\r\nc"), "a<br>b<br>c");
        assert_eq!(to_line_breaks("\n"), "<br>");
    }

    #[test]
    fn join_lines_escapes_items() {
        assert_eq!(join_lines(&["<a>", "b&c"]), "&lt;a&gt;<br>b&amp;c");
        assert_eq!(join_lines::<&str>(&[]), "");
    }

    #[test]
    fn scrollable_block_layout() {
        let html = scrollable_block("x", "50vh");
        assert!(html.starts_with("<div style='height: 50vh; overflow-y: scroll;"));
        assert!(html.ends_with("'>x</div>"));
    }

    #[test]
    fn preformatted_block_layout() {
        let html = preformatted_block("x\ny", "300px");
        assert!(html.starts_with("<div style=\"height:300px; overflow-y:scroll;"));
        assert!(html.contains(">x\ny</pre></div>"));
    }
}
