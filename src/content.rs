//! Input content accepted by the renderer

use std::fmt::Display;

use serde_json::Value;

/// Text handed to the renderer.
///
/// Typed callers build this through the `From` impls; callers holding
/// loosely-typed data (for example JSON coming from a kernel) use
/// [`Content::from_value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// An ordered sequence of items, each already in textual form
    Lines(Vec<String>),
    /// A single string
    Text(String),
    /// Any other value, already stringified
    Other(String),
}

impl Content {
    /// Build `Lines` from anything displayable.
    pub fn lines<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        Content::Lines(items.into_iter().map(|item| item.to_string()).collect())
    }

    /// Stringify an arbitrary value.
    pub fn other<T: Display>(value: T) -> Self {
        Content::Other(value.to_string())
    }

    /// Classify a JSON value. Arrays become `Lines` (string elements verbatim,
    /// everything else as JSON text), strings become `Text`, and any other
    /// value becomes `Other`.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => Content::Lines(items.into_iter().map(value_text).collect()),
            Value::String(s) => Content::Text(s),
            other => Content::Other(other.to_string()),
        }
    }

    /// Short name of the variant, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Content::Lines(_) => "list",
            Content::Text(_) => "string",
            Content::Other(_) => "value",
        }
    }
}

fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::Text(s.to_string())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::Text(s)
    }
}

impl<T: Display> From<Vec<T>> for Content {
    fn from(items: Vec<T>) -> Self {
        Content::lines(items)
    }
}

impl<T: Display> From<&[T]> for Content {
    fn from(items: &[T]) -> Self {
        Content::lines(items)
    }
}

impl From<Value> for Content {
    fn from(value: Value) -> Self {
        Content::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn typed_conversions() {
        assert_eq!(Content::from("hi"), Content::Text("hi".into()));
        assert_eq!(
            Content::from(vec![1, 2, 3]),
            Content::Lines(vec!["1".into(), "2".into(), "3".into()])
        );
        assert_eq!(Content::other(4.5), Content::Other("4.5".into()));
    }

    #[test]
    fn json_arrays_keep_strings_verbatim() {
        let c = Content::from_value(json!(["a", 1, null, {"k": true}]));
        assert_eq!(
            c,
            Content::Lines(vec![
                "a".into(),
                "1".into(),
                "null".into(),
                "{\"k\":true}".into()
            ])
        );
    }

    #[test]
    fn json_scalars() {
        assert_eq!(Content::from_value(json!("x")), Content::Text("x".into()));
        assert_eq!(Content::from_value(json!(42)), Content::Other("42".into()));
        assert_eq!(Content::from_value(json!(false)).kind(), "value");
    }
}
