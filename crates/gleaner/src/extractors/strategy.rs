// ABOUTME: Strategy data model: one (selector, reads, scope, accept) rule for locating a field value.
// ABOUTME: Strategies are plain data so fallback chains can be configured, audited and tested as lists.

//! Extraction strategies.
//!
//! A [`Strategy`] names a CSS selector and what to read from the matched
//! node: its text, or one or more attributes tried in order. Strategies are
//! grouped into ordered lists per logical field and evaluated by
//! [`crate::extractors::select::resolve`].

use serde::{Deserialize, Serialize};

/// What to read from a matched node.
///
/// Serialises as a bare string: `"text"` for text content, anything else is
/// an attribute name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Read {
    Text,
    Attr(String),
}

impl From<String> for Read {
    fn from(s: String) -> Self {
        if s == "text" {
            Read::Text
        } else {
            Read::Attr(s)
        }
    }
}

impl From<Read> for String {
    fn from(r: Read) -> Self {
        match r {
            Read::Text => "text".to_string(),
            Read::Attr(name) => name,
        }
    }
}

/// Which matched descendants a strategy looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Only the first match in document order.
    #[default]
    First,
    /// Every match in document order, until one yields a value.
    Every,
}

/// Filter applied to a candidate value after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accept {
    #[default]
    Any,
    /// Only values that look like an image URL.
    ImageLike,
}

/// File extensions that mark an href as pointing at an image.
const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp"];

impl Accept {
    /// Returns true if `value` passes this filter.
    pub fn accepts(self, value: &str) -> bool {
        match self {
            Accept::Any => true,
            Accept::ImageLike => looks_like_image_url(value),
        }
    }
}

/// Heuristic for hrefs that point at an image: a known image extension, or
/// "image"/"img" anywhere in the URL (case-insensitive).
pub fn looks_like_image_url(url: &str) -> bool {
    if IMAGE_EXTENSIONS.iter().any(|ext| url.ends_with(ext)) {
        return true;
    }
    let lower = url.to_lowercase();
    lower.contains("image") || lower.contains("img")
}

fn default_reads() -> Vec<Read> {
    vec![Read::Text]
}

/// One extraction rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    /// CSS selector evaluated against the container node's descendants.
    pub selector: String,
    /// Reads tried in order on each matched node.
    #[serde(default = "default_reads")]
    pub reads: Vec<Read>,
    #[serde(default)]
    pub scope: Scope,
    #[serde(default)]
    pub accept: Accept,
}

impl Strategy {
    /// Reads the text content of the first match.
    pub fn text(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            reads: vec![Read::Text],
            scope: Scope::First,
            accept: Accept::Any,
        }
    }

    /// Reads an attribute of the first match.
    pub fn attr(selector: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            reads: vec![Read::Attr(name.into())],
            scope: Scope::First,
            accept: Accept::Any,
        }
    }

    /// Adds another attribute to try on the same matched node.
    pub fn or_attr(mut self, name: impl Into<String>) -> Self {
        self.reads.push(Read::Attr(name.into()));
        self
    }

    /// Looks at every match instead of only the first.
    pub fn every(mut self) -> Self {
        self.scope = Scope::Every;
        self
    }

    /// Sets the accept filter.
    pub fn accept(mut self, accept: Accept) -> Self {
        self.accept = accept;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_composes_reads_scope_and_accept() {
        let s = Strategy::attr("img", "src")
            .or_attr("data-src")
            .every()
            .accept(Accept::ImageLike);
        assert_eq!(s.selector, "img");
        assert_eq!(
            s.reads,
            vec![Read::Attr("src".into()), Read::Attr("data-src".into())]
        );
        assert_eq!(s.scope, Scope::Every);
        assert_eq!(s.accept, Accept::ImageLike);
    }

    #[test]
    fn test_read_serializes_as_bare_string() {
        let json = serde_json::to_string(&vec![Read::Text, Read::Attr("href".into())]).unwrap();
        assert_eq!(json, r#"["text","href"]"#);
    }

    #[test]
    fn test_strategy_deserialize_applies_defaults() {
        let s: Strategy = serde_json::from_str(r#"{"selector": "h2"}"#).unwrap();
        assert_eq!(s, Strategy::text("h2"));

        let s: Strategy = serde_json::from_str(
            r#"{"selector": "a", "reads": ["href"], "scope": "every", "accept": "image_like"}"#,
        )
        .unwrap();
        assert_eq!(
            s,
            Strategy::attr("a", "href").every().accept(Accept::ImageLike)
        );
    }

    #[test]
    fn test_looks_like_image_url() {
        assert!(looks_like_image_url("https://cdn.example.com/a/photo.webp"));
        assert!(looks_like_image_url("/uploads/IMAGES/123"));
        assert!(looks_like_image_url("https://example.com/img?id=4"));
        assert!(!looks_like_image_url("https://example.com/news/story-1"));
        // Extension match is case-sensitive; the substring match is not.
        assert!(!looks_like_image_url("/files/PHOTO.PNG"));
    }
}
