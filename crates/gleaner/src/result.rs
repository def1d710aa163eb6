// ABOUTME: Output records of a scrape run: Article, Cartoon and the ScrapeResult envelope.
// ABOUTME: Optional fields always serialize as explicit null; category is defaulted at construction.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GleanError;
use crate::options::DEFAULT_CATEGORY;

/// One entertainment article card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: Option<String>,
    pub author: Option<String>,
    pub image_url: Option<String>,
    pub category: String,
}

impl Article {
    /// Builds an article, substituting `default_category` when no category was found.
    /// A blank `default_category` falls back to [`DEFAULT_CATEGORY`], so the
    /// category is never empty.
    pub fn new(
        title: Option<String>,
        author: Option<String>,
        image_url: Option<String>,
        category: Option<String>,
        default_category: &str,
    ) -> Self {
        Self {
            title,
            author,
            image_url,
            category: category.unwrap_or_else(|| {
                if default_category.trim().is_empty() {
                    DEFAULT_CATEGORY.to_string()
                } else {
                    default_category.to_string()
                }
            }),
        }
    }

    /// Returns true if the article has an image URL.
    pub fn has_image(&self) -> bool {
        self.image_url.is_some()
    }
}

/// The cartoon-of-the-day block. All fields are absent when the section is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cartoon {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub author: Option<String>,
}

/// Everything a run produces, serialized once at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub entertainment_news: Vec<Article>,
    pub cartoon_of_the_day: Cartoon,
}

impl ScrapeResult {
    /// Pretty JSON with 2-space indentation; non-ASCII text is left unescaped.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Writes the pretty JSON form to `path`.
    pub fn write_json(&self, path: &Path) -> Result<(), GleanError> {
        let display = path.display().to_string();
        let json = self
            .to_json_pretty()
            .map_err(|e| GleanError::write(&display, "SerializeResult", Some(e.into())))?;
        fs::write(path, json)
            .map_err(|e| GleanError::write(&display, "WriteResult", Some(e.into())))
    }
}
