// ABOUTME: StaticPageProvider serves pre-registered HTML pages from memory, for tests and offline runs.

use std::collections::HashMap;
use std::time::Duration;

use scraper::Html;

use crate::error::GleanError;
use crate::page::PageProvider;

/// In-memory page provider keyed by exact URL.
#[derive(Debug, Default)]
pub struct StaticPageProvider {
    pages: HashMap<String, String>,
    current_url: Option<String>,
    current: Option<Html>,
    scrolls: Vec<i64>,
}

impl StaticPageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `html` under `url`.
    pub fn page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }

    /// Scroll offsets requested so far.
    pub fn scrolls(&self) -> &[i64] {
        &self.scrolls
    }
}

impl PageProvider for StaticPageProvider {
    fn goto(&mut self, url: &str) -> Result<(), GleanError> {
        let html = self.pages.get(url).ok_or_else(|| {
            GleanError::navigation(url, "Goto", Some(anyhow::anyhow!("page not registered")))
        })?;
        self.current = Some(Html::parse_document(html));
        self.current_url = Some(url.to_string());
        Ok(())
    }

    fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    fn document(&self) -> Option<&Html> {
        self.current.as_ref()
    }

    fn scroll_to(&mut self, y: i64) {
        self.scrolls.push(y);
    }

    fn pause(&mut self, _duration: Duration) {}
}
