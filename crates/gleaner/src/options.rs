// ABOUTME: Configuration for a scrape run: ScrapeOptions and the fluent ScrapeOptionsBuilder.
// ABOUTME: Every field has a default, so an empty JSON config file reproduces the built-in behaviour.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::GleanError;
use crate::extractors::collect::DEFAULT_ARTICLE_LIMIT;
use crate::extractors::plan::{ArticlePlan, CartoonPlan};

/// Category used when an article card carries none ("Entertainment" in Nepali).
pub const DEFAULT_CATEGORY: &str = "मनोरञ्जन";

/// Home page of the news site.
pub const DEFAULT_HOME_URL: &str = "https://ekantipur.com/";

/// Configuration options for a scrape run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeOptions {
    pub home_url: String,
    /// Link on the home page that leads to the entertainment section.
    pub entertainment_link: String,
    /// Container holding the article cards.
    pub container: String,
    /// Article cards inside the container.
    pub article: String,
    pub max_articles: usize,
    pub default_category: String,
    pub article_plan: ArticlePlan,
    pub cartoon_plan: CartoonPlan,
    /// Vertical scroll offset before looking for the cartoon.
    pub scroll_y: i64,
    #[serde(with = "millis")]
    pub scroll_pause: Duration,
    /// Upper bound on waiting for the container to appear. Providers serving
    /// static documents check once and ignore it.
    #[serde(with = "millis")]
    pub wait_timeout: Duration,
    /// HTTP request timeout.
    #[serde(with = "millis")]
    pub timeout: Duration,
    pub user_agent: String,
    /// Make image URLs absolute against the page they were found on.
    pub resolve_relative_urls: bool,
    pub output: PathBuf,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            home_url: DEFAULT_HOME_URL.to_string(),
            entertainment_link: r#"a[href$="/entertainment"]"#.to_string(),
            container: ".col-xs-10.col-sm-10.col-md-10".to_string(),
            article: "article.normal".to_string(),
            max_articles: DEFAULT_ARTICLE_LIMIT,
            default_category: DEFAULT_CATEGORY.to_string(),
            article_plan: ArticlePlan::default(),
            cartoon_plan: CartoonPlan::default(),
            scroll_y: 1000,
            scroll_pause: Duration::from_secs(1),
            wait_timeout: Duration::from_secs(30),
            timeout: Duration::from_secs(30),
            user_agent: "gleaner/0.1".to_string(),
            resolve_relative_urls: false,
            output: PathBuf::from("ekantipur_data.json"),
        }
    }
}

impl ScrapeOptions {
    /// Returns a builder seeded with the defaults.
    pub fn builder() -> ScrapeOptionsBuilder {
        ScrapeOptionsBuilder::new()
    }

    /// Loads options from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, GleanError> {
        let display = path.display().to_string();
        let raw = fs::read_to_string(path)
            .map_err(|e| GleanError::config(&display, "LoadConfig", Some(e.into())))?;
        let opts: ScrapeOptions = serde_json::from_str(&raw)
            .map_err(|e| GleanError::config(&display, "LoadConfig", Some(e.into())))?;
        opts.validate().map_err(|e| GleanError::config(&display, "LoadConfig", Some(e)))?;
        Ok(opts)
    }

    /// Rejects option sets that would break output invariants.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.default_category.trim().is_empty() {
            anyhow::bail!("default_category must not be empty");
        }
        if self.home_url.trim().is_empty() {
            anyhow::bail!("home_url must not be empty");
        }
        if self.max_articles > DEFAULT_ARTICLE_LIMIT {
            anyhow::bail!(
                "max_articles must be at most {}, got {}",
                DEFAULT_ARTICLE_LIMIT,
                self.max_articles
            );
        }
        Ok(())
    }

    /// Every CSS selector the run will query with.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        [
            self.entertainment_link.as_str(),
            self.container.as_str(),
            self.article.as_str(),
        ]
        .into_iter()
        .chain(self.article_plan.selectors())
        .chain(self.cartoon_plan.selectors())
    }
}

/// Builder for constructing ScrapeOptions with custom settings.
#[derive(Debug, Clone)]
pub struct ScrapeOptionsBuilder {
    opts: ScrapeOptions,
}

impl ScrapeOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            opts: ScrapeOptions::default(),
        }
    }

    /// Start from an existing option set, e.g. one loaded from a file.
    pub fn from_options(opts: ScrapeOptions) -> Self {
        Self { opts }
    }

    /// Set the home page URL.
    pub fn home_url(mut self, url: impl Into<String>) -> Self {
        self.opts.home_url = url.into();
        self
    }

    /// Set the selector of the link to the entertainment section.
    pub fn entertainment_link(mut self, selector: impl Into<String>) -> Self {
        self.opts.entertainment_link = selector.into();
        self
    }

    /// Set how many article cards are kept, at most five.
    pub fn max_articles(mut self, n: usize) -> Self {
        self.opts.max_articles = n;
        self
    }

    /// Set the fallback category label.
    pub fn default_category(mut self, category: impl Into<String>) -> Self {
        self.opts.default_category = category.into();
        self
    }

    /// Replace the article field plan.
    pub fn article_plan(mut self, plan: ArticlePlan) -> Self {
        self.opts.article_plan = plan;
        self
    }

    /// Replace the cartoon plan.
    pub fn cartoon_plan(mut self, plan: CartoonPlan) -> Self {
        self.opts.cartoon_plan = plan;
        self
    }

    /// Set the pause after scrolling.
    pub fn scroll_pause(mut self, pause: Duration) -> Self {
        self.opts.scroll_pause = pause;
        self
    }

    /// Set the container wait timeout. Static page providers check the
    /// loaded document once and do not wait.
    pub fn wait_timeout(mut self, timeout: Duration) -> Self {
        self.opts.wait_timeout = timeout;
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Resolve relative image URLs against the page URL.
    pub fn resolve_relative_urls(mut self, enabled: bool) -> Self {
        self.opts.resolve_relative_urls = enabled;
        self
    }

    /// Set the output file path.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.opts.output = path.into();
        self
    }

    /// Build the options, rejecting values that would break the output.
    pub fn build(self) -> Result<ScrapeOptions, GleanError> {
        self.opts
            .validate()
            .map_err(|e| GleanError::config("", "BuildOptions", Some(e)))?;
        Ok(self.opts)
    }
}

impl Default for ScrapeOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Durations in config files are whole milliseconds.
mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
