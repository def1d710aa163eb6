// ABOUTME: Main library entry point for gleaner, a resilient news-page field extractor.
// ABOUTME: Re-exports the public API: run, scrape_site, ScrapeOptions, Strategy, resolve, result records.

//! Gleaner - ordered-fallback field extraction for news pages.
//!
//! A field is located by trying a list of [`Strategy`] values in order and
//! keeping the first non-empty result. The scrape flow applies those lists to
//! the first five entertainment articles of a news site and to its cartoon of
//! the day.
//!
//! # Example
//!
//! ```no_run
//! use gleaner::{run, GleanError, HttpPageProvider, ScrapeOptions};
//!
//! fn main() -> Result<(), GleanError> {
//!     let opts = ScrapeOptions::default();
//!     let provider = HttpPageProvider::from_options(&opts)?;
//!     let result = run(provider, &opts)?;
//!     println!("{} articles", result.entertainment_news.len());
//!     Ok(())
//! }
//! ```

pub mod dom;
pub mod error;
pub mod extractors;
pub mod news;
pub mod options;
pub mod page;
pub mod result;
pub mod telemetry;

pub use crate::dom::Node;
pub use crate::error::{ErrorCode, GleanError};
pub use crate::extractors::caption::split_caption;
pub use crate::extractors::collect::collect_first;
pub use crate::extractors::plan::{ArticlePlan, CartoonPlan};
pub use crate::extractors::select::{resolve, resolve_or};
pub use crate::extractors::strategy::{Accept, Read, Scope, Strategy};
pub use crate::news::{run, scrape_site};
pub use crate::options::{ScrapeOptions, ScrapeOptionsBuilder};
pub use crate::page::{HttpPageProvider, PageProvider, Session, StaticPageProvider};
pub use crate::result::{Article, Cartoon, ScrapeResult};
