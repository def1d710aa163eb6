// ABOUTME: Page provider abstraction: load a URL, expose the current document, wait, scroll and pause.
// ABOUTME: Also provides the Session guard that closes a provider on scope exit, and link following.

//! Page providers.
//!
//! The scrape flow drives a [`PageProvider`] passed in explicitly. Two
//! implementations ship with the crate: [`HttpPageProvider`] loads static HTML
//! over HTTP, [`StaticPageProvider`] serves pages from memory.

pub mod fetch;
pub mod http;
pub mod memory;

use std::ops::{Deref, DerefMut};
use std::time::Duration;

use scraper::Html;
use url::Url;

use crate::dom::Node;
use crate::error::GleanError;

pub use http::HttpPageProvider;
pub use memory::StaticPageProvider;

/// A navigable page source.
pub trait PageProvider {
    /// Loads `url` and makes it the current page.
    fn goto(&mut self, url: &str) -> Result<(), GleanError>;

    /// URL of the current page, after redirects.
    fn current_url(&self) -> Option<&str>;

    /// Parsed current page.
    fn document(&self) -> Option<&Html>;

    /// Waits up to `timeout` for `css` to match on the current page.
    ///
    /// Returns false instead of erroring when the element never appears.
    /// Static documents cannot change, so the default checks once.
    fn wait_for_selector(&self, css: &str, _timeout: Duration) -> bool {
        self.document()
            .and_then(|doc| doc.root_element().select_first(css))
            .is_some()
    }

    /// Scrolls the viewport. No-op for static documents.
    fn scroll_to(&mut self, _y: i64) {}

    /// Blocks for a fixed duration.
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }

    /// Releases the underlying session.
    fn close(&mut self) {}
}

/// Owns a provider for the length of a run and closes it on drop.
#[derive(Debug)]
pub struct Session<P: PageProvider> {
    provider: P,
}

impl<P: PageProvider> Session<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P: PageProvider> Deref for Session<P> {
    type Target = P;

    fn deref(&self) -> &P {
        &self.provider
    }
}

impl<P: PageProvider> DerefMut for Session<P> {
    fn deref_mut(&mut self) -> &mut P {
        &mut self.provider
    }
}

impl<P: PageProvider> Drop for Session<P> {
    fn drop(&mut self) {
        tracing::debug!("closing page session");
        self.provider.close();
    }
}

/// Follows the first link matching `css` on the current page.
///
/// The href is resolved against the current URL. A missing link or href is a
/// navigation error.
pub fn follow_link<P: PageProvider + ?Sized>(provider: &mut P, css: &str) -> Result<(), GleanError> {
    let base = provider.current_url().unwrap_or_default().to_string();
    let href = provider
        .document()
        .and_then(|doc| doc.root_element().select_first(css))
        .and_then(|link| Node::attr(&link, "href"))
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
        .ok_or_else(|| {
            GleanError::navigation(
                &base,
                "FollowLink",
                Some(anyhow::anyhow!("no link matching {}", css)),
            )
        })?;

    let target = match Url::parse(&base) {
        Ok(base_url) => base_url.join(&href).map_err(|e| {
            GleanError::invalid_url(&href, "FollowLink", Some(e.into()))
        })?,
        Err(_) => Url::parse(&href)
            .map_err(|e| GleanError::invalid_url(&href, "FollowLink", Some(e.into())))?,
    };
    provider.goto(target.as_str())
}

/// Resolves a possibly relative URL against `base`. Absolute and data URLs pass through.
pub fn absolutize(value: &str, base: Option<&str>) -> String {
    if value.starts_with("http://") || value.starts_with("https://") || value.starts_with("data:") {
        return value.to_string();
    }
    base.and_then(|b| Url::parse(b).ok())
        .and_then(|b| b.join(value).ok())
        .map(|u| u.to_string())
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingProvider {
        inner: StaticPageProvider,
        closes: Rc<Cell<usize>>,
    }

    impl PageProvider for CountingProvider {
        fn goto(&mut self, url: &str) -> Result<(), GleanError> {
            self.inner.goto(url)
        }
        fn current_url(&self) -> Option<&str> {
            self.inner.current_url()
        }
        fn document(&self) -> Option<&Html> {
            self.inner.document()
        }
        fn close(&mut self) {
            self.closes.set(self.closes.get() + 1);
        }
    }

    #[test]
    fn test_session_closes_on_drop_even_after_error() {
        let closes = Rc::new(Cell::new(0));
        {
            let mut session = Session::new(CountingProvider {
                inner: StaticPageProvider::new(),
                closes: closes.clone(),
            });
            assert!(session.goto("https://example.com/").is_err());
        }
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_follow_link_resolves_relative_href() {
        let mut provider = StaticPageProvider::new()
            .page(
                "https://example.com/",
                r#"<a href="/entertainment">Entertainment</a>"#,
            )
            .page("https://example.com/entertainment", "<h1>Ent</h1>");
        provider.goto("https://example.com/").unwrap();

        follow_link(&mut provider, r#"a[href$="/entertainment"]"#).unwrap();
        assert_eq!(
            provider.current_url(),
            Some("https://example.com/entertainment")
        );
    }

    #[test]
    fn test_follow_link_missing_is_navigation_error() {
        let mut provider = StaticPageProvider::new().page("https://example.com/", "<p>none</p>");
        provider.goto("https://example.com/").unwrap();

        let err = follow_link(&mut provider, "a.nope").unwrap_err();
        assert!(err.is_navigation());
    }

    #[test]
    fn test_wait_for_selector_default() {
        let mut provider =
            StaticPageProvider::new().page("https://example.com/", r#"<div class="box"></div>"#);
        assert!(!provider.wait_for_selector(".box", Duration::ZERO));
        provider.goto("https://example.com/").unwrap();
        assert!(provider.wait_for_selector(".box", Duration::ZERO));
        assert!(!provider.wait_for_selector(".other", Duration::ZERO));
    }

    #[test]
    fn test_absolutize() {
        let base = Some("https://example.com/news/");
        assert_eq!(absolutize("a.jpg", base), "https://example.com/news/a.jpg");
        assert_eq!(absolutize("/img/b.png", base), "https://example.com/img/b.png");
        assert_eq!(absolutize("https://cdn.x/c.jpg", base), "https://cdn.x/c.jpg");
        assert_eq!(absolutize("/img/b.png", None), "/img/b.png");
    }
}
