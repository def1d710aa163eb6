// ABOUTME: News scrape flow: home page, entertainment section, first five articles, cartoon of the day.
// ABOUTME: Navigation failures abort the run; missing containers and fields degrade to empty/absent values.

//! The scrape flow.
//!
//! [`run`] is the entry point: it owns the provider for the length of the run
//! through a [`Session`], scrapes, and writes the JSON result.
//! [`scrape_site`] does the navigation and extraction without touching the
//! filesystem.

use tracing::{error, info, warn};

use crate::dom::Node;
use crate::error::GleanError;
use crate::extractors::caption::split_caption;
use crate::extractors::collect::{collect_first, DEFAULT_ARTICLE_LIMIT};
use crate::extractors::compiled::unusable_selectors;
use crate::extractors::select::resolve;
use crate::options::ScrapeOptions;
use crate::page::{absolutize, follow_link, PageProvider, Session};
use crate::result::{Article, Cartoon, ScrapeResult};

/// Characters of the title shown in progress logs.
const LOG_TITLE_CHARS: usize = 50;

/// Scrapes the site and writes the result to `opts.output`.
///
/// The provider is closed once the result is saved, or as soon as the run
/// fails.
pub fn run<P: PageProvider>(provider: P, opts: &ScrapeOptions) -> Result<ScrapeResult, GleanError> {
    for css in unusable_selectors(opts.selectors()) {
        warn!(selector = css, "selector does not parse and will never match");
    }

    let mut session = Session::new(provider);
    let result = scrape_site(&mut *session, opts)?;

    if let Err(e) = result.write_json(&opts.output) {
        error!(error = %e, "failed to save result");
        return Err(e);
    }
    info!(
        articles = result.entertainment_news.len(),
        output = %opts.output.display(),
        "scraped {} articles and 1 cartoon",
        result.entertainment_news.len()
    );
    Ok(result)
}

/// Navigates the site and extracts articles and the cartoon.
pub fn scrape_site<P: PageProvider + ?Sized>(
    provider: &mut P,
    opts: &ScrapeOptions,
) -> Result<ScrapeResult, GleanError> {
    if let Err(e) = provider.goto(&opts.home_url) {
        error!(error = %e, "error loading main page");
        return Err(e);
    }

    if let Err(e) = follow_link(provider, &opts.entertainment_link) {
        error!(error = %e, "error navigating to entertainment section");
        return Err(e);
    }

    let entertainment_news = scrape_entertainment(provider, opts);

    info!("going back to main page for cartoon");
    if let Err(e) = provider.goto(&opts.home_url) {
        warn!(error = %e, "error going back to main page");
    }

    let cartoon_of_the_day = scrape_cartoon(provider, opts);

    Ok(ScrapeResult {
        entertainment_news,
        cartoon_of_the_day,
    })
}

/// Extracts up to `opts.max_articles` articles from the current page, never
/// more than five.
///
/// Returns an empty list when the container never appears.
pub fn scrape_entertainment<P: PageProvider + ?Sized>(
    provider: &P,
    opts: &ScrapeOptions,
) -> Vec<Article> {
    if !provider.wait_for_selector(&opts.container, opts.wait_timeout) {
        warn!(selector = %opts.container, "article container did not appear");
        return Vec::new();
    }

    let Some(doc) = provider.document() else {
        warn!("no page loaded");
        return Vec::new();
    };
    let Some(container) = doc.root_element().select_first(&opts.container) else {
        warn!(selector = %opts.container, "container not found");
        return Vec::new();
    };

    let candidates = container.select_all(&opts.article);
    if candidates.is_empty() {
        warn!(selector = %opts.article, "no articles found in container");
    }

    let page_url = provider.current_url();
    let limit = opts.max_articles.min(DEFAULT_ARTICLE_LIMIT);
    collect_first(candidates, limit, |node| {
        let article = extract_article(&node, opts, page_url);
        let marker = if article.has_image() { "✓" } else { "✗" };
        let title: String = article
            .title
            .as_deref()
            .unwrap_or("No title")
            .chars()
            .take(LOG_TITLE_CHARS)
            .collect();
        info!("  - Found: {}... [Image: {}]", title, marker);
        article
    })
}

/// Builds one article from a card node using the configured field plan.
pub fn extract_article<N: Node>(node: &N, opts: &ScrapeOptions, page_url: Option<&str>) -> Article {
    let plan = &opts.article_plan;
    let mut image_url = resolve(node, &plan.image_url);
    if opts.resolve_relative_urls {
        image_url = image_url.map(|u| absolutize(&u, page_url));
    }
    Article::new(
        resolve(node, &plan.title),
        resolve(node, &plan.author),
        image_url,
        resolve(node, &plan.category),
        &opts.default_category,
    )
}

/// Scrolls, pauses, and extracts the cartoon block from the current page.
///
/// A missing section yields a cartoon with every field absent.
pub fn scrape_cartoon<P: PageProvider + ?Sized>(provider: &mut P, opts: &ScrapeOptions) -> Cartoon {
    provider.scroll_to(opts.scroll_y);
    provider.pause(opts.scroll_pause);

    let section = provider
        .document()
        .and_then(|doc| doc.root_element().select_first(&opts.cartoon_plan.section));
    let Some(section) = section else {
        warn!(selector = %opts.cartoon_plan.section, "cartoon section not found");
        return Cartoon::default();
    };

    let cartoon = extract_cartoon(&section, opts, provider.current_url());
    info!(
        "  - Cartoon: {}",
        cartoon.title.as_deref().unwrap_or("No title found")
    );
    cartoon
}

/// Builds the cartoon from its section node.
pub fn extract_cartoon<N: Node>(section: &N, opts: &ScrapeOptions, page_url: Option<&str>) -> Cartoon {
    let plan = &opts.cartoon_plan;
    let mut image_url = resolve(section, &plan.image_url);
    if opts.resolve_relative_urls {
        image_url = image_url.map(|u| absolutize(&u, page_url));
    }
    let (title, author) = resolve(section, &plan.caption)
        .map(|caption| split_caption(&caption))
        .unwrap_or((None, None));
    Cartoon {
        title,
        image_url,
        author,
    }
}
