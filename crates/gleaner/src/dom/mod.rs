// ABOUTME: DOM query capability consumed by the field resolver and the scrape flow.
// ABOUTME: Defines the Node trait and implements it for scraper's ElementRef.

//! DOM query abstraction.
//!
//! Extraction code never touches a concrete HTML engine. It asks a [`Node`]
//! for descendants, attributes and text, and every lookup reports "not found"
//! as `None` or an empty `Vec`. An invalid selector is also just "not found".

use scraper::ElementRef;

use crate::extractors::compiled::compiled;

/// Read-only view of one element in a parsed page.
pub trait Node: Sized {
    /// First descendant matching `css`, in document order.
    fn select_first(&self, css: &str) -> Option<Self>;

    /// Every descendant matching `css`, in document order.
    fn select_all(&self, css: &str) -> Vec<Self>;

    /// Raw attribute value, untrimmed.
    fn attr(&self, name: &str) -> Option<String>;

    /// Concatenated text of the node and its descendants, untrimmed.
    fn text_content(&self) -> String;
}

impl<'a> Node for ElementRef<'a> {
    fn select_first(&self, css: &str) -> Option<Self> {
        let selector = compiled(css)?;
        self.select(&selector).next()
    }

    fn select_all(&self, css: &str) -> Vec<Self> {
        match compiled(css) {
            Some(selector) => self.select(&selector).collect(),
            None => Vec::new(),
        }
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_string)
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const SAMPLE_HTML: &str = r#"
        <html><body>
            <article class="normal">
                <h2> First <em>headline</em> </h2>
                <div class="image"><img src="/a.jpg" data-src="/lazy-a.jpg"></div>
            </article>
            <article class="normal"><h2>Second</h2></article>
        </body></html>
    "#;

    #[test]
    fn select_first_and_all_follow_document_order() {
        let doc = Html::parse_document(SAMPLE_HTML);
        let root = doc.root_element();

        let articles = root.select_all("article.normal");
        assert_eq!(articles.len(), 2);
        let first = root.select_first("article.normal h2").unwrap();
        assert_eq!(first.text_content(), " First headline ");
    }

    #[test]
    fn attr_returns_raw_value() {
        let doc = Html::parse_document(SAMPLE_HTML);
        let img = doc.root_element().select_first("div.image img").unwrap();
        assert_eq!(Node::attr(&img, "data-src").as_deref(), Some("/lazy-a.jpg"));
        assert!(Node::attr(&img, "data-lazy-src").is_none());
    }

    #[test]
    fn invalid_selector_is_not_found() {
        let doc = Html::parse_document(SAMPLE_HTML);
        let root = doc.root_element();
        assert!(root.select_first("[[[bad").is_none());
        assert!(root.select_all("[[[bad").is_empty());
    }
}
