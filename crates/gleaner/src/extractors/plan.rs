// ABOUTME: Per-field strategy plans for news articles and the cartoon block, with built-in defaults.
// ABOUTME: Plans are serde-configurable; defaults encode the observed markup variants in priority order.

//! Field plans.
//!
//! An [`ArticlePlan`] holds one ordered strategy list per article field; a
//! [`CartoonPlan`] does the same for the cartoon block. The defaults match the
//! markup the news site has been seen to use.

use serde::{Deserialize, Serialize};

use crate::extractors::strategy::{Accept, Strategy};

/// Strategy lists for each field of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticlePlan {
    pub title: Vec<Strategy>,
    pub author: Vec<Strategy>,
    pub image_url: Vec<Strategy>,
    pub category: Vec<Strategy>,
}

impl Default for ArticlePlan {
    fn default() -> Self {
        Self {
            title: vec![Strategy::text("h2")],
            author: vec![Strategy::text("div.author a")],
            image_url: default_image_strategies(),
            category: vec![
                Strategy::text("div.catName"),
                Strategy::text(r#"a.catName, .category, [class*="cat"]"#),
            ],
        }
    }
}

/// Image URL strategies, most specific first.
///
/// The primary picture sits in `div.image`; some cards wrap it in a link,
/// some lazy-load it, and a few only expose it through a bare anchor.
pub fn default_image_strategies() -> Vec<Strategy> {
    vec![
        Strategy::attr("div.image img", "src"),
        Strategy::attr("div.image figure a", "href"),
        Strategy::attr("img", "src"),
        Strategy::attr("div.image img", "data-src").or_attr("data-lazy-src"),
        Strategy::attr("img", "src")
            .or_attr("data-src")
            .or_attr("data-lazy-src")
            .every(),
        Strategy::attr("a", "href").every().accept(Accept::ImageLike),
    ]
}

/// Selectors and strategies for the cartoon-of-the-day block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartoonPlan {
    /// Section that holds the cartoon; absent section means an empty cartoon.
    pub section: String,
    pub image_url: Vec<Strategy>,
    /// Caption text, split into title and author.
    pub caption: Vec<Strategy>,
}

impl Default for CartoonPlan {
    fn default() -> Self {
        Self {
            section: ".cartoon-section".to_string(),
            image_url: vec![Strategy::attr(".cartoon-img img", "src")],
            caption: vec![Strategy::text(".cartoon-caption")],
        }
    }
}

impl ArticlePlan {
    /// Every selector referenced by the plan, for cache warm-up.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.title
            .iter()
            .chain(&self.author)
            .chain(&self.image_url)
            .chain(&self.category)
            .map(|s| s.selector.as_str())
    }
}

impl CartoonPlan {
    /// The section selector followed by the field selectors.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.section.as_str()).chain(
            self.image_url
                .iter()
                .chain(&self.caption)
                .map(|s| s.selector.as_str()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::strategy::{Read, Scope};

    #[test]
    fn test_default_image_order() {
        let plan = ArticlePlan::default();
        let selectors: Vec<&str> = plan.image_url.iter().map(|s| s.selector.as_str()).collect();
        assert_eq!(
            selectors,
            vec![
                "div.image img",
                "div.image figure a",
                "img",
                "div.image img",
                "img",
                "a"
            ]
        );
        assert_eq!(plan.image_url[4].scope, Scope::Every);
        assert_eq!(plan.image_url[5].accept, Accept::ImageLike);
        assert_eq!(
            plan.image_url[3].reads,
            vec![Read::Attr("data-src".into()), Read::Attr("data-lazy-src".into())]
        );
    }

    #[test]
    fn test_partial_plan_keeps_default_fields() {
        let plan: ArticlePlan =
            serde_json::from_str(r#"{"title": [{"selector": "h3"}]}"#).unwrap();
        assert_eq!(plan.title, vec![Strategy::text("h3")]);
        assert_eq!(plan.image_url, default_image_strategies());
    }

    #[test]
    fn test_selectors_cover_every_field() {
        let plan = ArticlePlan::default();
        let all: Vec<&str> = plan.selectors().collect();
        assert!(all.contains(&"h2"));
        assert!(all.contains(&"div.author a"));
        assert!(all.contains(&"div.catName"));
        assert_eq!(all.len(), 10);
    }

    #[test]
    fn test_cartoon_selectors_start_with_section() {
        let plan = CartoonPlan::default();
        let all: Vec<&str> = plan.selectors().collect();
        assert_eq!(all, vec![".cartoon-section", ".cartoon-img img", ".cartoon-caption"]);
    }
}
