// ABOUTME: Compiled CSS selectors, parsed once per distinct selector string and shared for the process.
// ABOUTME: A selector that fails to parse is remembered as unusable and simply never matches.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use once_cell::sync::Lazy;
use scraper::Selector;

static COMPILED: Lazy<Mutex<HashMap<String, Option<Arc<Selector>>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Compiled form of `css`, or `None` when it does not parse.
pub fn compiled(css: &str) -> Option<Arc<Selector>> {
    let mut table = COMPILED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(entry) = table.get(css) {
        return entry.clone();
    }
    let entry = Selector::parse(css).ok().map(Arc::new);
    table.insert(css.to_string(), entry.clone());
    entry
}

/// Compiles every selector a run will use and returns the ones that do not parse.
///
/// Strategy lists come from user config, so a typo would otherwise only show
/// up as a field that is always missing.
pub fn unusable_selectors<'a, I>(selectors: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut bad: Vec<&str> = selectors
        .into_iter()
        .filter(|css| compiled(css).is_none())
        .collect();
    bad.dedup();
    bad
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn same_selector_shares_one_compilation() {
        let first = compiled("article.normal div.image img").unwrap();
        let again = compiled("article.normal div.image img").unwrap();
        assert!(Arc::ptr_eq(&first, &again));
    }

    #[test]
    fn unparsable_selector_never_compiles() {
        assert!(compiled("div.image >").is_none());
        assert!(compiled("div.image >").is_none());
    }

    #[test]
    fn reports_only_unusable_selectors_in_order() {
        let bad = unusable_selectors([
            ".cartoon-section",
            "h2 >",
            r#"a[href$="/entertainment"]"#,
            "div..catName",
        ]);
        assert_eq!(bad, vec!["h2 >", "div..catName"]);
    }
}
