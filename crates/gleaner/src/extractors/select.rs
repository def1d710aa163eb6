// ABOUTME: Field resolver: evaluates an ordered strategy list against one node, first non-empty value wins.
// ABOUTME: Lookup failures of any kind fall through to the next strategy; exhaustion yields None.

//! Ordered-fallback field resolution.
//!
//! Key behaviors:
//! - Strategies are tried in order; the first one yielding a value wins, even
//!   if a later strategy would also succeed.
//! - Values are trimmed; an empty string is a failure, not a success.
//! - A missing node, a missing attribute or an invalid selector all mean
//!   "try the next strategy". Nothing is propagated.

use crate::dom::Node;
use crate::extractors::strategy::{Read, Scope, Strategy};

/// Returns the value of the first strategy that yields a non-empty trimmed string.
pub fn resolve<N: Node>(node: &N, strategies: &[Strategy]) -> Option<String> {
    strategies.iter().find_map(|strategy| apply(node, strategy))
}

/// Like [`resolve`], falling back to `default` when every strategy fails.
pub fn resolve_or<N: Node>(node: &N, strategies: &[Strategy], default: &str) -> String {
    resolve(node, strategies).unwrap_or_else(|| default.to_string())
}

fn apply<N: Node>(node: &N, strategy: &Strategy) -> Option<String> {
    match strategy.scope {
        Scope::First => node
            .select_first(&strategy.selector)
            .and_then(|matched| read_value(&matched, strategy)),
        Scope::Every => node
            .select_all(&strategy.selector)
            .iter()
            .find_map(|matched| read_value(matched, strategy)),
    }
}

fn read_value<N: Node>(matched: &N, strategy: &Strategy) -> Option<String> {
    strategy.reads.iter().find_map(|read| {
        let raw = match read {
            Read::Text => matched.text_content(),
            Read::Attr(name) => matched.attr(name)?,
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || !strategy.accept.accepts(trimmed) {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
