// ABOUTME: Field extraction building blocks: strategies, resolver, plans, caption splitting, collection.
// ABOUTME: Everything here works against the Node trait and never touches the network.

//! Field extraction module.
//!
//! Submodules:
//! - `strategy`: the (selector, reads, scope, accept) rule type.
//! - `select`: the ordered-fallback resolver.
//! - `plan`: per-field strategy lists with built-in defaults.
//! - `caption`: title/author splitting for captions.
//! - `collect`: first-N selection of candidate nodes.
//! - `compiled`: selector cache.

pub mod caption;
pub mod collect;
pub mod compiled;
pub mod plan;
pub mod select;
pub mod strategy;
