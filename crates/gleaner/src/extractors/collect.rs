// ABOUTME: Bounded collector that materializes the first N candidate nodes in document order.

/// Number of articles kept from the entertainment listing.
pub const DEFAULT_ARTICLE_LIMIT: usize = 5;

/// Maps the first `limit` items of `nodes` through `build`, ignoring the rest.
///
/// Selection is purely positional; `build` runs only for kept items.
pub fn collect_first<N, T, I, F>(nodes: I, limit: usize, build: F) -> Vec<T>
where
    I: IntoIterator<Item = N>,
    F: FnMut(N) -> T,
{
    nodes.into_iter().take(limit).map(build).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caps_at_limit_in_order() {
        let out = collect_first(1..=12, DEFAULT_ARTICLE_LIMIT, |n| n * 10);
        assert_eq!(out, vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_fewer_candidates_than_limit() {
        let out = collect_first(vec!["a", "b"], DEFAULT_ARTICLE_LIMIT, str::to_uppercase);
        assert_eq!(out, vec!["A", "B"]);
    }

    #[test]
    fn test_build_not_called_past_limit() {
        let mut calls = 0;
        let _ = collect_first(0..100, 3, |n| {
            calls += 1;
            n
        });
        assert_eq!(calls, 3);
    }
}
