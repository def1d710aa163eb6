// ABOUTME: Caption splitter turning "Title - Author" captions into a title/author pair.
// ABOUTME: Splits on the first '-' only; empty sides become None.

/// Separator between the title and the author in a caption.
const CAPTION_SEPARATOR: char = '-';

/// Splits a caption into `(title, author)`.
///
/// Only the first separator splits, so `"A - B - C"` yields `("A", "B - C")`.
/// Without a separator the whole caption is the title.
pub fn split_caption(caption: &str) -> (Option<String>, Option<String>) {
    let caption = caption.trim();
    if caption.is_empty() {
        return (None, None);
    }
    match caption.split_once(CAPTION_SEPARATOR) {
        Some((title, author)) => (non_empty(title), non_empty(author)),
        None => (Some(caption.to_string()), None),
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(title: Option<&str>, author: Option<&str>) -> (Option<String>, Option<String>) {
        (title.map(String::from), author.map(String::from))
    }

    #[test]
    fn test_title_and_author() {
        assert_eq!(
            split_caption("Cartoon Title - Author Name"),
            pair(Some("Cartoon Title"), Some("Author Name"))
        );
    }

    #[test]
    fn test_no_separator() {
        assert_eq!(
            split_caption("No Separator Here"),
            pair(Some("No Separator Here"), None)
        );
    }

    #[test]
    fn test_splits_on_first_separator_only() {
        assert_eq!(split_caption("A - B - C"), pair(Some("A"), Some("B - C")));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(split_caption("   \n "), pair(None, None));
    }

    #[test]
    fn test_blank_side_is_none() {
        assert_eq!(split_caption("Title -"), pair(Some("Title"), None));
        assert_eq!(split_caption("- Author"), pair(None, Some("Author")));
    }

    #[test]
    fn test_non_ascii_caption() {
        assert_eq!(
            split_caption("  गजब छ बा! - अविन  "),
            pair(Some("गजब छ बा!"), Some("अविन"))
        );
    }
}
