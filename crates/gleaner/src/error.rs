// ABOUTME: Error types for the gleaner scraper including ErrorCode enum and GleanError struct.
// ABOUTME: Covers run-level failures only; per-field lookups never produce errors.

use std::fmt;

/// Error codes representing the categories of run-level failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidUrl,
    Fetch,
    Navigation,
    Config,
    Write,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidUrl => "invalid URL",
            ErrorCode::Fetch => "fetch error",
            ErrorCode::Navigation => "navigation error",
            ErrorCode::Config => "configuration error",
            ErrorCode::Write => "write error",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for scrape runs.
///
/// `url` holds the page URL for fetch/navigation failures and the file path
/// for config/write failures.
#[derive(Debug, thiserror::Error)]
pub struct GleanError {
    pub code: ErrorCode,
    pub url: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for GleanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gleaner: {} {}: {}", self.op, self.url, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl GleanError {
    fn new(
        code: ErrorCode,
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create an InvalidUrl error.
    pub fn invalid_url(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::InvalidUrl, url, op, source)
    }

    /// Create a Fetch error.
    pub fn fetch(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Fetch, url, op, source)
    }

    /// Create a Navigation error.
    pub fn navigation(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Navigation, url, op, source)
    }

    /// Create a Config error.
    pub fn config(
        path: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Config, path, op, source)
    }

    /// Create a Write error.
    pub fn write(
        path: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Write, path, op, source)
    }

    /// Returns true if this is an InvalidUrl error.
    pub fn is_invalid_url(&self) -> bool {
        self.code == ErrorCode::InvalidUrl
    }

    /// Returns true if this is a Fetch error.
    pub fn is_fetch(&self) -> bool {
        self.code == ErrorCode::Fetch
    }

    /// Returns true if this is a Navigation error.
    pub fn is_navigation(&self) -> bool {
        self.code == ErrorCode::Navigation
    }

    /// Returns true if this is a Config error.
    pub fn is_config(&self) -> bool {
        self.code == ErrorCode::Config
    }

    /// Returns true if this is a Write error.
    pub fn is_write(&self) -> bool {
        self.code == ErrorCode::Write
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_op_url_code_and_source() {
        let err = GleanError::fetch(
            "https://example.com/",
            "Fetch",
            Some(anyhow::anyhow!("HTTP status 503")),
        );
        assert_eq!(
            err.to_string(),
            "gleaner: Fetch https://example.com/: fetch error: HTTP status 503"
        );
    }

    #[test]
    fn display_without_source() {
        let err = GleanError::navigation("https://example.com/", "FollowLink", None);
        assert_eq!(
            err.to_string(),
            "gleaner: FollowLink https://example.com/: navigation error"
        );
    }

    #[test]
    fn predicates_match_codes() {
        assert!(GleanError::invalid_url("", "Fetch", None).is_invalid_url());
        assert!(GleanError::fetch("", "Fetch", None).is_fetch());
        assert!(GleanError::navigation("", "Goto", None).is_navigation());
        assert!(GleanError::config("cfg.json", "LoadConfig", None).is_config());
        let write = GleanError::write("out.json", "WriteResult", None);
        assert!(write.is_write());
        assert!(!write.is_fetch());
    }
}
