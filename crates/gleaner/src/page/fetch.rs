// ABOUTME: Blocking page download for static HTML: scheme check, size cap and text decoding.
// ABOUTME: Shared by the news scraper's HTTP page provider and the film ETL download.

use std::time::Duration;

use encoding_rs::Encoding;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::error::GleanError;

/// Pages larger than this are refused (10 MB).
pub const MAX_PAGE_BYTES: usize = 10 * 1024 * 1024;

/// A downloaded page, already decoded to text.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after redirects; relative links on the page resolve against it.
    pub final_url: String,
    pub html: String,
}

/// Builds the blocking HTTP client used for page loads.
pub fn build_client(user_agent: &str, timeout: Duration) -> Result<Client, GleanError> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
        .map_err(|e| GleanError::fetch("", "BuildClient", Some(e.into())))
}

/// Downloads `url` and decodes it. Any non-2xx status is a fetch error.
pub fn fetch(client: &Client, url: &str) -> Result<FetchedPage, GleanError> {
    let target = parse_target(url)?;
    let fail = |reason: String| GleanError::fetch(url, "Fetch", Some(anyhow::anyhow!(reason)));

    tracing::debug!(url, "fetching page");
    let response = client
        .get(target)
        .send()
        .map_err(|e| fail(format!("request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(fail(format!("HTTP status {}", status.as_u16())));
    }
    if response
        .content_length()
        .is_some_and(|len| len > MAX_PAGE_BYTES as u64)
    {
        return Err(fail("page too large".to_string()));
    }

    let final_url = response.url().to_string();
    let declared = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(declared_encoding);
    let body = response
        .bytes()
        .map_err(|e| fail(format!("failed to read body: {}", e)))?;
    // Chunked responses carry no length up front.
    if body.len() > MAX_PAGE_BYTES {
        return Err(fail("page too large".to_string()));
    }

    Ok(FetchedPage {
        final_url,
        html: decode(&body, declared),
    })
}

fn parse_target(url: &str) -> Result<Url, GleanError> {
    let invalid = |reason: String| GleanError::invalid_url(url, "Fetch", Some(anyhow::anyhow!(reason)));
    let target = Url::parse(url).map_err(|e| invalid(format!("invalid URL: {}", e)))?;
    match target.scheme() {
        "http" | "https" => Ok(target),
        other => Err(invalid(format!("unsupported scheme {:?}", other))),
    }
}

/// Encoding named by the `charset` parameter of a Content-Type value.
fn declared_encoding(content_type: &str) -> Option<&'static Encoding> {
    let label = content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(['"', '\'']))
    })?;
    Encoding::for_label(label.as_bytes())
}

/// Without a declared charset, the encoding is guessed from the bytes.
fn decode(body: &[u8], declared: Option<&'static Encoding>) -> String {
    let encoding = declared.unwrap_or_else(|| {
        let mut detector = chardetng::EncodingDetector::new();
        detector.feed(body, true);
        detector.guess(None, true)
    });
    encoding.decode(body).0.into_owned()
}
