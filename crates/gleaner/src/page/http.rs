// ABOUTME: HttpPageProvider loads static HTML pages over blocking HTTP and keeps the last one parsed.

use reqwest::blocking::Client;
use scraper::Html;

use crate::error::GleanError;
use crate::options::ScrapeOptions;
use crate::page::fetch::{build_client, fetch};
use crate::page::PageProvider;

/// Page provider backed by plain HTTP requests; no script execution.
#[derive(Debug)]
pub struct HttpPageProvider {
    client: Client,
    current_url: Option<String>,
    current: Option<Html>,
}

impl HttpPageProvider {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            current_url: None,
            current: None,
        }
    }

    /// Builds a provider with the user agent and timeout from `opts`.
    pub fn from_options(opts: &ScrapeOptions) -> Result<Self, GleanError> {
        Ok(Self::new(build_client(&opts.user_agent, opts.timeout)?))
    }
}

impl PageProvider for HttpPageProvider {
    fn goto(&mut self, url: &str) -> Result<(), GleanError> {
        let fetched = fetch(&self.client, url)?;
        self.current = Some(Html::parse_document(&fetched.html));
        self.current_url = Some(fetched.final_url);
        Ok(())
    }

    fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    fn document(&self) -> Option<&Html> {
        self.current.as_ref()
    }

    fn close(&mut self) {
        self.current = None;
        self.current_url = None;
    }
}
