use std::time::Duration;

use nd_core::{Error, Result, SearchResult};
use tracing::{debug, warn};
use url::Url;

use crate::parser::{ParserKind, ResultParser};

pub const DEFAULT_ENDPOINT: &str = "https://html.duckduckgo.com/html/";
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";
/// `df=w`: restrict results to the past week.
pub const RECENCY_FILTER: &str = "w";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_MAX_RESULTS: usize = 3;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub endpoint: String,
    pub timeout: Duration,
    /// Skip TLS certificate validation. Off unless explicitly requested.
    pub insecure: bool,
    pub parser: ParserKind,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            insecure: false,
            parser: ParserKind::default(),
        }
    }
}

pub struct SearchClient {
    http: reqwest::Client,
    endpoint: Url,
    parser: Box<dyn ResultParser>,
}

impl SearchClient {
    pub fn new(config: SearchConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", config.endpoint, e)))?;

        if config.insecure {
            warn!("⚠️ TLS certificate validation is disabled for search requests");
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.insecure)
            .build()?;

        Ok(Self {
            http,
            endpoint,
            parser: config.parser.build(),
        })
    }

    /// Replaces the parser chosen by the config.
    pub fn with_parser(mut self, parser: Box<dyn ResultParser>) -> Self {
        self.parser = parser;
        self
    }

    pub fn search_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("df", RECENCY_FILTER);
        url
    }

    /// Fetches and parses one result page, keeping at most `max_results`.
    pub async fn try_search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>> {
        let url = self.search_url(query);
        debug!("🔎 GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }
        let html = response.text().await?;

        let mut results = self.parser.parse(&html);
        results.truncate(max_results);
        Ok(results)
    }

    /// Like [`try_search`](Self::try_search), but a failed query is logged and
    /// yields no results instead of an error.
    pub async fn search(&self, query: &str, max_results: usize) -> Vec<SearchResult> {
        match self.try_search(query, max_results).await {
            Ok(results) => results,
            Err(e) => {
                warn!("Search error for '{}': {}", query, e);
                Vec::new()
            }
        }
    }
}
