use std::time::Duration;

use clap::Args;

use crate::client::{SearchConfig, DEFAULT_ENDPOINT, DEFAULT_MAX_RESULTS, DEFAULT_TIMEOUT};
use crate::parser::ParserKind;

/// Search-related flags, flattened into the binary's command line.
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Search provider HTML endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Maximum results kept per query
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Result extraction strategy
    #[arg(long, value_enum, default_value_t = ParserKind::Regex)]
    pub parser: ParserKind,

    /// Maximum concurrent requests within a category (1 = sequential)
    #[arg(long, default_value_t = 1)]
    pub concurrency: usize,

    /// Disable TLS certificate validation for search requests
    #[arg(long)]
    pub insecure: bool,
}

impl SearchArgs {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            endpoint: self.endpoint.clone(),
            timeout: Duration::from_secs(self.timeout),
            insecure: self.insecure,
            parser: self.parser,
        }
    }
}
