use futures::stream::{self, StreamExt};
use nd_core::{NewsCollection, SearchResult};

use crate::client::{SearchClient, DEFAULT_MAX_RESULTS};
use crate::logging::Logger;
use crate::queries::QueryPlan;

/// Runs a [`QueryPlan`] against a [`SearchClient`] and groups the results.
pub struct SearchManager {
    client: SearchClient,
    max_results: usize,
    concurrency: usize,
}

impl SearchManager {
    pub fn new(client: SearchClient) -> Self {
        Self {
            client,
            max_results: DEFAULT_MAX_RESULTS,
            concurrency: 1,
        }
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Upper bound on in-flight requests within a category. `1` is strictly
    /// sequential; `0` is treated as `1`.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Fetches every query of the plan. Results are appended per category in
    /// plan order regardless of the concurrency setting. Failed queries
    /// contribute nothing.
    pub async fn collect(&self, plan: &QueryPlan) -> NewsCollection {
        let mut collection = NewsCollection::new();

        for (category, queries) in plan {
            let logger = Logger::new().with_prefix(format!("[{}]", category));
            logger.info(&format!("📡 Fetching {} queries...", queries.len()));

            let batches: Vec<Vec<SearchResult>> = stream::iter(queries)
                .map(|query| {
                    let logger = &logger;
                    async move {
                        let results = self.client.search(query, self.max_results).await;
                        logger.info(&format!("  - Found {} results for '{}'", results.len(), query));
                        results
                    }
                })
                .buffered(self.concurrency)
                .collect()
                .await;

            for results in batches {
                collection.extend(*category, results);
            }
        }

        collection
    }
}
