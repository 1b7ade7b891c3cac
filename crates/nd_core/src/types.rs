use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single `(title, url)` pair recovered from a search result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
}

impl SearchResult {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// The four fixed buckets that partition queries and page sections.
///
/// Declaration order is also the order categories are fetched in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Highlights,
    VipNews,
    FinanceNews,
    GlobalNews,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Highlights,
        Category::VipNews,
        Category::FinanceNews,
        Category::GlobalNews,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Highlights => "highlights",
            Category::VipNews => "vip_news",
            Category::FinanceNews => "finance_news",
            Category::GlobalNews => "global_news",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Results grouped by category, in the order they were appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsCollection {
    items: BTreeMap<Category, Vec<SearchResult>>,
}

impl NewsCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the results for `category`, or an empty slice if none were added.
    pub fn get(&self, category: Category) -> &[SearchResult] {
        self.items.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn extend<I>(&mut self, category: Category, results: I)
    where
        I: IntoIterator<Item = SearchResult>,
    {
        self.items.entry(category).or_default().extend(results);
    }

    pub fn len(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
