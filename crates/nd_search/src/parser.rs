//! Extraction of `(title, url)` pairs from a DuckDuckGo HTML result page.
//!
//! Callers only see [`ResultParser`]; the strategy behind it can be swapped
//! when the provider's markup changes.

use std::borrow::Cow;

use clap::ValueEnum;
use lazy_static::lazy_static;
use nd_core::SearchResult;
use regex::Regex;
use scraper::{Html, Selector};

lazy_static! {
    static ref RESULT_LINK: Regex =
        Regex::new(r#"<a[^>]*class="result__a"[^>]*href="([^"]*)"[^>]*>([^<]*)</a>"#)
            .expect("result link pattern is valid");
    static ref REDIRECT_TARGET: Regex =
        Regex::new(r"uddg=([^&]+)").expect("redirect pattern is valid");
}

const RESULT_LINK_SELECTOR: &str = "a.result__a";

pub trait ResultParser: Send + Sync {
    /// Returns every result with a non-empty title, in document order.
    fn parse(&self, html: &str) -> Vec<SearchResult>;
}

/// Which [`ResultParser`] a client is built with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ParserKind {
    #[default]
    Regex,
    Selector,
}

impl ParserKind {
    pub fn build(self) -> Box<dyn ResultParser> {
        match self {
            ParserKind::Regex => Box::new(RegexParser),
            ParserKind::Selector => Box::new(SelectorParser),
        }
    }
}

/// Single-pattern scan over the raw markup. Only matches anchors whose
/// `class` attribute is exactly `result__a` and precedes `href`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexParser;

impl ResultParser for RegexParser {
    fn parse(&self, html: &str) -> Vec<SearchResult> {
        RESULT_LINK
            .captures_iter(html)
            .filter_map(|caps| to_result(&caps[2], &caps[1]))
            .collect()
    }
}

/// Parses the document into a DOM and selects `a.result__a`.
///
/// The DOM hands back decoded text, so title and href are re-escaped in the
/// provider's own form (`&amp;`, `&lt;`, `&gt;`, `&quot;`, `&#x27;`). Output
/// then matches [`RegexParser`], which never decodes entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorParser;

impl ResultParser for SelectorParser {
    fn parse(&self, html: &str) -> Vec<SearchResult> {
        let mut results = Vec::new();
        let document = Html::parse_document(html);

        if let Ok(link_selector) = Selector::parse(RESULT_LINK_SELECTOR) {
            for link in document.select(&link_selector) {
                let href = link.value().attr("href").unwrap_or_default();
                let title = link.text().collect::<String>();
                results.extend(to_result(
                    &html_escape::encode_quoted_attribute(&title),
                    &html_escape::encode_quoted_attribute(href),
                ));
            }
        }

        results
    }
}

fn to_result(title: &str, href: &str) -> Option<SearchResult> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    Some(SearchResult::new(title, resolve_redirect(href)))
}

/// Unwraps a provider redirect link (`//duckduckgo.com/l/?uddg=<target>&rut=..`)
/// into its percent-decoded target. Any other href is returned unchanged.
pub fn resolve_redirect(href: &str) -> String {
    REDIRECT_TARGET
        .captures(href)
        .and_then(|caps| caps.get(1))
        .map(|target| percent_decode(target.as_str()).into_owned())
        .unwrap_or_else(|| href.to_string())
}

// `+` is left as is; invalid UTF-8 sequences are replaced.
fn percent_decode(encoded: &str) -> Cow<'_, str> {
    match urlencoding::decode(encoded) {
        Ok(decoded) => decoded,
        Err(_) => {
            let bytes = urlencoding::decode_binary(encoded.as_bytes());
            Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}
