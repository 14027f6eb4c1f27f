//! Result extraction from the search results fragment.
//!
//! Results are found through marker attributes the site puts on its markup:
//! one attribute flags an entry, others flag the entry's title and capability tags.
//! There is no marker for the description; the first `<p>` in the entry is used.

mod walk;

use std::iter::FusedIterator;

use ego_tree::NodeRef;
use scraper::{Html, Node};
use serde::Serialize;

use crate::core::error::SearchError;

use walk::{direct_text, find_all, find_first, has_attr, is_element, next_sibling_matching};

/// Marks the root element of one search result.
pub const MODEL_MARKER: &str = "x-test-model";
/// Marks the element holding the model name.
pub const TITLE_MARKER: &str = "x-test-search-response-title";
/// Marks each capability tag (e.g. `tools`, `vision`).
pub const CAPABILITY_MARKER: &str = "x-test-capability";

const DESCRIPTION_TAG: &str = "p";

/// One model from the search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub name: String,
    /// Sorted ascending.
    pub capabilities: Vec<String>,
    pub description: String,
}

impl SearchResult {
    fn from_entry(entry: NodeRef<'_, Node>) -> Self {
        let name = find_first(entry, |n| has_attr(n, TITLE_MARKER))
            .map(direct_text)
            .unwrap_or_default();

        let mut capabilities: Vec<String> = find_all(entry, |n| has_attr(n, CAPABILITY_MARKER))
            .map(direct_text)
            .collect();
        capabilities.sort();

        let description = find_first(entry, |n| is_element(n, DESCRIPTION_TAG))
            .map(direct_text)
            .unwrap_or_default();

        Self {
            name,
            capabilities,
            description,
        }
    }
}

fn is_model(node: &Node) -> bool {
    has_attr(node, MODEL_MARKER)
}

/// Parsed response body.
pub struct ResultDocument {
    html: Html,
}

impl ResultDocument {
    /// Parse a response body. Malformed markup is repaired, not rejected; only a body
    /// that is not UTF-8 fails.
    pub fn parse(body: &[u8]) -> Result<Self, SearchError> {
        let text = std::str::from_utf8(body)?;
        let html = Html::parse_document(text);
        if !html.errors.is_empty() {
            log::debug!("Recovered from {} HTML parse errors", html.errors.len());
        }
        Ok(Self { html })
    }

    /// Results in document order, extracted one at a time.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            next: find_first(self.html.tree.root(), is_model),
        }
    }
}

/// Forward-only iterator over the results of a [`ResultDocument`].
///
/// Starts at the first model node in the document, then follows sibling links;
/// model nodes nested inside an entry never start a new entry.
pub struct Entries<'a> {
    next: Option<NodeRef<'a, Node>>,
}

impl Iterator for Entries<'_> {
    type Item = SearchResult;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.next.take()?;
        self.next = next_sibling_matching(entry, is_model);
        Some(SearchResult::from_entry(entry))
    }
}

impl FusedIterator for Entries<'_> {}
