//! Query parsing

use tracescope_core::TraceRecord;

/// A parsed event-name query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    terms: Vec<String>,
    active: bool,
}

impl SearchQuery {
    /// Parse comma-separated terms
    ///
    /// Terms are trimmed and lower-cased; empty terms are dropped. A query
    /// made only of whitespace is inactive and filters nothing.
    pub fn parse(text: &str) -> Self {
        let active = !text.trim().is_empty();
        let terms = text
            .split(',')
            .map(|term| term.trim().to_lowercase())
            .filter(|term| !term.is_empty())
            .collect();
        Self { terms, active }
    }

    /// Check if the query filters nothing
    pub fn is_empty(&self) -> bool {
        !self.active
    }

    /// Parsed terms, in query order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Check if `record` is an event whose name contains any term
    pub fn matches(&self, record: &TraceRecord) -> bool {
        match record.event_name() {
            Some(name) => {
                let name = name.to_lowercase();
                self.terms.iter().any(|term| name.contains(term.as_str()))
            }
            None => false,
        }
    }
}

impl From<&str> for SearchQuery {
    fn from(text: &str) -> Self {
        SearchQuery::parse(text)
    }
}
