use std::fmt;

use crate::config::POPULAR_TICKERS;

/// A ticker the user committed to (search submit, suggestion click).
/// May carry an exchange suffix such as `.NS` or `.BO`.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct TickerSymbol(String);

impl TickerSymbol {
    /// Trims surrounding whitespace; an empty input is not a ticker.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TickerSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickerEntry {
    pub symbol: &'static str,
    pub name: &'static str,
}

impl TickerEntry {
    pub const fn new(symbol: &'static str, name: &'static str) -> Self {
        Self { symbol, name }
    }

    fn contains_ignore_case(&self, needle_lower: &str) -> bool {
        self.symbol.to_lowercase().contains(needle_lower)
            || self.name.to_lowercase().contains(needle_lower)
    }
}

/// Fixed, ordered list of tickers offered for autocomplete.
#[derive(Debug, Clone)]
pub struct TickerCatalog {
    entries: Vec<TickerEntry>,
}

impl Default for TickerCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TickerCatalog {
    pub fn new(entries: Vec<TickerEntry>) -> Self {
        Self { entries }
    }

    pub fn builtin() -> Self {
        Self::new(POPULAR_TICKERS.to_vec())
    }

    /// Case-insensitive substring match on symbol or name, in catalog order.
    /// An empty query matches nothing so focusing the box doesn't dump the catalog.
    pub fn matches(&self, query: &str) -> Vec<TickerEntry> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.contains_ignore_case(&needle))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_yields_nothing() {
        let catalog = TickerCatalog::builtin();
        assert!(catalog.matches("").is_empty());
    }

    #[test]
    fn every_match_contains_query_in_symbol_or_name() {
        let catalog = TickerCatalog::builtin();
        for query in ["ns", "TATA", "inc", "bank", "o", "-usd"] {
            let needle = query.to_lowercase();
            let results = catalog.matches(query);
            assert!(!results.is_empty(), "expected matches for {query}");
            for entry in results {
                assert!(
                    entry.symbol.to_lowercase().contains(&needle)
                        || entry.name.to_lowercase().contains(&needle),
                    "{} / {} does not contain {}",
                    entry.symbol,
                    entry.name,
                    query
                );
            }
        }
    }

    #[test]
    fn matches_keep_catalog_order() {
        let catalog = TickerCatalog::builtin();
        let symbols: Vec<&str> = catalog.matches("tata").iter().map(|e| e.symbol).collect();
        assert_eq!(symbols, vec!["TCS.NS", "TATAMOTORS.NS"]);
    }

    #[test]
    fn name_only_match_is_found() {
        let catalog = TickerCatalog::builtin();
        let results = catalog.matches("google");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].symbol, "GOOGL");
    }

    #[test]
    fn unknown_query_yields_nothing() {
        let catalog = TickerCatalog::builtin();
        assert!(catalog.matches("zzzz").is_empty());
    }

    #[test]
    fn ticker_symbol_rejects_blank_input() {
        assert_eq!(TickerSymbol::parse("   "), None);
        assert_eq!(
            TickerSymbol::parse("  AAPL ").map(|t| t.to_string()),
            Some("AAPL".to_string())
        );
    }
}
