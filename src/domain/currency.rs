use std::fmt;

/// Display currency derived from the exchange suffix of a ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Currency {
    #[default]
    Rupee,
    Dollar,
}

// Indian exchanges: NSE and BSE
const RUPEE_SUFFIXES: &[&str] = &[".NS", ".BO"];

impl Currency {
    /// No ticker at all falls back to Rupee; that is the dashboard's home market.
    pub fn resolve(ticker: Option<&str>) -> Self {
        let Some(ticker) = ticker.filter(|t| !t.is_empty()) else {
            return Currency::Rupee;
        };

        let upper = ticker.to_uppercase();
        if RUPEE_SUFFIXES.iter().any(|suffix| upper.ends_with(suffix)) {
            Currency::Rupee
        } else {
            Currency::Dollar
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Rupee => "₹",
            Currency::Dollar => "$",
        }
    }

    pub fn format_price(&self, price: f64) -> String {
        format!("{}{:.2}", self.symbol(), price)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indian_suffixes_resolve_to_rupee() {
        assert_eq!(Currency::resolve(Some("RELIANCE.NS")).symbol(), "₹");
        assert_eq!(Currency::resolve(Some("tcs.bo")).symbol(), "₹");
    }

    #[test]
    fn plain_tickers_resolve_to_dollar() {
        assert_eq!(Currency::resolve(Some("AAPL")).symbol(), "$");
        assert_eq!(Currency::resolve(Some("BTC-USD")).symbol(), "$");
    }

    #[test]
    fn suffix_must_be_at_the_end() {
        assert_eq!(Currency::resolve(Some("X.NSE")), Currency::Dollar);
    }

    #[test]
    fn missing_ticker_defaults_to_rupee() {
        assert_eq!(Currency::resolve(None), Currency::Rupee);
        assert_eq!(Currency::resolve(Some("")), Currency::Rupee);
    }

    #[test]
    fn prices_use_two_decimals() {
        assert_eq!(Currency::Dollar.format_price(189.456), "$189.46");
        assert_eq!(Currency::Rupee.format_price(2950.0), "₹2950.00");
    }
}
