//! Curated tickers offered by the search autocomplete.

use crate::domain::ticker::TickerEntry;

pub const DEFAULT_TICKER: &str = "RELIANCE.NS";

pub static POPULAR_TICKERS: &[TickerEntry] = &[
    TickerEntry::new("RELIANCE.NS", "Reliance Industries"),
    TickerEntry::new("TCS.NS", "Tata Consultancy Services"),
    TickerEntry::new("HDFCBANK.NS", "HDFC Bank"),
    TickerEntry::new("ICICIBANK.NS", "ICICI Bank"),
    TickerEntry::new("INFY.NS", "Infosys"),
    TickerEntry::new("SBIN.NS", "State Bank of India"),
    TickerEntry::new("TATAMOTORS.NS", "Tata Motors"),
    TickerEntry::new("ADANIENT.NS", "Adani Enterprises"),
    TickerEntry::new("ZOMATO.NS", "Zomato Ltd"),
    TickerEntry::new("PAYTM.NS", "One 97 Communications"),
    TickerEntry::new("AAPL", "Apple Inc."),
    TickerEntry::new("MSFT", "Microsoft Corp"),
    TickerEntry::new("GOOGL", "Alphabet (Google)"),
    TickerEntry::new("AMZN", "Amazon.com"),
    TickerEntry::new("NVDA", "NVIDIA Corp"),
    TickerEntry::new("TSLA", "Tesla Inc."),
    TickerEntry::new("BTC-USD", "Bitcoin USD"),
];
