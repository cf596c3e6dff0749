//! Ticker universe read from a listing-status CSV.

use crate::config::UniverseFilter;
use fundscore_traits::{FundscoreError, Result, Symbol};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::Read, path::Path};

/// One row of the listing-status CSV.
///
/// Every column is kept as text; dates are not interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerListing {
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: Symbol,
    /// Company name.
    #[serde(default)]
    pub name: String,
    /// Listing exchange.
    #[serde(default)]
    pub exchange: String,
    /// Asset type ("Stock", "ETF", ...).
    #[serde(default)]
    pub asset_type: String,
    /// IPO date.
    #[serde(default)]
    pub ipo_date: String,
    /// Delisting date ("null" while listed).
    #[serde(default)]
    pub delisting_date: String,
    /// Listing status ("Active", "Delisted").
    #[serde(default)]
    pub status: String,
}

impl TickerListing {
    /// An active stock listing with only a symbol.
    #[must_use]
    pub fn active_stock(symbol: impl Into<Symbol>) -> Self {
        Self {
            symbol: symbol.into(),
            asset_type: "Stock".to_string(),
            status: "Active".to_string(),
            ..Default::default()
        }
    }
}

/// An ordered list of ticker listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Universe {
    listings: Vec<TickerListing>,
}

impl Universe {
    /// Create a universe from listings, keeping their order.
    #[must_use]
    pub const fn new(listings: Vec<TickerListing>) -> Self {
        Self { listings }
    }

    /// Build a universe of active stocks from explicit symbols.
    ///
    /// Symbols are trimmed and upper-cased; blanks are dropped.
    #[must_use]
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let listings = symbols
            .into_iter()
            .map(|s| s.as_ref().trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .map(TickerListing::active_stock)
            .collect();
        Self { listings }
    }

    /// Parse listing-status CSV text.
    ///
    /// # Errors
    ///
    /// Returns an error if the CSV is malformed or has no `symbol` column.
    pub fn from_csv_str(text: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| FundscoreError::InvalidData(format!("listing CSV header: {e}")))?;
        if !headers.iter().any(|h| h == "symbol") {
            return Err(FundscoreError::InvalidData(
                "listing CSV has no 'symbol' column".to_string(),
            ));
        }

        let mut listings = Vec::new();
        for (idx, record) in reader.deserialize::<TickerListing>().enumerate() {
            // +2: header line, then 1-based lines
            let listing = record.map_err(|e| {
                FundscoreError::InvalidData(format!("listing CSV line {}: {e}", idx + 2))
            })?;
            if !listing.symbol.is_empty() {
                listings.push(listing);
            }
        }

        Ok(Self { listings })
    }

    /// Read a listing-status CSV file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let mut text = String::new();
        File::open(path.as_ref())?.read_to_string(&mut text)?;
        Self::from_csv_str(&text)
    }

    /// Listings that pass `filter`, in order.
    #[must_use]
    pub fn filtered(&self, filter: &UniverseFilter) -> Vec<&TickerListing> {
        self.listings.iter().filter(|l| filter.matches(l)).collect()
    }

    /// All listings.
    #[must_use]
    pub fn listings(&self) -> &[TickerListing] {
        &self.listings
    }

    /// Number of listings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the universe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
