//! Alpha Vantage API client implementation.

use crate::{
    Result,
    error::AvError,
    types::{OutputSize, TimeSeriesDaily},
};
use fundscore_traits::{DailyBar, Overview, RawBundle, StatementSeries};
use reqwest::Client;
use serde_json::Value;
use std::{env, fmt, time::Duration};

/// Base URL for the Alpha Vantage query endpoint.
const AV_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "ALPHA_VANTAGE_API_KEY";

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Alpha Vantage API client.
#[derive(Clone)]
pub struct AlphaVantageClient {
    client: Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
    output_size: OutputSize,
}

impl fmt::Debug for AlphaVantageClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphaVantageClient")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("output_size", &self.output_size)
            .finish()
    }
}

impl AlphaVantageClient {
    /// Create a new client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: AV_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            output_size: OutputSize::default(),
        }
    }

    /// Create a new client from the `ALPHA_VANTAGE_API_KEY` environment
    /// variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set or empty, or
    /// if a `.env` file exists but cannot be read.
    pub fn from_env() -> Result<Self> {
        ignore_missing_env_file(dotenvy::dotenv().map(drop))?;

        let api_key = env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(AvError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Use a different query endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the daily time-series depth.
    #[must_use]
    pub const fn with_output_size(mut self, output_size: OutputSize) -> Self {
        self.output_size = output_size;
        self
    }

    /// Build a query URL with the API key.
    fn url(&self, query: &str) -> String {
        format!("{}?{query}&apikey={}", self.base_url, self.api_key)
    }

    /// Make a GET request and return the body text.
    async fn get_text(&self, query: &str) -> Result<String> {
        let url = self.url(query);
        tracing::debug!("Alpha Vantage request: {}", query);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AvError::RateLimited(format!("HTTP 429 for {query}")));
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AvError::Api(format!("HTTP {status}: {text}")));
        }

        Ok(response.text().await?)
    }

    /// Make a GET request and parse the JSON response.
    ///
    /// Error payloads and empty objects are turned into errors before the
    /// body is deserialized.
    async fn get<T: serde::de::DeserializeOwned>(&self, function: &str, symbol: &str) -> Result<T> {
        let query = format!("function={function}&symbol={}", symbol.to_uppercase());
        let text = self.get_text(&query).await?;
        let value: Value = serde_json::from_str(&text)?;
        check_payload(&value, &format!("{function} {symbol}"))?;
        Ok(serde_json::from_value(value)?)
    }

    /// Get the company overview for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns no data.
    pub async fn overview(&self, symbol: &str) -> Result<Overview> {
        self.get("OVERVIEW", symbol).await
    }

    /// Get annual and quarterly income statements for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns no data.
    pub async fn income_statement(&self, symbol: &str) -> Result<StatementSeries> {
        self.get::<StatementSeries>("INCOME_STATEMENT", symbol)
            .await
            .map(StatementSeries::normalized)
    }

    /// Get annual and quarterly balance sheets for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns no data.
    pub async fn balance_sheet(&self, symbol: &str) -> Result<StatementSeries> {
        self.get::<StatementSeries>("BALANCE_SHEET", symbol)
            .await
            .map(StatementSeries::normalized)
    }

    /// Get annual and quarterly reported EPS for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns no data.
    pub async fn earnings(&self, symbol: &str) -> Result<StatementSeries> {
        self.get::<StatementSeries>("EARNINGS", symbol)
            .await
            .map(StatementSeries::normalized)
    }

    /// Get daily bars for a symbol, ascending by date.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the response carries no
    /// time series.
    pub async fn daily_prices(&self, symbol: &str) -> Result<Vec<DailyBar>> {
        let query = format!(
            "function=TIME_SERIES_DAILY&symbol={}&outputsize={}",
            symbol.to_uppercase(),
            self.output_size.as_str()
        );
        let text = self.get_text(&query).await?;
        parse_daily(&text, symbol)
    }

    /// Get the listing-status CSV (every listed symbol with asset type and
    /// status).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns a JSON error
    /// payload instead of CSV.
    pub async fn listing_status(&self) -> Result<String> {
        let text = self.get_text("function=LISTING_STATUS").await?;
        if text.trim_start().starts_with('{') {
            let value: Value = serde_json::from_str(&text)?;
            check_payload(&value, "LISTING_STATUS")?;
        }
        if text.trim().is_empty() {
            return Err(AvError::NoData("LISTING_STATUS".to_string()));
        }
        Ok(text)
    }

    /// Fetch all five sources for a symbol, one request after another.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; nothing is retried.
    pub async fn bundle(&self, symbol: &str) -> Result<RawBundle> {
        let daily_prices = self.daily_prices(symbol).await?;
        let overview = self.overview(symbol).await?;
        let income_statement = self.income_statement(symbol).await?;
        let balance_sheet = self.balance_sheet(symbol).await?;
        let earnings = self.earnings(symbol).await?;

        tracing::debug!(
            "Fetched {}: {} bars, {} income quarters, {} balance quarters, {} earnings quarters",
            symbol,
            daily_prices.len(),
            income_statement.quarterly.len(),
            balance_sheet.quarterly.len(),
            earnings.quarterly.len()
        );

        Ok(RawBundle {
            ticker: symbol.to_uppercase(),
            daily_prices,
            overview,
            income_statement,
            balance_sheet,
            earnings,
        })
    }
}

/// Map Alpha Vantage error payloads to errors.
///
/// The API answers HTTP 200 for most failures and reports them through an
/// `Error Message`, `Note` or `Information` key; an empty object means the
/// symbol has no data.
fn check_payload(value: &Value, context: &str) -> Result<()> {
    let Some(object) = value.as_object() else {
        return Ok(());
    };
    if object.is_empty() {
        return Err(AvError::NoData(context.to_string()));
    }
    if let Some(message) = object.get("Error Message") {
        return Err(AvError::Api(message_text(message)));
    }
    for key in ["Note", "Information"] {
        if let Some(message) = object.get(key) {
            let text = message_text(message);
            let lower = text.to_lowercase();
            if lower.contains("frequency") || lower.contains("rate limit") {
                return Err(AvError::RateLimited(text));
            }
            return Err(AvError::Api(text));
        }
    }
    Ok(())
}

fn message_text(value: &Value) -> String {
    value
        .as_str()
        .map_or_else(|| value.to_string(), str::to_string)
}

fn parse_daily(text: &str, symbol: &str) -> Result<Vec<DailyBar>> {
    let value: Value = serde_json::from_str(text)?;
    let context = format!("TIME_SERIES_DAILY {symbol}");
    check_payload(&value, &context)?;

    let bars = serde_json::from_value::<TimeSeriesDaily>(value)?.into_bars();
    if bars.is_empty() {
        return Err(AvError::NoData(context));
    }
    Ok(bars)
}

/// A missing `.env` file is fine; any other dotenv failure is surfaced.
fn ignore_missing_env_file(loaded: std::result::Result<(), dotenvy::Error>) -> Result<()> {
    match loaded {
        Err(err) if !err.not_found() => Err(AvError::Env(err)),
        _ => Ok(()),
    }
}
