//! Statement data model consumed by the metric engine.
//!
//! Source statements arrive as string-typed period records in which any
//! field may be absent, `"None"`, or otherwise non-numeric. Every such value
//! deserializes to `None` here, so the engine never has to handle a parse
//! failure.
//!
//! Period fields are split by kind:
//! - [`Flow`] items (revenue, income, EPS) are totals over a period and may be
//!   summed across quarters.
//! - [`Balance`] items (assets, equity, shares) are point-in-time balances
//!   and are only ever read from a single snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A market symbol identifier, such as "AAPL".
pub type Symbol = String;

/// Parse a source decimal string.
///
/// Returns `None` for empty strings, the `"None"` placeholder, dashes, text
/// that is not a number, and non-finite values.
///
/// # Example
///
/// ```
/// use fundscore_traits::parse_number;
///
/// assert_eq!(parse_number("123.5"), Some(123.5));
/// assert_eq!(parse_number("None"), None);
/// assert_eq!(parse_number("n/a"), None);
/// ```
#[must_use]
pub fn parse_number(raw: &str) -> Option<f64> {
    match raw.trim() {
        "" | "None" | "none" | "null" | "-" => None,
        s => s.parse::<f64>().ok().filter(|v| v.is_finite()),
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => parse_number(&s),
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()),
        _ => None,
    })
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok(),
        _ => None,
    })
}

/// Period-total statement items. Summable across quarters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flow {
    /// `totalRevenue`
    Revenue,
    /// `operatingIncome`
    OperatingIncome,
    /// `netIncome`
    NetIncome,
    /// `grossProfit`
    GrossProfit,
    /// `reportedEPS`
    ReportedEps,
}

impl Flow {
    /// Source field name.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Revenue => "totalRevenue",
            Self::OperatingIncome => "operatingIncome",
            Self::NetIncome => "netIncome",
            Self::GrossProfit => "grossProfit",
            Self::ReportedEps => "reportedEPS",
        }
    }
}

/// Point-in-time balance items. Never summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Balance {
    /// `totalAssets`
    TotalAssets,
    /// `totalShareholderEquity`
    ShareholderEquity,
    /// `commonStockSharesOutstanding`
    SharesOutstanding,
}

impl Balance {
    /// Source field name.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::TotalAssets => "totalAssets",
            Self::ShareholderEquity => "totalShareholderEquity",
            Self::SharesOutstanding => "commonStockSharesOutstanding",
        }
    }
}

/// One reporting period of a statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodReport {
    /// Period end date.
    #[serde(default, deserialize_with = "lenient_date")]
    pub fiscal_date_ending: Option<NaiveDate>,
    /// Total revenue.
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_revenue: Option<f64>,
    /// Operating income.
    #[serde(default, deserialize_with = "lenient_number")]
    pub operating_income: Option<f64>,
    /// Net income.
    #[serde(default, deserialize_with = "lenient_number")]
    pub net_income: Option<f64>,
    /// Gross profit.
    #[serde(default, deserialize_with = "lenient_number")]
    pub gross_profit: Option<f64>,
    /// Total assets.
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_assets: Option<f64>,
    /// Total shareholder equity.
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_shareholder_equity: Option<f64>,
    /// Common shares outstanding.
    #[serde(default, deserialize_with = "lenient_number")]
    pub common_stock_shares_outstanding: Option<f64>,
    /// Reported earnings per share.
    #[serde(rename = "reportedEPS", default, deserialize_with = "lenient_number")]
    pub reported_eps: Option<f64>,
}

impl PeriodReport {
    /// Read a flow item.
    #[must_use]
    pub const fn flow(&self, item: Flow) -> Option<f64> {
        match item {
            Flow::Revenue => self.total_revenue,
            Flow::OperatingIncome => self.operating_income,
            Flow::NetIncome => self.net_income,
            Flow::GrossProfit => self.gross_profit,
            Flow::ReportedEps => self.reported_eps,
        }
    }

    /// Read a balance item.
    #[must_use]
    pub const fn balance(&self, item: Balance) -> Option<f64> {
        match item {
            Balance::TotalAssets => self.total_assets,
            Balance::ShareholderEquity => self.total_shareholder_equity,
            Balance::SharesOutstanding => self.common_stock_shares_outstanding,
        }
    }

    /// Set a flow item, returning the updated report.
    #[must_use]
    pub fn with_flow(mut self, item: Flow, value: f64) -> Self {
        let slot = match item {
            Flow::Revenue => &mut self.total_revenue,
            Flow::OperatingIncome => &mut self.operating_income,
            Flow::NetIncome => &mut self.net_income,
            Flow::GrossProfit => &mut self.gross_profit,
            Flow::ReportedEps => &mut self.reported_eps,
        };
        *slot = Some(value);
        self
    }

    /// Set a balance item, returning the updated report.
    #[must_use]
    pub fn with_balance(mut self, item: Balance, value: f64) -> Self {
        let slot = match item {
            Balance::TotalAssets => &mut self.total_assets,
            Balance::ShareholderEquity => &mut self.total_shareholder_equity,
            Balance::SharesOutstanding => &mut self.common_stock_shares_outstanding,
        };
        *slot = Some(value);
        self
    }

    /// Set the period end date, returning the updated report.
    #[must_use]
    pub const fn with_date(mut self, date: NaiveDate) -> Self {
        self.fiscal_date_ending = Some(date);
        self
    }
}

/// Annual and quarterly views of one statement, most recent period first.
///
/// Deserializes from `annualReports`/`quarterlyReports` (statements) as well
/// as `annualEarnings`/`quarterlyEarnings` (earnings).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementSeries {
    /// Annual periods.
    #[serde(rename = "annualReports", alias = "annualEarnings", default)]
    pub annual: Vec<PeriodReport>,
    /// Quarterly periods.
    #[serde(rename = "quarterlyReports", alias = "quarterlyEarnings", default)]
    pub quarterly: Vec<PeriodReport>,
}

impl StatementSeries {
    /// Build a series from quarterly periods only.
    #[must_use]
    pub const fn from_quarterly(quarterly: Vec<PeriodReport>) -> Self {
        Self {
            annual: Vec::new(),
            quarterly,
        }
    }

    /// Re-sort both sequences most-recent-first by fiscal date.
    ///
    /// A sequence is left in source order unless every period carries a date.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        sort_descending(&mut self.annual);
        sort_descending(&mut self.quarterly);
        self
    }
}

fn sort_descending(reports: &mut [PeriodReport]) {
    if reports.iter().all(|r| r.fiscal_date_ending.is_some()) {
        reports.sort_by(|a, b| b.fiscal_date_ending.cmp(&a.fiscal_date_ending));
    }
}

/// One daily price bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// Trading date.
    pub date: NaiveDate,
    /// Open price.
    pub open: f64,
    /// High price.
    pub high: f64,
    /// Low price.
    pub low: f64,
    /// Close price.
    pub close: f64,
    /// Volume.
    pub volume: f64,
}

impl DailyBar {
    /// A bar carrying only a close price.
    #[must_use]
    pub const fn from_close(date: NaiveDate, close: f64) -> Self {
        Self {
            date,
            open: close,
            high: close,
            low: close,
            close,
            volume: 0.0,
        }
    }
}

/// Flat per-company reference record (market cap, P/E, shares outstanding...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Value>", into = "BTreeMap<String, String>")]
pub struct Overview {
    fields: BTreeMap<String, String>,
}

impl Overview {
    /// Create an empty overview.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Insert a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Raw text of a field.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Numeric value of a field, `None` when absent or not a number.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        self.text(key).and_then(parse_number)
    }

    /// Company name, when present.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.text("Name").filter(|n| !n.trim().is_empty())
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the overview has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<BTreeMap<String, Value>> for Overview {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let fields = raw
            .into_iter()
            .map(|(k, v)| {
                let text = match v {
                    Value::String(s) => s,
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                (k, text)
            })
            .collect();
        Self { fields }
    }
}

impl From<Overview> for BTreeMap<String, String> {
    fn from(overview: Overview) -> Self {
        overview.fields
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Overview {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Everything the engine reads for one ticker.
///
/// Owned by the caller for one evaluation; the engine only borrows it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawBundle {
    /// Ticker symbol.
    pub ticker: Symbol,
    /// Daily bars, ascending by date.
    pub daily_prices: Vec<DailyBar>,
    /// Company overview.
    pub overview: Overview,
    /// Income statement.
    pub income_statement: StatementSeries,
    /// Balance sheet.
    pub balance_sheet: StatementSeries,
    /// Earnings (reported EPS per period).
    pub earnings: StatementSeries,
}

impl RawBundle {
    /// Create an empty bundle for a ticker.
    #[must_use]
    pub fn new(ticker: impl Into<Symbol>) -> Self {
        Self {
            ticker: ticker.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number(" -1.5 "), Some(-1.5));
        assert_eq!(parse_number("None"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_period_report_lenient_fields() {
        let json = r#"{
            "fiscalDateEnding": "2024-09-30",
            "reportedCurrency": "USD",
            "totalRevenue": "94930000000",
            "operatingIncome": "None",
            "netIncome": 14736000000,
            "grossProfit": "garbage"
        }"#;
        let report: PeriodReport = serde_json::from_str(json).unwrap();

        assert_eq!(report.fiscal_date_ending, NaiveDate::from_ymd_opt(2024, 9, 30));
        assert_relative_eq!(report.total_revenue.unwrap(), 94_930_000_000.0);
        assert_eq!(report.operating_income, None);
        assert_relative_eq!(report.net_income.unwrap(), 14_736_000_000.0);
        assert_eq!(report.gross_profit, None);
        assert_eq!(report.total_assets, None);
    }

    #[test]
    fn test_statement_series_keys() {
        let income = r#"{"symbol": "IBM", "annualReports": [], "quarterlyReports": [{"totalRevenue": "10"}]}"#;
        let series: StatementSeries = serde_json::from_str(income).unwrap();
        assert!(series.annual.is_empty());
        assert_eq!(series.quarterly.len(), 1);

        let earnings = r#"{
            "annualEarnings": [{"fiscalDateEnding": "2023-12-31", "reportedEPS": "9.62"}],
            "quarterlyEarnings": [{"reportedEPS": "2.2"}, {"reportedEPS": "None"}]
        }"#;
        let series: StatementSeries = serde_json::from_str(earnings).unwrap();
        assert_relative_eq!(series.annual[0].reported_eps.unwrap(), 9.62);
        assert_eq!(series.quarterly.len(), 2);
        assert_eq!(series.quarterly[1].reported_eps, None);
    }

    #[test]
    fn test_statement_series_missing_keys() {
        let series: StatementSeries = serde_json::from_str("{}").unwrap();
        assert!(series.annual.is_empty());
        assert!(series.quarterly.is_empty());
    }

    #[test]
    fn test_normalized_sorts_by_date() {
        let d = |m| NaiveDate::from_ymd_opt(2024, m, 1).unwrap();
        let series = StatementSeries::from_quarterly(vec![
            PeriodReport::default().with_date(d(3)),
            PeriodReport::default().with_date(d(9)),
            PeriodReport::default().with_date(d(6)),
        ])
        .normalized();

        let dates: Vec<_> = series
            .quarterly
            .iter()
            .map(|r| r.fiscal_date_ending.unwrap())
            .collect();
        assert_eq!(dates, vec![d(9), d(6), d(3)]);
    }

    #[test]
    fn test_normalized_keeps_order_without_dates() {
        let series = StatementSeries::from_quarterly(vec![
            PeriodReport::default().with_flow(Flow::Revenue, 1.0),
            PeriodReport::default()
                .with_flow(Flow::Revenue, 2.0)
                .with_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
        ])
        .normalized();
        assert_eq!(series.quarterly[0].total_revenue, Some(1.0));
    }

    #[test]
    fn test_flow_and_balance_accessors() {
        let report = PeriodReport::default()
            .with_flow(Flow::GrossProfit, 5.0)
            .with_balance(Balance::SharesOutstanding, 100.0);
        assert_eq!(report.flow(Flow::GrossProfit), Some(5.0));
        assert_eq!(report.flow(Flow::Revenue), None);
        assert_eq!(report.balance(Balance::SharesOutstanding), Some(100.0));
        assert_eq!(Balance::ShareholderEquity.field_name(), "totalShareholderEquity");
        assert_eq!(Flow::ReportedEps.field_name(), "reportedEPS");
    }

    #[test]
    fn test_overview_from_json() {
        let json = r#"{"Symbol": "IBM", "Name": "International Business Machines", "MarketCapitalization": "150000000000", "PERatio": "None", "Beta": 0.7}"#;
        let overview: Overview = serde_json::from_str(json).unwrap();

        assert_eq!(overview.len(), 5);
        assert_eq!(overview.name(), Some("International Business Machines"));
        assert_relative_eq!(overview.number("MarketCapitalization").unwrap(), 1.5e11);
        assert_eq!(overview.number("PERatio"), None);
        assert_relative_eq!(overview.number("Beta").unwrap(), 0.7);
        assert_eq!(overview.number("Missing"), None);
    }

    #[test]
    fn test_overview_serializes_flat() {
        let overview: Overview = [("Name", "Acme")].into_iter().collect();
        let json = serde_json::to_string(&overview).unwrap();
        assert_eq!(json, r#"{"Name":"Acme"}"#);
    }

    #[test]
    fn test_bundle_new() {
        let bundle = RawBundle::new("MSFT");
        assert_eq!(bundle.ticker, "MSFT");
        assert!(bundle.daily_prices.is_empty());
        assert!(bundle.overview.is_empty());
    }
}
