//! Data types for Alpha Vantage API responses.
//!
//! Statement, earnings and overview payloads deserialize straight into the
//! shared [`fundscore_traits`] model; only the daily time series needs a
//! wire type of its own.

use chrono::NaiveDate;
use fundscore_traits::{DailyBar, parse_number};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// History depth of the daily time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputSize {
    /// Latest 100 data points.
    #[default]
    Compact,
    /// Full history.
    Full,
}

impl OutputSize {
    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Full => "full",
        }
    }
}

/// One day of the `TIME_SERIES_DAILY` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyEntry {
    /// Open price.
    #[serde(rename = "1. open", default)]
    pub open: String,
    /// High price.
    #[serde(rename = "2. high", default)]
    pub high: String,
    /// Low price.
    #[serde(rename = "3. low", default)]
    pub low: String,
    /// Close price.
    #[serde(rename = "4. close", default)]
    pub close: String,
    /// Volume.
    #[serde(rename = "5. volume", default)]
    pub volume: String,
}

impl DailyEntry {
    /// Convert to a bar. Returns `None` when the close does not parse.
    #[must_use]
    pub fn to_bar(&self, date: NaiveDate) -> Option<DailyBar> {
        let close = parse_number(&self.close)?;
        let or_close = |raw: &str| parse_number(raw).unwrap_or(close);
        Some(DailyBar {
            date,
            open: or_close(&self.open),
            high: or_close(&self.high),
            low: or_close(&self.low),
            close,
            volume: parse_number(&self.volume).unwrap_or(0.0),
        })
    }
}

/// `TIME_SERIES_DAILY` response body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeSeriesDaily {
    /// Daily entries keyed by `YYYY-MM-DD`.
    #[serde(rename = "Time Series (Daily)", default)]
    pub series: BTreeMap<String, DailyEntry>,
}

impl TimeSeriesDaily {
    /// Parsed bars sorted ascending by date.
    ///
    /// Entries with an unparseable date or close are dropped.
    #[must_use]
    pub fn into_bars(self) -> Vec<DailyBar> {
        let mut bars: Vec<DailyBar> = self
            .series
            .iter()
            .filter_map(|(date, entry)| {
                let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
                entry.to_bar(date)
            })
            .collect();
        bars.sort_by_key(|bar| bar.date);
        bars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_output_size() {
        assert_eq!(OutputSize::default().as_str(), "compact");
        assert_eq!(OutputSize::Full.as_str(), "full");
    }

    #[test]
    fn test_time_series_into_bars() {
        let json = r#"{
            "Meta Data": {"2. Symbol": "IBM"},
            "Time Series (Daily)": {
                "2024-05-03": {"1. open": "166.1", "2. high": "167.0", "3. low": "165.2", "4. close": "166.5", "5. volume": "3500000"},
                "2024-05-01": {"1. open": "164.0", "2. high": "165.0", "3. low": "163.0", "4. close": "164.4", "5. volume": "2900000"},
                "bad-date": {"4. close": "1.0"},
                "2024-05-02": {"4. close": "None"}
            }
        }"#;
        let series: TimeSeriesDaily = serde_json::from_str(json).unwrap();
        let bars = series.into_bars();

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_relative_eq!(bars[1].close, 166.5);
        assert_relative_eq!(bars[1].volume, 3_500_000.0);
    }

    #[test]
    fn test_entry_defaults_to_close() {
        let entry = DailyEntry {
            open: String::new(),
            high: "None".to_string(),
            low: "9.5".to_string(),
            close: "10".to_string(),
            volume: String::new(),
        };
        let bar = entry
            .to_bar(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
            .unwrap();
        assert_relative_eq!(bar.open, 10.0);
        assert_relative_eq!(bar.high, 10.0);
        assert_relative_eq!(bar.low, 9.5);
        assert_relative_eq!(bar.volume, 0.0);
    }
}
