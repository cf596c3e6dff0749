//! Market metrics read from the price series and the overview.

use fundscore_traits::RawBundle;

/// Overview key for market capitalization.
pub const MARKET_CAP_KEY: &str = "MarketCapitalization";
/// Overview key for the price/earnings ratio.
pub const PE_RATIO_KEY: &str = "PERatio";
/// Overview key for shares outstanding.
pub const SHARES_OUTSTANDING_KEY: &str = "SharesOutstanding";

/// Share-count threshold for [`shares_under_500mm`].
pub const SHARES_THRESHOLD: f64 = 500_000_000.0;

/// Close of the bar with the latest date, regardless of input order.
#[must_use]
pub fn latest_price(bundle: &RawBundle) -> Option<f64> {
    bundle
        .daily_prices
        .iter()
        .max_by_key(|bar| bar.date)
        .map(|bar| bar.close)
        .filter(|close| close.is_finite())
}

/// Market capitalization from the overview.
#[must_use]
pub fn market_cap(bundle: &RawBundle) -> Option<f64> {
    bundle.overview.number(MARKET_CAP_KEY)
}

/// Price/earnings ratio from the overview.
#[must_use]
pub fn pe_ratio(bundle: &RawBundle) -> Option<f64> {
    bundle.overview.number(PE_RATIO_KEY)
}

/// Whether overview shares outstanding is below 500 million.
///
/// False when the field is missing or unparseable.
#[must_use]
pub fn shares_under_500mm(bundle: &RawBundle) -> bool {
    bundle
        .overview
        .number(SHARES_OUTSTANDING_KEY)
        .is_some_and(|shares| shares < SHARES_THRESHOLD)
}
