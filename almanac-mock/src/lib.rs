//! Deterministic fixture data for almanac tests.
//!
//! Fixtures are plain `(date, value)` pairs so any crate can build its own
//! series from them without depending on the store.

use chrono::NaiveDate;

mod fixtures;
mod walk;

pub use walk::PriceWalk;

/// Names accepted by [`series`].
pub const SYMBOLS: &[&str] = fixtures::SYMBOLS;

/// Static fixture pairs by symbol, ascending by date.
///
/// - `MONTHLY`: month starts Jan-Jun 2021, values 10 to 20 in steps of 2.
/// - `PRICES`: month starts Jan-Apr 2021, values 10, 12, 14, 16.
/// - `DRAWDOWN`: month starts, values 10, 12, 8, 9, 14.
/// - `ASSET` / `BENCH`: twelve monthly returns for 2021 on the same dates.
/// - `SPARSE`: daily closes in January 2021 with gaps.
/// - `WEEKDAYS`: every weekday of January 2021.
/// - `FLAT`: three identical monthly returns.
#[must_use]
pub fn series(symbol: &str) -> Option<Vec<(NaiveDate, f64)>> {
    fixtures::by_symbol(symbol)
}

/// Like [`series`], but with the pairs in reverse date order.
#[must_use]
pub fn series_reversed(symbol: &str) -> Option<Vec<(NaiveDate, f64)>> {
    series(symbol).map(|mut v| {
        v.reverse();
        v
    })
}
