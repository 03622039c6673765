//! almanac-core
//!
//! The date-indexed series and the engines built on it.
//!
//! - `timeseries`: the `TimeSeries` store, date resolution, filling, frequency
//!   conversion, synchronization, and elementwise arithmetic.
//! - `analytics`: period and rolling returns plus risk statistics.
//! - `parse`: the single boundary that turns date-like and number-like input
//!   into `NaiveDate` and finite `f64`.
//!
//! Every operation is synchronous and pure over its inputs; the only in-place
//! mutation is [`TimeSeries::set`]. Enable the `tracing` feature to get spans
//! on conversion, sync, and return entry points and debug events where input
//! observations are dropped.
#![warn(missing_docs)]

/// Return and risk analytics.
pub mod analytics;
/// Parsing of caller-supplied dates and values.
pub mod parse;
/// The series store and its engines.
pub mod timeseries;

pub use almanac_types::*;
pub use analytics::returns::{
    ReturnSpec, average_rolling_return, calculate_returns, rolling_returns,
};
pub use analytics::stats::{
    beta, correlation, jensens_alpha, max_drawdown, r_squared, sharpe_ratio, volatility,
};
pub use parse::{IntoDate, IntoValue, parse_date, parse_value};
pub use timeseries::arith::Operand;
pub use timeseries::calendar::{date_range, shift_back};
pub use timeseries::convert::FrequencyConversion;
pub use timeseries::fill::{backward_fill, fill, forward_fill};
pub use timeseries::infer::{estimate_step_days, infer_frequency};
pub use timeseries::resolve::resolve;
pub use timeseries::store::TimeSeries;
