//! Almanac answers date questions about sparse financial series.
//!
//! Overview
//! - Stores one finite value per calendar date, ordered and unique.
//! - Resolves a requested date that is not stored to the previous, next, or
//!   nearest stored date, optionally within a tolerance in days.
//! - Fills gaps forward or backward with a bounded number of copies.
//! - Converts between daily, weekly, monthly, quarterly, half-yearly, and annual
//!   frequencies by filling, selecting, or aggregating.
//! - Computes returns over calendar periods, plus Sharpe ratio, beta, Jensen's
//!   alpha, correlation, volatility, and max drawdown.
//!
//! Key behaviors and trade-offs
//! - Returns are anchored on dates, not row offsets: "3 months before April 1st"
//!   is January 1st whether or not February has observations.
//! - Expansion only copies existing observations; nothing is interpolated.
//! - Pairwise arithmetic and statistics require identical date sets. Align
//!   first with `sync`; nothing is positionally matched.
//! - Configuration is an explicit value held by [`Almanac`]; there is no global state.
//!
//! Examples
//! Building an almanac and a series:
//! ```
//! use almanac::{Almanac, FillMethod, Frequency, Aggregation};
//!
//! let almanac = Almanac::builder().build().unwrap();
//! let ts = almanac
//!     .series(vec![
//!         ("2021-01-01", 10.0),
//!         ("2021-02-01", 12.0),
//!         ("2021-03-01", 14.0),
//!         ("2021-04-01", 16.0),
//!         ("2021-05-01", 18.0),
//!         ("2021-06-01", 20.0),
//!     ])
//!     .unwrap();
//!
//! let quarterly = ts.transform(Frequency::Quarterly, Aggregation::Sum).unwrap();
//! assert_eq!(quarterly.values(), vec![36.0, 54.0]);
//!
//! let daily = ts.expand(Frequency::Daily, FillMethod::Ffill).unwrap();
//! let back = daily.shrink(Frequency::Monthly, FillMethod::Ffill).unwrap();
//! assert!(back.equals(&ts));
//! ```
//!
//! Risk statistics on aligned return series:
//! ```
//! use almanac::{Almanac, FillMethod};
//!
//! let almanac = Almanac::builder().traded_days(252).build().unwrap();
//! let asset = almanac.series(vec![("2021-01-01", 0.02), ("2021-02-01", -0.01), ("2021-03-01", 0.03)]).unwrap();
//! let bench = almanac.series(vec![("2021-01-01", 0.01), ("2021-02-01", -0.02), ("2021-03-01", 0.02)]).unwrap();
//! let aligned = asset.sync(&bench, FillMethod::Ffill);
//! assert!(almanac.beta(&asset, &aligned).is_ok());
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod ops;

pub use crate::core::{Almanac, AlmanacBuilder};

pub use almanac_types::{AlmanacConfig, DEFAULT_DATE_FORMAT, DEFAULT_TRADED_DAYS};

// Re-export core types for convenience
pub use almanac_core::{
    Aggregation, AlmanacError, Anchor, ConversionMethod, ConversionParams, DateRangeOptions,
    FillMethod, Frequency, FrequencyConversion, IntoDate, IntoValue, MaxDrawdown, Operand,
    Period, PeriodUnit, ReturnRecord, ReturnSpec, SearchMode, TimeSeries,
};

/// Lower-level building blocks re-exported from `almanac-core`.
pub mod engine {
    pub use almanac_core::analytics::{returns, stats};
    pub use almanac_core::timeseries::{calendar, fill, resolve};
    pub use almanac_core::{estimate_step_days, infer_frequency};
}
