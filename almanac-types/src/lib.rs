//! Almanac-specific error, configuration, and report types shared across the workspace.
#![warn(missing_docs)]

mod config;
mod error;
mod frequency;
pub mod modes;
mod reports;

pub use config::{AlmanacConfig, DEFAULT_DATE_FORMAT, DEFAULT_TRADED_DAYS};
pub use error::AlmanacError;
pub use frequency::{Anchor, DateRangeOptions, Frequency};
pub use modes::{Aggregation, FillMethod, Period, PeriodUnit, SearchMode};
pub use reports::{ConversionMethod, ConversionParams, MaxDrawdown, ReturnRecord};
