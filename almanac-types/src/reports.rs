use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::frequency::{DateRangeOptions, Frequency};
use crate::modes::{Aggregation, FillMethod};

/// Result of a single point-in-time return calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnRecord {
    /// The as-on date that was requested.
    pub as_on: NaiveDate,
    /// Stored date the end value was taken from.
    pub end_date: NaiveDate,
    /// Stored date the start value was taken from.
    pub start_date: NaiveDate,
    /// The computed return as a fraction (0.05 = 5%).
    pub value: f64,
    /// Whether `value` was annualized with compounding.
    pub annualized: bool,
}

/// Largest peak-to-trough decline over a value series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxDrawdown {
    /// Date of the running peak that preceded the trough.
    pub peak_date: NaiveDate,
    /// Date of the trough.
    pub trough_date: NaiveDate,
    /// Decline as a non-positive fraction of the peak (-0.25 = 25% drawdown).
    pub drawdown: f64,
}

/// How a frequency conversion produced its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionMethod {
    /// Finer dates populated by filling.
    Expand(FillMethod),
    /// Coarser dates populated by selecting one observation.
    Shrink(FillMethod),
    /// Coarser dates populated by aggregating every observation in the period.
    Transform(Aggregation),
    /// Source and target frequency were equal; values copied as-is.
    Identity,
}

/// Parameters recorded alongside a converted series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionParams {
    /// Frequency of the source series.
    pub from: Frequency,
    /// Frequency of the produced series.
    pub to: Frequency,
    /// How values were produced.
    pub method: ConversionMethod,
    /// Options used to generate the target dates.
    pub options: DateRangeOptions,
}
