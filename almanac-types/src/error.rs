use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::frequency::Frequency;

/// Unified error type for the almanac workspace.
///
/// Covers parsing failures at the input boundary, construction-time validation,
/// date resolution failures, alignment and frequency misuse, and statistics that
/// lack enough resolved observations.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AlmanacError {
    /// A date string could not be parsed with the expected format.
    #[error("could not parse date {input:?} with format {format:?}")]
    DateParse {
        /// The offending input string.
        input: String,
        /// The `chrono` format string that was expected.
        format: String,
    },

    /// A value was not a finite number (or could not be parsed as one).
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// The same date appeared more than once in construction input.
    #[error("duplicate date in input: {date}")]
    DuplicateDate {
        /// The repeated date.
        date: NaiveDate,
    },

    /// Input passed to a strict constructor was not in ascending date order.
    #[error("input is not in ascending date order at {date}")]
    UnsortedInput {
        /// First date found out of order.
        date: NaiveDate,
    },

    /// An exact lookup found no entry for the date.
    #[error("no entry for date {date}")]
    KeyNotFound {
        /// The requested date.
        date: NaiveDate,
    },

    /// No stored date exists on or before the target.
    #[error("no data on or before {date}")]
    NoDataBefore {
        /// The requested date.
        date: NaiveDate,
    },

    /// No stored date exists on or after the target.
    #[error("no data on or after {date}")]
    NoDataAfter {
        /// The requested date.
        date: NaiveDate,
    },

    /// A candidate date exists but lies farther from the target than allowed.
    #[error("closest date {candidate} is {distance_days} days from {target} (tolerance {tolerance_days})")]
    ToleranceExceeded {
        /// The requested date.
        target: NaiveDate,
        /// The closest stored date in the requested direction.
        candidate: NaiveDate,
        /// Absolute distance between `target` and `candidate`.
        distance_days: i64,
        /// Maximum distance that was allowed.
        tolerance_days: u32,
    },

    /// Elementwise arithmetic or statistics on series with different date sets.
    #[error("series are not aligned: {left_len} vs {right_len} dates; sync them first")]
    UnalignedSeries {
        /// Number of dates in the left operand.
        left_len: usize,
        /// Number of dates in the right operand.
        right_len: usize,
    },

    /// `expand`/`shrink`/`transform` requested in the wrong direction.
    #[error("cannot {operation} from {from} to {to}")]
    InvalidFrequencyDirection {
        /// Operation name (e.g. "expand").
        operation: String,
        /// Frequency of the source series.
        from: Frequency,
        /// Requested target frequency.
        to: Frequency,
    },

    /// Too few resolved observations for a return or statistic.
    #[error("insufficient data for {what}: {detail}")]
    InsufficientData {
        /// What was being computed (e.g. "sharpe ratio").
        what: String,
        /// Why it could not be computed.
        detail: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl AlmanacError {
    /// Helper: build a `KeyNotFound` error for a date.
    #[must_use]
    pub const fn not_found(date: NaiveDate) -> Self {
        Self::KeyNotFound { date }
    }

    /// Helper: build an `InsufficientData` error.
    pub fn insufficient(what: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InsufficientData {
            what: what.into(),
            detail: detail.into(),
        }
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build an `InvalidFrequencyDirection` error.
    pub fn wrong_direction(operation: impl Into<String>, from: Frequency, to: Frequency) -> Self {
        Self::InvalidFrequencyDirection {
            operation: operation.into(),
            from,
            to,
        }
    }

    /// Returns true if this error came from resolving a date against a series.
    ///
    /// Callers that scan many dates (rolling returns, shrink) use this to skip
    /// unresolvable points while still surfacing genuine usage errors.
    #[must_use]
    pub const fn is_resolution_failure(&self) -> bool {
        matches!(
            self,
            Self::KeyNotFound { .. }
                | Self::NoDataBefore { .. }
                | Self::NoDataAfter { .. }
                | Self::ToleranceExceeded { .. }
                | Self::InsufficientData { .. }
        )
    }
}
