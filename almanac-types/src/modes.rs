//! Selection, fill, and aggregation modes shared by the engines.

use core::fmt;

use serde::{Deserialize, Serialize};

/// How a requested date is matched against stored dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// The date must be stored.
    #[default]
    Exact,
    /// Closest stored date on or before the target.
    Previous,
    /// Closest stored date on or after the target.
    Next,
    /// Closest stored date in either direction; ties go to `Previous`.
    Nearest,
}

impl SearchMode {
    /// Stable identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Previous => "previous",
            Self::Next => "next",
            Self::Nearest => "nearest",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction in which an existing observation is copied into a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillMethod {
    /// Carry the last known value forward.
    #[default]
    Ffill,
    /// Carry the next known value backward.
    Bfill,
}

impl FillMethod {
    /// The resolution mode that implements this fill direction.
    #[must_use]
    pub const fn search_mode(self) -> SearchMode {
        match self {
            Self::Ffill => SearchMode::Previous,
            Self::Bfill => SearchMode::Next,
        }
    }
}

/// Aggregate applied to all observations inside a coarser period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Aggregation {
    /// Sum of the values in the period.
    Sum,
    /// Arithmetic mean of the values in the period.
    Mean,
    /// Earliest value in the period.
    First,
    /// Latest value in the period.
    Last,
    /// Smallest value in the period.
    Min,
    /// Largest value in the period.
    Max,
}

impl Aggregation {
    /// Apply the aggregate to a non-empty, date-ordered slice of values.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn apply(self, values: &[f64]) -> Option<f64> {
        let (&first, &last) = (values.first()?, values.last()?);
        let out = match self {
            Self::Sum => values.iter().sum(),
            #[allow(clippy::cast_precision_loss)]
            Self::Mean => values.iter().sum::<f64>() / values.len() as f64,
            Self::First => first,
            Self::Last => last,
            Self::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
            Self::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        };
        Some(out)
    }
}

/// Calendar unit of a return look-back period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PeriodUnit {
    /// Calendar days.
    Days,
    /// Weeks of seven days.
    Weeks,
    /// Calendar months.
    Months,
    /// Calendar years.
    Years,
}

/// A calendar look-back such as "3 months" or "1 year".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// Unit of the period.
    pub unit: PeriodUnit,
    /// Number of units; must be positive.
    pub value: u32,
}

impl Period {
    /// Build a period from a unit and a count.
    #[must_use]
    pub const fn new(unit: PeriodUnit, value: u32) -> Self {
        Self { unit, value }
    }

    /// `value` calendar days.
    #[must_use]
    pub const fn days(value: u32) -> Self {
        Self::new(PeriodUnit::Days, value)
    }

    /// `value` weeks.
    #[must_use]
    pub const fn weeks(value: u32) -> Self {
        Self::new(PeriodUnit::Weeks, value)
    }

    /// `value` calendar months.
    #[must_use]
    pub const fn months(value: u32) -> Self {
        Self::new(PeriodUnit::Months, value)
    }

    /// `value` calendar years.
    #[must_use]
    pub const fn years(value: u32) -> Self {
        Self::new(PeriodUnit::Years, value)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.unit {
            PeriodUnit::Days => "day",
            PeriodUnit::Weeks => "week",
            PeriodUnit::Months => "month",
            PeriodUnit::Years => "year",
        };
        let plural = if self.value == 1 { "" } else { "s" };
        write!(f, "{} {unit}{plural}", self.value)
    }
}
