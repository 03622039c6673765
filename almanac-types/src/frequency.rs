use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AlmanacError;

/// Calendar sampling frequency of a series.
///
/// Known frequencies are totally ordered from finest to coarsest:
/// daily < weekly < monthly < quarterly < half-yearly < annual.
/// `Unknown` is not comparable with anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum Frequency {
    /// One observation per calendar day.
    Daily,
    /// One observation per week.
    Weekly,
    /// One observation per calendar month.
    Monthly,
    /// One observation per calendar quarter.
    Quarterly,
    /// One observation per half year.
    HalfYearly,
    /// One observation per calendar year.
    Annual,
    /// Not supplied and could not be inferred.
    #[default]
    Unknown,
}

impl Frequency {
    /// All known frequencies, finest first.
    pub const KNOWN: [Self; 6] = [
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Quarterly,
        Self::HalfYearly,
        Self::Annual,
    ];

    /// Stable, lowercase identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::HalfYearly => "half-yearly",
            Self::Annual => "annual",
            Self::Unknown => "unknown",
        }
    }

    /// Single-letter tag used in textual renderings.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Daily => 'D',
            Self::Weekly => 'W',
            Self::Monthly => 'M',
            Self::Quarterly => 'Q',
            Self::HalfYearly => 'H',
            Self::Annual => 'Y',
            Self::Unknown => '?',
        }
    }

    /// Position in the finest-to-coarsest ordering; `None` for `Unknown`.
    #[must_use]
    pub const fn rank(self) -> Option<u8> {
        match self {
            Self::Daily => Some(0),
            Self::Weekly => Some(1),
            Self::Monthly => Some(2),
            Self::Quarterly => Some(3),
            Self::HalfYearly => Some(4),
            Self::Annual => Some(5),
            Self::Unknown => None,
        }
    }

    /// Number of calendar months spanned by one period, for month-based frequencies.
    #[must_use]
    pub const fn months(self) -> Option<u32> {
        match self {
            Self::Monthly => Some(1),
            Self::Quarterly => Some(3),
            Self::HalfYearly => Some(6),
            Self::Annual => Some(12),
            Self::Daily | Self::Weekly | Self::Unknown => None,
        }
    }

    /// Number of periods in a year. Daily series use `traded_days`.
    #[must_use]
    pub fn periods_per_year(self, traded_days: u32) -> Option<f64> {
        match self {
            Self::Daily => Some(f64::from(traded_days)),
            Self::Weekly => Some(52.0),
            Self::Monthly => Some(12.0),
            Self::Quarterly => Some(4.0),
            Self::HalfYearly => Some(2.0),
            Self::Annual => Some(1.0),
            Self::Unknown => None,
        }
    }

    /// Default maximum distance accepted when resolving a date in a series of this frequency.
    ///
    /// Roughly half a period, with daily series allowed to bridge long weekends.
    /// `Unknown` imposes no bound.
    #[must_use]
    pub const fn default_tolerance_days(self) -> Option<u32> {
        match self {
            Self::Daily => Some(5),
            Self::Weekly => Some(4),
            Self::Monthly => Some(16),
            Self::Quarterly => Some(46),
            Self::HalfYearly => Some(92),
            Self::Annual => Some(183),
            Self::Unknown => None,
        }
    }

    /// Map a representative gap between observations (in days) to a frequency.
    #[must_use]
    pub const fn from_gap_days(days: i64) -> Self {
        match days {
            1..=4 => Self::Daily,
            5..=10 => Self::Weekly,
            25..=35 => Self::Monthly,
            80..=100 => Self::Quarterly,
            170..=195 => Self::HalfYearly,
            350..=380 => Self::Annual,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        match norm.as_str() {
            "d" | "daily" => Ok(Self::Daily),
            "w" | "weekly" => Ok(Self::Weekly),
            "m" | "monthly" => Ok(Self::Monthly),
            "q" | "quarterly" => Ok(Self::Quarterly),
            "h" | "half-yearly" | "halfyearly" => Ok(Self::HalfYearly),
            "y" | "a" | "annual" | "yearly" => Ok(Self::Annual),
            _ => Err(AlmanacError::invalid_arg(format!("unknown frequency: {s}"))),
        }
    }
}

/// Which day of a period represents it in a canonical date sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    /// First day of the period (Monday, 1st of month, 1st of quarter, ...).
    #[default]
    PeriodStart,
    /// Last day of the period (Sunday, month end, quarter end, ...).
    PeriodEnd,
}

/// Options for generating a canonical date sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRangeOptions {
    /// Which day of each period to emit.
    pub anchor: Anchor,
    /// Drop Saturdays and Sundays from daily sequences. Ignored for coarser frequencies.
    pub skip_weekends: bool,
}

impl DateRangeOptions {
    /// Period-end dates (e.g. month ends).
    #[must_use]
    pub const fn period_end() -> Self {
        Self {
            anchor: Anchor::PeriodEnd,
            skip_weekends: false,
        }
    }

    /// Weekday-only daily dates.
    #[must_use]
    pub const fn weekdays() -> Self {
        Self {
            anchor: Anchor::PeriodStart,
            skip_weekends: true,
        }
    }
}
