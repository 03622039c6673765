//! Configuration consulted read-only by the engines.

use serde::{Deserialize, Serialize};

use crate::modes::SearchMode;

/// Default `chrono` format used to parse date strings.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default number of traded days used to annualize daily statistics.
pub const DEFAULT_TRADED_DAYS: u32 = 365;

/// Configuration for the `Almanac` facade.
///
/// There is no process-wide instance: callers build one, hand it to the facade,
/// and every operation reads it at call time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlmanacConfig {
    /// `chrono` format string applied to date strings at the input boundary.
    pub date_format: String,
    /// Search mode used by point lookups when the caller does not pass one.
    pub default_search: SearchMode,
    /// Tolerance (in days) used by point lookups when the caller does not pass one.
    ///
    /// `None` means unbounded.
    pub default_tolerance_days: Option<u32>,
    /// Infer the frequency of new series from the modal gap between dates.
    ///
    /// When disabled, series built without an explicit frequency are tagged `Unknown`.
    pub infer_frequency: bool,
    /// Periods per year used when annualizing daily statistics.
    pub traded_days: u32,
}

impl Default for AlmanacConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            default_search: SearchMode::Exact,
            default_tolerance_days: None,
            infer_frequency: true,
            traded_days: DEFAULT_TRADED_DAYS,
        }
    }
}
