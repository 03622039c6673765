//! Calendar-period returns resolved by date rather than by row offset.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::timeseries::calendar::{date_range, shift_back};
use crate::timeseries::resolve::resolve;
use crate::timeseries::store::TimeSeries;
use crate::timeseries::util::ensure_finite_result;
use crate::{AlmanacError, DateRangeOptions, Frequency, Period, ReturnRecord, SearchMode};

/// Days per year used to compound a return over an arbitrary day span.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Parameters of a period return.
///
/// Both ends are resolved with their own search mode. Without an explicit
/// tolerance, candidates are limited to the default tolerance of the series'
/// frequency (unbounded for `Frequency::Unknown`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnSpec {
    /// Look-back from the as-on date to the prior date.
    pub period: Period,
    /// Compound the return to a yearly rate.
    pub annualize: bool,
    /// How the as-on date is resolved.
    pub as_on_mode: SearchMode,
    /// How the prior date is resolved.
    pub prior_mode: SearchMode,
    /// Maximum distance in days between a requested and a resolved date.
    pub tolerance_days: Option<u32>,
}

impl ReturnSpec {
    /// A non-annualized return over `period`, resolving both ends to the nearest date.
    #[must_use]
    pub const fn new(period: Period) -> Self {
        Self {
            period,
            annualize: false,
            as_on_mode: SearchMode::Nearest,
            prior_mode: SearchMode::Nearest,
            tolerance_days: None,
        }
    }

    /// Compound the return to a yearly rate.
    #[must_use]
    pub const fn annualized(mut self, yes: bool) -> Self {
        self.annualize = yes;
        self
    }

    /// Override how the as-on date is resolved.
    #[must_use]
    pub const fn as_on_mode(mut self, mode: SearchMode) -> Self {
        self.as_on_mode = mode;
        self
    }

    /// Override how the prior date is resolved.
    #[must_use]
    pub const fn prior_mode(mut self, mode: SearchMode) -> Self {
        self.prior_mode = mode;
        self
    }

    /// Override the resolution tolerance.
    #[must_use]
    pub const fn tolerance_days(mut self, days: u32) -> Self {
        self.tolerance_days = Some(days);
        self
    }

    fn tolerance_for(&self, frequency: Frequency) -> Option<u32> {
        self.tolerance_days
            .or_else(|| frequency.default_tolerance_days())
    }
}

fn resolve_end(
    series: &TimeSeries,
    target: NaiveDate,
    mode: SearchMode,
    tolerance: Option<u32>,
    which: &str,
) -> Result<(NaiveDate, f64), AlmanacError> {
    resolve(series, target, mode, tolerance).map_err(|e| {
        if e.is_resolution_failure() {
            AlmanacError::insufficient("return", format!("{which} date: {e}"))
        } else {
            e
        }
    })
}

/// Compound `r` earned over `days` to a yearly rate.
///
/// # Errors
/// Returns `InsufficientData` when `days` is not positive.
pub fn annualize(r: f64, days: i64) -> Result<f64, AlmanacError> {
    if days <= 0 {
        return Err(AlmanacError::insufficient(
            "annualized return",
            "start and end resolve to the same date",
        ));
    }
    #[allow(clippy::cast_precision_loss)]
    let years = days as f64 / DAYS_PER_YEAR;
    ensure_finite_result("annualized return", (1.0 + r).powf(1.0 / years) - 1.0)
}

/// Return of `series` over `spec.period` ending at `as_on`.
///
/// The as-on date is resolved first; the prior date is the resolved end date
/// minus the period in calendar arithmetic.
///
/// # Errors
/// - `InsufficientData` if either date cannot be resolved or an annualized span is zero days.
/// - `InvalidValue` if the start value is zero.
/// - `InvalidArg` if the prior date is out of the representable range.
///
/// ```
/// use almanac_core::{Period, TimeSeries};
/// use almanac_core::analytics::returns::{calculate_returns, ReturnSpec};
/// use chrono::NaiveDate;
///
/// let d = |m| NaiveDate::from_ymd_opt(2021, m, 1).unwrap();
/// let ts = TimeSeries::new(vec![(d(1), 10.0), (d(2), 12.0), (d(3), 14.0), (d(4), 16.0)]).unwrap();
/// let r = calculate_returns(&ts, d(4), &ReturnSpec::new(Period::months(3))).unwrap();
/// assert_eq!(r.start_date, d(1));
/// assert!((r.value - 0.6).abs() < 1e-12);
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "almanac::returns::calculate",
        skip_all,
        fields(as_on = %as_on, period = %spec.period, annualize = spec.annualize),
    )
)]
pub fn calculate_returns(
    series: &TimeSeries,
    as_on: NaiveDate,
    spec: &ReturnSpec,
) -> Result<ReturnRecord, AlmanacError> {
    let tolerance = spec.tolerance_for(series.frequency());
    let (end_date, end_value) = resolve_end(series, as_on, spec.as_on_mode, tolerance, "as-on")?;
    let prior = shift_back(end_date, spec.period)?;
    let (start_date, start_value) =
        resolve_end(series, prior, spec.prior_mode, tolerance, "prior")?;

    let mut value = ensure_finite_result("return", end_value / start_value - 1.0)?;
    if spec.annualize {
        value = annualize(value, (end_date - start_date).num_days())?;
    }
    Ok(ReturnRecord {
        as_on,
        end_date,
        start_date,
        value,
        annualized: spec.annualize,
    })
}

/// Returns at every canonical `frequency` date in `[from, to]`, keyed by resolved end date.
///
/// Points that cannot be resolved, or whose start value is zero, are skipped.
/// When two as-on dates resolve to the same end date, the earlier one is kept.
///
/// # Errors
/// - `InvalidArg` if `frequency` is unknown or a prior date is out of range.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "almanac::returns::rolling",
        skip_all,
        fields(from = %from, to = %to, frequency = %frequency, period = %spec.period),
    )
)]
pub fn rolling_returns(
    series: &TimeSeries,
    from: NaiveDate,
    to: NaiveDate,
    frequency: Frequency,
    spec: &ReturnSpec,
) -> Result<TimeSeries, AlmanacError> {
    let mut out = BTreeMap::new();
    for as_on in date_range(from, to, frequency, DateRangeOptions::default())? {
        match calculate_returns(series, as_on, spec) {
            Ok(rec) => {
                out.entry(rec.end_date).or_insert(rec.value);
            }
            Err(e)
                if matches!(
                    e,
                    AlmanacError::InsufficientData { .. } | AlmanacError::InvalidValue(_)
                ) =>
            {
                #[cfg(feature = "tracing")]
                tracing::debug!(as_on = %as_on, error = %e, "rolling return skipped");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(TimeSeries::from_map(out, frequency))
}

/// Arithmetic mean of [`rolling_returns`] over `[from, to]`.
///
/// # Errors
/// - `InsufficientData` if no rolling return could be computed.
/// - Any error from [`rolling_returns`].
pub fn average_rolling_return(
    series: &TimeSeries,
    from: NaiveDate,
    to: NaiveDate,
    frequency: Frequency,
    spec: &ReturnSpec,
) -> Result<f64, AlmanacError> {
    rolling_returns(series, from, to, frequency, spec)?
        .mean()
        .ok_or_else(|| {
            AlmanacError::insufficient(
                "average rolling return",
                format!("no return could be resolved between {from} and {to}"),
            )
        })
}

impl TimeSeries {
    /// Method form of [`calculate_returns`].
    ///
    /// # Errors
    /// See [`calculate_returns`].
    pub fn calculate_returns(
        &self,
        as_on: NaiveDate,
        spec: &ReturnSpec,
    ) -> Result<ReturnRecord, AlmanacError> {
        calculate_returns(self, as_on, spec)
    }

    /// Simple returns between consecutive observations, keyed by the later date.
    ///
    /// # Errors
    /// Returns `InvalidValue` if an observation is zero.
    pub fn pct_change(&self) -> Result<Self, AlmanacError> {
        let values: Vec<(NaiveDate, f64)> = self.to_pairs();
        let mut out = BTreeMap::new();
        for w in values.windows(2) {
            let ((_, prev), (date, cur)) = (w[0], w[1]);
            out.insert(date, ensure_finite_result("pct_change", cur / prev - 1.0)?);
        }
        Ok(Self::from_map(out, self.frequency()))
    }
}
