//! Risk and performance statistics over return and value series.
//!
//! Pairwise statistics require both series to carry the same dates; use
//! [`TimeSeries::sync`] first when they do not. Variances and covariances use
//! the sample (n - 1) denominator. Risk-free rates are annual and are spread
//! evenly over the periods of a year.

use crate::timeseries::store::TimeSeries;
use crate::timeseries::util::{ensure_aligned, ensure_finite_result};
use crate::{AlmanacError, Frequency, MaxDrawdown};

#[allow(clippy::cast_precision_loss)]
fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

#[allow(clippy::cast_precision_loss)]
fn covariance(xs: &[f64], ys: &[f64]) -> f64 {
    let (mx, my) = (mean(xs), mean(ys));
    let sum: f64 = xs.iter().zip(ys).map(|(x, y)| (x - mx) * (y - my)).sum();
    sum / (xs.len() - 1) as f64
}

fn variance(xs: &[f64]) -> f64 {
    covariance(xs, xs)
}

fn require_len(what: &str, n: usize, min: usize) -> Result<(), AlmanacError> {
    if n < min {
        return Err(AlmanacError::insufficient(
            what,
            format!("need at least {min} observations, got {n}"),
        ));
    }
    Ok(())
}

fn require_spread(what: &str, var: f64) -> Result<f64, AlmanacError> {
    if var > 0.0 {
        Ok(var)
    } else {
        Err(AlmanacError::insufficient(what, "zero variance"))
    }
}

fn periods_per_year(frequency: Frequency, traded_days: u32) -> Result<f64, AlmanacError> {
    frequency.periods_per_year(traded_days).ok_or_else(|| {
        AlmanacError::invalid_arg("series frequency is unknown; cannot annualize")
    })
}

fn aligned_values(
    what: &str,
    left: &TimeSeries,
    right: &TimeSeries,
) -> Result<(Vec<f64>, Vec<f64>), AlmanacError> {
    ensure_aligned(left, right)?;
    require_len(what, left.len(), 2)?;
    Ok((left.values(), right.values()))
}

/// Annualized Sharpe ratio of a periodic return series.
///
/// `mean(r - rf/p) / stdev(r) * sqrt(p)` where `p` is the number of periods per
/// year for the series' frequency (daily series use `traded_days`).
///
/// # Errors
/// - `InsufficientData` with fewer than two returns or zero variance.
/// - `InvalidArg` if the frequency is unknown.
pub fn sharpe_ratio(
    returns: &TimeSeries,
    risk_free_rate: f64,
    traded_days: u32,
) -> Result<f64, AlmanacError> {
    const WHAT: &str = "sharpe ratio";
    require_len(WHAT, returns.len(), 2)?;
    let p = periods_per_year(returns.frequency(), traded_days)?;
    let rs = returns.values();
    let sd = require_spread(WHAT, variance(&rs))?.sqrt();
    let excess = mean(&rs) - risk_free_rate / p;
    ensure_finite_result(WHAT, excess / sd * p.sqrt())
}

/// Sensitivity of `asset` returns to `benchmark` returns: `cov(a, b) / var(b)`.
///
/// # Errors
/// - `UnalignedSeries` if the date sets differ.
/// - `InsufficientData` with fewer than two returns or a constant benchmark.
///
/// ```
/// use almanac_core::TimeSeries;
/// use almanac_core::analytics::stats::beta;
/// use chrono::NaiveDate;
///
/// let d = |m| NaiveDate::from_ymd_opt(2021, m, 1).unwrap();
/// let bench = TimeSeries::new(vec![(d(1), 0.01), (d(2), -0.02), (d(3), 0.03)]).unwrap();
/// let asset = bench.mul(2.0).unwrap();
/// assert!((beta(&asset, &bench).unwrap() - 2.0).abs() < 1e-12);
/// ```
pub fn beta(asset: &TimeSeries, benchmark: &TimeSeries) -> Result<f64, AlmanacError> {
    const WHAT: &str = "beta";
    let (a, b) = aligned_values(WHAT, asset, benchmark)?;
    let var_b = require_spread(WHAT, variance(&b))?;
    ensure_finite_result(WHAT, covariance(&a, &b) / var_b)
}

/// Jensen's alpha per period: `mean(a) - [rf + beta * (mean(b) - rf)]`.
///
/// `risk_free_rate` is annual and is converted to the per-period rate of the
/// asset's frequency.
///
/// # Errors
/// Same as [`beta`], plus `InvalidArg` if the frequency is unknown.
pub fn jensens_alpha(
    asset: &TimeSeries,
    benchmark: &TimeSeries,
    risk_free_rate: f64,
    traded_days: u32,
) -> Result<f64, AlmanacError> {
    const WHAT: &str = "jensen's alpha";
    let (a, b) = aligned_values(WHAT, asset, benchmark)?;
    let rf = risk_free_rate / periods_per_year(asset.frequency(), traded_days)?;
    let var_b = require_spread(WHAT, variance(&b))?;
    let beta = covariance(&a, &b) / var_b;
    ensure_finite_result(WHAT, mean(&a) - beta.mul_add(mean(&b) - rf, rf))
}

/// Pearson correlation of two aligned series.
///
/// # Errors
/// - `UnalignedSeries` if the date sets differ.
/// - `InsufficientData` with fewer than two observations or a constant series.
pub fn correlation(left: &TimeSeries, right: &TimeSeries) -> Result<f64, AlmanacError> {
    const WHAT: &str = "correlation";
    let (a, b) = aligned_values(WHAT, left, right)?;
    let var_a = require_spread(WHAT, variance(&a))?;
    let var_b = require_spread(WHAT, variance(&b))?;
    ensure_finite_result(WHAT, covariance(&a, &b) / (var_a * var_b).sqrt())
}

/// Coefficient of determination: the square of [`correlation`].
///
/// # Errors
/// Same as [`correlation`].
pub fn r_squared(left: &TimeSeries, right: &TimeSeries) -> Result<f64, AlmanacError> {
    correlation(left, right).map(|c| c * c)
}

/// Sample standard deviation of a return series, optionally annualized by `sqrt(p)`.
///
/// # Errors
/// - `InsufficientData` with fewer than two returns.
/// - `InvalidArg` when annualizing a series of unknown frequency.
pub fn volatility(
    returns: &TimeSeries,
    annualize: bool,
    traded_days: u32,
) -> Result<f64, AlmanacError> {
    require_len("volatility", returns.len(), 2)?;
    let sd = variance(&returns.values()).sqrt();
    if annualize {
        let p = periods_per_year(returns.frequency(), traded_days)?;
        return ensure_finite_result("volatility", sd * p.sqrt());
    }
    ensure_finite_result("volatility", sd)
}

/// Largest peak-to-trough decline of a value series.
///
/// Scans forward once, tracking the running peak. A series that never falls
/// below its running peak reports a drawdown of zero at its first date.
///
/// # Errors
/// - `InsufficientData` for an empty series.
/// - `InvalidValue` if a running peak is zero.
///
/// ```
/// use almanac_core::TimeSeries;
/// use almanac_core::analytics::stats::max_drawdown;
/// use chrono::NaiveDate;
///
/// let d = |m| NaiveDate::from_ymd_opt(2021, m, 1).unwrap();
/// let ts = TimeSeries::new(
///     [10.0, 12.0, 8.0, 9.0, 14.0].into_iter().enumerate().map(|(i, v)| (d(i as u32 + 1), v)),
/// )
/// .unwrap();
/// let mdd = max_drawdown(&ts).unwrap();
/// assert_eq!((mdd.peak_date, mdd.trough_date), (d(2), d(3)));
/// assert!((mdd.drawdown + 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn max_drawdown(values: &TimeSeries) -> Result<MaxDrawdown, AlmanacError> {
    const WHAT: &str = "max drawdown";
    let Some((first_date, first_value)) = values.first() else {
        return Err(AlmanacError::insufficient(WHAT, "series is empty"));
    };

    let mut peak = (first_date, first_value);
    let mut worst = MaxDrawdown {
        peak_date: first_date,
        trough_date: first_date,
        drawdown: 0.0,
    };
    for (date, value) in values.iter() {
        if value > peak.1 {
            peak = (date, value);
        }
        let dd = ensure_finite_result(WHAT, value / peak.1 - 1.0)?;
        if dd < worst.drawdown {
            worst = MaxDrawdown {
                peak_date: peak.0,
                trough_date: date,
                drawdown: dd,
            };
        }
    }
    Ok(worst)
}
