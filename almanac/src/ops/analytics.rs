use almanac_core::{
    AlmanacError, Frequency, IntoDate, MaxDrawdown, ReturnRecord, ReturnSpec, TimeSeries,
    analytics,
};

use crate::Almanac;

impl Almanac {
    /// Return of `ts` over `spec.period` ending at `as_on`.
    ///
    /// # Errors
    /// - `DateParse` if `as_on` is a string that does not match the configured format.
    /// - Any error from [`almanac_core::calculate_returns`].
    ///
    /// ```
    /// use almanac::{Almanac, Period, ReturnSpec};
    ///
    /// let almanac = Almanac::builder().build().unwrap();
    /// let ts = almanac
    ///     .series(vec![("2021-01-01", 10.0), ("2021-02-01", 12.0), ("2021-03-01", 14.0), ("2021-04-01", 16.0)])
    ///     .unwrap();
    /// let r = almanac.returns(&ts, "2021-04-01", &ReturnSpec::new(Period::months(3))).unwrap();
    /// assert!((r.value - 0.6).abs() < 1e-12);
    /// ```
    pub fn returns(
        &self,
        ts: &TimeSeries,
        as_on: impl IntoDate,
        spec: &ReturnSpec,
    ) -> Result<ReturnRecord, AlmanacError> {
        let as_on = self.parse_date(as_on)?;
        analytics::returns::calculate_returns(ts, as_on, spec)
    }

    /// Returns at every canonical `frequency` date between `from` and `to`.
    ///
    /// # Errors
    /// - `DateParse` for unparseable bounds.
    /// - Any error from [`almanac_core::rolling_returns`].
    pub fn rolling_returns(
        &self,
        ts: &TimeSeries,
        from: impl IntoDate,
        to: impl IntoDate,
        frequency: Frequency,
        spec: &ReturnSpec,
    ) -> Result<TimeSeries, AlmanacError> {
        let (from, to) = (self.parse_date(from)?, self.parse_date(to)?);
        analytics::returns::rolling_returns(ts, from, to, frequency, spec)
    }

    /// Mean of [`Almanac::rolling_returns`].
    ///
    /// # Errors
    /// - `DateParse` for unparseable bounds.
    /// - `InsufficientData` if no rolling return resolves.
    pub fn average_rolling_return(
        &self,
        ts: &TimeSeries,
        from: impl IntoDate,
        to: impl IntoDate,
        frequency: Frequency,
        spec: &ReturnSpec,
    ) -> Result<f64, AlmanacError> {
        let (from, to) = (self.parse_date(from)?, self.parse_date(to)?);
        analytics::returns::average_rolling_return(ts, from, to, frequency, spec)
    }

    /// Sample volatility of a return series, annualized with the configured traded days.
    ///
    /// # Errors
    /// See [`almanac_core::volatility`].
    pub fn volatility(&self, returns: &TimeSeries, annualize: bool) -> Result<f64, AlmanacError> {
        analytics::stats::volatility(returns, annualize, self.cfg.traded_days)
    }

    /// Annualized Sharpe ratio using the configured traded days for daily series.
    ///
    /// # Errors
    /// See [`almanac_core::sharpe_ratio`].
    pub fn sharpe_ratio(
        &self,
        returns: &TimeSeries,
        risk_free_rate: f64,
    ) -> Result<f64, AlmanacError> {
        analytics::stats::sharpe_ratio(returns, risk_free_rate, self.cfg.traded_days)
    }

    /// Jensen's alpha using the configured traded days for daily series.
    ///
    /// # Errors
    /// See [`almanac_core::jensens_alpha`].
    pub fn jensens_alpha(
        &self,
        asset: &TimeSeries,
        benchmark: &TimeSeries,
        risk_free_rate: f64,
    ) -> Result<f64, AlmanacError> {
        analytics::stats::jensens_alpha(asset, benchmark, risk_free_rate, self.cfg.traded_days)
    }

    /// Beta of `asset` against `benchmark`.
    ///
    /// # Errors
    /// See [`almanac_core::beta`].
    pub fn beta(&self, asset: &TimeSeries, benchmark: &TimeSeries) -> Result<f64, AlmanacError> {
        analytics::stats::beta(asset, benchmark)
    }

    /// Pearson correlation of two aligned series.
    ///
    /// # Errors
    /// See [`almanac_core::correlation`].
    pub fn correlation(
        &self,
        left: &TimeSeries,
        right: &TimeSeries,
    ) -> Result<f64, AlmanacError> {
        analytics::stats::correlation(left, right)
    }

    /// Share of `asset`'s variance explained by `benchmark`.
    ///
    /// # Errors
    /// See [`almanac_core::r_squared`].
    pub fn r_squared(
        &self,
        asset: &TimeSeries,
        benchmark: &TimeSeries,
    ) -> Result<f64, AlmanacError> {
        analytics::stats::r_squared(asset, benchmark)
    }

    /// Largest peak-to-trough decline of a value series.
    ///
    /// # Errors
    /// See [`almanac_core::max_drawdown`].
    pub fn max_drawdown(&self, values: &TimeSeries) -> Result<MaxDrawdown, AlmanacError> {
        analytics::stats::max_drawdown(values)
    }
}
