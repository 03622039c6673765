//! Frequency conversion: expand to finer dates, shrink or transform to coarser ones.

use core::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::timeseries::calendar::{anchor_date, date_range, is_weekend};
use crate::timeseries::fill::fill;
use crate::timeseries::resolve::resolve;
use crate::timeseries::store::TimeSeries;
use crate::timeseries::util::ensure_finite_result;
use crate::{
    Aggregation, AlmanacError, ConversionMethod, ConversionParams, DateRangeOptions, FillMethod,
    Frequency,
};

/// A converted series together with the parameters that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyConversion {
    /// The new series, tagged with the target frequency.
    pub series: TimeSeries,
    /// How the series was produced.
    pub params: ConversionParams,
}

/// Compare two frequencies by granularity: `Less` means `to` is finer than `from`.
fn granularity(from: Frequency, to: Frequency) -> Result<Ordering, AlmanacError> {
    match (from.rank(), to.rank()) {
        (Some(f), Some(t)) => Ok(t.cmp(&f)),
        (None, _) => Err(AlmanacError::invalid_arg(
            "series frequency is unknown; retag it before converting",
        )),
        (_, None) => Err(AlmanacError::invalid_arg(
            "cannot convert to an unknown frequency",
        )),
    }
}

impl TimeSeries {
    fn identity(&self, options: DateRangeOptions) -> FrequencyConversion {
        FrequencyConversion {
            series: self.clone(),
            params: ConversionParams {
                from: self.frequency(),
                to: self.frequency(),
                method: ConversionMethod::Identity,
                options,
            },
        }
    }

    fn canonical_span(
        &self,
        to: Frequency,
        options: DateRangeOptions,
    ) -> Result<Vec<NaiveDate>, AlmanacError> {
        match (self.start_date(), self.end_date()) {
            (Some(start), Some(end)) => date_range(start, end, to, options),
            _ => Ok(Vec::new()),
        }
    }

    /// Expand to a finer frequency by filling the canonical dates of `to`
    /// that fall within this series' range.
    ///
    /// The series' own dates are kept alongside the canonical ones, so shrinking
    /// back with the same method recovers the original observations.
    ///
    /// # Errors
    /// - `InvalidFrequencyDirection` if `to` is coarser than the series.
    /// - `InvalidArg` if either frequency is unknown.
    ///
    /// ```
    /// use almanac_core::{FillMethod, Frequency, TimeSeries};
    /// use chrono::NaiveDate;
    ///
    /// let d = |m, day| NaiveDate::from_ymd_opt(2021, m, day).unwrap();
    /// let ts = TimeSeries::with_frequency(vec![(d(1, 1), 10.0), (d(2, 1), 12.0)], Frequency::Monthly).unwrap();
    /// let daily = ts.expand(Frequency::Daily, FillMethod::Ffill).unwrap();
    /// assert_eq!(daily.len(), 32);
    /// assert_eq!(daily.get(d(1, 31)).unwrap(), 10.0);
    /// ```
    pub fn expand(&self, to: Frequency, method: FillMethod) -> Result<Self, AlmanacError> {
        self.expand_with(to, method, DateRangeOptions::default())
            .map(|c| c.series)
    }

    /// [`TimeSeries::expand`] with explicit date-range options, returning the conversion parameters.
    ///
    /// # Errors
    /// Same as [`TimeSeries::expand`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "almanac::convert::expand",
            skip(self, options),
            fields(from = %self.frequency(), rows = self.len()),
        )
    )]
    pub fn expand_with(
        &self,
        to: Frequency,
        method: FillMethod,
        options: DateRangeOptions,
    ) -> Result<FrequencyConversion, AlmanacError> {
        match granularity(self.frequency(), to)? {
            Ordering::Equal => return Ok(self.identity(options)),
            Ordering::Greater => {
                return Err(AlmanacError::wrong_direction("expand", self.frequency(), to));
            }
            Ordering::Less => {}
        }
        let skip_source_weekends = options.skip_weekends && to == Frequency::Daily;
        let own = self
            .dates()
            .into_iter()
            .filter(|d| !(skip_source_weekends && is_weekend(*d)));
        let targets = self.canonical_span(to, options)?.into_iter().chain(own);
        let series = fill(self, targets, method, None).retag(to);
        Ok(FrequencyConversion {
            series,
            params: ConversionParams {
                from: self.frequency(),
                to,
                method: ConversionMethod::Expand(method),
                options,
            },
        })
    }

    /// Shrink to a coarser frequency by selecting one observation per canonical date.
    ///
    /// `Ffill` takes the latest observation on or before each date, `Bfill` the
    /// earliest on or after. Dates with no candidate are omitted. Nothing is
    /// aggregated; see [`TimeSeries::transform`] for that.
    ///
    /// # Errors
    /// - `InvalidFrequencyDirection` if `to` is finer than the series.
    /// - `InvalidArg` if either frequency is unknown.
    pub fn shrink(&self, to: Frequency, method: FillMethod) -> Result<Self, AlmanacError> {
        self.shrink_with(to, method, DateRangeOptions::default())
            .map(|c| c.series)
    }

    /// [`TimeSeries::shrink`] with explicit date-range options, returning the conversion parameters.
    ///
    /// # Errors
    /// Same as [`TimeSeries::shrink`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "almanac::convert::shrink",
            skip(self, options),
            fields(from = %self.frequency(), rows = self.len()),
        )
    )]
    pub fn shrink_with(
        &self,
        to: Frequency,
        method: FillMethod,
        options: DateRangeOptions,
    ) -> Result<FrequencyConversion, AlmanacError> {
        match granularity(self.frequency(), to)? {
            Ordering::Equal => return Ok(self.identity(options)),
            Ordering::Less => {
                return Err(AlmanacError::wrong_direction("shrink", self.frequency(), to));
            }
            Ordering::Greater => {}
        }
        let mut out = BTreeMap::new();
        for target in self.canonical_span(to, options)? {
            match resolve(self, target, method.search_mode(), None) {
                Ok((_, value)) => {
                    out.insert(target, value);
                }
                Err(e) if e.is_resolution_failure() => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(date = %target, error = %e, "shrink: no observation for canonical date");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(FrequencyConversion {
            series: Self::from_map(out, to),
            params: ConversionParams {
                from: self.frequency(),
                to,
                method: ConversionMethod::Shrink(method),
                options,
            },
        })
    }

    /// Convert to a coarser frequency, aggregating every observation inside each period.
    ///
    /// Each output date is the period's anchor (its first day by default).
    ///
    /// # Errors
    /// - `InvalidFrequencyDirection` if `to` is finer than the series.
    /// - `InvalidArg` if either frequency is unknown.
    /// - `InvalidValue` if an aggregate overflows.
    ///
    /// ```
    /// use almanac_core::{Aggregation, Frequency, TimeSeries};
    /// use chrono::NaiveDate;
    ///
    /// let d = |m| NaiveDate::from_ymd_opt(2021, m, 1).unwrap();
    /// let ts = TimeSeries::new((1..=6).map(|m| (d(m), f64::from(8 + 2 * m)))).unwrap();
    /// let q = ts.transform(Frequency::Quarterly, Aggregation::Sum).unwrap();
    /// assert_eq!(q.to_pairs(), vec![(d(1), 36.0), (d(4), 54.0)]);
    /// ```
    pub fn transform(&self, to: Frequency, aggregation: Aggregation) -> Result<Self, AlmanacError> {
        self.transform_with(to, aggregation, DateRangeOptions::default())
            .map(|c| c.series)
    }

    /// [`TimeSeries::transform`] with explicit anchoring, returning the conversion parameters.
    ///
    /// # Errors
    /// Same as [`TimeSeries::transform`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "almanac::convert::transform",
            skip(self, options),
            fields(from = %self.frequency(), rows = self.len()),
        )
    )]
    pub fn transform_with(
        &self,
        to: Frequency,
        aggregation: Aggregation,
        options: DateRangeOptions,
    ) -> Result<FrequencyConversion, AlmanacError> {
        match granularity(self.frequency(), to)? {
            Ordering::Equal => return Ok(self.identity(options)),
            Ordering::Less => {
                return Err(AlmanacError::wrong_direction(
                    "transform",
                    self.frequency(),
                    to,
                ));
            }
            Ordering::Greater => {}
        }

        // Observations arrive in date order, so each bucket's values stay ordered too.
        let mut buckets: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
        for (date, value) in self.iter() {
            let Some(bucket) = anchor_date(date, to, options.anchor) else {
                continue;
            };
            buckets.entry(bucket).or_default().push(value);
        }

        let mut out = BTreeMap::new();
        for (bucket, values) in buckets {
            if let Some(v) = aggregation.apply(&values) {
                out.insert(bucket, ensure_finite_result("transform", v)?);
            }
        }
        Ok(FrequencyConversion {
            series: Self::from_map(out, to),
            params: ConversionParams {
                from: self.frequency(),
                to,
                method: ConversionMethod::Transform(aggregation),
                options,
            },
        })
    }
}
