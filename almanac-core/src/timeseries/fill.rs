//! Forward and backward filling onto a target date sequence.
//!
//! Filling only ever copies an existing observation; nothing is interpolated.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::timeseries::calendar::date_range;
use crate::timeseries::resolve::{on_or_after, on_or_before};
use crate::timeseries::store::TimeSeries;
use crate::{AlmanacError, DateRangeOptions, FillMethod};

fn sorted_targets<I>(targets: I) -> Vec<NaiveDate>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut out: Vec<NaiveDate> = targets.into_iter().collect();
    out.sort_unstable();
    out.dedup();
    out
}

/// Tracks how many consecutive targets copied the same source observation.
struct CopyBudget {
    limit: Option<usize>,
    source: Option<NaiveDate>,
    copies: usize,
}

impl CopyBudget {
    const fn new(limit: Option<usize>) -> Self {
        Self {
            limit,
            source: None,
            copies: 0,
        }
    }

    /// Record that `target` resolved to `source`; returns whether it may be filled.
    fn admit(&mut self, target: NaiveDate, source: NaiveDate) -> bool {
        if target == source {
            self.source = Some(source);
            self.copies = 0;
            return true;
        }
        if self.source == Some(source) {
            self.copies += 1;
        } else {
            self.source = Some(source);
            self.copies = 1;
        }
        self.limit.is_none_or(|l| self.copies <= l)
    }

    /// A target with no candidate breaks any run.
    fn reset(&mut self) {
        self.source = None;
        self.copies = 0;
    }
}

/// Fill every target date with the latest observation on or before it.
///
/// Targets earlier than the first observation stay absent. `limit` bounds how
/// many consecutive targets may copy the same observation; an exact match is
/// not a copy and starts a new run. Absent targets are omitted from the output.
///
/// ```
/// use almanac_core::{Frequency, TimeSeries};
/// use almanac_core::timeseries::fill::forward_fill;
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2021, 1, day).unwrap();
/// let ts = TimeSeries::with_frequency(vec![(d(2), 1.0), (d(6), 2.0)], Frequency::Daily).unwrap();
/// let out = forward_fill(&ts, (1..=8).map(d), Some(2));
/// assert_eq!(out.dates(), vec![d(2), d(3), d(4), d(6), d(7), d(8)]);
/// ```
#[must_use]
pub fn forward_fill<I>(source: &TimeSeries, targets: I, limit: Option<usize>) -> TimeSeries
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut out = BTreeMap::new();
    let mut budget = CopyBudget::new(limit);
    for target in sorted_targets(targets) {
        match on_or_before(source, target) {
            Some((src, value)) => {
                if budget.admit(target, src) {
                    out.insert(target, value);
                }
            }
            None => budget.reset(),
        }
    }
    TimeSeries::from_map(out, source.frequency())
}

/// Fill every target date with the earliest observation on or after it.
///
/// Mirror image of [`forward_fill`]: targets after the last observation stay
/// absent and `limit` counts consecutive targets walking backward in time.
#[must_use]
pub fn backward_fill<I>(source: &TimeSeries, targets: I, limit: Option<usize>) -> TimeSeries
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut out = BTreeMap::new();
    let mut budget = CopyBudget::new(limit);
    for target in sorted_targets(targets).into_iter().rev() {
        match on_or_after(source, target) {
            Some((src, value)) => {
                if budget.admit(target, src) {
                    out.insert(target, value);
                }
            }
            None => budget.reset(),
        }
    }
    TimeSeries::from_map(out, source.frequency())
}

/// Fill onto `targets` in the direction given by `method`.
#[must_use]
pub fn fill<I>(
    source: &TimeSeries,
    targets: I,
    method: FillMethod,
    limit: Option<usize>,
) -> TimeSeries
where
    I: IntoIterator<Item = NaiveDate>,
{
    match method {
        FillMethod::Ffill => forward_fill(source, targets, limit),
        FillMethod::Bfill => backward_fill(source, targets, limit),
    }
}

impl TimeSeries {
    fn own_range(&self, options: DateRangeOptions) -> Result<Vec<NaiveDate>, AlmanacError> {
        match (self.start_date(), self.end_date()) {
            (Some(start), Some(end)) => date_range(start, end, self.frequency(), options),
            _ => Ok(Vec::new()),
        }
    }

    /// Forward fill the gaps in this series' own canonical date range.
    ///
    /// Stored observations are kept even when they are not on a canonical date.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the series frequency is unknown.
    pub fn ffill(&self, limit: Option<usize>) -> Result<Self, AlmanacError> {
        self.ffill_with(limit, DateRangeOptions::default())
    }

    /// [`TimeSeries::ffill`] with explicit date-range options (e.g. weekdays only).
    ///
    /// # Errors
    /// Returns `InvalidArg` if the series frequency is unknown.
    pub fn ffill_with(
        &self,
        limit: Option<usize>,
        options: DateRangeOptions,
    ) -> Result<Self, AlmanacError> {
        let targets = self.own_range(options)?;
        Ok(forward_fill(self, targets.into_iter().chain(self.dates()), limit))
    }

    /// Backward fill the gaps in this series' own canonical date range.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the series frequency is unknown.
    pub fn bfill(&self, limit: Option<usize>) -> Result<Self, AlmanacError> {
        self.bfill_with(limit, DateRangeOptions::default())
    }

    /// [`TimeSeries::bfill`] with explicit date-range options.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the series frequency is unknown.
    pub fn bfill_with(
        &self,
        limit: Option<usize>,
        options: DateRangeOptions,
    ) -> Result<Self, AlmanacError> {
        let targets = self.own_range(options)?;
        Ok(backward_fill(self, targets.into_iter().chain(self.dates()), limit))
    }
}
