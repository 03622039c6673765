//! Align one series onto another's dates.

use std::collections::BTreeMap;

use crate::FillMethod;
use crate::timeseries::resolve::resolve;
use crate::timeseries::store::TimeSeries;

impl TimeSeries {
    /// `other`'s values aligned to this series' dates.
    ///
    /// Each date of `self` inside `other`'s `[first, last]` range is resolved in
    /// `other` with the search mode of `method`; dates outside that range are
    /// omitted. The result keeps this series' frequency tag.
    ///
    /// ```
    /// use almanac_core::{FillMethod, TimeSeries};
    /// use chrono::NaiveDate;
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2021, 1, day).unwrap();
    /// let weekly = TimeSeries::new(vec![(d(4), 1.0), (d(11), 2.0), (d(18), 3.0)]).unwrap();
    /// let sparse = TimeSeries::new(vec![(d(5), 10.0), (d(12), 20.0)]).unwrap();
    /// let synced = weekly.sync(&sparse, FillMethod::Ffill);
    /// assert_eq!(synced.to_pairs(), vec![(d(11), 10.0)]);
    /// ```
    #[must_use]
    pub fn sync(&self, other: &Self, method: FillMethod) -> Self {
        self.sync_within(other, method, None)
    }

    /// [`TimeSeries::sync`] rejecting candidates farther than `tolerance_days`.
    ///
    /// Dates whose candidate lies beyond the tolerance are omitted as well.
    #[must_use]
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "almanac::sync",
            skip(self, other),
            fields(rows = self.len(), other_rows = other.len()),
        )
    )]
    pub fn sync_within(
        &self,
        other: &Self,
        method: FillMethod,
        tolerance_days: Option<u32>,
    ) -> Self {
        let (Some(lo), Some(hi)) = (other.start_date(), other.end_date()) else {
            return Self::empty(self.frequency());
        };

        let mut out = BTreeMap::new();
        #[cfg(feature = "tracing")]
        let mut omitted = 0usize;
        for date in self.data().keys().copied() {
            if date < lo || date > hi {
                #[cfg(feature = "tracing")]
                {
                    omitted += 1;
                }
                continue;
            }
            match resolve(other, date, method.search_mode(), tolerance_days) {
                Ok((_, value)) => {
                    out.insert(date, value);
                }
                // Resolution only fails on a data gap: here, a candidate beyond the tolerance.
                Err(e) => {
                    debug_assert!(e.is_resolution_failure());
                    #[cfg(feature = "tracing")]
                    {
                        omitted += 1;
                        tracing::debug!(date = %date, error = %e, "sync: date dropped");
                    }
                }
            }
        }
        #[cfg(feature = "tracing")]
        {
            if omitted > 0 {
                tracing::debug!(omitted, kept = out.len(), "sync: dates omitted");
            }
        }
        Self::from_map(out, self.frequency())
    }
}
