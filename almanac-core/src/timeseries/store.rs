//! The date-keyed series container.

use core::fmt;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::parse::{IntoDate, IntoValue};
use crate::timeseries::{infer, resolve};
use crate::{AlmanacError, Frequency, SearchMode};

/// Rows shown at each end of a rendered series before eliding the middle.
const DISPLAY_EDGE_ROWS: usize = 3;

/// An ordered, unique-keyed series of daily-granularity observations.
///
/// Invariants:
/// - each date appears at most once;
/// - iteration is in strictly ascending date order;
/// - every stored value is finite. A missing observation is a missing key.
///
/// Transforms return new series; [`TimeSeries::set`] is the only in-place update.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "SeriesRepr", into = "SeriesRepr")]
pub struct TimeSeries {
    data: BTreeMap<NaiveDate, f64>,
    frequency: Frequency,
}

/// Wire shape used by serde; deserialization re-runs construction checks.
#[derive(Serialize, Deserialize)]
struct SeriesRepr {
    frequency: Frequency,
    data: Vec<(NaiveDate, f64)>,
}

impl TryFrom<SeriesRepr> for TimeSeries {
    type Error = AlmanacError;

    fn try_from(repr: SeriesRepr) -> Result<Self, Self::Error> {
        Self::with_frequency(repr.data, repr.frequency)
    }
}

impl From<TimeSeries> for SeriesRepr {
    fn from(ts: TimeSeries) -> Self {
        Self {
            frequency: ts.frequency,
            data: ts.data.into_iter().collect(),
        }
    }
}

fn ensure_finite(date: NaiveDate, value: f64) -> Result<(), AlmanacError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AlmanacError::InvalidValue(format!(
            "value at {date} is not finite: {value}"
        )))
    }
}

fn collect_checked<I>(pairs: I) -> Result<BTreeMap<NaiveDate, f64>, AlmanacError>
where
    I: IntoIterator<Item = (NaiveDate, f64)>,
{
    let mut map = BTreeMap::new();
    for (date, value) in pairs {
        ensure_finite(date, value)?;
        match map.entry(date) {
            Entry::Vacant(v) => {
                v.insert(value);
            }
            Entry::Occupied(_) => return Err(AlmanacError::DuplicateDate { date }),
        }
    }
    Ok(map)
}

impl TimeSeries {
    /// Build a series from `(date, value)` pairs in any order, inferring its frequency.
    ///
    /// # Errors
    /// - `DuplicateDate` if a date appears twice.
    /// - `InvalidValue` if a value is NaN or infinite.
    ///
    /// ```
    /// use almanac_core::{Frequency, TimeSeries};
    /// use chrono::NaiveDate;
    ///
    /// let d = |m| NaiveDate::from_ymd_opt(2021, m, 1).unwrap();
    /// let ts = TimeSeries::new(vec![(d(3), 14.0), (d(1), 10.0), (d(2), 12.0)]).unwrap();
    /// assert_eq!(ts.dates(), vec![d(1), d(2), d(3)]);
    /// assert_eq!(ts.frequency(), Frequency::Monthly);
    /// ```
    pub fn new<I>(pairs: I) -> Result<Self, AlmanacError>
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        let data = collect_checked(pairs)?;
        let frequency = infer::infer_frequency(data.keys().copied());
        Ok(Self { data, frequency })
    }

    /// Build a series with an explicit frequency tag.
    ///
    /// # Errors
    /// Same as [`TimeSeries::new`].
    pub fn with_frequency<I>(pairs: I, frequency: Frequency) -> Result<Self, AlmanacError>
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        let data = collect_checked(pairs)?;
        Ok(Self { data, frequency })
    }

    /// Build a series from input that must already be in strictly ascending date order.
    ///
    /// With `frequency = None` the frequency is inferred.
    ///
    /// # Errors
    /// - `UnsortedInput` at the first date that is earlier than its predecessor.
    /// - `DuplicateDate` if a date repeats.
    /// - `InvalidValue` if a value is not finite.
    pub fn from_sorted<I>(pairs: I, frequency: Option<Frequency>) -> Result<Self, AlmanacError>
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        let mut prev: Option<NaiveDate> = None;
        let mut checked: Vec<(NaiveDate, f64)> = Vec::new();
        for (date, value) in pairs {
            if let Some(p) = prev {
                if date == p {
                    return Err(AlmanacError::DuplicateDate { date });
                }
                if date < p {
                    return Err(AlmanacError::UnsortedInput { date });
                }
            }
            prev = Some(date);
            checked.push((date, value));
        }
        match frequency {
            Some(f) => Self::with_frequency(checked, f),
            None => Self::new(checked),
        }
    }

    /// Build a series from date-like and number-like input, parsing strings with `date_format`.
    ///
    /// With `frequency = None` the frequency is inferred.
    ///
    /// # Errors
    /// - `DateParse` for a date string that does not match `date_format`.
    /// - `InvalidValue` for a value that is not a finite number.
    /// - `DuplicateDate` if two inputs parse to the same date.
    ///
    /// ```
    /// use almanac_core::TimeSeries;
    ///
    /// let ts = TimeSeries::parse(
    ///     vec![("01-01-2021", "10"), ("01-02-2021", "12.5")],
    ///     "%d-%m-%Y",
    ///     None,
    /// )
    /// .unwrap();
    /// assert_eq!(ts.len(), 2);
    /// assert!(TimeSeries::parse(vec![("2021-01-01", "ten")], "%Y-%m-%d", None).is_err());
    /// ```
    pub fn parse<I, D, V>(
        pairs: I,
        date_format: &str,
        frequency: Option<Frequency>,
    ) -> Result<Self, AlmanacError>
    where
        I: IntoIterator<Item = (D, V)>,
        D: IntoDate,
        V: IntoValue,
    {
        let parsed = pairs
            .into_iter()
            .map(|(d, v)| Ok((d.into_date(date_format)?, v.into_value()?)))
            .collect::<Result<Vec<_>, AlmanacError>>()?;
        match frequency {
            Some(f) => Self::with_frequency(parsed, f),
            None => Self::new(parsed),
        }
    }

    /// An empty series with the given frequency tag.
    #[must_use]
    pub const fn empty(frequency: Frequency) -> Self {
        Self {
            data: BTreeMap::new(),
            frequency,
        }
    }

    /// Wrap an already-validated map. Engines use this for outputs built from stored values.
    pub(crate) const fn from_map(data: BTreeMap<NaiveDate, f64>, frequency: Frequency) -> Self {
        Self { data, frequency }
    }

    pub(crate) const fn data(&self) -> &BTreeMap<NaiveDate, f64> {
        &self.data
    }

    /// Frequency tag of the series.
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Return the same observations under a different frequency tag.
    #[must_use]
    pub fn retag(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the series holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Earliest observation.
    #[must_use]
    pub fn first(&self) -> Option<(NaiveDate, f64)> {
        self.data.first_key_value().map(|(d, v)| (*d, *v))
    }

    /// Latest observation.
    #[must_use]
    pub fn last(&self) -> Option<(NaiveDate, f64)> {
        self.data.last_key_value().map(|(d, v)| (*d, *v))
    }

    /// Earliest stored date.
    #[must_use]
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.data.keys().next().copied()
    }

    /// Latest stored date.
    #[must_use]
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.data.keys().next_back().copied()
    }

    /// True if an observation is stored for `date`.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.data.contains_key(&date)
    }

    /// Value stored at exactly `date`.
    ///
    /// # Errors
    /// Returns `KeyNotFound` if no observation is stored for `date`.
    pub fn get(&self, date: NaiveDate) -> Result<f64, AlmanacError> {
        self.data
            .get(&date)
            .copied()
            .ok_or(AlmanacError::not_found(date))
    }

    /// Resolve `date` with a search mode and optional tolerance, returning the stored date used.
    ///
    /// # Errors
    /// See [`resolve::resolve`].
    pub fn get_with(
        &self,
        date: NaiveDate,
        mode: SearchMode,
        tolerance_days: Option<u32>,
    ) -> Result<(NaiveDate, f64), AlmanacError> {
        resolve::resolve(self, date, mode, tolerance_days)
    }

    /// Insert or overwrite the observation at `date`, returning the previous value.
    ///
    /// # Errors
    /// Returns `InvalidValue` if `value` is not finite; the series is left unchanged.
    pub fn set(&mut self, date: NaiveDate, value: f64) -> Result<Option<f64>, AlmanacError> {
        ensure_finite(date, value)?;
        Ok(self.data.insert(date, value))
    }

    /// The first `n` observations.
    #[must_use]
    pub fn head(&self, n: usize) -> Self {
        let data = self.data.iter().take(n).map(|(d, v)| (*d, *v)).collect();
        Self::from_map(data, self.frequency)
    }

    /// The last `n` observations.
    #[must_use]
    pub fn tail(&self, n: usize) -> Self {
        let data = self
            .data
            .iter()
            .rev()
            .take(n)
            .map(|(d, v)| (*d, *v))
            .collect();
        Self::from_map(data, self.frequency)
    }

    /// Observations with `from <= date <= to`. Empty if `from > to`.
    #[must_use]
    pub fn between(&self, from: NaiveDate, to: NaiveDate) -> Self {
        if from > to {
            return Self::empty(self.frequency);
        }
        let data = self.data.range(from..=to).map(|(d, v)| (*d, *v)).collect();
        Self::from_map(data, self.frequency)
    }

    /// Iterate observations in ascending date order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (NaiveDate, f64)> + '_ {
        self.data.iter().map(|(d, v)| (*d, *v))
    }

    /// All stored dates, ascending.
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.data.keys().copied().collect()
    }

    /// All stored values in date order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.data.values().copied().collect()
    }

    /// Arithmetic mean of the values; `None` when empty.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        if self.data.is_empty() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let n = self.data.len() as f64;
        Some(self.data.values().sum::<f64>() / n)
    }

    /// Export as a date-keyed map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<NaiveDate, f64> {
        self.data.clone()
    }

    /// Export as ascending `(date, value)` pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(NaiveDate, f64)> {
        self.iter().collect()
    }

    /// One-line-per-fact summary of the series bounds.
    #[must_use]
    pub fn info(&self) -> String {
        let show = |d: Option<NaiveDate>| d.map_or_else(|| "-".to_string(), |d| d.to_string());
        format!(
            "First date: {}\nLast date: {}\nNumber of rows: {}\nFrequency: {}",
            show(self.start_date()),
            show(self.end_date()),
            self.len(),
            self.frequency
        )
    }
}

impl fmt::Display for TimeSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.data.len();
        writeln!(
            f,
            "TimeSeries(frequency='{}', rows={n})",
            self.frequency.symbol()
        )?;
        if n > DISPLAY_EDGE_ROWS * 2 {
            for (d, v) in self.data.iter().take(DISPLAY_EDGE_ROWS) {
                writeln!(f, "  {d}  {v}")?;
            }
            writeln!(f, "  ...")?;
            for (d, v) in self.data.iter().skip(n - DISPLAY_EDGE_ROWS) {
                writeln!(f, "  {d}  {v}")?;
            }
        } else {
            for (d, v) in &self.data {
                writeln!(f, "  {d}  {v}")?;
            }
        }
        Ok(())
    }
}
