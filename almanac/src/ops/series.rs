use almanac_core::{
    AlmanacError, Frequency, IntoDate, IntoValue, SearchMode, TimeSeries, resolve,
};
use chrono::NaiveDate;

use crate::Almanac;

impl Almanac {
    /// Parse a date-like value with the configured date format.
    ///
    /// # Errors
    /// Returns `DateParse` if a string does not match the configured format.
    pub fn parse_date(&self, date: impl IntoDate) -> Result<NaiveDate, AlmanacError> {
        date.into_date(&self.cfg.date_format)
    }

    /// Build a series from date-like and number-like pairs.
    ///
    /// Date strings are parsed with the configured format. The frequency is
    /// inferred when inference is enabled and left `Unknown` otherwise.
    ///
    /// # Errors
    /// - `DateParse` for a date string that does not match the configured format.
    /// - `InvalidValue` for a value that is not a finite number.
    /// - `DuplicateDate` if two inputs resolve to the same date.
    ///
    /// ```
    /// use almanac::{Almanac, Frequency};
    ///
    /// let almanac = Almanac::builder().date_format("%d-%m-%Y").build().unwrap();
    /// let ts = almanac
    ///     .series(vec![("01-01-2021", 10.0), ("01-02-2021", 12.0), ("01-03-2021", 14.0)])
    ///     .unwrap();
    /// assert_eq!(ts.frequency(), Frequency::Monthly);
    /// ```
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "almanac::series",
            skip(self, pairs),
            fields(infer = self.cfg.infer_frequency),
        )
    )]
    pub fn series<I, D, V>(&self, pairs: I) -> Result<TimeSeries, AlmanacError>
    where
        I: IntoIterator<Item = (D, V)>,
        D: IntoDate,
        V: IntoValue,
    {
        let frequency = (!self.cfg.infer_frequency).then_some(Frequency::Unknown);
        TimeSeries::parse(pairs, &self.cfg.date_format, frequency)
    }

    /// Build a series with an explicit frequency tag.
    ///
    /// # Errors
    /// Same as [`Almanac::series`].
    pub fn series_with_frequency<I, D, V>(
        &self,
        pairs: I,
        frequency: Frequency,
    ) -> Result<TimeSeries, AlmanacError>
    where
        I: IntoIterator<Item = (D, V)>,
        D: IntoDate,
        V: IntoValue,
    {
        TimeSeries::parse(pairs, &self.cfg.date_format, Some(frequency))
    }

    /// Look up `date` with the configured default search mode and tolerance.
    ///
    /// # Errors
    /// - `DateParse` if `date` is a string that does not match the configured format.
    /// - Any resolution error for the configured mode.
    ///
    /// ```
    /// use almanac::{Almanac, SearchMode};
    /// use chrono::NaiveDate;
    ///
    /// let almanac = Almanac::builder().default_search(SearchMode::Previous).build().unwrap();
    /// let ts = almanac.series(vec![("2021-01-01", 1.0), ("2021-01-05", 2.0)]).unwrap();
    /// let (date, value) = almanac.get(&ts, "2021-01-03").unwrap();
    /// assert_eq!(date, NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
    /// assert_eq!(value, 1.0);
    /// ```
    pub fn get(
        &self,
        ts: &TimeSeries,
        date: impl IntoDate,
    ) -> Result<(NaiveDate, f64), AlmanacError> {
        self.get_with(
            ts,
            date,
            self.cfg.default_search,
            self.cfg.default_tolerance_days,
        )
    }

    /// Look up `date` with an explicit search mode and tolerance.
    ///
    /// # Errors
    /// Same as [`Almanac::get`].
    pub fn get_with(
        &self,
        ts: &TimeSeries,
        date: impl IntoDate,
        mode: SearchMode,
        tolerance_days: Option<u32>,
    ) -> Result<(NaiveDate, f64), AlmanacError> {
        let date = self.parse_date(date)?;
        resolve(ts, date, mode, tolerance_days)
    }
}
