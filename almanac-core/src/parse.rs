//! Input boundary: turn date-like and number-like caller input into canonical types.
//!
//! Everything past this module only sees `NaiveDate` and finite `f64`.

use chrono::{NaiveDate, NaiveDateTime};

use crate::AlmanacError;

/// Parse a date string with a `chrono` format string.
///
/// Formats that carry a time-of-day component are accepted; the time is dropped.
///
/// # Errors
/// Returns `AlmanacError::DateParse` with the offending input and the expected format.
///
/// ```
/// use almanac_core::parse::parse_date;
/// use chrono::NaiveDate;
///
/// let d = parse_date("15-03-2021", "%d-%m-%Y").unwrap();
/// assert_eq!(d, NaiveDate::from_ymd_opt(2021, 3, 15).unwrap());
/// assert!(parse_date("2021/03/15", "%Y-%m-%d").is_err());
/// ```
pub fn parse_date(input: &str, format: &str) -> Result<NaiveDate, AlmanacError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, format)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, format).map(|dt| dt.date()))
        .map_err(|_| AlmanacError::DateParse {
            input: input.to_string(),
            format: format.to_string(),
        })
}

/// Parse a numeric string into a finite `f64`.
///
/// # Errors
/// Returns `AlmanacError::InvalidValue` if the string is not a number or is not finite.
pub fn parse_value(input: &str) -> Result<f64, AlmanacError> {
    let v: f64 = input.trim().parse().map_err(|_| {
        AlmanacError::InvalidValue(format!("could not parse {input:?} as a number"))
    })?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(AlmanacError::InvalidValue(format!(
            "{input:?} is not a finite number"
        )))
    }
}

/// Anything that can be turned into a calendar date at the input boundary.
pub trait IntoDate {
    /// Convert into a `NaiveDate`, parsing strings with `format`.
    ///
    /// # Errors
    /// Returns `AlmanacError::DateParse` when a string does not match `format`.
    fn into_date(self, format: &str) -> Result<NaiveDate, AlmanacError>;
}

impl IntoDate for NaiveDate {
    fn into_date(self, _format: &str) -> Result<NaiveDate, AlmanacError> {
        Ok(self)
    }
}

impl IntoDate for NaiveDateTime {
    fn into_date(self, _format: &str) -> Result<NaiveDate, AlmanacError> {
        Ok(self.date())
    }
}

impl IntoDate for &str {
    fn into_date(self, format: &str) -> Result<NaiveDate, AlmanacError> {
        parse_date(self, format)
    }
}

impl IntoDate for String {
    fn into_date(self, format: &str) -> Result<NaiveDate, AlmanacError> {
        parse_date(&self, format)
    }
}

impl IntoDate for &String {
    fn into_date(self, format: &str) -> Result<NaiveDate, AlmanacError> {
        parse_date(self, format)
    }
}

/// Anything that can be turned into an observation value at the input boundary.
pub trait IntoValue {
    /// Convert into an `f64`. Finiteness is checked by the series constructor.
    ///
    /// # Errors
    /// Returns `AlmanacError::InvalidValue` when a string is not numeric.
    fn into_value(self) -> Result<f64, AlmanacError>;
}

impl IntoValue for f64 {
    fn into_value(self) -> Result<f64, AlmanacError> {
        Ok(self)
    }
}

impl IntoValue for f32 {
    fn into_value(self) -> Result<f64, AlmanacError> {
        Ok(f64::from(self))
    }
}

impl IntoValue for i32 {
    fn into_value(self) -> Result<f64, AlmanacError> {
        Ok(f64::from(self))
    }
}

impl IntoValue for u32 {
    fn into_value(self) -> Result<f64, AlmanacError> {
        Ok(f64::from(self))
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Result<f64, AlmanacError> {
        parse_value(self)
    }
}

impl IntoValue for String {
    fn into_value(self) -> Result<f64, AlmanacError> {
        parse_value(&self)
    }
}
