//! Calendar arithmetic and canonical date sequences.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::{AlmanacError, Anchor, DateRangeOptions, Frequency, Period, PeriodUnit};

fn unknown_frequency() -> AlmanacError {
    AlmanacError::invalid_arg("frequency is unknown; supply one explicitly")
}

/// True for Saturdays and Sundays.
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// First day of the period of `frequency` that contains `date`.
///
/// Weeks start on Monday; month-based periods start on the 1st of January,
/// April, July, and October for quarters and January/July for half years.
/// Returns `None` for `Frequency::Unknown`.
#[must_use]
pub fn period_start(date: NaiveDate, frequency: Frequency) -> Option<NaiveDate> {
    match frequency {
        Frequency::Daily => Some(date),
        Frequency::Weekly => {
            let back = u64::from(date.weekday().num_days_from_monday());
            date.checked_sub_days(Days::new(back))
        }
        Frequency::Unknown => None,
        _ => {
            let span = frequency.months()?;
            let month0 = (date.month0() / span) * span;
            NaiveDate::from_ymd_opt(date.year(), month0 + 1, 1)
        }
    }
}

/// Last day of the period of `frequency` that contains `date`.
#[must_use]
pub fn period_end(date: NaiveDate, frequency: Frequency) -> Option<NaiveDate> {
    let start = period_start(date, frequency)?;
    next_period_start(start, frequency)?.pred_opt()
}

/// First day of the period following the one starting at `start`.
fn next_period_start(start: NaiveDate, frequency: Frequency) -> Option<NaiveDate> {
    match frequency {
        Frequency::Daily => start.succ_opt(),
        Frequency::Weekly => start.checked_add_days(Days::new(7)),
        Frequency::Unknown => None,
        _ => start.checked_add_months(Months::new(frequency.months()?)),
    }
}

/// The canonical date that represents the period containing `date`.
#[must_use]
pub fn anchor_date(date: NaiveDate, frequency: Frequency, anchor: Anchor) -> Option<NaiveDate> {
    match anchor {
        Anchor::PeriodStart => period_start(date, frequency),
        Anchor::PeriodEnd => period_end(date, frequency),
    }
}

/// Canonical date sequence for `frequency` with every date inside `[start, end]`.
///
/// Daily yields every day (weekdays only with `skip_weekends`); weekly yields
/// Mondays; monthly the 1st of each month; quarterly, half-yearly, and annual
/// the 1st of each period. With `Anchor::PeriodEnd` the last day of each period
/// is emitted instead. An inverted range yields an empty sequence.
///
/// # Errors
/// Returns `InvalidArg` for `Frequency::Unknown`.
///
/// ```
/// use almanac_core::{DateRangeOptions, Frequency};
/// use almanac_core::timeseries::calendar::date_range;
/// use chrono::NaiveDate;
///
/// let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
/// let months = date_range(d(2021, 1, 15), d(2021, 4, 1), Frequency::Monthly, DateRangeOptions::default()).unwrap();
/// assert_eq!(months, vec![d(2021, 2, 1), d(2021, 3, 1), d(2021, 4, 1)]);
///
/// let ends = date_range(d(2021, 1, 1), d(2021, 6, 30), Frequency::Quarterly, DateRangeOptions::period_end()).unwrap();
/// assert_eq!(ends, vec![d(2021, 3, 31), d(2021, 6, 30)]);
/// ```
pub fn date_range(
    start: NaiveDate,
    end: NaiveDate,
    frequency: Frequency,
    options: DateRangeOptions,
) -> Result<Vec<NaiveDate>, AlmanacError> {
    let mut cursor = period_start(start, frequency).ok_or_else(unknown_frequency)?;
    let mut out = Vec::new();
    while cursor <= end {
        let Some(date) = anchor_date(cursor, frequency, options.anchor) else {
            break;
        };
        let weekday_ok =
            !(options.skip_weekends && frequency == Frequency::Daily && is_weekend(date));
        if date >= start && date <= end && weekday_ok {
            out.push(date);
        }
        let Some(next) = next_period_start(cursor, frequency) else {
            break;
        };
        cursor = next;
    }
    Ok(out)
}

/// Step `date` back by a calendar period.
///
/// Months and years subtract calendar months, clamping to the last valid day
/// (31 March minus one month is 28 or 29 February); days and weeks subtract
/// fixed day counts.
///
/// # Errors
/// Returns `InvalidArg` if the result is outside the representable date range.
///
/// ```
/// use almanac_core::Period;
/// use almanac_core::timeseries::calendar::shift_back;
/// use chrono::NaiveDate;
///
/// let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
/// assert_eq!(shift_back(d(2021, 3, 31), Period::months(1)).unwrap(), d(2021, 2, 28));
/// assert_eq!(shift_back(d(2020, 2, 29), Period::years(1)).unwrap(), d(2019, 2, 28));
/// ```
pub fn shift_back(date: NaiveDate, period: Period) -> Result<NaiveDate, AlmanacError> {
    let shifted = match period.unit {
        PeriodUnit::Days => date.checked_sub_days(Days::new(u64::from(period.value))),
        PeriodUnit::Weeks => date.checked_sub_days(Days::new(u64::from(period.value) * 7)),
        PeriodUnit::Months => date.checked_sub_months(Months::new(period.value)),
        PeriodUnit::Years => period
            .value
            .checked_mul(12)
            .and_then(|m| date.checked_sub_months(Months::new(m))),
    };
    shifted.ok_or_else(|| AlmanacError::invalid_arg(format!("{date} minus {period} is out of range")))
}
