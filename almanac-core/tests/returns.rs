use almanac_core::{
    AlmanacError, Frequency, Period, ReturnSpec, SearchMode, TimeSeries, average_rolling_return,
    calculate_returns, rolling_returns,
};
use chrono::NaiveDate;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn prices() -> TimeSeries {
    TimeSeries::new(almanac_mock::series("PRICES").unwrap()).unwrap()
}

#[test]
fn three_month_return_resolves_calendar_dates() {
    let rec = calculate_returns(&prices(), d(2021, 4, 1), &ReturnSpec::new(Period::months(3))).unwrap();
    assert_eq!(rec.as_on, d(2021, 4, 1));
    assert_eq!(rec.end_date, d(2021, 4, 1));
    assert_eq!(rec.start_date, d(2021, 1, 1));
    assert!((rec.value - 0.6).abs() < 1e-12);
    assert!(!rec.annualized);
}

#[test]
fn as_on_between_observations_uses_nearest() {
    let rec = calculate_returns(&prices(), d(2021, 3, 30), &ReturnSpec::new(Period::months(1))).unwrap();
    assert_eq!(rec.end_date, d(2021, 4, 1));
    assert_eq!(rec.start_date, d(2021, 3, 1));
    assert!((rec.value - (16.0 / 14.0 - 1.0)).abs() < 1e-12);

    // The previous observation is 29 days back, beyond the monthly default of 16.
    let prev = ReturnSpec::new(Period::months(1)).as_on_mode(SearchMode::Previous);
    assert!(calculate_returns(&prices(), d(2021, 3, 30), &prev).is_err());
    let rec = calculate_returns(&prices(), d(2021, 3, 30), &prev.tolerance_days(31)).unwrap();
    assert_eq!(rec.end_date, d(2021, 3, 1));
    assert_eq!(rec.start_date, d(2021, 2, 1));
}

#[test]
fn annualization_compounds_over_actual_days() {
    let spec = ReturnSpec::new(Period::months(3)).annualized(true);
    let rec = calculate_returns(&prices(), d(2021, 4, 1), &spec).unwrap();
    let days = 90.0; // 2021-01-01 to 2021-04-01
    let expected = 1.6f64.powf(365.25 / days) - 1.0;
    assert!((rec.value - expected).abs() < 1e-9);
    assert!(rec.annualized);
}

#[test]
fn unresolvable_prior_date_is_insufficient_data() {
    let err = calculate_returns(&prices(), d(2021, 4, 1), &ReturnSpec::new(Period::years(1))).unwrap_err();
    assert!(matches!(err, AlmanacError::InsufficientData { .. }));

    let exact = ReturnSpec::new(Period::days(10)).prior_mode(SearchMode::Exact);
    let err = calculate_returns(&prices(), d(2021, 4, 1), &exact).unwrap_err();
    assert!(matches!(err, AlmanacError::InsufficientData { .. }));
}

#[test]
fn explicit_tolerance_overrides_frequency_default() {
    // Prior date 2021-03-22 is 21 days after the previous stored date; monthly tolerance is 16.
    let spec = ReturnSpec::new(Period::days(10)).prior_mode(SearchMode::Previous);
    assert!(calculate_returns(&prices(), d(2021, 4, 1), &spec).is_err());
    let wide = spec.tolerance_days(30);
    let rec = calculate_returns(&prices(), d(2021, 4, 1), &wide).unwrap();
    assert_eq!(rec.start_date, d(2021, 3, 1));
    assert!((rec.value - (16.0 / 14.0 - 1.0)).abs() < 1e-12);
}

#[test]
fn annualizing_a_zero_day_span_fails() {
    // Nearest resolves the prior date 2021-03-22 forward to the as-on date itself.
    let spec = ReturnSpec::new(Period::days(10)).annualized(true);
    let err = calculate_returns(&prices(), d(2021, 4, 1), &spec).unwrap_err();
    assert!(matches!(err, AlmanacError::InsufficientData { .. }));
}

#[test]
fn rolling_returns_skip_unresolvable_points() {
    let ts = TimeSeries::new(almanac_mock::series("MONTHLY").unwrap()).unwrap();
    let spec = ReturnSpec::new(Period::months(1));
    let rolling = rolling_returns(&ts, d(2021, 1, 1), d(2021, 6, 1), Frequency::Monthly, &spec).unwrap();
    // January has no prior month.
    assert_eq!(rolling.start_date(), Some(d(2021, 2, 1)));
    assert_eq!(rolling.len(), 5);
    assert!((rolling.get(d(2021, 2, 1)).unwrap() - 0.2).abs() < 1e-12);
    assert_eq!(rolling.frequency(), Frequency::Monthly);

    let avg = average_rolling_return(&ts, d(2021, 1, 1), d(2021, 6, 1), Frequency::Monthly, &spec).unwrap();
    assert!((avg - rolling.mean().unwrap()).abs() < 1e-12);
}

#[test]
fn average_rolling_return_without_points_is_insufficient() {
    let ts = TimeSeries::new(almanac_mock::series("MONTHLY").unwrap()).unwrap();
    let spec = ReturnSpec::new(Period::years(5));
    let err = average_rolling_return(&ts, d(2021, 1, 1), d(2021, 6, 1), Frequency::Monthly, &spec).unwrap_err();
    assert!(matches!(err, AlmanacError::InsufficientData { .. }));
}

#[test]
fn rolling_returns_skip_points_starting_at_zero() {
    let ts = TimeSeries::new(vec![
        (d(2021, 1, 1), 0.0),
        (d(2021, 2, 1), 10.0),
        (d(2021, 3, 1), 12.0),
        (d(2021, 4, 1), 14.0),
    ])
    .unwrap();
    let spec = ReturnSpec::new(Period::months(1));
    assert!(matches!(
        calculate_returns(&ts, d(2021, 2, 1), &spec),
        Err(AlmanacError::InvalidValue(_))
    ));

    let rolling = rolling_returns(&ts, d(2021, 1, 1), d(2021, 4, 1), Frequency::Monthly, &spec).unwrap();
    assert_eq!(rolling.dates(), vec![d(2021, 3, 1), d(2021, 4, 1)]);

    let avg = average_rolling_return(&ts, d(2021, 1, 1), d(2021, 4, 1), Frequency::Monthly, &spec).unwrap();
    assert!((avg - (0.2 + 14.0 / 12.0 - 1.0) / 2.0).abs() < 1e-12);
}

#[test]
fn pct_change_keys_by_later_date() {
    let r = prices().pct_change().unwrap();
    assert_eq!(r.dates(), vec![d(2021, 2, 1), d(2021, 3, 1), d(2021, 4, 1)]);
    assert!((r.values()[0] - 0.2).abs() < 1e-12);
}
