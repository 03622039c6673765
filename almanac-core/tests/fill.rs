use almanac_core::{
    AlmanacError, DateRangeOptions, FillMethod, Frequency, TimeSeries, backward_fill, fill,
    forward_fill,
};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, day).unwrap()
}

fn two_points() -> TimeSeries {
    TimeSeries::with_frequency(vec![(d(2), 1.0), (d(6), 2.0)], Frequency::Daily).unwrap()
}

#[test]
fn forward_fill_leaves_leading_targets_absent() {
    let out = forward_fill(&two_points(), (1..=8).map(d), None);
    assert_eq!(out.dates(), (2..=8).map(d).collect::<Vec<_>>());
    assert_eq!(out.get(d(5)).unwrap(), 1.0);
    assert_eq!(out.get(d(8)).unwrap(), 2.0);
}

#[test]
fn backward_fill_leaves_trailing_targets_absent() {
    let out = backward_fill(&two_points(), (1..=8).map(d), None);
    assert_eq!(out.dates(), (1..=6).map(d).collect::<Vec<_>>());
    assert_eq!(out.get(d(1)).unwrap(), 1.0);
    assert_eq!(out.get(d(3)).unwrap(), 2.0);
}

#[test]
fn limit_bounds_copies_per_observation() {
    let out = forward_fill(&two_points(), (1..=8).map(d), Some(1));
    assert_eq!(out.dates(), vec![d(2), d(3), d(6), d(7)]);

    let out = backward_fill(&two_points(), (1..=8).map(d), Some(1));
    assert_eq!(out.dates(), vec![d(1), d(2), d(5), d(6)]);

    let zero = forward_fill(&two_points(), (1..=8).map(d), Some(0));
    assert_eq!(zero.dates(), vec![d(2), d(6)]);
}

#[test]
fn targets_are_sorted_and_deduplicated() {
    let targets = vec![d(7), d(3), d(3), d(2)];
    let out = fill(&two_points(), targets, FillMethod::Ffill, None);
    assert_eq!(out.dates(), vec![d(2), d(3), d(7)]);
    assert_eq!(out.frequency(), Frequency::Daily);
}

#[test]
fn own_range_fill_respects_weekdays_option() {
    let ts = TimeSeries::new(almanac_mock::series("SPARSE").unwrap()).unwrap();
    let all = ts.ffill(None).unwrap();
    assert_eq!(all.len(), 16); // 4th through 19th inclusive

    let weekdays = ts.ffill_with(None, DateRangeOptions::weekdays()).unwrap();
    assert!(weekdays.dates().iter().all(|&x| !almanac_core::timeseries::calendar::is_weekend(x)));
    assert_eq!(weekdays.get(d(6)).unwrap(), 101.5);
    assert_eq!(weekdays.get(d(15)).unwrap(), 102.4);

    let back = ts.bfill(Some(2)).unwrap();
    assert!(back.contains(d(16)));
    assert!(back.contains(d(17)));
    assert!(!back.contains(d(15)));
}

#[test]
fn own_range_fill_needs_a_known_frequency() {
    let ts = TimeSeries::with_frequency(vec![(d(1), 1.0)], Frequency::Unknown).unwrap();
    assert!(matches!(ts.ffill(None), Err(AlmanacError::InvalidArg(_))));
}

fn arb_source() -> impl Strategy<Value = TimeSeries> {
    proptest::collection::btree_set(0u64..120, 1..30).prop_map(|offs| {
        TimeSeries::with_frequency(
            offs.into_iter().map(|o| (d(1) + Days::new(o), o as f64)),
            Frequency::Daily,
        )
        .unwrap()
    })
}

proptest! {
    #[test]
    fn forward_fill_never_exceeds_limit(src in arb_source(), limit in 0usize..5) {
        let targets: Vec<NaiveDate> = (0..150).map(|o| d(1) + Days::new(o)).collect();
        let out = forward_fill(&src, targets, Some(limit));
        // Count consecutive copies of the same source observation.
        let mut run_source: Option<NaiveDate> = None;
        let mut run = 0usize;
        for (date, _) in out.iter() {
            let (source_date, _) = src.get_with(date, almanac_core::SearchMode::Previous, None).unwrap();
            if source_date == date {
                run_source = Some(source_date);
                run = 0;
                continue;
            }
            if run_source == Some(source_date) {
                run += 1;
            } else {
                run_source = Some(source_date);
                run = 1;
            }
            prop_assert!(run <= limit);
        }
        // Every stored observation survives.
        for date in src.dates() {
            prop_assert!(out.contains(date));
        }
    }

    #[test]
    fn unlimited_fill_only_copies_existing_values(src in arb_source()) {
        let targets: Vec<NaiveDate> = (0..150).map(|o| d(1) + Days::new(o)).collect();
        let out = forward_fill(&src, targets, None);
        let values = src.values();
        prop_assert!(out.values().iter().all(|v| values.contains(v)));
        prop_assert_eq!(out.start_date(), src.start_date());
    }
}
