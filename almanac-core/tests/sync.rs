use almanac_core::{AlmanacError, FillMethod, Frequency, TimeSeries};
use almanac_mock::PriceWalk;
use chrono::NaiveDate;
use proptest::prelude::*;

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, day).unwrap()
}

fn weekdays() -> TimeSeries {
    TimeSeries::new(almanac_mock::series("WEEKDAYS").unwrap()).unwrap()
}

fn sparse() -> TimeSeries {
    TimeSeries::new(almanac_mock::series("SPARSE").unwrap()).unwrap()
}

#[test]
fn sync_aligns_other_onto_self_dates() {
    let synced = weekdays().sync(&sparse(), FillMethod::Ffill);
    // SPARSE spans the 4th to the 19th.
    assert_eq!(synced.start_date(), Some(d(4)));
    assert_eq!(synced.end_date(), Some(d(19)));
    assert_eq!(synced.get(d(6)).unwrap(), 101.5);
    assert_eq!(synced.get(d(15)).unwrap(), 102.4);
    assert_eq!(synced.frequency(), Frequency::Daily);
}

#[test]
fn bfill_sync_takes_the_next_observation() {
    let synced = weekdays().sync(&sparse(), FillMethod::Bfill);
    assert_eq!(synced.get(d(6)).unwrap(), 99.8);
    assert_eq!(synced.get(d(13)).unwrap(), 105.0);
}

#[test]
fn sync_within_drops_dates_beyond_tolerance() {
    let synced = weekdays()
        .sync_within(&sparse(), FillMethod::Ffill, Some(2));
    // The 15th is three days after the 12th.
    assert!(!synced.contains(d(15)));
    assert!(synced.contains(d(14)));
}

#[test]
fn sync_within_zero_tolerance_keeps_only_shared_dates() {
    let synced = weekdays().sync_within(&sparse(), FillMethod::Bfill, Some(0));
    assert_eq!(synced.dates(), sparse().dates());
    assert_eq!(synced.values(), sparse().values());
    assert_eq!(synced.frequency(), weekdays().frequency());
}

#[test]
fn sync_with_empty_other_is_empty() {
    let synced = weekdays().sync(&TimeSeries::default(), FillMethod::Ffill);
    assert!(synced.is_empty());
}

#[test]
fn synced_series_supports_aligned_arithmetic() {
    let base = weekdays().between(d(4), d(19));
    let synced = base.sync(&sparse(), FillMethod::Ffill);
    let spread = base.sub(&synced).unwrap();
    assert_eq!(spread.len(), base.len());
    assert!(matches!(
        weekdays().sub(&synced),
        Err(AlmanacError::UnalignedSeries { .. })
    ));
}

proptest! {
    #[test]
    fn sync_result_is_subset_of_self(seed_a in any::<u64>(), seed_b in any::<u64>(), gaps in 0.0f64..0.8) {
        let a = TimeSeries::new(PriceWalk::new(seed_a).gaps(gaps).generate(120)).unwrap();
        let b = TimeSeries::new(
            PriceWalk::new(seed_b)
                .start(NaiveDate::from_ymd_opt(2020, 2, 1).unwrap())
                .gaps(gaps)
                .generate(60),
        )
        .unwrap();
        for method in [FillMethod::Ffill, FillMethod::Bfill] {
            let synced = a.sync(&b, method);
            prop_assert!(synced.len() <= a.len());
            prop_assert!(synced.dates().iter().all(|x| a.contains(*x)));
            prop_assert_eq!(synced.frequency(), a.frequency());
        }
    }
}
