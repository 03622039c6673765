use almanac_core::timeseries::calendar::{anchor_date, period_end, period_start, shift_back};
use almanac_core::{Anchor, Frequency, Period, estimate_step_days, infer_frequency};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn period_bounds_per_frequency() {
    let x = d(2021, 8, 18); // a Wednesday
    assert_eq!(period_start(x, Frequency::Weekly), Some(d(2021, 8, 16)));
    assert_eq!(period_end(x, Frequency::Weekly), Some(d(2021, 8, 22)));
    assert_eq!(period_start(x, Frequency::Monthly), Some(d(2021, 8, 1)));
    assert_eq!(period_end(x, Frequency::Monthly), Some(d(2021, 8, 31)));
    assert_eq!(period_start(x, Frequency::Quarterly), Some(d(2021, 7, 1)));
    assert_eq!(period_end(x, Frequency::Quarterly), Some(d(2021, 9, 30)));
    assert_eq!(period_start(x, Frequency::HalfYearly), Some(d(2021, 7, 1)));
    assert_eq!(period_end(x, Frequency::Annual), Some(d(2021, 12, 31)));
    assert_eq!(period_start(x, Frequency::Unknown), None);
    assert_eq!(anchor_date(x, Frequency::Daily, Anchor::PeriodEnd), Some(x));
}

#[test]
fn shift_back_clamps_month_ends() {
    assert_eq!(shift_back(d(2021, 3, 31), Period::months(1)).unwrap(), d(2021, 2, 28));
    assert_eq!(shift_back(d(2020, 3, 31), Period::months(1)).unwrap(), d(2020, 2, 29));
    assert_eq!(shift_back(d(2021, 4, 1), Period::months(3)).unwrap(), d(2021, 1, 1));
    assert_eq!(shift_back(d(2021, 1, 8), Period::weeks(1)).unwrap(), d(2021, 1, 1));
    assert_eq!(shift_back(d(2021, 1, 1), Period::days(1)).unwrap(), d(2020, 12, 31));
    assert!(shift_back(d(2021, 1, 1), Period::years(u32::MAX)).is_err());
}

#[test]
fn inference_maps_modal_gap_to_frequency() {
    let monthly: Vec<NaiveDate> = (1..=12).map(|m| d(2021, m, 1)).collect();
    assert_eq!(infer_frequency(monthly), Frequency::Monthly);
    let quarterly: Vec<NaiveDate> = [1, 4, 7, 10].iter().map(|&m| d(2021, m, 1)).collect();
    assert_eq!(infer_frequency(quarterly), Frequency::Quarterly);
    let annual: Vec<NaiveDate> = (2015..2021).map(|y| d(y, 1, 1)).collect();
    assert_eq!(infer_frequency(annual), Frequency::Annual);
    assert_eq!(infer_frequency([d(2021, 1, 1)]), Frequency::Unknown);
    // A 15-day gap sits between the weekly and monthly bands.
    assert_eq!(infer_frequency([d(2021, 1, 1), d(2021, 1, 16)]), Frequency::Unknown);
}

#[test]
fn weekday_data_infers_daily() {
    let pairs = almanac_mock::series("WEEKDAYS").unwrap();
    assert_eq!(infer_frequency(pairs.iter().map(|(x, _)| *x)), Frequency::Daily);
}

proptest! {
    #[test]
    fn constant_step_with_noise(
        step_idx in 0usize..4,
        n in 6usize..80,
        rev in any::<bool>(),
        kinds in proptest::collection::vec(0u8..=2, 5..80),
    ) {
        let steps = [1u64, 7, 30, 91];
        let step = steps[step_idx];
        // Bounded noise: at most a fifth of the gaps deviate from the step.
        let gaps = kinds.len().min(n - 1);
        let mut noise_budget = gaps / 5;
        let mut dates = vec![d(2000, 1, 1)];
        for &k in kinds.iter().take(gaps) {
            let gap = if noise_budget == 0 || k == 0 {
                step
            } else {
                noise_budget -= 1;
                if k == 1 { step * 2 } else { step + 3 }
            };
            let last = *dates.last().unwrap();
            dates.push(last + Days::new(gap));
        }
        if rev {
            dates.reverse();
        }
        prop_assert_eq!(estimate_step_days(dates.clone()), Some(step as i64));
    }
}
