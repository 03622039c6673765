use almanac_core::{AlmanacError, Operand, TimeSeries};
use chrono::NaiveDate;

fn d(m: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, m, 1).unwrap()
}

fn ts(values: &[f64]) -> TimeSeries {
    TimeSeries::new(values.iter().enumerate().map(|(i, v)| (d(i as u32 + 1), *v))).unwrap()
}

#[test]
fn scalar_operations_apply_to_every_value() {
    let a = ts(&[1.0, 2.0, 4.0]);
    assert_eq!(a.add(1.0).unwrap().values(), vec![2.0, 3.0, 5.0]);
    assert_eq!(a.sub(1.0).unwrap().values(), vec![0.0, 1.0, 3.0]);
    assert_eq!(a.mul(2.0).unwrap().values(), vec![2.0, 4.0, 8.0]);
    assert_eq!(a.div(2.0).unwrap().values(), vec![0.5, 1.0, 2.0]);
    assert_eq!(a.add(Operand::Scalar(0.0)).unwrap(), a);
}

#[test]
fn aligned_series_operate_elementwise() {
    let a = ts(&[1.0, 2.0, 4.0]);
    let b = ts(&[3.0, 5.0, 7.0]);
    assert_eq!(a.add(&b).unwrap().values(), vec![4.0, 7.0, 11.0]);
    assert_eq!(b.sub(&a).unwrap().values(), vec![2.0, 3.0, 3.0]);
    assert_eq!(a.mul(&b).unwrap().values(), vec![3.0, 10.0, 28.0]);
    assert_eq!(a.div(&a).unwrap().values(), vec![1.0, 1.0, 1.0]);
}

#[test]
fn differing_date_sets_are_unaligned() {
    let a = ts(&[1.0, 2.0, 4.0]);
    let b = ts(&[1.0, 2.0]);
    assert_eq!(
        a.add(&b).unwrap_err(),
        AlmanacError::UnalignedSeries {
            left_len: 3,
            right_len: 2,
        }
    );

    // Same length, different dates.
    let shifted = TimeSeries::new(vec![(d(2), 1.0), (d(3), 2.0), (d(4), 4.0)]).unwrap();
    assert!(matches!(
        a.mul(&shifted),
        Err(AlmanacError::UnalignedSeries { .. })
    ));
}

#[test]
fn non_finite_results_are_rejected() {
    let a = ts(&[1.0, 2.0]);
    assert!(matches!(a.div(0.0), Err(AlmanacError::InvalidValue(_))));
    let zeros = ts(&[1.0, 0.0]);
    assert!(matches!(a.div(&zeros), Err(AlmanacError::InvalidValue(_))));
    assert!(matches!(a.add(f64::NAN), Err(AlmanacError::InvalidValue(_))));
}

#[test]
fn equals_ignores_frequency_tag() {
    let a = ts(&[1.0, 2.0]);
    let b = a.clone().retag(almanac_core::Frequency::Unknown);
    assert!(a.equals(&b));
    assert_ne!(a, b);
    assert!(!a.equals(&ts(&[1.0, 2.5])));
}
