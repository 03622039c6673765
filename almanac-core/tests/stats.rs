use almanac_core::{
    AlmanacError, Frequency, TimeSeries, beta, correlation, jensens_alpha, max_drawdown,
    r_squared, sharpe_ratio, volatility,
};
use chrono::NaiveDate;
use proptest::prelude::*;

fn d(m: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, m, 1).unwrap()
}

fn fixture(symbol: &str) -> TimeSeries {
    TimeSeries::new(almanac_mock::series(symbol).unwrap()).unwrap()
}

fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

fn sample_sd(xs: &[f64]) -> f64 {
    let m = mean(xs);
    (xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (xs.len() - 1) as f64).sqrt()
}

#[test]
fn max_drawdown_reports_peak_and_trough() {
    let mdd = max_drawdown(&fixture("DRAWDOWN")).unwrap();
    assert_eq!(mdd.peak_date, d(2));
    assert_eq!(mdd.trough_date, d(3));
    assert!((mdd.drawdown + 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn max_drawdown_of_rising_series_is_zero() {
    let mdd = max_drawdown(&fixture("MONTHLY")).unwrap();
    assert_eq!(mdd.drawdown, 0.0);
    assert_eq!(mdd.peak_date, mdd.trough_date);
    assert!(matches!(
        max_drawdown(&TimeSeries::default()),
        Err(AlmanacError::InsufficientData { .. })
    ));
}

#[test]
fn sharpe_ratio_matches_definition() {
    let asset = fixture("ASSET");
    assert_eq!(asset.frequency(), Frequency::Monthly);
    let rs = asset.values();
    let rf = 0.03;
    let expected = (mean(&rs) - rf / 12.0) / sample_sd(&rs) * 12f64.sqrt();
    let got = sharpe_ratio(&asset, rf, 365).unwrap();
    assert!((got - expected).abs() < 1e-12);
}

#[test]
fn daily_sharpe_uses_traded_days() {
    let daily = fixture("WEEKDAYS").pct_change().unwrap();
    let a = sharpe_ratio(&daily, 0.0, 252).unwrap();
    let b = sharpe_ratio(&daily, 0.0, 365).unwrap();
    assert!((a / b - (252f64 / 365.0).sqrt()).abs() < 1e-12);
}

#[test]
fn statistics_need_spread_and_observations() {
    let flat = fixture("FLAT");
    assert!(matches!(
        sharpe_ratio(&flat, 0.0, 365),
        Err(AlmanacError::InsufficientData { .. })
    ));
    assert!(matches!(
        beta(&fixture("ASSET").head(3), &flat),
        Err(AlmanacError::UnalignedSeries { .. }) | Err(AlmanacError::InsufficientData { .. })
    ));
    let one = fixture("ASSET").head(1);
    assert!(matches!(
        volatility(&one, false, 365),
        Err(AlmanacError::InsufficientData { .. })
    ));
    assert!(matches!(
        sharpe_ratio(&fixture("ASSET").retag(Frequency::Unknown), 0.0, 365),
        Err(AlmanacError::InvalidArg(_))
    ));
}

#[test]
fn beta_and_alpha_of_a_scaled_benchmark() {
    let bench = fixture("BENCH");
    let asset = bench.mul(1.5).unwrap().add(0.001).unwrap();
    let b = beta(&asset, &bench).unwrap();
    assert!((b - 1.5).abs() < 1e-9);

    let rf = 0.024;
    let rf_p = rf / 12.0;
    let expected = mean(&asset.values()) - (rf_p + b * (mean(&bench.values()) - rf_p));
    let alpha = jensens_alpha(&asset, &bench, rf, 365).unwrap();
    assert!((alpha - expected).abs() < 1e-12);
}

#[test]
fn correlation_and_r_squared() {
    let asset = fixture("ASSET");
    let bench = fixture("BENCH");
    let c = correlation(&asset, &bench).unwrap();
    assert!(c > 0.9 && c <= 1.0);
    let r2 = r_squared(&asset, &bench).unwrap();
    assert!((r2 - c * c).abs() < 1e-15);

    let inverse = bench.mul(-2.0).unwrap();
    assert!((correlation(&inverse, &bench).unwrap() + 1.0).abs() < 1e-12);
}

#[test]
fn unaligned_inputs_are_rejected() {
    let asset = fixture("ASSET");
    let bench = fixture("BENCH").tail(11);
    assert!(matches!(
        beta(&asset, &bench),
        Err(AlmanacError::UnalignedSeries { .. })
    ));
    assert!(matches!(
        correlation(&asset, &bench),
        Err(AlmanacError::UnalignedSeries { .. })
    ));
}

#[test]
fn volatility_annualizes_by_sqrt_periods() {
    let asset = fixture("ASSET");
    let raw = volatility(&asset, false, 365).unwrap();
    assert!((raw - sample_sd(&asset.values())).abs() < 1e-15);
    let annual = volatility(&asset, true, 365).unwrap();
    assert!((annual - raw * 12f64.sqrt()).abs() < 1e-12);
}

proptest! {
    #[test]
    fn drawdown_is_bounded_and_ordered(values in proptest::collection::vec(0.01f64..1000.0, 1..12)) {
        let ts = TimeSeries::new(values.iter().enumerate().map(|(i, v)| (d(i as u32 + 1), *v))).unwrap();
        let mdd = max_drawdown(&ts).unwrap();
        prop_assert!(mdd.drawdown <= 0.0 && mdd.drawdown > -1.0);
        prop_assert!(mdd.peak_date <= mdd.trough_date);
        let peak = ts.get(mdd.peak_date).unwrap();
        let trough = ts.get(mdd.trough_date).unwrap();
        prop_assert!((trough / peak - 1.0 - mdd.drawdown).abs() < 1e-12);
    }

    #[test]
    fn correlation_is_within_unit_interval(
        a in proptest::collection::vec(-1.0f64..1.0, 12),
        b in proptest::collection::vec(-1.0f64..1.0, 12),
    ) {
        let left = TimeSeries::new(a.iter().enumerate().map(|(i, v)| (d(i as u32 + 1), *v))).unwrap();
        let right = TimeSeries::new(b.iter().enumerate().map(|(i, v)| (d(i as u32 + 1), *v))).unwrap();
        if let Ok(c) = correlation(&left, &right) {
            prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&c));
        }
    }
}
