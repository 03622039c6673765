use chrono::NaiveDate;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn build(rows: &[(&str, f64)]) -> Vec<(NaiveDate, f64)> {
    rows.iter().map(|&(d, v)| (date(d), v)).collect()
}

pub const SYMBOLS: &[&str] = &[
    "MONTHLY", "PRICES", "DRAWDOWN", "ASSET", "BENCH", "SPARSE", "WEEKDAYS", "FLAT",
];

pub fn by_symbol(s: &str) -> Option<Vec<(NaiveDate, f64)>> {
    match s {
        // Month starts, January to June 2021.
        "MONTHLY" => Some(build(&[
            ("2021-01-01", 10.0),
            ("2021-02-01", 12.0),
            ("2021-03-01", 14.0),
            ("2021-04-01", 16.0),
            ("2021-05-01", 18.0),
            ("2021-06-01", 20.0),
        ])),
        "PRICES" => Some(build(&[
            ("2021-01-01", 10.0),
            ("2021-02-01", 12.0),
            ("2021-03-01", 14.0),
            ("2021-04-01", 16.0),
        ])),
        "DRAWDOWN" => Some(build(&[
            ("2021-01-01", 10.0),
            ("2021-02-01", 12.0),
            ("2021-03-01", 8.0),
            ("2021-04-01", 9.0),
            ("2021-05-01", 14.0),
        ])),
        // Monthly returns for 2021.
        "ASSET" => Some(build(&[
            ("2021-01-01", 0.021),
            ("2021-02-01", -0.013),
            ("2021-03-01", 0.034),
            ("2021-04-01", 0.008),
            ("2021-05-01", -0.022),
            ("2021-06-01", 0.017),
            ("2021-07-01", 0.029),
            ("2021-08-01", -0.004),
            ("2021-09-01", -0.031),
            ("2021-10-01", 0.046),
            ("2021-11-01", 0.012),
            ("2021-12-01", 0.025),
        ])),
        "BENCH" => Some(build(&[
            ("2021-01-01", 0.015),
            ("2021-02-01", -0.008),
            ("2021-03-01", 0.022),
            ("2021-04-01", 0.006),
            ("2021-05-01", -0.015),
            ("2021-06-01", 0.011),
            ("2021-07-01", 0.019),
            ("2021-08-01", 0.002),
            ("2021-09-01", -0.024),
            ("2021-10-01", 0.031),
            ("2021-11-01", 0.007),
            ("2021-12-01", 0.018),
        ])),
        // Daily closes with a holiday, a weekend, and a longer gap.
        "SPARSE" => Some(build(&[
            ("2021-01-04", 100.0),
            ("2021-01-05", 101.5),
            ("2021-01-07", 99.8),
            ("2021-01-08", 102.0),
            ("2021-01-11", 103.1),
            ("2021-01-12", 102.4),
            ("2021-01-18", 105.0),
            ("2021-01-19", 104.2),
        ])),
        // Every weekday of January 2021.
        "WEEKDAYS" => Some(
            (1..=31)
                .filter_map(|day| NaiveDate::from_ymd_opt(2021, 1, day))
                .filter(|d| chrono::Datelike::weekday(d).number_from_monday() <= 5)
                .enumerate()
                .map(|(i, d)| (d, 50.0 + i as f64 * 0.5))
                .collect(),
        ),
        "FLAT" => Some(build(&[
            ("2021-01-01", 0.01),
            ("2021-02-01", 0.01),
            ("2021-03-01", 0.01),
        ])),
        _ => None,
    }
}
