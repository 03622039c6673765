use almanac_types::Frequency;
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Seeded geometric Brownian motion price path on a calendar.
///
/// The same seed always produces the same path, so property tests can use
/// generated series as reproducible fixtures.
#[derive(Debug, Clone)]
pub struct PriceWalk {
    seed: u64,
    start: NaiveDate,
    initial: f64,
    drift: f64,
    volatility: f64,
    frequency: Frequency,
    weekdays_only: bool,
    gap_probability: f64,
}

impl PriceWalk {
    /// A daily walk starting at 100.0 on 2020-01-01 with 5% drift and 20% volatility.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            start: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default(),
            initial: 100.0,
            drift: 0.05,
            volatility: 0.2,
            frequency: Frequency::Daily,
            weekdays_only: false,
            gap_probability: 0.0,
        }
    }

    /// First date of the path.
    #[must_use]
    pub const fn start(mut self, date: NaiveDate) -> Self {
        self.start = date;
        self
    }

    /// First value of the path.
    #[must_use]
    pub const fn initial(mut self, value: f64) -> Self {
        self.initial = value;
        self
    }

    /// Annual drift and volatility.
    #[must_use]
    pub const fn dynamics(mut self, drift: f64, volatility: f64) -> Self {
        self.drift = drift;
        self.volatility = volatility;
        self
    }

    /// Calendar step between observations. `Unknown` falls back to daily.
    #[must_use]
    pub const fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Skip Saturdays and Sundays on daily paths.
    #[must_use]
    pub const fn weekdays_only(mut self, yes: bool) -> Self {
        self.weekdays_only = yes;
        self
    }

    /// Drop each observation after the first with probability `p` to leave gaps.
    #[must_use]
    pub const fn gaps(mut self, p: f64) -> Self {
        self.gap_probability = p;
        self
    }

    fn step(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self.frequency {
            Frequency::Weekly => date.checked_add_days(Days::new(7)),
            Frequency::Monthly => date.checked_add_months(Months::new(1)),
            Frequency::Quarterly => date.checked_add_months(Months::new(3)),
            Frequency::HalfYearly => date.checked_add_months(Months::new(6)),
            Frequency::Annual => date.checked_add_months(Months::new(12)),
            _ => {
                let mut next = date.succ_opt()?;
                while self.weekdays_only && matches!(next.weekday(), Weekday::Sat | Weekday::Sun) {
                    next = next.succ_opt()?;
                }
                Some(next)
            }
        }
    }

    /// Generate up to `n` calendar steps of the walk as ascending `(date, value)` pairs.
    ///
    /// With gaps enabled fewer than `n` pairs are returned; the first step is always kept.
    #[must_use]
    pub fn generate(&self, n: usize) -> Vec<(NaiveDate, f64)> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let dt = 1.0 / self.frequency.periods_per_year(252).unwrap_or(252.0);
        let sqrt_dt = dt.sqrt();
        let mu = (self.drift - 0.5 * self.volatility * self.volatility) * dt;

        let mut out = Vec::with_capacity(n);
        let mut date = self.start;
        let mut value = self.initial;
        for i in 0..n {
            if i > 0 {
                let z: f64 = StandardNormal.sample(&mut rng);
                value *= (mu + self.volatility * sqrt_dt * z).exp();
                match self.step(date) {
                    Some(next) => date = next,
                    None => break,
                }
            }
            let dropped = i > 0 && rng.random::<f64>() < self.gap_probability;
            if !dropped {
                out.push((date, value));
            }
        }
        out
    }
}
