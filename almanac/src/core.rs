use almanac_core::{AlmanacConfig, AlmanacError, SearchMode, parse_date};
use chrono::NaiveDate;

/// Entry point that threads an explicit [`AlmanacConfig`] into series operations.
#[derive(Debug, Clone)]
pub struct Almanac {
    pub(crate) cfg: AlmanacConfig,
}

/// Builder for constructing an `Almanac` with custom configuration.
#[derive(Debug, Clone)]
pub struct AlmanacBuilder {
    cfg: AlmanacConfig,
}

impl Default for AlmanacBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AlmanacBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Defaults: ISO dates (`%Y-%m-%d`), exact lookups without tolerance,
    /// frequency inference on, 365 traded days per year.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: AlmanacConfig::default(),
        }
    }

    /// Start from a complete configuration, e.g. one deserialized from a file.
    #[must_use]
    pub fn config(mut self, cfg: AlmanacConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the `chrono` format used to parse date strings.
    #[must_use]
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.cfg.date_format = format.into();
        self
    }

    /// Set the search mode used by [`Almanac::get`].
    ///
    /// `Exact` fails on any missing date; the other modes resolve to a nearby
    /// stored date, bounded by [`AlmanacBuilder::default_tolerance_days`].
    #[must_use]
    pub const fn default_search(mut self, mode: SearchMode) -> Self {
        self.cfg.default_search = mode;
        self
    }

    /// Bound how far [`Almanac::get`] may move from the requested date.
    #[must_use]
    pub const fn default_tolerance_days(mut self, days: Option<u32>) -> Self {
        self.cfg.default_tolerance_days = days;
        self
    }

    /// Toggle frequency inference for series built without an explicit frequency.
    #[must_use]
    pub const fn infer_frequency(mut self, yes: bool) -> Self {
        self.cfg.infer_frequency = yes;
        self
    }

    /// Set the number of periods per year used to annualize daily statistics.
    #[must_use]
    pub const fn traded_days(mut self, days: u32) -> Self {
        self.cfg.traded_days = days;
        self
    }

    /// Build the `Almanac`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the date format is empty or cannot render and
    /// re-parse a calendar date, or if `traded_days` is outside `1..=366`.
    pub fn build(self) -> Result<Almanac, AlmanacError> {
        validate(&self.cfg)?;
        Ok(Almanac { cfg: self.cfg })
    }
}

fn validate(cfg: &AlmanacConfig) -> Result<(), AlmanacError> {
    if cfg.date_format.trim().is_empty() {
        return Err(AlmanacError::invalid_arg("date_format must not be empty"));
    }
    // A usable format must carry a full date: render a probe date and read it back.
    let probe = NaiveDate::from_ymd_opt(2001, 12, 31)
        .ok_or_else(|| AlmanacError::invalid_arg("probe date out of range"))?;
    let mut rendered = String::new();
    if std::fmt::write(&mut rendered, format_args!("{}", probe.format(&cfg.date_format))).is_err()
        || parse_date(&rendered, &cfg.date_format).ok() != Some(probe)
    {
        return Err(AlmanacError::invalid_arg(format!(
            "date_format {:?} does not identify a calendar date",
            cfg.date_format
        )));
    }
    if !(1..=366).contains(&cfg.traded_days) {
        return Err(AlmanacError::invalid_arg(format!(
            "traded_days must be within 1..=366, got {}",
            cfg.traded_days
        )));
    }
    Ok(())
}

impl Almanac {
    /// Start building a new `Almanac` instance.
    ///
    /// ```
    /// use almanac::{Almanac, SearchMode};
    ///
    /// let almanac = Almanac::builder()
    ///     .date_format("%d/%m/%Y")
    ///     .default_search(SearchMode::Previous)
    ///     .default_tolerance_days(Some(5))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(almanac.config().date_format, "%d/%m/%Y");
    /// ```
    #[must_use]
    pub fn builder() -> AlmanacBuilder {
        AlmanacBuilder::new()
    }

    /// Build an `Almanac` from a complete configuration.
    ///
    /// # Errors
    /// Same validation as [`AlmanacBuilder::build`].
    pub fn from_config(cfg: AlmanacConfig) -> Result<Self, AlmanacError> {
        AlmanacBuilder::new().config(cfg).build()
    }

    /// The configuration every operation reads.
    #[must_use]
    pub const fn config(&self) -> &AlmanacConfig {
        &self.cfg
    }
}
