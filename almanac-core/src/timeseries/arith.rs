//! Elementwise arithmetic against a scalar or an aligned series.

use std::collections::BTreeMap;

use crate::AlmanacError;
use crate::timeseries::store::TimeSeries;
use crate::timeseries::util::{ensure_aligned, ensure_finite_result};

/// Right-hand side of an elementwise operation.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    /// The same number applied to every observation.
    Scalar(f64),
    /// A series with exactly the same dates.
    Series(&'a TimeSeries),
}

impl From<f64> for Operand<'_> {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl<'a> From<&'a TimeSeries> for Operand<'a> {
    fn from(ts: &'a TimeSeries) -> Self {
        Self::Series(ts)
    }
}

#[derive(Clone, Copy)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
        }
    }

    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
            Self::Div => a / b,
        }
    }
}

impl TimeSeries {
    fn elementwise(&self, rhs: Operand<'_>, op: Op) -> Result<Self, AlmanacError> {
        let mut out = BTreeMap::new();
        match rhs {
            Operand::Scalar(b) => {
                ensure_finite_result(op.name(), b)?;
                for (date, a) in self.iter() {
                    out.insert(date, ensure_finite_result(op.name(), op.apply(a, b))?);
                }
            }
            Operand::Series(other) => {
                ensure_aligned(self, other)?;
                for ((date, a), (_, b)) in self.iter().zip(other.iter()) {
                    out.insert(date, ensure_finite_result(op.name(), op.apply(a, b))?);
                }
            }
        }
        Ok(Self::from_map(out, self.frequency()))
    }

    /// Elementwise sum.
    ///
    /// # Errors
    /// - `UnalignedSeries` if `rhs` is a series with a different date set.
    /// - `InvalidValue` if any result is not finite.
    ///
    /// ```
    /// use almanac_core::TimeSeries;
    /// use chrono::NaiveDate;
    ///
    /// let d = |m| NaiveDate::from_ymd_opt(2021, m, 1).unwrap();
    /// let a = TimeSeries::new(vec![(d(1), 1.0), (d(2), 2.0)]).unwrap();
    /// let b = TimeSeries::new(vec![(d(1), 10.0), (d(2), 20.0)]).unwrap();
    /// assert_eq!(a.add(&b).unwrap().values(), vec![11.0, 22.0]);
    /// assert_eq!(a.add(0.5).unwrap().values(), vec![1.5, 2.5]);
    /// ```
    pub fn add<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self, AlmanacError> {
        self.elementwise(rhs.into(), Op::Add)
    }

    /// Elementwise difference.
    ///
    /// # Errors
    /// Same as [`TimeSeries::add`].
    pub fn sub<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self, AlmanacError> {
        self.elementwise(rhs.into(), Op::Sub)
    }

    /// Elementwise product.
    ///
    /// # Errors
    /// Same as [`TimeSeries::add`].
    pub fn mul<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self, AlmanacError> {
        self.elementwise(rhs.into(), Op::Mul)
    }

    /// Elementwise quotient.
    ///
    /// # Errors
    /// Same as [`TimeSeries::add`]; dividing by zero yields `InvalidValue`.
    pub fn div<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self, AlmanacError> {
        self.elementwise(rhs.into(), Op::Div)
    }

    /// True when both series hold the same dates with equal values.
    ///
    /// The frequency tag is not compared.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.data() == other.data()
    }
}
