//! The date-indexed series and the engines that operate on it.
//!
//! Modules include:
//! - `store`: the ordered, unique-keyed `TimeSeries` container
//! - `resolve`: map a requested date to a stored one by search mode
//! - `fill`: forward/backward fill onto a target date sequence
//! - `calendar` and `convert`: canonical date sequences and frequency conversion
//! - `sync`: align one series onto another's dates
/// Elementwise arithmetic against scalars and aligned series.
pub mod arith;
/// Canonical period dates and calendar shifts.
pub mod calendar;
/// Expand, shrink, and aggregate-transform between frequencies.
pub mod convert;
/// Forward and backward fill with an optional copy limit.
pub mod fill;
/// Frequency inference from date gaps.
pub mod infer;
/// Date resolution by search mode and tolerance.
pub mod resolve;
/// The `TimeSeries` container.
pub mod store;
/// Series alignment.
pub mod sync;
/// Invariant checks shared by the engines.
pub mod util;
