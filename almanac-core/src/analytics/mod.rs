//! Return and risk analytics built on date resolution.
/// Period, rolling, and annualized returns.
pub mod returns;
/// Sharpe ratio, beta, alpha, correlation, volatility, and drawdown.
pub mod stats;
