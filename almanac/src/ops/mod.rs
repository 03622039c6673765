pub mod analytics;
pub mod series;
