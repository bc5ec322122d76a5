/// Pixel filters for pixcube: separable Gaussian blur and the high-boost
/// (unsharp masking) sharpener built on it.

pub mod float;
pub mod gaussian;
pub mod highboost;

pub use highboost::{HighBoost, high_boost_filter, high_boost_filter_default};
