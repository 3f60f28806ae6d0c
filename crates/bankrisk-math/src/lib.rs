//! # bankrisk Math
//!
//! Statistical utilities shared by the bankrisk calculators.
//!
//! This crate provides:
//!
//! - **Descriptive statistics**: mean, population standard deviation, maximum
//! - **Quantiles**: percentiles with linear interpolation between order statistics
//! - **Distributions**: standard normal quantile function
//!
//! ## Conventions
//!
//! - Percentiles follow the common "linear" definition: the rank of the
//!   `p`-quantile in a sorted sample of size `n` is `p * (n - 1)`.
//! - Standard deviations are population (divide by `n`), not sample.
//! - Empty samples are an error, never `NaN`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod statistics;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::statistics::{
        max, mean, normal_quantile, percentile, percentile_sorted, population_std_dev,
        SampleSummary,
    };
}

pub use error::{MathError, MathResult};
