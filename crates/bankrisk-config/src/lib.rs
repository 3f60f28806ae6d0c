//! bankrisk Configuration Layer
//!
//! This crate holds the settings the bankrisk calculators are built from:
//! PD model coefficients, default recovery and utilization rates, VaR
//! confidence and Monte Carlo settings, the operational capital multiplier,
//! the regulatory risk weight table and capital minimums, and reporting
//! precision.
//!
//! Configuration is read from TOML. Every field has a default, so a file
//! only names what it overrides.
//!
//! # Example
//!
//! ```rust
//! use bankrisk_config::{EngineConfig, Validate};
//!
//! let config = EngineConfig::from_toml_str(
//!     r#"
//!     [market]
//!     confidence_level = 0.99
//!     monte_carlo_seed = 42
//!     "#,
//! )
//! .unwrap();
//!
//! assert!(config.is_valid());
//! let market = config.market.build(None, None).unwrap();
//! assert_eq!(market.seed(), Some(42));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod engine;
mod error;

pub use engine::{
    CreditConfig, EngineConfig, MarketConfig, OperationalConfig, RegulatoryConfig,
    ReportingConfig, StressConfig, MAX_PRECISION,
};
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
