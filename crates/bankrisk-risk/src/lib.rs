//! # bankrisk-risk
//!
//! Risk calculators for banking portfolios.
//!
//! This crate provides:
//!
//! - **Credit**: PD (logistic scorecard), LGD, EAD and expected loss
//! - **Market**: VaR (historical, parametric, Monte Carlo) and historical CVaR
//! - **Operational**: loss-distribution capital requirement
//! - **Regulatory**: risk-weighted assets and Basel capital ratios
//! - **Stress**: scenario shocks over a portfolio
//!
//! Every calculator holds only the configuration given at construction and
//! is a pure function of its inputs otherwise.
//!
//! ## Example
//!
//! ```rust
//! use bankrisk_risk::prelude::*;
//!
//! let credit = CreditRiskCalculator::default();
//! let pd = credit.calculate_pd(700.0, 0.3, 0).unwrap();
//! let lgd = credit.calculate_lgd(0.0, 100_000.0).unwrap();
//! let ead = credit.calculate_ead(50_000.0, 100_000.0).unwrap();
//! let el = credit.calculate_expected_loss(pd, lgd, ead);
//! assert!(el > 0.0);
//!
//! let market = MarketRiskCalculator::new(0.95).unwrap();
//! let returns = [-0.02, -0.01, 0.0, 0.01, 0.02];
//! let var = market.calculate_var(&returns, VarMethod::Historical).unwrap();
//! assert!(var < 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]

pub mod credit;
pub mod market;
pub mod operational;
pub mod regulatory;
pub mod stress;
mod error;

pub use error::{RiskError, RiskResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::credit::{
        BorrowerProfile, CreditFacility, CreditRiskCalculator, CreditRiskMetrics, PdModel,
    };
    pub use crate::market::{MarketRiskCalculator, VarMethod};
    pub use crate::operational::{LossEvent, OperationalRiskCalculator, OperationalRiskCapital};
    pub use crate::regulatory::{
        CapitalRatios, CapitalRequirements, ComplianceCheck, ExposureRow, ExposureType,
        RegulatoryReporting, RiskWeightTable, RwaRow, RwaSummary,
    };
    pub use crate::stress::{
        AssetClass, Position, StressScenario, StressSummary, StressTestEngine, StressedPosition,
    };
    pub use crate::{RiskError, RiskResult};
}
