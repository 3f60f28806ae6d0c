//! bankrisk request/response boundary.
//!
//! This crate turns request documents into calculator calls and wraps the
//! results for callers such as the `bankrisk` CLI.
//!
//! ## Contracts
//!
//! - Credit risk (PD, LGD, EAD, expected loss)
//! - Value at Risk and CVaR
//! - Operational risk capital
//! - Risk-weighted assets
//! - Capital ratios with a Basel III compliance check
//! - Portfolio stress test
//!
//! ## Usage
//!
//! ```rust
//! use bankrisk_api::{ApiResponse, RiskService, VarRequest};
//!
//! let service = RiskService::with_defaults().unwrap();
//! let request = VarRequest::new(vec![-0.02, -0.01, 0.0, 0.01, 0.02]);
//! let response = ApiResponse::from_result(service.value_at_risk(&request));
//! assert!(response.success);
//! ```

pub mod dto;
pub mod error;
pub mod service;

pub use dto::*;
pub use error::{ApiError, ApiResult, ErrorBody};
pub use service::RiskService;
