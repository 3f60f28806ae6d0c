//! Portfolio stress testing.
//!
//! A scenario applies independent multiplicative shocks by asset class.
//! Output rows carry the stressed value, the loss and the loss in percent.
//!
//! ```rust
//! use bankrisk_risk::stress::{AssetClass, Position, StressScenario, StressTestEngine};
//!
//! let rows = StressTestEngine::default()
//!     .run_stress_test(
//!         &[Position::new(AssetClass::Equity, 1_000_000.0)],
//!         &StressScenario::new().with_equity_shock(-0.30),
//!     )
//!     .unwrap();
//! assert!((rows[0].loss - 300_000.0).abs() < 1e-6);
//! ```

mod engine;
mod scenario;

pub use engine::{StressSummary, StressTestEngine, StressedPosition, DEFAULT_DURATION};
pub use scenario::{AssetClass, Position, StressScenario};
