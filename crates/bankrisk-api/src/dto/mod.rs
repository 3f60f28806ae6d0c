//! Data Transfer Objects for requests and responses.

pub mod common;
pub mod credit;
pub mod market;
pub mod operational;
pub mod regulatory;
pub mod stress;

pub use common::*;
pub use credit::*;
pub use market::*;
pub use operational::*;
pub use regulatory::*;
pub use stress::*;
