//! # Core Types
//!
//! The shared vocabulary of the calculator: the seven form fields, the
//! `TradeParameters` snapshot they live in, and the `DerivedMetrics` computed
//! from it. This crate has no logic beyond parsing raw input text.

pub mod enums;
pub mod error;
pub mod structs;
pub mod value;

// Re-export the core types to provide a clean public API.
pub use enums::Field;
pub use error::CoreError;
pub use structs::{DerivedMetrics, FieldUpdate, TradeParameters, MAX_RATIO_DECIMALS};
pub use value::parse_numeric;
