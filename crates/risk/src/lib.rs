//! # Risk Calculator Core
//!
//! The computation model behind the trade form.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** nothing here renders, logs to a sink, or exports. The
//!   presentation layer calls in and receives values back.
//! - **Immutable snapshots:** `update_field` takes a `TradeParameters` by
//!   reference and returns a new one. `FormState` is the only holder of a
//!   mutable reference and replaces the snapshot wholesale.
//! - **No failure modes:** bad or missing input never raises an error. Derived
//!   values fall back to zero, synchronized fields fall back to empty.
//!
//! ## Public API
//!
//! - `update_field` / `FormState`: the field-update rule, including the
//!   risk-percent / risk-price synchronization.
//! - `MetricsCalculator` / `compute_metrics`: the derived metrics.
//! - `validate` / `FieldFlags`: display-only bound checks.

// Declare the modules that constitute this crate.
pub mod calculator;
pub mod error;
pub mod form;
pub mod validation;

// Re-export the key components to create a clean, public-facing API.
pub use calculator::{compute_metrics, MetricsCalculator, DEFAULT_RATIO_DECIMALS, MAX_RATIO_DECIMALS};
pub use error::RiskError;
pub use form::{update_field, FormState};
pub use validation::{validate, FieldFlags};
