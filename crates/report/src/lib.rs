//! # Trade Summary Report
//!
//! The presentation side of the calculator: it turns a `TradeParameters`
//! snapshot and its `DerivedMetrics` into the ten-row summary shown to the user,
//! and exports that summary as a document.
//!
//! ## Architectural Principles
//!
//! - **Consumer of the core:** this crate reads snapshots and metrics, it never
//!   updates them. The `risk` crate knows nothing about it.
//! - **Export as a capability:** documents are produced by a
//!   `DocumentExporter` from a finished `SummaryView`. Drivers decide when to
//!   export; the calculator never does.
//!
//! ## Public API
//!
//! - `SummaryView` / `ViewOptions`: the rendered rows.
//! - `render_table`: the `comfy-table` rendering used on screen and in text documents.
//! - `DocumentExporter`, `TextExporter`, `JsonExporter`, `export_view`.
//! - `Clock`, `SystemClock`, `FixedClock`, `format_timestamp`.
//! - `group_thousands` and friends.
//! - `ReportError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod clock;
pub mod error;
pub mod export;
pub mod format;
pub mod labels;
pub mod render;
pub mod view;

// Re-export the key components to create a clean, public-facing API.
pub use clock::{format_timestamp, Clock, FixedClock, SystemClock};
pub use error::ReportError;
pub use export::{export_file_name, export_view, exporter_for, DocumentExporter, JsonExporter, TextExporter};
pub use format::{format_amount, format_input, group_thousands};
pub use labels::Labels;
pub use render::{render_table, FLAG_MARKER};
pub use view::{RowKind, SummaryRow, SummaryView, ViewOptions};
