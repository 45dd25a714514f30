//! Core contracts for the readiness pipeline.
//!
//! This crate defines the in-memory tabular frame, the column-role hints
//! contract, the applicability union used across check results, and the
//! canonical raw-report shape shared by the evaluators, the scoring engine,
//! and the averager.

pub mod error;
pub mod finding;
pub mod frame;
pub mod hints;
pub mod report;

pub use error::{Error, Result};
pub use finding::Finding;
pub use frame::{Cell, Frame};
pub use hints::{ColumnHint, DatetimeHint, SchemaHints};
pub use report::{round2, FileFormat, RawReport};
