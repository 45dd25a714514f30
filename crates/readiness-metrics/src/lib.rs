//! Metric evaluators for the readiness pipeline.
//!
//! Each evaluator is a pure function over a [`readiness_core::Frame`] (and
//! optional schema hints) returning a small typed record. The raw report
//! builder runs the full fixed battery and projects the records into the
//! flat [`readiness_core::RawReport`] shape.

pub mod builder;
pub mod coverage;
pub mod documentation;
pub mod ingestion;
pub mod quality;
pub mod refresh;
pub mod standardization;
pub mod variance;

pub use builder::{build_raw_report, build_raw_report_in_memory};
