//! Output formatters for the unitcost per-user cost calculator.
//!
//! This crate provides formatters for writing metrics, breakdowns, sweeps
//! and parameter listings to various output formats:
//!
//! - [`TableFormatter`] - Aligned text for terminals
//! - [`CsvFormatter`] - CSV or TSV
//! - [`JsonFormatter`] - JSON document or NDJSON

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/unitcost/unitcost/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod table;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
pub use table::TableFormatter;
