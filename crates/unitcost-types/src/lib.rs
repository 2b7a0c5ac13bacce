//! Core types for the unitcost per-user cost calculator.
//!
//! This crate provides the data structures shared by the model, the
//! formatters and the CLI:
//!
//! - [`InputParameters`] - The ten numeric inputs of the cost model
//! - [`Parameter`] - Ordered schema of the inputs with keys, labels and defaults
//! - [`OutputMetrics`] - The three derived monthly metrics
//! - [`Metric`] - Ordered schema of the outputs with keys and labels
//! - [`coerce_number`] - Text to number coercion used by input surfaces

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/unitcost/unitcost/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod coerce;
mod error;
mod metrics;
mod parameters;

pub use coerce::coerce_number;
pub use error::{Result, UnitcostError};
pub use metrics::{Metric, MetricKind, OutputMetrics};
pub use parameters::{InputParameters, Parameter};
