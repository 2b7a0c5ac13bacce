//! Per-user monthly cost model for the unitcost calculator.
//!
//! This crate turns [`InputParameters`](unitcost_types::InputParameters) into
//! [`OutputMetrics`](unitcost_types::OutputMetrics):
//!
//! - [`CostModel`] - Pure computation of the three monthly metrics
//! - [`CostBreakdown`] - Unrounded intermediate values of one computation
//! - [`CostSession`] - Inputs plus metrics, recomputed on every change
//! - [`Sweep`] - Metrics across a range of values of one parameter

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/unitcost/unitcost/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod model;
mod session;
mod sweep;

pub use model::{CostBreakdown, CostModel, TOKENS_PER_PRICE_UNIT, WEEKS_PER_MONTH, round_to_cents};
pub use session::CostSession;
pub use sweep::{MAX_SWEEP_STEPS, Sweep, SweepError, SweepPoint};
