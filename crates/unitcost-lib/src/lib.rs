//! Per-user monthly cost calculator for AI question-answering services.
//!
//! This is a facade crate that re-exports functionality from the unitcost
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use unitcost_lib::prelude::*;
//!
//! let mut session = CostSession::default();
//! assert_eq!(session.metrics().total_cost_per_user, 20.45);
//!
//! // Doubling the user base halves everyone's share of the server cost.
//! let metrics = session.set(Parameter::NumUsers, 200.0);
//! assert_eq!(metrics.total_cost_per_user, 18.95);
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/unitcost/unitcost/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use unitcost_types::*;

// Re-export the model
pub use unitcost_model::{
    CostBreakdown, CostModel, CostSession, MAX_SWEEP_STEPS, Sweep, SweepError, SweepPoint,
    TOKENS_PER_PRICE_UNIT, WEEKS_PER_MONTH, round_to_cents,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use unitcost_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, TableFormatter,
};

/// Prelude module for convenient imports.
///
/// ```
/// use unitcost_lib::prelude::*;
/// ```
pub mod prelude {
    pub use unitcost_types::{
        InputParameters, Metric, OutputMetrics, Parameter, Result, UnitcostError, coerce_number,
    };

    pub use unitcost_model::{CostBreakdown, CostModel, CostSession, Sweep, SweepPoint};

    #[cfg(feature = "format")]
    pub use unitcost_format::{
        CsvFormatter, Formatter, JsonFormatter, OutputFormat, TableFormatter,
    };
}
