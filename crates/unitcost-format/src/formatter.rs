//! Output format abstraction.

use std::io::Write;

use thiserror::Error;
use unitcost_model::{CostBreakdown, SweepPoint};
use unitcost_types::{InputParameters, OutputMetrics, Parameter};

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Aligned, human-readable text.
    #[default]
    Table,
    /// CSV format.
    Csv,
    /// JSON format.
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
}

impl OutputFormat {
    /// Returns the identifier of this format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Table, Self::Csv, Self::Json, Self::Ndjson]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes the three monthly metrics.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_metrics<W: Write>(&self, metrics: &OutputMetrics, writer: W) -> Result<(), FormatError>;

    /// Writes every intermediate value of a computation.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_breakdown<W: Write>(
        &self,
        breakdown: &CostBreakdown,
        writer: W,
    ) -> Result<(), FormatError>;

    /// Writes one row per swept value of `parameter`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_sweep<W: Write>(
        &self,
        parameter: Parameter,
        points: &[SweepPoint],
        writer: W,
    ) -> Result<(), FormatError>;

    /// Writes the input parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_parameters<W: Write>(
        &self,
        params: &InputParameters,
        writer: W,
    ) -> Result<(), FormatError>;
}

/// Labelled rows of a breakdown, in display order.
pub(crate) fn breakdown_rows(breakdown: &CostBreakdown) -> [(&'static str, f64); 7] {
    [
        ("tokenCostPerQuestion", breakdown.token_cost_per_question),
        ("tokenCostPerUser", breakdown.token_cost_per_user),
        ("ingestionCostPerUser", breakdown.ingestion_cost_per_user),
        ("baseCostPerUser", breakdown.base_cost_per_user),
        ("totalCostPerUser", breakdown.total_cost_per_user),
        ("totalStorageDemand", breakdown.total_storage_demand),
        ("unallocatedBaseCost", breakdown.unallocated_base_cost),
    ]
}
