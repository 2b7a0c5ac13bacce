//! Display utilities and output formatting for the unitcost CLI.

use std::io::Write;

use clap::ValueEnum;
use unitcost_lib::{
    CostBreakdown, CsvFormatter, FormatError, Formatter, InputParameters, JsonFormatter,
    OutputFormat, OutputMetrics, Parameter, SweepPoint, TableFormatter,
};

/// Output format for results.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum Format {
    Table,
    Csv,
    Json,
    Ndjson,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Table => Self::Table,
            Format::Csv => Self::Csv,
            Format::Json => Self::Json,
            Format::Ndjson => Self::Ndjson,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", OutputFormat::from(*self))
    }
}

/// A formatter chosen at runtime.
#[derive(Debug)]
pub(crate) enum Output {
    Table(TableFormatter),
    Csv(CsvFormatter),
    Json(JsonFormatter),
}

impl Output {
    /// Creates the formatter for `format`. The title only applies to tables.
    pub(crate) fn new(format: Format, title: Option<&str>) -> Self {
        match OutputFormat::from(format) {
            OutputFormat::Table => {
                let table = TableFormatter::new();
                Self::Table(match title {
                    Some(title) => table.with_title(title),
                    None => table,
                })
            }
            OutputFormat::Csv => Self::Csv(CsvFormatter::new()),
            OutputFormat::Json => Self::Json(JsonFormatter::new().with_pretty(true)),
            OutputFormat::Ndjson => Self::Json(JsonFormatter::ndjson()),
        }
    }
}

impl Formatter for Output {
    fn write_metrics<W: Write>(&self, metrics: &OutputMetrics, writer: W) -> Result<(), FormatError> {
        match self {
            Self::Table(f) => f.write_metrics(metrics, writer),
            Self::Csv(f) => f.write_metrics(metrics, writer),
            Self::Json(f) => f.write_metrics(metrics, writer),
        }
    }

    fn write_breakdown<W: Write>(
        &self,
        breakdown: &CostBreakdown,
        writer: W,
    ) -> Result<(), FormatError> {
        match self {
            Self::Table(f) => f.write_breakdown(breakdown, writer),
            Self::Csv(f) => f.write_breakdown(breakdown, writer),
            Self::Json(f) => f.write_breakdown(breakdown, writer),
        }
    }

    fn write_sweep<W: Write>(
        &self,
        parameter: Parameter,
        points: &[SweepPoint],
        writer: W,
    ) -> Result<(), FormatError> {
        match self {
            Self::Table(f) => f.write_sweep(parameter, points, writer),
            Self::Csv(f) => f.write_sweep(parameter, points, writer),
            Self::Json(f) => f.write_sweep(parameter, points, writer),
        }
    }

    fn write_parameters<W: Write>(
        &self,
        params: &InputParameters,
        writer: W,
    ) -> Result<(), FormatError> {
        match self {
            Self::Table(f) => f.write_parameters(params, writer),
            Self::Csv(f) => f.write_parameters(params, writer),
            Self::Json(f) => f.write_parameters(params, writer),
        }
    }
}
