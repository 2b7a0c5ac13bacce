//! JSON output format.

use std::io::Write;

use serde::Serialize;
use unitcost_model::{CostBreakdown, SweepPoint};
use unitcost_types::{InputParameters, OutputMetrics, Parameter};

use crate::{FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// A single JSON document.
    #[default]
    Document,
    /// Newline-delimited JSON (NDJSON/JSONL); sweeps emit one point per line.
    Ndjson,
}

/// Sweep results tagged with the swept parameter.
#[derive(Serialize)]
struct SweepDocument<'a> {
    parameter: Parameter,
    points: &'a [SweepPoint],
}

/// JSON formatter.
///
/// JSON has no representation for infinity or NaN, so a non-finite metric
/// (for example from an `Infinity` input) is written as `null`.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (document style only).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (document style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Document,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (document style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the output style.
    #[must_use]
    pub const fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }

    fn write_value<W: Write, T: Serialize + ?Sized>(
        &self,
        value: &T,
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.pretty && self.style == JsonStyle::Document {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_metrics<W: Write>(&self, metrics: &OutputMetrics, writer: W) -> Result<(), FormatError> {
        self.write_value(metrics, writer)
    }

    fn write_breakdown<W: Write>(
        &self,
        breakdown: &CostBreakdown,
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_value(breakdown, writer)
    }

    fn write_sweep<W: Write>(
        &self,
        parameter: Parameter,
        points: &[SweepPoint],
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Document => self.write_value(&SweepDocument { parameter, points }, writer),
            JsonStyle::Ndjson => {
                for point in points {
                    serde_json::to_writer(&mut writer, point)?;
                    writeln!(writer)?;
                }
                Ok(())
            }
        }
    }

    fn write_parameters<W: Write>(
        &self,
        params: &InputParameters,
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_value(params, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use unitcost_model::{CostModel, Sweep};

    #[test]
    fn test_json_metrics() {
        let formatter = JsonFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_metrics(&OutputMetrics::new(1.45, 20.45, 8000.0), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with('{'));
        assert!(result.contains("\"totalCostPerUser\":20.45"));
    }

    #[test]
    fn test_ndjson_sweep() {
        let formatter = JsonFormatter::ndjson();
        let sweep = Sweep::new(Parameter::QuestionsPerWeek, 0.0, 100.0, 3).unwrap();
        let points = sweep.run(&CostModel::default(), &InputParameters::default());
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_sweep(Parameter::QuestionsPerWeek, &points, &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("{\"value\":0.0"));
    }

    #[test]
    fn test_sweep_document_names_parameter() {
        let formatter = JsonFormatter::new();
        let sweep = Sweep::new(Parameter::NumUsers, 10.0, 10.0, 1).unwrap();
        let points = sweep.run(&CostModel::default(), &InputParameters::default());
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_sweep(Parameter::NumUsers, &points, &mut output)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output.into_inner()).unwrap();
        assert_eq!(value["parameter"], "numUsers");
        assert_eq!(value["points"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_pretty_breakdown() {
        let formatter = JsonFormatter::new().with_pretty(true);
        let breakdown = CostModel::default().breakdown(&InputParameters::default());
        let mut output = Cursor::new(Vec::new());

        formatter.write_breakdown(&breakdown, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains('\n'));
        assert!(result.contains("  \"unallocatedBaseCost\": 0.0"));
    }

    #[test]
    fn test_non_finite_metrics_are_null() {
        let formatter = JsonFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_metrics(&OutputMetrics::new(1.45, f64::INFINITY, f64::NAN), &mut output)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output.into_inner()).unwrap();
        assert_eq!(value["tokenCostPerUser"], 1.45);
        assert!(value["totalCostPerUser"].is_null());
        assert!(value["totalStorageDemand"].is_null());
    }
}
