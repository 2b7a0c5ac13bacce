//! Human-readable table output.

use std::io::Write;

use unitcost_model::{CostBreakdown, SweepPoint};
use unitcost_types::{InputParameters, Metric, MetricKind, OutputMetrics, Parameter};

use crate::formatter::breakdown_rows;
use crate::{FormatError, Formatter};

/// Width of the label column.
const LABEL_WIDTH: usize = 48;

/// Width of numeric columns.
const VALUE_WIDTH: usize = 14;

/// Aligned text formatter for terminals.
#[derive(Debug, Clone, Default)]
pub struct TableFormatter {
    /// Whether to print a title line above metrics.
    title: Option<String>,
}

impl TableFormatter {
    /// Creates a new table formatter without a title.
    #[must_use]
    pub const fn new() -> Self {
        Self { title: None }
    }

    /// Sets a title printed above the metrics.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Formats a metric value with its unit, e.g. `$20.45` or `8000.00 MB`.
    #[must_use]
    pub fn format_metric(metric: Metric, value: f64) -> String {
        match metric.kind() {
            MetricKind::Cost => format_money(value),
            MetricKind::Storage => format!("{value:.2} MB"),
        }
    }
}

/// Formats a currency amount with a leading `$` and the sign before it.
fn format_money(value: f64) -> String {
    if value.is_sign_negative() && value != 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${:.2}", value.abs())
    }
}

impl Formatter for TableFormatter {
    fn write_metrics<W: Write>(
        &self,
        metrics: &OutputMetrics,
        mut writer: W,
    ) -> Result<(), FormatError> {
        if let Some(title) = &self.title {
            writeln!(writer, "{title}")?;
            writeln!(writer, "{}", "-".repeat(LABEL_WIDTH + VALUE_WIDTH))?;
        }

        for (metric, value) in metrics.iter() {
            writeln!(
                writer,
                "{:<LABEL_WIDTH$}{:>VALUE_WIDTH$}",
                metric.label(),
                Self::format_metric(metric, value)
            )?;
        }
        Ok(())
    }

    fn write_breakdown<W: Write>(
        &self,
        breakdown: &CostBreakdown,
        mut writer: W,
    ) -> Result<(), FormatError> {
        writeln!(writer, "{:<LABEL_WIDTH$}{:>VALUE_WIDTH$}", "COMPONENT", "VALUE")?;
        writeln!(writer, "{}", "-".repeat(LABEL_WIDTH + VALUE_WIDTH))?;

        for (name, value) in breakdown_rows(breakdown) {
            writeln!(writer, "{name:<LABEL_WIDTH$}{value:>VALUE_WIDTH$.6}")?;
        }

        if breakdown.unallocated_base_cost != 0.0 {
            writeln!(
                writer,
                "\nNote: no users to share the base server cost of {}.",
                format_money(breakdown.unallocated_base_cost)
            )?;
        }
        Ok(())
    }

    fn write_sweep<W: Write>(
        &self,
        parameter: Parameter,
        points: &[SweepPoint],
        mut writer: W,
    ) -> Result<(), FormatError> {
        writeln!(
            writer,
            "{:>VALUE_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$}",
            parameter.key(),
            "TOKEN/USER",
            "TOTAL/USER",
            "STORAGE (MB)"
        )?;
        writeln!(writer, "{}", "-".repeat(4 * VALUE_WIDTH + 3))?;

        for point in points {
            let m = &point.metrics;
            writeln!(
                writer,
                "{:>VALUE_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$.2}",
                point.value,
                format_money(m.token_cost_per_user),
                format_money(m.total_cost_per_user),
                m.total_storage_demand
            )?;
        }
        Ok(())
    }

    fn write_parameters<W: Write>(
        &self,
        params: &InputParameters,
        mut writer: W,
    ) -> Result<(), FormatError> {
        writeln!(writer, "{:<20} {:<LABEL_WIDTH$} {:>10}", "KEY", "LABEL", "VALUE")?;
        writeln!(writer, "{}", "-".repeat(20 + LABEL_WIDTH + 12))?;

        for (parameter, value) in params.iter() {
            writeln!(
                writer,
                "{:<20} {:<LABEL_WIDTH$} {:>10}",
                parameter.key(),
                parameter.label(),
                value
            )?;
        }
        Ok(())
    }
}
