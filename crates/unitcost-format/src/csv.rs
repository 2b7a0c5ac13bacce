//! CSV output format.

use std::io::Write;

use unitcost_model::{CostBreakdown, SweepPoint};
use unitcost_types::{InputParameters, Metric, OutputMetrics, Parameter};

use crate::formatter::breakdown_rows;
use crate::{FormatError, Formatter};

/// CSV formatter.
#[derive(Debug, Clone, Default)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }

    fn write_header<W: Write>(&self, writer: &mut W, columns: &[&str]) -> Result<(), FormatError> {
        if self.include_header {
            let sep = self.delimiter.to_string();
            writeln!(writer, "{}", columns.join(&sep))?;
        }
        Ok(())
    }
}

impl Formatter for CsvFormatter {
    fn write_metrics<W: Write>(
        &self,
        metrics: &OutputMetrics,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;
        let keys: Vec<_> = Metric::all().iter().map(Metric::key).collect();
        self.write_header(&mut writer, &keys)?;

        writeln!(
            writer,
            "{}{d}{}{d}{}",
            metrics.token_cost_per_user, metrics.total_cost_per_user, metrics.total_storage_demand
        )?;
        Ok(())
    }

    fn write_breakdown<W: Write>(
        &self,
        breakdown: &CostBreakdown,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;
        self.write_header(&mut writer, &["name", "value"])?;

        for (name, value) in breakdown_rows(breakdown) {
            writeln!(writer, "{name}{d}{value}")?;
        }
        Ok(())
    }

    fn write_sweep<W: Write>(
        &self,
        parameter: Parameter,
        points: &[SweepPoint],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;
        let mut columns = vec![parameter.key()];
        columns.extend(Metric::all().iter().map(Metric::key));
        self.write_header(&mut writer, &columns)?;

        for point in points {
            let m = &point.metrics;
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}",
                point.value, m.token_cost_per_user, m.total_cost_per_user, m.total_storage_demand
            )?;
        }
        Ok(())
    }

    fn write_parameters<W: Write>(
        &self,
        params: &InputParameters,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;
        self.write_header(&mut writer, &["key", "value", "label"])?;

        for (parameter, value) in params.iter() {
            // Labels are free text, always quoted.
            writeln!(writer, "{}{d}{}{d}\"{}\"", parameter.key(), value, parameter.label())?;
        }
        Ok(())
    }
}
