//! Calc command implementation.
//!
//! This module resolves the input parameters and prints either the rounded
//! monthly metrics or the unrounded breakdown behind them.

use anyhow::Result;
use unitcost_lib::prelude::*;

use crate::display::{Format, Output};
use crate::inputs::ParamArgs;

/// Compute and print the metrics for the resolved parameters.
pub(crate) fn calc(params: &ParamArgs, format: Format, breakdown: bool, quiet: bool) -> Result<()> {
    let inputs = params.resolve()?;
    let model = CostModel::global();
    let title = (!quiet).then_some("Calculated Costs");
    let output = Output::new(format, title);
    let stdout = std::io::stdout().lock();

    if breakdown {
        output.write_breakdown(&model.breakdown(&inputs), stdout)?;
    } else {
        output.write_metrics(&model.compute(&inputs), stdout)?;
    }

    Ok(())
}
