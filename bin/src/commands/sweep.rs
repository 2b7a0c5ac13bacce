//! Sweep command implementation.
//!
//! This module varies one parameter across a range while holding the others
//! at their resolved values.

use anyhow::{Context, Result};
use unitcost_lib::prelude::*;

use crate::display::{Format, Output};
use crate::inputs::ParamArgs;

/// Print the metrics for `steps` evenly spaced values of `parameter`.
pub(crate) fn sweep(
    parameter: &str,
    from: f64,
    to: f64,
    steps: usize,
    params: &ParamArgs,
    format: Format,
) -> Result<()> {
    let parameter: Parameter = parameter.parse()?;
    let base = params.resolve()?;
    let sweep = Sweep::new(parameter, from, to, steps)
        .with_context(|| format!("Invalid sweep of {parameter}"))?;

    let points = sweep.run(CostModel::global(), &base);
    Output::new(format, None).write_sweep(parameter, &points, std::io::stdout().lock())?;
    Ok(())
}
