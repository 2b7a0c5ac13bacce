//! Fields command implementation.

use std::io::Write;

use anyhow::Result;
use unitcost_lib::prelude::*;

use crate::display::{Format, Output};
use crate::inputs::ParamArgs;

/// List every input parameter with its label and resolved value.
///
/// Without `--params` or overrides the values are the built-in defaults.
pub(crate) fn list_fields(params: &ParamArgs, format: Format) -> Result<()> {
    write_fields(params, format, std::io::stdout().lock())
}

fn write_fields<W: Write>(params: &ParamArgs, format: Format, writer: W) -> Result<()> {
    let inputs = params.resolve()?;
    Output::new(format, None).write_parameters(&inputs, writer)?;
    Ok(())
}
