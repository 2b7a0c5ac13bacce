//! Interactive command implementation.
//!
//! Presents the parameters as a menu. Picking one prompts for a new value,
//! which is coerced like any form input, and the metrics are recomputed and
//! shown straight away.

use std::fmt;

use anyhow::Result;
use inquire::error::InquireError;
use inquire::{Select, Text};
use unitcost_lib::prelude::*;

use crate::display::{Format, Output};
use crate::inputs::ParamArgs;

/// One entry of the interactive menu.
enum MenuChoice {
    Edit(Parameter, f64),
    Breakdown,
    Reset,
    Quit,
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Edit(parameter, value) => write!(f, "{} [{}]", parameter.label(), value),
            Self::Breakdown => write!(f, "Show breakdown"),
            Self::Reset => write!(f, "Reset to defaults"),
            Self::Quit => write!(f, "Quit"),
        }
    }
}

fn menu(session: &CostSession) -> Vec<MenuChoice> {
    let mut choices: Vec<_> = session
        .inputs()
        .iter()
        .map(|(parameter, value)| MenuChoice::Edit(parameter, value))
        .collect();
    choices.extend([MenuChoice::Breakdown, MenuChoice::Reset, MenuChoice::Quit]);
    choices
}

/// Returns `None` when the user cancels the prompt.
fn prompt<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Run the edit-and-recompute loop until the user quits.
pub(crate) fn interactive(params: &ParamArgs) -> Result<()> {
    let mut session = CostSession::with_inputs(params.resolve()?);
    let output = Output::new(Format::Table, Some("Calculated Costs"));

    output.write_metrics(&session.metrics(), std::io::stdout().lock())?;

    loop {
        println!();
        let Some(choice) = prompt(Select::new("Change a parameter:", menu(&session)).prompt())?
        else {
            break;
        };

        match choice {
            MenuChoice::Edit(parameter, current) => {
                let current = current.to_string();
                let Some(raw) = prompt(
                    Text::new(parameter.label())
                        .with_default(&current)
                        .with_help_message("Non-numeric input counts as 0")
                        .prompt(),
                )?
                else {
                    continue;
                };
                session.set_raw(parameter, &raw);
            }
            MenuChoice::Breakdown => {
                output.write_breakdown(&session.breakdown(), std::io::stdout().lock())?;
                continue;
            }
            MenuChoice::Reset => {
                session.reset();
            }
            MenuChoice::Quit => break,
        }

        println!();
        output.write_metrics(&session.metrics(), std::io::stdout().lock())?;
    }

    Ok(())
}
