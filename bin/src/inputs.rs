//! Building input parameters from command-line arguments.
//!
//! Values are layered: defaults, then the `--params` file, then per-field
//! flags, then `--set` assignments. Field values are raw text and go through
//! the same coercion as a numeric form field, so `--num-users abc` sets `0`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use unitcost_lib::prelude::*;

/// Arguments shared by every command that needs input parameters.
#[derive(Args, Debug, Default)]
pub(crate) struct ParamArgs {
    /// JSON file with parameters; missing keys keep their defaults
    #[arg(short, long, value_name = "FILE")]
    pub(crate) params: Option<PathBuf>,

    /// Set a parameter, e.g. --set numUsers=250 (repeatable)
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    pub(crate) set: Vec<String>,

    /// Base server/infrastructure cost per month ($)
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    pub(crate) base_server_cost: Option<String>,

    /// Input token cost ($ per 1M tokens)
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    pub(crate) input_token_cost: Option<String>,

    /// Output token cost ($ per 1M tokens)
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    pub(crate) output_token_cost: Option<String>,

    /// Average input tokens per question
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    pub(crate) avg_input_tokens: Option<String>,

    /// Average output tokens per question
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    pub(crate) avg_output_tokens: Option<String>,

    /// File ingestion cost ($ per MB)
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    pub(crate) ingestion_cost: Option<String>,

    /// Files uploaded per week per user
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    pub(crate) files_per_week: Option<String>,

    /// Average file size (MB)
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    pub(crate) avg_file_size: Option<String>,

    /// Number of users
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    pub(crate) num_users: Option<String>,

    /// Questions per week per user
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    pub(crate) questions_per_week: Option<String>,
}

impl ParamArgs {
    /// Returns the per-field flags that were given, in schema order.
    fn field_flags(&self) -> [(Parameter, Option<&str>); 10] {
        [
            (Parameter::BaseServerCost, self.base_server_cost.as_deref()),
            (Parameter::InputTokenCost, self.input_token_cost.as_deref()),
            (Parameter::OutputTokenCost, self.output_token_cost.as_deref()),
            (Parameter::AvgInputTokens, self.avg_input_tokens.as_deref()),
            (Parameter::AvgOutputTokens, self.avg_output_tokens.as_deref()),
            (Parameter::IngestionCost, self.ingestion_cost.as_deref()),
            (Parameter::FilesPerWeek, self.files_per_week.as_deref()),
            (Parameter::AvgFileSize, self.avg_file_size.as_deref()),
            (Parameter::NumUsers, self.num_users.as_deref()),
            (Parameter::QuestionsPerWeek, self.questions_per_week.as_deref()),
        ]
    }

    /// Resolves the layered parameters.
    pub(crate) fn resolve(&self) -> Result<InputParameters> {
        let mut inputs = match &self.params {
            Some(path) => InputParameters::from_json_file(path)
                .with_context(|| format!("Failed to load parameters from {}", path.display()))?,
            None => InputParameters::default(),
        };

        for (parameter, raw) in self.field_flags() {
            if let Some(raw) = raw {
                let value = inputs.set_raw(parameter, raw);
                tracing::debug!(%parameter, raw, value, "parameter set from flag");
            }
        }

        for assignment in &self.set {
            let (parameter, value) = inputs
                .apply_assignment(assignment)
                .with_context(|| format!("Invalid --set value: {assignment}"))?;
            tracing::debug!(%parameter, value, "parameter set from --set");
        }

        Ok(inputs)
    }
}
