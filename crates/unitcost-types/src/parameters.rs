//! Input parameters of the cost model and their schema.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Result, UnitcostError, coerce_number};

/// One named input of the cost model.
///
/// The variants are declared in display order; [`Parameter::all`] returns
/// them in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Parameter {
    /// Fixed monthly infrastructure cost, shared across all users.
    BaseServerCost,
    /// Price per 1,000,000 input tokens.
    InputTokenCost,
    /// Price per 1,000,000 output tokens.
    OutputTokenCost,
    /// Average input tokens consumed per question.
    AvgInputTokens,
    /// Average output tokens produced per question.
    AvgOutputTokens,
    /// Price per MB of file ingested.
    IngestionCost,
    /// Files uploaded per user per week.
    FilesPerWeek,
    /// Average uploaded file size in MB.
    AvgFileSize,
    /// Number of users sharing the base server cost.
    NumUsers,
    /// Questions asked per user per week.
    QuestionsPerWeek,
}

impl Parameter {
    /// Returns the camelCase key of the parameter.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::BaseServerCost => "baseServerCost",
            Self::InputTokenCost => "inputTokenCost",
            Self::OutputTokenCost => "outputTokenCost",
            Self::AvgInputTokens => "avgInputTokens",
            Self::AvgOutputTokens => "avgOutputTokens",
            Self::IngestionCost => "ingestionCost",
            Self::FilesPerWeek => "filesPerWeek",
            Self::AvgFileSize => "avgFileSize",
            Self::NumUsers => "numUsers",
            Self::QuestionsPerWeek => "questionsPerWeek",
        }
    }

    /// Returns the human-readable label shown next to the input.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::BaseServerCost => "Base Server/Infrastructure Cost per Month ($)",
            Self::InputTokenCost => "Input Token Cost ($ per 1M tokens)",
            Self::OutputTokenCost => "Output Token Cost ($ per 1M tokens)",
            Self::AvgInputTokens => "Average Input Tokens per Question",
            Self::AvgOutputTokens => "Average Output Tokens per Question",
            Self::IngestionCost => "File Ingestion Cost ($ per MB)",
            Self::FilesPerWeek => "Number of Files Uploaded per Week per User",
            Self::AvgFileSize => "Average File Size (MB)",
            Self::NumUsers => "Number of Users",
            Self::QuestionsPerWeek => "Number of Questions per Week per User",
        }
    }

    /// Returns the default value used when nothing else is supplied.
    #[must_use]
    pub const fn default_value(&self) -> f64 {
        match self {
            Self::BaseServerCost => 300.0,
            Self::InputTokenCost => 5.0,
            Self::OutputTokenCost => 15.0,
            Self::AvgInputTokens => 186.0,
            Self::AvgOutputTokens => 420.0,
            Self::IngestionCost => 0.20,
            Self::FilesPerWeek => 10.0,
            Self::AvgFileSize => 2.0,
            Self::NumUsers => 100.0,
            Self::QuestionsPerWeek => 50.0,
        }
    }

    /// Returns all parameters in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::BaseServerCost,
            Self::InputTokenCost,
            Self::OutputTokenCost,
            Self::AvgInputTokens,
            Self::AvgOutputTokens,
            Self::IngestionCost,
            Self::FilesPerWeek,
            Self::AvgFileSize,
            Self::NumUsers,
            Self::QuestionsPerWeek,
        ]
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Parameter {
    type Err = UnitcostError;

    /// Accepts the camelCase key, snake_case or kebab-case, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        Self::all()
            .iter()
            .copied()
            .find(|p| p.key().to_lowercase() == normalized)
            .ok_or_else(|| UnitcostError::UnknownParameter(s.to_string()))
    }
}

/// The ten numeric inputs of the cost model.
///
/// No bounds are enforced: negative and non-finite values are carried
/// through to the model unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputParameters {
    /// Fixed monthly infrastructure cost, shared across all users.
    pub base_server_cost: f64,
    /// Price per 1,000,000 input tokens.
    pub input_token_cost: f64,
    /// Price per 1,000,000 output tokens.
    pub output_token_cost: f64,
    /// Average input tokens consumed per question.
    pub avg_input_tokens: f64,
    /// Average output tokens produced per question.
    pub avg_output_tokens: f64,
    /// Price per MB of file ingested.
    pub ingestion_cost: f64,
    /// Files uploaded per user per week.
    pub files_per_week: f64,
    /// Average uploaded file size in MB.
    pub avg_file_size: f64,
    /// Number of users sharing the base server cost.
    pub num_users: f64,
    /// Questions asked per user per week.
    pub questions_per_week: f64,
}

impl InputParameters {
    /// Creates parameters with every field set to zero.
    #[must_use]
    pub const fn zeroed() -> Self {
        Self {
            base_server_cost: 0.0,
            input_token_cost: 0.0,
            output_token_cost: 0.0,
            avg_input_tokens: 0.0,
            avg_output_tokens: 0.0,
            ingestion_cost: 0.0,
            files_per_week: 0.0,
            avg_file_size: 0.0,
            num_users: 0.0,
            questions_per_week: 0.0,
        }
    }

    /// Returns the value of a single parameter.
    #[must_use]
    pub const fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::BaseServerCost => self.base_server_cost,
            Parameter::InputTokenCost => self.input_token_cost,
            Parameter::OutputTokenCost => self.output_token_cost,
            Parameter::AvgInputTokens => self.avg_input_tokens,
            Parameter::AvgOutputTokens => self.avg_output_tokens,
            Parameter::IngestionCost => self.ingestion_cost,
            Parameter::FilesPerWeek => self.files_per_week,
            Parameter::AvgFileSize => self.avg_file_size,
            Parameter::NumUsers => self.num_users,
            Parameter::QuestionsPerWeek => self.questions_per_week,
        }
    }

    /// Sets the value of a single parameter.
    pub const fn set(&mut self, parameter: Parameter, value: f64) {
        let slot = match parameter {
            Parameter::BaseServerCost => &mut self.base_server_cost,
            Parameter::InputTokenCost => &mut self.input_token_cost,
            Parameter::OutputTokenCost => &mut self.output_token_cost,
            Parameter::AvgInputTokens => &mut self.avg_input_tokens,
            Parameter::AvgOutputTokens => &mut self.avg_output_tokens,
            Parameter::IngestionCost => &mut self.ingestion_cost,
            Parameter::FilesPerWeek => &mut self.files_per_week,
            Parameter::AvgFileSize => &mut self.avg_file_size,
            Parameter::NumUsers => &mut self.num_users,
            Parameter::QuestionsPerWeek => &mut self.questions_per_week,
        };
        *slot = value;
    }

    /// Coerces raw text with [`coerce_number`] and stores the result.
    ///
    /// Returns the value that was stored.
    pub fn set_raw(&mut self, parameter: Parameter, raw: &str) -> f64 {
        let value = coerce_number(raw);
        self.set(parameter, value);
        value
    }

    /// Returns a copy with one parameter replaced.
    #[must_use]
    pub const fn with(mut self, parameter: Parameter, value: f64) -> Self {
        self.set(parameter, value);
        self
    }

    /// Applies a `key=value` assignment, coercing the value text.
    ///
    /// # Errors
    ///
    /// Returns an error if the assignment has no `=` or names an unknown
    /// parameter. A non-numeric value is not an error; it becomes `0`.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(Parameter, f64)> {
        let (key, raw) = assignment
            .split_once('=')
            .ok_or_else(|| UnitcostError::InvalidAssignment(assignment.to_string()))?;
        let parameter: Parameter = key.trim().parse()?;
        let value = self.set_raw(parameter, raw);
        Ok((parameter, value))
    }

    /// Iterates over `(parameter, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, f64)> + '_ {
        Parameter::all().iter().map(move |&p| (p, self.get(p)))
    }

    /// Parses parameters from a JSON object.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads parameters from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| UnitcostError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let params = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded parameters file");
        Ok(params)
    }
}

impl Default for InputParameters {
    fn default() -> Self {
        let mut params = Self::zeroed();
        for &p in Parameter::all() {
            params.set(p, p.default_value());
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let params = InputParameters::default();
        assert_eq!(params.base_server_cost, 300.0);
        assert_eq!(params.input_token_cost, 5.0);
        assert_eq!(params.output_token_cost, 15.0);
        assert_eq!(params.avg_input_tokens, 186.0);
        assert_eq!(params.avg_output_tokens, 420.0);
        assert_eq!(params.ingestion_cost, 0.20);
        assert_eq!(params.files_per_week, 10.0);
        assert_eq!(params.avg_file_size, 2.0);
        assert_eq!(params.num_users, 100.0);
        assert_eq!(params.questions_per_week, 50.0);
    }

    #[test]
    fn test_schema_order() {
        let keys: Vec<_> = Parameter::all().iter().map(Parameter::key).collect();
        assert_eq!(keys.len(), 10);
        assert_eq!(keys[0], "baseServerCost");
        assert_eq!(keys[8], "numUsers");
        assert_eq!(keys[9], "questionsPerWeek");
    }

    #[test]
    fn test_get_set_every_field() {
        let mut params = InputParameters::zeroed();
        for (i, &p) in Parameter::all().iter().enumerate() {
            params.set(p, i as f64 + 1.0);
        }
        for (i, (p, value)) in params.iter().enumerate() {
            assert_eq!(value, i as f64 + 1.0, "{p}");
        }
    }

    #[test]
    fn test_set_raw_coerces() {
        let mut params = InputParameters::default();
        assert_eq!(params.set_raw(Parameter::NumUsers, "250"), 250.0);
        assert_eq!(params.num_users, 250.0);
        assert_eq!(params.set_raw(Parameter::NumUsers, "lots"), 0.0);
        assert_eq!(params.num_users, 0.0);
    }

    #[test]
    fn test_parameter_parse() {
        assert_eq!(
            "numUsers".parse::<Parameter>().unwrap(),
            Parameter::NumUsers
        );
        assert_eq!(
            "num_users".parse::<Parameter>().unwrap(),
            Parameter::NumUsers
        );
        assert_eq!(
            "AVG-FILE-SIZE".parse::<Parameter>().unwrap(),
            Parameter::AvgFileSize
        );
        assert!(matches!(
            "users".parse::<Parameter>(),
            Err(UnitcostError::UnknownParameter(_))
        ));
    }

    #[test]
    fn test_apply_assignment() {
        let mut params = InputParameters::default();
        let (p, v) = params.apply_assignment("questions_per_week=80").unwrap();
        assert_eq!(p, Parameter::QuestionsPerWeek);
        assert_eq!(v, 80.0);
        assert_eq!(params.questions_per_week, 80.0);

        assert!(matches!(
            params.apply_assignment("numUsers"),
            Err(UnitcostError::InvalidAssignment(_))
        ));
        assert!(params.apply_assignment("bogus=1").is_err());
    }

    #[test]
    fn test_json_missing_fields_default() {
        let params = InputParameters::from_json_str(r#"{"numUsers": 20, "avgFileSize": 1.5}"#)
            .unwrap();
        assert_eq!(params.num_users, 20.0);
        assert_eq!(params.avg_file_size, 1.5);
        assert_eq!(params.base_server_cost, 300.0);
    }

    #[test]
    fn test_json_serializes_camel_case() {
        let json = serde_json::to_string(&InputParameters::default()).unwrap();
        assert!(json.contains("\"baseServerCost\":300.0"));
        assert!(json.contains("\"questionsPerWeek\":50.0"));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"baseServerCost": 1000, "numUsers": 10}}"#).unwrap();

        let params = InputParameters::from_json_file(file.path()).unwrap();
        assert_eq!(params.base_server_cost, 1000.0);
        assert_eq!(params.num_users, 10.0);
    }

    #[test]
    fn test_from_missing_file() {
        let err = InputParameters::from_json_file("/nonexistent/params.json").unwrap_err();
        assert!(matches!(err, UnitcostError::ReadFile { .. }));
    }
}
