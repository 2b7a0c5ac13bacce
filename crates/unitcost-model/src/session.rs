//! Recompute-on-change session over a single set of inputs.

use unitcost_types::{InputParameters, OutputMetrics, Parameter};

use crate::{CostBreakdown, CostModel};

/// Holds the current inputs together with the metrics derived from them.
///
/// Every mutation recomputes the metrics from scratch before returning, so
/// [`CostSession::metrics`] always reflects [`CostSession::inputs`].
#[derive(Debug, Clone)]
pub struct CostSession {
    model: CostModel,
    inputs: InputParameters,
    metrics: OutputMetrics,
}

impl CostSession {
    /// Creates a session using the given model and starting inputs.
    #[must_use]
    pub fn new(model: CostModel, inputs: InputParameters) -> Self {
        let metrics = model.compute(&inputs);
        Self {
            model,
            inputs,
            metrics,
        }
    }

    /// Creates a session over the given inputs using the standard model.
    #[must_use]
    pub fn with_inputs(inputs: InputParameters) -> Self {
        Self::new(*CostModel::global(), inputs)
    }

    /// Returns the current inputs.
    #[must_use]
    pub const fn inputs(&self) -> &InputParameters {
        &self.inputs
    }

    /// Returns the metrics computed from the current inputs.
    #[must_use]
    pub const fn metrics(&self) -> OutputMetrics {
        self.metrics
    }

    /// Returns the unrounded breakdown for the current inputs.
    #[must_use]
    pub fn breakdown(&self) -> CostBreakdown {
        self.model.breakdown(&self.inputs)
    }

    /// Sets one parameter and recomputes.
    pub fn set(&mut self, parameter: Parameter, value: f64) -> OutputMetrics {
        self.inputs.set(parameter, value);
        tracing::debug!(%parameter, value, "parameter changed");
        self.recompute()
    }

    /// Coerces raw text into one parameter and recomputes.
    ///
    /// Text without a leading number stores `0`.
    pub fn set_raw(&mut self, parameter: Parameter, raw: &str) -> OutputMetrics {
        let value = self.inputs.set_raw(parameter, raw);
        tracing::debug!(%parameter, raw, value, "parameter changed from text");
        self.recompute()
    }

    /// Replaces all inputs and recomputes.
    pub fn replace(&mut self, inputs: InputParameters) -> OutputMetrics {
        self.inputs = inputs;
        tracing::debug!("inputs replaced");
        self.recompute()
    }

    /// Restores the default inputs and recomputes.
    pub fn reset(&mut self) -> OutputMetrics {
        self.replace(InputParameters::default())
    }

    fn recompute(&mut self) -> OutputMetrics {
        self.metrics = self.model.compute(&self.inputs);
        self.metrics
    }
}

impl Default for CostSession {
    fn default() -> Self {
        Self::with_inputs(InputParameters::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_has_metrics() {
        let session = CostSession::default();
        assert_eq!(session.metrics(), OutputMetrics::new(1.45, 20.45, 8000.0));
    }

    #[test]
    fn test_set_recomputes() {
        let mut session = CostSession::default();
        let metrics = session.set(Parameter::NumUsers, 300.0);

        assert_eq!(session.inputs().num_users, 300.0);
        assert_eq!(metrics, session.metrics());
        // 1.446 + 16 + 1
        assert_eq!(metrics.total_cost_per_user, 18.45);
        assert_eq!(metrics.total_storage_demand, 24000.0);
    }

    #[test]
    fn test_set_raw_invalid_text_is_zero() {
        let mut session = CostSession::default();
        let metrics = session.set_raw(Parameter::QuestionsPerWeek, "many");

        assert_eq!(session.inputs().questions_per_week, 0.0);
        assert_eq!(metrics.token_cost_per_user, 0.0);
        assert_eq!(metrics.total_cost_per_user, 19.0);
    }

    #[test]
    fn test_matches_fresh_computation_after_mutations() {
        let mut session = CostSession::default();
        session.set(Parameter::AvgFileSize, 5.0);
        session.set_raw(Parameter::IngestionCost, "0.1");
        session.set(Parameter::NumUsers, 40.0);

        let fresh = CostModel::global().compute(session.inputs());
        assert_eq!(session.metrics(), fresh);
    }

    #[test]
    fn test_reset() {
        let mut session = CostSession::with_inputs(InputParameters::zeroed());
        assert_eq!(session.metrics(), OutputMetrics::default());

        let metrics = session.reset();
        assert_eq!(session.inputs(), &InputParameters::default());
        assert_eq!(metrics.total_cost_per_user, 20.45);
    }
}
