//! Cost derivation logic.

use std::sync::OnceLock;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use unitcost_types::{InputParameters, OutputMetrics};

/// Weeks in a billing month for every monthly projection.
pub const WEEKS_PER_MONTH: f64 = 4.0;

/// Token prices are quoted per this many tokens.
pub const TOKENS_PER_PRICE_UNIT: f64 = 1_000_000.0;

/// Static model instance.
static MODEL: OnceLock<CostModel> = OnceLock::new();

/// Rounds to 2 decimal places, half away from zero.
///
/// The tie is judged on the exact binary value of `value`, not on a scaled
/// copy: `1.005` and `0.015` are stored just below the tie and round down,
/// while the exact tie `0.125` becomes `0.13`. Non-finite values are returned
/// unchanged, as are magnitudes too large to carry a fractional part.
#[must_use]
pub fn round_to_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    if value.abs() < 0.001 {
        return 0.0;
    }
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };
    // Parsing the decimal text gives the f64 nearest to the rounded amount.
    exact
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_string()
        .parse()
        .unwrap_or(value)
}

/// Unrounded intermediate values of one cost computation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Token spend for a single question.
    pub token_cost_per_question: f64,
    /// Monthly token spend per user.
    pub token_cost_per_user: f64,
    /// Monthly file ingestion spend per user.
    pub ingestion_cost_per_user: f64,
    /// Each user's share of the base server cost.
    pub base_cost_per_user: f64,
    /// Monthly total spend per user.
    pub total_cost_per_user: f64,
    /// Monthly storage added across all users, in MB.
    pub total_storage_demand: f64,
    /// Base server cost carried by nobody because there are no users.
    pub unallocated_base_cost: f64,
}

impl CostBreakdown {
    /// Rounds the reported metrics to 2 decimal places.
    #[must_use]
    pub fn rounded(&self) -> OutputMetrics {
        OutputMetrics::new(
            round_to_cents(self.token_cost_per_user),
            round_to_cents(self.total_cost_per_user),
            round_to_cents(self.total_storage_demand),
        )
    }
}

/// Per-user monthly cost model.
///
/// Computation is pure: the result depends only on the parameter values
/// and the configured month length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    weeks_per_month: f64,
}

impl CostModel {
    /// Creates a model that projects weekly volumes over `weeks_per_month`.
    #[must_use]
    pub const fn new(weeks_per_month: f64) -> Self {
        Self { weeks_per_month }
    }

    /// Returns the global model instance with the standard 4-week month.
    #[must_use]
    pub fn global() -> &'static Self {
        MODEL.get_or_init(|| Self::new(WEEKS_PER_MONTH))
    }

    /// Returns the number of weeks in a month used by this model.
    #[must_use]
    pub const fn weeks_per_month(&self) -> f64 {
        self.weeks_per_month
    }

    /// Computes the three monthly metrics, rounded to 2 decimal places.
    ///
    /// Never fails. With zero users the base server cost is not shared by
    /// anyone and contributes nothing to the per-user total.
    #[must_use]
    pub fn compute(&self, inputs: &InputParameters) -> OutputMetrics {
        let metrics = self.breakdown(inputs).rounded();
        tracing::trace!(?metrics, "recomputed cost metrics");
        metrics
    }

    /// Computes every intermediate value without rounding.
    #[must_use]
    pub fn breakdown(&self, inputs: &InputParameters) -> CostBreakdown {
        let weeks = self.weeks_per_month;

        let token_cost_per_question = inputs.avg_input_tokens * inputs.input_token_cost
            / TOKENS_PER_PRICE_UNIT
            + inputs.avg_output_tokens * inputs.output_token_cost / TOKENS_PER_PRICE_UNIT;

        let token_cost_per_user = token_cost_per_question * inputs.questions_per_week * weeks;

        let ingestion_cost_per_user =
            inputs.files_per_week * inputs.avg_file_size * inputs.ingestion_cost * weeks;

        let (base_cost_per_user, unallocated_base_cost) = Self::share_base_cost(inputs);

        let total_cost_per_user = token_cost_per_user + ingestion_cost_per_user + base_cost_per_user;

        let total_storage_demand =
            inputs.num_users * inputs.files_per_week * inputs.avg_file_size * weeks;

        CostBreakdown {
            token_cost_per_question,
            token_cost_per_user,
            ingestion_cost_per_user,
            base_cost_per_user,
            total_cost_per_user,
            total_storage_demand,
            unallocated_base_cost,
        }
    }

    /// Splits the base server cost across users.
    ///
    /// Returns `(per_user_share, unallocated)`.
    fn share_base_cost(inputs: &InputParameters) -> (f64, f64) {
        if inputs.num_users == 0.0 {
            (0.0, inputs.base_server_cost)
        } else {
            (inputs.base_server_cost / inputs.num_users, 0.0)
        }
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::new(WEEKS_PER_MONTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(1.446), 1.45);
        assert_eq!(round_to_cents(20.446), 20.45);
        assert_eq!(round_to_cents(8000.0), 8000.0);
        assert_eq!(round_to_cents(1.444), 1.44);
        assert_eq!(round_to_cents(-1.446), -1.45);
    }

    #[test]
    fn test_round_judges_tie_on_stored_value() {
        // Each literal is stored just below its tie.
        assert_eq!(round_to_cents(0.015), 0.01);
        assert_eq!(round_to_cents(0.045), 0.04);
        assert_eq!(round_to_cents(-0.015), -0.01);
        assert_eq!(round_to_cents(2.675), 2.67);
    }

    #[test]
    fn test_round_large_magnitudes() {
        assert_eq!(round_to_cents(4.0e12), 4.0e12);
        assert_eq!(round_to_cents(1.0e30), 1.0e30);
        assert_eq!(round_to_cents(1.0e-300), 0.0);
    }

    #[test]
    fn test_round_non_finite_passthrough() {
        assert_eq!(round_to_cents(f64::INFINITY), f64::INFINITY);
        assert_eq!(round_to_cents(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert!(round_to_cents(f64::NAN).is_nan());
    }

    #[test]
    fn test_breakdown_defaults() {
        let breakdown = CostModel::default().breakdown(&InputParameters::default());

        assert_relative_eq!(breakdown.token_cost_per_question, 0.00723, epsilon = 1e-12);
        assert_relative_eq!(breakdown.token_cost_per_user, 1.446, epsilon = 1e-9);
        assert_relative_eq!(breakdown.ingestion_cost_per_user, 16.0, epsilon = 1e-9);
        assert_relative_eq!(breakdown.base_cost_per_user, 3.0);
        assert_relative_eq!(breakdown.total_cost_per_user, 20.446, epsilon = 1e-9);
        assert_relative_eq!(breakdown.total_storage_demand, 8000.0);
        assert_eq!(breakdown.unallocated_base_cost, 0.0);
    }

    #[test]
    fn test_zero_users_leaves_base_cost_unallocated() {
        let inputs = InputParameters {
            num_users: 0.0,
            ..InputParameters::default()
        };
        let breakdown = CostModel::default().breakdown(&inputs);

        assert_eq!(breakdown.base_cost_per_user, 0.0);
        assert_eq!(breakdown.unallocated_base_cost, 300.0);
        assert!(breakdown.total_cost_per_user.is_finite());
        assert_eq!(breakdown.total_storage_demand, 0.0);
    }

    #[test]
    fn test_negative_users_divide_as_is() {
        let inputs = InputParameters {
            num_users: -50.0,
            ..InputParameters::default()
        };
        let breakdown = CostModel::default().breakdown(&inputs);
        assert_relative_eq!(breakdown.base_cost_per_user, -6.0);
    }

    #[test]
    fn test_custom_month_length() {
        let model = CostModel::new(4.345);
        let inputs = InputParameters::default();
        let breakdown = model.breakdown(&inputs);
        assert_relative_eq!(
            breakdown.total_storage_demand,
            100.0 * 10.0 * 2.0 * 4.345,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_global_model() {
        assert_eq!(CostModel::global().weeks_per_month(), WEEKS_PER_MONTH);
        assert_eq!(*CostModel::global(), CostModel::default());
    }
}
