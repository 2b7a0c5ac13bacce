//! Derived monthly metrics.

use serde::{Deserialize, Serialize};

/// What unit a metric is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// Currency amount.
    Cost,
    /// Megabytes.
    Storage,
}

/// One named output of the cost model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    /// Monthly token spend per user.
    TokenCostPerUser,
    /// Monthly total spend per user.
    TotalCostPerUser,
    /// Monthly storage added across all users, in MB.
    TotalStorageDemand,
}

impl Metric {
    /// Returns the camelCase key of the metric.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::TokenCostPerUser => "tokenCostPerUser",
            Self::TotalCostPerUser => "totalCostPerUser",
            Self::TotalStorageDemand => "totalStorageDemand",
        }
    }

    /// Returns the human-readable label of the metric.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::TokenCostPerUser => "Token Cost per User per Month",
            Self::TotalCostPerUser => "Total Cost per User per Month",
            Self::TotalStorageDemand => "Total Additional Storage Demand per Month (MB)",
        }
    }

    /// Returns the unit the metric is expressed in.
    #[must_use]
    pub const fn kind(&self) -> MetricKind {
        match self {
            Self::TokenCostPerUser | Self::TotalCostPerUser => MetricKind::Cost,
            Self::TotalStorageDemand => MetricKind::Storage,
        }
    }

    /// Returns all metrics in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::TokenCostPerUser,
            Self::TotalCostPerUser,
            Self::TotalStorageDemand,
        ]
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The three derived monthly metrics, rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputMetrics {
    /// Monthly token spend per user.
    pub token_cost_per_user: f64,
    /// Monthly total spend per user, including the shared base cost.
    pub total_cost_per_user: f64,
    /// Monthly storage added across all users, in MB.
    pub total_storage_demand: f64,
}

impl OutputMetrics {
    /// Creates a new set of metrics.
    #[must_use]
    pub const fn new(
        token_cost_per_user: f64,
        total_cost_per_user: f64,
        total_storage_demand: f64,
    ) -> Self {
        Self {
            token_cost_per_user,
            total_cost_per_user,
            total_storage_demand,
        }
    }

    /// Returns the value of a single metric.
    #[must_use]
    pub const fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::TokenCostPerUser => self.token_cost_per_user,
            Metric::TotalCostPerUser => self.total_cost_per_user,
            Metric::TotalStorageDemand => self.total_storage_demand,
        }
    }

    /// Iterates over `(metric, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::all().iter().map(move |&m| (m, self.get(m)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_kind() {
        assert_eq!(Metric::TokenCostPerUser.kind(), MetricKind::Cost);
        assert_eq!(Metric::TotalCostPerUser.kind(), MetricKind::Cost);
        assert_eq!(Metric::TotalStorageDemand.kind(), MetricKind::Storage);
    }

    #[test]
    fn test_iter_order() {
        let metrics = OutputMetrics::new(1.45, 20.45, 8000.0);
        let values: Vec<_> = metrics.iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec![1.45, 20.45, 8000.0]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string(&OutputMetrics::new(1.45, 20.45, 8000.0)).unwrap();
        assert_eq!(
            json,
            r#"{"tokenCostPerUser":1.45,"totalCostPerUser":20.45,"totalStorageDemand":8000.0}"#
        );
    }
}
