//! Single-parameter sweeps.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use unitcost_types::{InputParameters, OutputMetrics, Parameter};

use crate::CostModel;

/// Largest number of values a single sweep may produce.
pub const MAX_SWEEP_STEPS: usize = 1_000_000;

/// Errors for invalid sweep definitions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    /// A sweep needs at least one step.
    #[error("Sweep needs at least one step")]
    NoSteps,

    /// A sweep is limited to [`MAX_SWEEP_STEPS`] values.
    #[error("Sweep of {steps} steps exceeds the limit of {max}")]
    TooManySteps {
        /// The requested number of steps.
        steps: usize,
        /// The largest accepted number of steps.
        max: usize,
    },

    /// Sweep bounds must be finite.
    #[error("Sweep bounds must be finite, got {start}..={end}")]
    NonFiniteBounds {
        /// The start value.
        start: f64,
        /// The end value.
        end: f64,
    },
}

/// Metrics for one value of the swept parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepPoint {
    /// The value the parameter was set to.
    pub value: f64,
    /// Metrics computed with that value.
    pub metrics: OutputMetrics,
}

/// Evenly spaced values of one parameter, endpoints included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    parameter: Parameter,
    start: f64,
    end: f64,
    steps: usize,
}

impl Sweep {
    /// Creates a sweep of `steps` values from `start` to `end`.
    ///
    /// A single step yields `start` only.
    ///
    /// # Errors
    ///
    /// Returns an error if `steps` is zero or above [`MAX_SWEEP_STEPS`], or if
    /// either bound is not finite.
    pub fn new(parameter: Parameter, start: f64, end: f64, steps: usize) -> Result<Self, SweepError> {
        if steps == 0 {
            return Err(SweepError::NoSteps);
        }
        if steps > MAX_SWEEP_STEPS {
            return Err(SweepError::TooManySteps {
                steps,
                max: MAX_SWEEP_STEPS,
            });
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(SweepError::NonFiniteBounds { start, end });
        }
        Ok(Self {
            parameter,
            start,
            end,
            steps,
        })
    }

    /// Returns the swept parameter.
    #[must_use]
    pub const fn parameter(&self) -> Parameter {
        self.parameter
    }

    /// Returns the number of values in the sweep.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.steps
    }

    /// Always false; a sweep has at least one step.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the swept values in order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        let span = self.end - self.start;
        let last = self.steps.saturating_sub(1);
        (0..self.steps).map(move |i| {
            if i == last && last > 0 {
                self.end
            } else if last == 0 {
                self.start
            } else {
                self.start + span * (i as f64 / last as f64)
            }
        })
    }

    /// Computes metrics for every value, starting each time from `base`.
    #[must_use]
    pub fn run(&self, model: &CostModel, base: &InputParameters) -> Vec<SweepPoint> {
        tracing::debug!(
            parameter = %self.parameter,
            start = self.start,
            end = self.end,
            steps = self.steps,
            "running sweep"
        );
        self.values()
            .map(|value| SweepPoint {
                value,
                metrics: model.compute(&base.with(self.parameter, value)),
            })
            .collect()
    }
}
