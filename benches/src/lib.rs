//! Benchmark fixtures for unitcost.

use unitcost_lib::{InputParameters, Parameter};

/// A named set of inputs to benchmark against.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// Short name used as the benchmark id.
    pub name: &'static str,
    /// Inputs for the scenario.
    pub inputs: InputParameters,
}

/// Returns the benchmark scenarios.
///
/// Covers the default inputs, a deployment with no users yet (base cost is
/// left unallocated) and a large deployment with heavy usage.
pub fn scenarios() -> Vec<Scenario> {
    let defaults = InputParameters::default();
    vec![
        Scenario {
            name: "defaults",
            inputs: defaults,
        },
        Scenario {
            name: "no-users",
            inputs: defaults.with(Parameter::NumUsers, 0.0),
        },
        Scenario {
            name: "large",
            inputs: defaults
                .with(Parameter::NumUsers, 250_000.0)
                .with(Parameter::QuestionsPerWeek, 400.0)
                .with(Parameter::AvgOutputTokens, 2_000.0),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_names_unique() {
        let scenarios = scenarios();
        let mut names: Vec<_> = scenarios.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), scenarios.len());
    }
}
