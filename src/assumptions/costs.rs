//! Cost structure

use serde::{Deserialize, Serialize};

/// Fixed costs charged against revenue every simulated month
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostStructure {
    /// Recurring monthly cost
    #[serde(deserialize_with = "super::null_as_zero")]
    pub monthly_cost: f64,

    /// Annual cost, amortized evenly across twelve months
    #[serde(deserialize_with = "super::null_as_zero")]
    pub annual_cost: f64,
}

impl CostStructure {
    pub fn new(monthly_cost: f64, annual_cost: f64) -> Self {
        Self {
            monthly_cost,
            annual_cost,
        }
    }

    /// Cost booked in each month: monthly + annual / 12
    pub fn monthly_total(&self) -> f64 {
        self.monthly_cost + self.annual_cost / 12.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_annual_cost_amortized() {
        let costs = CostStructure::new(1_000.0, 6_000.0);
        assert_relative_eq!(costs.monthly_total(), 1_500.0);
        assert_eq!(CostStructure::default().monthly_total(), 0.0);
    }
}
