//! Global growth assumptions and compounding helpers

use serde::{Deserialize, Serialize};

/// Growth assumptions applied across every variant (all whole-number percentages)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GrowthAssumptions {
    /// % monthly growth compounded on top of the variant formula
    #[serde(deserialize_with = "super::null_as_zero")]
    pub monthly_growth_rate: f64,

    /// Carried for callers; StraightSales reads its own `seasonalUplift` parameter
    #[serde(deserialize_with = "super::null_as_zero")]
    pub seasonal_uplift: f64,

    /// Carried for callers; churn-driven variants read their own `churnRate` parameter
    #[serde(deserialize_with = "super::null_as_zero")]
    pub churn_rate: f64,
}

impl GrowthAssumptions {
    pub fn with_monthly_growth(monthly_growth_rate: f64) -> Self {
        Self {
            monthly_growth_rate,
            ..Default::default()
        }
    }

    /// Overlay factor for a 1-indexed simulation month: (1 + g)^(month-1)
    pub fn overlay_factor(&self, month: u32) -> f64 {
        compound_factor(self.monthly_growth_rate, month)
    }
}

/// Convert a whole-number percentage to a fraction
pub fn pct(value: f64) -> f64 {
    value / 100.0
}

/// (1 + rate%)^(month-1) for a 1-indexed month; month 1 is always 1.0
pub fn compound_factor(rate_pct: f64, month: u32) -> f64 {
    let periods = month.saturating_sub(1) as i32;
    (1.0 + pct(rate_pct)).powi(periods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_month_factor_is_one() {
        assert_eq!(compound_factor(5.0, 1), 1.0);
        assert_eq!(GrowthAssumptions::with_monthly_growth(12.0).overlay_factor(1), 1.0);
    }

    #[test]
    fn test_compounding() {
        assert_relative_eq!(compound_factor(8.0, 3), 1.1664, epsilon = 1e-12);
        assert_relative_eq!(
            GrowthAssumptions::with_monthly_growth(5.0).overlay_factor(13),
            1.05_f64.powi(12),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let growth: GrowthAssumptions = serde_json::from_str(r#"{"monthlyGrowthRate": 3}"#).unwrap();
        assert_eq!(growth.monthly_growth_rate, 3.0);
        assert_eq!(growth.seasonal_uplift, 0.0);
        assert_eq!(growth.churn_rate, 0.0);
    }
}
