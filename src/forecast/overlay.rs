//! Global growth overlay
//!
//! Applied to every variant's revenue regardless of any growth already built into
//! the variant formula. Marketplace and Generic therefore compound twice when both
//! their own rate and the global rate are non-zero.

use crate::assumptions::GrowthAssumptions;

/// Scale a month's revenue by (1 + monthlyGrowthRate)^(month-1)
pub fn apply_growth_overlay(revenue: f64, growth: &GrowthAssumptions, month: u32) -> f64 {
    revenue * growth.overlay_factor(month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::revenue::compute_revenue;
    use crate::forecast::state::CumulativeState;
    use crate::model::{MarketplaceParams, ModelParameters};
    use approx::assert_relative_eq;

    #[test]
    fn test_month_one_untouched() {
        let growth = GrowthAssumptions::with_monthly_growth(5.0);
        assert_eq!(apply_growth_overlay(833.75, &growth, 1), 833.75);
    }

    #[test]
    fn test_overlay_compounds_monthly() {
        let growth = GrowthAssumptions::with_monthly_growth(5.0);
        assert_relative_eq!(apply_growth_overlay(1_000.0, &growth, 3), 1_102.5, epsilon = 1e-9);
    }

    #[test]
    fn test_marketplace_compounds_twice() {
        let params = ModelParameters::Marketplace(MarketplaceParams {
            base_gmv: 50_000.0,
            take_rate: 3.0,
            monthly_growth_rate: 8.0,
        });
        let growth = GrowthAssumptions::with_monthly_growth(8.0);

        let base = compute_revenue(&params, 3, CumulativeState::ZERO).revenue;
        let overlaid = apply_growth_overlay(base, &growth, 3);

        assert_relative_eq!(overlaid, 1_500.0 * 1.08_f64.powi(4), epsilon = 1e-9);
    }
}
