//! Per-variant monthly revenue formulas
//!
//! Every formula works on whole-number percentages converted with [`pct`]. The
//! global growth overlay is applied afterwards by the engine, not here.

use crate::assumptions::{compound_factor, pct};
use crate::model::{
    GenericParams, HardwareSaasParams, MarketplaceParams, ModelParameters, SaasParams,
    StraightSalesParams, SubscriptionParams,
};
use super::state::CumulativeState;

/// Months where `month % 12` is at least this get the StraightSales uplift
/// (the last three months of each twelve-month cycle).
pub const SEASONAL_WINDOW_START: u32 = 9;

/// Gross revenue for one month plus the state to carry into the next
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueOutcome {
    pub revenue: f64,
    pub cumulative_state: CumulativeState,
}

impl RevenueOutcome {
    fn stateless(revenue: f64, state: CumulativeState) -> Self {
        Self {
            revenue,
            cumulative_state: state,
        }
    }
}

/// Compute one month's revenue for whichever variant `params` describes.
///
/// `month` is the 1-indexed simulation month. Stateless variants hand the incoming
/// state back unchanged.
pub fn compute_revenue(
    params: &ModelParameters,
    month: u32,
    state: CumulativeState,
) -> RevenueOutcome {
    match params {
        ModelParameters::Saas(p) => saas(p, state),
        ModelParameters::HardwareSaas(p) => RevenueOutcome::stateless(hardware_saas(p), state),
        ModelParameters::StraightSales(p) => {
            RevenueOutcome::stateless(straight_sales(p, month), state)
        }
        ModelParameters::SubscriptionProduct(p) => subscription(p, state),
        ModelParameters::Marketplace(p) => RevenueOutcome::stateless(marketplace(p, month), state),
        ModelParameters::Generic(p) => RevenueOutcome::stateless(generic(p, month), state),
    }
}

/// Shared churn/upsell shape for SAAS and subscription products
fn recurring_base(
    state: CumulativeState,
    new_members: f64,
    churn_rate: f64,
    price: f64,
    upsell_percentage: f64,
) -> RevenueOutcome {
    let churned = state.value() * pct(churn_rate);
    let cumulative_state = CumulativeState::new(state.value() + new_members - churned);

    let base = cumulative_state.value() * price;
    let revenue = base + base * pct(upsell_percentage);

    RevenueOutcome {
        revenue,
        cumulative_state,
    }
}

fn saas(p: &SaasParams, state: CumulativeState) -> RevenueOutcome {
    let new_users = p.users_per_month * pct(p.free_trial_conversion_rate);
    recurring_base(state, new_users, p.churn_rate, p.pricing_tier, p.upsell_percentage)
}

fn subscription(p: &SubscriptionParams, state: CumulativeState) -> RevenueOutcome {
    recurring_base(
        state,
        p.subscribers_per_month,
        p.churn_rate,
        p.monthly_subscription_price,
        p.upsell_percentage,
    )
}

fn hardware_saas(p: &HardwareSaasParams) -> f64 {
    let hardware_price = p.hardware_unit_cost * (1.0 + pct(p.hardware_markup));
    p.units_per_month * hardware_price + p.units_per_month * p.monthly_saas_price
}

/// Whether a 1-indexed month falls in the seasonal uplift window
pub fn in_seasonal_window(month: u32) -> bool {
    month % 12 >= SEASONAL_WINDOW_START
}

fn straight_sales(p: &StraightSalesParams, month: u32) -> f64 {
    let revenue = p.unit_price * p.units_per_month;
    if in_seasonal_window(month) {
        revenue * (1.0 + pct(p.seasonal_uplift))
    } else {
        revenue
    }
}

fn marketplace(p: &MarketplaceParams, month: u32) -> f64 {
    let gmv = p.base_gmv * compound_factor(p.monthly_growth_rate, month);
    gmv * pct(p.take_rate)
}

fn generic(p: &GenericParams, month: u32) -> f64 {
    p.monthly_revenue * compound_factor(p.growth_rate, month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BusinessModelVariant;
    use approx::assert_relative_eq;

    #[test]
    fn test_saas_first_month() {
        let params = ModelParameters::Saas(SaasParams {
            users_per_month: 100.0,
            free_trial_conversion_rate: 25.0,
            churn_rate: 5.0,
            pricing_tier: 29.0,
            upsell_percentage: 15.0,
        });

        let outcome = compute_revenue(&params, 1, CumulativeState::ZERO);

        // 25 converted users, nobody to churn yet, 725 base + 15% upsell
        assert_relative_eq!(outcome.cumulative_state.value(), 25.0);
        assert_relative_eq!(outcome.revenue, 833.75, epsilon = 1e-9);
    }

    #[test]
    fn test_saas_churn_applies_to_carried_base() {
        let params = ModelParameters::defaults(BusinessModelVariant::Saas);
        let month1 = compute_revenue(&params, 1, CumulativeState::ZERO);
        let month2 = compute_revenue(&params, 2, month1.cumulative_state);

        // 25 - 5% of 25 + 25
        assert_relative_eq!(month2.cumulative_state.value(), 48.75, epsilon = 1e-9);
    }

    #[test]
    fn test_state_clamped_when_churn_exceeds_base() {
        let params = ModelParameters::Saas(SaasParams {
            users_per_month: 0.0,
            churn_rate: 250.0,
            ..SaasParams::default()
        });
        let outcome = compute_revenue(&params, 4, CumulativeState::new(40.0));
        assert_eq!(outcome.cumulative_state.value(), 0.0);
        assert_eq!(outcome.revenue, 0.0);
    }

    #[test]
    fn test_subscription_adds_at_face_value() {
        let params = ModelParameters::SubscriptionProduct(SubscriptionParams {
            subscribers_per_month: 50.0,
            monthly_subscription_price: 20.0,
            churn_rate: 10.0,
            upsell_percentage: 0.0,
        });
        let outcome = compute_revenue(&params, 2, CumulativeState::new(100.0));
        assert_relative_eq!(outcome.cumulative_state.value(), 140.0, epsilon = 1e-9);
        assert_relative_eq!(outcome.revenue, 2_800.0, epsilon = 1e-9);
    }

    #[test]
    fn test_hardware_saas_is_stateless() {
        let params = ModelParameters::HardwareSaas(HardwareSaasParams {
            units_per_month: 10.0,
            hardware_unit_cost: 200.0,
            hardware_markup: 50.0,
            monthly_saas_price: 15.0,
        });
        let carried = CumulativeState::new(3.0);
        let outcome = compute_revenue(&params, 7, carried);
        assert_relative_eq!(outcome.revenue, 10.0 * 300.0 + 10.0 * 15.0, epsilon = 1e-9);
        assert_eq!(outcome.cumulative_state, carried);
    }

    #[test]
    fn test_straight_sales_uplift_window() {
        let params = ModelParameters::StraightSales(StraightSalesParams {
            unit_price: 100.0,
            units_per_month: 200.0,
            seasonal_uplift: 20.0,
        });

        let october = compute_revenue(&params, 10, CumulativeState::ZERO);
        assert_relative_eq!(october.revenue, 24_000.0, epsilon = 1e-9);

        // month % 12 is 9, 10, 11 for months 9-11; month 12 wraps to 0
        let uplifted: Vec<u32> = (1..=24).filter(|m| in_seasonal_window(*m)).collect();
        assert_eq!(uplifted, vec![9, 10, 11, 21, 22, 23]);

        let december = compute_revenue(&params, 12, CumulativeState::ZERO);
        assert_relative_eq!(december.revenue, 20_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_marketplace_gmv_compounds() {
        let params = ModelParameters::Marketplace(MarketplaceParams {
            base_gmv: 50_000.0,
            take_rate: 3.0,
            monthly_growth_rate: 8.0,
        });
        let outcome = compute_revenue(&params, 3, CumulativeState::ZERO);
        assert_relative_eq!(outcome.revenue, 1_749.6, epsilon = 1e-9);
    }

    #[test]
    fn test_generic_growth() {
        let params = ModelParameters::Generic(GenericParams {
            monthly_revenue: 1_000.0,
            growth_rate: 10.0,
        });
        assert_relative_eq!(compute_revenue(&params, 1, CumulativeState::ZERO).revenue, 1_000.0);
        assert_relative_eq!(
            compute_revenue(&params, 3, CumulativeState::ZERO).revenue,
            1_210.0,
            epsilon = 1e-9
        );
    }
}
