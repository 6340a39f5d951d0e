//! Month-by-month forecast engine

use crate::assumptions::{CostStructure, ForecastHorizon, GrowthAssumptions};
use crate::error::{ForecastError, Result};
use crate::model::ModelParameters;
use super::overlay::apply_growth_overlay;
use super::results::{ForecastResult, MonthlyForecastEntry};
use super::revenue::compute_revenue;
use super::state::SimulationState;

/// Configuration for a forecast run
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ForecastConfig {
    /// Number of months to simulate
    pub horizon: ForecastHorizon,

    /// Global growth overlay
    pub growth: GrowthAssumptions,

    /// Fixed monthly and amortized annual costs
    pub costs: CostStructure,
}

/// Main forecast engine. Holds only immutable inputs; each run builds its own state.
#[derive(Debug, Clone)]
pub struct ForecastEngine {
    parameters: ModelParameters,
    config: ForecastConfig,
}

impl ForecastEngine {
    /// Create a new engine for resolved parameters and config
    pub fn new(parameters: ModelParameters, config: ForecastConfig) -> Self {
        Self { parameters, config }
    }

    pub fn parameters(&self) -> &ModelParameters {
        &self.parameters
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Simulate the full horizon. There is no early exit after break-even.
    pub fn run(&self) -> Result<ForecastResult> {
        let months = self.config.horizon.months();
        let mut state = SimulationState::new();
        let mut monthly = Vec::with_capacity(months as usize);

        for _month in 1..=months {
            state.advance_month();
            let entry = self.calculate_month(&mut state)?;
            monthly.push(entry);
        }

        log::info!(
            "{} forecast complete: {} months, break-even {:?}",
            self.parameters.variant(),
            months,
            state.break_even_month
        );

        ForecastResult::from_monthly(monthly, state.break_even_month)
    }

    /// Calculate revenue, costs and profit for the current month and carry state forward
    fn calculate_month(&self, state: &mut SimulationState) -> Result<MonthlyForecastEntry> {
        let month = state.month;

        let outcome = compute_revenue(&self.parameters, month, state.cumulative);
        let revenue = apply_growth_overlay(outcome.revenue, &self.config.growth, month);
        state.cumulative = outcome.cumulative_state;

        let costs = self.config.costs.monthly_total();
        let profit = revenue - costs;

        state.record_profit(profit);

        Ok(MonthlyForecastEntry {
            month: state.month_in_year,
            year: state.year,
            revenue: round_currency(revenue, month, "revenue")?,
            costs: round_currency(costs, month, "costs")?,
            profit: round_currency(profit, month, "profit")?,
        })
    }
}

/// Round to whole currency units, rejecting NaN/infinite figures and values beyond i64
fn round_currency(value: f64, month: u32, field: &'static str) -> Result<i64> {
    let rounded = value.round();
    if !rounded.is_finite() || rounded.abs() >= i64::MAX as f64 {
        return Err(ForecastError::NonFiniteValue { month, field });
    }
    Ok(rounded as i64)
}

/// Run one forecast from resolved parameters
pub fn run_simulation(
    parameters: ModelParameters,
    growth: GrowthAssumptions,
    costs: CostStructure,
    horizon: ForecastHorizon,
) -> Result<ForecastResult> {
    let config = ForecastConfig {
        horizon,
        growth,
        costs,
    };
    ForecastEngine::new(parameters, config).run()
}
