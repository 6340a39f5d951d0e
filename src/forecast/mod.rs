//! Forecast engine: revenue formulas, growth overlay, simulation loop and aggregation

mod state;
mod revenue;
mod overlay;
mod engine;
mod results;

pub use state::{CumulativeState, SimulationState};
pub use revenue::{compute_revenue, in_seasonal_window, RevenueOutcome, SEASONAL_WINDOW_START};
pub use overlay::apply_growth_overlay;
pub use engine::{run_simulation, ForecastConfig, ForecastEngine};
pub use results::{
    aggregate_annual, margin, AnnualForecastEntry, ForecastResult, ForecastSummary,
    MonthlyForecastEntry,
};
