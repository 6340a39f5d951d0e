//! Revenue Forecast - month-by-month revenue, cost and profit engine
//!
//! This library provides:
//! - Default parameter schemas per business-model variant with override merging
//! - Per-variant revenue formulas with carried user/subscriber state
//! - A global growth overlay, cost amortization and break-even detection
//! - Annual roll-ups, CSV export and timestamped snapshots for storage layers
//! - Parallel batch and growth-sweep scenario runs

pub mod error;
pub mod model;
pub mod assumptions;
pub mod forecast;
pub mod request;
pub mod export;
pub mod scenario;

// Re-export commonly used types
pub use error::{ForecastError, Result};
pub use model::{resolve_parameters, BusinessModelVariant, ModelParameters};
pub use assumptions::{CostStructure, ForecastHorizon, GrowthAssumptions};
pub use forecast::{
    aggregate_annual, compute_revenue, run_simulation, AnnualForecastEntry, ForecastEngine,
    ForecastResult, MonthlyForecastEntry,
};
pub use request::ForecastRequest;
pub use scenario::ScenarioRunner;
