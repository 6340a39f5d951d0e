//! Forecast assumptions shared by every business-model variant

mod growth;
mod costs;
mod horizon;

pub use growth::{compound_factor, pct, GrowthAssumptions};
pub use costs::CostStructure;
pub use horizon::ForecastHorizon;

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Read a number field, treating JSON `null` as 0
pub(crate) fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Read a name -> number map, treating `null` values as 0
pub(crate) fn null_values_as_zero<'de, D>(deserializer: D) -> Result<HashMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = HashMap::<String, Option<f64>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(key, value)| (key, value.unwrap_or(0.0)))
        .collect())
}
