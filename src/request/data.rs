//! Forecast request matching the parameter-entry input contract

use crate::assumptions::{CostStructure, ForecastHorizon, GrowthAssumptions};
use crate::error::Result;
use crate::forecast::{ForecastConfig, ForecastEngine, ForecastResult};
use crate::model::{resolve_parameters, BusinessModelVariant, ModelParameters};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_variant() -> String {
    BusinessModelVariant::Generic.as_str().to_string()
}

fn default_horizon_months() -> u32 {
    ForecastHorizon::default().months()
}

/// One forecast request as sent by callers (camelCase JSON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRequest {
    /// Variant tag; unknown tags run the Generic formula with a warning
    #[serde(default = "default_variant")]
    pub business_model_variant: String,

    /// Overrides for the variant's default parameters; a `null` value reads as 0
    #[serde(default, deserialize_with = "crate::assumptions::null_values_as_zero")]
    pub parameters: HashMap<String, f64>,

    #[serde(default)]
    pub growth_assumptions: GrowthAssumptions,

    #[serde(default)]
    pub cost_structure: CostStructure,

    /// Must be 12, 24, 36, 48 or 60
    #[serde(default = "default_horizon_months")]
    pub forecast_horizon_months: u32,
}

/// A request after tag lookup, parameter merging and horizon validation
#[derive(Debug, Clone)]
pub struct ResolvedRequest {
    pub parameters: ModelParameters,
    pub config: ForecastConfig,
    pub warnings: Vec<String>,
}

impl ForecastRequest {
    /// Request for a variant with default parameters, no growth, no costs, 12 months
    pub fn new(variant: BusinessModelVariant) -> Self {
        Self {
            business_model_variant: variant.as_str().to_string(),
            parameters: HashMap::new(),
            growth_assumptions: GrowthAssumptions::default(),
            cost_structure: CostStructure::default(),
            forecast_horizon_months: default_horizon_months(),
        }
    }

    pub fn with_parameter(mut self, key: &str, value: f64) -> Self {
        self.parameters.insert(key.to_string(), value);
        self
    }

    pub fn with_growth(mut self, growth: GrowthAssumptions) -> Self {
        self.growth_assumptions = growth;
        self
    }

    pub fn with_costs(mut self, costs: CostStructure) -> Self {
        self.cost_structure = costs;
        self
    }

    pub fn with_horizon(mut self, months: u32) -> Self {
        self.forecast_horizon_months = months;
        self
    }

    /// Validate the horizon, look up the variant and merge parameter overrides
    pub fn resolve(&self) -> Result<ResolvedRequest> {
        let horizon = ForecastHorizon::try_from(self.forecast_horizon_months)?;
        let (variant, warning) = BusinessModelVariant::resolve_tag(&self.business_model_variant);
        let parameters = resolve_parameters(variant, &self.parameters);

        Ok(ResolvedRequest {
            parameters,
            config: ForecastConfig {
                horizon,
                growth: self.growth_assumptions,
                costs: self.cost_structure,
            },
            warnings: warning.into_iter().collect(),
        })
    }

    /// Resolve and run the forecast
    pub fn run(&self) -> Result<ForecastResult> {
        let resolved = self.resolve()?;
        let engine = ForecastEngine::new(resolved.parameters, resolved.config);
        let mut result = engine.run()?;
        result.warnings.extend(resolved.warnings);
        Ok(result)
    }
}
