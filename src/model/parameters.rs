//! Per-variant parameter records and default/override resolution
//!
//! Percentages are stored as whole numbers (25 = 25%) the way callers enter them.

use super::variant::BusinessModelVariant;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// SAAS: trial users convert into a churning paid base
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaasParams {
    /// New trial users each month
    pub users_per_month: f64,
    /// % of trial users who convert to paid
    pub free_trial_conversion_rate: f64,
    /// % of the paid base lost each month
    pub churn_rate: f64,
    /// Monthly price per paid user
    pub pricing_tier: f64,
    /// % added on top of base revenue
    pub upsell_percentage: f64,
}

impl Default for SaasParams {
    fn default() -> Self {
        Self {
            users_per_month: 100.0,
            free_trial_conversion_rate: 25.0,
            churn_rate: 5.0,
            pricing_tier: 29.0,
            upsell_percentage: 15.0,
        }
    }
}

impl SaasParams {
    fn set(&mut self, key: &str, value: f64) -> bool {
        match key {
            "usersPerMonth" => self.users_per_month = value,
            "freeTrialConversionRate" | "trialConversionRate" => {
                self.free_trial_conversion_rate = value
            }
            "churnRate" => self.churn_rate = value,
            "pricingTier" => self.pricing_tier = value,
            "upsellPercentage" => self.upsell_percentage = value,
            _ => return false,
        }
        true
    }

    fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("usersPerMonth", self.users_per_month),
            ("freeTrialConversionRate", self.free_trial_conversion_rate),
            ("churnRate", self.churn_rate),
            ("pricingTier", self.pricing_tier),
            ("upsellPercentage", self.upsell_percentage),
        ]
    }
}

/// Hardware sold at a markup plus a per-unit software fee
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareSaasParams {
    pub units_per_month: f64,
    pub hardware_unit_cost: f64,
    /// % markup over unit cost
    pub hardware_markup: f64,
    pub monthly_saas_price: f64,
}

impl Default for HardwareSaasParams {
    fn default() -> Self {
        Self {
            units_per_month: 50.0,
            hardware_unit_cost: 200.0,
            hardware_markup: 40.0,
            monthly_saas_price: 15.0,
        }
    }
}

impl HardwareSaasParams {
    fn set(&mut self, key: &str, value: f64) -> bool {
        match key {
            "unitsPerMonth" => self.units_per_month = value,
            "hardwareUnitCost" => self.hardware_unit_cost = value,
            "hardwareMarkup" => self.hardware_markup = value,
            "monthlySaasPrice" => self.monthly_saas_price = value,
            _ => return false,
        }
        true
    }

    fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("unitsPerMonth", self.units_per_month),
            ("hardwareUnitCost", self.hardware_unit_cost),
            ("hardwareMarkup", self.hardware_markup),
            ("monthlySaasPrice", self.monthly_saas_price),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StraightSalesParams {
    pub unit_price: f64,
    pub units_per_month: f64,
    /// % uplift applied in the last three months of each 12-month cycle
    pub seasonal_uplift: f64,
}

impl Default for StraightSalesParams {
    fn default() -> Self {
        Self {
            unit_price: 100.0,
            units_per_month: 200.0,
            seasonal_uplift: 20.0,
        }
    }
}

impl StraightSalesParams {
    fn set(&mut self, key: &str, value: f64) -> bool {
        match key {
            "unitPrice" => self.unit_price = value,
            "unitsPerMonth" => self.units_per_month = value,
            "seasonalUplift" => self.seasonal_uplift = value,
            _ => return false,
        }
        true
    }

    fn entries(&self) -> [(&'static str, f64); 3] {
        [
            ("unitPrice", self.unit_price),
            ("unitsPerMonth", self.units_per_month),
            ("seasonalUplift", self.seasonal_uplift),
        ]
    }
}

/// Same shape as SAAS without the trial conversion step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionParams {
    pub subscribers_per_month: f64,
    pub monthly_subscription_price: f64,
    pub churn_rate: f64,
    pub upsell_percentage: f64,
}

impl Default for SubscriptionParams {
    fn default() -> Self {
        Self {
            subscribers_per_month: 50.0,
            monthly_subscription_price: 20.0,
            churn_rate: 4.0,
            upsell_percentage: 10.0,
        }
    }
}

impl SubscriptionParams {
    fn set(&mut self, key: &str, value: f64) -> bool {
        match key {
            "subscribersPerMonth" => self.subscribers_per_month = value,
            "monthlySubscriptionPrice" => self.monthly_subscription_price = value,
            "churnRate" => self.churn_rate = value,
            "upsellPercentage" => self.upsell_percentage = value,
            _ => return false,
        }
        true
    }

    fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("subscribersPerMonth", self.subscribers_per_month),
            ("monthlySubscriptionPrice", self.monthly_subscription_price),
            ("churnRate", self.churn_rate),
            ("upsellPercentage", self.upsell_percentage),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceParams {
    /// Gross merchandise value in month 1
    pub base_gmv: f64,
    /// % of GMV kept as revenue
    pub take_rate: f64,
    /// % monthly GMV growth
    pub monthly_growth_rate: f64,
}

impl Default for MarketplaceParams {
    fn default() -> Self {
        Self {
            base_gmv: 50_000.0,
            take_rate: 3.0,
            monthly_growth_rate: 8.0,
        }
    }
}

impl MarketplaceParams {
    fn set(&mut self, key: &str, value: f64) -> bool {
        match key {
            "baseGmv" => self.base_gmv = value,
            "takeRate" => self.take_rate = value,
            "monthlyGrowthRate" => self.monthly_growth_rate = value,
            _ => return false,
        }
        true
    }

    fn entries(&self) -> [(&'static str, f64); 3] {
        [
            ("baseGmv", self.base_gmv),
            ("takeRate", self.take_rate),
            ("monthlyGrowthRate", self.monthly_growth_rate),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericParams {
    pub monthly_revenue: f64,
    /// % monthly growth
    pub growth_rate: f64,
}

impl Default for GenericParams {
    fn default() -> Self {
        Self {
            monthly_revenue: 10_000.0,
            growth_rate: 2.0,
        }
    }
}

impl GenericParams {
    fn set(&mut self, key: &str, value: f64) -> bool {
        match key {
            "monthlyRevenue" => self.monthly_revenue = value,
            "growthRate" => self.growth_rate = value,
            _ => return false,
        }
        true
    }

    fn entries(&self) -> [(&'static str, f64); 2] {
        [
            ("monthlyRevenue", self.monthly_revenue),
            ("growthRate", self.growth_rate),
        ]
    }
}

/// Resolved parameters, one typed record per variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", content = "parameters")]
pub enum ModelParameters {
    #[serde(rename = "SAAS")]
    Saas(SaasParams),
    #[serde(rename = "HardwareSAAS")]
    HardwareSaas(HardwareSaasParams),
    StraightSales(StraightSalesParams),
    SubscriptionProduct(SubscriptionParams),
    Marketplace(MarketplaceParams),
    Generic(GenericParams),
}

impl ModelParameters {
    /// Default parameter set for a variant
    pub fn defaults(variant: BusinessModelVariant) -> Self {
        match variant {
            BusinessModelVariant::Saas => ModelParameters::Saas(SaasParams::default()),
            BusinessModelVariant::HardwareSaas => {
                ModelParameters::HardwareSaas(HardwareSaasParams::default())
            }
            BusinessModelVariant::StraightSales => {
                ModelParameters::StraightSales(StraightSalesParams::default())
            }
            BusinessModelVariant::SubscriptionProduct => {
                ModelParameters::SubscriptionProduct(SubscriptionParams::default())
            }
            BusinessModelVariant::Marketplace => {
                ModelParameters::Marketplace(MarketplaceParams::default())
            }
            BusinessModelVariant::Generic => ModelParameters::Generic(GenericParams::default()),
        }
    }

    pub fn variant(&self) -> BusinessModelVariant {
        match self {
            ModelParameters::Saas(_) => BusinessModelVariant::Saas,
            ModelParameters::HardwareSaas(_) => BusinessModelVariant::HardwareSaas,
            ModelParameters::StraightSales(_) => BusinessModelVariant::StraightSales,
            ModelParameters::SubscriptionProduct(_) => BusinessModelVariant::SubscriptionProduct,
            ModelParameters::Marketplace(_) => BusinessModelVariant::Marketplace,
            ModelParameters::Generic(_) => BusinessModelVariant::Generic,
        }
    }

    /// Set a single parameter by its request key. Returns false for keys this variant doesn't have.
    pub fn set(&mut self, key: &str, value: f64) -> bool {
        match self {
            ModelParameters::Saas(p) => p.set(key, value),
            ModelParameters::HardwareSaas(p) => p.set(key, value),
            ModelParameters::StraightSales(p) => p.set(key, value),
            ModelParameters::SubscriptionProduct(p) => p.set(key, value),
            ModelParameters::Marketplace(p) => p.set(key, value),
            ModelParameters::Generic(p) => p.set(key, value),
        }
    }

    /// Name -> value view of the resolved parameters
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        let entries: Vec<(&'static str, f64)> = match self {
            ModelParameters::Saas(p) => p.entries().to_vec(),
            ModelParameters::HardwareSaas(p) => p.entries().to_vec(),
            ModelParameters::StraightSales(p) => p.entries().to_vec(),
            ModelParameters::SubscriptionProduct(p) => p.entries().to_vec(),
            ModelParameters::Marketplace(p) => p.entries().to_vec(),
            ModelParameters::Generic(p) => p.entries().to_vec(),
        };
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }

    /// Look up a parameter by key; keys the variant doesn't define read as 0
    pub fn get(&self, key: &str) -> f64 {
        self.to_map().get(key).copied().unwrap_or(0.0)
    }
}

/// Merge caller overrides onto the variant's defaults.
///
/// Keys present in `overrides` replace the default for that key only. Keys the
/// variant doesn't define are ignored. Never fails.
pub fn resolve_parameters(
    variant: BusinessModelVariant,
    overrides: &HashMap<String, f64>,
) -> ModelParameters {
    let mut params = ModelParameters::defaults(variant);

    // Reverse-sorted: freeTrialConversionRate is applied after its trialConversionRate alias
    let mut keys: Vec<&String> = overrides.keys().collect();
    keys.sort_by(|a, b| b.cmp(a));

    for key in keys {
        let value = overrides[key];
        if !params.set(key, value) {
            log::debug!("Ignoring parameter '{}' not used by {}", key, variant);
        }
    }

    params
}
