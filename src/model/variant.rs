//! Business-model variant tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of revenue-model shapes the engine supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessModelVariant {
    /// Software subscription with trial conversion and churn
    #[serde(rename = "SAAS")]
    Saas,
    /// Hardware sale with a recurring software fee
    #[serde(rename = "HardwareSAAS")]
    HardwareSaas,
    /// Unit sales with a year-end seasonal uplift
    StraightSales,
    /// Subscription box style product, no trial step
    SubscriptionProduct,
    /// Take rate on compounding gross merchandise value
    Marketplace,
    /// Flat revenue with its own growth rate
    Generic,
}

impl BusinessModelVariant {
    pub const ALL: [BusinessModelVariant; 6] = [
        BusinessModelVariant::Saas,
        BusinessModelVariant::HardwareSaas,
        BusinessModelVariant::StraightSales,
        BusinessModelVariant::SubscriptionProduct,
        BusinessModelVariant::Marketplace,
        BusinessModelVariant::Generic,
    ];

    /// Tag as it appears in requests
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessModelVariant::Saas => "SAAS",
            BusinessModelVariant::HardwareSaas => "HardwareSAAS",
            BusinessModelVariant::StraightSales => "StraightSales",
            BusinessModelVariant::SubscriptionProduct => "SubscriptionProduct",
            BusinessModelVariant::Marketplace => "Marketplace",
            BusinessModelVariant::Generic => "Generic",
        }
    }

    /// Exact tag lookup
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL.into_iter().find(|v| v.as_str() == tag)
    }

    /// Tag lookup that falls back to `Generic` for unknown tags.
    ///
    /// The second element carries a warning message when the fallback was taken,
    /// so callers can surface it instead of silently substituting.
    pub fn resolve_tag(tag: &str) -> (Self, Option<String>) {
        match Self::from_tag(tag) {
            Some(variant) => (variant, None),
            None => {
                let warning = format!(
                    "Unrecognized business model variant '{}', using Generic formula",
                    tag
                );
                log::warn!("{}", warning);
                (BusinessModelVariant::Generic, Some(warning))
            }
        }
    }
}

impl fmt::Display for BusinessModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
