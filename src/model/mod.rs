//! Business-model variants and their parameter schemas

mod variant;
mod parameters;

pub use variant::BusinessModelVariant;
pub use parameters::{
    resolve_parameters, GenericParams, HardwareSaasParams, MarketplaceParams, ModelParameters,
    SaasParams, StraightSalesParams, SubscriptionParams,
};
