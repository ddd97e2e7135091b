//! Pricing domain module.
//!
//! Retail price computation for catalog doors, implemented purely as
//! deterministic domain logic (no IO besides optional configuration loading,
//! no shared mutable state).

pub mod config;
pub mod engine;

pub use config::{
    ColorMultiplier, ConfigError, PricingConfig, SeriesRule, SetMultipliers,
    FALLBACK_SET_MULTIPLIER,
};
pub use engine::{PriceQuote, PricingEngine};
