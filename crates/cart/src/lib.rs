//! Mercato Cart - shopping cart pricing and promo-code engine.
//!
//! The engine is a passive, caller-owned value: construct one
//! [`CartEngine`] per session, mutate it through its public operations, and
//! read the recomputed totals after every call. There is no global state and
//! no observer mechanism - the UI layer renders whatever the accessors
//! return.
//!
//! The one async boundary is [`CartEngine::apply_promo_code`], which
//! validates a code against an injected [`PromoLookup`] policy (modelling a
//! remote validation round-trip). Everything else is synchronous.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod engine;
pub mod error;
pub mod line;
pub mod pricing;
pub mod promo;

pub use engine::{CartEngine, CartSnapshot};
pub use error::CartError;
pub use line::{CartLine, LineId};
pub use pricing::{ConfigError, PricingConfig};
pub use promo::{PromoLookup, StaticPromoTable};
