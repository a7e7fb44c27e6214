//! Content store - the aggregated, per-section-tracked content cache.
//!
//! - `PortfolioStore` - loads, caches and refreshes all sections
//! - `Subscription` - handle returned by `PortfolioStore::subscribe`

mod portfolio_store;
mod registry;

pub use portfolio_store::PortfolioStore;
pub use registry::Subscription;
