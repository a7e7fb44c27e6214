//! Application layer - the content store and the handlers built on it.
//!
//! The store owns all mutable content state; handlers orchestrate it for
//! specific use cases (overview query, retry command).

pub mod handlers;
pub mod store;

pub use handlers::{
    ContentOverview, GetContentOverviewHandler, GetContentOverviewQuery,
    RetryFailedSectionsCommand, RetryFailedSectionsHandler, RetryFailedSectionsResult,
    SectionOverview,
};
pub use store::{PortfolioStore, Subscription};
