//! Command and query handlers.
//!
//! Organized by domain area:
//! - `content` - Content overview query and failed-section retry command

pub mod content;

pub use content::{
    ContentOverview, GetContentOverviewHandler, GetContentOverviewQuery,
    RetryFailedSectionsCommand, RetryFailedSectionsHandler, RetryFailedSectionsResult,
    SectionOverview,
};
