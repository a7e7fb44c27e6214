//! Content handlers - queries and commands over the content store.

mod get_content_overview;
mod retry_failed_sections;

pub use get_content_overview::{
    ContentOverview, GetContentOverviewHandler, GetContentOverviewQuery, SectionOverview,
};
pub use retry_failed_sections::{
    RetryFailedSectionsCommand, RetryFailedSectionsHandler, RetryFailedSectionsResult,
};
