//! Service layer for the jobpulse client.
//!
//! This module contains the view-facing logic:
//! - Job browsing session (`BrowseSession`)
//! - Dashboard and overview assembly (`dashboard`)

mod browse;
mod dashboard;

pub use browse::{BrowseSession, BrowseView, JobSource};
pub use dashboard::{build_dashboard, build_overview, Dashboard, Overview};
