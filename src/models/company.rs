//! Company data structure.

use serde::{Deserialize, Serialize};

/// A company as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    #[serde(default)]
    pub id: u64,

    /// Company display name
    pub name: String,

    /// Free-form description (may be empty)
    #[serde(default)]
    pub description: String,

    /// Company website URL
    #[serde(default)]
    pub website: Option<String>,

    /// Number of active listings, derived server-side
    #[serde(default)]
    pub job_count: u64,
}
