//! Location data structure.

use serde::{Deserialize, Serialize};

/// A job location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    #[serde(default)]
    pub id: u64,

    pub city: String,

    pub country: String,

    #[serde(default)]
    pub is_remote: bool,

    /// Number of active listings at this location, derived server-side
    #[serde(default)]
    pub job_count: u64,
}

impl Location {
    /// Display string matching the backend's own rendering.
    pub fn display(&self) -> String {
        if self.is_remote {
            format!("Remote - {}", self.country)
        } else {
            format!("{}, {}", self.city, self.country)
        }
    }
}
