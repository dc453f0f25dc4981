//! Skill data structure.

use serde::{Deserialize, Serialize};

/// A skill tag with its listing count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    #[serde(default)]
    pub id: u64,

    /// Skill name (e.g. "Python")
    pub name: String,

    /// Optional grouping category
    #[serde(default)]
    pub category: String,

    /// Number of active listings requiring this skill, derived server-side
    #[serde(default)]
    pub job_count: u64,
}
