//! Filter state and its query-string form.
//!
//! The filter set is the single source of truth for the browse view. Its
//! serialized form doubles as the shareable "address bar" string, so the
//! mapping must round-trip losslessly: empty fields are dropped on
//! serialization and unknown parameters are ignored on hydration.

use url::form_urlencoded;

/// The five recognized filter fields, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Search,
    Location,
    JobType,
    Experience,
    Skill,
}

impl FilterField {
    pub const ALL: [FilterField; 5] = [
        FilterField::Search,
        FilterField::Location,
        FilterField::JobType,
        FilterField::Experience,
        FilterField::Skill,
    ];

    /// Query parameter name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Search => "search",
            FilterField::Location => "location",
            FilterField::JobType => "job_type",
            FilterField::Experience => "experience",
            FilterField::Skill => "skill",
        }
    }

    fn from_param(name: &str) -> Option<Self> {
        match name {
            "search" => Some(FilterField::Search),
            "location" => Some(FilterField::Location),
            "job_type" => Some(FilterField::JobType),
            "experience" => Some(FilterField::Experience),
            "skill" => Some(FilterField::Skill),
            _ => None,
        }
    }
}

/// User-driven filter constraints for the jobs listing.
///
/// An empty string means "no constraint" for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub search: String,
    pub location: String,
    pub job_type: String,
    pub experience: String,
    pub skill: String,
}

impl JobFilter {
    /// Field value by name.
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Search => &self.search,
            FilterField::Location => &self.location,
            FilterField::JobType => &self.job_type,
            FilterField::Experience => &self.experience,
            FilterField::Skill => &self.skill,
        }
    }

    /// Set a field value.
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let slot = match field {
            FilterField::Search => &mut self.search,
            FilterField::Location => &mut self.location,
            FilterField::JobType => &mut self.job_type,
            FilterField::Experience => &mut self.experience,
            FilterField::Skill => &mut self.skill,
        };
        *slot = value.into();
    }

    /// Whether no field carries a constraint.
    pub fn is_empty(&self) -> bool {
        FilterField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Non-empty (name, value) pairs in canonical field order.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        FilterField::ALL
            .iter()
            .map(|f| (f.as_str(), self.get(*f)))
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }

    /// Serialize to a query string, dropping empty fields.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in self.pairs() {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }

    /// Hydrate from a query string. Unrecognized parameters are ignored;
    /// a leading `?` is tolerated.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut filter = JobFilter::default();
        for (name, value) in form_urlencoded::parse(query.as_bytes()) {
            if let Some(field) = FilterField::from_param(&name) {
                filter.set(field, value.into_owned());
            }
        }
        filter
    }
}
