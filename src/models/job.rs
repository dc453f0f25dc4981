//! Job listing wire model.
//!
//! The backend exposes two generations of listing payloads: the lightweight
//! list serializer (flat `company_name` / `location_display` / `skills_list`
//! strings) and the detail serializer (nested `company` / `location` /
//! `skills` objects). Both shapes decode into this one struct; the accessor
//! methods centralize the fallbacks so no view re-implements them.

use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use super::{Company, Location, Skill};

/// Employment type of a listing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Internship,
    Freelance,
}

impl JobType {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full Time",
            JobType::PartTime => "Part Time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
            JobType::Freelance => "Freelance",
        }
    }
}

/// Experience level of a listing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    #[default]
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry Level",
            ExperienceLevel::Mid => "Mid Level",
            ExperienceLevel::Senior => "Senior Level",
            ExperienceLevel::Lead => "Lead",
        }
    }
}

/// Company field: nested object or bare name string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompanyField {
    Info(Company),
    Name(String),
}

/// Location field: nested object or preformatted display string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationField {
    Info(Location),
    Display(String),
}

/// Salary field: numeric, or a string possibly carrying thousands separators.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SalaryField {
    Number(f64),
    Text(String),
}

impl SalaryField {
    /// Numeric value, with thousands separators stripped from string form.
    ///
    /// Returns `None` for non-numeric text and non-finite numbers. Sign and
    /// positivity are the caller's concern.
    pub fn amount(&self) -> Option<f64> {
        match self {
            SalaryField::Number(n) if n.is_finite() => Some(*n),
            SalaryField::Number(_) => None,
            SalaryField::Text(raw) => {
                let separators = Regex::new(r"[,\s]").ok()?;
                separators.replace_all(raw.trim(), "").parse::<f64>().ok()
            }
        }
    }
}

/// Skill entry: full object or bare name string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillField {
    Entry(Skill),
    Name(String),
}

impl SkillField {
    pub fn name(&self) -> &str {
        match self {
            SkillField::Entry(skill) => &skill.name,
            SkillField::Name(name) => name,
        }
    }
}

/// A single job listing as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    pub id: u64,

    pub title: String,

    /// Nested company object (detail serializer)
    #[serde(default, deserialize_with = "lenient")]
    company: Option<CompanyField>,

    /// Flat company name (list serializer)
    #[serde(default)]
    company_name: Option<String>,

    /// Nested location object (detail serializer)
    #[serde(default, deserialize_with = "lenient")]
    location: Option<LocationField>,

    /// Flat location display string (list serializer)
    #[serde(default)]
    location_display: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    job_type: Option<JobType>,

    #[serde(default, deserialize_with = "lenient")]
    experience_level: Option<ExperienceLevel>,

    /// ISO-8601 calendar date (kept verbatim for exact bucket matching)
    #[serde(default)]
    pub posted_date: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    salary_min: Option<SalaryField>,

    #[serde(default, deserialize_with = "lenient")]
    salary_max: Option<SalaryField>,

    #[serde(default)]
    pub salary_currency: Option<String>,

    /// Skills, accepting both the object form and the flat string list
    #[serde(default, alias = "skills_list")]
    skills: Vec<SkillField>,

    /// Server-side view counter
    #[serde(default)]
    pub views: u64,

    /// Full description (detail serializer only)
    #[serde(default)]
    pub description: Option<String>,

    /// Link to the original posting
    #[serde(default)]
    pub external_url: Option<String>,
}

impl JobListing {
    /// Company display name, whichever shape the payload carried.
    pub fn company_name(&self) -> &str {
        match &self.company {
            Some(CompanyField::Info(company)) => &company.name,
            Some(CompanyField::Name(name)) => name,
            None => self
                .company_name
                .as_deref()
                .filter(|name| !name.is_empty())
                .unwrap_or("Unknown Company"),
        }
    }

    /// Location display string, whichever shape the payload carried.
    pub fn location_label(&self) -> String {
        match &self.location {
            Some(LocationField::Info(location)) => location.display(),
            Some(LocationField::Display(display)) => display.clone(),
            None => self
                .location_display
                .clone()
                .filter(|display| !display.is_empty())
                .unwrap_or_else(|| "Remote".to_string()),
        }
    }

    /// Employment type, defaulting missing/unrecognized values to full time.
    pub fn job_type(&self) -> JobType {
        self.job_type.unwrap_or_default()
    }

    /// Experience level, defaulting missing/unrecognized values to mid.
    pub fn experience(&self) -> ExperienceLevel {
        self.experience_level.unwrap_or_default()
    }

    /// Lower salary bound as a number, if parseable.
    pub fn salary_min(&self) -> Option<f64> {
        self.salary_min.as_ref().and_then(SalaryField::amount)
    }

    /// Upper salary bound as a number, if parseable.
    pub fn salary_max(&self) -> Option<f64> {
        self.salary_max.as_ref().and_then(SalaryField::amount)
    }

    /// Skill names in listing order.
    pub fn skill_names(&self) -> Vec<&str> {
        self.skills.iter().map(SkillField::name).collect()
    }
}

/// Decode a field, treating any unexpected shape as absent.
///
/// The backend contract is fixed, but legacy rows carry free-form values in
/// enum columns; dropping them beats failing the whole listing.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_list_shape() {
        let job: JobListing = serde_json::from_value(json!({
            "id": 7,
            "title": "Backend Engineer",
            "company_name": "Acme",
            "location_display": "Berlin, Germany",
            "job_type": "contract",
            "experience_level": "senior",
            "salary_min": "5,000",
            "salary_max": 9000,
            "salary_currency": "USD",
            "skills_list": ["Rust", "Postgres"],
            "posted_date": "2026-08-01",
            "views": 42
        }))
        .unwrap();

        assert_eq!(job.company_name(), "Acme");
        assert_eq!(job.location_label(), "Berlin, Germany");
        assert_eq!(job.job_type(), JobType::Contract);
        assert_eq!(job.experience(), ExperienceLevel::Senior);
        assert_eq!(job.salary_min(), Some(5000.0));
        assert_eq!(job.salary_max(), Some(9000.0));
        assert_eq!(job.skill_names(), vec!["Rust", "Postgres"]);
    }

    #[test]
    fn decodes_detail_shape() {
        let job: JobListing = serde_json::from_value(json!({
            "id": 7,
            "title": "Backend Engineer",
            "company": {"id": 3, "name": "Acme", "job_count": 12},
            "location": {"id": 1, "city": "Berlin", "country": "Germany"},
            "skills": [{"id": 5, "name": "Rust", "job_count": 80}, "Postgres"],
            "description": "Ship things.",
            "external_url": "https://jobs.example.com/7"
        }))
        .unwrap();

        assert_eq!(job.company_name(), "Acme");
        assert_eq!(job.location_label(), "Berlin, Germany");
        assert_eq!(job.skill_names(), vec!["Rust", "Postgres"]);
        assert_eq!(job.description.as_deref(), Some("Ship things."));
    }

    #[test]
    fn missing_fields_fall_back() {
        let job: JobListing = serde_json::from_value(json!({
            "id": 1,
            "title": "Mystery Role"
        }))
        .unwrap();

        assert_eq!(job.company_name(), "Unknown Company");
        assert_eq!(job.location_label(), "Remote");
        assert_eq!(job.job_type(), JobType::FullTime);
        assert_eq!(job.experience(), ExperienceLevel::Mid);
        assert_eq!(job.salary_min(), None);
        assert!(job.skill_names().is_empty());
    }

    #[test]
    fn unknown_enum_values_degrade_to_defaults() {
        let job: JobListing = serde_json::from_value(json!({
            "id": 1,
            "title": "Odd Row",
            "job_type": "gig-economy",
            "experience_level": 99
        }))
        .unwrap();

        assert_eq!(job.job_type(), JobType::FullTime);
        assert_eq!(job.experience(), ExperienceLevel::Mid);
    }

    #[test]
    fn company_as_bare_string_is_accepted() {
        let job: JobListing = serde_json::from_value(json!({
            "id": 1,
            "title": "Role",
            "company": "Inline Name"
        }))
        .unwrap();

        assert_eq!(job.company_name(), "Inline Name");
    }

    #[test]
    fn salary_amount_parsing() {
        assert_eq!(SalaryField::Text("5,000".into()).amount(), Some(5000.0));
        assert_eq!(SalaryField::Text("12 500".into()).amount(), Some(12500.0));
        assert_eq!(SalaryField::Text("competitive".into()).amount(), None);
        assert_eq!(SalaryField::Number(3000.0).amount(), Some(3000.0));
        assert_eq!(SalaryField::Number(f64::NAN).amount(), None);
    }
}
