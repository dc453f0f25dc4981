// src/api.rs

//! HTTP client for the jobs REST API.
//!
//! One configured [`reqwest::Client`] per process. Every call is a plain GET
//! with at-most-once semantics; retries are left to user-initiated
//! navigation. Transport failures and non-2xx statuses both surface as a
//! single [`AppError`] carrying the cause.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{
    ApiConfig, ApiPayload, Company, JobFilter, JobListing, Location, Page, Skill,
};

/// Client for the fixed REST surface of the jobs backend.
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    /// Create a client from connection settings.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        // The base must end with a slash so joining keeps the /api prefix.
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base)?;

        Ok(Self { http, base })
    }

    /// Build a request URL, appending only non-empty query parameters.
    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.base.join(path)?;
        let filtered: Vec<_> = params
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .collect();
        if !filtered.is_empty() {
            let mut query = url.query_pairs_mut();
            for (name, value) in filtered {
                query.append_pair(name, value);
            }
        }
        Ok(url)
    }

    /// GET a path and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> Result<T> {
        let url = self.endpoint(path, params)?;
        log::debug!("GET {url}");

        let response = self
            .http
            .get(url.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::api(status.as_u16(), url.as_str()));
        }

        Ok(response.json::<T>().await?)
    }

    /// GET a collection endpoint and normalize either wire shape.
    async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Page<T>> {
        let payload: ApiPayload<T> = self.get_json(path, params).await?;
        Ok(payload.into_page())
    }

    /// Search job listings. `page_size` caps the returned page server-side.
    pub async fn jobs(&self, filter: &JobFilter, page_size: Option<u32>) -> Result<Page<JobListing>> {
        let mut params = filter.pairs();
        let size;
        if let Some(n) = page_size {
            size = n.to_string();
            params.push(("page_size", size.as_str()));
        }
        self.get_page("jobs/", &params).await
    }

    /// Fetch a single listing by id.
    pub async fn job(&self, id: u64) -> Result<JobListing> {
        self.get_json(&format!("jobs/{id}/"), &[]).await
    }

    /// Listings posted in the last week, newest first.
    pub async fn recent_jobs(&self) -> Result<Vec<JobListing>> {
        Ok(self
            .get_page("jobs/recent_jobs/", &[])
            .await?
            .items)
    }

    /// All companies.
    pub async fn companies(&self) -> Result<Page<Company>> {
        self.get_page("companies/", &[]).await
    }

    /// Fetch a single company by id.
    pub async fn company(&self, id: u64) -> Result<Company> {
        self.get_json(&format!("companies/{id}/"), &[]).await
    }

    /// All skills.
    pub async fn skills(&self) -> Result<Page<Skill>> {
        self.get_page("skills/", &[]).await
    }

    /// Most-demanded skills, pre-sorted descending by job count server-side.
    pub async fn top_skills(&self) -> Result<Vec<Skill>> {
        Ok(self
            .get_page("skills/top_demanded/", &[])
            .await?
            .items)
    }

    /// All locations.
    pub async fn locations(&self) -> Result<Page<Location>> {
        self.get_page("locations/", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(&ApiConfig::default()).unwrap()
    }

    #[test]
    fn endpoint_joins_under_base_prefix() {
        let url = client().endpoint("jobs/", &[]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/api/jobs/");
    }

    #[test]
    fn endpoint_without_params_has_no_query() {
        let url = client().endpoint("skills/top_demanded/", &[]).unwrap();
        assert!(url.query().is_none());
    }

    #[test]
    fn endpoint_encodes_params() {
        let url = client()
            .endpoint("jobs/", &[("search", "C++ & Go"), ("skill", "tokio")])
            .unwrap();
        assert_eq!(url.query(), Some("search=C%2B%2B+%26+Go&skill=tokio"));
    }

    #[test]
    fn endpoint_omits_empty_params() {
        let url = client()
            .endpoint("jobs/", &[("search", ""), ("location", "Berlin")])
            .unwrap();
        assert_eq!(url.query(), Some("location=Berlin"));
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let config = ApiConfig {
            base_url: "https://jobs.example.com/api".into(),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();
        let url = client.endpoint("companies/", &[]).unwrap();
        assert_eq!(url.as_str(), "https://jobs.example.com/api/companies/");
    }
}
