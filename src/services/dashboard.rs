// src/services/dashboard.rs

//! Dashboard and overview assembly.
//!
//! Both views fan out independent fetches concurrently and join them.
//! Aggregation views are best-effort: a failed source logs a warning and
//! contributes an empty default so the rest of the dashboard still renders.
//! (Simple list views fail whole instead; that asymmetry is deliberate.)

use chrono::{Local, NaiveDate};
use futures::join;

use crate::analytics::{
    average_salary, count_by_experience, count_by_type, posting_timeline_ending, top_by_count,
    DayCount, SalaryStats,
};
use crate::api::ApiClient;
use crate::error::Result;
use crate::models::{
    Company, Config, DisplayConfig, ExperienceLevel, JobFilter, JobListing, JobType, Location,
    Page, Skill,
};

/// Chart-ready analytics dashboard data.
#[derive(Debug)]
pub struct Dashboard {
    /// Total active listings (envelope count preferred over page length)
    pub total_jobs: u64,
    pub salary: SalaryStats,
    pub by_type: Vec<(JobType, usize)>,
    pub by_experience: Vec<(ExperienceLevel, usize)>,
    pub timeline: Vec<DayCount>,
    pub top_skills: Vec<Skill>,
    pub top_companies: Vec<Company>,
}

/// Home view data: catalog totals plus highlights.
#[derive(Debug)]
pub struct Overview {
    pub total_jobs: u64,
    pub total_companies: u64,
    pub total_skills: u64,
    pub total_locations: u64,
    pub recent: Vec<JobListing>,
    pub top_skills: Vec<Skill>,
}

/// Build the analytics dashboard. Never fails; failed sources degrade.
pub async fn build_dashboard(api: &ApiClient, config: &Config) -> Dashboard {
    let filter = JobFilter::default();
    let (jobs, skills, companies) = join!(
        api.jobs(&filter, Some(config.api.analytics_page_size)),
        api.top_skills(),
        api.companies(),
    );

    assemble_dashboard(
        page_or_empty(jobs, "jobs"),
        or_empty(skills, "top skills"),
        page_or_empty(companies, "companies"),
        &config.display,
        Local::now().date_naive(),
    )
}

/// Build the home overview. Never fails; failed sources degrade.
pub async fn build_overview(api: &ApiClient, config: &Config) -> Overview {
    let filter = JobFilter::default();
    let (jobs, skills, top_skills, companies, locations) = join!(
        api.jobs(&filter, Some(config.display.recent_limit as u32)),
        api.skills(),
        api.top_skills(),
        api.companies(),
        api.locations(),
    );

    assemble_overview(
        page_or_empty(jobs, "jobs"),
        page_or_empty(skills, "skills"),
        or_empty(top_skills, "top skills"),
        page_or_empty(companies, "companies"),
        page_or_empty(locations, "locations"),
        &config.display,
    )
}

fn assemble_dashboard(
    jobs: Page<JobListing>,
    top_skills: Vec<Skill>,
    companies: Page<Company>,
    display: &DisplayConfig,
    today: NaiveDate,
) -> Dashboard {
    let listings = &jobs.items;

    // Companies without active listings don't belong on the chart.
    let hiring: Vec<Company> = companies
        .items
        .into_iter()
        .filter(|company| company.job_count > 0)
        .collect();
    let top_companies = top_by_count(&hiring, display.top_chart_size, |company| company.job_count);

    // top_demanded comes pre-sorted from the server.
    let mut top_skills = top_skills;
    top_skills.truncate(display.top_chart_size);

    Dashboard {
        total_jobs: jobs.total,
        salary: average_salary(listings),
        by_type: count_by_type(listings),
        by_experience: count_by_experience(listings),
        timeline: posting_timeline_ending(listings, display.timeline_days, today),
        top_skills,
        top_companies,
    }
}

fn assemble_overview(
    jobs: Page<JobListing>,
    skills: Page<Skill>,
    top_skills: Vec<Skill>,
    companies: Page<Company>,
    locations: Page<Location>,
    display: &DisplayConfig,
) -> Overview {
    let mut recent = jobs.items;
    recent.truncate(display.recent_limit);

    let mut top_skills = top_skills;
    top_skills.truncate(display.top_chart_size);

    Overview {
        total_jobs: jobs.total,
        total_companies: companies.total,
        total_skills: skills.total,
        total_locations: locations.total,
        recent,
        top_skills,
    }
}

/// Degrade a failed page fetch to an empty page, keeping a trace.
fn page_or_empty<T>(result: Result<Page<T>>, what: &str) -> Page<T> {
    result.unwrap_or_else(|error| {
        log::warn!("Failed to fetch {what}: {error}. Using empty data.");
        Page::default()
    })
}

/// Degrade a failed list fetch to an empty list, keeping a trace.
fn or_empty<T>(result: Result<Vec<T>>, what: &str) -> Vec<T> {
    result.unwrap_or_else(|error| {
        log::warn!("Failed to fetch {what}: {error}. Using empty data.");
        Vec::new()
    })
}
