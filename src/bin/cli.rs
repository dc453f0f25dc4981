//! jobpulse CLI
//!
//! Terminal front-end for the jobs REST API: browse listings, inspect
//! companies and skills, and render the analytics dashboard.

use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};
use jobpulse::{
    api::ApiClient,
    error::Result,
    models::{Config, FilterField, JobListing},
    services::{self, BrowseSession},
    utils::{console, format, get_domain},
};

/// jobpulse - Job Market Browser
#[derive(Parser, Debug)]
#[command(name = "jobpulse", version, about = "Job market browsing and analytics client")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Market overview: totals, top skills, latest postings
    Overview,

    /// Browse job listings with filters
    Browse {
        /// Full-text search term
        #[arg(long)]
        search: Option<String>,

        /// Location constraint
        #[arg(long)]
        location: Option<String>,

        /// Employment type (full_time, part_time, contract, internship, freelance)
        #[arg(long)]
        job_type: Option<String>,

        /// Experience level (entry, mid, senior, lead)
        #[arg(long)]
        experience: Option<String>,

        /// Required skill
        #[arg(long)]
        skill: Option<String>,

        /// Raw query string to hydrate filters from (as shared from a
        /// previous run); individual flags override its fields
        #[arg(long)]
        query: Option<String>,
    },

    /// Show one listing in full
    Job {
        /// Listing id
        id: u64,
    },

    /// Listings posted in the last week
    Recent,

    /// List companies
    Companies,

    /// Show one company in full
    Company {
        /// Company id
        id: u64,
    },

    /// List skills
    Skills {
        /// Only the most demanded skills
        #[arg(long)]
        top: bool,
    },

    /// List locations
    Locations,

    /// Analytics dashboard
    Analytics,

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    let api = ApiClient::new(&config.api)?;

    match cli.command {
        Command::Overview => {
            let overview = services::build_overview(&api, &config).await;
            render_overview(&overview, &config);
        }

        Command::Browse {
            search,
            location,
            job_type,
            experience,
            skill,
            query,
        } => {
            let (mut session, initial) =
                BrowseSession::hydrate(query.as_deref().unwrap_or(""));

            // Flags act as filter changes on top of the hydrated state; only
            // the newest ticket's fetch is applied.
            let mut ticket = initial;
            let overrides = [
                (FilterField::Search, search),
                (FilterField::Location, location),
                (FilterField::JobType, job_type),
                (FilterField::Experience, experience),
                (FilterField::Skill, skill),
            ];
            for (field, value) in overrides {
                if let Some(value) = value {
                    if let Some(newer) = session.set_filter(field, &value) {
                        ticket = newer;
                    }
                }
            }

            session.run(&api, ticket).await;
            render_browse(&session, &config);
        }

        Command::Job { id } => {
            let job = api.job(id).await?;
            render_job_detail(&job, &config);
        }

        Command::Recent => {
            let jobs = api.recent_jobs().await?;
            console::header("Latest Job Postings (last 7 days)");
            if jobs.is_empty() {
                console::notice("No recent postings.");
            }
            for job in &jobs {
                render_job_card(job, &config);
            }
        }

        Command::Companies => {
            let companies = api.companies().await?;
            console::header(&format!("Companies ({})", companies.total));
            for company in &companies.items {
                console::separator();
                console::line(&format!(
                    "{} — {} open position{}",
                    company.name,
                    company.job_count,
                    if company.job_count == 1 { "" } else { "s" }
                ));
                if let Some(domain) = company.website.as_deref().and_then(get_domain) {
                    console::sub_item(&domain);
                }
                if !company.description.is_empty() {
                    console::sub_item(&format::truncate(&company.description, 70));
                }
            }
        }

        Command::Company { id } => {
            let company = api.company(id).await?;
            console::header(&company.name);
            console::sub_item(&format!(
                "{} open position{}",
                company.job_count,
                if company.job_count == 1 { "" } else { "s" }
            ));
            if let Some(website) = &company.website {
                console::sub_item(website);
            }
            if !company.description.is_empty() {
                console::separator();
                console::line(&company.description);
            }
        }

        Command::Skills { top } => {
            let skills = if top {
                let skills = api.top_skills().await?;
                console::header("Top Demanded Skills");
                skills
            } else {
                let page = api.skills().await?;
                console::header(&format!("Skills ({})", page.total));
                page.items
            };
            let max = skills.iter().map(|s| s.job_count).max().unwrap_or(0);
            for skill in &skills {
                console::chart_row(&skill.name, skill.job_count, max);
            }
        }

        Command::Locations => {
            let locations = api.locations().await?;
            console::header(&format!("Locations ({})", locations.total));
            for location in &locations.items {
                console::sub_item(&format!(
                    "{} — {} listing{}",
                    location.display(),
                    location.job_count,
                    if location.job_count == 1 { "" } else { "s" }
                ));
            }
        }

        Command::Analytics => {
            let dashboard = services::build_dashboard(&api, &config).await;
            render_dashboard(&dashboard, &config);
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            let config = Config::load(&cli.config)?;
            config.validate()?;
            log::info!("✓ Config OK ({})", cli.config.display());
        }
    }

    Ok(())
}

fn render_overview(overview: &services::Overview, config: &Config) {
    console::header("Job Market Overview");
    console::summary(
        "Totals",
        &[
            ("Active job listings", overview.total_jobs.to_string()),
            ("Companies hiring", overview.total_companies.to_string()),
            ("Skills tracked", overview.total_skills.to_string()),
            ("Locations covered", overview.total_locations.to_string()),
        ],
    );

    if !overview.top_skills.is_empty() {
        console::summary("Top Demanded Skills", &[]);
        let max = overview
            .top_skills
            .iter()
            .map(|s| s.job_count)
            .max()
            .unwrap_or(0);
        for skill in &overview.top_skills {
            console::chart_row(&skill.name, skill.job_count, max);
        }
    }

    console::summary("Latest Job Postings", &[]);
    if overview.recent.is_empty() {
        console::notice("No jobs available yet.");
    }
    for job in &overview.recent {
        render_job_card(job, config);
    }
}

fn render_browse(session: &BrowseSession, config: &Config) {
    let view = session.view();

    console::header("Browse Job Listings");
    console::line(&format!(
        "Found {} job{}",
        view.total,
        if view.total == 1 { "" } else { "s" }
    ));

    let active = session.filter().pairs();
    if !active.is_empty() {
        let described: Vec<String> = active
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        console::sub_item(&format!("Active filters: {}", described.join(", ")));
        console::sub_item(&format!("Share: ?{}", session.query()));
    }

    if let Some(message) = &view.error {
        console::notice(message);
        return;
    }

    if view.jobs.is_empty() {
        console::notice("No jobs found matching your criteria. Try adjusting your filters.");
        return;
    }

    for job in &view.jobs {
        render_job_card(job, config);
    }
}

fn render_job_card(job: &JobListing, config: &Config) {
    let today = Local::now().date_naive();

    console::separator();
    console::line(&format!(
        "{}  [{}]",
        format::truncate(&job.title, config.display.max_title_width),
        format::time_ago(job.posted_date.as_deref(), today)
    ));
    console::sub_item(&format!("{} • {}", job.company_name(), job.location_label()));
    console::sub_item(&format!(
        "{} • {}",
        job.job_type().label(),
        job.experience().label()
    ));
    if let Some(salary) =
        format::salary_range(job.salary_min(), job.salary_max(), job.salary_currency.as_deref())
    {
        console::sub_item(&salary);
    }
    let skills = job.skill_names();
    if !skills.is_empty() {
        console::sub_item(&format!("Skills: {}", skills.join(", ")));
    }
}

fn render_job_detail(job: &JobListing, config: &Config) {
    console::header(&job.title);
    render_job_card(job, config);
    console::sub_item(&format!("Views: {}", job.views));
    if let Some(url) = &job.external_url {
        console::sub_item(&format!("Apply: {url}"));
    }
    if let Some(description) = &job.description {
        console::separator();
        console::line(description);
    }
}

fn render_dashboard(dashboard: &services::Dashboard, config: &Config) {
    console::header("Job Market Analytics");

    let salary = if dashboard.salary.sample_count > 0 {
        format!(
            "${} ({} listings)",
            dashboard.salary.average.round(),
            dashboard.salary.sample_count
        )
    } else {
        "N/A".to_string()
    };
    console::summary(
        "Overview",
        &[
            ("Total active jobs", dashboard.total_jobs.to_string()),
            ("Average salary", salary),
        ],
    );

    console::summary(
        &format!("Postings Timeline (last {} days)", config.display.timeline_days),
        &[],
    );
    let max = dashboard
        .timeline
        .iter()
        .map(|bucket| bucket.count as u64)
        .max()
        .unwrap_or(0);
    for bucket in &dashboard.timeline {
        console::chart_row(
            &bucket.date.format("%m/%d").to_string(),
            bucket.count as u64,
            max,
        );
    }

    console::summary("Jobs by Type", &[]);
    let max = dashboard.by_type.iter().map(|(_, n)| *n as u64).max().unwrap_or(0);
    for (job_type, count) in &dashboard.by_type {
        console::chart_row(job_type.label(), *count as u64, max);
    }

    console::summary("Jobs by Experience Level", &[]);
    let max = dashboard
        .by_experience
        .iter()
        .map(|(_, n)| *n as u64)
        .max()
        .unwrap_or(0);
    for (level, count) in &dashboard.by_experience {
        console::chart_row(level.label(), *count as u64, max);
    }

    console::summary("Top Demanded Skills", &[]);
    let max = dashboard.top_skills.iter().map(|s| s.job_count).max().unwrap_or(0);
    for skill in &dashboard.top_skills {
        console::chart_row(&skill.name, skill.job_count, max);
    }

    console::summary("Top Hiring Companies", &[]);
    let max = dashboard
        .top_companies
        .iter()
        .map(|c| c.job_count)
        .max()
        .unwrap_or(0);
    for company in &dashboard.top_companies {
        console::chart_row(&company.name, company.job_count, max);
    }
}
