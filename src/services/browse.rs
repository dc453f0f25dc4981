// src/services/browse.rs

//! Job browsing session.
//!
//! Composes the filter synchronizer with a listing source. The session is
//! the single writer of the view state: finished fetches go through
//! [`BrowseSession::complete`], which discards anything the synchronizer
//! marks stale, so the displayed listing always reflects the latest filter
//! set no matter in which order responses arrive.

use async_trait::async_trait;

use crate::api::ApiClient;
use crate::error::Result;
use crate::models::{FilterField, JobFilter, JobListing, Page};
use crate::sync::{FetchOutcome, FetchTicket, FilterSync};

/// Source of job listings for a browse session.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Fetch listings matching the filter set.
    async fn search_jobs(&self, filter: &JobFilter) -> Result<Page<JobListing>>;
}

#[async_trait]
impl JobSource for ApiClient {
    async fn search_jobs(&self, filter: &JobFilter) -> Result<Page<JobListing>> {
        self.jobs(filter, None).await
    }
}

/// What the browse view currently shows.
#[derive(Debug, Default)]
pub struct BrowseView {
    pub jobs: Vec<JobListing>,
    /// Total matches server-side (envelope count preferred over page length)
    pub total: u64,
    /// User-visible message when the last fetch failed
    pub error: Option<String>,
}

/// A browse view's state: filters, query string, and fetched listings.
pub struct BrowseSession {
    sync: FilterSync,
    view: BrowseView,
}

impl BrowseSession {
    /// Start a session from a query string and issue the initial fetch
    /// ticket.
    pub fn hydrate(query: &str) -> (Self, FetchTicket) {
        let (sync, ticket) = FilterSync::hydrate(query);
        (
            Self {
                sync,
                view: BrowseView::default(),
            },
            ticket,
        )
    }

    pub fn view(&self) -> &BrowseView {
        &self.view
    }

    pub fn filter(&self) -> &JobFilter {
        self.sync.filter()
    }

    /// The shareable query string for the current filter set.
    pub fn query(&self) -> &str {
        self.sync.query()
    }

    /// Change one filter field. Returns a ticket when a fetch is due.
    pub fn set_filter(&mut self, field: FilterField, value: &str) -> Option<FetchTicket> {
        self.sync.set(field, value)
    }

    /// Drop all filter constraints.
    pub fn clear_filters(&mut self) -> Option<FetchTicket> {
        self.sync.clear()
    }

    /// Apply a finished fetch. Stale results leave the view untouched.
    ///
    /// A failed fetch degrades to an empty listing plus a message; it is
    /// never retried here.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Page<JobListing>>,
    ) -> FetchOutcome {
        if self.sync.settle(ticket) == FetchOutcome::Stale {
            log::debug!(
                "Discarding stale job search result (generation {})",
                ticket.generation()
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(page) => {
                self.view = BrowseView {
                    jobs: page.items,
                    total: page.total,
                    error: None,
                };
            }
            Err(error) => {
                log::warn!("Job search failed: {error}");
                self.view = BrowseView {
                    jobs: Vec::new(),
                    total: 0,
                    error: Some(format!("Could not load jobs: {error}")),
                };
            }
        }
        FetchOutcome::Accepted
    }

    /// Fetch and apply in one step, for sequential callers.
    pub async fn run(&mut self, source: &impl JobSource, ticket: FetchTicket) -> FetchOutcome {
        let result = source.search_jobs(ticket.filter()).await;
        self.complete(&ticket, result)
    }
}
