// src/sync.rs

//! Filter/URL state synchronization.
//!
//! Keeps the filter set and its serialized query string consistent, and
//! decides which fetch results are still worth applying. Two observable
//! states: **Idle** (filters stable) and **Fetching** (one request in
//! flight for the current filter set).
//!
//! Each filter change bumps a request generation and snapshots the filter
//! set into a [`FetchTicket`]. When a fetch resolves, [`FilterSync::settle`]
//! compares the ticket's generation against the current one: only the
//! latest ticket is accepted, so a late-arriving response for an older
//! filter set can never overwrite fresher results (last-filter-wins, not
//! last-arrival-wins). The same mechanism covers view lifetime: a dropped
//! view drops its sync, and its outstanding tickets have nowhere to settle.

use crate::models::{FilterField, JobFilter};

/// Fetch lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    /// Filters stable, no fetch pending
    Idle,
    /// One request in flight for the current filter set
    Fetching { generation: u64 },
}

/// Snapshot of a filter set at the moment its fetch was triggered.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    filter: JobFilter,
}

impl FetchTicket {
    /// The filter set this fetch is for.
    pub fn filter(&self) -> &JobFilter {
        &self.filter
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of settling a finished fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Ticket matches the current filter set; apply the result
    Accepted,
    /// Filter set moved on; the result must be discarded
    Stale,
}

/// Synchronizer between the filter set, its query string, and the fetch
/// lifecycle.
#[derive(Debug, Clone)]
pub struct FilterSync {
    filter: JobFilter,
    query: String,
    generation: u64,
    state: FetchState,
}

impl FilterSync {
    /// Hydrate filter state from a query string (the address bar at initial
    /// load) and issue the initial fetch ticket.
    ///
    /// The stored query string is the canonical serialization, so hydrating
    /// from a reordered or partially unknown query converges immediately.
    pub fn hydrate(query: &str) -> (Self, FetchTicket) {
        let filter = JobFilter::from_query_string(query);
        let query = filter.to_query_string();
        let mut sync = Self {
            filter,
            query,
            generation: 0,
            state: FetchState::Idle,
        };
        let ticket = sync.issue();
        (sync, ticket)
    }

    /// Current filter set.
    pub fn filter(&self) -> &JobFilter {
        &self.filter
    }

    /// Current serialized query string. Always matches `filter()`.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> FetchState {
        self.state
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self.state, FetchState::Fetching { .. })
    }

    /// Change one filter field.
    ///
    /// Returns a fetch ticket when the serialized form actually changed
    /// (identity is by serialized form, not reference), `None` otherwise.
    /// The filter set and the query string are updated together, never one
    /// without the other.
    pub fn set(&mut self, field: FilterField, value: &str) -> Option<FetchTicket> {
        let mut candidate = self.filter.clone();
        candidate.set(field, value);
        self.replace(candidate)
    }

    /// Drop all filter constraints.
    pub fn clear(&mut self) -> Option<FetchTicket> {
        self.replace(JobFilter::default())
    }

    /// Settle a finished fetch (success or failure both end the in-flight
    /// state). Only the ticket of the current generation is accepted.
    pub fn settle(&mut self, ticket: &FetchTicket) -> FetchOutcome {
        match self.state {
            FetchState::Fetching { generation } if generation == ticket.generation => {
                self.state = FetchState::Idle;
                FetchOutcome::Accepted
            }
            _ => FetchOutcome::Stale,
        }
    }

    fn replace(&mut self, candidate: JobFilter) -> Option<FetchTicket> {
        let serialized = candidate.to_query_string();
        if serialized == self.query {
            return None;
        }
        self.filter = candidate;
        self.query = serialized;
        Some(self.issue())
    }

    fn issue(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = FetchState::Fetching {
            generation: self.generation,
        };
        FetchTicket {
            generation: self.generation,
            filter: self.filter.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hydrate_issues_initial_ticket() {
        let (sync, ticket) = FilterSync::hydrate("search=rust&skill=tokio");
        assert!(sync.is_fetching());
        assert_eq!(ticket.filter().search, "rust");
        assert_eq!(ticket.filter().skill, "tokio");
        assert_eq!(sync.query(), "search=rust&skill=tokio");
    }

    #[test]
    fn hydrate_canonicalizes_query() {
        // Reordered fields and unknown params converge to the canonical form.
        let (sync, _) = FilterSync::hydrate("?skill=tokio&page=2&search=rust");
        assert_eq!(sync.query(), "search=rust&skill=tokio");
    }

    #[test]
    fn unchanged_set_issues_no_ticket() {
        let (mut sync, _) = FilterSync::hydrate("search=rust");
        assert!(sync.set(FilterField::Search, "rust").is_none());
        assert!(sync.set(FilterField::Location, "").is_none());
    }

    #[test]
    fn set_updates_filter_and_query_together() {
        let (mut sync, _) = FilterSync::hydrate("");
        let ticket = sync.set(FilterField::Location, "Berlin").unwrap();
        assert_eq!(sync.filter().location, "Berlin");
        assert_eq!(sync.query(), "location=Berlin");
        assert_eq!(sync.query(), sync.filter().to_query_string());
        assert_eq!(ticket.filter().location, "Berlin");
    }

    #[test]
    fn stale_ticket_is_rejected_when_arriving_late() {
        let (mut sync, ticket_a) = FilterSync::hydrate("search=a");
        let ticket_b = sync.set(FilterField::Search, "b").unwrap();

        // A resolves after B was issued: discard A, accept B.
        assert_eq!(sync.settle(&ticket_a), FetchOutcome::Stale);
        assert_eq!(sync.settle(&ticket_b), FetchOutcome::Accepted);
        assert!(!sync.is_fetching());
    }

    #[test]
    fn current_ticket_wins_regardless_of_arrival_order() {
        let (mut sync, ticket_a) = FilterSync::hydrate("search=a");
        let ticket_b = sync.set(FilterField::Search, "b").unwrap();

        // B resolves first, then the outdated A trickles in.
        assert_eq!(sync.settle(&ticket_b), FetchOutcome::Accepted);
        assert_eq!(sync.settle(&ticket_a), FetchOutcome::Stale);
    }

    #[test]
    fn settling_twice_is_stale() {
        let (mut sync, ticket) = FilterSync::hydrate("");
        assert_eq!(sync.settle(&ticket), FetchOutcome::Accepted);
        assert_eq!(sync.settle(&ticket), FetchOutcome::Stale);
    }

    #[test]
    fn clear_resets_filters_and_query() {
        let (mut sync, _) = FilterSync::hydrate("search=rust&location=Berlin");
        let ticket = sync.clear().unwrap();
        assert!(sync.filter().is_empty());
        assert_eq!(sync.query(), "");
        assert!(ticket.filter().is_empty());

        // Clearing an already empty filter set is a no-op.
        assert!(sync.clear().is_none());
    }
}
