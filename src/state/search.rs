//! City search state shared by the navbar input and the home listing.
//!
//! DESIGN
//! ======
//! Every keystroke that changes the trimmed query bumps a sequence number
//! and hands back a `SearchTicket`; retyping the same query keeps the
//! outstanding ticket.
//! The debounce timer, the fetch, and the result hand-off all carry that
//! ticket; anything tagged with an older sequence is dropped. That makes the
//! bridge last-query-wins regardless of timer cancellation or response order.
//! The bridge owns no timer itself, so the ordering rules are testable
//! without a browser.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::Hospital;

/// What the home page renders from the search box.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    /// Raw input text, updated on every keystroke.
    pub query: String,
    /// `None` means no active search: the page shows the unfiltered listing.
    pub results: Option<Vec<Hospital>>,
    /// Trimmed query that produced `results`.
    pub results_query: Option<String>,
}

/// Tag carried by a scheduled search from keystroke to applied result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: String,
}

/// Outcome of a keystroke.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchInput {
    /// Start the quiet-period timer for this ticket.
    Schedule(SearchTicket),
    /// Input emptied: results reset, nothing to fetch.
    Cleared,
    /// Same trimmed query as the search already pending, in flight or
    /// shown. Keep the current timer and fetch.
    Unchanged,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchBridge {
    pub state: SearchState,
    seq: u64,
    pending: Option<SearchTicket>,
    in_flight: Option<SearchTicket>,
    listing_active: bool,
}

impl SearchBridge {
    /// Record a keystroke, superseding any earlier ticket whose query differs.
    pub fn input(&mut self, raw: &str) -> SearchInput {
        self.state.query = raw.to_owned();

        let query = raw.trim();
        if !query.is_empty() && self.current_query() == Some(query) {
            return SearchInput::Unchanged;
        }

        self.seq += 1;
        self.in_flight = None;
        if query.is_empty() {
            self.pending = None;
            self.state.results = None;
            self.state.results_query = None;
            return SearchInput::Cleared;
        }

        let ticket = SearchTicket { seq: self.seq, query: query.to_owned() };
        self.pending = Some(ticket.clone());
        SearchInput::Schedule(ticket)
    }

    /// Query of the outstanding search, or of the results on screen when
    /// nothing is outstanding.
    fn current_query(&self) -> Option<&str> {
        match self.pending.as_ref().or(self.in_flight.as_ref()) {
            Some(ticket) => Some(ticket.query.as_str()),
            None => self.state.results_query.as_deref(),
        }
    }

    /// The quiet period for `ticket` elapsed.
    ///
    /// Returns the query to fetch, or `None` if a later keystroke superseded
    /// the ticket (its timer should have been cancelled, but may have raced).
    pub fn fire(&mut self, ticket: &SearchTicket) -> Option<String> {
        if self.pending.as_ref() != Some(ticket) {
            return None;
        }
        self.pending = None;
        self.in_flight = Some(ticket.clone());
        Some(ticket.query.clone())
    }

    /// Apply fetched results if `ticket` is still the latest and the
    /// listing page is mounted. Returns whether the results were shown.
    pub fn resolve(&mut self, ticket: &SearchTicket, results: Vec<Hospital>) -> bool {
        let current = self.in_flight.as_ref() == Some(ticket);
        if current {
            self.in_flight = None;
        }
        if !current || !self.listing_active {
            return false;
        }
        self.state.results = Some(results);
        self.state.results_query = Some(ticket.query.clone());
        true
    }

    /// A fetch for `ticket` failed. Results on screen are left untouched.
    pub fn fail(&mut self, ticket: &SearchTicket) {
        if self.in_flight.as_ref() == Some(ticket) {
            self.in_flight = None;
        }
    }

    /// Called by the listing page on mount (`true`) and cleanup (`false`).
    pub fn set_listing_active(&mut self, active: bool) {
        self.listing_active = active;
    }

    pub fn listing_active(&self) -> bool {
        self.listing_active
    }

    /// True while a timer is waiting or a fetch is outstanding.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some() || self.in_flight.is_some()
    }
}
