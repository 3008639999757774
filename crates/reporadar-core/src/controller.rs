// Screen controller - the single owner of everything the two views render
use tracing::{debug, info};

use crate::{
    models::{Repository, SearchOutcome},
    query,
    search::SearchProvider,
    Result,
};

/// Status line shown before the first search.
pub const IDLE_STATUS: &str = "Enter a language and press Enter";

const SEARCHING_STATUS: &str = "Searching...";

/// Where the current (or last) search stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Searching,
    Results { total_count: u64 },
    Failed,
}

/// Everything the views read. Mutated only by the controller's transition
/// handlers, and only as a whole: status and results always change
/// together, never partially.
#[derive(Debug, Clone)]
pub struct ScreenState {
    pub phase: SearchPhase,
    pub status: String,
    pub repositories: Vec<Repository>,
    /// Index into `repositories` while the detail view is open.
    pub selected: Option<usize>,
    revision: u64,
}

impl ScreenState {
    fn new() -> Self {
        Self {
            phase: SearchPhase::Idle,
            status: IDLE_STATUS.to_string(),
            repositories: Vec::new(),
            selected: None,
            revision: 0,
        }
    }

    /// Bumped on every mutation; views re-render when it changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

/// Ticket handed out when a search starts. A completion only applies if
/// its ticket still matches the controller's current generation, so a
/// slow response from an older search can never overwrite newer state.
#[derive(Debug)]
pub struct SearchTicket {
    generation: u64,
    pub query: String,
}

/// Drives the list/detail state machine. Owns the provider it was handed
/// at construction - swap in a mock and the whole thing runs offline.
pub struct SearchController {
    provider: Box<dyn SearchProvider>,
    state: ScreenState,
    generation: u64,
}

impl SearchController {
    pub fn new(provider: Box<dyn SearchProvider>) -> Self {
        Self {
            provider,
            state: ScreenState::new(),
            generation: 0,
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    /// The repository behind the detail view, if one is open.
    pub fn selected_repository(&self) -> Option<&Repository> {
        self.state
            .selected
            .and_then(|index| self.state.repositories.get(index))
    }

    /// Run one search end to end. No-op on an empty token.
    pub async fn start_search(&mut self, language: &str) {
        let Some(ticket) = self.begin_search(language) else {
            return;
        };
        let result = self.perform(&ticket).await;
        self.finish_search(ticket, result);
    }

    /// The network half of a search. Takes `&self` so callers can render
    /// the in-progress state while this is in flight.
    pub async fn perform(&self, ticket: &SearchTicket) -> Result<SearchOutcome> {
        self.provider.search(&ticket.query).await
    }

    /// First half of a search: guard the empty token, move to `Searching`,
    /// clear the prior list and hand back a ticket carrying the query.
    pub fn begin_search(&mut self, language: &str) -> Option<SearchTicket> {
        if language.is_empty() {
            return None;
        }

        self.generation += 1;
        self.state.phase = SearchPhase::Searching;
        self.state.status = SEARCHING_STATUS.to_string();
        self.state.repositories.clear();
        self.state.selected = None;
        self.state.touch();

        let query = query::build_query(language);
        info!(%query, generation = self.generation, "search started");

        Some(SearchTicket {
            generation: self.generation,
            query,
        })
    }

    /// Second half: apply the outcome, atomically, unless a newer search
    /// has started since the ticket was issued.
    pub fn finish_search(&mut self, ticket: SearchTicket, result: Result<SearchOutcome>) {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                "dropping stale search completion"
            );
            return;
        }

        match result {
            Ok(outcome) => {
                self.state.phase = SearchPhase::Results {
                    total_count: outcome.total_count,
                };
                self.state.status = format!("Found {} popular projects", outcome.total_count);
                self.state.repositories = outcome.repositories;
            }
            Err(err) => {
                self.state.phase = SearchPhase::Failed;
                self.state.status = format!("Error: {}", err);
                self.state.repositories.clear();
            }
        }
        self.state.touch();
    }

    /// Open the detail view for a row of the current list. Returns false
    /// (and changes nothing) for an index outside the list.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.state.repositories.len() {
            return false;
        }
        self.state.selected = Some(index);
        self.state.touch();
        true
    }

    /// Close the detail view. The list and status underneath are whatever
    /// was last computed - never re-fetched.
    pub fn back(&mut self) {
        if self.state.selected.take().is_some() {
            self.state.touch();
        }
    }
}
