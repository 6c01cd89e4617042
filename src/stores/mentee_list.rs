//! Fetch lifecycle for the mentee roster of one mentor and year
//!
//! Each request gets a generation number. When inputs change while a fetch
//! is still running, the older response arrives with a stale generation and
//! is dropped, so the view always reflects the latest (mentor, year) pair.

use crate::services::mentees::{ApiError, Mentee, MenteeDirectory};
use crate::utils::LoadState;

/// The two inputs a roster fetch needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub mentor_id: String,
    pub year: String,
}

impl ListQuery {
    /// Returns `None` unless both inputs are present and non-blank
    pub fn from_inputs(mentor_id: Option<&str>, year: Option<&str>) -> Option<Self> {
        let mentor_id = mentor_id.map(str::trim).filter(|s| !s.is_empty())?;
        let year = year.map(str::trim).filter(|s| !s.is_empty())?;
        Some(Self {
            mentor_id: mentor_id.to_string(),
            year: year.to_string(),
        })
    }
}

/// Handle for one issued fetch; pass it back to [`ListController::resolve`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    query: ListQuery,
}

impl FetchTicket {
    /// Run the fetch this ticket stands for
    pub async fn fetch<D>(&self, directory: &D) -> Result<Vec<Mentee>, ApiError>
    where
        D: MenteeDirectory + ?Sized,
    {
        directory.mentees_for(&self.query.mentor_id, &self.query.year).await
    }
}

/// What the roster page should render
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListView<'a> {
    AwaitingInputs,
    Loading,
    Empty,
    Mentees(&'a [Mentee]),
    Failed(&'a str),
}

#[derive(Debug, Default)]
pub struct ListController {
    generation: u64,
    query: Option<ListQuery>,
    state: LoadState<Vec<Mentee>>,
}

impl ListController {
    /// Start a fetch for `query`, or park in the awaiting state when inputs are missing
    pub fn request(&mut self, query: Option<ListQuery>) -> Option<FetchTicket> {
        // Bump even when parking so a fetch still in flight cannot land afterwards
        self.generation += 1;
        self.query = query.clone();

        match query {
            Some(query) => {
                self.state = LoadState::Loading;
                Some(FetchTicket {
                    generation: self.generation,
                    query,
                })
            }
            None => {
                log::debug!("Mentee list waiting for mentor id and year");
                self.state = LoadState::AwaitingInput;
                None
            }
        }
    }

    /// Re-issue the last known query under a fresh generation
    pub fn retry(&mut self) -> Option<FetchTicket> {
        let query = self.query.clone()?;
        self.request(Some(query))
    }

    /// Apply a fetch outcome. Returns false when the ticket was superseded.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<Vec<Mentee>, ApiError>) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "Dropping stale mentee response for mentor {} and year {}",
                ticket.query.mentor_id,
                ticket.query.year
            );
            return false;
        }

        match &result {
            Ok(mentees) => log::info!(
                "Loaded {} mentees for mentor {} and year {}",
                mentees.len(),
                ticket.query.mentor_id,
                ticket.query.year
            ),
            Err(e) => log::error!("{}", failure_message(&ticket.query, e)),
        }
        self.state = result.into();
        true
    }

    pub fn view(&self) -> ListView<'_> {
        match &self.state {
            LoadState::AwaitingInput => ListView::AwaitingInputs,
            LoadState::Loading => ListView::Loading,
            LoadState::Loaded(mentees) if mentees.is_empty() => ListView::Empty,
            LoadState::Loaded(mentees) => ListView::Mentees(mentees),
            LoadState::Failed(msg) => ListView::Failed(msg),
        }
    }
}

/// Log line for a failed roster fetch
pub fn failure_message(query: &ListQuery, error: &ApiError) -> String {
    format!(
        "Failed to fetch mentees for mentor {} and year {}: {}",
        query.mentor_id, query.year, error
    )
}
