use serde::{Deserialize, Serialize};

/// Repository model - the star of the show
///
/// Strict local shape: everything the two screens need, nothing else.
/// Fields are never mutated after conversion; a new search replaces the
/// whole list wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub stars: u32,
    pub language: Option<String>,
    pub owner: String,
}

/// One decoded search response: the server-side match count plus the
/// first page of repositories, in server order.
///
/// `repositories.len()` never exceeds `total_count` - the server counts
/// every match but only returns one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub total_count: u64,
    pub repositories: Vec<Repository>,
}
