use crate::omdb::FetchError;
use crate::schemas::{MovieDetail, SearchResultItem};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Mode {
    Browse,
    Help,
}

/// Which part of the screen receives plain keystrokes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Focus {
    Search,
    Detail,
    Watched,
}

impl Focus {
    /// Next focus target for Tab. The detail pane is only reachable while
    /// it is open, and neither side target while the side box is collapsed.
    pub fn next(self, detail_open: bool, side_open: bool) -> Self {
        match self {
            Focus::Search if side_open && detail_open => Focus::Detail,
            Focus::Search if side_open => Focus::Watched,
            Focus::Search => Focus::Search,
            Focus::Detail | Focus::Watched => Focus::Search,
        }
    }
}

/// The two collapsible boxes of the main screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Panel {
    Results,
    Side,
}

pub type SearchOutcome = Result<Vec<SearchResultItem>, FetchError>;
pub type DetailOutcome = Result<MovieDetail, FetchError>;

// Search request and response for async communication
#[derive(Clone, Debug, PartialEq)]
pub struct SearchRequest {
    pub id: u64,
    pub query: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchResponse {
    pub id: u64,
    pub outcome: SearchOutcome,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailRequest {
    pub id: u64,
    pub imdb_id: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailResponse {
    pub id: u64,
    pub outcome: DetailOutcome,
}
