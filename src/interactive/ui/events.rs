use crate::interactive::domain::models::{DetailOutcome, Panel, SearchOutcome};

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    // Search events
    QueryChanged(String),
    SearchRequested,
    SearchCompleted { id: u64, outcome: SearchOutcome },
    SelectResult(usize),

    // Detail events
    SelectMovie(String),
    DetailLoaded { id: u64, outcome: DetailOutcome },
    CloseDetail,
    SetRating(u8),
    AddToWatched,

    // Watched list events
    SelectWatched(usize),
    DeleteWatched(String),

    // Focus and layout
    FocusSearch,
    CycleFocus,
    TogglePanel(Panel),
    ShowHelp,
    CloseHelp,
}
