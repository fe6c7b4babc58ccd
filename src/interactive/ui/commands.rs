#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    ExecuteSearch,
    ScheduleSearch(u64), // delay in milliseconds
    CancelSearch,
    FetchDetail,
    CancelDetail,
    PersistWatched,
    SetWindowTitle(String),
    ClearMessage,
    ScheduleClearMessage(u64), // delay in milliseconds
    Batch(Vec<Command>),
}

impl Command {
    /// Flattens nested batches and drops `None`.
    pub fn into_list(self) -> Vec<Command> {
        match self {
            Command::None => Vec::new(),
            Command::Batch(commands) => commands.into_iter().flat_map(Command::into_list).collect(),
            other => vec![other],
        }
    }
}
