pub mod config;
pub mod interactive;
pub mod logging;
pub mod omdb;
pub mod output;
pub mod schemas;
pub mod storage;

pub use config::{AppConfig, ConfigOverrides, SearchSettings};
pub use interactive::InteractiveSearch;
pub use omdb::{FetchError, MovieApi, OmdbClient};
pub use schemas::{MovieDetail, SearchResultItem, WatchedMovie};
pub use storage::{FileStorage, PersistedState, Storage};
