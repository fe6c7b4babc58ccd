pub mod movie;
pub mod omdb;

pub use movie::{MovieDetail, SearchResultItem, WatchedMovie};
pub use omdb::{DetailPayload, SearchEnvelope, SearchHit};
