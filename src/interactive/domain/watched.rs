use crate::schemas::WatchedMovie;
use serde::Serialize;

/// The user's watched movies, at most one entry per id, in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WatchedList {
    movies: Vec<WatchedMovie>,
}

/// Aggregates shown above the watched list.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WatchedSummary {
    pub count: usize,
    pub avg_imdb_rating: Option<f64>,
    pub avg_user_rating: Option<f64>,
    pub avg_runtime_minutes: Option<f64>,
}

impl WatchedList {
    /// Builds a list from stored entries. Later duplicates of an id replace
    /// the earlier entry in place.
    pub fn new(movies: Vec<WatchedMovie>) -> Self {
        let mut list = Self::default();
        for movie in movies {
            list.upsert(movie);
        }
        list
    }

    /// Inserts or replaces by id. Returns true when an entry was replaced.
    pub fn upsert(&mut self, movie: WatchedMovie) -> bool {
        match self.movies.iter_mut().find(|m| m.id == movie.id) {
            Some(existing) => {
                *existing = movie;
                true
            }
            None => {
                self.movies.push(movie);
                false
            }
        }
    }

    /// Removes the entry with `id`. Returns false when it was not present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.movies.len();
        self.movies.retain(|m| m.id != id);
        self.movies.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&WatchedMovie> {
        self.movies.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn user_rating_for(&self, id: &str) -> Option<u8> {
        self.get(id).map(|m| m.user_rating)
    }

    pub fn movies(&self) -> &[WatchedMovie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn summary(&self) -> WatchedSummary {
        WatchedSummary {
            count: self.movies.len(),
            avg_imdb_rating: average(self.movies.iter().filter_map(|m| m.imdb_rating)),
            avg_user_rating: average(self.movies.iter().map(|m| f64::from(m.user_rating))),
            avg_runtime_minutes: average(
                self.movies
                    .iter()
                    .filter_map(|m| m.runtime_minutes.map(f64::from)),
            ),
        }
    }
}

fn average(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
