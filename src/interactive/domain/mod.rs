pub mod models;
pub mod rating;
pub mod watched;

#[cfg(test)]
mod models_test;
#[cfg(test)]
mod watched_test;
