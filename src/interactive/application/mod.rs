pub mod request_worker;
pub mod search_service;
pub mod shortcuts;
pub mod terminal_io;

#[cfg(test)]
mod request_worker_test;
#[cfg(test)]
mod shortcuts_test;
#[cfg(test)]
pub(crate) mod test_support;
