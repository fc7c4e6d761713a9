pub mod config;
pub mod forms;
pub mod repository;
pub mod roster_app;
pub mod store;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use roster_app::{RosterApp, SubmitOutcome};
