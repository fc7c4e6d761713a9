mod http_roster_api;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use http_roster_api::HttpRosterApi;
