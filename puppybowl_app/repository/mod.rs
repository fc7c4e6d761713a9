mod roster_api;

pub use roster_api::RosterApi;
