pub mod components;
pub mod handlers;
mod http;

pub use http::*;
