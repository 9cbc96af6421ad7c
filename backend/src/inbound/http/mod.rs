//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod routes;
pub mod state;
pub mod stats;
pub mod tasks;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;
