//! In-memory storage adapter.
//!
//! The only [`crate::domain::ports::DataStore`] implementation. State lives
//! for the lifetime of the process and is never written anywhere else.

mod data_store;
mod seed;

pub use data_store::InMemoryDataStore;
