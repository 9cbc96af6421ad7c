//! Outbound adapters implementing domain ports.
//!
//! Only an in-memory store exists; state lives for the lifetime of the
//! process and is lost on restart.

pub mod memory;
