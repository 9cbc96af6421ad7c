//! Taskboard library modules.
//!
//! Hexagonal layout: [`domain`] holds entities, rules and ports;
//! [`inbound::http`] adapts Actix requests onto the driving ports;
//! [`outbound::memory`] implements the store port in process memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
