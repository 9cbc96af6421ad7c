//! Domain ports for the hexagonal boundary.
//!
//! [`DataStore`] is the driven port implemented by storage adapters. The
//! driving ports ([`UsersService`], [`TasksService`], [`StatsQuery`]) are what
//! inbound adapters call; the domain's `TaskBoardService` implements them.

mod data_store;
mod stats_query;
mod tasks_service;
mod users_service;

#[cfg(test)]
pub use data_store::MockDataStore;
pub use data_store::DataStore;
#[cfg(test)]
pub use stats_query::MockStatsQuery;
pub use stats_query::StatsQuery;
#[cfg(test)]
pub use tasks_service::MockTasksService;
pub use tasks_service::TasksService;
#[cfg(test)]
pub use users_service::MockUsersService;
pub use users_service::UsersService;
