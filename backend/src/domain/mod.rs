//! Domain primitives, aggregates and use-cases.
//!
//! Purpose: define the strongly typed entities served by the API and the
//! rules that guard them. Value objects validate on construction so handlers
//! and adapters can only ever hold well-formed data.
//!
//! Public surface:
//! - Error, ErrorCode: transport-agnostic failure payload.
//! - User, NewUser and their value objects (UserName, EmailAddress, Role).
//! - Task, NewTask, TaskPatch, TaskStatus, TaskTitle.
//! - TaskFilter and Criterion for listing tasks.
//! - Stats snapshot types.
//! - TaskBoardService implementing the driving ports in [`ports`].

pub mod error;
pub mod ports;
pub mod stats;
pub mod task;
pub mod task_board;
pub mod task_filter;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::stats::{Stats, TaskStats, UserStats};
pub use self::task::{
    NewTask, Task, TaskId, TaskPatch, TaskStatus, TaskTitle, TaskValidationError,
};
pub use self::task_board::TaskBoardService;
pub use self::task_filter::{Criterion, TaskFilter};
pub use self::trace_id::TraceId;
pub use self::user::{EmailAddress, NewUser, Role, User, UserId, UserName, UserValidationError};
