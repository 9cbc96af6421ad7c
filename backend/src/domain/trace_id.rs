//! Correlation identifier carried by every request.
//!
//! The identifier sits in Tokio task-local storage for the lifetime of a
//! request, so error constructors and log statements pick it up without it
//! being passed around. Task locals do not follow `tokio::spawn`; wrap spawned
//! work in [`TraceId::scope`].

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

task_local! {
    static TRACE_ID: TraceId;
}

/// UUID identifying one request across logs, error bodies and the
/// `trace-id` response header.
///
/// # Examples
/// ```
/// use taskboard::TraceId;
///
/// assert!(TraceId::current().is_none());
/// assert!(TraceId::from_header("6f9619ff-8b86-4d01-b42d-00cf4fc964ff").is_some());
/// assert!(TraceId::from_header("req-42").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Fresh random (v4) identifier.
    #[must_use]
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Identifier supplied by a caller, accepted only when it is a UUID.
    pub fn from_header(value: &str) -> Option<Self> {
        value.trim().parse().ok()
    }

    /// Identifier of the request currently being served, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        TRACE_ID.try_with(|id| *id).ok()
    }

    /// Drive `fut` with `trace_id` as the current identifier.
    ///
    /// # Examples
    /// ```
    /// use taskboard::TraceId;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let trace_id: TraceId = "00000000-0000-0000-0000-000000000000"
    ///     .parse()
    ///     .expect("valid UUID");
    /// let observed = TraceId::scope(trace_id, async move { TraceId::current() }).await;
    /// assert_eq!(observed, Some(trace_id));
    /// # });
    /// ```
    pub async fn scope<Fut>(trace_id: TraceId, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        TRACE_ID.scope(trace_id, fut).await
    }

    /// Run `f` with `trace_id` as the current identifier.
    ///
    /// Actix extractors resolve inside `Service::call` before the returned
    /// future is polled, so the middleware needs this as well as [`scope`].
    ///
    /// [`scope`]: TraceId::scope
    pub fn sync_scope<F, R>(trace_id: TraceId, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        TRACE_ID.sync_scope(trace_id, f)
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
