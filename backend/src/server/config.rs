//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use taskboard::domain::ports::DataStore;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: Option<Arc<dyn DataStore>>,
}

impl ServerConfig {
    /// Construct a server configuration bound to `bind_addr`.
    ///
    /// Without [`ServerConfig::with_store`] the server starts from the seeded
    /// in-memory store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            store: None,
        }
    }

    /// Serve from the supplied store instead of a freshly seeded one.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Exercised by server tests to inject an empty store")
    )]
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn DataStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Exercised by server tests")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
