//! Listener settings loaded via OrthoConfig.
//!
//! Sources, highest precedence first: CLI flags (`--host`, `--port`),
//! `TASKBOARD_*` environment variables, configuration files. When no port is
//! configured the bare `PORT` variable used by container platforms is
//! honoured before falling back to 8080.

use std::env;
use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::warn;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const LEGACY_PORT_VAR: &str = "PORT";

/// Configuration values controlling where the HTTP listener binds.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TASKBOARD")]
pub struct ServerSettings {
    /// Interface to bind; defaults to every IPv4 interface.
    #[ortho_config(default = DEFAULT_HOST.to_owned())]
    pub host: String,
    /// TCP port to bind.
    pub port: Option<u16>,
}

impl ServerSettings {
    /// Return the interface to bind.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Return the configured port, then `PORT`, then 8080.
    pub fn port(&self) -> u16 {
        resolve_port(self.port, env::var(LEGACY_PORT_VAR).ok().as_deref())
    }

    /// Resolve the socket address to bind.
    ///
    /// # Errors
    /// Returns [`io::Error`] when the host does not resolve.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        let host = self.host();
        (host, self.port())
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| io::Error::other(format!("host {host} resolved to no addresses")))
    }
}

/// Pick the listener port from the typed setting and the legacy variable.
///
/// An unparseable legacy value is ignored with a warning.
fn resolve_port(configured: Option<u16>, legacy: Option<&str>) -> u16 {
    if let Some(port) = configured {
        return port;
    }
    match legacy.map(|raw| (raw, raw.trim().parse::<u16>())) {
        Some((_, Ok(port))) => port,
        Some((raw, Err(error))) => {
            warn!(value = raw, %error, "ignoring unparseable PORT");
            DEFAULT_PORT
        }
        None => DEFAULT_PORT,
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for listener settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_args(args: &[&str]) -> ServerSettings {
        let argv = std::iter::once(OsString::from("taskboard")).chain(args.iter().map(OsString::from));
        ServerSettings::load_from_iter(argv).expect("config should load")
    }

    #[rstest]
    #[case(Some(9000), Some("7000"), 9000)]
    #[case(None, Some("7000"), 7000)]
    #[case(None, Some(" 7001 "), 7001)]
    #[case(None, Some("seventy"), DEFAULT_PORT)]
    #[case(None, Some("70000"), DEFAULT_PORT)]
    #[case(None, None, DEFAULT_PORT)]
    fn port_resolution_order(
        #[case] configured: Option<u16>,
        #[case] legacy: Option<&str>,
        #[case] expected: u16,
    ) {
        assert_eq!(resolve_port(configured, legacy), expected);
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("TASKBOARD_HOST", None::<String>),
            ("TASKBOARD_PORT", None::<String>),
            ("PORT", None::<String>),
        ]);

        let settings = load_from_args(&[]);
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port, None);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert_eq!(
            settings.bind_addr().expect("address resolves"),
            SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))
        );
    }

    #[rstest]
    fn legacy_port_variable_is_honoured() {
        let _guard = lock_env([
            ("TASKBOARD_HOST", None::<String>),
            ("TASKBOARD_PORT", None::<String>),
            ("PORT", Some("3001".to_owned())),
        ]);

        assert_eq!(load_from_args(&[]).port(), 3001);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("TASKBOARD_HOST", Some("127.0.0.1".to_owned())),
            ("TASKBOARD_PORT", Some("4100".to_owned())),
            ("PORT", Some("3001".to_owned())),
        ]);

        let settings = load_from_args(&[]);
        assert_eq!(settings.host(), "127.0.0.1");
        assert_eq!(settings.port(), 4100);
        assert_eq!(
            settings.bind_addr().expect("address resolves"),
            SocketAddr::from(([127, 0, 0, 1], 4100))
        );
    }

    #[rstest]
    fn cli_flags_override_environment() {
        let _guard = lock_env([
            ("TASKBOARD_HOST", None::<String>),
            ("TASKBOARD_PORT", Some("4100".to_owned())),
            ("PORT", None::<String>),
        ]);

        assert_eq!(load_from_args(&["--port", "4200"]).port(), 4200);
    }
}
