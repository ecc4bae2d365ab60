//! Service configuration loaded via OrthoConfig.
//!
//! CLI flags, `AGGREGATOR_*` environment variables and config files can each
//! supply a subset of fields. `port` always resolves through its OrthoConfig
//! default; the remaining fields are optional and the accessors apply
//! defaults and validate.

use std::io;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::outbound::placeholder::DEFAULT_USER_AGENT;

const DEFAULT_BIND_HOST: &str = "127.0.0.1";
const DEFAULT_UPSTREAM_BASE_URL: &str = "https://jsonplaceholder.typicode.com/";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Configuration for the HTTP listener and the upstream client.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "AGGREGATOR")]
pub struct ServiceSettings {
    /// Interface the HTTP server binds to.
    pub bind_host: Option<String>,
    /// Port the HTTP server listens on.
    #[ortho_config(default = 8000)]
    pub port: u16,
    /// Base URL of the upstream posts/users/comments API.
    pub upstream_base_url: Option<String>,
    /// Per-request timeout applied to upstream calls, in seconds.
    pub upstream_timeout_secs: Option<u64>,
    /// `User-Agent` sent upstream.
    pub user_agent: Option<String>,
}

impl ServiceSettings {
    /// Host and port the server binds to.
    pub fn bind_addr(&self) -> (String, u16) {
        (
            self.bind_host
                .clone()
                .unwrap_or_else(|| DEFAULT_BIND_HOST.to_owned()),
            self.port,
        )
    }

    /// Parsed upstream base URL.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::InvalidInput`] when the value is not an
    /// absolute `http` or `https` URL.
    pub fn upstream_base_url(&self) -> io::Result<Url> {
        let raw = self
            .upstream_base_url
            .as_deref()
            .unwrap_or(DEFAULT_UPSTREAM_BASE_URL);
        let url = Url::parse(raw).map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid upstream base URL {raw:?}: {err}"),
            )
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("upstream base URL {raw:?} must use http or https"),
            ));
        }
        Ok(url)
    }

    /// Upstream request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::InvalidInput`] for a zero timeout.
    pub fn upstream_timeout(&self) -> io::Result<Duration> {
        match self
            .upstream_timeout_secs
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS)
        {
            0 => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "upstream timeout must be at least one second",
            )),
            secs => Ok(Duration::from_secs(secs)),
        }
    }

    /// `User-Agent` header value for upstream requests.
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}
