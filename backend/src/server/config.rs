//! HTTP server configuration object and helpers.

use std::io;
use std::time::Duration;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;
use post_aggregator::settings::ServiceSettings;
use url::Url;

/// Upstream client parameters resolved from settings.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub(crate) base_url: Url,
    pub(crate) timeout: Duration,
    pub(crate) user_agent: String,
}

impl UpstreamConfig {
    #[must_use]
    pub fn new(base_url: Url, timeout: Duration, user_agent: impl Into<String>) -> Self {
        Self {
            base_url,
            timeout,
            user_agent: user_agent.into(),
        }
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) upstream: UpstreamConfig,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: (String, u16), upstream: UpstreamConfig) -> Self {
        Self {
            bind_addr,
            upstream,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Resolve defaults and validate loaded settings.
    ///
    /// # Errors
    /// Returns [`io::ErrorKind::InvalidInput`] for an unusable upstream URL or
    /// a zero timeout.
    pub fn from_settings(settings: &ServiceSettings) -> io::Result<Self> {
        let upstream = UpstreamConfig::new(
            settings.upstream_base_url()?,
            settings.upstream_timeout()?,
            settings.user_agent(),
        );
        Ok(Self::new(settings.bind_addr(), upstream))
    }

    /// Return the host and port the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(dead_code, reason = "Exercised by server tests")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.bind_addr.0.as_str(), self.bind_addr.1)
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
