//! Builders wiring the upstream adapter into the HTTP state.

use std::io;
use std::sync::Arc;

use actix_web::web;
use post_aggregator::domain::ports::PlaceholderSource;
use post_aggregator::domain::{PostAggregationService, UserDirectoryService};
use post_aggregator::inbound::http::state::HttpState;
use post_aggregator::outbound::placeholder::PlaceholderHttpSource;
use tracing::info;

use super::UpstreamConfig;

/// Build one pooled upstream client and both aggregation services over it.
///
/// # Errors
/// Returns an [`io::Error`] when the reqwest client cannot be constructed.
pub(crate) fn build_http_state(upstream: &UpstreamConfig) -> io::Result<web::Data<HttpState>> {
    let source: Arc<dyn PlaceholderSource> = Arc::new(
        PlaceholderHttpSource::with_user_agent(
            upstream.base_url.clone(),
            upstream.timeout,
            &upstream.user_agent,
        )
        .map_err(|err| io::Error::other(format!("build upstream HTTP client: {err}")))?,
    );
    info!(
        base_url = %upstream.base_url,
        timeout_secs = upstream.timeout.as_secs(),
        "upstream client ready"
    );

    let posts = Arc::new(PostAggregationService::new(source.clone()));
    let users = Arc::new(UserDirectoryService::new(source));
    Ok(web::Data::new(HttpState::new(
        posts.clone(),
        posts,
        users.clone(),
        users,
    )))
}
