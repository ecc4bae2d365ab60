//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on driving ports and stay testable without upstream traffic.

use std::sync::Arc;

use crate::domain::ports::{PostsCommand, PostsQuery, UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub posts: Arc<dyn PostsQuery>,
    pub posts_command: Arc<dyn PostsCommand>,
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Construct state from the four driving ports.
    ///
    /// The aggregation services implement both the query and command side, so
    /// production wiring usually passes the same `Arc` twice.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// use post_aggregator::domain::{PostAggregationService, UserDirectoryService};
    /// use post_aggregator::inbound::http::state::HttpState;
    /// use post_aggregator::outbound::placeholder::PlaceholderHttpSource;
    ///
    /// let base = url::Url::parse("https://jsonplaceholder.typicode.com/").expect("URL");
    /// let source = Arc::new(PlaceholderHttpSource::new(base, Duration::from_secs(10)).expect("client"));
    /// let posts = Arc::new(PostAggregationService::new(source.clone()));
    /// let users = Arc::new(UserDirectoryService::new(source));
    /// let state = HttpState::new(posts.clone(), posts, users.clone(), users);
    /// let _posts = state.posts.clone();
    /// ```
    pub fn new(
        posts: Arc<dyn PostsQuery>,
        posts_command: Arc<dyn PostsCommand>,
        users: Arc<dyn UsersQuery>,
        users_command: Arc<dyn UsersCommand>,
    ) -> Self {
        Self {
            posts,
            posts_command,
            users,
            users_command,
        }
    }
}
