//! Domain ports and supporting types for the hexagonal boundary.

mod placeholder_source;
mod posts_command;
mod posts_query;
mod users_command;
mod users_query;

#[cfg(test)]
pub use placeholder_source::MockPlaceholderSource;
pub use placeholder_source::{PlaceholderSource, PlaceholderSourceError, PostRecord, UserRecord};
#[cfg(test)]
pub use posts_command::MockPostsCommand;
pub use posts_command::PostsCommand;
#[cfg(test)]
pub use posts_query::MockPostsQuery;
pub use posts_query::PostsQuery;
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
