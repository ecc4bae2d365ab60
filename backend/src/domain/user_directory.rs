//! User aggregator: pass-through to the upstream users resource with local
//! validation on the way out.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

use super::ports::{PlaceholderSource, UserRecord, UsersCommand, UsersQuery};
use super::source_errors::{Lookup, map_source_error};
use super::{Error, NewUser, User};

/// Service behind the users endpoints.
#[derive(Clone)]
pub struct UserDirectoryService {
    source: Arc<dyn PlaceholderSource>,
}

impl UserDirectoryService {
    /// Build the service over an upstream source.
    pub fn new(source: Arc<dyn PlaceholderSource>) -> Self {
        Self { source }
    }
}

/// Apply the local user rules to a record read back from upstream.
///
/// Upstream data that breaks the rules is an upstream failure, not a caller
/// mistake, so it surfaces as a bad gateway.
fn validate_record(record: UserRecord) -> Result<User, Error> {
    let UserRecord {
        id,
        name,
        username,
        email,
        phone,
    } = record;
    NewUser::try_new(name, username, email, phone)
        .map(|fields| User::new(id, fields))
        .map_err(|err| {
            warn!(user_id = id, field = err.field(), "upstream user failed validation");
            Error::bad_gateway(format!("upstream user {id} failed validation: {err}")).with_details(
                json!({ "userId": id, "field": err.field(), "code": err.code() }),
            )
        })
}

#[async_trait]
impl UsersQuery for UserDirectoryService {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        let records = self
            .source
            .list_users()
            .await
            .map_err(|error| map_source_error(error, Lookup::Dependent))?;
        debug!(users = records.len(), "validating upstream users");
        records.into_iter().map(validate_record).collect()
    }
}

#[async_trait]
impl UsersCommand for UserDirectoryService {
    async fn create_user(&self, user: NewUser) -> Result<User, Error> {
        let record = self
            .source
            .create_user(&user)
            .await
            .map_err(|error| map_source_error(error, Lookup::Dependent))?;
        validate_record(record)
    }
}
