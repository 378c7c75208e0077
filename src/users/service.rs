//! User lookup service layer.

use crate::config::ServiceConfig;
use crate::http::middleware::RequestContext;
use crate::users::model::User;
use crate::users::repository::{DirectoryError, UserRepository};

/// Service sitting between the handler and the directory repository.
///
/// First log-capable layer for collaborator failures: the full error chain
/// is recorded here, then the error propagates upward unmodified.
pub struct UserService {
    repository: UserRepository,
}

impl UserService {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            repository: UserRepository::new(config),
        }
    }

    pub async fn get_by_username(
        &self,
        context: &RequestContext,
        username: &str,
    ) -> Result<User, DirectoryError> {
        match self.repository.get_by_username(username).await {
            Ok(user) => Ok(user),
            Err(err) => {
                context.logger.cause(&err).error("Error fetching user");
                Err(err)
            }
        }
    }
}
