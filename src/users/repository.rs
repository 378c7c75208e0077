//! HTTP client for the external user-directory API.

use reqwest::header::ACCEPT;

use crate::config::ServiceConfig;
use crate::users::model::User;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Failure talking to the directory collaborator. Never surfaced to the
/// caller directly; the handler maps it to a generic 500 envelope.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("directory request failed")]
    Request(#[from] reqwest::Error),
}

/// Thin reqwest wrapper around `GET {base}/users/{username}`.
pub struct UserRepository {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl UserRepository {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.github_api_base_url.clone(),
            access_token: config.github_access_token.clone(),
        }
    }

    /// Fetch one user by username. Non-success statuses, transport failures
    /// and undeserializable bodies are all [`DirectoryError`]s.
    pub async fn get_by_username(&self, username: &str) -> Result<User, DirectoryError> {
        let user = self
            .client
            .get(format!("{}/users/{}", self.base_url, username))
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(GITHUB_API_VERSION_HEADER, GITHUB_API_VERSION)
            .bearer_auth(&self.access_token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(user)
    }
}
