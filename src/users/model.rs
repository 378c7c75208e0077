//! Typed user object returned by the directory API.

use serde::{Deserialize, Serialize};

/// GitHub-style directory user. Only `login` is guaranteed; absent optional
/// fields are omitted from serialized output rather than rendered as null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub login: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_repos: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub following: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_payload_round_trips_without_nulls() {
        let user: User = serde_json::from_value(json!({"login": "octocat"})).unwrap();
        assert_eq!(user.login, "octocat");
        assert_eq!(serde_json::to_value(&user).unwrap(), json!({"login": "octocat"}));
    }

    #[test]
    fn full_payload_deserializes() {
        let user: User = serde_json::from_value(json!({
            "login": "octocat",
            "id": 583231,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "name": "The Octocat",
            "company": "@github",
            "location": "San Francisco",
            "public_repos": 8,
            "followers": 10000,
            "following": 9,
            "created_at": "2011-01-25T18:44:36Z"
        }))
        .unwrap();
        assert_eq!(user.id, Some(583_231));
        assert_eq!(user.name.as_deref(), Some("The Octocat"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let user: User =
            serde_json::from_value(json!({"login": "octocat", "gravatar_id": ""})).unwrap();
        assert_eq!(user.login, "octocat");
    }
}
