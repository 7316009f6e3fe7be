// Auth endpoints
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};
use crate::types::{Role, User};

#[derive(Debug, Clone, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleEntry {
    pub name: Role,
}

/// Raw login response: `{ accessToken, user, roles[] }`. Roles arrive as
/// a separate list of `{ name }` records and are folded onto the user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
    #[serde(default)]
    pub roles: Vec<RoleEntry>,
}

/// Authenticated session ready to persist.
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub token: String,
    pub user: User,
}

pub(crate) fn merge_roles(mut user: User, roles: Vec<RoleEntry>) -> User {
    if !roles.is_empty() {
        user.roles = roles.into_iter().map(|entry| entry.name).collect();
    }
    user
}

impl ApiClient {
    /// POST /auth/login
    pub async fn login(&self, payload: &LoginPayload) -> Result<LoginSession, ApiError> {
        let response: LoginResponse = self.post_raw("/auth/login", payload).await?;
        Ok(LoginSession {
            token: response.access_token,
            user: merge_roles(response.user, response.roles),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        serde_json::from_str(
            r#"{
                "uuid": "8f9c2b6e-0a1d-4c3e-9b2f-1a2b3c4d5e6f",
                "firstName": "Ana",
                "lastName": "Quispe",
                "email": "ana@example.com",
                "slug": "ana-quispe",
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00Z"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn login_response_folds_roles_onto_user() {
        let response: LoginResponse = serde_json::from_str(
            r#"{
                "accessToken": "jwt-token",
                "user": {
                    "uuid": "8f9c2b6e-0a1d-4c3e-9b2f-1a2b3c4d5e6f",
                    "firstName": "Ana",
                    "lastName": "Quispe",
                    "email": "ana@example.com",
                    "slug": "ana-quispe",
                    "createdAt": "2024-01-01T00:00:00Z",
                    "updatedAt": "2024-01-01T00:00:00Z"
                },
                "roles": [{ "name": "admin" }, { "name": "user" }]
            }"#,
        )
        .unwrap();
        let user = merge_roles(response.user, response.roles);
        assert_eq!(user.roles, vec![Role::Admin, Role::User]);
        assert!(user.is_admin());
    }

    #[test]
    fn merge_roles_keeps_existing_roles_when_list_is_empty() {
        let mut user = sample_user();
        user.roles = vec![Role::User];
        let merged = merge_roles(user, Vec::new());
        assert_eq!(merged.roles, vec![Role::User]);
    }
}
