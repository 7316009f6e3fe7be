// Profile endpoints
use super::{query::UserListQuery, ApiClient, ApiError};
use crate::types::{api::Paginated, UpdateProfilePayload, User};
use uuid::Uuid;

impl ApiClient {
    /// GET /users/me
    pub async fn get_my_profile(&self) -> Result<User, ApiError> {
        self.get("/users/me").await
    }

    /// PUT /users/me — partial update, only populated fields are sent.
    pub async fn update_my_profile(
        &self,
        payload: &UpdateProfilePayload,
    ) -> Result<User, ApiError> {
        self.put("/users/me", payload).await
    }

    /// GET /users/:uuid (admin only)
    pub async fn get_user_by_uuid(&self, uuid: Uuid) -> Result<User, ApiError> {
        self.get(&format!("/users/{uuid}")).await
    }

    /// GET /users?page=&limit=&sortBy=&sortOrder=&search= (admin only)
    pub async fn get_all_users_paginated(
        &self,
        query: &UserListQuery,
    ) -> Result<Paginated<User>, ApiError> {
        self.get_paginated("/users", &query.to_query_pairs()).await
    }
}
