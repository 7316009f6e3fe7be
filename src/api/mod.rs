// HTTP client for the Fervor Juvenil backend
use leptos::{provide_context, use_context};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::types::api::{ApiErrorBody, ApiResponse, Paginated};

#[cfg(not(feature = "ssr"))]
use gloo_net::http::Request;

pub mod auth;
pub mod profile;
pub mod query;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("http {status}")]
    Http {
        status: u16,
        body: Option<ApiErrorBody>,
    },
    #[error("session expired")]
    Unauthorized,
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl ApiError {
    /// User-facing message; prefers the backend's own message when present.
    pub fn message(&self) -> String {
        match self {
            ApiError::Http {
                body: Some(body), ..
            } => body.message.clone(),
            ApiError::Http { status, body: None } => {
                format!("Error del servidor ({status})")
            }
            ApiError::Unauthorized => "Su sesión ha expirado".to_string(),
            ApiError::Network(_) => "No se pudo conectar con el servidor".to_string(),
            ApiError::Serialization(_) | ApiError::Deserialization(_) => {
                "Respuesta inesperada del servidor".to_string()
            }
        }
    }

    /// First validation error per field, when the backend sent any.
    pub fn field_errors(&self) -> Option<std::collections::HashMap<String, String>> {
        match self {
            ApiError::Http {
                body: Some(body), ..
            } => body.field_errors(),
            _ => None,
        }
    }
}

/// Maps a finished HTTP exchange onto the crate error taxonomy. 401 is
/// surfaced as `Unauthorized` so the caller can tear the session down;
/// other failures carry the parsed error body when one was sent.
fn parse_response<T>(status: u16, text: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !(200..300).contains(&status) {
        let body = serde_json::from_str::<ApiErrorBody>(text).ok();
        if status == 403 || status >= 500 {
            log::error!("request failed with status {status}");
        }
        return Err(ApiError::Http { status, body });
    }
    serde_json::from_str(text).map_err(|e| ApiError::Deserialization(e.to_string()))
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    #[cfg(feature = "ssr")]
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            #[cfg(feature = "ssr")]
            client: reqwest::Client::new(),
        }
    }

    // Envelope-aware verbs. Single resources arrive wrapped in
    // `ApiResponse` and are unwrapped here; paginated lists come bare.

    pub async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let envelope: ApiResponse<T> = self.get_json(path, &[]).await?;
        Ok(envelope.data)
    }

    pub async fn get_paginated<T>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Paginated<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        self.get_json(path, query).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let envelope: ApiResponse<T> = self.send_json("POST", path, body).await?;
        Ok(envelope.data)
    }

    /// POST for endpoints that respond without the `ApiResponse` wrapper
    /// (the login endpoint returns its payload bare).
    pub async fn post_raw<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        self.send_json("POST", path, body).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let envelope: ApiResponse<T> = self.send_json("PUT", path, body).await?;
        Ok(envelope.data)
    }

    // Transport layer

    async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        #[cfg(feature = "ssr")]
        {
            let mut request = self.client.get(&url);
            if !query.is_empty() {
                request = request.query(query);
            }
            if let Some(token) = crate::auth::stored_token() {
                request = request.bearer_auth(token);
            }
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = response.status().as_u16();
            let text = response
                .text()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            parse_response(status, &text)
        }

        #[cfg(not(feature = "ssr"))]
        {
            let mut builder = Request::get(&url);
            if !query.is_empty() {
                builder = builder.query(query.iter().map(|(k, v)| (*k, v.as_str())));
            }
            if let Some(token) = crate::auth::stored_token() {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            let response = builder
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.finish(parse_response(status, &text))
        }
    }

    async fn send_json<T, B>(&self, method: &str, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = format!("{}{}", self.base_url, path);

        #[cfg(feature = "ssr")]
        {
            let mut request = match method {
                "PUT" => self.client.put(&url),
                _ => self.client.post(&url),
            };
            if let Some(token) = crate::auth::stored_token() {
                request = request.bearer_auth(token);
            }
            let response = request
                .json(body)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = response.status().as_u16();
            let text = response
                .text()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            parse_response(status, &text)
        }

        #[cfg(not(feature = "ssr"))]
        {
            let mut builder = match method {
                "PUT" => Request::put(&url),
                _ => Request::post(&url),
            };
            if let Some(token) = crate::auth::stored_token() {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            let response = builder
                .json(body)
                .map_err(|e| ApiError::Serialization(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.finish(parse_response(status, &text))
        }
    }

    /// A 401 invalidates the whole session: drop stored credentials and
    /// hard-navigate to the login page. No in-place token refresh.
    #[cfg(not(feature = "ssr"))]
    fn finish<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if matches!(result, Err(ApiError::Unauthorized)) {
            crate::auth::clear_stored_session();
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
        result
    }
}

/// Register the API client in the reactive context so views resolve it
/// through dependency injection instead of a module-level singleton.
pub fn provide_api(client: ApiClient) {
    provide_context(client);
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient must be provided at the app root")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_response_unwraps_success() {
        let body = r#"{ "data": 7, "success": true }"#;
        let parsed: ApiResponse<u32> = parse_response(200, body).unwrap();
        assert_eq!(parsed.data, 7);
    }

    #[test]
    fn parse_response_maps_401_to_unauthorized() {
        let err = parse_response::<ApiResponse<u32>>(401, "").unwrap_err();
        assert_eq!(err, ApiError::Unauthorized);
    }

    #[test]
    fn parse_response_carries_error_body() {
        let body = r#"{ "message": "Correo en uso", "statusCode": 422 }"#;
        let err = parse_response::<ApiResponse<u32>>(422, body).unwrap_err();
        assert_eq!(err.message(), "Correo en uso");
        match err {
            ApiError::Http { status, body } => {
                assert_eq!(status, 422);
                assert!(body.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_response_tolerates_unparseable_error_body() {
        let err = parse_response::<ApiResponse<u32>>(500, "<html>oops</html>").unwrap_err();
        match err {
            ApiError::Http { status: 500, body } => assert!(body.is_none()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_response_flags_bad_payload() {
        let err = parse_response::<ApiResponse<u32>>(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
