// API envelope types
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Top-level wrapper returned by every single-resource endpoint:
/// `{ data, message?, success }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "default_success")]
    pub success: bool,
}

fn default_success() -> bool {
    true
}

/// Paginated list endpoints skip the single-resource envelope and return
/// `{ data: [...], meta: {...} }` directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Server-computed pagination descriptor. The long field names are the
/// canonical shape; older service iterations used `page`/`limit`/`total`,
/// which the aliases still accept at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    #[serde(alias = "page")]
    pub current_page: u32,
    #[serde(alias = "limit")]
    pub items_per_page: u32,
    #[serde(alias = "total")]
    pub total_items: u64,
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// Error body returned by the backend on 4xx/5xx:
/// `{ message, errors?, statusCode }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default)]
    pub errors: Option<HashMap<String, Vec<String>>>,
    pub status_code: u16,
}

impl ApiErrorBody {
    /// First error message per field, for inline form display.
    pub fn field_errors(&self) -> Option<HashMap<String, String>> {
        let errors = self.errors.as_ref()?;
        if errors.is_empty() {
            return None;
        }
        Some(
            errors
                .iter()
                .map(|(field, messages)| {
                    let first = messages
                        .first()
                        .cloned()
                        .unwrap_or_else(|| "Campo inválido".to_string());
                    (field.clone(), first)
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_deserializes_canonical_names() {
        let json = r#"{
            "currentPage": 2,
            "itemsPerPage": 10,
            "totalItems": 35,
            "totalPages": 4,
            "hasNextPage": true,
            "hasPreviousPage": true
        }"#;
        let meta: PaginationMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.current_page, 2);
        assert_eq!(meta.items_per_page, 10);
        assert_eq!(meta.total_items, 35);
        assert!(meta.has_next_page);
    }

    #[test]
    fn meta_accepts_legacy_names() {
        let json = r#"{
            "page": 1,
            "limit": 20,
            "total": 3,
            "totalPages": 1,
            "hasNextPage": false,
            "hasPreviousPage": false
        }"#;
        let meta: PaginationMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.current_page, 1);
        assert_eq!(meta.items_per_page, 20);
        assert_eq!(meta.total_items, 3);
        assert!(!meta.has_next_page);
    }

    #[test]
    fn paginated_envelope_round_trip() {
        let json = r#"{
            "data": ["a", "b"],
            "meta": {
                "currentPage": 1,
                "itemsPerPage": 10,
                "totalItems": 2,
                "totalPages": 1,
                "hasNextPage": false,
                "hasPreviousPage": false
            }
        }"#;
        let page: Paginated<String> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.meta.total_pages, 1);
    }

    #[test]
    fn error_body_extracts_first_field_error() {
        let json = r#"{
            "message": "Validación fallida",
            "errors": { "email": ["Correo inválido", "Correo en uso"] },
            "statusCode": 422
        }"#;
        let body: ApiErrorBody = serde_json::from_str(json).unwrap();
        let fields = body.field_errors().unwrap();
        assert_eq!(fields.get("email").unwrap(), "Correo inválido");
    }

    #[test]
    fn error_body_without_field_errors() {
        let json = r#"{ "message": "No autorizado", "statusCode": 401 }"#;
        let body: ApiErrorBody = serde_json::from_str(json).unwrap();
        assert!(body.field_errors().is_none());
        assert_eq!(body.status_code, 401);
    }
}
