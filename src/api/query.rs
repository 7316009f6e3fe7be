// Query-parameter types for the paginated users listing
use crate::constants::{DEFAULT_LIMIT, DEFAULT_PAGE};

/// Columns the backend accepts in `sortBy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    FirstName,
    LastName,
    Email,
    CreatedAt,
    IsActive,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::FirstName => "firstName",
            SortKey::LastName => "lastName",
            SortKey::Email => "email",
            SortKey::CreatedAt => "createdAt",
            SortKey::IsActive => "isActive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::FirstName => "Nombre",
            SortKey::LastName => "Apellido",
            SortKey::Email => "Correo",
            SortKey::CreatedAt => "Fecha de registro",
            SortKey::IsActive => "Estado",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Client-owned query state for `GET /users`. Drives every list fetch;
/// `page` must be reset to 1 whenever `search` or `limit` changes (the
/// view enforces this through the pagination controller).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListQuery {
    pub page: u32,
    pub limit: u32,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    pub search: String,
    pub is_active: Option<bool>,
}

impl Default for UserListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort_by: SortKey::LastName,
            sort_order: SortOrder::Asc,
            search: String::new(),
            is_active: None,
        }
    }
}

impl UserListQuery {
    /// Serializes into query pairs; empty search and unset filters are
    /// omitted rather than sent as empty strings.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("sortBy", self.sort_by.as_str().to_string()),
            ("sortOrder", self.sort_order.as_str().to_string()),
        ];
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search", search.to_string()));
        }
        if let Some(active) = self.is_active {
            pairs.push(("isActive", active.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_matches_initial_mount() {
        let query = UserListQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
        assert_eq!(query.sort_by, SortKey::LastName);
        assert_eq!(query.sort_order, SortOrder::Asc);
        assert!(query.search.is_empty());
        assert!(query.is_active.is_none());
    }

    #[test]
    fn query_pairs_omit_empty_search_and_unset_filter() {
        let pairs = UserListQuery::default().to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page", "1".to_string()),
                ("limit", "10".to_string()),
                ("sortBy", "lastName".to_string()),
                ("sortOrder", "ASC".to_string()),
            ]
        );
    }

    #[test]
    fn query_pairs_include_trimmed_search_and_filter() {
        let query = UserListQuery {
            page: 3,
            limit: 20,
            sort_by: SortKey::Email,
            sort_order: SortOrder::Desc,
            search: "  ana ".to_string(),
            is_active: Some(true),
        };
        let pairs = query.to_query_pairs();
        assert!(pairs.contains(&("search", "ana".to_string())));
        assert!(pairs.contains(&("isActive", "true".to_string())));
        assert!(pairs.contains(&("sortBy", "email".to_string())));
        assert!(pairs.contains(&("sortOrder", "DESC".to_string())));
    }

    #[test]
    fn sort_keys_use_backend_spelling() {
        assert_eq!(SortKey::FirstName.as_str(), "firstName");
        assert_eq!(SortKey::CreatedAt.as_str(), "createdAt");
        assert_eq!(SortKey::IsActive.as_str(), "isActive");
    }
}
