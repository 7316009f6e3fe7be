// Utility functions
use chrono::NaiveDate;

use crate::types::User;

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// "Apellido, Nombre" as the listing displays members.
pub fn user_full_name_last_first(user: &User) -> String {
    format!("{}, {}", user.last_name, user.first_name)
}

pub fn user_full_name(user: &User) -> String {
    format!("{} {}", user.first_name, user.last_name)
}

pub fn user_initials(user: &User) -> String {
    let mut initials = String::new();
    if let Some(c) = user.first_name.chars().next() {
        initials.extend(c.to_uppercase());
    }
    if let Some(c) = user.last_name.chars().next() {
        initials.extend(c.to_uppercase());
    }
    initials
}

/// Fallback for optional profile fields: em dash when absent.
pub fn display_or_dash(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(first: &str, last: &str) -> User {
        serde_json::from_str(&format!(
            r#"{{
                "uuid": "8f9c2b6e-0a1d-4c3e-9b2f-1a2b3c4d5e6f",
                "firstName": "{first}",
                "lastName": "{last}",
                "email": "x@example.com",
                "slug": "x",
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00Z"
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format_date(&date), "09/03/2024");
    }

    #[test]
    fn test_user_names() {
        let user = sample_user("Ana", "Quispe");
        assert_eq!(user_full_name_last_first(&user), "Quispe, Ana");
        assert_eq!(user_full_name(&user), "Ana Quispe");
        assert_eq!(user_initials(&user), "AQ");
    }

    #[test]
    fn test_initials_with_empty_names() {
        let user = sample_user("", "Quispe");
        assert_eq!(user_initials(&user), "Q");
    }

    #[test]
    fn test_display_or_dash() {
        assert_eq!(display_or_dash(Some("dato".into())), "dato");
        assert_eq!(display_or_dash(Some("  ".into())), "—");
        assert_eq!(display_or_dash(None), "—");
    }
}
