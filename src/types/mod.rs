// Shared type definitions
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod api;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Superadmin,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
}

/// Profile status as stored by the backend: `A` = active, `I` = inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileStatus {
    A,
    I,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "A+")]
    APos,
    #[serde(rename = "A-")]
    ANeg,
    #[serde(rename = "B+")]
    BPos,
    #[serde(rename = "B-")]
    BNeg,
    #[serde(rename = "AB+")]
    AbPos,
    #[serde(rename = "AB-")]
    AbNeg,
    #[serde(rename = "O+")]
    OPos,
    #[serde(rename = "O-")]
    ONeg,
}

impl BloodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BloodType::APos => "A+",
            BloodType::ANeg => "A-",
            BloodType::BPos => "B+",
            BloodType::BNeg => "B-",
            BloodType::AbPos => "AB+",
            BloodType::AbNeg => "AB-",
            BloodType::OPos => "O+",
            BloodType::ONeg => "O-",
        }
    }
}

/// Detailed member profile. Every field is optional on the wire and the
/// whole record may be `null` for users who never completed enrollment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub uuid: Uuid,
    pub gender: Option<Gender>,
    pub age: Option<u32>,
    pub birth_date: Option<NaiveDate>,
    pub status: Option<ProfileStatus>,
    pub alias: Option<String>,
    pub has_uniform: Option<bool>,
    pub shirt_size: Option<String>,
    pub pants_size: Option<String>,
    pub shoe_size: Option<String>,
    pub height_meters: Option<f64>,
    pub weight_kg: Option<f64>,
    pub health_insurance: Option<String>,
    pub blood_type: Option<BloodType>,
    pub allergies: Option<String>,
    pub disability_or_disorder: Option<String>,
    pub enrollment_date: Option<NaiveDate>,
    pub current_residence: Option<String>,
    pub professional_goal: Option<String>,
    pub favorite_hero: Option<String>,
    pub first_names: Option<String>,
    pub last_names: Option<String>,
    pub registration_date: Option<NaiveDate>,
}

/// User record as returned by `/users/me`, `/users/:uuid` and the
/// paginated `/users` listing. `uuid` is the canonical identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub slug: String,
    #[serde(default)]
    pub dni: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub is_google_account: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub profile: Option<Profile>,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(false)
    }

    pub fn is_admin(&self) -> bool {
        self.roles
            .iter()
            .any(|r| matches!(r, Role::Admin | Role::Superadmin))
    }
}

/// Partial payload for `PUT /users/me`. Only populated fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfilePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_uniform: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shirt_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pants_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoe_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_meters: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_insurance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<BloodType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disability_or_disorder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_residence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_hero: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_with_null_profile() {
        let json = r#"{
            "uuid": "8f9c2b6e-0a1d-4c3e-9b2f-1a2b3c4d5e6f",
            "firstName": "Ana",
            "lastName": "Quispe",
            "email": "ana@example.com",
            "slug": "ana-quispe",
            "isActive": true,
            "isGoogleAccount": false,
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z",
            "profile": null
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.first_name, "Ana");
        assert!(user.profile.is_none());
        assert!(user.is_active());
        assert!(!user.is_admin());
    }

    #[test]
    fn blood_type_uses_clinical_notation() {
        let bt: BloodType = serde_json::from_str(r#""O+""#).unwrap();
        assert_eq!(bt, BloodType::OPos);
        assert_eq!(serde_json::to_string(&BloodType::AbNeg).unwrap(), r#""AB-""#);
    }

    #[test]
    fn update_payload_skips_unset_fields() {
        let payload = UpdateProfilePayload {
            alias: Some("Johnny".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"alias":"Johnny"}"#);
    }
}
