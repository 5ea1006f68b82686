//! Wire and domain types for the auth endpoints. Request payloads carry
//! passwords and must never be logged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Role of an authenticated principal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
}

impl Role {
    /// Restoration order: the admin token wins when both are present.
    pub const RESTORE_ORDER: [Role; 2] = [Role::Admin, Role::Student];

    /// Landing path for an authenticated principal of this role.
    pub const fn home_path(self) -> &'static str {
        match self {
            Role::Admin => crate::guard::paths::ADMIN_HOME,
            Role::Student => crate::guard::paths::STUDENT_HOME,
        }
    }

    /// The role whose credentials are dropped when this one signs in.
    pub const fn other(self) -> Role {
        match self {
            Role::Admin => Role::Student,
            Role::Student => Role::Admin,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Profile record returned by the API. Only the display fields are typed; every
/// other field is kept verbatim so the cached copy round-trips.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile {
    /// Best human-readable label: full name, then email, then a placeholder.
    pub fn display_name(&self) -> String {
        [self.full_name.as_deref(), self.email.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|value| !value.is_empty())
            .unwrap_or("Unknown user")
            .to_string()
    }

    /// Reads an untyped string field such as `erpNumber` or `collegeName`.
    pub fn text_field(&self, key: &str) -> Option<String> {
        match self.extra.get(key)? {
            Value::String(value) => Some(value.clone()),
            Value::Number(value) => Some(value.to_string()),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub contact_number: String,
    pub specialization: String,
    pub sem: String,
    pub erp_number: String,
    pub college_name: String,
}

/// Login and registration response. Admin endpoints answer with `admin`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(alias = "admin")]
    pub user: Profile,
    pub token: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(alias = "admin")]
    pub user: Profile,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Mutable profile fields. Absent fields are left untouched by the API.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college_name: Option<String>,
}

impl UpdateProfileRequest {
    /// Edit submitted from the profile form. Optional fields go out even when
    /// blank so the API clears them; a blank name is left out, since the name
    /// cannot be cleared.
    pub fn from_form(
        full_name: &str,
        contact_number: &str,
        specialization: &str,
        sem: &str,
        college_name: &str,
    ) -> Self {
        let full_name = full_name.trim();
        let field = |value: &str| Some(value.trim().to_string());
        Self {
            full_name: (!full_name.is_empty()).then(|| full_name.to_string()),
            contact_number: field(contact_number),
            specialization: field(specialization),
            sem: field(sem),
            college_name: field(college_name),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn profile_accepts_mongo_style_id_and_keeps_extra_fields() {
        let profile: Profile = serde_json::from_value(json!({
            "_id": "65f0",
            "fullName": "Jane Doe",
            "email": "jdoe@paruluniversity.ac.in",
            "erpNumber": "2203031",
            "sem": 5
        }))
        .unwrap();

        assert_eq!(profile.id.as_deref(), Some("65f0"));
        assert_eq!(profile.display_name(), "Jane Doe");
        assert_eq!(profile.text_field("erpNumber").as_deref(), Some("2203031"));
        assert_eq!(profile.text_field("sem").as_deref(), Some("5"));

        let cached = serde_json::to_string(&profile).unwrap();
        let restored: Profile = serde_json::from_str(&cached).unwrap();
        assert_eq!(restored, profile);
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let profile = Profile {
            full_name: Some("  ".to_string()),
            email: Some("admin@paruluniversity.ac.in".to_string()),
            ..Profile::default()
        };
        assert_eq!(profile.display_name(), "admin@paruluniversity.ac.in");
        assert_eq!(Profile::default().display_name(), "Unknown user");
    }

    #[test]
    fn admin_login_response_uses_admin_key() {
        let response: AuthResponse = serde_json::from_value(json!({
            "admin": { "email": "root@paruluniversity.ac.in" },
            "token": "t-1"
        }))
        .unwrap();
        assert_eq!(response.token, "t-1");
        assert_eq!(
            response.user.email.as_deref(),
            Some("root@paruluniversity.ac.in")
        );
    }

    #[test]
    fn register_request_uses_camel_case_keys() {
        let request = RegisterRequest {
            full_name: "Jane".to_string(),
            erp_number: "1".to_string(),
            ..RegisterRequest::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["fullName"], "Jane");
        assert_eq!(value["erpNumber"], "1");
        assert!(value.get("collegeName").is_some());
    }

    #[test]
    fn profile_form_sends_cleared_fields() {
        let request =
            UpdateProfileRequest::from_form(" Jane Doe ", "  ", "Cyber Security", "5", "");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "fullName": "Jane Doe",
                "contactNumber": "",
                "specialization": "Cyber Security",
                "sem": "5",
                "collegeName": ""
            })
        );

        let unnamed = UpdateProfileRequest::from_form(" ", "", "", "", "");
        assert_eq!(unnamed.full_name, None);
        assert!(serde_json::to_value(&unnamed).unwrap().get("fullName").is_none());
    }

    #[test]
    fn role_helpers() {
        assert_eq!(Role::Admin.other(), Role::Student);
        assert_eq!(Role::Student.to_string(), "student");
        assert_eq!(Role::Admin.home_path(), "/admin/dashboard");
    }
}
