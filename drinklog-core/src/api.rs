//! Wire payloads and endpoint paths for the drinklog HTTP API.
//!
//! Only the fields the scenario actually sends or reads are modeled; the
//! server returns more than this on most endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::identity::VirtualUserIdentity;
use crate::records::{RecordType, CYCLE_AMOUNT, CYCLE_RECORD_TYPE};

/// Signup endpoint.
pub const SIGNUP_PATH: &str = "/api/users/signup";

/// Login endpoint.
pub const LOGIN_PATH: &str = "/api/users/login";

/// Logout endpoint.
pub const LOGOUT_PATH: &str = "/api/users/logout";

/// Records endpoint root; delete and browse paths hang off it.
pub const RECORDS_PATH: &str = "/api/records";

/// Placeholder the signup recaptcha check accepts in test deployments.
pub const RECAPTCHA_PLACEHOLDER: &str = "test";

/// Body of `POST /api/users/signup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub recaptcha_token: String,
}

impl SignupRequest {
    pub fn for_identity(identity: &VirtualUserIdentity) -> Self {
        Self {
            username: identity.username.clone(),
            password: identity.password.clone(),
            recaptcha_token: RECAPTCHA_PLACEHOLDER.to_string(),
        }
    }
}

/// Body of `POST /api/users/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn for_identity(identity: &VirtualUserIdentity) -> Self {
        Self {
            username: identity.username.clone(),
            password: identity.password.clone(),
        }
    }
}

/// Token pair returned by a successful login. Both tokens are opaque to
/// the scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Body of `POST /api/users/logout`; the server blacklists both tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutRequest {
    pub access_token: String,
    pub refresh_token: String,
}

/// Body of `POST /api/records`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordRequest {
    pub date: NaiveDate,
    pub record_type: RecordType,
    pub amount: f64,
}

impl CreateRecordRequest {
    /// The fixed record every cycle creates at `date`.
    pub fn for_cycle(date: NaiveDate) -> Self {
        Self {
            date,
            record_type: CYCLE_RECORD_TYPE,
            amount: CYCLE_AMOUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::records::record_date;

    #[test]
    fn signup_body_matches_the_server_schema() {
        let identity = VirtualUserIdentity::from_index(1);
        let body = serde_json::to_value(SignupRequest::for_identity(&identity)).unwrap();
        assert_eq!(
            body,
            json!({
                "username": "testuser1",
                "password": "testpassword1",
                "recaptchaToken": "test",
            })
        );
    }

    #[test]
    fn login_body_carries_only_credentials() {
        let identity = VirtualUserIdentity::from_index(2);
        let body = serde_json::to_value(LoginRequest::for_identity(&identity)).unwrap();
        assert_eq!(
            body,
            json!({"username": "testuser2", "password": "testpassword2"})
        );
    }

    #[test]
    fn login_response_parses_with_or_without_refresh_token() {
        let full: LoginResponse =
            serde_json::from_value(json!({"access_token": "A", "refresh_token": "R"})).unwrap();
        assert_eq!(full.access_token, "A");
        assert_eq!(full.refresh_token.as_deref(), Some("R"));

        let bare: LoginResponse = serde_json::from_value(json!({"access_token": "A"})).unwrap();
        assert!(bare.refresh_token.is_none());
    }

    #[test]
    fn create_record_body_matches_the_server_schema() {
        let body =
            serde_json::to_value(CreateRecordRequest::for_cycle(record_date(1).unwrap())).unwrap();
        assert_eq!(
            body,
            json!({"date": "2000-01-02", "recordType": "soju", "amount": 3.5})
        );
    }

    #[test]
    fn logout_body_uses_snake_case_token_fields() {
        let body = serde_json::to_value(LogoutRequest {
            access_token: "A".to_string(),
            refresh_token: "R".to_string(),
        })
        .unwrap();
        assert_eq!(body, json!({"access_token": "A", "refresh_token": "R"}));
    }
}
