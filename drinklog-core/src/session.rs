//! Per-user authentication session state.

use crate::api::{LoginResponse, LogoutRequest};

/// Authorization value sent by a session that never authenticated.
///
/// The literal is not a valid credential; unauthenticated users keep
/// sending it so every record call still exercises the server's rejection
/// path with the same request shape.
pub const UNAUTHENTICATED_BEARER: &str = "Bearer None";

/// Bearer-token state of one virtual user.
///
/// Owned exclusively by that user. Tokens are stored at most once, after a
/// successful login; the session is never refreshed or rotated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSession {
    access_token: Option<String>,
    refresh_token: Option<String>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the token pair from a successful login.
    pub fn authenticate(&mut self, tokens: LoginResponse) {
        self.access_token = Some(tokens.access_token);
        self.refresh_token = tokens.refresh_token;
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Authorization header value; always present on authenticated-route
    /// calls regardless of login outcome.
    pub fn authorization_header(&self) -> String {
        match &self.access_token {
            Some(token) => format!("Bearer {token}"),
            None => UNAUTHENTICATED_BEARER.to_string(),
        }
    }

    /// Logout body, if the session holds both tokens the endpoint wants.
    pub fn logout_request(&self) -> Option<LogoutRequest> {
        Some(LogoutRequest {
            access_token: self.access_token.clone()?,
            refresh_token: self.refresh_token.clone()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(access: &str, refresh: Option<&str>) -> LoginResponse {
        LoginResponse {
            access_token: access.to_string(),
            refresh_token: refresh.map(str::to_string),
        }
    }

    #[test]
    fn fresh_session_renders_the_invalid_bearer() {
        let session = AuthSession::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.authorization_header(), "Bearer None");
        assert!(session.logout_request().is_none());
    }

    #[test]
    fn authenticated_session_renders_its_token() {
        let mut session = AuthSession::new();
        session.authenticate(tokens("T", Some("R")));
        assert!(session.is_authenticated());
        assert_eq!(session.authorization_header(), "Bearer T");

        let logout = session.logout_request().unwrap();
        assert_eq!(logout.access_token, "T");
        assert_eq!(logout.refresh_token, "R");
    }

    #[test]
    fn logout_needs_both_tokens() {
        let mut session = AuthSession::new();
        session.authenticate(tokens("T", None));
        assert!(session.logout_request().is_none());
    }
}
