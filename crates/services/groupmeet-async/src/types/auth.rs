use serde::{Deserialize, Serialize};

/// Response from `GET /health`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` when the server is up
    #[serde(default)]
    pub status: String,
    /// Server banner
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthResponse {
    /// True when the server reported `"ok"`
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Response from `GET /auth/status`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStatus {
    /// Whether the session cookie maps to a logged-in user
    #[serde(default)]
    pub authenticated: bool,
    /// Username of the logged-in student
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pennkey: Option<String>,
    /// Whether the user may run admin commands
    #[serde(default)]
    pub is_admin: bool,
    /// Server runs with authentication bypassed
    #[serde(default)]
    pub dev_mode: bool,
}
