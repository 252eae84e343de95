use crate::{
    client::{Auth, Client},
    config::Config,
    error::GroupmeetError,
    types::auth::{AuthStatus, HealthResponse},
};

/// API resource for `/health` and `/auth/status`
pub struct Session<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Session<'c, C> {
    /// Creates a new Session resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Checks that the server is reachable
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn health(&self) -> Result<HealthResponse, GroupmeetError> {
        self.client.get("/health", Auth::Anonymous).await
    }

    /// Reports whether the configured session cookie is logged in
    ///
    /// Works without a session; the server then answers `authenticated: false`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn status(&self) -> Result<AuthStatus, GroupmeetError> {
        self.client.get("/auth/status", Auth::Anonymous).await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Session API resource
    #[must_use]
    pub const fn session(&self) -> Session<'_, C> {
        Session::new(self)
    }
}
