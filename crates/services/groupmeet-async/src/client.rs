use backon::{ExponentialBuilder, Retryable};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    config::Config,
    error::GroupmeetError,
    retry::{self, RetryPolicy},
};

/// Whether an endpoint needs a logged-in session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Auth {
    /// Fails fast with a config error when no session is set
    Session,
    /// Sent with the session cookie if one is configured
    Anonymous,
}

/// GroupMeet API client
///
/// The client is generic over a [`Config`] implementation that provides the
/// session cookie and base URL.
///
/// GET requests follow [`RetryPolicy::Read`] and POST requests follow
/// [`RetryPolicy::Write`].
#[derive(Debug, Clone)]
pub struct Client<C: Config> {
    http: reqwest::Client,
    config: C,
    backoff: ExponentialBuilder,
}

impl Client<crate::config::GroupmeetConfig> {
    /// Creates a new client with default configuration
    ///
    /// Uses environment variables:
    /// - `GROUPMEET_SESSION` for the session cookie
    /// - `GROUPMEET_BASE_URL` for a custom API base URL
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(crate::config::GroupmeetConfig::new())
    }
}

impl<C: Config + Default> Default for Client<C> {
    fn default() -> Self {
        Self::with_config(C::default())
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration.
    #[must_use]
    pub fn with_config(config: C) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "falling back to default HTTP client");
                reqwest::Client::new()
            });
        Self {
            http,
            config,
            backoff: retry::read_backoff(),
        }
    }

    /// Replaces the HTTP client with a custom one
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Replaces the backoff used between read attempts
    #[must_use]
    pub fn with_backoff(mut self, backoff: ExponentialBuilder) -> Self {
        self.backoff = backoff;
        self
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    pub(crate) async fn get<O>(&self, path: &str, auth: Auth) -> Result<O, GroupmeetError>
    where
        O: DeserializeOwned,
    {
        let mk = || async {
            let headers = self.config.headers()?;
            Ok(self
                .http
                .get(self.config.url(path))
                .headers(headers)
                .build()?)
        };
        self.execute(mk, auth, RetryPolicy::Read).await
    }

    pub(crate) async fn post<I, O>(
        &self,
        path: &str,
        body: I,
        auth: Auth,
    ) -> Result<O, GroupmeetError>
    where
        I: Serialize + Send + Sync,
        O: DeserializeOwned,
    {
        let mk = || async {
            let headers = self.config.headers()?;
            Ok(self
                .http
                .post(self.config.url(path))
                .headers(headers)
                .json(&body)
                .build()?)
        };
        self.execute(mk, auth, RetryPolicy::Write).await
    }

    async fn execute<O, M, Fut>(
        &self,
        mk: M,
        auth: Auth,
        policy: RetryPolicy,
    ) -> Result<O, GroupmeetError>
    where
        O: DeserializeOwned,
        M: Fn() -> Fut + Send + Sync,
        Fut: core::future::Future<Output = Result<reqwest::Request, GroupmeetError>> + Send,
    {
        if auth == Auth::Session {
            self.config.validate_auth()?;
        }

        let bytes = self.execute_raw(mk, policy).await?;
        let resp: O =
            serde_json::from_slice(&bytes).map_err(|e| crate::error::map_deser(&e, &bytes))?;
        Ok(resp)
    }

    async fn execute_raw<M, Fut>(
        &self,
        mk: M,
        policy: RetryPolicy,
    ) -> Result<bytes::Bytes, GroupmeetError>
    where
        M: Fn() -> Fut + Send + Sync,
        Fut: core::future::Future<Output = Result<reqwest::Request, GroupmeetError>> + Send,
    {
        let http_client = self.http.clone();

        let attempt = || async {
            let request = mk().await?;
            tracing::debug!(method = %request.method(), url = %request.url(), "sending request");
            let response = http_client
                .execute(request)
                .await
                .map_err(GroupmeetError::Reqwest)?;

            let status = response.status();
            let bytes = response.bytes().await.map_err(GroupmeetError::Reqwest)?;

            if status.is_success() {
                return Ok(bytes);
            }

            Err(crate::error::deserialize_api_error(status, &bytes))
        };

        if policy == RetryPolicy::Write {
            return attempt().await;
        }

        attempt
            .retry(self.backoff)
            .when(|err| policy.should_retry(err))
            .notify(|err, dur| {
                tracing::warn!(error = %err, delay_ms = dur.as_millis(), "retrying request");
            })
            .await
    }
}
