//! When a GroupMeet request gets another attempt.
//!
//! Reads are retried on transient failures. Writes create server records and
//! are sent exactly once.

use std::time::Duration;

use backon::ExponentialBuilder;

use crate::error::GroupmeetError;

/// Retry behaviour of one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Retried with backoff while the failure is transient
    Read,
    /// Sent once; any failure is returned as is
    Write,
}

impl RetryPolicy {
    /// Whether `err` earns another attempt under this policy.
    #[must_use]
    pub fn should_retry(self, err: &GroupmeetError) -> bool {
        match self {
            Self::Read => err.is_retryable(),
            Self::Write => false,
        }
    }
}

/// Backoff between read attempts: 250ms doubling to 4s, at most five retries, jittered.
#[must_use]
pub fn read_backoff() -> ExponentialBuilder {
    ExponentialBuilder::default()
        .with_min_delay(Duration::from_millis(250))
        .with_max_delay(Duration::from_secs(4))
        .with_max_times(5)
        .with_factor(2.0)
        .with_jitter()
}

/// Statuses worth another read attempt: 408, 429, and 5xx.
#[must_use]
pub const fn is_transient_status(code: u16) -> bool {
    matches!(code, 408 | 429 | 500..=599)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiErrorObject;

    fn api_error(code: u16) -> GroupmeetError {
        GroupmeetError::Api(ApiErrorObject {
            status_code: Some(code),
            error: format!("http_{code}"),
            errors: Vec::new(),
        })
    }

    #[test]
    fn transient_statuses() {
        for code in [408, 429, 500, 502, 503, 599] {
            assert!(is_transient_status(code), "{code}");
        }
        for code in [200, 400, 401, 403, 404, 409, 422] {
            assert!(!is_transient_status(code), "{code}");
        }
    }

    #[test]
    fn reads_retry_only_transient_failures() {
        assert!(RetryPolicy::Read.should_retry(&api_error(503)));
        assert!(RetryPolicy::Read.should_retry(&api_error(429)));
        assert!(!RetryPolicy::Read.should_retry(&api_error(404)));
        assert!(!RetryPolicy::Read.should_retry(&GroupmeetError::Unauthorized));
    }

    #[test]
    fn writes_never_retry() {
        assert!(!RetryPolicy::Write.should_retry(&api_error(503)));
        assert!(!RetryPolicy::Write.should_retry(&api_error(429)));
    }
}
