use std::fmt;
use std::time::Duration;

/// HTTP verbs supported by the REST client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Retry behaviour for API requests
///
/// Every request gets `max_attempts` tries. A failed attempt waits
/// `retry_delay` before the next one; an HTTP 429 waits `rate_limit_pause`
/// instead and still counts as an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub retry_delay: Duration,
    pub rate_limit_pause: Duration,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    pub const DEFAULT_RETRY_DELAY_SECS: u64 = 5;
    pub const DEFAULT_RATE_LIMIT_PAUSE_SECS: u64 = 61;

    pub fn new(max_attempts: u32, retry_delay: Duration, rate_limit_pause: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            retry_delay,
            rate_limit_pause,
        }
    }

    /// Policy without any waiting between attempts
    pub fn immediate(max_attempts: u32) -> Self {
        Self::new(max_attempts, Duration::ZERO, Duration::ZERO)
    }

    /// How long to wait after a failed attempt, or `None` if it was the last
    pub(crate) fn pause_after(&self, attempt: u32, rate_limited: bool) -> Option<Duration> {
        if attempt >= self.max_attempts {
            return None;
        }
        Some(if rate_limited {
            self.rate_limit_pause
        } else {
            self.retry_delay
        })
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MAX_ATTEMPTS,
            Duration::from_secs(Self::DEFAULT_RETRY_DELAY_SECS),
            Duration::from_secs(Self::DEFAULT_RATE_LIMIT_PAUSE_SECS),
        )
    }
}
