use crate::shared::error::SbomError;
use std::fmt;
use uuid::Uuid;

/// Environment variable holding the Snyk API token
pub const TOKEN_ENV_VAR: &str = "SNYK_TOKEN";

/// Length of a hyphenated 8-4-4-4-12 token
const HYPHENATED_LENGTH: usize = 36;

/// ApiToken value object for authenticating against the SBOM test API
///
/// Only tokens in the hyphenated 8-4-4-4-12 hexadecimal form are accepted.
/// The token is never printed: `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Validates a raw token value
    ///
    /// # Errors
    /// Returns `SbomError::InvalidApiToken` if the value is not a hyphenated UUID
    pub fn new(value: &str) -> Result<Self, SbomError> {
        let value = value.trim();
        // Uuid::try_parse also accepts simple, braced and urn forms; the
        // length check pins it to the hyphenated one.
        if value.len() != HYPHENATED_LENGTH || Uuid::try_parse(value).is_err() {
            return Err(SbomError::InvalidApiToken {
                variable: TOKEN_ENV_VAR.to_string(),
            });
        }
        Ok(Self(value.to_string()))
    }

    /// Reads and validates the token from `SNYK_TOKEN`
    ///
    /// # Errors
    /// Returns `SbomError::MissingApiToken` if the variable is unset or empty,
    /// and `SbomError::InvalidApiToken` if its value is malformed.
    pub fn from_env() -> Result<Self, SbomError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, SbomError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(TOKEN_ENV_VAR) {
            Some(value) if !value.trim().is_empty() => Self::new(&value),
            _ => Err(SbomError::MissingApiToken {
                variable: TOKEN_ENV_VAR.to_string(),
            }),
        }
    }

    /// Value for the `Authorization` header
    pub fn authorization_header(&self) -> String {
        format!("token {}", self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(****)")
    }
}
