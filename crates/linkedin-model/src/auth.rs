//! All objects related to the auth flows of the LinkedIn API.

use crate::{
    custom_serde::{duration_second, separated_scopes},
    error::ModelError,
};

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// LinkedIn access token information.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// An access token that can be provided in subsequent calls.
    pub access_token: String,

    /// The time period in seconds for which the access token is valid.
    /// Zero when the provider does not report one.
    #[serde(with = "duration_second", default = "Duration::zero")]
    pub expires_in: Duration,

    /// The instant at which the access token becomes invalid. Not part of
    /// the provider's response; the client stamps it when the token is
    /// fetched.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub expires_at: Option<DateTime<Utc>>,

    /// The refresh token included in the token response when the
    /// application has programmatic refresh enabled (a limited set of
    /// partners). Stored verbatim.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub refresh_token: Option<String>,

    /// The scopes the member granted. LinkedIn separates these with
    /// commas, the OAuth2 spec with spaces; both are accepted.
    #[serde(default, with = "separated_scopes", rename = "scope")]
    pub scopes: HashSet<String>,
}

impl Default for Token {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            expires_in: Duration::seconds(0),
            expires_at: Some(Utc::now()),
            refresh_token: None,
            scopes: HashSet::new(),
        }
    }
}

impl Token {
    /// Tries to initialize the token from a cache file.
    pub fn from_cache<T: AsRef<Path>>(path: T) -> Result<Self, ModelError> {
        let mut file = fs::File::open(path)?;
        let mut tok_str = String::new();
        file.read_to_string(&mut tok_str)?;
        let tok = serde_json::from_str::<Self>(&tok_str)?;

        Ok(tok)
    }

    /// Saves the token information into its cache file.
    pub fn write_cache<T: AsRef<Path>>(&self, path: T) -> Result<(), ModelError> {
        let token_info = serde_json::to_string(&self)?;

        let mut file = fs::File::create(path)?;
        file.write_all(token_info.as_bytes())?;

        Ok(())
    }

    /// Check if the token is expired. It includes a margin of 10 seconds.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .map_or(true, |expiration| Utc::now() + Duration::seconds(10) >= expiration)
    }

    /// Generates an HTTP bearer authorization header with proper
    /// formatting.
    #[must_use]
    pub fn auth_headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(
            "authorization".to_owned(),
            format!("Bearer {}", self.access_token),
        );
        headers
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_is_expired() {
        let expired = Token {
            expires_at: Some(Utc::now() - Duration::seconds(1)),
            ..Default::default()
        };
        assert!(expired.is_expired());

        let valid = Token {
            expires_at: Some(Utc::now() + Duration::seconds(60)),
            ..Default::default()
        };
        assert!(!valid.is_expired());

        // A token without a known expiration is treated as expired.
        let unknown = Token {
            expires_at: None,
            ..Default::default()
        };
        assert!(unknown.is_expired());
    }

    #[test]
    fn test_auth_headers() {
        let token = Token {
            access_token: "abc123".to_owned(),
            ..Default::default()
        };
        let headers = token.auth_headers();
        assert_eq!(headers.get("authorization").unwrap(), "Bearer abc123");
    }
}
