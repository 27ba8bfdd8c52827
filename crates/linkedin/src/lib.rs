mod auth_code;
mod client_creds;
pub mod clients;
pub mod sync;

pub use linkedin_http as http;
pub use linkedin_macros as macros;
pub use linkedin_model as model;

pub use auth_code::AuthCodeLinkedIn;
pub use client_creds::ClientCredsLinkedIn;

use crate::http::HttpError;
pub use macros::scopes;
pub use model::Token;

use std::collections::HashSet;
use std::env;
use std::path::PathBuf;

use getrandom::getrandom;
use thiserror::Error;

pub mod prelude {
    pub use crate::clients::{BaseClient, OAuthClient};
    pub use crate::model::idtypes::Id;
}

/// Common query parameters as constants.
pub(crate) mod params {
    pub const CLIENT_ID: &str = "client_id";
    pub const CLIENT_SECRET: &str = "client_secret";
    pub const CODE: &str = "code";
    pub const GRANT_TYPE: &str = "grant_type";
    pub const GRANT_TYPE_AUTH_CODE: &str = "authorization_code";
    pub const GRANT_TYPE_CLIENT_CREDS: &str = "client_credentials";
    pub const OAUTH2_ACCESS_TOKEN: &str = "oauth2_access_token";
    pub const REDIRECT_URI: &str = "redirect_uri";
    pub const RESPONSE_TYPE_CODE: &str = "code";
    pub const RESPONSE_TYPE: &str = "response_type";
    pub const SCOPE: &str = "scope";
    pub const STATE: &str = "state";
}

/// Common alphabets for random number generation and similars
pub(crate) mod alphabets {
    pub const HEX: &[u8] = b"0123456789abcdef";
}

pub(crate) mod auth_urls {
    pub const AUTHORIZE: &str = "authorization";
    pub const TOKEN: &str = "accessToken";
}

/// Possible errors returned from the `linkedin` client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("json parse error: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("url parse error: {0}")]
    ParseUrl(#[from] url::ParseError),

    // Note that this type is boxed because its size might be very large in
    // comparison to the rest. For more information visit:
    // https://rust-lang.github.io/rust-clippy/master/index.html#large_enum_variant
    #[error("http error: {0}")]
    Http(Box<HttpError>),

    #[error("input/output error: {0}")]
    Io(#[from] std::io::Error),

    /// The provider rejected the request and answered with its own error
    /// payload instead.
    #[error("oauth error: {0}")]
    OAuth(#[from] model::OAuthError),

    /// The `state` of the callback does not match the one this client sent
    /// out, so the callback cannot belong to this authorization attempt.
    #[error("the callback state does not match the request state")]
    StateMismatch,

    /// The redirect URL of the callback carries no `code` parameter.
    #[error("invalid callback url: {0}")]
    InvalidCallback(String),

    /// The client is not configured for the requested flow.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),

    /// An endpoint that needs an access token was called before one was
    /// obtained.
    #[error("no access token available; authorize the client first")]
    MissingToken,

    #[error("model error: {0}")]
    Model(#[from] model::ModelError),
}

// The conversion has to be done manually because it's in a `Box<T>`
impl From<HttpError> for ClientError {
    fn from(err: HttpError) -> Self {
        Self::Http(Box::new(err))
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

pub const DEFAULT_API_BASE_URL: &str = "https://api.linkedin.com/v2/";
pub const DEFAULT_AUTH_BASE_URL: &str = "https://www.linkedin.com/oauth/v2";
pub const DEFAULT_TOKEN_BASE_URL: &str = "https://www.linkedin.com/uas/oauth2";
pub const DEFAULT_CACHE_PATH: &str = ".linkedin_token_cache.json";

/// The scopes requested when none are configured, covering the
/// permissions most member-facing applications need.
pub const DEFAULT_SCOPES: [&str; 4] = [
    "r_liteprofile",
    "r_emailaddress",
    "w_member_social",
    "w_share",
];

/// Struct to configure the LinkedIn client.
#[derive(Debug, Clone)]
pub struct Config {
    /// The LinkedIn API prefix, [`DEFAULT_API_BASE_URL`] by default.
    pub api_base_url: String,

    /// The LinkedIn Authentication prefix, [`DEFAULT_AUTH_BASE_URL`] by
    /// default.
    pub auth_base_url: String,

    /// The prefix of the token exchange endpoint,
    /// [`DEFAULT_TOKEN_BASE_URL`] by default. LinkedIn serves
    /// authorization-code exchanges from this legacy prefix.
    pub token_base_url: String,

    /// The cache file path, in case it's used. By default it's
    /// [`DEFAULT_CACHE_PATH`]
    pub cache_path: PathBuf,

    /// Whether or not to save the authentication token into a JSON file,
    /// then reread the token from JSON file when launching the program
    /// without following the full auth process again
    pub token_cached: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            auth_base_url: String::from(DEFAULT_AUTH_BASE_URL),
            token_base_url: String::from(DEFAULT_TOKEN_BASE_URL),
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            token_cached: false,
        }
    }
}

/// Generate `length` random chars from the Operating System.
///
/// It is assumed that system always provides high-quality cryptographically
/// secure random data, ideally backed by hardware entropy sources.
pub(crate) fn generate_random_string(length: usize, alphabet: &[u8]) -> String {
    let mut buf = vec![0u8; length];
    getrandom(&mut buf).unwrap();
    let range = alphabet.len();

    buf.iter()
        .map(|byte| alphabet[*byte as usize % range] as char)
        .collect()
}

#[inline]
pub(crate) fn join_scopes(scopes: &HashSet<String>) -> String {
    scopes
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Simple client credentials object for LinkedIn.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub id: String,
    pub secret: Option<String>,
}

impl Credentials {
    /// Initialization with both the client ID and the client secret
    #[must_use]
    pub fn new(id: &str, secret: &str) -> Self {
        Self {
            id: id.to_owned(),
            secret: Some(secret.to_owned()),
        }
    }

    /// Parses the credentials from the environment variables
    /// `LINKEDIN_CLIENT_ID` and `LINKEDIN_CLIENT_SECRET`. You can
    /// optionally activate the `env-file` feature in order to read these
    /// variables from a `.env` file.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        #[cfg(feature = "env-file")]
        {
            dotenv::dotenv().ok();
        }

        Some(Self {
            id: env::var("LINKEDIN_CLIENT_ID").ok()?,
            secret: env::var("LINKEDIN_CLIENT_SECRET").ok(),
        })
    }
}

/// Structure that holds the required information for requests with OAuth.
#[derive(Debug, Clone)]
pub struct OAuth {
    pub redirect_uri: String,
    /// The state is generated by default, as suggested by the OAuth2 spec:
    /// [Cross-Site Request Forgery](https://tools.ietf.org/html/rfc6749#section-10.12).
    /// It is a fresh 40 character hex string for every `OAuth` value.
    pub state: String,
    /// You could use macro [scopes!](crate::scopes) to build it at compile
    /// time easily. An empty set falls back to [`DEFAULT_SCOPES`] when the
    /// authorization URL is built.
    pub scopes: HashSet<String>,
}

impl Default for OAuth {
    fn default() -> Self {
        Self {
            redirect_uri: String::new(),
            state: generate_random_string(40, alphabets::HEX),
            scopes: HashSet::new(),
        }
    }
}

impl OAuth {
    /// Parses the credentials from the environment variable
    /// `LINKEDIN_REDIRECT_URI`. You can optionally activate the `env-file`
    /// feature in order to read these variables from a `.env` file.
    #[must_use]
    pub fn from_env(scopes: HashSet<String>) -> Option<Self> {
        #[cfg(feature = "env-file")]
        {
            dotenv::dotenv().ok();
        }

        Some(Self {
            scopes,
            redirect_uri: env::var("LINKEDIN_REDIRECT_URI").ok()?,
            ..Default::default()
        })
    }
}
