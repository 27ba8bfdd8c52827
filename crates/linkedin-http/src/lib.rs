//! The HTTP layer of the LinkedIn wrapper.
//!
//! The client implementation is chosen with the `client-reqwest` (async)
//! or `client-ureq` (sync) feature; the TLS features are passed through to
//! the chosen client.

#[cfg(feature = "client-reqwest")]
mod reqwest;
#[cfg(feature = "client-ureq")]
mod ureq;

#[cfg(feature = "client-reqwest")]
pub use self::reqwest::{ReqwestClient as HttpClient, ReqwestError as HttpError};
#[cfg(feature = "client-ureq")]
pub use self::ureq::{UreqClient as HttpClient, UreqError as HttpError};

use std::collections::HashMap;
use std::fmt;

use maybe_async::maybe_async;
use serde_json::Value;

pub type Headers = HashMap<String, String>;
pub type Query<'a> = HashMap<&'a str, &'a str>;

/// Header names of the Rest.li protocol, required by some endpoints.
pub mod headers {
    pub const RESTLI_PROTOCOL_VERSION: &str = "x-restli-protocol-version";
    pub const RESTLI_METHOD: &str = "x-restli-method";
}

/// This trait represents the interface to be implemented for an HTTP
/// client, which is kept separate from the LinkedIn client for cleaner
/// code. Thus, it also requires other basic traits that are needed for
/// the LinkedIn client.
#[maybe_async]
pub trait BaseHttpClient: Send + Default + Clone + fmt::Debug {
    type Error;

    async fn get(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Query<'_>,
    ) -> Result<String, Self::Error>;

    async fn post(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Value,
    ) -> Result<String, Self::Error>;
}
