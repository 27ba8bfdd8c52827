//! The client implementation for the ureq HTTP client, which is sync.

use super::{BaseHttpClient, Headers, Query};

use maybe_async::sync_impl;
use serde_json::Value;

/// Custom enum that contains all the possible errors that may occur when
/// using ureq.
#[derive(thiserror::Error, Debug)]
pub enum UreqError {
    /// The request couldn't be completed because of a connection or
    /// transport level failure.
    #[error("transport: {0}")]
    Transport(#[from] ureq::Transport),

    /// The request was made, but the server returned an unsuccessful
    /// status code, such as 404 or 503. The body is included, as it may
    /// contain a more detailed message from LinkedIn.
    #[error("status code {0}: {1}")]
    StatusCode(u16, String),

    /// The response body couldn't be read into a string.
    #[error("input/output error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Default)]
pub struct UreqClient {}

impl UreqClient {
    /// The request handling in ureq is split in three parts:
    ///
    /// * The initial request (POST, GET, ...) is given as the `request`
    ///   parameter.
    /// * This method will add the headers to the request.
    /// * The `send_request` callback will finally send the request, with a
    ///   body or nothing.
    fn request<D>(
        &self,
        mut request: ureq::Request,
        headers: Option<&Headers>,
        send_request: D,
    ) -> Result<String, UreqError>
    where
        D: Fn(ureq::Request) -> Result<ureq::Response, ureq::Error>,
    {
        if let Some(headers) = headers {
            for (key, val) in headers.iter() {
                request = request.set(key, val);
            }
        }

        log::info!("Making request {:?}", request);
        match send_request(request) {
            Ok(response) => response.into_string().map_err(Into::into),
            Err(ureq::Error::Status(_, response)) => Err(UreqError::StatusCode(
                response.status(),
                response.into_string().unwrap_or_default(),
            )),
            Err(ureq::Error::Transport(transport)) => Err(UreqError::Transport(transport)),
        }
    }
}

#[sync_impl]
impl BaseHttpClient for UreqClient {
    type Error = UreqError;

    #[inline]
    fn get(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Query<'_>,
    ) -> Result<String, Self::Error> {
        let request = ureq::get(url);
        let sender = |mut req: ureq::Request| {
            for (key, val) in payload.iter() {
                req = req.query(key, val);
            }
            req.call()
        };
        self.request(request, headers, sender)
    }

    #[inline]
    fn post(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Value,
    ) -> Result<String, Self::Error> {
        let request = ureq::post(url);
        let sender = |req: ureq::Request| req.send_json(payload.clone());
        self.request(request, headers, sender)
    }
}
