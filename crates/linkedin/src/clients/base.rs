use crate::{
    auth_urls,
    clients::convert_result,
    http::{BaseHttpClient, Headers, HttpClient, Query},
    model::{OAuthError, Token},
    sync::Mutex,
    ClientError, ClientResult, Config, Credentials,
};

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use maybe_async::maybe_async;
use serde_json::Value;

/// This trait implements the basic utilities shared by all the LinkedIn
/// clients: joining URLs against the configured prefixes, performing
/// authenticated requests and obtaining tokens from the token endpoint.
#[maybe_async]
pub trait BaseClient
where
    Self: Default + Clone + fmt::Debug + Send + Sync,
{
    fn get_config(&self) -> &Config;
    fn get_http(&self) -> &HttpClient;
    fn get_token(&self) -> Arc<Mutex<Option<Token>>>;
    fn get_creds(&self) -> &Credentials;

    /// Returns the absolute URL of an endpoint in the API.
    fn api_url(&self, url: &str) -> String {
        let mut base = self.get_config().api_base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        base + url
    }

    /// Returns the absolute URL of an endpoint of the authorization
    /// service.
    fn auth_url(&self, url: &str) -> String {
        let mut base = self.get_config().auth_base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        base + url
    }

    /// Returns the absolute URL of an endpoint of the token service.
    fn token_url(&self, url: &str) -> String {
        let mut base = self.get_config().token_base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        base + url
    }

    /// The headers required for authenticated requests to the API.
    async fn auth_headers(&self) -> ClientResult<Headers> {
        let token = self.get_token();
        let token = token.lock().await.unwrap();
        let token = token.as_ref().ok_or(ClientError::MissingToken)?;

        Ok(token.auth_headers())
    }

    /// Performs a GET request against an API endpoint with the bearer
    /// token.
    async fn endpoint_get(&self, url: &str, payload: &Query<'_>) -> ClientResult<String> {
        let headers = self.auth_headers().await?;
        Ok(self
            .get_http()
            .get(&self.api_url(url), Some(&headers), payload)
            .await?)
    }

    /// Performs a POST request against an API endpoint with the bearer
    /// token and any extra headers the endpoint requires.
    async fn endpoint_post(
        &self,
        url: &str,
        extra_headers: Option<&Headers>,
        payload: &Value,
    ) -> ClientResult<String> {
        let mut headers = self.auth_headers().await?;
        if let Some(extra) = extra_headers {
            headers.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        Ok(self
            .get_http()
            .post(&self.api_url(url), Some(&headers), payload)
            .await?)
    }

    /// Obtains an access token from the token endpoint with the given
    /// query parameters.
    ///
    /// The provider reports failures inside the response body as an
    /// `error` payload, which takes precedence over decoding the token.
    async fn fetch_access_token(&self, payload: &Query<'_>) -> ClientResult<Token> {
        let url = self.token_url(auth_urls::TOKEN);
        let response = self.get_http().get(&url, None, payload).await?;

        if let Ok(error) = serde_json::from_str::<OAuthError>(&response) {
            return Err(error.into());
        }

        let mut token = convert_result::<Token>(&response)?;
        token.expires_at = Utc::now().checked_add_signed(token.expires_in);
        Ok(token)
    }

    /// Updates the cache file at the internal cache path. Does nothing
    /// when the cache is disabled in the configuration.
    async fn write_token_cache(&self) -> ClientResult<()> {
        if !self.get_config().token_cached {
            log::info!("Token cache write ignored (not configured)");
            return Ok(());
        }

        log::info!("Writing token cache");
        let token = self.get_token();
        if let Some(token) = token.lock().await.unwrap().as_ref() {
            token.write_cache(&self.get_config().cache_path)?;
        }

        Ok(())
    }
}
