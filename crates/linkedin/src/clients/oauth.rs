use crate::{
    clients::{convert_result, BaseClient},
    http::{headers, BaseHttpClient, Headers, Query},
    model::{AuthorId, JobPosting, JobPostingBatch, OAuthError, Profile, Token, UgcPost},
    params, ClientError, ClientResult, OAuth,
};

use std::collections::HashMap;

use maybe_async::maybe_async;
use url::Url;

/// This trait implements the methods available strictly to clients with
/// user authorization, including some parts of the authentication flow
/// that are shared, and the endpoints.
#[maybe_async]
pub trait OAuthClient: BaseClient {
    fn get_oauth(&self) -> &OAuth;

    /// Obtains a user access token given a code, as part of the OAuth
    /// authentication. The access token will be saved internally.
    async fn request_token(&self, code: &str) -> ClientResult<()>;

    /// Tries to read the cache file's token.
    ///
    /// This will return an error if the token could not be read (e.g. it is
    /// not available or the JSON is malformed). It may return `Ok(None)`
    /// if:
    ///
    /// * The read token is expired
    /// * Its scopes do not match with the current client (you will need to
    ///   re-authenticate to gain access to more scopes)
    /// * The cached token is disabled in the config
    async fn read_token_cache(&self) -> ClientResult<Option<Token>> {
        if !self.get_config().token_cached {
            log::info!("Auth token cache read ignored (not configured)");
            return Ok(None);
        }

        log::info!("Reading auth token cache");
        let token = Token::from_cache(&self.get_config().cache_path)?;
        if !self.get_oauth().scopes.is_subset(&token.scopes) || token.is_expired() {
            // Invalid token since it does not have at least the currently
            // required scopes or it is expired.
            Ok(None)
        } else {
            Ok(Some(token))
        }
    }

    /// Parse the response code in the given response url.
    ///
    /// As the [RFC 6749 indicates](https://datatracker.ietf.org/doc/html/rfc6749#section-4.1),
    /// the state should be the same between the request and the callback.
    /// A callback with a different state is rejected without attempting a
    /// token exchange.
    fn parse_response_code(&self, url: &str) -> ClientResult<String> {
        let url = Url::parse(url)?;
        let params = url.query_pairs().collect::<HashMap<_, _>>();

        // The provider reports a denied or failed authorization in the
        // callback itself.
        if let Some(error) = params.get("error") {
            return Err(OAuthError {
                error: error.to_string(),
                error_description: params.get("error_description").map(|d| d.to_string()),
            }
            .into());
        }

        let code = params
            .get("code")
            .ok_or_else(|| ClientError::InvalidCallback("missing `code` parameter".to_owned()))?;

        // Making sure the state is the same
        let expected_state = &self.get_oauth().state;
        let state = params.get("state").map(AsRef::as_ref);
        if state != Some(expected_state.as_str()) {
            log::error!("Request state does not match the callback state");
            return Err(ClientError::StateMismatch);
        }

        Ok(code.to_string())
    }

    /// Completes the authorization flow from the URL the member was
    /// redirected to: checks the state, then exchanges the code for an
    /// access token.
    async fn request_token_from_redirect(&self, url: &str) -> ClientResult<()> {
        let code = self.parse_response_code(url)?;
        self.request_token(&code).await
    }

    /// The profile of the authenticated member.
    async fn me(&self) -> ClientResult<Profile> {
        let result = self.endpoint_get("me", &Query::new()).await?;
        convert_result(&result)
    }

    /// Publishes a plain text share on behalf of `author`.
    ///
    /// The share endpoint takes the access token as a query parameter and
    /// answers with an untyped body, which is returned verbatim.
    async fn share_post(&self, author: &AuthorId, text: &str) -> ClientResult<String> {
        let access_token = {
            let token = self.get_token();
            let token = token.lock().await.unwrap();
            token
                .as_ref()
                .ok_or(ClientError::MissingToken)?
                .access_token
                .clone()
        };

        let post = UgcPost::text(author, text);
        let url = Url::parse_with_params(
            &self.api_url("ugcPosts"),
            &[(params::OAUTH2_ACCESS_TOKEN, access_token.as_str())],
        )?;

        Ok(self
            .get_http()
            .post(url.as_str(), None, &serde_json::to_value(&post)?)
            .await?)
    }

    /// Creates the given job postings through the batch-create operation
    /// of the simple job postings endpoint. Returns the raw response text.
    async fn share_job_postings(&self, postings: &[JobPosting]) -> ClientResult<String> {
        let mut extra = Headers::new();
        extra.insert(
            headers::RESTLI_PROTOCOL_VERSION.to_owned(),
            "2.0.0".to_owned(),
        );
        extra.insert(headers::RESTLI_METHOD.to_owned(), "batch_create".to_owned());

        let batch = JobPostingBatch {
            elements: postings.to_vec(),
        };
        self.endpoint_post(
            "simpleJobPostings",
            Some(&extra),
            &serde_json::to_value(batch)?,
        )
        .await
    }

    /// Tries to open the authorization URL in the user's browser, and
    /// returns the obtained code.
    ///
    /// Note: this method requires the `cli` feature.
    #[cfg(feature = "cli")]
    fn get_code_from_user(&self, url: &str) -> ClientResult<String> {
        log::info!("Opening browser with auth URL");
        match webbrowser::open(url) {
            Ok(_) => println!("Opened {} in your browser.", url),
            Err(why) => eprintln!(
                "Error when trying to open an URL in your browser: {:?}. \
                 Please navigate here manually: {}",
                why, url
            ),
        }

        log::info!("Prompting user for code");
        println!("Please enter the URL you were redirected to: ");
        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        let code = self.parse_response_code(input.trim())?;

        Ok(code)
    }

    /// Opens up the authorization URL in the user's browser so that it can
    /// authenticate. It reads from the standard input the redirect URI
    /// in order to obtain the access token information. The resulting
    /// access token will be saved internally once the operation is
    /// successful.
    ///
    /// If the [`Config::token_cached`](crate::Config) setting is enabled
    /// for this client and a valid token exists in the cache, it is used
    /// directly and the member is not prompted.
    ///
    /// Note: this method requires the `cli` feature.
    #[cfg(feature = "cli")]
    #[maybe_async]
    async fn prompt_for_token(&self, url: &str) -> ClientResult<()> {
        match self.read_token_cache().await {
            Ok(Some(new_token)) => {
                *self.get_token().lock().await.unwrap() = Some(new_token);
            }
            // Otherwise following the usual procedure to get the token.
            _ => {
                let code = self.get_code_from_user(url)?;
                self.request_token(&code).await?;
            }
        }

        self.write_token_cache().await
    }
}
