use crate::{
    auth_urls,
    clients::{BaseClient, OAuthClient},
    http::{HttpClient, Query},
    join_scopes, params,
    sync::Mutex,
    ClientError, ClientResult, Config, Credentials, OAuth, Token, DEFAULT_SCOPES,
};

use std::sync::Arc;

use maybe_async::maybe_async;
use url::Url;

/// The client for the authorization code flow: the member is redirected to
/// LinkedIn, authorizes the application and comes back with a short-lived
/// code, which [`OAuthClient::request_token`] exchanges for an access
/// token.
#[derive(Clone, Debug, Default)]
pub struct AuthCodeLinkedIn {
    pub creds: Credentials,
    pub oauth: OAuth,
    pub config: Config,
    pub token: Arc<Mutex<Option<Token>>>,
    pub(crate) http: HttpClient,
}

/// This client has access to the base methods.
#[maybe_async]
impl BaseClient for AuthCodeLinkedIn {
    fn get_http(&self) -> &HttpClient {
        &self.http
    }

    fn get_token(&self) -> Arc<Mutex<Option<Token>>> {
        Arc::clone(&self.token)
    }

    fn get_creds(&self) -> &Credentials {
        &self.creds
    }

    fn get_config(&self) -> &Config {
        &self.config
    }
}

/// This client includes user authorization, so it has access to the user
/// private endpoints in [`OAuthClient`].
#[maybe_async]
impl OAuthClient for AuthCodeLinkedIn {
    fn get_oauth(&self) -> &OAuth {
        &self.oauth
    }

    /// Obtains a user access token given a code, as part of the OAuth
    /// authentication. The access token will be saved internally.
    async fn request_token(&self, code: &str) -> ClientResult<()> {
        log::info!("Requesting Auth Code token");

        let client_secret = self.creds.secret.as_ref().ok_or_else(|| {
            ClientError::InvalidConfig("the auth code flow requires a client secret".to_owned())
        })?;

        let mut data = Query::new();
        data.insert(params::GRANT_TYPE, params::GRANT_TYPE_AUTH_CODE);
        data.insert(params::CODE, code);
        data.insert(params::REDIRECT_URI, &self.oauth.redirect_uri);
        data.insert(params::CLIENT_ID, &self.creds.id);
        data.insert(params::CLIENT_SECRET, client_secret);

        let token = self.fetch_access_token(&data).await?;
        *self.token.lock().await.unwrap() = Some(token);

        self.write_token_cache().await
    }
}

impl AuthCodeLinkedIn {
    /// Builds a new [`AuthCodeLinkedIn`] given a pair of client credentials
    /// and OAuth information.
    #[must_use]
    pub fn new(creds: Credentials, oauth: OAuth) -> Self {
        Self {
            creds,
            oauth,
            ..Default::default()
        }
    }

    /// Build a new [`AuthCodeLinkedIn`] from an already generated token.
    /// Note that once the token expires this will fail to make requests,
    /// as the client credentials aren't known.
    #[must_use]
    pub fn from_token(token: Token) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token))),
            ..Default::default()
        }
    }

    /// Same as [`Self::new`] but with an extra parameter to configure the
    /// client.
    #[must_use]
    pub fn with_config(creds: Credentials, oauth: OAuth, config: Config) -> Self {
        Self {
            creds,
            oauth,
            config,
            ..Default::default()
        }
    }

    /// Returns the URL needed to authorize the current client as the first
    /// step in the authorization flow.
    ///
    /// The query parameters keep a fixed order: `response_type`,
    /// `client_id`, `redirect_uri`, `state`, `scope`, `client_secret`.
    pub fn get_authorize_url(&self) -> ClientResult<String> {
        log::info!("Building auth URL");

        let scopes = if self.oauth.scopes.is_empty() {
            DEFAULT_SCOPES.join(" ")
        } else {
            join_scopes(&self.oauth.scopes)
        };
        let client_secret = self.creds.secret.as_deref().ok_or_else(|| {
            ClientError::InvalidConfig("the auth code flow requires a client secret".to_owned())
        })?;

        let payload = [
            (params::RESPONSE_TYPE, params::RESPONSE_TYPE_CODE),
            (params::CLIENT_ID, self.creds.id.as_str()),
            (params::REDIRECT_URI, self.oauth.redirect_uri.as_str()),
            (params::STATE, self.oauth.state.as_str()),
            (params::SCOPE, scopes.as_str()),
            (params::CLIENT_SECRET, client_secret),
        ];

        let request_url = self.auth_url(auth_urls::AUTHORIZE);
        let parsed = Url::parse_with_params(&request_url, payload)?;
        Ok(parsed.into())
    }
}
