use crate::{
    clients::BaseClient,
    http::{HttpClient, Query},
    params,
    sync::Mutex,
    ClientError, ClientResult, Config, Credentials, Token,
};

use std::sync::Arc;

use maybe_async::maybe_async;

/// The client for the client credentials flow, a 2-legged grant for
/// requests that do not act on behalf of a specific member.
#[derive(Clone, Debug, Default)]
pub struct ClientCredsLinkedIn {
    pub config: Config,
    pub creds: Credentials,
    pub token: Arc<Mutex<Option<Token>>>,
    pub(crate) http: HttpClient,
}

/// This client has access to the base methods.
#[maybe_async]
impl BaseClient for ClientCredsLinkedIn {
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

impl ClientCredsLinkedIn {
    /// Builds a new [`ClientCredsLinkedIn`] given a pair of client
    /// credentials.
    #[must_use]
    pub fn new(creds: Credentials) -> Self {
        Self {
            creds,
            ..Default::default()
        }
    }

    /// Same as [`Self::new`] but with an extra parameter to configure the
    /// client.
    #[must_use]
    pub fn with_config(creds: Credentials, config: Config) -> Self {
        Self {
            creds,
            config,
            ..Default::default()
        }
    }

    /// Obtains the client credentials access token for the client. The
    /// token will be saved internally.
    #[maybe_async]
    pub async fn request_token(&self) -> ClientResult<()> {
        log::info!("Requesting Client Credentials token");

        let client_secret = self.creds.secret.as_ref().ok_or_else(|| {
            ClientError::InvalidConfig(
                "the client credentials flow requires a client secret".to_owned(),
            )
        })?;

        let mut data = Query::new();
        data.insert(params::GRANT_TYPE, params::GRANT_TYPE_CLIENT_CREDS);
        data.insert(params::CLIENT_ID, &self.creds.id);
        data.insert(params::CLIENT_SECRET, client_secret);

        let token = self.fetch_access_token(&data).await?;
        *self.token.lock().await.unwrap() = Some(token);

        self.write_token_cache().await
    }
}
