//! Most of these tests require a browser session with a real LinkedIn
//! account, so they are ignored by default. They can be run with:
//!
//! ```sh
//! cargo test --features=cli,env-file -- --ignored --test-threads=1
//! ```
//!
//! Set `LINKEDIN_ACCESS_TOKEN`, or the client credentials and
//! `LINKEDIN_REDIRECT_URI`, in an `.env` file or export them manually as
//! environmental variables.

use linkedin::{
    model::{AuthorId, PersonId},
    prelude::*,
    scopes, AuthCodeLinkedIn, Credentials, OAuth, Token,
};

use std::env;

use maybe_async::maybe_async;

/// Generating a new OAuth client for the requests.
#[maybe_async]
pub async fn oauth_client() -> AuthCodeLinkedIn {
    if let Ok(access_token) = env::var("LINKEDIN_ACCESS_TOKEN") {
        let tok = Token {
            access_token,
            ..Default::default()
        };

        AuthCodeLinkedIn::from_token(tok)
    } else {
        // The credentials must be available in the environment. Enable
        // `env-file` in order to read them from an `.env` file.
        let creds = Credentials::from_env().unwrap_or_else(|| {
            panic!(
                "No credentials configured. Make sure that either the \
                `env-file` feature is enabled, or that the required \
                environment variables are exported (`LINKEDIN_CLIENT_ID`, \
                `LINKEDIN_CLIENT_SECRET`)."
            )
        });

        let scopes = scopes!("openid", "profile", "email", "w_member_social");
        let oauth = OAuth::from_env(scopes).unwrap();

        let linkedin = AuthCodeLinkedIn::new(creds, oauth);

        #[cfg(feature = "cli")]
        {
            let url = linkedin.get_authorize_url().unwrap();
            linkedin.prompt_for_token(&url).await.unwrap();
        }

        linkedin
    }
}

#[maybe_async::test(feature = "__sync", async(feature = "__async", tokio::test))]
#[ignore]
async fn test_me() {
    let client = oauth_client().await;
    let profile = client.me().await.unwrap();

    println!(
        "Fetched the profile of {} {}",
        profile.first_name, profile.last_name
    );
    assert!(!profile.id.is_empty());
}

#[maybe_async::test(feature = "__sync", async(feature = "__async", tokio::test))]
#[ignore]
async fn test_share_post() {
    let client = oauth_client().await;
    let profile = client.me().await.unwrap();

    let author = AuthorId::from(PersonId::from_id(profile.id).unwrap());
    let response = client
        .share_post(&author, "Posted from the linkedin crate integration tests")
        .await
        .unwrap();
    println!("Share response: {}", response);
}
