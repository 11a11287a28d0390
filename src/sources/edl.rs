use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::{error, info, warn};

use crate::creds::Credentials;
use crate::error::RotatorError;
use crate::sources::response::{ExistingToken, FailureReason, TokenRequestOutcome, TokenResponse};
use crate::utils::constants::MAX_TOKEN_LIMIT;

static APPLICATION_JSON: &str = "application/json";

/// Earthdata Login token endpoint client.
///
/// Transport errors propagate as [`RotatorError::ProviderTransport`] — token
/// creation has no safe partial state, so the run fails fast. Provider-side
/// rejections come back as a [`TokenRequestOutcome::Failure`] instead.
#[derive(Debug, Clone)]
pub struct EdlClient {
    client: Client,
    base_url: String,
}

impl EdlClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Exchange credentials for a fresh bearer token.
    ///
    /// A `max_token_limit` rejection enters remediation: list every live
    /// token, revoke each, then retry the creation exactly once. The
    /// provider caps concurrently live tokens per account, and the previous
    /// token is presumed stale on our cadence, so the safe move is "clear
    /// all, mint one fresh".
    pub async fn acquire_token(
        &self,
        credentials: &Credentials,
    ) -> Result<TokenRequestOutcome, RotatorError> {
        match self.create_token(credentials).await? {
            TokenResponse::Issued { access_token } => {
                info!("successfully generated EDL bearer token");
                Ok(TokenRequestOutcome::Success {
                    token: access_token,
                })
            }
            TokenResponse::Rejected { error, .. } if error == MAX_TOKEN_LIMIT => {
                warn!("token limit reached, revoking existing tokens before one retry");
                self.remediate_token_limit(credentials).await
            }
            TokenResponse::Rejected {
                error,
                error_description,
            } => {
                error!(
                    "error encountered when trying to retrieve bearer token from EDL: {} ({})",
                    error,
                    error_description.as_deref().unwrap_or("no description")
                );
                Ok(TokenRequestOutcome::Failure {
                    reason: FailureReason::ProviderError {
                        code: error,
                        description: error_description,
                    },
                })
            }
        }
    }

    /// Revoke everything the provider lists for this account, then repeat
    /// the creation once. A rejection on the retry is final — no loop.
    async fn remediate_token_limit(
        &self,
        credentials: &Credentials,
    ) -> Result<TokenRequestOutcome, RotatorError> {
        let existing = self.list_tokens(credentials).await?;

        let mut revoked = 0usize;
        for token in existing
            .iter()
            .filter_map(|entry| entry.access_token.as_deref())
        {
            self.revoke_token(credentials, token).await?;
            revoked += 1;
        }
        info!("revoked {revoked} existing tokens");

        match self.create_token(credentials).await? {
            TokenResponse::Issued { access_token } => {
                info!("successfully generated EDL bearer token");
                Ok(TokenRequestOutcome::Success {
                    token: access_token,
                })
            }
            TokenResponse::Rejected {
                error,
                error_description,
            } => {
                error!(
                    "error encountered when trying to retrieve bearer token from EDL after revoking: {} ({})",
                    error,
                    error_description.as_deref().unwrap_or("no description")
                );
                Ok(TokenRequestOutcome::Failure {
                    reason: FailureReason::ProviderError {
                        code: error,
                        description: error_description,
                    },
                })
            }
        }
    }

    async fn create_token(&self, credentials: &Credentials) -> Result<TokenResponse, RotatorError> {
        let response = self
            .client
            .post(self.token_url())
            .header(ACCEPT, APPLICATION_JSON)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .send()
            .await?;
        Ok(response.json::<TokenResponse>().await?)
    }

    async fn list_tokens(
        &self,
        credentials: &Credentials,
    ) -> Result<Vec<ExistingToken>, RotatorError> {
        let response = self
            .client
            .get(self.tokens_url())
            .header(ACCEPT, APPLICATION_JSON)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .send()
            .await?;
        Ok(response.json::<Vec<ExistingToken>>().await?)
    }

    /// Best-effort: the revoke response is intentionally not inspected.
    async fn revoke_token(
        &self,
        credentials: &Credentials,
        token: &str,
    ) -> Result<(), RotatorError> {
        self.client
            .post(self.revoke_url())
            .query(&[("token", token)])
            .header(ACCEPT, APPLICATION_JSON)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .send()
            .await?;
        Ok(())
    }

    fn token_url(&self) -> String {
        format!("{}/api/users/token", self.base_url)
    }

    fn tokens_url(&self) -> String {
        format!("{}/api/users/tokens", self.base_url)
    }

    fn revoke_url(&self) -> String {
        format!("{}/api/users/revoke_token", self.base_url)
    }
}
