use tracing::{error, info};

use crate::error::RotatorError;
use crate::utils::constants::{
    KEY_ALIAS_SUFFIX, TOKEN_PARAMETER_DESCRIPTION, TOKEN_PARAMETER_NAME, TOKEN_PARAMETER_TIER,
};

/// Write request for the single secure parameter slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecureParameter {
    pub name: String,
    pub description: String,
    pub value: String,
    pub key_id: String,
    pub overwrite: bool,
    pub tier: String,
}

pub trait KeyResolver {
    /// Resolve a key alias to a concrete key identifier. Called on every
    /// write, never cached across runs.
    fn resolve_alias(
        &self,
        alias: &str,
    ) -> impl std::future::Future<Output = Result<String, RotatorError>> + Send;
}

pub trait SecureParameterWriter {
    /// Persist one parameter as an encrypted secure string.
    fn put_secure(
        &self,
        parameter: &SecureParameter,
    ) -> impl std::future::Future<Output = Result<(), RotatorError>> + Send;
}

/// Sink that binds the bearer token to its encryption key and overwrites
/// the one parameter downstream consumers read.
pub struct TokenSink<R, W> {
    resolver: R,
    writer: W,
}

impl<R: KeyResolver, W: SecureParameterWriter> TokenSink<R, W> {
    pub fn new(resolver: R, writer: W) -> Self {
        Self { resolver, writer }
    }

    /// Store `token` under the fixed parameter name, encrypted with the key
    /// behind `{prefix}-ssm-parameter-store`. The previous value is
    /// unconditionally replaced; a failed write surfaces as-is.
    pub async fn store_token(&self, token: &str, prefix: &str) -> Result<(), RotatorError> {
        let alias = format!("{prefix}{KEY_ALIAS_SUFFIX}");
        match self.try_store(token, &alias).await {
            Ok(()) => {
                info!("EDL bearer token has been stored as a secure string in the parameter store");
                Ok(())
            }
            Err(err) => {
                error!("could not store EDL bearer token in the parameter store: {err}");
                Err(err)
            }
        }
    }

    async fn try_store(&self, token: &str, alias: &str) -> Result<(), RotatorError> {
        let key_id = self.resolver.resolve_alias(alias).await?;

        let parameter = SecureParameter {
            name: TOKEN_PARAMETER_NAME.to_string(),
            description: TOKEN_PARAMETER_DESCRIPTION.to_string(),
            value: token.to_string(),
            key_id,
            overwrite: true,
            tier: TOKEN_PARAMETER_TIER.to_string(),
        };
        self.writer.put_secure(&parameter).await
    }
}
