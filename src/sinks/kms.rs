use aws_sdk_kms::Client;

use crate::error::RotatorError;
use crate::sinks::parameter_store::KeyResolver;

/// KMS-backed alias resolution. Callers pass the bare alias name; the
/// `alias/` namespace prefix is a KMS addressing detail applied here.
#[derive(Debug, Clone)]
pub struct KmsKeyResolver {
    client: Client,
}

impl KmsKeyResolver {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

impl KeyResolver for KmsKeyResolver {
    async fn resolve_alias(&self, alias: &str) -> Result<String, RotatorError> {
        let response = self
            .client
            .describe_key()
            .key_id(format!("alias/{alias}"))
            .send()
            .await
            .map_err(|err| RotatorError::KeyResolution {
                alias: alias.to_string(),
                message: format!("describe_key failed: {err}"),
            })?;

        response
            .key_metadata
            .map(|metadata| metadata.key_id)
            .ok_or_else(|| RotatorError::KeyResolution {
                alias: alias.to_string(),
                message: "describe_key returned no key metadata".to_string(),
            })
    }
}
