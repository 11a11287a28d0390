use aws_sdk_ssm::Client;

use crate::creds::CredentialStore;
use crate::error::RotatorError;

/// Credential source backed by SSM Parameter Store.
#[derive(Debug, Clone)]
pub struct SsmCredentialStore {
    client: Client,
}

impl SsmCredentialStore {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

impl CredentialStore for SsmCredentialStore {
    async fn read_decrypted(&self, name: &str) -> Result<String, RotatorError> {
        let response = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|err| {
                RotatorError::CredentialStore(format!("get_parameter '{}' failed: {}", name, err))
            })?;

        response
            .parameter
            .and_then(|parameter| parameter.value)
            .ok_or_else(|| {
                RotatorError::CredentialStore(format!("parameter '{}' has no value", name))
            })
    }
}
