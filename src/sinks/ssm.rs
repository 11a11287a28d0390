use aws_sdk_ssm::types::{ParameterTier, ParameterType};
use aws_sdk_ssm::Client;

use crate::error::RotatorError;
use crate::sinks::parameter_store::{SecureParameter, SecureParameterWriter};

/// Secure parameter writer backed by SSM Parameter Store.
#[derive(Debug, Clone)]
pub struct SsmParameterWriter {
    client: Client,
}

impl SsmParameterWriter {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

impl SecureParameterWriter for SsmParameterWriter {
    async fn put_secure(&self, parameter: &SecureParameter) -> Result<(), RotatorError> {
        self.client
            .put_parameter()
            .name(&parameter.name)
            .description(&parameter.description)
            .value(&parameter.value)
            .r#type(ParameterType::SecureString)
            .key_id(&parameter.key_id)
            .overwrite(parameter.overwrite)
            .tier(ParameterTier::from(parameter.tier.as_str()))
            .send()
            .await
            .map_err(|err| {
                RotatorError::ParameterStore(format!(
                    "put_parameter '{}' failed: {}",
                    parameter.name, err
                ))
            })?;
        Ok(())
    }
}
