use thiserror::Error;

pub type Result<T> = std::result::Result<T, RotatorError>;

/// Everything that can abort a rotation run. All variants are terminal; the
/// only soft recovery in the system is the one-shot token-limit remediation
/// inside the acquirer, which never surfaces here.
#[derive(Error, Debug)]
pub enum RotatorError {
    #[error("credential store error: {0}")]
    CredentialStore(String),

    #[error("identity provider transport error: {0}")]
    ProviderTransport(#[from] reqwest::Error),

    #[error("identity provider rejected the token request: {code}")]
    ProviderLogic {
        code: String,
        description: Option<String>,
    },

    #[error("could not resolve encryption key alias '{alias}': {message}")]
    KeyResolution { alias: String, message: String },

    #[error("parameter store error: {0}")]
    ParameterStore(String),
}
