/// Credential loading
///
/// Fetches the EDL username/password pair from the secure parameter store,
/// decrypted. A failure here is fatal to the run — there is no retry.
use tracing::{error, info};

use crate::error::RotatorError;
use crate::utils::constants::{PASSWORD_PARAMETER_NAME, USERNAME_PARAMETER_NAME};

pub mod ssm;

/// EDL username/password pair, held in memory for the duration of one run.
pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub trait CredentialStore {
    /// Read one named entry with decryption requested; entries are stored
    /// encrypted at rest.
    fn read_decrypted(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<String, RotatorError>> + Send;
}

/// Load the EDL credentials from the secure store.
pub async fn load_credentials<S: CredentialStore>(store: &S) -> Result<Credentials, RotatorError> {
    match try_load(store).await {
        Ok(credentials) => {
            info!("retrieved EDL username and password");
            Ok(credentials)
        }
        Err(err) => {
            error!("could not retrieve EDL credentials from the parameter store: {err}");
            Err(err)
        }
    }
}

async fn try_load<S: CredentialStore>(store: &S) -> Result<Credentials, RotatorError> {
    Ok(Credentials {
        username: store.read_decrypted(USERNAME_PARAMETER_NAME).await?,
        password: store.read_decrypted(PASSWORD_PARAMETER_NAME).await?,
    })
}
