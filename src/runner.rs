use tracing::error;

use crate::config::settings::RotationEvent;
use crate::creds::{self, CredentialStore};
use crate::error::RotatorError;
use crate::sinks::parameter_store::{KeyResolver, SecureParameterWriter, TokenSink};
use crate::sources::edl::EdlClient;
use crate::sources::response::TokenRequestOutcome;

/// Run one rotation: load credentials, mint a token, store it.
///
/// Strictly sequential; the first error aborts the run. Either a fresh
/// token is both acquired and durably stored, or the run failed — there is
/// no partial-success state and no resumption across runs.
///
/// The remediation inside the acquirer revokes every live token, so two
/// overlapping runs can revoke each other's freshly minted token. Accepted
/// at the ~59-day invocation cadence; last write wins on the parameter slot.
pub async fn rotate<C, R, W>(
    event: &RotationEvent,
    creds_store: &C,
    edl: &EdlClient,
    sink: &TokenSink<R, W>,
) -> Result<(), RotatorError>
where
    C: CredentialStore,
    R: KeyResolver,
    W: SecureParameterWriter,
{
    let credentials = creds::load_credentials(creds_store).await?;

    let token = match edl.acquire_token(&credentials).await? {
        TokenRequestOutcome::Success { token } => token,
        TokenRequestOutcome::Failure { reason } => {
            error!("no usable token was produced, aborting the run");
            return Err(reason.into());
        }
    };

    sink.store_token(&token, &event.prefix).await
}
