/// Sources module
///
/// The identity-provider side of the pipeline: the EDL client and the typed
/// shapes of its responses.
pub mod edl;
pub mod response;

pub use edl::EdlClient;
pub use response::{TokenRequestOutcome, TokenResponse};
