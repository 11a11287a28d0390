/// Sinks module
///
/// The durable side of the pipeline: key resolution and the secure
/// parameter write the whole run exists to produce.
pub mod kms;
pub mod parameter_store;
pub mod ssm;

pub use parameter_store::{SecureParameter, TokenSink};
