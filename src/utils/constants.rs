//! Shared constants and invariants

pub const TOKEN_PARAMETER_NAME: &str = "bearer--edl--token";
pub const TOKEN_PARAMETER_DESCRIPTION: &str = "Temporary EDL bearer token";
pub const TOKEN_PARAMETER_TIER: &str = "Standard";

// Credential entries read from the parameter store
pub const USERNAME_PARAMETER_NAME: &str = "edl_username";
pub const PASSWORD_PARAMETER_NAME: &str = "edl_password";

pub const KEY_ALIAS_SUFFIX: &str = "-ssm-parameter-store";

// Provider error code that triggers the revoke-and-retry remediation
pub const MAX_TOKEN_LIMIT: &str = "max_token_limit";
