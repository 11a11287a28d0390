use serde::Deserialize;

use crate::error::RotatorError;

/// Provider response to a token-creation call, discriminated once at the
/// HTTP boundary so downstream logic branches on variants only.
///
/// `Rejected` is tried first: an `error` field wins even when an
/// `access_token` is also present.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TokenResponse {
    Rejected {
        error: String,
        error_description: Option<String>,
    },
    Issued {
        access_token: String,
    },
}

/// One entry of the list-tokens response. Entries without an `access_token`
/// carry nothing revocable and are skipped.
#[derive(Debug, Deserialize)]
pub struct ExistingToken {
    #[serde(default)]
    pub access_token: Option<String>,
}

/// What the acquirer hands to the orchestrator: either a usable token or a
/// provider-side rejection that was logged rather than raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenRequestOutcome {
    Success { token: String },
    Failure { reason: FailureReason },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    ProviderError {
        code: String,
        description: Option<String>,
    },
}

impl From<FailureReason> for RotatorError {
    fn from(reason: FailureReason) -> Self {
        match reason {
            FailureReason::ProviderError { code, description } => {
                RotatorError::ProviderLogic { code, description }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_issued_token() {
        let response: TokenResponse =
            serde_json::from_str(r#"{"access_token": "abc123", "token_type": "Bearer"}"#)
                .expect("valid response");
        match response {
            TokenResponse::Issued { access_token } => assert_eq!(access_token, "abc123"),
            other => panic!("expected Issued, got {other:?}"),
        }
    }

    #[test]
    fn parses_rejection_with_optional_description() {
        let response: TokenResponse =
            serde_json::from_str(r#"{"error": "invalid_credentials"}"#).expect("valid response");
        match response {
            TokenResponse::Rejected {
                error,
                error_description,
            } => {
                assert_eq!(error, "invalid_credentials");
                assert!(error_description.is_none());
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn error_field_wins_when_both_are_present() {
        let response: TokenResponse = serde_json::from_str(
            r#"{"access_token": "abc123", "error": "max_token_limit", "error_description": "cap"}"#,
        )
        .expect("valid response");
        assert!(matches!(response, TokenResponse::Rejected { .. }));
    }

    #[test]
    fn list_entry_without_token_field_is_empty() {
        let entries: Vec<ExistingToken> =
            serde_json::from_str(r#"[{"access_token": "t1"}, {"note": "nothing here"}]"#)
                .expect("valid list");
        assert_eq!(entries[0].access_token.as_deref(), Some("t1"));
        assert!(entries[1].access_token.is_none());
    }
}
