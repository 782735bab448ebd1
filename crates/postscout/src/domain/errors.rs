//! Domain Errors
//!
//! Error taxonomy for the search pipeline.

use thiserror::Error;

use crate::domain::value_objects::ProviderKind;

/// Errors surfaced by the search pipeline.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Malformed query: empty keywords, inverted date window. Never retried.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A credential required by the selected provider is missing.
    #[error("Missing credential {credential} required by the {provider} provider")]
    Configuration {
        credential: String,
        provider: ProviderKind,
    },

    /// The selected backend failed at the protocol level. The orchestrator
    /// never substitutes another provider; this propagates to the caller.
    #[error("Search provider {provider} failed: {message}")]
    Provider {
        provider: ProviderKind,
        message: String,
    },

    /// Per-hit extraction/normalization failure. Recovered locally: the hit
    /// is dropped and the rest of the batch proceeds.
    #[error("Extraction error: {0}")]
    Extraction(String),
}

impl SearchError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn missing_credential(credential: impl Into<String>, provider: ProviderKind) -> Self {
        Self::Configuration {
            credential: credential.into(),
            provider,
        }
    }

    pub fn provider(provider: ProviderKind, message: impl Into<String>) -> Self {
        Self::Provider {
            provider,
            message: message.into(),
        }
    }

    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_names_the_credential() {
        let err = SearchError::missing_credential("EXA_API_KEY", ProviderKind::Semantic);
        let msg = err.to_string();
        assert!(msg.contains("EXA_API_KEY"));
        assert!(msg.contains("semantic"));
    }

    #[test]
    fn provider_error_names_the_provider() {
        let err = SearchError::provider(ProviderKind::Keyword, "connection reset");
        assert!(err.to_string().contains("keyword"));
        assert!(err.to_string().contains("connection reset"));
    }
}
