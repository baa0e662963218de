//! Error types for atom literal codecs

use thiserror::Error;

use crate::Aura;

/// Literal codec errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuraError {
    // Shape errors
    #[error("{aura} literal has the wrong shape: {input:?}")]
    ShapeMismatch { aura: Aura, input: String },

    #[error("Unrecognized literal: {0:?}")]
    Unrecognized(String),

    // Semantic errors
    #[error("Invalid {aura} literal {input:?}: {reason}")]
    Invalid {
        aura: Aura,
        input: String,
        reason: &'static str,
    },

    #[error("Non-canonical {aura} literal: {input:?}")]
    NonCanonical { aura: Aura, input: String },

    #[error("Expected {expected} literal, found {found}: {input:?}")]
    AuraMismatch {
        expected: Aura,
        found: Aura,
        input: String,
    },

    // Scope gaps
    #[error("Unsupported: {0}")]
    Unsupported(&'static str),

    // Typed entrypoint wrapper
    #[error("Failed to parse {aura} from {input:?}")]
    Parse {
        aura: Aura,
        input: String,
        #[source]
        cause: Box<AuraError>,
    },
}

impl AuraError {
    /// Semantic failure for `aura` on `input`
    pub fn invalid(aura: Aura, input: &str, reason: &'static str) -> Self {
        AuraError::Invalid {
            aura,
            input: input.to_string(),
            reason,
        }
    }

    /// Shape failure for `aura` on `input`
    pub fn shape(aura: Aura, input: &str) -> Self {
        AuraError::ShapeMismatch {
            aura,
            input: input.to_string(),
        }
    }
}

/// Result type for literal operations
pub type AuraResult<T> = Result<T, AuraError>;
