//! Domain errors for strategy generation.

use serde::Serialize;
use thiserror::Error;

/// Stage of an invocation that produced a failure.
///
/// Lets callers tell "fix your input" (lookup, render) apart from
/// "retry the network" (backend).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    Lookup,
    Render,
    Backend,
}

impl FailureStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lookup => "lookup",
            Self::Render => "render",
            Self::Backend => "backend",
        }
    }
}

impl std::fmt::Display for FailureStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by a single capability invocation.
#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("Capability not found: {0}")]
    CapabilityNotFound(String),

    #[error("Missing parameter '{parameter}' for capability '{capability}'")]
    MissingParameter { capability: String, parameter: String },

    #[error("Invalid parameter '{parameter}' for capability '{capability}': {reason}")]
    InvalidParameter {
        capability: String,
        parameter: String,
        reason: String,
    },

    #[error("Template for '{capability}' references unknown placeholder '{placeholder}'")]
    TemplateSubstitution {
        capability: String,
        placeholder: String,
    },

    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Backend rejected request: {0}")]
    BackendRejected(String),

    #[error("Malformed backend response: {0}")]
    MalformedBackendResponse(String),
}

pub type StrategyResult<T> = Result<T, StrategyError>;

impl StrategyError {
    /// Which stage of `invoke` failed.
    pub fn stage(&self) -> FailureStage {
        match self {
            Self::CapabilityNotFound(_) => FailureStage::Lookup,
            Self::MissingParameter { .. }
            | Self::InvalidParameter { .. }
            | Self::TemplateSubstitution { .. } => FailureStage::Render,
            Self::BackendUnavailable(_)
            | Self::BackendRejected(_)
            | Self::MalformedBackendResponse(_) => FailureStage::Backend,
        }
    }

    /// Only transient backend failures are worth retrying, and never by the core.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::BackendUnavailable(_))
    }
}

/// Errors detected while building a capability catalog.
///
/// These are startup failures: a catalog that fails validation is never
/// handed to a dispatcher.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Capability registered twice: {0}")]
    DuplicateCapability(String),

    #[error("Capability '{capability}' declares parameter '{parameter}' more than once")]
    DuplicateParameter {
        capability: String,
        parameter: String,
    },

    #[error("Capability '{capability}' template references undeclared placeholder '{placeholder}'")]
    UndeclaredPlaceholder {
        capability: String,
        placeholder: String,
    },

    #[error("Capability '{capability}' never uses declared parameter '{parameter}'")]
    UnusedParameter {
        capability: String,
        parameter: String,
    },

    #[error("Capability '{capability}' template does not include the knowledge base")]
    MissingKnowledgePlaceholder { capability: String },

    #[error("Capability '{capability}' template is malformed: {reason}")]
    MalformedTemplate { capability: String, reason: String },

    #[error("Capability '{capability}' has a zero output ceiling")]
    ZeroOutputCeiling { capability: String },

    #[error("Capability '{capability}' parameter '{parameter}' has an invalid default: {reason}")]
    InvalidDefault {
        capability: String,
        parameter: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_classification() {
        assert_eq!(
            StrategyError::CapabilityNotFound("x".to_string()).stage(),
            FailureStage::Lookup
        );
        assert_eq!(
            StrategyError::MissingParameter {
                capability: "local_seo".to_string(),
                parameter: "business_name".to_string(),
            }
            .stage(),
            FailureStage::Render
        );
        assert_eq!(
            StrategyError::MalformedBackendResponse("empty".to_string()).stage(),
            FailureStage::Backend
        );
    }

    #[test]
    fn test_only_unavailable_is_retryable() {
        assert!(StrategyError::BackendUnavailable("timeout".to_string()).is_retryable());
        assert!(!StrategyError::BackendRejected("quota".to_string()).is_retryable());
        assert!(!StrategyError::MalformedBackendResponse("empty".to_string()).is_retryable());
        assert!(!StrategyError::CapabilityNotFound("nope".to_string()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = StrategyError::InvalidParameter {
            capability: "retention_marketing".to_string(),
            parameter: "repeat_rate".to_string(),
            reason: "must be between 0 and 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'repeat_rate' for capability 'retention_marketing': must be between 0 and 1"
        );
        assert_eq!(FailureStage::Backend.to_string(), "backend");
    }
}
