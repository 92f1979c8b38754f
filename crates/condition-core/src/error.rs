//! Error taxonomy for condition evaluation.
//!
//! Every failed evaluation surfaces exactly one of these kinds to the host
//! engine; nothing is retried or swallowed inside the library. Whether a
//! failed predicate counts as "condition is false" or aborts script
//! evaluation is the host's policy, not decided here.

/// Severity level of an error, used for categorization and recovery
/// strategies by the host engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// May succeed on a later evaluation without changing the rule.
    ///
    /// Example: actor not yet spawned into the registry.
    Recoverable,

    /// Invalid input; re-evaluating the same rule cannot succeed.
    ///
    /// Examples: malformed quantity token, unrecognized operator.
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Errors that can occur while evaluating an inventory condition.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConditionError {
    /// A mandatory positional parameter was absent or empty.
    #[error("missing required parameter '{0}'")]
    MissingParameter(&'static str),

    /// The operator token is not in the recognized operator set.
    #[error("unrecognized comparison operator '{0}'")]
    UnknownOperator(String),

    /// The quantity token did not parse as a non-negative integer.
    #[error("invalid quantity token '{0}' (expected a non-negative integer)")]
    InvalidQuantity(String),

    /// The actor reference named neither the player nor any known NPC.
    #[error("actor '{0}' not found in registry")]
    ActorNotFound(String),
}

impl ConditionError {
    /// Returns the severity level of this error.
    ///
    /// Malformed parameters are caller contract violations; an unknown actor
    /// may become resolvable as game state changes (e.g., an NPC spawns).
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingParameter(_) | Self::UnknownOperator(_) | Self::InvalidQuantity(_) => {
                ErrorSeverity::Validation
            }
            Self::ActorNotFound(_) => ErrorSeverity::Recoverable,
        }
    }

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for error categorization, metrics, and testing.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingParameter(_) => "CONDITION_MISSING_PARAMETER",
            Self::UnknownOperator(_) => "CONDITION_UNKNOWN_OPERATOR",
            Self::InvalidQuantity(_) => "CONDITION_INVALID_QUANTITY",
            Self::ActorNotFound(_) => "CONDITION_ACTOR_NOT_FOUND",
        }
    }
}
