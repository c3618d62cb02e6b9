//! Error types for the injector.

use thiserror::Error;

/// Dependency injection errors
///
/// Every variant is a configuration error: it is raised synchronously at the
/// point of detection and a failed bootstrap is never retried or resumed.
///
/// # Examples
///
/// ```rust
/// use ferrous_inject::{DiError, Injector, Resolver};
///
/// struct NeverProvided;
///
/// let injector = Injector::new();
/// match injector.get::<NeverProvided>() {
///     Err(DiError::UnknownToken(name)) => assert!(name.ends_with("NeverProvided")),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiError {
    /// A provider depends on a token that was never declared available
    #[error("{token} is not available in injection context (required by {requester}). Did you provide it in the module?")]
    UnregisteredToken {
        requester: &'static str,
        token: &'static str,
    },
    /// A consumer depends on a token that has no resolved entry at wiring time
    #[error("{consumer} dependency {dependency} is not available in injection context. Did you provide it in the module?")]
    ConsumerDependencyMissing {
        consumer: &'static str,
        dependency: &'static str,
    },
    /// Lookup of a token that was never resolved
    #[error("Type {0} not injected")]
    UnknownToken(&'static str),
    /// Circular dependency detected (includes path)
    #[error("Circular dependency: {}", .0.join(" -> "))]
    Circular(Vec<&'static str>),
    /// Maximum resolution depth exceeded
    #[error("Max depth {0} exceeded")]
    DepthExceeded(usize),
    /// A token was declared twice with different constructors
    #[error("Token {token} is already provided by {existing}, cannot rebind it to {requested}")]
    ConflictingProvider {
        token: &'static str,
        existing: &'static str,
        requested: &'static str,
    },
    /// Downcast of a resolved instance failed
    #[error("Type mismatch for {token}: expected {expected}")]
    TypeMismatch {
        expected: &'static str,
        token: &'static str,
    },
    /// A constructor pulled more arguments than it declared
    #[error("{constructor} requested argument #{position} but no more dependencies were declared")]
    MissingArgument {
        constructor: &'static str,
        position: usize,
    },
    /// A global provider depends on a per-use provider and the captive policy denies it
    #[error("Global provider {provider} captures non-shareable dependency {dependency}")]
    CaptiveDependency {
        provider: &'static str,
        dependency: &'static str,
    },
    /// A constructor reported a failure
    #[error("Failed to construct {constructor}: {message}")]
    Construction {
        constructor: &'static str,
        message: String,
    },
    /// Options could not be parsed
    #[error("Invalid injector options: {0}")]
    InvalidOptions(String),
}

impl DiError {
    /// Builds a [`DiError::Construction`] attributed to `T`.
    ///
    /// Intended for use inside [`Injectable::construct`](crate::Injectable::construct).
    pub fn construction<T: ?Sized>(message: impl Into<String>) -> Self {
        DiError::Construction {
            constructor: std::any::type_name::<T>(),
            message: message.into(),
        }
    }
}

/// Result type for DI operations
pub type DiResult<T> = Result<T, DiError>;
