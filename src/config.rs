//! Injector configuration.
//!
//! Options are plain data with builder-style setters. With the `config`
//! feature they can also be loaded from JSON.

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "config")]
use crate::error::{DiError, DiResult};

/// Default cap on nested provider resolution.
///
/// Each nesting level costs several stack frames, so the cap stays well
/// below what a default 2 MiB thread stack can hold in debug builds.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// What a fresh factory does with its own dependencies on each call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum FreshDependencies {
    /// Re-invoke every dependency factory per construction
    #[default]
    PerCall,
    /// Capture dependency instances once, when the entry is registered
    Snapshot,
}

/// Handling of global providers that depend on per-use providers.
///
/// A global provider whose direct dependency cannot be shared would pin one
/// instance of that dependency for the injector's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum CaptivePolicy {
    /// Install a fresh factory instead and report the provider as not shareable
    #[default]
    Demote,
    /// Keep the provider global regardless of its dependencies
    Allow,
    /// Keep it global, but emit a warning
    Warn,
    /// Fail with [`DiError::CaptiveDependency`](crate::DiError::CaptiveDependency)
    Deny,
}

/// Injector behaviour switches.
///
/// # Examples
///
/// ```rust
/// use ferrous_inject::{CaptivePolicy, FreshDependencies, InjectorOptions};
///
/// let options = InjectorOptions::default()
///     .with_fresh_dependencies(FreshDependencies::Snapshot)
///     .with_captive_policy(CaptivePolicy::Deny)
///     .with_max_depth(64);
///
/// assert!(options.detect_cycles);
/// assert_eq!(options.max_depth, 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct InjectorOptions {
    pub fresh_dependencies: FreshDependencies,
    /// Track the providers currently being resolved and fail on re-entry
    pub detect_cycles: bool,
    pub max_depth: usize,
    pub captive_policy: CaptivePolicy,
}

impl Default for InjectorOptions {
    fn default() -> Self {
        Self {
            fresh_dependencies: FreshDependencies::default(),
            detect_cycles: true,
            max_depth: DEFAULT_MAX_DEPTH,
            captive_policy: CaptivePolicy::default(),
        }
    }
}

impl InjectorOptions {
    pub fn with_fresh_dependencies(mut self, mode: FreshDependencies) -> Self {
        self.fresh_dependencies = mode;
        self
    }

    pub fn with_cycle_detection(mut self, enabled: bool) -> Self {
        self.detect_cycles = enabled;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_captive_policy(mut self, policy: CaptivePolicy) -> Self {
        self.captive_policy = policy;
        self
    }

    /// Parses options from JSON; missing fields keep their defaults.
    #[cfg(feature = "config")]
    pub fn from_json_str(json: &str) -> DiResult<Self> {
        serde_json::from_str(json).map_err(|e| DiError::InvalidOptions(e.to_string()))
    }
}
