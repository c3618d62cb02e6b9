//! Scope markers and the sharing decision derived from them.

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use crate::key::Token;

/// Declared scope of a provider.
///
/// `Global` providers are constructed once, at registration, and reused for
/// the life of the injector regardless of what depends on them, as long as
/// their own direct dependencies can be shared (see
/// [`CaptivePolicy`](crate::CaptivePolicy)). `Default`
/// providers are never shared: every lookup constructs a new instance, and any
/// consumer that depends on one directly inherits that per-use behaviour.
///
/// # Examples
///
/// ```rust
/// use ferrous_inject::Scope;
///
/// assert_eq!(Scope::default(), Scope::Default);
/// assert!(Scope::Global.is_global());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum Scope {
    /// Single shared instance for the injector's lifetime
    Global,
    /// Sharing inferred from the dependency graph
    #[default]
    Default,
}

impl Scope {
    pub fn is_global(self) -> bool {
        matches!(self, Scope::Global)
    }
}

/// How a resolved entry produces instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactoryKind {
    /// Always returns the same previously constructed instance
    Memoized,
    /// Constructs a new instance on every invocation
    Fresh,
}

/// Outcome of resolving one provider or consumer.
///
/// The resolver hands this back to whoever triggered the resolution, which
/// folds [`is_shareable`](Self::is_shareable) of each direct dependency into
/// its own sharing decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub token: Token,
    pub kind: FactoryKind,
}

impl Resolution {
    pub(crate) fn new(token: Token, kind: FactoryKind) -> Self {
        Self { token, kind }
    }

    /// Whether dependants may treat this entry as a single shared instance.
    pub fn is_shareable(&self) -> bool {
        self.kind == FactoryKind::Memoized
    }
}

/// First dependency that is not shareable, if any.
pub(crate) fn first_unshareable<'a, I>(resolutions: I) -> Option<Token>
where
    I: IntoIterator<Item = &'a Resolution>,
{
    resolutions
        .into_iter()
        .find(|resolution| !resolution.is_shareable())
        .map(|resolution| resolution.token)
}
