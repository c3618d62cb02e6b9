//! Resolver traits for instance lookup.

use std::sync::Arc;

use crate::error::{DiError, DiResult};
use crate::key::Token;
use crate::registration::AnyArc;

/// Object-safe lookup of a resolved token.
///
/// Invoking a fresh entry constructs a new instance; invoking a memoized
/// entry returns the cached one. Tokens that were never resolved fail with
/// [`DiError::UnknownToken`] and construct nothing.
pub trait ResolverCore {
    /// Returns the instance produced by `token`'s registered factory.
    fn resolve_token(&self, token: &Token) -> DiResult<AnyArc>;
}

/// High-level resolver interface with generic, type-safe lookups.
///
/// Implemented for every [`ResolverCore`].
///
/// # Examples
///
/// ```rust
/// use ferrous_inject::{Arguments, DiResult, Injectable, Injector, ModuleDescriptor, Resolver, Scope};
/// use std::sync::Arc;
///
/// struct Clock;
/// impl Injectable for Clock {
///     fn scope() -> Scope { Scope::Global }
///     fn construct(_: &mut Arguments) -> DiResult<Self> { Ok(Clock) }
/// }
///
/// let mut injector = Injector::new();
/// injector.bootstrap(ModuleDescriptor::new("app").provide_as::<Clock>("clock")).unwrap();
///
/// let clock = injector.get_named::<Clock>("clock").unwrap();
/// let again = injector.get_named::<Clock>("clock").unwrap();
/// assert!(Arc::ptr_eq(&clock, &again));
/// ```
pub trait Resolver: ResolverCore {
    /// Resolves the instance registered under `T`'s own token.
    fn get<T: Send + Sync + 'static>(&self) -> DiResult<Arc<T>> {
        self.get_as::<T>(&Token::of::<T>())
    }

    /// Resolves the instance registered under a string alias.
    fn get_named<T: Send + Sync + 'static>(&self, name: &'static str) -> DiResult<Arc<T>> {
        self.get_as::<T>(&Token::named(name))
    }

    /// Resolves any token and downcasts the instance to `T`.
    fn get_as<T: Send + Sync + 'static>(&self, token: &Token) -> DiResult<Arc<T>> {
        self.resolve_token(token)?
            .downcast::<T>()
            .map_err(|_| DiError::TypeMismatch {
                expected: std::any::type_name::<T>(),
                token: token.display_name(),
            })
    }

    /// Like [`get`](Self::get) but panics on failure.
    ///
    /// # Panics
    ///
    /// Panics with the error message if the lookup fails.
    fn get_required<T: Send + Sync + 'static>(&self) -> Arc<T> {
        self.get::<T>()
            .unwrap_or_else(|e| panic!("failed to resolve {}: {}", std::any::type_name::<T>(), e))
    }
}

impl<R: ResolverCore + ?Sized> Resolver for R {}
