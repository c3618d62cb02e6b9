//! Metadata collaborators consulted during resolution.
//!
//! The resolver never inspects a type on its own. It asks a
//! [`MetadataProvider`] for the ordered dependency tokens and the declared
//! scope of each constructor, and trusts the answer.

use std::collections::HashMap;

use crate::descriptors::Constructor;
use crate::key::Token;
use crate::scope::Scope;

/// Source of constructor metadata.
pub trait MetadataProvider: Send + Sync {
    /// Ordered dependency tokens, positionally matching the constructor.
    fn dependencies_of(&self, constructor: &Constructor) -> Vec<Token>;

    /// Declared scope marker.
    fn declared_scope(&self, constructor: &Constructor) -> Scope;
}

/// Reads metadata from each type's [`Injectable`](crate::Injectable) impl.
#[derive(Debug, Default, Clone, Copy)]
pub struct InjectableMetadata;

impl MetadataProvider for InjectableMetadata {
    fn dependencies_of(&self, constructor: &Constructor) -> Vec<Token> {
        constructor.declared_dependencies()
    }

    fn declared_scope(&self, constructor: &Constructor) -> Scope {
        constructor.declared_scope()
    }
}

/// Forces the scope of selected constructors, delegating everything else.
///
/// Overrides are keyed by the constructor's own token, so an aliased
/// provider picks up the override of the class it uses.
///
/// # Examples
///
/// ```rust
/// use ferrous_inject::{
///     Arguments, Constructor, DiResult, Injectable, InjectableMetadata, MetadataProvider, Scope,
///     ScopeOverrides,
/// };
///
/// struct Cache;
/// impl Injectable for Cache {
///     fn construct(_: &mut Arguments) -> DiResult<Self> { Ok(Cache) }
/// }
///
/// let metadata = ScopeOverrides::new(InjectableMetadata).with::<Cache>(Scope::Global);
/// assert_eq!(metadata.declared_scope(&Constructor::of::<Cache>()), Scope::Global);
/// ```
#[derive(Debug, Clone)]
pub struct ScopeOverrides<M = InjectableMetadata> {
    inner: M,
    scopes: HashMap<Token, Scope>,
}

impl<M: MetadataProvider> ScopeOverrides<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            scopes: HashMap::new(),
        }
    }

    /// Overrides the scope of type `T`.
    pub fn with<T: ?Sized + 'static>(self, scope: Scope) -> Self {
        self.with_token(Token::of::<T>(), scope)
    }

    pub fn with_token(mut self, token: Token, scope: Scope) -> Self {
        self.scopes.insert(token, scope);
        self
    }
}

impl<M: MetadataProvider> MetadataProvider for ScopeOverrides<M> {
    fn dependencies_of(&self, constructor: &Constructor) -> Vec<Token> {
        self.inner.dependencies_of(constructor)
    }

    fn declared_scope(&self, constructor: &Constructor) -> Scope {
        self.scopes
            .get(&constructor.token())
            .copied()
            .unwrap_or_else(|| self.inner.declared_scope(constructor))
    }
}

impl<M: MetadataProvider + ?Sized> MetadataProvider for Box<M> {
    fn dependencies_of(&self, constructor: &Constructor) -> Vec<Token> {
        (**self).dependencies_of(constructor)
    }

    fn declared_scope(&self, constructor: &Constructor) -> Scope {
        (**self).declared_scope(constructor)
    }
}
