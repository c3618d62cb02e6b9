//! The injector: registry population, provider resolution and consumer wiring.
//!
//! Bootstrap runs three phases in order. Every declared provider is added to
//! the available set, every declared provider is resolved (pulling in
//! undeclared-but-available dependencies on demand), then every consumer is
//! wired against the resolved table. The first error aborts the bootstrap.

use std::fmt;

use tracing::debug;

use crate::config::InjectorOptions;
use crate::descriptors::{Constructor, Provider};
use crate::error::{DiError, DiResult};
use crate::internal::ResolutionStack;
use crate::key::Token;
use crate::metadata::{InjectableMetadata, MetadataProvider};
use crate::module::InjectorModule;
use crate::registration::{AnyArc, ResolvedTable};
use crate::registry::ProviderRegistry;
use crate::scope::FactoryKind;
use crate::traits::ResolverCore;

mod resolver;
mod wiring;

/// Owns the available-providers set and the resolved-entry table.
///
/// Bootstrapping needs `&mut self`; once it is done the injector is only read,
/// and lookups through [`Resolver`](crate::Resolver) take `&self`. Construct
/// one injector per application (or per test) rather than sharing one.
///
/// # Examples
///
/// ```
/// use ferrous_inject::{Arguments, DiResult, Injectable, Injector, ModuleDescriptor, Resolver, Scope, Token};
/// use std::sync::Arc;
///
/// struct Logger;
/// impl Injectable for Logger {
///     fn scope() -> Scope { Scope::Global }
///     fn construct(_: &mut Arguments) -> DiResult<Self> { Ok(Logger) }
/// }
///
/// struct Service { logger: Arc<Logger> }
/// impl Injectable for Service {
///     fn dependencies() -> Vec<Token> { vec![Token::of::<Logger>()] }
///     fn construct(args: &mut Arguments) -> DiResult<Self> {
///         Ok(Service { logger: args.next()? })
///     }
/// }
///
/// struct Handler { service: Arc<Service> }
/// impl Injectable for Handler {
///     fn dependencies() -> Vec<Token> { vec![Token::of::<Service>()] }
///     fn construct(args: &mut Arguments) -> DiResult<Self> {
///         Ok(Handler { service: args.next()? })
///     }
/// }
///
/// let mut injector = Injector::new();
/// injector.bootstrap(
///     ModuleDescriptor::new("app")
///         .provide::<Logger>()
///         .provide::<Service>()
///         .consume::<Handler>(),
/// ).unwrap();
///
/// // Service is per-use, so Handler is too; Logger stays shared.
/// let a = injector.get_required::<Handler>();
/// let b = injector.get_required::<Handler>();
/// assert!(!Arc::ptr_eq(&a, &b));
/// assert!(Arc::ptr_eq(&a.service.logger, &b.service.logger));
/// ```
pub struct Injector<M = InjectableMetadata> {
    metadata: M,
    options: InjectorOptions,
    available: ProviderRegistry,
    resolved: ResolvedTable,
    stack: ResolutionStack,
}

impl Injector {
    /// Creates an injector reading metadata from `Injectable` impls.
    pub fn new() -> Self {
        Self::with_options(InjectorOptions::default())
    }

    pub fn with_options(options: InjectorOptions) -> Self {
        Injector::from_parts(InjectableMetadata, options)
    }
}

impl Default for Injector {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MetadataProvider> Injector<M> {
    /// Creates an injector backed by a custom metadata provider.
    pub fn with_metadata(metadata: M) -> Self {
        Self::from_parts(metadata, InjectorOptions::default())
    }

    pub fn from_parts(metadata: M, options: InjectorOptions) -> Self {
        Self {
            stack: ResolutionStack::new(&options),
            metadata,
            options,
            available: ProviderRegistry::new(),
            resolved: ResolvedTable::new(),
        }
    }

    pub fn options(&self) -> &InjectorOptions {
        &self.options
    }

    pub fn metadata(&self) -> &M {
        &self.metadata
    }

    /// Bootstraps one module: declares its providers, resolves them, then
    /// wires its consumers.
    ///
    /// May be called repeatedly; providers declared by earlier modules stay
    /// available and resolved entries are never replaced.
    pub fn bootstrap<T: InjectorModule>(&mut self, module: T) -> DiResult<()> {
        let (name, providers, consumers) = module.describe().into_parts();
        debug!(
            module = name,
            providers = providers.len(),
            consumers = consumers.len(),
            "bootstrapping module"
        );

        self.add_available_providers(providers.iter().cloned())?;
        self.register_providers(&providers)?;
        self.resolve_consumers(&consumers)?;

        debug!(module = name, resolved = self.resolved.len(), "module bootstrapped");
        Ok(())
    }

    /// Declares providers reachable for on-demand resolution.
    ///
    /// Additive and safe to call repeatedly. Returns how many tokens were new.
    pub fn add_available_providers<I>(&mut self, providers: I) -> DiResult<usize>
    where
        I: IntoIterator<Item = Provider>,
    {
        let added = self.available.add_all(providers)?;
        debug!(added, available = self.available.len(), "providers declared available");
        Ok(added)
    }

    /// Backing constructor of a declared token.
    pub fn lookup(&self, token: &Token) -> Option<&Constructor> {
        self.available.lookup(token)
    }

    pub fn is_available(&self, token: &Token) -> bool {
        self.available.contains(token)
    }

    pub fn is_resolved(&self, token: &Token) -> bool {
        self.resolved.contains(token)
    }

    /// Whether `token`'s entry is memoized or fresh, if it was resolved.
    pub fn entry_kind(&self, token: &Token) -> Option<FactoryKind> {
        self.resolved.get(token).map(|entry| entry.kind())
    }

    pub fn resolved_count(&self) -> usize {
        self.resolved.len()
    }

    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    /// Tokens with a resolved entry, in no particular order.
    pub fn resolved_tokens(&self) -> impl Iterator<Item = &Token> {
        self.resolved.tokens()
    }

    /// Declared tokens in declaration order.
    pub fn available_tokens(&self) -> impl Iterator<Item = &Token> {
        self.available.tokens()
    }
}

impl<M: MetadataProvider> ResolverCore for Injector<M> {
    fn resolve_token(&self, token: &Token) -> DiResult<AnyArc> {
        let entry = self
            .resolved
            .get(token)
            .ok_or(DiError::UnknownToken(token.display_name()))?;
        entry.invoke()
    }
}

impl<M> fmt::Debug for Injector<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Injector")
            .field("options", &self.options)
            .field("available", &self.available.len())
            .field("resolved", &self.resolved.len())
            .field("resolving", &self.stack.depth())
            .finish()
    }
}
