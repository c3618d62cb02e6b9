//! Module descriptions handed to [`Injector::bootstrap`](crate::Injector::bootstrap).
//!
//! A module is a flat list of providers plus a flat list of consumers. The
//! injector does not care how modules are grouped or nested; callers compose
//! several modules by bootstrapping them one after another.

use crate::descriptors::{Constructor, Provider};
use crate::traits::Injectable;

/// Providers and consumers declared together.
///
/// # Examples
///
/// ```rust
/// use ferrous_inject::{Arguments, DiResult, Injectable, ModuleDescriptor, Token};
///
/// struct Repo;
/// impl Injectable for Repo {
///     fn construct(_: &mut Arguments) -> DiResult<Self> { Ok(Repo) }
/// }
///
/// struct UsersHandler;
/// impl Injectable for UsersHandler {
///     fn dependencies() -> Vec<Token> { vec![Token::named("repo")] }
///     fn construct(_: &mut Arguments) -> DiResult<Self> { Ok(UsersHandler) }
/// }
///
/// let module = ModuleDescriptor::new("users")
///     .provide_as::<Repo>("repo")
///     .consume::<UsersHandler>();
///
/// assert_eq!(module.name(), "users");
/// assert_eq!(module.providers().len(), 1);
/// assert_eq!(module.consumers().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModuleDescriptor {
    name: &'static str,
    providers: Vec<Provider>,
    consumers: Vec<Constructor>,
}

impl ModuleDescriptor {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            providers: Vec::new(),
            consumers: Vec::new(),
        }
    }

    /// Adds `T` as a direct provider.
    pub fn provide<T: Injectable>(self) -> Self {
        self.provider(Provider::class::<T>())
    }

    /// Adds `T` as a provider for the string alias `name`.
    pub fn provide_as<T: Injectable>(self, name: &'static str) -> Self {
        self.provider(Provider::alias::<T>(name))
    }

    pub fn provider(mut self, provider: Provider) -> Self {
        self.providers.push(provider);
        self
    }

    /// Adds `T` as a top-level consumer.
    pub fn consume<T: Injectable>(self) -> Self {
        self.consumer(Constructor::of::<T>())
    }

    pub fn consumer(mut self, consumer: Constructor) -> Self {
        self.consumers.push(consumer);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn consumers(&self) -> &[Constructor] {
        &self.consumers
    }

    pub(crate) fn into_parts(self) -> (&'static str, Vec<Provider>, Vec<Constructor>) {
        (self.name, self.providers, self.consumers)
    }
}

/// A type that can describe itself as a module.
///
/// # Example
///
/// ```rust
/// use ferrous_inject::{Arguments, DiResult, Injectable, Injector, InjectorModule, ModuleDescriptor, Resolver, Scope};
///
/// struct Pool;
/// impl Injectable for Pool {
///     fn scope() -> Scope { Scope::Global }
///     fn construct(_: &mut Arguments) -> DiResult<Self> { Ok(Pool) }
/// }
///
/// struct DatabaseModule;
/// impl InjectorModule for DatabaseModule {
///     fn describe(self) -> ModuleDescriptor {
///         ModuleDescriptor::new("database").provide::<Pool>()
///     }
/// }
///
/// # fn main() -> DiResult<()> {
/// let mut injector = Injector::new();
/// injector.bootstrap(DatabaseModule)?;
/// assert!(injector.get::<Pool>().is_ok());
/// # Ok(())
/// # }
/// ```
pub trait InjectorModule {
    fn describe(self) -> ModuleDescriptor;
}

impl InjectorModule for ModuleDescriptor {
    fn describe(self) -> ModuleDescriptor {
        self
    }
}
