//! Constructor and provider declarations.

use std::fmt;
use std::sync::Arc;

use crate::error::DiResult;
use crate::key::Token;
use crate::registration::AnyArc;
use crate::scope::Scope;
use crate::traits::{Arguments, Injectable};

type ConstructFn = Arc<dyn Fn(Vec<AnyArc>) -> DiResult<AnyArc> + Send + Sync>;

/// Type-erased constructor identity.
///
/// Captures how to build one concrete type together with the metadata its
/// [`Injectable`] impl declares. The injector never reads that metadata
/// directly; it asks its [`MetadataProvider`](crate::MetadataProvider), whose
/// default implementation forwards here.
#[derive(Clone)]
pub struct Constructor {
    token: Token,
    construct: ConstructFn,
    dependencies: fn() -> Vec<Token>,
    scope: fn() -> Scope,
}

impl Constructor {
    /// Constructor identity for the injectable type `T`.
    pub fn of<T: Injectable>() -> Self {
        let token = Token::of::<T>();
        let construct = move |values: Vec<AnyArc>| -> DiResult<AnyArc> {
            let mut args = Arguments::new(token, values);
            let instance = T::construct(&mut args)?;
            Ok(Arc::new(instance))
        };
        Self {
            token,
            construct: Arc::new(construct),
            dependencies: T::dependencies,
            scope: T::scope,
        }
    }

    /// The constructor's own token (its type identity).
    pub fn token(&self) -> Token {
        self.token
    }

    pub fn type_name(&self) -> &'static str {
        self.token.display_name()
    }

    /// Dependencies as declared by the type's `Injectable` impl.
    pub fn declared_dependencies(&self) -> Vec<Token> {
        (self.dependencies)()
    }

    /// Scope as declared by the type's `Injectable` impl.
    pub fn declared_scope(&self) -> Scope {
        (self.scope)()
    }

    pub(crate) fn construct(&self, args: Vec<AnyArc>) -> DiResult<AnyArc> {
        (self.construct)(args)
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Constructor").field(&self.type_name()).finish()
    }
}

impl PartialEq for Constructor {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for Constructor {}

/// A provider declaration.
///
/// A *direct* provider registers a type under its own token. An *indirect*
/// provider registers a type under a different token, typically a string
/// alias ("use this class when this token is requested").
///
/// # Examples
///
/// ```rust
/// use ferrous_inject::{Arguments, DiResult, Injectable, Provider, Token};
///
/// struct SmtpMailer;
/// impl Injectable for SmtpMailer {
///     fn construct(_: &mut Arguments) -> DiResult<Self> { Ok(SmtpMailer) }
/// }
///
/// let direct = Provider::class::<SmtpMailer>();
/// assert_eq!(direct.token(), Token::of::<SmtpMailer>());
///
/// let aliased = Provider::alias::<SmtpMailer>("mailer");
/// assert_eq!(aliased.token(), Token::named("mailer"));
/// assert_eq!(aliased.constructor().token(), Token::of::<SmtpMailer>());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provider {
    /// Token and constructor share one identity
    Direct(Constructor),
    /// Explicit token backed by a different constructor
    Indirect { token: Token, use_class: Constructor },
}

impl Provider {
    pub fn class<T: Injectable>() -> Self {
        Provider::Direct(Constructor::of::<T>())
    }

    /// Registers `T` under a string alias.
    pub fn alias<T: Injectable>(name: &'static str) -> Self {
        Provider::indirect(Token::named(name), Constructor::of::<T>())
    }

    /// Registers `use_class` under an arbitrary token.
    pub fn indirect(token: Token, use_class: Constructor) -> Self {
        Provider::Indirect { token, use_class }
    }

    /// The key the provider is registered under.
    pub fn token(&self) -> Token {
        match self {
            Provider::Direct(constructor) => constructor.token(),
            Provider::Indirect { token, .. } => *token,
        }
    }

    /// The constructor instantiated for this provider.
    pub fn constructor(&self) -> &Constructor {
        match self {
            Provider::Direct(constructor) => constructor,
            Provider::Indirect { use_class, .. } => use_class,
        }
    }

    pub fn is_indirect(&self) -> bool {
        matches!(self, Provider::Indirect { .. })
    }
}

impl From<Constructor> for Provider {
    fn from(constructor: Constructor) -> Self {
        Provider::Direct(constructor)
    }
}
