//! Compile-time constructor metadata.

use std::sync::Arc;

use crate::error::{DiError, DiResult};
use crate::key::Token;
use crate::registration::AnyArc;
use crate::scope::Scope;

/// A type the injector knows how to construct.
///
/// `dependencies` lists the tokens to inject, in the order `construct` pulls
/// them from [`Arguments`]. `scope` is the optional scope annotation; it
/// defaults to [`Scope::Default`].
///
/// # Examples
///
/// ```rust
/// use ferrous_inject::{Arguments, DiResult, Injectable, Scope, Token};
/// use std::sync::Arc;
///
/// struct Config { url: String }
///
/// impl Injectable for Config {
///     fn scope() -> Scope { Scope::Global }
///     fn construct(_: &mut Arguments) -> DiResult<Self> {
///         Ok(Config { url: "postgres://localhost".to_string() })
///     }
/// }
///
/// struct Repository { config: Arc<Config> }
///
/// impl Injectable for Repository {
///     fn dependencies() -> Vec<Token> { vec![Token::of::<Config>()] }
///     fn construct(args: &mut Arguments) -> DiResult<Self> {
///         Ok(Repository { config: args.next()? })
///     }
/// }
/// ```
pub trait Injectable: Send + Sync + Sized + 'static {
    /// Ordered dependency tokens, positionally matching `construct`'s reads.
    fn dependencies() -> Vec<Token> {
        Vec::new()
    }

    /// Declared scope annotation.
    fn scope() -> Scope {
        Scope::Default
    }

    /// Builds an instance from the resolved dependencies.
    fn construct(args: &mut Arguments) -> DiResult<Self>;
}

/// Resolved dependency instances handed to a constructor, in declared order.
pub struct Arguments {
    constructor: Token,
    values: std::vec::IntoIter<AnyArc>,
    position: usize,
}

impl Arguments {
    pub(crate) fn new(constructor: Token, values: Vec<AnyArc>) -> Self {
        Self {
            constructor,
            values: values.into_iter(),
            position: 0,
        }
    }

    /// Takes the next argument and downcasts it to `T`.
    pub fn next<T: Send + Sync + 'static>(&mut self) -> DiResult<Arc<T>> {
        let value = self.next_any()?;
        value.downcast::<T>().map_err(|_| DiError::TypeMismatch {
            expected: std::any::type_name::<T>(),
            token: self.constructor.display_name(),
        })
    }

    /// Takes the next argument without downcasting.
    pub fn next_any(&mut self) -> DiResult<AnyArc> {
        let value = self.values.next().ok_or(DiError::MissingArgument {
            constructor: self.constructor.display_name(),
            position: self.position,
        })?;
        self.position += 1;
        Ok(value)
    }

    /// Number of arguments not yet taken.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    /// Token of the constructor being invoked.
    pub fn constructor(&self) -> Token {
        self.constructor
    }
}
