//! Token types for the injection registry.

use std::any::TypeId;
use std::fmt;

/// Registry key under which a provider's factory is stored.
///
/// A token either names a constructor directly (its `TypeId`) or is an
/// explicit string alias declared by an indirect provider. Tokens compare by
/// identity only: two `Type` tokens are equal iff their `TypeId`s are, the
/// diagnostic name is ignored.
///
/// # Examples
///
/// ```rust
/// use ferrous_inject::Token;
///
/// struct Database;
///
/// let by_type = Token::of::<Database>();
/// let alias = Token::named("primary_db");
///
/// assert_eq!(by_type, Token::of::<Database>());
/// assert_ne!(by_type, alias);
/// assert!(by_type.display_name().ends_with("Database"));
/// assert_eq!(alias.display_name(), "primary_db");
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Token {
    /// Constructor identity with the type name for diagnostics
    Type(TypeId, &'static str),
    /// Explicit string alias
    Named(&'static str),
}

impl Token {
    /// Token identifying the type `T` itself.
    #[inline(always)]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Token::Type(TypeId::of::<T>(), std::any::type_name::<T>())
    }

    /// Token for an explicit string alias.
    pub const fn named(name: &'static str) -> Self {
        Token::Named(name)
    }

    /// Human-readable name used in errors and logs.
    pub fn display_name(&self) -> &'static str {
        match self {
            Token::Type(_, name) => name,
            Token::Named(name) => name,
        }
    }

    /// The `TypeId` for constructor tokens, `None` for aliases.
    pub fn type_id(&self) -> Option<TypeId> {
        match self {
            Token::Type(id, _) => Some(*id),
            Token::Named(_) => None,
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Token::Named(_))
    }
}

// TypeId-only comparison for constructor tokens
impl PartialEq for Token {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Token::Type(a, _), Token::Type(b, _)) => a == b,
            (Token::Named(a), Token::Named(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Token {}

impl std::hash::Hash for Token {
    #[inline(always)]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            Token::Type(id, _) => {
                0u8.hash(state);
                id.hash(state);
            }
            Token::Named(name) => {
                1u8.hash(state);
                name.hash(state);
            }
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl From<&'static str> for Token {
    fn from(name: &'static str) -> Self {
        Token::Named(name)
    }
}

// Helper for creating type tokens
#[inline(always)]
pub fn token_of<T: ?Sized + 'static>() -> Token {
    Token::of::<T>()
}
