//! Available-providers registry.

use std::collections::HashMap;

use crate::descriptors::{Constructor, Provider};
use crate::error::{DiError, DiResult};
use crate::key::Token;

/// Providers declared reachable so far. Grows monotonically.
#[derive(Default)]
pub(crate) struct ProviderRegistry {
    providers: HashMap<Token, Provider>,
    /// Declaration order for deterministic iteration
    order: Vec<Token>,
}

impl ProviderRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Declares a provider available.
    ///
    /// Returns `false` if the same token was already declared with the same
    /// constructor; a different constructor is a conflict.
    pub(crate) fn add(&mut self, provider: Provider) -> DiResult<bool> {
        let token = provider.token();
        if let Some(existing) = self.providers.get(&token) {
            if existing.constructor() == provider.constructor() {
                return Ok(false);
            }
            return Err(DiError::ConflictingProvider {
                token: token.display_name(),
                existing: existing.constructor().type_name(),
                requested: provider.constructor().type_name(),
            });
        }
        self.providers.insert(token, provider);
        self.order.push(token);
        Ok(true)
    }

    /// Declares every provider, stopping at the first conflict.
    pub(crate) fn add_all<I>(&mut self, providers: I) -> DiResult<usize>
    where
        I: IntoIterator<Item = Provider>,
    {
        let mut added = 0;
        for provider in providers {
            if self.add(provider)? {
                added += 1;
            }
        }
        Ok(added)
    }

    #[inline(always)]
    pub(crate) fn provider(&self, token: &Token) -> Option<&Provider> {
        self.providers.get(token)
    }

    /// Backing constructor for `token`, `None` if never declared.
    pub(crate) fn lookup(&self, token: &Token) -> Option<&Constructor> {
        self.provider(token).map(Provider::constructor)
    }

    #[inline(always)]
    pub(crate) fn contains(&self, token: &Token) -> bool {
        self.providers.contains_key(token)
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.order.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Arguments, Injectable};

    struct Console;
    impl Injectable for Console {
        fn construct(_: &mut Arguments) -> DiResult<Self> {
            Ok(Console)
        }
    }

    struct File;
    impl Injectable for File {
        fn construct(_: &mut Arguments) -> DiResult<Self> {
            Ok(File)
        }
    }

    #[test]
    fn redeclaring_same_provider_is_idempotent() {
        let mut registry = ProviderRegistry::new();
        assert!(registry.add(Provider::class::<Console>()).unwrap());
        assert!(!registry.add(Provider::class::<Console>()).unwrap());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn alias_resolves_to_backing_constructor() {
        let mut registry = ProviderRegistry::new();
        registry.add(Provider::alias::<File>("sink")).unwrap();

        let constructor = registry.lookup(&Token::named("sink")).unwrap();
        assert_eq!(constructor.token(), Token::of::<File>());
        assert!(registry.lookup(&Token::of::<File>()).is_none());
    }

    #[test]
    fn rebinding_alias_is_a_conflict() {
        let mut registry = ProviderRegistry::new();
        registry.add(Provider::alias::<Console>("sink")).unwrap();
        let err = registry.add(Provider::alias::<File>("sink")).unwrap_err();
        assert!(matches!(err, DiError::ConflictingProvider { token: "sink", .. }));
    }

    #[test]
    fn add_all_counts_new_tokens_in_order() {
        let mut registry = ProviderRegistry::new();
        let added = registry
            .add_all(vec![
                Provider::class::<Console>(),
                Provider::class::<File>(),
                Provider::class::<Console>(),
            ])
            .unwrap();
        assert_eq!(added, 2);
        let tokens: Vec<_> = registry.tokens().copied().collect();
        assert_eq!(tokens, vec![Token::of::<Console>(), Token::of::<File>()]);
    }
}
