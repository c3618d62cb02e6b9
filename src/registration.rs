//! Resolved entries and the resolved-entry table.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::FreshDependencies;
use crate::descriptors::Constructor;
use crate::error::DiResult;
use crate::key::Token;
use crate::scope::{FactoryKind, Resolution};

/// Type-erased instance handle
pub type AnyArc = Arc<dyn Any + Send + Sync>;

/// Zero-argument instance factory
pub(crate) type Factory = Arc<dyn Fn() -> DiResult<AnyArc> + Send + Sync>;

/// Invokes each factory in order, collecting constructor arguments.
pub(crate) fn invoke_all(factories: &[Factory]) -> DiResult<Vec<AnyArc>> {
    factories.iter().map(|factory| factory()).collect()
}

/// A resolved token: its factory plus how that factory behaves
pub(crate) struct ResolvedEntry {
    kind: FactoryKind,
    factory: Factory,
}

impl ResolvedEntry {
    /// Entry that always hands out `instance`.
    pub(crate) fn memoized(instance: AnyArc) -> Self {
        Self {
            kind: FactoryKind::Memoized,
            factory: Arc::new(move || -> DiResult<AnyArc> { Ok(instance.clone()) }),
        }
    }

    /// Entry that constructs a new instance per invocation.
    ///
    /// With [`FreshDependencies::PerCall`] the dependency factories are
    /// re-invoked every time; with [`FreshDependencies::Snapshot`] they are
    /// invoked once, here, and the same argument list feeds every later
    /// construction.
    pub(crate) fn fresh(
        constructor: Constructor,
        dependencies: Vec<Factory>,
        mode: FreshDependencies,
    ) -> DiResult<Self> {
        let factory: Factory = match mode {
            FreshDependencies::PerCall => Arc::new(move || {
                let args = invoke_all(&dependencies)?;
                constructor.construct(args)
            }),
            FreshDependencies::Snapshot => {
                let snapshot = invoke_all(&dependencies)?;
                Arc::new(move || constructor.construct(snapshot.clone()))
            }
        };
        Ok(Self {
            kind: FactoryKind::Fresh,
            factory,
        })
    }

    pub(crate) fn kind(&self) -> FactoryKind {
        self.kind
    }

    pub(crate) fn factory(&self) -> Factory {
        self.factory.clone()
    }

    pub(crate) fn invoke(&self) -> DiResult<AnyArc> {
        (self.factory)()
    }

    pub(crate) fn resolution(&self, token: Token) -> Resolution {
        Resolution::new(token, self.kind)
    }
}

/// Token to resolved-entry table; entries are only ever added
#[derive(Default)]
pub(crate) struct ResolvedTable {
    entries: HashMap<Token, ResolvedEntry>,
}

impl ResolvedTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub(crate) fn get(&self, token: &Token) -> Option<&ResolvedEntry> {
        self.entries.get(token)
    }

    #[inline(always)]
    pub(crate) fn contains(&self, token: &Token) -> bool {
        self.entries.contains_key(token)
    }

    /// Installs an entry; an existing entry for the same token is kept.
    pub(crate) fn insert(&mut self, token: Token, entry: ResolvedEntry) -> Resolution {
        self.entries.entry(token).or_insert(entry).resolution(token)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.entries.keys()
    }
}
