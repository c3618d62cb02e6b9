//! Provider resolution.

use tracing::{debug, trace, warn};

use super::Injector;
use crate::config::CaptivePolicy;
use crate::descriptors::Provider;
use crate::error::{DiError, DiResult};
use crate::key::Token;
use crate::metadata::MetadataProvider;
use crate::registration::{invoke_all, Factory, ResolvedEntry};
use crate::scope::{first_unshareable, Resolution};

impl<M: MetadataProvider> Injector<M> {
    /// Resolves every provider in declaration order.
    pub fn register_providers(&mut self, providers: &[Provider]) -> DiResult<()> {
        for provider in providers {
            self.resolve_provider(provider)?;
        }
        Ok(())
    }

    /// Resolves one provider into the resolved table.
    ///
    /// Dependencies without an entry are looked up in the available set and
    /// resolved first, so every entry is installed after all of its
    /// dependencies. Global providers are constructed here, once; all others
    /// get a fresh factory. A global provider with a non-shareable direct
    /// dependency is handled by the [`CaptivePolicy`], which by default
    /// demotes it to a fresh factory. A provider that is already resolved is
    /// a cache hit and nothing is constructed.
    ///
    /// The returned [`Resolution`] tells the caller whether the provider may
    /// be shared by its dependants.
    pub fn resolve_provider(&mut self, provider: &Provider) -> DiResult<Resolution> {
        let key = provider.token();
        if let Some(entry) = self.resolved.get(&key) {
            trace!(token = %key, "provider already resolved");
            return Ok(entry.resolution(key));
        }

        self.stack.enter(key)?;
        let result = self.resolve_uncached(provider);
        self.stack.exit(key);
        result
    }

    fn resolve_uncached(&mut self, provider: &Provider) -> DiResult<Resolution> {
        let key = provider.token();
        let constructor = provider.constructor().clone();
        let dependencies = self.metadata.dependencies_of(&constructor);

        let mut resolutions = Vec::with_capacity(dependencies.len());
        let mut factories = Vec::with_capacity(dependencies.len());
        for dependency in dependencies {
            let (resolution, factory) = self.resolve_dependency(key, dependency)?;
            resolutions.push(resolution);
            factories.push(factory);
        }

        let memoize = self.metadata.declared_scope(&constructor).is_global()
            && match first_unshareable(&resolutions) {
                Some(dependency) => self.check_captive(key, dependency)?,
                None => true,
            };

        let entry = if memoize {
            let instance = constructor.construct(invoke_all(&factories)?)?;
            ResolvedEntry::memoized(instance)
        } else {
            ResolvedEntry::fresh(constructor.clone(), factories, self.options.fresh_dependencies)?
        };

        debug!(
            token = %key,
            constructor = constructor.type_name(),
            kind = ?entry.kind(),
            "provider resolved"
        );
        Ok(self.resolved.insert(key, entry))
    }

    /// Ensures `dependency` has an entry, resolving it from the available
    /// set if needed, and returns its resolution and factory.
    fn resolve_dependency(
        &mut self,
        requester: Token,
        dependency: Token,
    ) -> DiResult<(Resolution, Factory)> {
        if !self.resolved.contains(&dependency) {
            let provider = self
                .available
                .provider(&dependency)
                .cloned()
                .ok_or(DiError::UnregisteredToken {
                    requester: requester.display_name(),
                    token: dependency.display_name(),
                })?;
            self.resolve_provider(&provider)?;
        }

        let entry = self
            .resolved
            .get(&dependency)
            .ok_or(DiError::UnknownToken(dependency.display_name()))?;
        Ok((entry.resolution(dependency), entry.factory()))
    }

    /// Decides whether a global provider with a non-shareable direct
    /// dependency stays global.
    fn check_captive(&self, provider: Token, dependency: Token) -> DiResult<bool> {
        match self.options.captive_policy {
            CaptivePolicy::Demote => {
                debug!(
                    provider = %provider,
                    dependency = %dependency,
                    "global provider demoted to fresh"
                );
                Ok(false)
            }
            CaptivePolicy::Allow => Ok(true),
            CaptivePolicy::Warn => {
                warn!(
                    provider = %provider,
                    dependency = %dependency,
                    "global provider captures a non-shareable dependency"
                );
                Ok(true)
            }
            CaptivePolicy::Deny => Err(DiError::CaptiveDependency {
                provider: provider.display_name(),
                dependency: dependency.display_name(),
            }),
        }
    }
}
