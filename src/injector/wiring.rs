//! Consumer wiring.

use tracing::{debug, trace};

use super::Injector;
use crate::descriptors::Constructor;
use crate::error::{DiError, DiResult};
use crate::metadata::MetadataProvider;
use crate::registration::{invoke_all, ResolvedEntry};
use crate::scope::Resolution;

impl<M: MetadataProvider> Injector<M> {
    /// Wires consumers in order, stopping at the first failure.
    ///
    /// Consumers wired before the failing one stay wired.
    pub fn resolve_consumers(&mut self, consumers: &[Constructor]) -> DiResult<()> {
        for consumer in consumers {
            self.resolve_consumer(consumer)?;
        }
        Ok(())
    }

    /// Wires one consumer against the resolved table.
    ///
    /// Unlike provider resolution there is no fallback to the available set:
    /// every dependency must already have an entry. The consumer is memoized
    /// only if all of its direct dependencies are shareable; its own declared
    /// scope is not consulted.
    pub fn resolve_consumer(&mut self, consumer: &Constructor) -> DiResult<Resolution> {
        let key = consumer.token();
        if let Some(entry) = self.resolved.get(&key) {
            trace!(token = %key, "consumer already wired");
            return Ok(entry.resolution(key));
        }

        let dependencies = self.metadata.dependencies_of(consumer);
        let mut shareable = true;
        let mut factories = Vec::with_capacity(dependencies.len());
        for dependency in &dependencies {
            let entry = self.resolved.get(dependency).ok_or(DiError::ConsumerDependencyMissing {
                consumer: key.display_name(),
                dependency: dependency.display_name(),
            })?;
            shareable &= entry.resolution(*dependency).is_shareable();
            factories.push(entry.factory());
        }

        let entry = if shareable {
            ResolvedEntry::memoized(consumer.construct(invoke_all(&factories)?)?)
        } else {
            ResolvedEntry::fresh(consumer.clone(), factories, self.options.fresh_dependencies)?
        };

        debug!(
            token = %key,
            dependencies = dependencies.len(),
            kind = ?entry.kind(),
            "consumer wired"
        );
        Ok(self.resolved.insert(key, entry))
    }
}
