use std::collections::HashMap;

use parking_lot::RwLock;

use crate::{
    foundation::error::StrataResult,
    resolve::{fingerprint::LayerSetFingerprint, output::Resolved, resolver::Resolver},
};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct CacheKey {
    layer_set: LayerSetFingerprint,
    key: String,
    slot: Option<u32>,
}

/// Memoized query results keyed by `(layer set fingerprint, key, slot)`.
///
/// Resolution is pure, so entries never go stale; one cache may serve several resolvers.
/// Failed queries are not stored.
#[derive(Debug, Default)]
pub struct ResolveCache {
    entries: RwLock<HashMap<CacheKey, Resolved>>,
}

impl ResolveCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_resolve(
        &self,
        resolver: &Resolver,
        key: &str,
        slot: Option<u32>,
    ) -> StrataResult<Resolved> {
        let cache_key = CacheKey {
            layer_set: resolver.fingerprint(),
            key: key.to_string(),
            slot,
        };

        if let Some(hit) = self.entries.read().get(&cache_key) {
            tracing::trace!(key, ?slot, "layer query cache hit");
            return Ok(hit.clone());
        }

        let resolved = resolver.resolve(key, slot)?;
        self.entries.write().insert(cache_key, resolved.clone());
        Ok(resolved)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/cache.rs"]
mod tests;
