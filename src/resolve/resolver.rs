use crate::{
    foundation::{
        core::Ordinal,
        error::{StrataError, StrataResult},
    },
    layers::{
        model::{LayerSetConfig, LayerSpec, ResolverOpts},
        normalize::{CanonicalLayer, normalize},
        validate::validate_layers,
    },
    resolve::{
        fingerprint::{LayerSetFingerprint, fingerprint_layers},
        key::QueryKey,
        output::{PartOrdinals, Resolved},
    },
};

/// Resolves layer keys into ordinals for one fixed layer set.
///
/// The layer set is validated and normalized once at construction; afterwards the resolver is
/// immutable and every query is a pure function of `(key, slot)`, so a single resolver can be
/// shared across threads.
#[derive(Clone, Debug)]
pub struct Resolver {
    layers: Vec<CanonicalLayer>,
    opts: ResolverOpts,
    fingerprint: LayerSetFingerprint,
}

/// One addressable unit of the resolved layer set.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ResolvedUnit {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part: Option<String>,
    /// Only set for layers that declare slots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<u32>,
    pub ordinal: Ordinal,
}

impl ResolvedUnit {
    /// The query key addressing this unit (`key` or `key.part`).
    pub fn query_key(&self) -> String {
        match &self.part {
            Some(part) => format!("{}.{part}", self.key),
            None => self.key.clone(),
        }
    }
}

impl Resolver {
    /// Validate and normalize `layers`, returning a resolver bound to them.
    #[tracing::instrument(skip(layers), fields(layers = tracing::field::Empty))]
    pub fn new<I, L>(layers: I, opts: ResolverOpts) -> StrataResult<Self>
    where
        I: IntoIterator<Item = L>,
        L: Into<LayerSpec>,
    {
        let specs: Vec<LayerSpec> = layers.into_iter().map(Into::into).collect();
        tracing::Span::current().record("layers", specs.len());
        Self::from_specs(&specs, opts)
    }

    pub fn from_config(config: &LayerSetConfig) -> StrataResult<Self> {
        Self::from_specs(&config.layers, config.opts)
    }

    fn from_specs(specs: &[LayerSpec], opts: ResolverOpts) -> StrataResult<Self> {
        validate_layers(specs, &opts)?;
        let layers = normalize(specs, &opts);
        let fingerprint = fingerprint_layers(&layers, opts.start);
        Ok(Self {
            layers,
            opts,
            fingerprint,
        })
    }

    /// Canonical layers in effective stacking order (lowest first).
    pub fn layers(&self) -> &[CanonicalLayer] {
        &self.layers
    }

    pub fn opts(&self) -> ResolverOpts {
        self.opts
    }

    pub fn start(&self) -> Ordinal {
        Ordinal(self.opts.start)
    }

    pub fn fingerprint(&self) -> LayerSetFingerprint {
        self.fingerprint
    }

    /// Total number of ordinal units the layer set consumes.
    pub fn total_units(&self) -> u64 {
        self.layers.iter().map(|l| u64::from(l.unit_count())).sum()
    }

    /// Resolve `key` (optionally `base.part`) at an optional `slot`.
    ///
    /// A bare key naming a layer with parts fans out into one ordinal per part.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn resolve(&self, key: &str, slot: Option<u32>) -> StrataResult<Resolved> {
        let query = self.parse_key(key);
        self.resolve_query(query, slot).inspect_err(|err| {
            tracing::debug!(key, ?slot, %err, "rejected layer query");
        })
    }

    /// Like [`Resolver::resolve`] but requires a single ordinal.
    pub fn ordinal(&self, key: &str, slot: Option<u32>) -> StrataResult<Ordinal> {
        match self.resolve(key, slot)? {
            Resolved::Single(ordinal) => Ok(ordinal),
            Resolved::Parts(_) => Err(StrataError::validation(format!(
                "layer '{key}' has parts; query '{key}.<part>' for a single ordinal"
            ))),
        }
    }

    /// Every key accepted by [`Resolver::resolve`], in stacking order.
    pub fn keys(&self) -> Vec<String> {
        let mut out = Vec::new();
        for layer in &self.layers {
            out.push(layer.key.clone());
            for part in layer.part_names() {
                out.push(format!("{}.{part}", layer.key));
            }
        }
        out
    }

    /// The full unit table in ordinal order.
    pub fn units(&self) -> Vec<ResolvedUnit> {
        let mut out = Vec::with_capacity(self.total_units() as usize);
        // u64 so the increment past the last unit cannot overflow.
        let mut ordinal = u64::from(self.opts.start);
        for layer in &self.layers {
            for slot in 0..layer.slot_count() {
                let slot = layer.slots.map(|_| slot);
                if layer.fans_out() {
                    for part in layer.part_names() {
                        out.push(ResolvedUnit {
                            key: layer.key.clone(),
                            part: Some(part.clone()),
                            slot,
                            ordinal: Ordinal(ordinal as u32),
                        });
                        ordinal += 1;
                    }
                } else {
                    out.push(ResolvedUnit {
                        key: layer.key.clone(),
                        part: None,
                        slot,
                        ordinal: Ordinal(ordinal as u32),
                    });
                    ordinal += 1;
                }
            }
        }
        out
    }

    // A full-key match wins over the last-dot split, so dotted layer keys resolve as-is.
    fn parse_key<'k>(&self, key: &'k str) -> QueryKey<'k> {
        if self.layers.iter().any(|l| l.key == key) {
            QueryKey::whole(key)
        } else {
            QueryKey::split(key)
        }
    }

    fn resolve_query(&self, query: QueryKey<'_>, slot: Option<u32>) -> StrataResult<Resolved> {
        // Units consumed by the layers below the match.
        let mut skipped: u64 = 0;
        for layer in &self.layers {
            if layer.key != query.base {
                skipped += u64::from(layer.unit_count());
                continue;
            }
            // Construction guarantees every ordinal fits in u32.
            let base = self.start().offset(skipped as u32)?;
            return resolve_in_layer(layer, base, query.part, slot);
        }
        Err(StrataError::unknown_layer(query.base))
    }
}

fn resolve_in_layer(
    layer: &CanonicalLayer,
    base: Ordinal,
    part: Option<&str>,
    slot: Option<u32>,
) -> StrataResult<Resolved> {
    let part_index = match part {
        Some(part) => Some(
            layer
                .part_index(part)
                .ok_or_else(|| StrataError::unknown_part(&layer.key, part))?,
        ),
        None => None,
    };

    let mut slot_base = base;
    if let Some(slot) = slot {
        let Some(slots) = layer.slots else {
            return Err(StrataError::SlotWithoutCapacity {
                layer: layer.key.clone(),
                slot,
            });
        };
        if slot >= slots {
            return Err(StrataError::SlotOutOfRange {
                layer: layer.key.clone(),
                slot,
                slots,
            });
        }
        slot_base = slot_base.offset(slot * layer.part_count())?;
    }

    if let Some(index) = part_index {
        return Ok(Resolved::Single(slot_base.offset(index)?));
    }
    if layer.fans_out() {
        let mut entries = Vec::with_capacity(layer.part_names().len());
        for (index, name) in layer.part_names().iter().enumerate() {
            entries.push((name.clone(), slot_base.offset(index as u32)?));
        }
        return Ok(Resolved::Parts(PartOrdinals::new(entries)));
    }
    Ok(Resolved::Single(slot_base))
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/resolver.rs"]
mod tests;
