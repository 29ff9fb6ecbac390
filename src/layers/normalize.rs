use crate::layers::model::{LayerSpec, ResolverOpts};

/// Normalized layer: every input shape collapses into this record before resolution.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct CanonicalLayer {
    pub key: String,
    pub parts: Option<Vec<String>>,
    pub slots: Option<u32>,
}

impl CanonicalLayer {
    /// Number of declared parts, or 1 when the layer has none.
    pub fn part_count(&self) -> u32 {
        match &self.parts {
            Some(parts) if !parts.is_empty() => parts.len() as u32,
            _ => 1,
        }
    }

    /// Number of declared slots, or 1 when the layer has none.
    pub fn slot_count(&self) -> u32 {
        self.slots.unwrap_or(1).max(1)
    }

    /// Ordinal units the layer consumes.
    pub fn unit_count(&self) -> u32 {
        self.part_count().saturating_mul(self.slot_count())
    }

    /// Declared parts in effective order (empty when the layer has none).
    pub fn part_names(&self) -> &[String] {
        self.parts.as_deref().unwrap_or(&[])
    }

    /// Position of `part` within the effective part order.
    pub fn part_index(&self, part: &str) -> Option<u32> {
        self.part_names()
            .iter()
            .position(|p| p == part)
            .map(|i| i as u32)
    }

    /// `true` when an unqualified query fans out into one ordinal per part.
    ///
    /// Any declared parts list counts, so a single-part layer also resolves to a one-entry map.
    pub fn fans_out(&self) -> bool {
        !self.part_names().is_empty()
    }
}

/// Collapse a mixed layer list into canonical records in effective stacking order.
///
/// With `opts.reverse`, each layer's parts are reversed on the copy and then the whole sequence
/// is reversed. Slot counts are passed through untouched. The caller's list is never mutated.
pub fn normalize(layers: &[LayerSpec], opts: &ResolverOpts) -> Vec<CanonicalLayer> {
    let mut out: Vec<CanonicalLayer> = layers
        .iter()
        .map(|layer| match layer {
            LayerSpec::Name(name) => CanonicalLayer {
                key: name.clone(),
                parts: None,
                slots: None,
            },
            LayerSpec::Declared(decl) => {
                let mut parts = decl.parts.clone();
                if opts.reverse
                    && let Some(parts) = parts.as_mut()
                {
                    parts.reverse();
                }
                CanonicalLayer {
                    key: decl.key.clone(),
                    parts,
                    slots: decl.slots,
                }
            }
        })
        .collect();

    if opts.reverse {
        out.reverse();
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/layers/normalize.rs"]
mod tests;
