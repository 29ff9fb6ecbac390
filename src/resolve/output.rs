use serde::ser::{SerializeMap, SerializeStruct};

use crate::foundation::core::Ordinal;

/// Ordinals of every part of one layer (and slot), in effective part order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartOrdinals {
    entries: Vec<(String, Ordinal)>,
}

impl PartOrdinals {
    pub(crate) fn new(entries: Vec<(String, Ordinal)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, part: &str) -> Option<Ordinal> {
        self.entries
            .iter()
            .find(|(name, _)| name == part)
            .map(|(_, ordinal)| *ordinal)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Ordinal)> {
        self.entries.iter().map(|(name, ordinal)| (name.as_str(), *ordinal))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl serde::Serialize for PartOrdinals {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, ordinal) in &self.entries {
            map.serialize_entry(name, ordinal)?;
        }
        map.end()
    }
}

/// Result of a resolver query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved {
    /// A single-part layer, or a compound key naming one part.
    Single(Ordinal),
    /// A multi-part layer queried without naming a part.
    Parts(PartOrdinals),
}

impl Resolved {
    /// The single ordinal, if this is not a fan-out result.
    pub fn as_single(&self) -> Option<Ordinal> {
        match self {
            Self::Single(ordinal) => Some(*ordinal),
            Self::Parts(_) => None,
        }
    }

    pub fn as_parts(&self) -> Option<&PartOrdinals> {
        match self {
            Self::Single(_) => None,
            Self::Parts(parts) => Some(parts),
        }
    }

    /// Stacking-only rendering hint mirroring the ordinal shape.
    pub fn presentation_hint(&self) -> PresentationHint {
        match self {
            Self::Single(ordinal) => PresentationHint::Single(StackHint { ordinal: *ordinal }),
            Self::Parts(parts) => PresentationHint::Parts(
                parts
                    .iter()
                    .map(|(name, ordinal)| (name.to_string(), StackHint { ordinal }))
                    .collect(),
            ),
        }
    }
}

/// Serializes as `{ "ordinal": ..., "presentationHint": ... }`.
impl serde::Serialize for Resolved {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Resolved", 2)?;
        match self {
            Self::Single(ordinal) => s.serialize_field("ordinal", ordinal)?,
            Self::Parts(parts) => s.serialize_field("ordinal", parts)?,
        }
        s.serialize_field("presentationHint", &self.presentation_hint())?;
        s.end()
    }
}

/// Style fragment carrying nothing but the stacking order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct StackHint {
    pub ordinal: Ordinal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PresentationHint {
    Single(StackHint),
    Parts(Vec<(String, StackHint)>),
}

impl serde::Serialize for PresentationHint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Single(z) => serde::Serialize::serialize(z, serializer),
            Self::Parts(parts) => {
                let mut map = serializer.serialize_map(Some(parts.len()))?;
                for (name, z) in parts {
                    map.serialize_entry(name, z)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/output.rs"]
mod tests;
