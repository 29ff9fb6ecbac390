use std::io::Read;

use crate::foundation::error::{StrataError, StrataResult};

/// One entry of a layer list: either a bare name or a structured declaration.
///
/// In JSON both shapes are accepted side by side:
///
/// ```json
/// ["modal", { "key": "alert", "parts": ["background", "content"], "slots": 3 }]
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum LayerSpec {
    /// A plain layer name, equivalent to `{ "key": name }`.
    Name(String),
    /// A structured declaration with optional parts and slots.
    Declared(LayerDecl),
}

impl LayerSpec {
    /// Layer key regardless of the declaration shape.
    pub fn key(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Declared(decl) => &decl.key,
        }
    }
}

impl From<&str> for LayerSpec {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for LayerSpec {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<LayerDecl> for LayerSpec {
    fn from(decl: LayerDecl) -> Self {
        Self::Declared(decl)
    }
}

/// Structured layer declaration.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LayerDecl {
    pub key: String,
    /// Named sub-layers, in stacking order (lowest first).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<String>>,
    /// Number of repeated instances of the layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<u32>,
}

impl LayerDecl {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            parts: None,
            slots: None,
        }
    }

    pub fn parts<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parts = Some(parts.into_iter().map(Into::into).collect());
        self
    }

    pub fn slots(mut self, slots: u32) -> Self {
        self.slots = Some(slots);
        self
    }
}

/// Global options shared by every layer of a set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResolverOpts {
    /// Ordinal of the first unit.
    #[serde(default = "default_start")]
    pub start: u32,
    /// Invert the layer order and each layer's part order. Slots are never reversed.
    #[serde(default)]
    pub reverse: bool,
}

fn default_start() -> u32 {
    1
}

impl Default for ResolverOpts {
    fn default() -> Self {
        Self {
            start: default_start(),
            reverse: false,
        }
    }
}

/// A full layer set document: the ordered layers plus global options.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LayerSetConfig {
    pub layers: Vec<LayerSpec>,
    #[serde(flatten)]
    pub opts: ResolverOpts,
}

impl LayerSetConfig {
    pub fn new(layers: Vec<LayerSpec>, opts: ResolverOpts) -> Self {
        Self { layers, opts }
    }

    pub fn from_json_str(s: &str) -> StrataResult<Self> {
        serde_json::from_str(s).map_err(|e| StrataError::serde(e.to_string()))
    }

    pub fn from_reader<R: Read>(r: R) -> StrataResult<Self> {
        serde_json::from_reader(r).map_err(|e| StrataError::serde(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> StrataResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| StrataError::serde(e.to_string()))
    }

    pub fn validate(&self) -> StrataResult<()> {
        crate::layers::validate::validate_layers(&self.layers, &self.opts)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/model.rs"]
mod tests;
