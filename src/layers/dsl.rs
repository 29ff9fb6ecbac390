use crate::{
    foundation::error::StrataResult,
    layers::model::{LayerDecl, LayerSetConfig, LayerSpec, ResolverOpts},
};

/// Fluent builder for a [`LayerSetConfig`], lowest layer first.
///
/// ```
/// use strata::LayerSetBuilder;
///
/// let config = LayerSetBuilder::new()
///     .layer("modal")
///     .with_parts("alert", ["background", "content"])
///     .layer("toast")
///     .build()
///     .unwrap();
/// assert_eq!(config.layers.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct LayerSetBuilder {
    layers: Vec<LayerSpec>,
    opts: ResolverOpts,
}

impl LayerSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layer(mut self, name: impl Into<String>) -> Self {
        self.layers.push(LayerSpec::Name(name.into()));
        self
    }

    pub fn declare(mut self, decl: LayerDecl) -> Self {
        self.layers.push(LayerSpec::Declared(decl));
        self
    }

    pub fn with_parts<I, S>(self, key: impl Into<String>, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declare(LayerDecl::new(key).parts(parts))
    }

    pub fn with_slots(self, key: impl Into<String>, slots: u32) -> Self {
        self.declare(LayerDecl::new(key).slots(slots))
    }

    pub fn with_parts_and_slots<I, S>(self, key: impl Into<String>, parts: I, slots: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declare(LayerDecl::new(key).parts(parts).slots(slots))
    }

    pub fn start(mut self, start: u32) -> Self {
        self.opts.start = start;
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.opts.reverse = reverse;
        self
    }

    pub fn build(self) -> StrataResult<LayerSetConfig> {
        let config = LayerSetConfig::new(self.layers, self.opts);
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/dsl.rs"]
mod tests;
