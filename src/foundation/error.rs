/// Convenience result type used across Strata.
pub type StrataResult<T> = Result<T, StrataError>;

/// Top-level error taxonomy used by the resolver APIs.
#[derive(thiserror::Error, Debug)]
pub enum StrataError {
    /// The query's base key matches no configured layer.
    #[error("unknown layer '{key}'")]
    UnknownLayer {
        /// Base key that was looked up.
        key: String,
    },

    /// The query names a part the matched layer does not declare.
    #[error("unknown part '{part}' for layer '{layer}'")]
    UnknownPart {
        /// Matched layer key.
        layer: String,
        /// Requested part name.
        part: String,
    },

    /// A slot index was supplied for a layer that declares no `slots`.
    #[error("cannot use slot {slot} on layer '{layer}' without slots")]
    SlotWithoutCapacity {
        /// Matched layer key.
        layer: String,
        /// Requested slot index.
        slot: u32,
    },

    /// A slot index lies outside the layer's declared slot count.
    #[error("slot {slot} is out of range for layer '{layer}' ({slots} slots)")]
    SlotOutOfRange {
        /// Matched layer key.
        layer: String,
        /// Requested slot index.
        slot: u32,
        /// Declared slot count.
        slots: u32,
    },

    /// Invalid user-provided layer configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StrataError {
    /// Build a [`StrataError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StrataError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`StrataError::UnknownLayer`] value.
    pub fn unknown_layer(key: impl Into<String>) -> Self {
        Self::UnknownLayer { key: key.into() }
    }

    /// Build a [`StrataError::UnknownPart`] value.
    pub fn unknown_part(layer: impl Into<String>, part: impl Into<String>) -> Self {
        Self::UnknownPart {
            layer: layer.into(),
            part: part.into(),
        }
    }

    /// `true` for the query-time failures (unknown layer/part and slot misuse).
    pub fn is_query_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownLayer { .. }
                | Self::UnknownPart { .. }
                | Self::SlotWithoutCapacity { .. }
                | Self::SlotOutOfRange { .. }
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
