use crate::foundation::error::{StrataError, StrataResult};

/// Stacking-order value assigned to one resolved unit (conceptually a z-index).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Ordinal(pub u32);

impl Ordinal {
    /// Ordinal `units` steps above `self`.
    pub fn offset(self, units: u32) -> StrataResult<Self> {
        self.0.checked_add(units).map(Self).ok_or_else(|| {
            StrataError::validation(format!(
                "ordinal {} + {units} overflows the ordinal range",
                self.0
            ))
        })
    }

    /// Raw integer value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<Ordinal> for u32 {
    fn from(v: Ordinal) -> Self {
        v.0
    }
}

impl std::fmt::Display for Ordinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
