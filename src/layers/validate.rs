use std::collections::HashSet;

use crate::{
    foundation::error::{StrataError, StrataResult},
    layers::model::{LayerSpec, ResolverOpts},
};

/// Construction-time checks for a layer list.
///
/// Query-time failures (unknown layer, unknown part, slot misuse) are reported by the resolver;
/// this pass rejects configurations that could never resolve consistently.
pub fn validate_layers(layers: &[LayerSpec], opts: &ResolverOpts) -> StrataResult<()> {
    if layers.is_empty() {
        return Err(StrataError::validation("layer set must declare at least one layer"));
    }

    let mut seen_keys = HashSet::with_capacity(layers.len());
    let mut total_units: u64 = 0;

    for layer in layers {
        let key = layer.key();
        if key.is_empty() {
            return Err(StrataError::validation("layer key must be non-empty"));
        }
        if !seen_keys.insert(key) {
            return Err(StrataError::validation(format!(
                "duplicate layer key '{key}'"
            )));
        }

        let mut units: u64 = 1;
        if let LayerSpec::Declared(decl) = layer {
            if let Some(parts) = &decl.parts {
                validate_parts(key, parts)?;
                units *= parts.len() as u64;
            }
            if let Some(slots) = decl.slots {
                if slots == 0 {
                    return Err(StrataError::validation(format!(
                        "layer '{key}' must declare slots > 0"
                    )));
                }
                units *= u64::from(slots);
            }
        }
        total_units += units;
    }

    // The last unit is start + total_units - 1.
    let last = u64::from(opts.start) + total_units.saturating_sub(1);
    if last > u64::from(u32::MAX) {
        return Err(StrataError::validation(format!(
            "layer set needs {total_units} ordinals from {}, which exceeds the ordinal range",
            opts.start
        )));
    }

    Ok(())
}

fn validate_parts(key: &str, parts: &[String]) -> StrataResult<()> {
    if parts.is_empty() {
        return Err(StrataError::validation(format!(
            "layer '{key}' declares an empty parts list"
        )));
    }

    let mut seen = HashSet::with_capacity(parts.len());
    for part in parts {
        if part.is_empty() {
            return Err(StrataError::validation(format!(
                "layer '{key}' declares an empty part name"
            )));
        }
        if part.contains('.') {
            return Err(StrataError::validation(format!(
                "part '{part}' of layer '{key}' must not contain '.'"
            )));
        }
        if !seen.insert(part.as_str()) {
            return Err(StrataError::validation(format!(
                "layer '{key}' declares part '{part}' more than once"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/layers/validate.rs"]
mod tests;
