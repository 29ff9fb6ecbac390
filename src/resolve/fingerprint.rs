use xxhash_rust::xxh3::Xxh3;

use crate::layers::normalize::CanonicalLayer;

const XXH3_SEED: u64 = 0x5a7e_11c4_93d0_b2e7;

/// Stable identity of a canonical layer set and its start offset.
///
/// Two resolvers with equal fingerprints answer every query identically, so the fingerprint is
/// a safe memoization key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerSetFingerprint {
    pub hi: u64,
    pub lo: u64,
}

pub(crate) fn fingerprint_layers(layers: &[CanonicalLayer], start: u32) -> LayerSetFingerprint {
    let mut h = StableHasher::new();
    h.write_u32(start);
    h.write_u64(layers.len() as u64);
    for layer in layers {
        h.write_str(&layer.key);
        match &layer.parts {
            Some(parts) => {
                h.write_bool(true);
                h.write_u64(parts.len() as u64);
                for part in parts {
                    h.write_str(part);
                }
            }
            None => h.write_bool(false),
        }
        match layer.slots {
            Some(slots) => {
                h.write_bool(true);
                h.write_u32(slots);
            }
            None => h.write_bool(false),
        }
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_bytes(&[u8::from(v)]);
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    // Length-prefixed so ("ab", "c") and ("a", "bc") differ.
    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> LayerSetFingerprint {
        let v = self.inner.digest128();
        LayerSetFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/fingerprint.rs"]
mod tests;
