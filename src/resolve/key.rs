/// A query key split into its layer-identifying base and an optional part.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryKey<'a> {
    pub base: &'a str,
    pub part: Option<&'a str>,
}

impl<'a> QueryKey<'a> {
    /// The whole string as a layer key, with no part.
    pub fn whole(key: &'a str) -> Self {
        Self {
            base: key,
            part: None,
        }
    }

    /// Split a compound `base.part` key at the *last* dot.
    ///
    /// `"alert.test.background"` yields base `"alert.test"` and part `"background"`. A key
    /// without a dot is returned whole.
    pub fn split(key: &'a str) -> Self {
        match key.rsplit_once('.') {
            Some((base, part)) => Self {
                base,
                part: Some(part),
            },
            None => Self::whole(key),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/key.rs"]
mod tests;
