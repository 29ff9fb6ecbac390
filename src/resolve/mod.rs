pub(crate) mod cache;
pub(crate) mod fingerprint;
pub(crate) mod key;
pub(crate) mod output;
pub(crate) mod resolver;
