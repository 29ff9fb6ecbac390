//! Strata assigns stable stacking-order values ("ordinals", conceptually z-indexes) to a
//! declared, ordered set of named layers.
//!
//! A layer set is declared once, lowest layer first. Each entry is either a bare name or a
//! structured declaration with named `parts` (sub-layers that each get their own ordinal) and
//! `slots` (repeated instances that each consume a fresh block of ordinals):
//!
//! ```
//! use strata::{LayerDecl, LayerSpec, Resolver, ResolverOpts};
//!
//! let resolver = Resolver::new(
//!     vec![
//!         LayerSpec::from("modal"),
//!         LayerDecl::new("alert").parts(["background", "content"]).slots(3).into(),
//!         LayerSpec::from("toast"),
//!     ],
//!     ResolverOpts::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(resolver.ordinal("modal", None).unwrap().get(), 1);
//! assert_eq!(resolver.ordinal("alert.content", Some(1)).unwrap().get(), 5);
//! assert_eq!(resolver.ordinal("toast", None).unwrap().get(), 8);
//! ```
//!
//! Ordinals are contiguous from `start` (default 1). Within a layer, units are slot-major: all
//! parts of slot 0, then all parts of slot 1. `reverse` flips the layer order and each layer's
//! part order, never the slot order.
//!
//! Resolution is pure and allocation-light; a [`Resolver`] can be shared across threads, and a
//! [`ResolveCache`] memoizes results by layer-set fingerprint, key and slot.
#![forbid(unsafe_code)]

mod foundation;
mod layers;
mod resolve;

pub use foundation::core::Ordinal;
pub use foundation::error::{StrataError, StrataResult};
pub use layers::dsl::LayerSetBuilder;
pub use layers::model::{LayerDecl, LayerSetConfig, LayerSpec, ResolverOpts};
pub use layers::normalize::{CanonicalLayer, normalize};
pub use layers::validate::validate_layers;
pub use resolve::cache::ResolveCache;
pub use resolve::fingerprint::LayerSetFingerprint;
pub use resolve::key::QueryKey;
pub use resolve::output::{PartOrdinals, PresentationHint, Resolved, StackHint};
pub use resolve::resolver::{ResolvedUnit, Resolver};
