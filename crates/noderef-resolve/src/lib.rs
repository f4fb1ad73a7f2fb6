//! Resolver-side mapping tables for global ids.
//!
//! The codec in `noderef-core` is pure; this crate holds the explicit
//! configuration a resolver layer supplies around it:
//! - `NodeRegistry`: which fetch routine serves each entity type, so a
//!   decoded token can be dispatched to the right lookup.
//! - `IdField`: how each identifier-bearing field extracts its raw key and
//!   what name it is exposed under.
//!
//! Both are plain configuration values. There is no inheritance and no
//! reflection: every mapping is stated by the caller.
//!
#![deny(missing_docs)]

/// Per-field id extraction configuration.
pub mod field;
/// Type-name to fetch-routine registry.
pub mod registry;

pub use field::{local_field_name, IdField};
pub use registry::{NodeRegistry, ResolveError};
