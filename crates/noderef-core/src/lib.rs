//! Global object identifier primitives for resolvable entities.
//!
//! A global id wraps a `(type name, raw id)` pair into a single opaque,
//! URL-safe token that a client can hand back later without understanding
//! its structure. Both the codec and the scope policy are pure functions:
//! no I/O, no shared state, same input always yields the same output.
//!
#![deny(missing_docs)]

/// Error taxonomy for encoding and decoding global ids.
pub mod error;
/// Scope selection between opaque global and transparent local ids.
pub mod scope;
/// Reversible codec between `(type name, raw id)` pairs and opaque tokens.
pub mod token;

pub use error::GlobalIdError;
pub use scope::{scoped_id, IdScope};
pub use token::GlobalId;
