//! Type-name to fetch-routine registry.

use std::collections::HashMap;

use noderef_core::{GlobalId, GlobalIdError};
use thiserror::Error;

/// Errors surfaced while resolving a global token to an entity.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The token could not be decoded by the codec.
    #[error(transparent)]
    Id(#[from] GlobalIdError),
    /// The decoded type name has no registered fetch routine.
    #[error("no fetch routine registered for type '{type_name}'")]
    UnknownType {
        /// Decoded type name.
        type_name: String,
    },
    /// The fetch routine found no entity for the decoded key.
    #[error("no '{type_name}' entity with id '{raw_id}'")]
    NotFound {
        /// Decoded type name.
        type_name: String,
        /// Decoded raw id.
        raw_id: String,
    },
    /// A fetch routine is already registered under this type name.
    #[error("type '{type_name}' is already registered")]
    DuplicateType {
        /// Conflicting type name.
        type_name: String,
    },
}

/// Fetch routine: raw id in, entity out, `None` when absent.
type FetchFn<T> = Box<dyn Fn(&str) -> Option<T> + Send + Sync>;

/// Explicit mapping from entity type names to fetch routines.
///
/// Built once at startup, then read-only: resolution takes `&self` and every
/// call is independent, so the registry can be shared across callers without
/// coordination. A failure in one resolution never affects another.
pub struct NodeRegistry<T> {
    fetchers: HashMap<String, FetchFn<T>>,
}

impl<T> NodeRegistry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        NodeRegistry {
            fetchers: HashMap::new(),
        }
    }

    /// Registers the fetch routine for `type_name`.
    ///
    /// The type name obeys the same rules as encoding, so registration
    /// fails early instead of at the first field resolution.
    ///
    /// # Errors
    ///
    /// [`ResolveError::Id`] for an invalid type name,
    /// [`ResolveError::DuplicateType`] when the name is already taken.
    pub fn register(
        &mut self,
        type_name: impl Into<String>,
        fetch: impl Fn(&str) -> Option<T> + Send + Sync + 'static,
    ) -> Result<(), ResolveError> {
        let type_name = type_name.into();
        GlobalId::new(type_name.as_str(), "")?;
        if self.fetchers.contains_key(&type_name) {
            return Err(ResolveError::DuplicateType { type_name });
        }
        self.fetchers.insert(type_name, Box::new(fetch));
        Ok(())
    }

    /// Decodes `token` and dispatches to the fetch routine registered for
    /// the decoded type name, using the decoded raw id as the fetch key.
    ///
    /// # Errors
    ///
    /// [`ResolveError::Id`] when the token does not decode,
    /// [`ResolveError::UnknownType`] when no routine matches the type,
    /// [`ResolveError::NotFound`] when the routine returns nothing.
    pub fn resolve(&self, token: &str) -> Result<T, ResolveError> {
        let id = GlobalId::decode(token)?;
        let fetch = self
            .fetchers
            .get(&id.type_name)
            .ok_or_else(|| ResolveError::UnknownType {
                type_name: id.type_name.clone(),
            })?;
        fetch(&id.raw_id).ok_or(ResolveError::NotFound {
            type_name: id.type_name,
            raw_id: id.raw_id,
        })
    }

    /// Type names with a registered fetch routine.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.fetchers.keys().map(String::as_str)
    }
}

impl<T> Default for NodeRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
