//! Scope selection between opaque global and transparent local ids.

use serde::{Deserialize, Serialize};

use crate::error::GlobalIdError;
use crate::token::GlobalId;

/// Whether an identifier is self-describing or interpreted by caller context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdScope {
    /// Opaque token wrapping the entity type; suitable for node lookup.
    /// The default whenever a caller does not choose otherwise.
    #[default]
    Global,
    /// Bare local key, only meaningful to the caller context that
    /// requested it.
    Local,
}

/// Produces the identifier string for an entity under the requested scope.
///
/// `Global` wraps the pair as an opaque token via the codec; `Local` returns
/// the raw id unchanged, with no character-encoding applied. Local ids are
/// never fed back through [`GlobalId::decode`] — decoding is defined only
/// for tokens produced with `Global` scope.
///
/// # Errors
///
/// Propagates [`GlobalIdError::InvalidTypeName`] from the `Global` arm;
/// the `Local` arm cannot fail.
pub fn scoped_id(type_name: &str, raw_id: &str, scope: IdScope) -> Result<String, GlobalIdError> {
    match scope {
        IdScope::Global => Ok(GlobalId::new(type_name, raw_id)?.encode()),
        IdScope::Local => Ok(raw_id.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_scope_wraps_into_a_token() {
        let token = scoped_id("Film", "42", IdScope::Global).unwrap();
        let id = GlobalId::decode(&token).unwrap();
        assert_eq!(id.type_name, "Film");
        assert_eq!(id.raw_id, "42");
    }

    #[test]
    fn local_scope_passes_the_raw_id_through() {
        assert_eq!(scoped_id("Film", "42", IdScope::Local).unwrap(), "42");
    }

    #[test]
    fn global_is_the_default_scope() {
        assert_eq!(IdScope::default(), IdScope::Global);
    }

    #[test]
    fn scope_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&IdScope::Global).unwrap(),
            r#""GLOBAL""#
        );
        assert_eq!(
            serde_json::to_string(&IdScope::Local).unwrap(),
            r#""LOCAL""#
        );
    }
}
