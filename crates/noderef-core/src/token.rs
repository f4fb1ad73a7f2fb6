//! Reversible codec between `(type name, raw id)` pairs and opaque tokens.
//!
//! Wire format: base64url without padding over the UTF-8 bytes of the
//! plaintext record `"t:<typeName>:<rawId>"`. Tokens are opaque to every
//! consumer outside this module; nothing may parse one without going
//! through [`GlobalId::decode`].

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::GlobalIdError;

/// Marker literal tagging the plaintext record as a node global id,
/// distinguishing it from any other opaque-token scheme.
const MARKER: &str = "t";

/// Field delimiter inside the plaintext record.
const DELIMITER: char = ':';

/// A typed, locally-scoped identifier: entity type name plus raw key.
///
/// A `GlobalId` constructed through [`GlobalId::new`] always encodes
/// successfully; validation happens up front so [`GlobalId::encode`] is
/// infallible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlobalId {
    /// Logical name of the resolvable entity kind.
    pub type_name: String,
    /// Local, type-scoped key. May itself contain `:`.
    pub raw_id: String,
}

impl GlobalId {
    /// Constructs a validated pair.
    ///
    /// # Errors
    ///
    /// Returns [`GlobalIdError::InvalidTypeName`] when `type_name` is empty
    /// or contains the reserved `:` delimiter. The raw id is unrestricted.
    pub fn new(
        type_name: impl Into<String>,
        raw_id: impl Into<String>,
    ) -> Result<Self, GlobalIdError> {
        let type_name = type_name.into();
        validate_type_name(&type_name)?;
        Ok(GlobalId {
            type_name,
            raw_id: raw_id.into(),
        })
    }

    /// Encodes the pair as an opaque, URL-safe token.
    ///
    /// Deterministic: equal pairs always produce equal tokens, and distinct
    /// pairs never collide (the transform is a bijection over the record).
    pub fn encode(&self) -> String {
        let record = format!(
            "{MARKER}{DELIMITER}{}{DELIMITER}{}",
            self.type_name, self.raw_id
        );
        URL_SAFE_NO_PAD.encode(record.as_bytes())
    }

    /// Decodes a token back into the pair that produced it.
    ///
    /// The record is split on at most two delimiters; everything after the
    /// second `:` belongs to the raw id, so composite ids (ids that embed
    /// another id or a version component) survive unchanged. The marker
    /// field's value is not inspected.
    ///
    /// # Errors
    ///
    /// Returns [`GlobalIdError::DecodeFailure`] when `token` is not validly
    /// base64url-encoded UTF-8, and [`GlobalIdError::MalformedIdentifier`]
    /// when the decoded record does not carry three fields.
    pub fn decode(token: &str) -> Result<Self, GlobalIdError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|e| GlobalIdError::DecodeFailure {
                input: token.to_string(),
                reason: e.to_string(),
            })?;
        let record = String::from_utf8(bytes).map_err(|e| GlobalIdError::DecodeFailure {
            input: token.to_string(),
            reason: e.to_string(),
        })?;

        let mut fields = record.splitn(3, DELIMITER);
        match (fields.next(), fields.next(), fields.next()) {
            (Some(_marker), Some(type_name), Some(raw_id)) => Ok(GlobalId {
                type_name: type_name.to_string(),
                raw_id: raw_id.to_string(),
            }),
            _ => Err(GlobalIdError::MalformedIdentifier {
                input: token.to_string(),
            }),
        }
    }
}

fn validate_type_name(type_name: &str) -> Result<(), GlobalIdError> {
    if type_name.is_empty() || type_name.contains(DELIMITER) {
        return Err(GlobalIdError::InvalidTypeName {
            name: type_name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trip() {
        let id = GlobalId::new("Film", "42").unwrap();
        let token = id.encode();
        let restored = GlobalId::decode(&token).unwrap();
        assert_eq!(id, restored);
    }

    #[test]
    fn raw_id_keeps_embedded_delimiters() {
        let id = GlobalId::new("Planet", "abc:def").unwrap();
        let restored = GlobalId::decode(&id.encode()).unwrap();
        assert_eq!(restored.type_name, "Planet");
        assert_eq!(restored.raw_id, "abc:def");
    }

    #[test]
    fn rejects_empty_type_name() {
        let err = GlobalId::new("", "42").unwrap_err();
        assert!(matches!(err, GlobalIdError::InvalidTypeName { .. }));
    }

    #[test]
    fn rejects_type_name_with_delimiter() {
        let err = GlobalId::new("a:b", "42").unwrap_err();
        assert!(matches!(err, GlobalIdError::InvalidTypeName { name } if name == "a:b"));
    }

    #[test]
    fn rejects_record_with_too_few_fields() {
        let token = URL_SAFE_NO_PAD.encode(b"onlyOnePart");
        let err = GlobalId::decode(&token).unwrap_err();
        assert!(matches!(err, GlobalIdError::MalformedIdentifier { input } if input == token));
    }

    #[test]
    fn extra_fields_collapse_into_raw_id() {
        let token = URL_SAFE_NO_PAD.encode(b"a:b:c:d");
        let id = GlobalId::decode(&token).unwrap();
        assert_eq!(id.type_name, "b");
        assert_eq!(id.raw_id, "c:d");
    }

    #[test]
    fn rejects_non_encoded_input() {
        // '!' is outside the base64url alphabet.
        let err = GlobalId::decode("not-a-token!").unwrap_err();
        assert!(matches!(err, GlobalIdError::DecodeFailure { .. }));
    }

    #[test]
    fn rejects_non_utf8_record() {
        let token = URL_SAFE_NO_PAD.encode([0xff, 0xfe, 0xfd]);
        let err = GlobalId::decode(&token).unwrap_err();
        assert!(matches!(err, GlobalIdError::DecodeFailure { .. }));
    }

    #[test]
    fn tokens_are_deterministic_and_distinct() {
        let a = GlobalId::new("Film", "1").unwrap();
        let b = GlobalId::new("Film", "2").unwrap();
        assert_eq!(a.encode(), a.encode());
        assert_ne!(a.encode(), b.encode());
    }

    #[test]
    fn empty_raw_id_round_trips() {
        let id = GlobalId::new("Film", "").unwrap();
        let restored = GlobalId::decode(&id.encode()).unwrap();
        assert_eq!(restored.raw_id, "");
    }
}
