use thiserror::Error;

/// Errors produced while encoding or decoding global ids.
///
/// The three kinds are distinguishable by matching: callers need to tell
/// "not a token at all" (`DecodeFailure`) apart from "token whose inner
/// record is wrong" (`MalformedIdentifier`). The codec never recovers from
/// any of these internally and never returns a partial result.
#[derive(Error, Debug)]
pub enum GlobalIdError {
    /// Encode was requested with an empty type name or one containing the
    /// reserved field delimiter; rejected before any encoding work begins.
    #[error("invalid type name '{name}': must be non-empty and must not contain ':'")]
    InvalidTypeName {
        /// Offending type name.
        name: String,
    },
    /// The character-encoding transform succeeded but the plaintext record
    /// does not split into marker, type, and id fields.
    #[error("string id value ('{input}') is not a valid global id")]
    MalformedIdentifier {
        /// Offending token, verbatim.
        input: String,
    },
    /// The character-encoding transform rejected the input as not validly
    /// encoded (bad alphabet or padding, or bytes that are not UTF-8).
    #[error("global id ('{input}') could not be decoded: {reason}")]
    DecodeFailure {
        /// Offending token, verbatim.
        input: String,
        /// Reason reported by the transform.
        reason: String,
    },
}
