//! Per-field id extraction configuration.

use noderef_core::{scoped_id, GlobalId, GlobalIdError, IdScope};

/// Extractor producing a field's raw id from its source entity.
type ExtractFn<T> = Box<dyn Fn(&T) -> String + Send + Sync>;

/// Explicit configuration for one identifier-bearing field.
///
/// The resolver layer states the owning type name, the name the field is
/// exposed under, and how to pull the raw key out of a source value. Field
/// naming is never derived from the source type's structure.
pub struct IdField<T> {
    type_name: String,
    name: String,
    extract: ExtractFn<T>,
}

impl<T> IdField<T> {
    /// Creates a field configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GlobalIdError::InvalidTypeName`] for a type name that could
    /// never encode.
    pub fn new(
        type_name: impl Into<String>,
        name: impl Into<String>,
        extract: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Result<Self, GlobalIdError> {
        let type_name = type_name.into();
        GlobalId::new(type_name.as_str(), "")?;
        Ok(IdField {
            type_name,
            name: name.into(),
            extract: Box::new(extract),
        })
    }

    /// Name the field is exposed under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owning entity type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Produces the identifier string for `source` under `scope`.
    ///
    /// # Errors
    ///
    /// Propagates codec errors from the `Global` arm of the scope policy.
    pub fn value(&self, source: &T, scope: IdScope) -> Result<String, GlobalIdError> {
        scoped_id(&self.type_name, &(self.extract)(source), scope)
    }
}

/// Renames a local id field so it never collides with the global `id` field.
///
/// A field literally named `id` (any case) is namespaced under its parent
/// type: parent `Contact` yields `contactId`. Any other name is camelCased
/// as-is.
pub fn local_field_name(parent_type: &str, field: &str) -> String {
    if field.eq_ignore_ascii_case("id") {
        to_camel_case(&format!("{parent_type}Id"))
    } else {
        to_camel_case(field)
    }
}

fn to_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_field_is_namespaced_under_its_parent() {
        assert_eq!(local_field_name("Contact", "id"), "contactId");
        assert_eq!(local_field_name("Contact", "ID"), "contactId");
    }

    #[test]
    fn other_fields_are_camel_cased_unchanged() {
        assert_eq!(local_field_name("Contact", "OwnerId"), "ownerId");
        assert_eq!(local_field_name("Contact", "email"), "email");
    }

    #[test]
    fn empty_field_name_stays_empty() {
        assert_eq!(local_field_name("Contact", ""), "");
    }
}
