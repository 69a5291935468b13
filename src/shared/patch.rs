// src/shared/patch.rs

use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit partial-update semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field omitted => keep stored value
// - Null: explicit null => reset for fields with a default, refused otherwise
// - Value(v): replace with v
//
// With #[serde(default)] on the containing struct field, an omitted key
// deserializes to Unset.
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    /// For fields that cannot be cleared: `Null` is refused with `on_null`,
    /// `Unset` means keep the stored value.
    pub fn required<E>(self, on_null: E) -> Result<Option<T>, E> {
        match self {
            PatchField::Unset => Ok(None),
            PatchField::Null => Err(on_null),
            PatchField::Value(v) => Ok(Some(v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default)]
        title: PatchField<String>,
        #[serde(default)]
        order: PatchField<i32>,
    }

    #[test]
    fn omitted_field_is_unset() {
        let body: Body = serde_json::from_str(r#"{ "order": 3 }"#).unwrap();
        assert_eq!(body.title, PatchField::Unset);
        assert_eq!(body.order, PatchField::Value(3));
        assert_eq!(body.title.required("null"), Ok(None));
    }

    #[test]
    fn explicit_null_is_null() {
        let body: Body = serde_json::from_str(r#"{ "title": null }"#).unwrap();
        assert_eq!(body.title, PatchField::Null);
        assert_eq!(body.title.required("title is null"), Err("title is null"));
    }

    #[test]
    fn value_is_kept() {
        let body: Body = serde_json::from_str(r#"{ "title": "Rust" }"#).unwrap();
        assert_eq!(body.title.required("null"), Ok(Some("Rust".to_string())));
    }
}
