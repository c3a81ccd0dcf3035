//! Kubernetes object metadata shared by source and target resources.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Identity and metadata of a custom resource.
///
/// Only the fields that survive a migration are modelled; anything else in a
/// `metadata` block (UIDs, resource versions, managed fields) is ignored on
/// decode. Empty fields are omitted on encode.
///
/// Labels and annotations use [`BTreeMap`] so encoded output has a stable key
/// order.
///
/// # Examples
///
/// ```
/// use slo_migrate_core::ObjectMeta;
///
/// let meta = ObjectMeta::new("checkout", "shop").with_label("team", "payments");
/// assert_eq!(meta.name, "checkout");
/// assert_eq!(meta.labels.get("team").map(String::as_str), Some("payments"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    /// Resource name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Namespace the resource lives in.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    /// Resource labels.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub labels: BTreeMap<String, String>,
    /// Resource annotations.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub annotations: BTreeMap<String, String>,
}

impl ObjectMeta {
    /// Creates metadata with a name and namespace and no labels/annotations.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            labels: BTreeMap::new(),
            annotations: BTreeMap::new(),
        }
    }

    /// Adds a label.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Adds an annotation.
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }
}

/// Decodes an explicit YAML `null` as the type's default value.
///
/// Combined with `#[serde(default)]`, this makes missing and `null` fields
/// behave the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
