//! service-level-operator resources (`monitoring.spotahome.com/v1alpha1`).
//!
//! These are decode-only types: the migrator reads them and never writes
//! them back. Decoding is lenient in the way Kubernetes clients are: unknown
//! fields are ignored and missing or `null` fields take their zero values.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::meta::{ObjectMeta, null_as_default};

/// API group/version of the source resources.
pub const SOURCE_API_VERSION: &str = "monitoring.spotahome.com/v1alpha1";
/// Kind of a single source resource.
pub const SOURCE_KIND: &str = "ServiceLevel";
/// Kind suffix of a collection document (`ServiceLevelList`, or the generic
/// `List` that `kubectl get -o yaml` emits).
const LIST_KIND_SUFFIX: &str = "List";

/// A collection document wrapping zero or more [`ServiceLevel`] resources.
///
/// `items` is an `Option` so callers can tell an explicit (possibly empty)
/// `items` key apart from a document that has no `items` key at all, which
/// is how a bare single resource looks when decoded as a list.
///
/// # Examples
///
/// ```
/// use slo_migrate_core::ServiceLevelList;
///
/// let list: ServiceLevelList = serde_yaml::from_str("kind: ServiceLevelList\nitems: []\n").unwrap();
/// assert!(list.is_collection());
/// assert_eq!(list.len(), 0);
///
/// let bare: ServiceLevelList = serde_yaml::from_str("kind: ServiceLevel\n").unwrap();
/// assert!(!bare.is_collection());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLevelList {
    /// Declared API version, if any.
    #[serde(default)]
    pub api_version: Option<String>,
    /// Declared kind, if any.
    #[serde(default)]
    pub kind: Option<String>,
    /// Wrapped resources. `None` when the document has no `items` key.
    #[serde(default)]
    pub items: Option<Vec<ServiceLevel>>,
}

impl ServiceLevelList {
    /// Returns `true` if the document is explicitly a collection: it either
    /// carries an `items` key or declares a `*List` kind.
    pub fn is_collection(&self) -> bool {
        self.items.is_some()
            || self
                .kind
                .as_deref()
                .is_some_and(|k| k.ends_with(LIST_KIND_SUFFIX))
    }

    /// Number of wrapped resources.
    pub fn len(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }

    /// Returns `true` if no resources are wrapped.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the list, returning the wrapped resources in document order.
    pub fn into_items(self) -> Vec<ServiceLevel> {
        self.items.unwrap_or_default()
    }
}

/// A named, namespaced owner of service level objectives.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLevel {
    /// Declared API version, if any.
    #[serde(default)]
    pub api_version: Option<String>,
    /// Declared kind, if any.
    #[serde(default)]
    pub kind: Option<String>,
    /// Resource identity and metadata.
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: ObjectMeta,
    /// Resource payload.
    #[serde(default, deserialize_with = "null_as_default")]
    pub spec: ServiceLevelSpec,
}

impl ServiceLevel {
    /// Resource name (shorthand for `metadata.name`).
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Resource namespace (shorthand for `metadata.namespace`).
    pub fn namespace(&self) -> &str {
        &self.metadata.namespace
    }

    /// Objectives in declaration order.
    pub fn objectives(&self) -> &[ServiceLevelObjective] {
        &self.spec.service_level_objectives
    }
}

/// Payload of a [`ServiceLevel`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLevelSpec {
    /// Objectives owned by the service level.
    #[serde(default, deserialize_with = "null_as_default")]
    pub service_level_objectives: Vec<ServiceLevelObjective>,
}

/// One SLO definition.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLevelObjective {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Administratively turned off.
    #[serde(default)]
    pub disable: bool,
    /// Target availability, e.g. `99.9`.
    #[serde(default)]
    pub availability_objective_percent: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub service_level_indicator: ServiceLevelIndicator,
    #[serde(default, deserialize_with = "null_as_default")]
    pub output: ObjectiveOutput,
}

/// Where the indicator values come from.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServiceLevelIndicator {
    #[serde(default)]
    pub prometheus: Option<PrometheusIndicator>,
}

/// Prometheus-backed indicator: an error-event query over a total-event query.
///
/// Both queries normally carry a literal range selector such as `[5m]`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrometheusIndicator {
    /// Prometheus address the operator queried. Not carried to the target.
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub error_query: String,
    #[serde(default)]
    pub total_query: String,
}

/// Output settings of an objective.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ObjectiveOutput {
    #[serde(default)]
    pub prometheus: Option<PrometheusOutput>,
}

/// Prometheus output settings: extra labels attached to generated series.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PrometheusOutput {
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: BTreeMap<String, String>,
}

impl ServiceLevelObjective {
    /// Output labels, or `None` when the objective declares no Prometheus
    /// output block.
    pub fn output_labels(&self) -> Option<&BTreeMap<String, String>> {
        self.output.prometheus.as_ref().map(|p| &p.labels)
    }
}
