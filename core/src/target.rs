//! Sloth resources (`sloth.slok.dev/v1`).
//!
//! Only the subset of the `PrometheusServiceLevel` schema that a migration
//! produces is modelled: event-based SLIs and the two alert channels.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::meta::ObjectMeta;

/// API group/version of the target resource.
pub const TARGET_API_VERSION: &str = "sloth.slok.dev/v1";
/// Kind of the target resource.
pub const TARGET_KIND: &str = "PrometheusServiceLevel";

/// A Sloth SLO group for one service.
///
/// Construct with [`PrometheusServiceLevel::new`], which fills in the fixed
/// API identity fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrometheusServiceLevel {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: PrometheusServiceLevelSpec,
}

impl PrometheusServiceLevel {
    /// Creates a resource with [`TARGET_API_VERSION`] and [`TARGET_KIND`].
    pub fn new(metadata: ObjectMeta, service: impl Into<String>, slos: Vec<Slo>) -> Self {
        Self {
            api_version: TARGET_API_VERSION.to_string(),
            kind: TARGET_KIND.to_string(),
            metadata,
            spec: PrometheusServiceLevelSpec {
                service: service.into(),
                slos,
            },
        }
    }

    /// Resource name (shorthand for `metadata.name`).
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Resource namespace (shorthand for `metadata.namespace`).
    pub fn namespace(&self) -> &str {
        &self.metadata.namespace
    }
}

/// Payload of a [`PrometheusServiceLevel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrometheusServiceLevelSpec {
    /// Service the SLOs belong to.
    pub service: String,
    #[serde(default)]
    pub slos: Vec<Slo>,
}

/// One Sloth SLO.
///
/// # Examples
///
/// ```
/// use slo_migrate_core::{Slo, SliEvents};
///
/// let slo = Slo::new("availability", 99.5, SliEvents::new("errors", "total"))
///     .with_description("Requests served without 5xx");
/// assert_eq!(slo.objective, 99.5);
/// assert!(slo.alerting.page_alert.disable);
/// assert!(slo.alerting.ticket_alert.disable);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slo {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Target percentage, e.g. `99.9`.
    pub objective: f64,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    pub sli: Sli,
    pub alerting: Alerting,
}

impl Slo {
    /// Creates an SLO with event-based SLI queries and both alerts disabled.
    pub fn new(name: impl Into<String>, objective: f64, events: SliEvents) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            objective,
            labels: BTreeMap::new(),
            sli: Sli { events },
            alerting: Alerting::disabled(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replaces the SLO labels.
    pub fn with_labels(mut self, labels: BTreeMap<String, String>) -> Self {
        self.labels = labels;
        self
    }
}

/// Service level indicator of an [`Slo`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sli {
    pub events: SliEvents,
}

/// Event-based SLI: ratio of error events to total events.
///
/// Queries may contain the `{{ .window }}` template variable, which Sloth
/// replaces with each SLO window when generating rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliEvents {
    pub error_query: String,
    pub total_query: String,
}

impl SliEvents {
    pub fn new(error_query: impl Into<String>, total_query: impl Into<String>) -> Self {
        Self {
            error_query: error_query.into(),
            total_query: total_query.into(),
        }
    }
}

/// Alerting configuration of an [`Slo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alerting {
    /// Alert name. Sloth derives one when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub page_alert: Alert,
    pub ticket_alert: Alert,
}

impl Alerting {
    /// Alerting with both the page and ticket alerts disabled.
    pub const fn disabled() -> Self {
        Self {
            name: String::new(),
            page_alert: Alert::DISABLED,
            ticket_alert: Alert::DISABLED,
        }
    }
}

/// One alert channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(default)]
    pub disable: bool,
}

impl Alert {
    /// A disabled alert.
    pub const DISABLED: Alert = Alert { disable: true };
}
