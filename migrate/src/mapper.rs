//! Mapping service-level-operator resources to Sloth resources.
//!
//! A `ServiceLevel` becomes a `PrometheusServiceLevel` with the same
//! metadata, its name doubling as the Sloth service. Each objective becomes
//! a Sloth SLO with event-based SLI queries whose range selectors are
//! replaced by the window placeholder. Alerting is never carried over: both
//! Sloth alerts are disabled on every migrated SLO.

use slo_migrate_core::{PrometheusServiceLevel, ServiceLevel, ServiceLevelObjective, SliEvents, Slo};
use tracing::debug;

use crate::config::MigrateConfig;
use crate::error::{MigrateError, Result};
use crate::window::replace_window;

/// Maps one service level to a Sloth service level.
///
/// Returns `Ok(None)` when nothing is left to migrate: the service level has
/// no objectives, or `config.ignore_disabled` is set and every objective is
/// disabled. Objective order is preserved.
///
/// # Errors
///
/// Returns [`MigrateError::Mapping`] if a kept objective has no Prometheus
/// indicator.
///
/// # Examples
///
/// ```
/// use slo_migrate::{MigrateConfig, loader::decode_single, mapper::map_service_level};
///
/// let sl = decode_single(br#"
/// metadata: { name: app, namespace: ns1 }
/// spec:
///   serviceLevelObjectives:
///     - name: availability
///       availabilityObjectivePercent: 99.9
///       serviceLevelIndicator:
///         prometheus:
///           errorQuery: sum(rate(errors[5m]))
///           totalQuery: sum(rate(total[5m]))
/// "#).unwrap();
///
/// let config = MigrateConfig::new("slos.yaml", "out");
/// let sloth = map_service_level(&config, &sl).unwrap().unwrap();
/// assert_eq!(sloth.spec.service, "app");
/// assert_eq!(sloth.spec.slos[0].sli.events.error_query, "sum(rate(errors[{{ .window }}]))");
/// ```
pub fn map_service_level(
    config: &MigrateConfig,
    sl: &ServiceLevel,
) -> Result<Option<PrometheusServiceLevel>> {
    if sl.objectives().is_empty() {
        debug!(name = sl.name(), "service level has no objectives");
        return Ok(None);
    }

    let slos = sl
        .objectives()
        .iter()
        .filter(|slo| {
            let skip = config.ignore_disabled && slo.disable;
            if skip {
                debug!(service_level = sl.name(), objective = %slo.name, "ignoring disabled objective");
            }
            !skip
        })
        .map(|slo| map_objective(sl, slo))
        .collect::<Result<Vec<_>>>()?;

    // Sloth rejects service levels without SLOs, so a fully filtered group is
    // dropped like an empty one.
    if slos.is_empty() {
        debug!(name = sl.name(), "every objective of service level is disabled");
        return Ok(None);
    }

    Ok(Some(PrometheusServiceLevel::new(
        sl.metadata.clone(),
        sl.name(),
        slos,
    )))
}

fn map_objective(sl: &ServiceLevel, slo: &ServiceLevelObjective) -> Result<Slo> {
    let prometheus = slo
        .service_level_indicator
        .prometheus
        .as_ref()
        .ok_or_else(|| MigrateError::Mapping {
            service_level: sl.name().to_string(),
            objective: slo.name.clone(),
        })?;

    let events = SliEvents::new(
        replace_window(&prometheus.error_query),
        replace_window(&prometheus.total_query),
    );

    let mut mapped = Slo::new(&slo.name, slo.availability_objective_percent, events);
    if let Some(description) = &slo.description {
        mapped = mapped.with_description(description);
    }
    if let Some(labels) = slo.output_labels() {
        mapped = mapped.with_labels(labels.clone());
    }
    Ok(mapped)
}
