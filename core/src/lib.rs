//! Custom resource types for SLO definitions.
//!
//! This crate models the two Kubernetes custom resources involved in a
//! migration from service-level-operator to Sloth:
//!
//! - [`ServiceLevel`] / [`ServiceLevelList`]: the source resources
//!   (`monitoring.spotahome.com/v1alpha1`), each owning a list of
//!   [`ServiceLevelObjective`] entries with Prometheus error/total queries.
//! - [`PrometheusServiceLevel`]: the target resource (`sloth.slok.dev/v1`),
//!   holding a service name and a list of [`Slo`] entries.
//!
//! Both sides share [`ObjectMeta`] for name, namespace, labels and
//! annotations. All types derive [`serde`] traits with the camelCase field
//! names used by the CRDs, so they can be decoded from and encoded to YAML
//! directly.
//!
//! # Example
//!
//! ```
//! use slo_migrate_core::*;
//!
//! let meta = ObjectMeta::new("checkout", "shop");
//! let slo = Slo::new(
//!     "availability",
//!     99.9,
//!     SliEvents::new("sum(rate(errors[{{ .window }}]))", "sum(rate(total[{{ .window }}]))"),
//! );
//! let sl = PrometheusServiceLevel::new(meta, "checkout", vec![slo]);
//!
//! assert_eq!(sl.api_version, TARGET_API_VERSION);
//! assert_eq!(sl.kind, TARGET_KIND);
//! assert_eq!(sl.spec.service, "checkout");
//! assert_eq!(sl.spec.slos.len(), 1);
//! ```

mod meta;
mod source;
mod target;

pub use meta::ObjectMeta;
pub use source::*;
pub use target::*;
