//! Migration of service-level-operator SLOs to Sloth.
//!
//! The migration runs in three stages:
//!
//! 1. [`loader`]: decode a YAML file holding either a `ServiceLevelList` or
//!    a single `ServiceLevel`.
//! 2. [`mapper`]: turn each `ServiceLevel` into at most one Sloth
//!    `PrometheusServiceLevel`, dropping disabled objectives on request and
//!    rewriting query range selectors with [`window::replace_window`].
//! 3. [`emitter`]: write each result to `_gen_<namespace>_<name>.yaml`.
//!
//! [`run`] chains the stages for a [`MigrateConfig`] and reports progress
//! through [`MigrationEvent`] callbacks.
//!
//! # Example
//!
//! ```no_run
//! use slo_migrate::{MigrateConfig, MigrationEvent};
//!
//! let config = MigrateConfig::new("slos.yaml", "sloth/").with_ignore_disabled(true);
//! let summary = slo_migrate::run(&config, |event| {
//!     if let MigrationEvent::Written { name, path } = event {
//!         println!("{name}: {}", path.display());
//!     }
//! })
//! .unwrap();
//! println!("{} file(s) written", summary.written.len());
//! ```

mod config;
mod error;
mod pipeline;

pub mod emitter;
pub mod loader;
pub mod mapper;
pub mod window;

pub use config::MigrateConfig;
pub use error::{MigrateError, Result};
pub use pipeline::{MigrationEvent, MigrationSummary, SkipReason, run};
