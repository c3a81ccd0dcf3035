//! End-to-end migration run: load, map, write.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::MigrateConfig;
use crate::emitter::{output_path, store_service_level};
use crate::error::{MigrateError, Result};
use crate::loader::read_service_levels;
use crate::mapper::map_service_level;

/// Why a service level produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The service level declares no objectives.
    NoObjectives,
    /// Every objective is disabled and disabled objectives are ignored.
    AllDisabled,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoObjectives => f.write_str("0 service levels"),
            SkipReason::AllDisabled => f.write_str("all service levels disabled"),
        }
    }
}

/// Progress notification emitted while a run is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationEvent<'a> {
    /// A service level was not migrated.
    Skipped { name: &'a str, reason: SkipReason },
    /// A Sloth service level was written.
    Written { name: &'a str, path: &'a Path },
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationSummary {
    /// Service levels found in the input.
    pub loaded: usize,
    /// Files written, in input order.
    pub written: Vec<PathBuf>,
    /// Service levels that produced no output.
    pub skipped: usize,
}

/// Migrates every service level in `config.spec_file` into `config.out_dir`.
///
/// All service levels are mapped before the first file is written, so a
/// mapping failure leaves the output directory untouched. `on_event` is
/// called for each skipped service level and after each written file.
///
/// # Errors
///
/// Fails on the first error of any stage: [`MigrateError::Config`],
/// [`MigrateError::Read`], [`MigrateError::Decode`],
/// [`MigrateError::EmptyInput`] when the input holds no service levels,
/// [`MigrateError::Mapping`], [`MigrateError::Encode`] or
/// [`MigrateError::Write`].
pub fn run(
    config: &MigrateConfig,
    mut on_event: impl FnMut(MigrationEvent<'_>),
) -> Result<MigrationSummary> {
    config.validate()?;

    let levels = read_service_levels(&config.spec_file)?;
    if levels.is_empty() {
        return Err(MigrateError::EmptyInput);
    }
    info!(
        count = levels.len(),
        path = %config.spec_file.display(),
        "loaded service levels"
    );

    let mut mapped = Vec::with_capacity(levels.len());
    let mut skipped = 0;
    for sl in &levels {
        match map_service_level(config, sl)? {
            Some(sloth) => mapped.push(sloth),
            None => {
                let reason = if sl.objectives().is_empty() {
                    SkipReason::NoObjectives
                } else {
                    SkipReason::AllDisabled
                };
                on_event(MigrationEvent::Skipped {
                    name: sl.name(),
                    reason,
                });
                skipped += 1;
            }
        }
    }

    let mut seen = HashSet::new();
    for sloth in &mapped {
        let path = output_path(&config.out_dir, sloth);
        if !seen.insert(path.clone()) {
            warn!(
                name = sloth.name(),
                path = %path.display(),
                "output file already written by an earlier service level, overwriting"
            );
        }
    }

    let mut written = Vec::with_capacity(mapped.len());
    for sloth in &mapped {
        let path = store_service_level(config, sloth)?;
        on_event(MigrationEvent::Written {
            name: sloth.name(),
            path: &path,
        });
        written.push(path);
    }

    info!(written = written.len(), skipped, "migration finished");

    Ok(MigrationSummary {
        loaded: levels.len(),
        written,
        skipped,
    })
}
