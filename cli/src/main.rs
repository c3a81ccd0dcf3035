use std::path::PathBuf;
use std::process;

use clap::Parser;
use slo_migrate::{MigrateConfig, MigrationEvent};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Exit code for every failed run, including invalid flags.
const EXIT_FAILURE: i32 = 42;

#[derive(Debug, Parser)]
#[command(name = "slo-migrator")]
#[command(version)]
#[command(about = "Migrate SLOs from service-level-operator to Sloth")]
struct Cli {
    /// service-level-operator SLOs CR YAML file (accepts ServiceLevel and ServiceLevelList).
    #[arg(long, env = "SLO_MIGRATOR_SLOS", value_name = "FILE")]
    slos: PathBuf,
    /// Directory to place the generated Sloth CRs.
    #[arg(long, env = "SLO_MIGRATOR_OUT", value_name = "DIR")]
    out: PathBuf,
    /// Do not migrate SLOs that have the disable field set to true.
    #[arg(long, env = "SLO_MIGRATOR_IGNORE_DISABLE")]
    ignore_disable: bool,
    /// Log debug diagnostics to stderr (RUST_LOG takes precedence).
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            eprint!("{}", err.render());
            process::exit(EXIT_FAILURE);
        }
        // --help and --version
        Err(err) => err.exit(),
    };

    init_tracing(cli.verbose);

    let config = MigrateConfig::new(cli.slos, cli.out).with_ignore_disabled(cli.ignore_disable);
    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        process::exit(EXIT_FAILURE);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "slo_migrate=debug,slo_migrator=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

fn run(config: &MigrateConfig) -> slo_migrate::Result<()> {
    debug!(?config, "starting migration");

    let summary = slo_migrate::run(config, |event| match event {
        MigrationEvent::Skipped { name, reason } => {
            println!("Ignoring {name} service level: {reason}");
        }
        MigrationEvent::Written { name, path } => {
            println!("[*] {name}: {}", path.display());
        }
    })?;

    println!(
        "Migrated {} of {} service level(s) into '{}'.",
        summary.written.len(),
        summary.loaded,
        config.out_dir.display()
    );
    Ok(())
}
