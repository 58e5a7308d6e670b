//! Shipwright runner binary.
//!
//! Bakes a scene document into runtime records, applies them to an
//! in-memory world, and writes the world as a JSON snapshot.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `shipwright.yaml` (or `SHIPWRIGHT_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Load the scene document
//! 4. Bake the scene across worker threads
//! 5. Apply every bake to the in-memory world
//! 6. Write the snapshot
//! 7. Log the result

mod config;
mod error;

use std::path::{Path, PathBuf};

use shipwright_host::{HostError, InMemoryWorld, Scene, apply_scene, bake_scene_parallel};
use shipwright_types::BakeRunId;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{LoggingConfig, RunnerConfig};
use crate::error::RunnerError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, the scene, or the snapshot write
/// fails, or if warnings were raised with `fail_on_warnings` set.
fn main() -> anyhow::Result<()> {
    // 1. Load configuration. Logging is not up yet, so the outcome is
    //    reported after step 2.
    let (config, config_path, found) = load_config()?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!("shipwright-runner starting");
    if found {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        info!(path = %config_path.display(), "Config file not found, using defaults");
    }

    let run_id = BakeRunId::new();
    info!(
        run_id = %run_id,
        scene = %config.scene.display(),
        output = %config.output.path.display(),
        workers = config.bake.workers,
        "Bake run starting"
    );

    // 3. Load the scene.
    let scene = Scene::from_file(&config.scene).map_err(RunnerError::from)?;
    info!(objects = scene.objects.len(), "Scene loaded");

    // 4. Bake.
    let bakes = bake_scene_parallel(&scene, config.bake.workers);

    // 5. Apply.
    let mut world = InMemoryWorld::new();
    let summary = apply_scene(&mut world, &bakes);
    info!(
        run_id = %run_id,
        targets = summary.targets,
        records = summary.records_attached,
        flags = summary.flags_attached,
        rejected = summary.rejected,
        warnings = summary.warnings,
        "Scene applied"
    );

    // 6. Write the snapshot.
    write_snapshot(&world, &config.output.path, config.output.pretty)?;
    info!(path = %config.output.path.display(), entities = world.len(), "Snapshot written");

    // 7. Result.
    if summary.warnings > 0 {
        if config.bake.fail_on_warnings {
            return Err(RunnerError::Warnings {
                count: summary.warnings,
            }
            .into());
        }
        warn!(warnings = summary.warnings, "Bake finished with warnings");
    }
    info!(run_id = %run_id, "shipwright-runner finished");
    Ok(())
}

/// Install the tracing subscriber. `RUST_LOG` wins over the configured
/// level.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));
    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}

/// Load configuration from `SHIPWRIGHT_CONFIG` or `shipwright.yaml`,
/// falling back to defaults when the file does not exist. Environment
/// overrides are applied either way.
fn load_config() -> Result<(RunnerConfig, PathBuf, bool), RunnerError> {
    let config_path = std::env::var("SHIPWRIGHT_CONFIG")
        .map_or_else(|_| PathBuf::from("shipwright.yaml"), PathBuf::from);
    let found = config_path.exists();
    let mut config = if found {
        RunnerConfig::from_file(&config_path)?
    } else {
        RunnerConfig::default()
    };
    config.apply_env_overrides();
    Ok((config, config_path, found))
}

fn write_snapshot(world: &InMemoryWorld, path: &Path, pretty: bool) -> Result<(), RunnerError> {
    let snapshot = world.snapshot();
    let json = if pretty {
        serde_json::to_string_pretty(&snapshot)
    } else {
        serde_json::to_string(&snapshot)
    }
    .map_err(HostError::from)?;
    std::fs::write(path, json)?;
    Ok(())
}
