// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod model;
pub mod render;
pub mod storage;
pub mod watch;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::cli::{CliArgs, Command};
use crate::config::{ConfigFile, load_or_default};
use crate::dag::check_integrity;
use crate::engine::{StoreHandle, StoreRuntime};
use crate::model::{ActivityDraft, ActivityPatch};
use crate::render::{render_activity_table, render_integrity, render_timeline};
use crate::storage::{ActivityStorage, JsonFileStorage};
use crate::watch::{ContentChangeFilter, spawn_data_watcher};

/// Outcome of a command, mapped to the process exit status by `main.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// The command ran but found problems (e.g. `check` reported issues).
    IssuesFound,
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (`--config`, `--data`)
/// - JSON storage
/// - the single-writer store runtime
/// - the selected subcommand
pub async fn run(args: CliArgs) -> Result<ExitStatus> {
    let config = effective_config(args.config.as_deref(), args.data)?;
    debug!(data_file = ?config.data_file(), "effective configuration loaded");

    let storage = JsonFileStorage::new(config.data_file());

    match args.command {
        Command::Check => return run_check(&storage),
        Command::Watch => return run_watch(&config, storage).await,
        _ => {}
    }

    let (store, runtime) = StoreRuntime::spawn(storage)?;
    let status = run_store_command(&store, &config, args.command).await;

    // Dropping the last handle closes the request channel and stops the runtime.
    drop(store);
    runtime.await.context("store runtime panicked")?;
    status
}

fn effective_config(config_path: Option<&Path>, data: Option<PathBuf>) -> Result<ConfigFile> {
    let config = load_or_default(config_path).context("loading configuration")?;
    Ok(match data {
        Some(path) => config.with_data_file(path),
        None => config,
    })
}

async fn run_store_command(
    store: &StoreHandle,
    config: &ConfigFile,
    command: Command,
) -> Result<ExitStatus> {
    match command {
        Command::List { json } => {
            let activities = store.all().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&activities)?);
            } else {
                print!("{}", render_activity_table(&activities));
            }
        }
        Command::Add(add) => {
            let new = ActivityDraft::from(add).validate(config.defaults(), today())?;
            let created = store.create(new).await?;
            println!("{}", serde_json::to_string_pretty(&created)?);
        }
        Command::Update(update) => {
            let id = update.id;
            let patch = ActivityPatch::from(update).validate()?;
            let updated = store.update(id, patch).await?;
            println!("{}", serde_json::to_string_pretty(&updated)?);
        }
        Command::Remove { id } => {
            let removed = store.remove(id).await?;
            println!("{}", serde_json::to_string_pretty(&removed)?);
        }
        Command::Schedule { json } => {
            let schedule = store.schedule().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&schedule)?);
            } else {
                print!("{}", render_timeline(&schedule, config.gantt()));
            }
        }
        Command::Check | Command::Watch => {
            bail!("check and watch read the data file directly, not through the store")
        }
    }
    Ok(ExitStatus::Success)
}

fn run_check(storage: &JsonFileStorage) -> Result<ExitStatus> {
    let activities = storage.load()?;
    let report = check_integrity(&activities);
    print!("{}", render_integrity(&report));

    if report.is_clean() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::IssuesFound)
    }
}

/// Re-render the timeline whenever the data file changes, until Ctrl-C.
async fn run_watch(config: &ConfigFile, storage: JsonFileStorage) -> Result<ExitStatus> {
    let (tx, mut rx) = mpsc::channel::<PathBuf>(16);
    let _watcher = spawn_data_watcher(storage.path(), tx)?;
    let mut filter = ContentChangeFilter::new();

    render_current(config, &storage, &mut filter, true);

    loop {
        tokio::select! {
            changed = rx.recv() => {
                match changed {
                    Some(_) => render_current(config, &storage, &mut filter, false),
                    None => break,
                }
            }
            res = tokio::signal::ctrl_c() => {
                if let Err(e) = res {
                    warn!("failed to listen for Ctrl+C: {e}");
                }
                info!("stopping watch");
                break;
            }
        }
    }

    Ok(ExitStatus::Success)
}

/// Load, resolve and print. Errors are logged, not fatal: the file may be
/// mid-edit and the next change event gets another chance.
fn render_current(
    config: &ConfigFile,
    storage: &JsonFileStorage,
    filter: &mut ContentChangeFilter,
    force: bool,
) {
    match filter.changed(storage.path()) {
        Ok(false) if config.watch().use_hash && !force => return,
        Ok(_) => {}
        Err(e) => warn!("hashing data file failed: {e:#}"),
    }

    let schedule = storage
        .load()
        .and_then(|activities| crate::engine::Schedule::build(&activities));
    match schedule {
        Ok(schedule) => print!("{}", render_timeline(&schedule, config.gantt())),
        Err(e) => warn!("could not render schedule: {e}"),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
