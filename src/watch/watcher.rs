// src/watch/watcher.rs

use std::path::{Path, PathBuf};

use anyhow::Result;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Handle for the filesystem watcher.
///
/// Keeps the underlying `RecommendedWatcher` alive. Dropping this handle
/// stops file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Watch the directory containing `data_file` and send `data_file` on
/// `changes` whenever an event touches it.
///
/// The directory rather than the file is watched because saves replace the
/// file through a rename.
pub fn spawn_data_watcher(
    data_file: impl Into<PathBuf>,
    changes: mpsc::Sender<PathBuf>,
) -> Result<WatcherHandle> {
    let data_file = data_file.into();
    let dir = match data_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)?;

    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if let Err(err) = event_tx.send(event) {
                    eprintln!("construplan: failed to forward notify event: {err}");
                }
            }
            Err(err) => {
                eprintln!("construplan: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    info!("watching {:?} for changes", data_file);

    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if matches!(event.kind, EventKind::Access(_)) {
                continue;
            }
            if event.paths.iter().any(|p| same_file_name(p, &data_file)) {
                debug!(kind = ?event.kind, "data file event");
                if changes.send(data_file.clone()).await.is_err() {
                    break;
                }
            }
        }
        debug!("watcher event loop finished");
    });

    Ok(WatcherHandle { _inner: watcher })
}

fn same_file_name(event_path: &Path, data_file: &Path) -> bool {
    event_path.file_name().is_some() && event_path.file_name() == data_file.file_name()
}
