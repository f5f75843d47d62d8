// src/storage/json.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::errors::Result;
use crate::model::Activity;
use crate::storage::ActivityStorage;

/// Stores the collection as a pretty-printed JSON array (`activities.json`).
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "activities.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ActivityStorage for JsonFileStorage {
    /// A missing file is an empty collection.
    fn load(&self) -> Result<Vec<Activity>> {
        if !self.path.exists() {
            debug!(path = ?self.path, "data file not found; starting empty");
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("reading activities from {:?}", self.path))?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let activities: Vec<Activity> = serde_json::from_str(&contents)?;
        Ok(activities)
    }

    /// Write to a sibling temp file, then rename over the data file.
    fn save(&self, activities: &[Activity]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating data directory {:?}", parent))?;
            }
        }

        let mut json = serde_json::to_string_pretty(activities)?;
        json.push('\n');

        let tmp = self.temp_path();
        fs::write(&tmp, json).with_context(|| format!("writing {:?}", tmp))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing {:?}", self.path))?;

        debug!(path = ?self.path, count = activities.len(), "saved activities");
        Ok(())
    }
}
