// src/config/model.rs

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::ActivityDefaults;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [storage]
/// data_file = "data/activities.json"
///
/// [defaults]
/// title = "New activity"
/// duration = 1
///
/// [gantt]
/// day_width = 2
/// label_width = 24
///
/// [watch]
/// use_hash = true
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub storage: StorageSection,

    #[serde(default)]
    pub defaults: DefaultsSection,

    #[serde(default)]
    pub gantt: GanttSection,

    #[serde(default)]
    pub watch: WatchSection,
}

/// `[storage]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSection {
    /// Path of the JSON data file. Relative paths are resolved against the
    /// directory of the config file.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data/activities.json")
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

/// `[defaults]` section: values applied to omitted fields on `add`.
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsSection {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_duration")]
    pub duration: i64,
}

fn default_title() -> String {
    ActivityDefaults::default().title
}

fn default_duration() -> i64 {
    i64::from(ActivityDefaults::default().duration)
}

impl Default for DefaultsSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            duration: default_duration(),
        }
    }
}

/// `[gantt]` section: terminal timeline geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct GanttSection {
    /// Characters per day.
    #[serde(default = "default_day_width")]
    pub day_width: usize,

    /// Characters reserved for the `id - title` label column.
    #[serde(default = "default_label_width")]
    pub label_width: usize,
}

fn default_day_width() -> usize {
    2
}

fn default_label_width() -> usize {
    24
}

impl Default for GanttSection {
    fn default() -> Self {
        Self {
            day_width: default_day_width(),
            label_width: default_label_width(),
        }
    }
}

/// `[watch]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchSection {
    /// Skip re-rendering when the data file content hash did not change.
    #[serde(default = "default_use_hash")]
    pub use_hash: bool,
}

fn default_use_hash() -> bool {
    true
}

impl Default for WatchSection {
    fn default() -> Self {
        Self {
            use_hash: default_use_hash(),
        }
    }
}

/// Validated configuration. Only obtainable through `TryFrom<RawConfigFile>`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    data_file: PathBuf,
    defaults: ActivityDefaults,
    gantt: GanttSection,
    watch: WatchSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        data_file: PathBuf,
        defaults: ActivityDefaults,
        gantt: GanttSection,
        watch: WatchSection,
    ) -> Self {
        Self {
            data_file,
            defaults,
            gantt,
            watch,
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn defaults(&self) -> &ActivityDefaults {
        &self.defaults
    }

    pub fn gantt(&self) -> &GanttSection {
        &self.gantt
    }

    pub fn watch(&self) -> &WatchSection {
        &self.watch
    }

    /// Resolve a relative data file against `base` (the config's directory).
    pub fn with_base_dir(mut self, base: &Path) -> Self {
        if self.data_file.is_relative() && !base.as_os_str().is_empty() {
            self.data_file = base.join(&self.data_file);
        }
        self
    }

    /// Replace the data file (from `--data`), taken verbatim.
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(
            default_data_file(),
            ActivityDefaults::default(),
            GanttSection::default(),
            WatchSection::default(),
        )
    }
}
