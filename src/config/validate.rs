// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{ConstruplanError, Result};
use crate::model::ActivityDefaults;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = ConstruplanError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;

        let defaults = ActivityDefaults {
            title: raw.defaults.title.trim().to_string(),
            duration: u32::try_from(raw.defaults.duration).map_err(|_| {
                ConstruplanError::ConfigError(format!(
                    "[defaults].duration is too large (got {})",
                    raw.defaults.duration
                ))
            })?,
        };

        Ok(ConfigFile::new_unchecked(
            raw.storage.data_file,
            defaults,
            raw.gantt,
            raw.watch,
        ))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_storage(cfg)?;
    validate_defaults(cfg)?;
    validate_gantt(cfg)?;
    Ok(())
}

fn validate_storage(cfg: &RawConfigFile) -> Result<()> {
    if cfg.storage.data_file.as_os_str().is_empty() {
        return Err(ConstruplanError::ConfigError(
            "[storage].data_file must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_defaults(cfg: &RawConfigFile) -> Result<()> {
    if cfg.defaults.title.trim().is_empty() {
        return Err(ConstruplanError::ConfigError(
            "[defaults].title must not be blank".to_string(),
        ));
    }
    if cfg.defaults.duration < 1 {
        return Err(ConstruplanError::ConfigError(format!(
            "[defaults].duration must be >= 1 (got {})",
            cfg.defaults.duration
        )));
    }
    Ok(())
}

fn validate_gantt(cfg: &RawConfigFile) -> Result<()> {
    if cfg.gantt.day_width == 0 {
        return Err(ConstruplanError::ConfigError(
            "[gantt].day_width must be >= 1 (got 0)".to_string(),
        ));
    }
    if cfg.gantt.label_width < 4 {
        return Err(ConstruplanError::ConfigError(format!(
            "[gantt].label_width must be >= 4 (got {})",
            cfg.gantt.label_width
        )));
    }
    Ok(())
}
