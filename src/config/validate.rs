// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile, WatchSection};
use crate::errors::{PkgwatchError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::PkgwatchError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_watch_section(&raw.watch)?;
        Ok(ConfigFile::new_unchecked(raw.watch))
    }
}

fn validate_watch_section(watch: &WatchSection) -> Result<()> {
    validate_lookup_var(&watch.lookup_var)?;
    validate_ignore_names(&watch.ignore)?;

    if let Some(root) = &watch.root {
        if !root.is_absolute() {
            return Err(PkgwatchError::ConfigError(format!(
                "[watch].root must be an absolute path (got {:?})",
                root
            )));
        }
    }

    Ok(())
}

/// Check that `name` can be used as an environment variable name.
pub fn validate_lookup_var(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(PkgwatchError::ConfigError(
            "[watch].lookup_var must not be empty".to_string(),
        ));
    }
    if name.contains('=') || name.contains('\0') {
        return Err(PkgwatchError::ConfigError(format!(
            "[watch].lookup_var {:?} is not a valid environment variable name",
            name
        )));
    }
    Ok(())
}

fn validate_ignore_names(names: &[String]) -> Result<()> {
    // An empty suffix would match (and ignore) every watched folder.
    if let Some(index) = names.iter().position(|n| n.is_empty()) {
        return Err(PkgwatchError::ConfigError(format!(
            "[watch].ignore entry {} must not be empty",
            index
        )));
    }
    Ok(())
}
