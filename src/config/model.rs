// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::registry::DEFAULT_LOOKUP_VAR;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [watch]
/// root = "/home/u/work/src/app"
/// lookup_var = "GOPATH"
/// ignore = ["vendor", "testdata"]
/// ```
///
/// All sections are optional and have reasonable defaults. This is the
/// unvalidated form; use [`ConfigFile`] everywhere else.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub watch: WatchSection,
}

/// `[watch]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchSection {
    /// Directory to watch. The CLI `--root` flag wins over this; without
    /// either, the current working directory is used.
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Environment variable the build tool reads its lookup path from.
    #[serde(default = "default_lookup_var")]
    pub lookup_var: String,

    /// Package names to ignore right after the first resync.
    #[serde(default)]
    pub ignore: Vec<String>,
}

fn default_lookup_var() -> String {
    DEFAULT_LOOKUP_VAR.to_string()
}

impl Default for WatchSection {
    fn default() -> Self {
        Self {
            root: None,
            lookup_var: default_lookup_var(),
            ignore: Vec::new(),
        }
    }
}

/// Validated configuration.
///
/// Only obtainable through `TryFrom<RawConfigFile>` (see `validate.rs`) or
/// [`ConfigFile::default`].
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    watch: WatchSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(watch: WatchSection) -> Self {
        Self { watch }
    }

    pub fn root(&self) -> Option<&PathBuf> {
        self.watch.root.as_ref()
    }

    pub fn lookup_var(&self) -> &str {
        &self.watch.lookup_var
    }

    pub fn ignore(&self) -> &[String] {
        &self.watch.ignore
    }
}
