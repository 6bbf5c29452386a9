// src/shell/mock.rs

use super::Shell;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct MockShellState {
    vars: HashMap<String, String>,
    writes: Vec<(String, String)>,
    fail_writes: bool,
}

/// In-memory environment for tests.
///
/// Records every `setenv` call so tests can assert on how many writes a
/// registry operation performed. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockShell {
    state: Arc<Mutex<MockShellState>>,
}

impl MockShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(self, key: &str, value: &str) -> Self {
        self.lock().vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Make every subsequent `setenv` fail.
    pub fn fail_writes(&self) {
        self.lock().fail_writes = true;
    }

    /// All successful writes, oldest first.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.lock().writes.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MockShellState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Shell for MockShell {
    fn getenv(&self, key: &str) -> Option<String> {
        self.lock().vars.get(key).cloned()
    }

    fn setenv(&self, key: &str, value: &str) -> Result<()> {
        let mut state = self.lock();
        if state.fail_writes {
            return Err(anyhow!("environment is read-only"));
        }
        state.vars.insert(key.to_string(), value.to_string());
        state.writes.push((key.to_string(), value.to_string()));
        Ok(())
    }
}
