//! Environment variable management for testing
//!
//! The process environment is shared by every test thread, so a guard holds a
//! process-wide lock for its whole lifetime. Tests touching the environment
//! therefore run one at a time.

use std::env;
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// RAII guard that saves a set of environment variables and restores them
/// when dropped.
pub struct EnvVarGuard {
  saved: Vec<(String, Option<String>)>,
  _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
  /// Take the environment lock and remember the current values of `names`.
  pub fn new(names: &[&str]) -> Self {
    let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let saved = names
      .iter()
      .map(|name| (name.to_string(), env::var(name).ok()))
      .collect();

    Self { saved, _lock: lock }
  }

  fn tracks(&self, name: &str) -> bool {
    self.saved.iter().any(|(saved, _)| saved == name)
  }

  /// Set a variable this guard tracks.
  pub fn set(&self, name: &str, value: &str) {
    assert!(self.tracks(name), "{name} is not tracked by this guard");
    // SAFETY: ENV_LOCK is held, so no other guarded test touches the environment.
    unsafe {
      env::set_var(name, value);
    }
  }

  /// Remove a variable this guard tracks.
  pub fn remove(&self, name: &str) {
    assert!(self.tracks(name), "{name} is not tracked by this guard");
    // SAFETY: ENV_LOCK is held, so no other guarded test touches the environment.
    unsafe {
      env::remove_var(name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    for (name, original) in &self.saved {
      // SAFETY: the lock is released only after this loop finishes.
      unsafe {
        match original {
          Some(value) => env::set_var(name, value),
          None => env::remove_var(name),
        }
      }
    }
  }
}
