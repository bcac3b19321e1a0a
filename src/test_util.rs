//! Helpers shared by tests that touch the process environment.
//!
//! Callers must be marked `#[serial]`.

use crate::config::keys::ALL_KEYS;

/// Sets or removes environment variables and restores the previous values
/// when dropped.
pub struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    /// Starts a guard with every recognized key removed.
    pub fn clear_all() -> Self {
        let mut guard = Self { saved: Vec::new() };
        for key in ALL_KEYS {
            guard.save(key);
            std::env::remove_var(key);
        }
        guard
    }

    pub fn set(mut self, key: &str, value: &str) -> Self {
        self.save(key);
        std::env::set_var(key, value);
        self
    }

    fn save(&mut self, key: &str) {
        self.saved.push((key.to_string(), std::env::var(key).ok()));
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // Reverse order so the earliest saved value wins for repeated keys.
        for (key, value) in self.saved.drain(..).rev() {
            match value {
                Some(value) => std::env::set_var(&key, value),
                None => std::env::remove_var(&key),
            }
        }
    }
}
