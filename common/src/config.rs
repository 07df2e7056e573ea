//! Process-wide configuration for the drift checker.
//!
//! `DriftConfig` is a lazily initialized, globally accessible singleton holding values read from
//! the environment (and an optional `.env` file). Match settings here are the lowest-precedence
//! layer: an options file or command line flags override them.

use std::env;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard};

pub const DEFAULT_PROJECT_NAME: &str = "drift-check";
pub const DEFAULT_LOG_LEVEL: &str = "drift_check=info,linematch=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriftConfig {
    pub project_name: String,
    pub log_level: String,
    /// Daily-rolling log file. No file logging when unset.
    pub log_file: Option<String>,
    pub log_to_stderr: bool,
    /// `None` keeps the library default.
    pub fast_forward_marker: Option<String>,
    /// `None` keeps the library default; `Some("")` disables the delimited form.
    pub fast_forward_delimiter: Option<String>,
    pub context_lines: Option<usize>,
    pub max_file_size: Option<u64>,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.into(),
            log_level: DEFAULT_LOG_LEVEL.into(),
            log_file: None,
            log_to_stderr: true,
            fast_forward_marker: None,
            fast_forward_delimiter: None,
            context_lines: None,
            max_file_size: None,
        }
    }
}

static CONFIG_INSTANCE: OnceLock<RwLock<DriftConfig>> = OnceLock::new();

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

impl DriftConfig {
    /// Loads `.env` (if present) and reads the environment. Malformed numbers are ignored.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            project_name: non_empty("PROJECT_NAME").unwrap_or_else(|| DEFAULT_PROJECT_NAME.into()),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.into()),
            log_file: non_empty("LOG_FILE"),
            log_to_stderr: env::var("LOG_TO_STDERR").unwrap_or_else(|_| "true".into()) != "false",
            fast_forward_marker: non_empty("DRIFT_FAST_FORWARD_MARKER"),
            fast_forward_delimiter: env::var("DRIFT_FAST_FORWARD_DELIMITER").ok(),
            context_lines: env::var("DRIFT_CONTEXT_LINES")
                .ok()
                .and_then(|v| v.trim().parse().ok()),
            max_file_size: env::var("DRIFT_MAX_FILE_SIZE")
                .ok()
                .and_then(|v| v.trim().parse().ok()),
        }
    }

    /// Returns a shared reference to the global configuration.
    pub fn global() -> RwLockReadGuard<'static, DriftConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(DriftConfig::from_env()))
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Reloads from the environment, dropping any overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock.write().unwrap_or_else(PoisonError::into_inner);
            *guard = DriftConfig::from_env();
        }
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut DriftConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(DriftConfig::from_env()));
        let mut guard = lock.write().unwrap_or_else(PoisonError::into_inner);
        setter(&mut guard);
    }

    pub fn set_fast_forward_marker(value: Option<String>) {
        DriftConfig::set_field(|cfg| cfg.fast_forward_marker = value);
    }

    pub fn set_context_lines(value: Option<usize>) {
        DriftConfig::set_field(|cfg| cfg.context_lines = value);
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "PROJECT_NAME",
        "LOG_LEVEL",
        "LOG_FILE",
        "LOG_TO_STDERR",
        "DRIFT_FAST_FORWARD_MARKER",
        "DRIFT_FAST_FORWARD_DELIMITER",
        "DRIFT_CONTEXT_LINES",
        "DRIFT_MAX_FILE_SIZE",
    ];

    fn clear_vars() {
        for k in VARS {
            unsafe { env::remove_var(k) };
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        clear_vars();
        assert_eq!(DriftConfig::from_env(), DriftConfig::default());
    }

    #[test]
    #[serial]
    fn test_reads_match_settings() {
        clear_vars();
        unsafe {
            env::set_var("DRIFT_FAST_FORWARD_MARKER", "...");
            env::set_var("DRIFT_FAST_FORWARD_DELIMITER", "");
            env::set_var("DRIFT_CONTEXT_LINES", " 5 ");
            env::set_var("DRIFT_MAX_FILE_SIZE", "1024");
            env::set_var("LOG_TO_STDERR", "false");
        }
        let cfg = DriftConfig::from_env();
        assert_eq!(cfg.fast_forward_marker.as_deref(), Some("..."));
        assert_eq!(cfg.fast_forward_delimiter.as_deref(), Some(""));
        assert_eq!(cfg.context_lines, Some(5));
        assert_eq!(cfg.max_file_size, Some(1024));
        assert!(!cfg.log_to_stderr);
        clear_vars();
    }

    #[test]
    #[serial]
    fn test_malformed_numbers_are_ignored() {
        clear_vars();
        unsafe {
            env::set_var("DRIFT_CONTEXT_LINES", "many");
            env::set_var("DRIFT_MAX_FILE_SIZE", "-1");
        }
        let cfg = DriftConfig::from_env();
        assert_eq!(cfg.context_lines, None);
        assert_eq!(cfg.max_file_size, None);
        clear_vars();
    }

    #[test]
    #[serial]
    fn test_setters_and_reset() {
        clear_vars();
        DriftConfig::reset();
        DriftConfig::set_context_lines(Some(7));
        DriftConfig::set_fast_forward_marker(Some("~~".into()));
        assert_eq!(DriftConfig::global().context_lines, Some(7));
        assert_eq!(DriftConfig::global().fast_forward_marker.as_deref(), Some("~~"));

        DriftConfig::reset();
        assert_eq!(DriftConfig::global().context_lines, None);
        assert_eq!(DriftConfig::global().fast_forward_marker, None);
    }
}
