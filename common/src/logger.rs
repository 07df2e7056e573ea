use crate::config::{DEFAULT_LOG_LEVEL, DriftConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global `tracing` subscriber.
///
/// The filter comes from `config.log_level` (an `EnvFilter` directive string). Events go to
/// stderr when `log_to_stderr` is set and to a daily-rolling file when `log_file` is set.
///
/// Returns the file writer's guard; keep it alive until the program exits or buffered lines are
/// lost. Calling this twice is harmless: the second subscriber is not installed.
pub fn init_logging(config: &DriftConfig) -> Option<WorkerGuard> {
    let env_filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let stderr_layer = config.log_to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(true)
    });

    let (file_layer, guard) = match config.log_file.as_deref() {
        Some(path) => {
            let (dir, file_name) = split_log_path(path);
            fs::create_dir_all(&dir).ok();
            let (file_writer, guard) = tracing_appender::non_blocking(rolling::daily(dir, file_name));
            let layer = fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .ok();

    guard
}

/// Splits `logs/drift.log` into the appender's directory and file prefix.
fn split_log_path(path: &str) -> (PathBuf, String) {
    let path = Path::new(path);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "drift-check.log".to_string());
    (dir, file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_nested_path() {
        let (dir, name) = split_log_path("logs/ci/drift.log");
        assert_eq!(dir, PathBuf::from("logs/ci"));
        assert_eq!(name, "drift.log");
    }

    #[test]
    fn test_split_bare_file_name() {
        let (dir, name) = split_log_path("drift.log");
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, "drift.log");
    }

    #[test]
    fn test_init_creates_log_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let log_file = tmp.path().join("nested").join("drift.log");
        let config = DriftConfig {
            log_level: "debug".into(),
            log_file: Some(log_file.to_string_lossy().into_owned()),
            log_to_stderr: false,
            ..DriftConfig::default()
        };
        let guard = init_logging(&config);
        assert!(guard.is_some());
        assert!(tmp.path().join("nested").is_dir());
    }
}
