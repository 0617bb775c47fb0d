use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// Console verbosity: warnings by default, one step finer per `-v`; `-q`
/// keeps only errors.
pub fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber: compact stderr output plus, with
/// `--log-file`, a plain-text copy of every event that passes the filter.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(&path).map_err(CliError::Io)?;
            Some(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_thread_ids(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(level_for(verbosity, quiet))
        .with(console)
        .with(file_layer)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use potentia::engine::config::SphereConfigBuilder;
    use potentia::workflows;
    use serial_test::serial;

    #[test]
    fn verbosity_maps_to_increasing_levels() {
        assert_eq!(level_for(0, false), LevelFilter::WARN);
        assert_eq!(level_for(1, false), LevelFilter::INFO);
        assert_eq!(level_for(2, false), LevelFilter::DEBUG);
        assert_eq!(level_for(7, false), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_keeps_errors_regardless_of_verbosity() {
        assert_eq!(level_for(0, true), LevelFilter::ERROR);
        assert_eq!(level_for(3, true), LevelFilter::ERROR);
    }

    #[test]
    #[serial]
    fn log_file_receives_sphere_workflow_events() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("potentia.log");
        setup_logging(2, false, Some(log_path.clone())).unwrap();

        let config = SphereConfigBuilder::new()
            .gravitational_constant(1.0)
            .source_mass(1.0)
            .test_mass(1.0)
            .radius(1.0)
            .interior_samples(10)
            .exterior_samples(10)
            .outer_extent(2.0)
            .build()
            .unwrap();
        workflows::sphere::run(&config).unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("Sphere profile complete."));
        assert!(content.contains("Surface continuity check."));
        assert!(content.contains("sphere_workflow"));
        assert!(content.contains("ThreadId"));
        assert!(!content.contains("\u{1b}["));
    }

    #[test]
    #[serial]
    fn log_file_in_missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("missing").join("potentia.log");
        let result = setup_logging(0, false, Some(log_path));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
