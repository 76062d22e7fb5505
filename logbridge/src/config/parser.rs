//! INI parsing logic for converting `Ini` → `LoggingConfig`.

use ini::Ini;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use super::defaults::LEVEL_NAMES;
use super::file::{ConfigError, LoggingConfig};

/// Parse an `Ini` object into a `LoggingConfig`.
///
/// Starts from `LoggingConfig::default()` and overlays any values found in
/// the `[logging]` section.
pub(super) fn parse_ini(ini: &Ini) -> Result<LoggingConfig, ConfigError> {
    let mut config = LoggingConfig::default();

    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.file = v.to_string();
            }
        }
        if let Some(v) = section.get("level") {
            config.filter = parse_filter(v)?;
        }
        if let Some(v) = section.get("stdout") {
            config.stdout = parse_bool(v);
        }
    }

    Ok(config)
}

/// Accept a bare level name or any directive `EnvFilter` can parse.
///
/// Level names are normalised to lowercase. Anything else, including a bare
/// target such as `my_app::db`, is kept as written once it parses.
fn parse_filter(value: &str) -> Result<String, ConfigError> {
    let v = value.trim();
    let level = v.to_lowercase();
    if LEVEL_NAMES.contains(&level.as_str()) {
        return Ok(level);
    }

    match EnvFilter::try_new(v) {
        Ok(_) => Ok(v.to_string()),
        Err(e) => Err(ConfigError::InvalidValue {
            section: "logging".to_string(),
            key: "level".to_string(),
            value: v.to_string(),
            reason: format!(
                "must be one of: {}, or a filter directive ({})",
                LEVEL_NAMES.join(", "),
                e
            ),
        }),
    }
}

/// Parse a boolean value from a config string.
/// Accepts: true/false, yes/no, 1/0, on/off (case-insensitive)
fn parse_bool(value: &str) -> bool {
    let v = value.trim().to_lowercase();
    v == "true" || v == "1" || v == "yes" || v == "on"
}

/// Expand ~ to home directory in paths.
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn load(contents: &str) -> Result<LoggingConfig, ConfigError> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        std::fs::write(&config_path, contents).unwrap();
        LoggingConfig::load_from(&config_path)
    }

    #[test]
    fn test_full_logging_section() {
        let config = load(
            r#"
[logging]
directory = /tmp/bridge-logs
file = service.log
level = DEBUG
stdout = no
"#,
        )
        .unwrap();

        assert_eq!(config.directory, PathBuf::from("/tmp/bridge-logs"));
        assert_eq!(config.file, "service.log");
        assert_eq!(config.filter, "debug");
        assert!(!config.stdout);
    }

    #[test]
    fn test_partial_config() {
        let config = load(
            r#"
[logging]
level = warn
"#,
        )
        .unwrap();

        assert_eq!(config.filter, "warn");
        assert_eq!(config.file, LoggingConfig::default().file);
        assert!(config.stdout);
    }

    #[test]
    fn test_other_sections_ignored() {
        let config = load(
            r#"
[cache]
memory_size = 4GB
"#,
        )
        .unwrap();

        assert_eq!(config, LoggingConfig::default());
    }

    #[test]
    fn test_filter_directive_passes_through() {
        let config = load(
            r#"
[logging]
level = logbridge=debug,info
"#,
        )
        .unwrap();

        assert_eq!(config.filter, "logbridge=debug,info");
    }

    #[test]
    fn test_bare_target_directive_accepted() {
        assert_eq!(parse_filter("logbridge").unwrap(), "logbridge");
        assert_eq!(parse_filter(" my_app::db ").unwrap(), "my_app::db");

        let config = load(
            r#"
[logging]
level = my_app::db
"#,
        )
        .unwrap();
        assert_eq!(config.filter, "my_app::db");
    }

    #[test]
    fn test_invalid_level() {
        let err = load(
            r#"
[logging]
level = logbridge=verbose
"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("logging.level"));
        assert!(err.to_string().contains("must be one of:"));
    }

    #[test]
    fn test_empty_values_keep_defaults() {
        let config = load(
            r#"
[logging]
directory =
file =
"#,
        )
        .unwrap();

        assert_eq!(config.directory, LoggingConfig::default().directory);
        assert_eq!(config.file, LoggingConfig::default().file);
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true"));
        assert!(parse_bool("YES"));
        assert!(parse_bool(" on "));
        assert!(parse_bool("1"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool("off"));
        assert!(!parse_bool("garbage"));
    }

    #[test]
    fn test_expand_tilde() {
        let path = expand_tilde("~/test/path");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path, home.join("test/path"));
        }

        // Non-tilde paths should be unchanged
        let path = expand_tilde("/absolute/path");
        assert_eq!(path, PathBuf::from("/absolute/path"));
    }
}
