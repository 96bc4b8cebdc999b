//! Handlers for the `config` subcommands.
//!
//! The `cmd_config_*` functions are generic over
//! [`ConfigManager`](radassist_core::ConfigManager); [`handle_config_command`]
//! dispatches them for [`RadassistConfig`]. Output is written to a caller
//! supplied writer so the handlers can be tested without capturing stdout.

use std::io::Write;
use std::path::PathBuf;

use radassist_core::{ConfigManager, Error, RadassistConfig, Result};

use crate::cli::ConfigAction;

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand using [`RadassistConfig`], printing to stdout.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match action {
        ConfigAction::Path => cmd_config_path::<RadassistConfig>(config_path, &mut out),
        ConfigAction::Get { key } => {
            cmd_config_get::<RadassistConfig>(config_path, &key, &mut out)
        }
        ConfigAction::Set { key, value } => {
            cmd_config_set::<RadassistConfig>(config_path, &key, &value, &mut out)
        }
        ConfigAction::Init { file, force } => {
            cmd_config_init::<RadassistConfig>(file.as_deref().or(config_path), force, &mut out)
        }
        ConfigAction::Export { docker_env } => {
            let config = RadassistConfig::load(config_path)?;
            cmd_config_export(&config, docker_env, &mut out)
        }
    }
}

// ============================================================================
// Generic command handlers
// ============================================================================

fn write_err(e: std::io::Error) -> Error {
    Error::io_with_path(e, "<stdout>")
}

/// Show the resolved config file path.
pub fn cmd_config_path<C: ConfigManager>(
    config_path: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let path = C::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))?;
    writeln!(out, "{}", path.display()).map_err(write_err)?;
    if !path.exists() {
        tracing::warn!(
            "{} does not exist; run `{} config init` to create it",
            path.display(),
            C::project_name()
        );
    }
    Ok(())
}

/// Print a configuration value by dotted key.
pub fn cmd_config_get<C: ConfigManager>(
    config_path: Option<&str>,
    key: &str,
    out: &mut impl Write,
) -> Result<()> {
    let config = C::load(config_path)?;
    let value = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    match get_nested_value(&value, key) {
        Some(val) => {
            writeln!(out, "{}", format_toml_value(val)).map_err(write_err)?;
            Ok(())
        }
        None => Err(Error::config(format!(
            "Key '{key}' not found in configuration"
        ))),
    }
}

/// Set a configuration value by dotted key in the config file.
///
/// The file must exist and the key must name a setting of `C`. Text settings
/// store the value verbatim; other settings go through [`parse_value`] and the
/// result must still parse as `C`.
pub fn cmd_config_set<C: ConfigManager>(
    config_path: Option<&str>,
    key: &str,
    value: &str,
    out: &mut impl Write,
) -> Result<()> {
    let path = C::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;

    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `{} config init` first.",
            path.display(),
            C::project_name()
        )));
    }
    let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
    let mut doc: toml::Value = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;

    let known = toml::Value::try_from(C::default()).map_err(|e| Error::config(e.to_string()))?;
    let new_value = match get_nested_value(&known, key) {
        Some(toml::Value::String(_)) => toml::Value::String(value.to_string()),
        Some(toml::Value::Table(_)) => {
            return Err(Error::config(format!("'{key}' is a section, not a setting")));
        }
        Some(_) => parse_value(value),
        None => return Err(Error::config(format!("Unknown configuration key '{key}'"))),
    };
    set_nested_value(&mut doc, key, new_value)?;

    let toml_str = toml::to_string_pretty(&doc).map_err(|e| Error::config(e.to_string()))?;
    toml::from_str::<C>(&toml_str)
        .map_err(|e| Error::config(format!("Invalid value for '{key}': {e}")))?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    writeln!(out, "Set {key} = {value} in {}", path.display()).map_err(write_err)?;
    Ok(())
}

/// Create a default configuration file.
pub fn cmd_config_init<C: ConfigManager>(
    file: Option<&str>,
    force: bool,
    out: &mut impl Write,
) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => C::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = C::default().to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    writeln!(out, "Config file created at {}", path.display()).map_err(write_err)?;
    Ok(())
}

/// Print the configuration as environment variables.
pub fn cmd_config_export<C: ConfigManager>(
    config: &C,
    docker_env: bool,
    out: &mut impl Write,
) -> Result<()> {
    for (key, value) in config.to_env_vars()? {
        if docker_env {
            writeln!(out, "--env {key}={value}").map_err(write_err)?;
        } else {
            writeln!(out, "{key}={value}").map_err(write_err)?;
        }
    }
    Ok(())
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

/// Navigate a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Set a value at a dotted key path, creating intermediate tables as needed.
pub fn set_nested_value(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();
    let Some((last, parents)) = parts.split_last() else {
        return Err(Error::config("Empty key path"));
    };
    if last.is_empty() {
        return Err(Error::config("Empty key path"));
    }

    let mut current = root;
    for part in parents {
        let table = current
            .as_table_mut()
            .ok_or_else(|| Error::config("Cannot navigate into a non-table value"))?;
        current = table
            .entry(part.to_string())
            .or_insert(toml::Value::Table(toml::map::Map::new()));
    }

    let table = current
        .as_table_mut()
        .ok_or_else(|| Error::config("Cannot set key on a non-table value"))?;
    table.insert(last.to_string(), value);
    Ok(())
}

/// Parse a string value into a TOML value, auto-detecting the type.
///
/// Priority: bool → integer → float → string.
pub fn parse_value(s: &str) -> toml::Value {
    if s == "true" {
        return toml::Value::Boolean(true);
    }
    if s == "false" {
        return toml::Value::Boolean(false);
    }
    if let Ok(i) = s.parse::<i64>() {
        return toml::Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return toml::Value::Float(f);
    }
    toml::Value::String(s.to_string())
}

/// Format a TOML value for display.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn written_config() -> (tempfile::TempDir, String) {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, RadassistConfig::default().to_toml_string().unwrap()).unwrap();
        let path = path.to_str().unwrap().to_string();
        (dir, path)
    }

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    // ------------------------------------------------------------------------
    // cmd_config_path
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_path_explicit() {
        let mut buf = Vec::new();
        cmd_config_path::<RadassistConfig>(Some("/explicit/config.toml"), &mut buf).unwrap();
        assert_eq!(output(buf).trim(), "/explicit/config.toml");
    }

    // ------------------------------------------------------------------------
    // cmd_config_get
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_get_nested_key() {
        let (_dir, path) = written_config();
        let mut buf = Vec::new();
        cmd_config_get::<RadassistConfig>(Some(&path), "server.port", &mut buf).unwrap();
        assert_eq!(output(buf).trim(), "8501");
    }

    #[test]
    fn test_cmd_config_get_string_value_unquoted() {
        let (_dir, path) = written_config();
        let mut buf = Vec::new();
        cmd_config_get::<RadassistConfig>(Some(&path), "page.default_name", &mut buf).unwrap();
        assert_eq!(output(buf).trim(), "Dr. Smith");
    }

    #[test]
    fn test_cmd_config_get_missing_file_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let mut buf = Vec::new();
        cmd_config_get::<RadassistConfig>(path.to_str(), "page.button_label", &mut buf).unwrap();
        assert_eq!(output(buf).trim(), "Say Hello");
    }

    #[test]
    fn test_cmd_config_get_missing_key() {
        let (_dir, path) = written_config();
        let result =
            cmd_config_get::<RadassistConfig>(Some(&path), "nonexistent.key", &mut Vec::new());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    // ------------------------------------------------------------------------
    // cmd_config_set
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_set_nested_key() {
        let (_dir, path) = written_config();
        cmd_config_set::<RadassistConfig>(Some(&path), "server.port", "9000", &mut Vec::new())
            .unwrap();
        let config = RadassistConfig::load(Some(&path)).unwrap();
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_cmd_config_set_string_with_spaces() {
        let (_dir, path) = written_config();
        cmd_config_set::<RadassistConfig>(
            Some(&path),
            "page.default_name",
            "Dr. Jones",
            &mut Vec::new(),
        )
        .unwrap();
        let config = RadassistConfig::load(Some(&path)).unwrap();
        assert_eq!(config.page.default_name, "Dr. Jones");
    }

    #[test]
    fn test_cmd_config_set_rejects_wrong_type() {
        let (_dir, path) = written_config();
        let before = std::fs::read_to_string(&path).unwrap();
        let result = cmd_config_set::<RadassistConfig>(
            Some(&path),
            "server.port",
            "eighty",
            &mut Vec::new(),
        );
        assert!(result.unwrap_err().to_string().contains("Invalid value"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_cmd_config_set_text_that_looks_numeric() {
        let (_dir, path) = written_config();
        cmd_config_set::<RadassistConfig>(Some(&path), "page.title", "2024", &mut Vec::new())
            .unwrap();
        cmd_config_set::<RadassistConfig>(
            Some(&path),
            "page.default_name",
            "true",
            &mut Vec::new(),
        )
        .unwrap();
        let config = RadassistConfig::load(Some(&path)).unwrap();
        assert_eq!(config.page.title, "2024");
        assert_eq!(config.page.default_name, "true");
    }

    #[test]
    fn test_cmd_config_set_rejects_unknown_key() {
        let (_dir, path) = written_config();
        let before = std::fs::read_to_string(&path).unwrap();
        let mut buf = Vec::new();
        let result =
            cmd_config_set::<RadassistConfig>(Some(&path), "server.prot", "9000", &mut buf);
        assert!(result.unwrap_err().to_string().contains("Unknown configuration key"));
        assert!(buf.is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_cmd_config_set_rejects_section() {
        let (_dir, path) = written_config();
        let before = std::fs::read_to_string(&path).unwrap();
        let result = cmd_config_set::<RadassistConfig>(Some(&path), "page", "x", &mut Vec::new());
        assert!(result.unwrap_err().to_string().contains("section"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_cmd_config_set_missing_file() {
        let result = cmd_config_set::<RadassistConfig>(
            Some("/nonexistent/config.toml"),
            "server.port",
            "1",
            &mut Vec::new(),
        );
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    // ------------------------------------------------------------------------
    // cmd_config_init
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_init_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("radassist").join("config.toml");

        let mut buf = Vec::new();
        cmd_config_init::<RadassistConfig>(path.to_str(), false, &mut buf).unwrap();
        assert!(path.exists());
        assert!(output(buf).contains("Config file created"));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[server]"));
        assert!(content.contains("[page]"));
    }

    #[test]
    fn test_cmd_config_init_no_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "existing").unwrap();

        let result = cmd_config_init::<RadassistConfig>(path.to_str(), false, &mut Vec::new());
        assert!(result.unwrap_err().to_string().contains("already exists"));
    }

    #[test]
    fn test_cmd_config_init_force_overwrites() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "old content").unwrap();

        cmd_config_init::<RadassistConfig>(path.to_str(), true, &mut Vec::new()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("default_name"));
    }

    // ------------------------------------------------------------------------
    // cmd_config_export
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_export_env_vars() {
        let mut buf = Vec::new();
        cmd_config_export(&RadassistConfig::default(), false, &mut buf).unwrap();
        assert!(output(buf).lines().any(|l| l == "RADASSIST_SERVER_PORT=8501"));
    }

    #[test]
    fn test_cmd_config_export_docker_env() {
        let mut buf = Vec::new();
        cmd_config_export(&RadassistConfig::default(), true, &mut buf).unwrap();
        assert!(output(buf)
            .lines()
            .any(|l| l == "--env RADASSIST_SERVER_HOST=127.0.0.1"));
    }

    // ------------------------------------------------------------------------
    // dotted-key helpers
    // ------------------------------------------------------------------------

    #[test]
    fn test_get_nested_value() {
        let val: toml::Value = toml::from_str("[server]\nport = 3000").unwrap();
        assert_eq!(
            get_nested_value(&val, "server.port"),
            Some(&toml::Value::Integer(3000))
        );
        assert!(get_nested_value(&val, "server.nonexistent").is_none());
        assert!(get_nested_value(&val, "server.port.deeper").is_none());
    }

    #[test]
    fn test_set_nested_value_creates_section() {
        let mut val = toml::Value::Table(toml::map::Map::new());
        set_nested_value(&mut val, "page.title", toml::Value::String("X".into())).unwrap();
        assert_eq!(
            get_nested_value(&val, "page.title"),
            Some(&toml::Value::String("X".into()))
        );
    }

    #[test]
    fn test_set_nested_value_through_scalar_fails() {
        let mut val: toml::Value = toml::from_str("port = 1").unwrap();
        assert!(set_nested_value(&mut val, "port.inner", toml::Value::Integer(2)).is_err());
    }

    #[test]
    fn test_set_nested_value_empty_key_fails() {
        let mut val = toml::Value::Table(toml::map::Map::new());
        assert!(set_nested_value(&mut val, "", toml::Value::Integer(2)).is_err());
    }

    #[test]
    fn test_parse_value_types() {
        assert_eq!(parse_value("true"), toml::Value::Boolean(true));
        assert_eq!(parse_value("42"), toml::Value::Integer(42));
        assert_eq!(parse_value("2.5"), toml::Value::Float(2.5));
        assert_eq!(
            parse_value("Dr. Smith"),
            toml::Value::String("Dr. Smith".to_string())
        );
    }

    #[test]
    fn test_format_toml_value() {
        assert_eq!(format_toml_value(&toml::Value::String("hi".into())), "hi");
        assert_eq!(format_toml_value(&toml::Value::Integer(42)), "42");
        assert_eq!(format_toml_value(&toml::Value::Boolean(false)), "false");
    }
}
