//! `jvgen config`: inspect the effective configuration.

use serde_json::Value;

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = lookup(&config, &key)?;
            if output.format() == OutputFormat::Json {
                output.json(&serde_json::json!({ "key": key, "value": value }))?;
            } else {
                output.print(&display(&value))?;
            }
        }

        ConfigCommands::List => {
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.header("Current configuration:")?;
            output.print(&serialised)?;
            output.json(&config)?;
        }

        ConfigCommands::Path => {
            let user = AppConfig::config_path();
            output.print(&user.display().to_string())?;
            output.json(&serde_json::json!({
                "user": user,
                "local": LOCAL_CONFIG_FILE,
            }))?;
        }
    }

    Ok(())
}

/// Resolve a dotted key such as `defaults.version` against the loaded config.
fn lookup(config: &AppConfig, key: &str) -> CliResult<Value> {
    let mut current = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    for segment in key.split('.') {
        current = match current {
            Value::Object(mut map) => map.remove(segment),
            _ => None,
        }
        .ok_or_else(|| CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        })?;
    }
    Ok(current)
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "(unset)".into(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(display(&lookup(&cfg, "defaults.version").unwrap()), "1.0.0");
        assert_eq!(display(&lookup(&cfg, "output.no_color").unwrap()), "false");
        assert_eq!(display(&lookup(&cfg, "output.format").unwrap()), "auto");
    }

    #[test]
    fn unset_optional_key_is_reported_as_unset() {
        let cfg = AppConfig::default();
        assert_eq!(display(&lookup(&cfg, "defaults.group_id").unwrap()), "(unset)");
    }

    #[test]
    fn whole_section_is_returned_as_json() {
        let value = lookup(&AppConfig::default(), "output").unwrap();
        assert!(value.is_object());
    }

    #[test]
    fn unknown_key_is_error() {
        let cfg = AppConfig::default();
        for key in ["does.not.exist", "defaults.version.major", ""] {
            assert!(matches!(lookup(&cfg, key), Err(CliError::ConfigError { .. })));
        }
    }
}
