use std::collections::HashMap;
use std::path::Path;

use super::value::ConfigValue;
use super::ConfigError;

/// Load and parse a YAML file, flattening it into the values map.
///
/// A missing file is not an error; profiles are optional.
pub(crate) fn load_yaml_file(
    path: &Path,
    values: &mut HashMap<String, ConfigValue>,
) -> Result<(), ConfigError> {
    if !path.exists() {
        return Ok(());
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))?;
    load_yaml_str(&content, values)
}

/// Parse a YAML string and flatten it into the values map.
pub(crate) fn load_yaml_str(
    content: &str,
    values: &mut HashMap<String, ConfigValue>,
) -> Result<(), ConfigError> {
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| ConfigError::Load(e.to_string()))?;
    flatten_yaml("", &yaml, values);
    Ok(())
}

/// Flatten a YAML tree into dot-separated keys (`app.database.url`).
///
/// Lists are kept whole under their key, as `ConfigValue::List`.
fn flatten_yaml(prefix: &str, value: &serde_yaml::Value, out: &mut HashMap<String, ConfigValue>) {
    let serde_yaml::Value::Mapping(map) = value else {
        if !prefix.is_empty() {
            out.insert(prefix.to_string(), ConfigValue::from_yaml(value));
        }
        return;
    };
    for (k, v) in map {
        let Some(segment) = key_segment(k) else {
            tracing::warn!(key = ?k, "ignoring non-scalar configuration key");
            continue;
        };
        let key = match prefix {
            "" => segment,
            _ => format!("{prefix}.{segment}"),
        };
        flatten_yaml(&key, v, out);
    }
}

fn key_segment(key: &serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
