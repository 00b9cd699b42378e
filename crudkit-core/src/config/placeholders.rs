use super::ConfigError;

/// Resolve `${...}` placeholders in a string value.
///
/// Supported references:
/// - `${VAR}` or `${env:VAR}`: environment variable
/// - `${VAR:default}`: environment variable with a fallback
/// - `${file:/path/to/secret}`: file contents, trimmed
pub fn resolve_placeholders(value: &str) -> Result<String, ConfigError> {
    let mut result = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        let end = rest[start..]
            .find('}')
            .ok_or_else(|| ConfigError::Load(format!("Unclosed placeholder in: {value}")))?;
        result.push_str(&rest[..start]);
        // Substituted text is copied as-is, never scanned again.
        result.push_str(&resolve_reference(rest[start + 2..start + end].trim())?);
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    Ok(result)
}

fn resolve_reference(reference: &str) -> Result<String, ConfigError> {
    if let Some(path) = reference.strip_prefix("file:") {
        return std::fs::read_to_string(path.trim())
            .map(|s| s.trim().to_string())
            .map_err(|e| ConfigError::Load(format!("Secret file '{}': {e}", path.trim())));
    }
    let reference = reference.strip_prefix("env:").unwrap_or(reference);
    let (var, default) = match reference.split_once(':') {
        Some((var, default)) => (var, Some(default)),
        None => (reference, None),
    };
    match (std::env::var(var), default) {
        (Ok(v), _) => Ok(v),
        (Err(_), Some(d)) => Ok(d.to_string()),
        (Err(_), None) => Err(ConfigError::NotFound(var.to_string())),
    }
}
