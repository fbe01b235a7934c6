//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::PlantClipConfig;
use super::secret::secret_string;
use crate::domain::errors::PlantClipError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into PlantClipConfig
/// 4. Applies environment variable overrides (PLANTCLIP_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use plantclip::config::loader::load_config;
///
/// let config = load_config("plantclip.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<PlantClipConfig> {
    let config = read_config(path)?;

    config.validate().map_err(|e| {
        PlantClipError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Same as [`load_config`] without the final validation step
///
/// Callers that layer further overrides on top must call
/// `PlantClipConfig::validate` themselves.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if a
/// referenced environment variable is not set.
pub fn read_config(path: impl AsRef<Path>) -> Result<PlantClipConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PlantClipError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PlantClipError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: PlantClipConfig = toml::from_str(&contents)
        .map_err(|e| PlantClipError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    Ok(config)
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("environment variable pattern is valid")
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied through untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = env_var_pattern();
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(PlantClipError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the PLANTCLIP_* prefix
///
/// Variables follow the pattern `PLANTCLIP_<SECTION>_<KEY>`, for example
/// `PLANTCLIP_EARTHENGINE_PROJECT` or `PLANTCLIP_EXPORT_ID_START`.
/// Values that fail to parse are ignored.
fn apply_env_overrides(config: &mut PlantClipConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("PLANTCLIP_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("PLANTCLIP_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Earth Engine overrides
    if let Ok(val) = std::env::var("PLANTCLIP_EARTHENGINE_BASE_URL") {
        config.earthengine.base_url = val;
    }
    if let Ok(val) = std::env::var("PLANTCLIP_EARTHENGINE_PROJECT") {
        config.earthengine.project = val;
    }
    if let Ok(val) = std::env::var("PLANTCLIP_EARTHENGINE_ACCESS_TOKEN") {
        config.earthengine.access_token = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("PLANTCLIP_EARTHENGINE_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.earthengine.timeout_seconds = timeout;
        }
    }

    // Plants overrides
    if let Ok(val) = std::env::var("PLANTCLIP_PLANTS_PATH") {
        config.plants.path = val;
    }
    if let Ok(val) = std::env::var("PLANTCLIP_PLANTS_SHEET_INDEX") {
        if let Ok(index) = val.parse() {
            config.plants.sheet_index = index;
        }
    }

    // Export overrides
    if let Ok(val) = std::env::var("PLANTCLIP_EXPORT_ID_START") {
        if let Ok(start) = val.parse() {
            config.export.id_start = start;
        }
    }
    if let Ok(val) = std::env::var("PLANTCLIP_EXPORT_ID_END") {
        if let Ok(end) = val.parse() {
            config.export.id_end = end;
        }
    }
    if let Ok(val) = std::env::var("PLANTCLIP_EXPORT_SOURCES") {
        config.export.sources = val.split(',').map(|s| s.trim().to_string()).collect();
    }
    if let Ok(val) = std::env::var("PLANTCLIP_EXPORT_MAX_PIXELS") {
        if let Ok(max_pixels) = val.parse() {
            config.export.max_pixels = max_pixels;
        }
    }
    if let Ok(val) = std::env::var("PLANTCLIP_EXPORT_FOLDER_PREFIX") {
        config.export.folder_prefix = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("PLANTCLIP_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("PLANTCLIP_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("PLANTCLIP_LOADER_TEST_VAR", "test_value");
        let input = "access_token = \"${PLANTCLIP_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "access_token = \"test_value\"\n");
        std::env::remove_var("PLANTCLIP_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("PLANTCLIP_LOADER_MISSING_VAR");
        let input = "access_token = \"${PLANTCLIP_LOADER_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("PLANTCLIP_LOADER_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("PLANTCLIP_LOADER_COMMENTED_VAR");
        let input = "# access_token = \"${PLANTCLIP_LOADER_COMMENTED_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${PLANTCLIP_LOADER_COMMENTED_VAR}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_minimal() {
        let toml_content = r#"
[earthengine]
project = "ee-plants"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.earthengine.project, "ee-plants");
        assert_eq!(config.earthengine.base_url, "https://earthengine.googleapis.com");
        assert!(config.earthengine.access_token.is_none());
        assert_eq!(config.export.id_start, 300);
        assert_eq!(config.export.id_end, 500);
    }

    #[test]
    fn test_read_config_defers_validation() {
        let toml_content = r#"
[earthengine]
project = "ee-plants"

[export]
id_end = 100
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        assert!(load_config(temp_file.path()).is_err());

        let mut config = read_config(temp_file.path()).unwrap();
        assert!(config.validate().is_err());
        config.export.id_start = 0;
        assert!(config.validate().is_ok());
    }
}
