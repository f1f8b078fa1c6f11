//! Loading `RequestConfig` from TOML or JSON.
//!
//! Keys may be given in snake_case or camelCase. Omitted keys take their
//! defaults, so an empty document is a valid config.

use std::path::Path;

use reqstate_flow::RequestConfig;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use crate::error::{ConfigError, ConfigResult};

pub fn from_toml_str<D: DeserializeOwned>(raw: &str) -> ConfigResult<RequestConfig<D>> {
    Ok(toml::from_str(raw)?)
}

pub fn from_json_str<D: DeserializeOwned>(raw: &str) -> ConfigResult<RequestConfig<D>> {
    Ok(serde_json::from_str(raw)?)
}

/// Read a config file, picking the format from its extension.
pub fn load_config<D: DeserializeOwned>(path: impl AsRef<Path>) -> ConfigResult<RequestConfig<D>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if extension != "toml" && extension != "json" {
        return Err(ConfigError::UnsupportedFormat(extension));
    }

    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = if extension == "toml" {
        from_toml_str(&raw)?
    } else {
        from_json_str(&raw)?
    };

    tracing::debug!(
        path = %path.display(),
        clear_data = config.clear_data,
        clear_error = config.clear_error,
        has_initial_data = config.initial_data.is_some(),
        "Loaded request config"
    );
    Ok(config)
}

/// JSON Schema describing `RequestConfig<D>`.
pub fn config_schema<D: JsonSchema>() -> serde_json::Value {
    schemars::schema_for!(RequestConfig<D>).to_value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_toml_partial() {
        let config: RequestConfig<String> =
            from_toml_str("clear_error = true\ninitial_data = \"none yet\"").unwrap();

        assert!(!config.clear_data);
        assert!(config.clear_error);
        assert_eq!(config.initial_data.as_deref(), Some("none yet"));
    }

    #[test]
    fn test_toml_camel_case_keys() {
        let config: RequestConfig<Vec<u32>> =
            from_toml_str("clearData = true\ninitialData = []").unwrap();

        assert!(config.clear_data);
        assert_eq!(config.initial_data, Some(vec![]));
    }

    #[test]
    fn test_empty_documents() {
        let toml: RequestConfig<u32> = from_toml_str("").unwrap();
        let json: RequestConfig<u32> = from_json_str("{}").unwrap();

        assert_eq!(toml, RequestConfig::default());
        assert_eq!(json, RequestConfig::default());
    }

    #[test]
    fn test_json_null_initial_data() {
        let config: RequestConfig<serde_json::Value> =
            from_json_str(r#"{ "initialData": null }"#).unwrap();
        assert_eq!(config.initial_data, Some(serde_json::Value::Null));

        let absent: RequestConfig<serde_json::Value> = from_json_str("{}").unwrap();
        assert_eq!(absent.initial_data, None);
    }

    #[test]
    fn test_invalid_json() {
        let err = from_json_str::<u32>(r#"{ "clear_data": "yes" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{ "clearData": true, "initialData": [1, 2] }}"#).unwrap();

        let config: RequestConfig<Vec<u8>> = load_config(file.path()).unwrap();
        assert!(config.clear_data);
        assert_eq!(config.initial_data, Some(vec![1, 2]));
    }

    #[test]
    fn test_load_config_unsupported_extension() {
        let err = load_config::<u32>("request.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(ref ext) if ext == "yaml"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config::<u32>(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_config_schema() {
        let schema = config_schema::<String>();
        assert_eq!(schema["properties"]["clear_data"]["type"], "boolean");
        assert!(schema["properties"].get("initial_data").is_some());
    }
}
