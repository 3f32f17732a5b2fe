//! Runtime options for a batch run.
//!
//! Nothing here is persisted; every run gets its options from the UI.

use serde_json::{Map, Value};

use crate::error::ConfigError;

/// Command used to invoke the converter when the user supplies no override.
pub const DEFAULT_CONVERTER: &str = "fbx2gltf";

/// Options for one batch run, shared read-only across all jobs.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Keep material entries and primitive material references.
    pub keep_materials: bool,
    /// Remove texture/image entries and material texture references.
    pub strip_textures: bool,
    /// Metadata object written to the document root `extras` field.
    pub metadata: Map<String, Value>,
    /// Converter command: a bare name resolved via PATH, or a path.
    pub converter: String,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            keep_materials: true,
            strip_textures: true,
            metadata: Map::new(),
            converter: DEFAULT_CONVERTER.to_string(),
        }
    }
}

/// Parses the user-supplied metadata text into a JSON object.
///
/// Empty or whitespace-only text is treated as an empty object. Valid JSON
/// that is not an object (arrays, scalars) is rejected: `extras` must hold a
/// key-value mapping. Called before the batch starts so that malformed
/// metadata touches zero files.
pub fn parse_metadata(text: &str) -> Result<Map<String, Value>, ConfigError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Map::new());
    }

    let value: Value = serde_json::from_str(trimmed).map_err(ConfigError::MetadataNotJson)?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ConfigError::MetadataNotObject {
            found: json_type_name(&other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metadata_object() {
        let map = parse_metadata(r#"{"origin": "origin_pack_name", "rev": 3}"#).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["origin"], Value::String("origin_pack_name".to_string()));
        assert_eq!(map["rev"], Value::from(3));
    }

    #[test]
    fn test_parse_metadata_empty_text_is_empty_object() {
        assert!(parse_metadata("").unwrap().is_empty());
        assert!(parse_metadata("   \n\t ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_metadata_invalid_json_rejected() {
        let err = parse_metadata("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::MetadataNotJson(_)));
    }

    #[test]
    fn test_parse_metadata_non_object_rejected() {
        let err = parse_metadata(r#"["a", "b"]"#).unwrap_err();
        match err {
            ConfigError::MetadataNotObject { found } => assert_eq!(found, "an array"),
            other => panic!("Expected MetadataNotObject, got {other:?}"),
        }

        let err = parse_metadata("42").unwrap_err();
        assert!(matches!(err, ConfigError::MetadataNotObject { found: "a number" }));
    }

    #[test]
    fn test_parse_metadata_nested_values_allowed() {
        let map = parse_metadata(r#"{"pack": {"name": "props", "tags": ["wood", "old"]}}"#).unwrap();
        assert!(map["pack"].is_object());
    }

    #[test]
    fn test_default_options() {
        let options = BatchOptions::default();
        assert!(options.keep_materials);
        assert!(options.strip_textures);
        assert!(options.metadata.is_empty());
        assert_eq!(options.converter, DEFAULT_CONVERTER);
    }
}
