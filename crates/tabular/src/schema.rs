//! JSON schema configuration for constructing datasets.
//!
//! A schema file declares the storage mode and the column layout:
//!
//! ```json
//! {
//!   "mode": "matrix",
//!   "columns": [
//!     { "name": "size", "type": "integer" },
//!     { "name": "class", "type": "text", "value_space": ["spam", "ham"] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::column::Column;
use crate::dataset::{Dataset, DatasetMode};
use crate::value::ValueType;

/// Failure while loading a schema file.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed schema: {0}")]
    Json(#[from] serde_json::Error),
}

/// One column declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub value_space: Vec<String>,
}

/// Dataset layout loaded from a JSON schema file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaConfig {
    #[serde(default)]
    pub mode: DatasetMode,
    pub columns: Vec<ColumnSpec>,
}

impl SchemaConfig {
    /// Loads a schema from a JSON file.
    ///
    /// # Errors
    ///
    /// [`SchemaError::Io`] when the file cannot be read,
    /// [`SchemaError::Json`] when its content does not deserialize.
    pub fn from_path(path: impl AsRef<Path>) -> Result<SchemaConfig, SchemaError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Builds an empty dataset laid out per this schema.
    pub fn into_dataset(self) -> Dataset {
        let mut ds = Dataset::new(self.mode);
        for spec in self.columns {
            let space: Vec<&str> = spec.value_space.iter().map(String::as_str).collect();
            ds.push_column(Column::with_value_space(
                spec.value_type,
                &spec.name,
                &space,
            ));
        }
        ds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_schema_json() {
        let raw = r#"{
            "mode": "matrix",
            "columns": [
                { "name": "size", "type": "integer" },
                { "name": "class", "type": "text", "value_space": ["spam", "ham"] }
            ]
        }"#;
        let config: SchemaConfig = serde_json::from_str(raw).unwrap();

        assert_eq!(config.mode, DatasetMode::Matrix);
        assert_eq!(config.columns.len(), 2);
        assert_eq!(config.columns[0].value_type, ValueType::Integer);
        assert!(config.columns[0].value_space.is_empty());
        assert_eq!(config.columns[1].value_space, vec!["spam", "ham"]);
    }

    #[test]
    fn mode_defaults_to_matrix() {
        let raw = r#"{ "columns": [ { "name": "n", "type": "real" } ] }"#;
        let config: SchemaConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.mode, DatasetMode::Matrix);
    }

    #[test]
    fn round_trips_through_json() {
        let config = SchemaConfig {
            mode: DatasetMode::Rows,
            columns: vec![ColumnSpec {
                name: "class".to_owned(),
                value_type: ValueType::Text,
                value_space: vec!["+".to_owned(), "-".to_owned()],
            }],
        };
        let raw = serde_json::to_string(&config).unwrap();
        let parsed: SchemaConfig = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn builds_dataset_from_schema() {
        let config = SchemaConfig {
            mode: DatasetMode::Columns,
            columns: vec![
                ColumnSpec {
                    name: "size".to_owned(),
                    value_type: ValueType::Integer,
                    value_space: Vec::new(),
                },
                ColumnSpec {
                    name: "class".to_owned(),
                    value_type: ValueType::Text,
                    value_space: vec!["spam".to_owned(), "ham".to_owned()],
                },
            ],
        };

        let ds = config.into_dataset();
        assert_eq!(ds.mode(), DatasetMode::Columns);
        assert_eq!(ds.column_names(), vec!["size", "class"]);
        assert_eq!(ds.columns()[1].value_space(), ["spam", "ham"]);
    }

    #[test]
    fn from_path_reads_file() {
        let path = std::env::temp_dir().join("tabular-schema-test.json");
        fs::write(
            &path,
            r#"{"mode":"rows","columns":[{"name":"n","type":"integer"}]}"#,
        )
        .unwrap();
        let config = SchemaConfig::from_path(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.mode, DatasetMode::Rows);
        assert_eq!(config.columns[0].name, "n");

        assert!(matches!(
            SchemaConfig::from_path("/nonexistent/tabular-schema.json"),
            Err(SchemaError::Io(_))
        ));
    }
}
