//! File-based settings source.

use std::path::{Path, PathBuf};

use toml::{Table, Value};

use super::source::SettingsSource;
use super::{ConfigError, ConfigMap};

/// A settings source that loads a flat TOML table of recognized keys.
///
/// ```toml
/// GFAZPL_AZURE_CLOUD = "AzureCloud"
/// GFAZPL_MANAGED_IDENTITY_ENABLED = true
/// ```
///
/// Scalar values are converted to their string form, so `true` and `"true"`
/// mean the same thing. Files can be marked as required or optional.
/// Required files that don't exist cause an error; optional files that don't
/// exist, and files without any entries, are passed over.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    required: bool,
}

impl FileSource {
    /// Creates a new file source.
    ///
    /// If `required` is true, resolution fails if the file doesn't exist.
    pub fn new(path: impl AsRef<Path>, required: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required,
        }
    }
}

impl SettingsSource for FileSource {
    fn fetch(&self) -> Result<Option<ConfigMap>, ConfigError> {
        let Some(table) = load_settings_file(&self.path, self.required)? else {
            return Ok(None);
        };

        let map = table
            .into_iter()
            .map(|(key, value)| -> Result<(String, String), ConfigError> {
                let value = value_to_string(&value).ok_or_else(|| ConfigError::NonScalarValue {
                    path: self.path.clone(),
                    key: key.clone(),
                })?;
                Ok((key, value))
            })
            .collect::<Result<ConfigMap, ConfigError>>()?;

        Ok((!map.is_empty()).then_some(map))
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

/// Loads and parses a TOML settings file.
///
/// Returns `Ok(None)` if the file doesn't exist and `required` is false.
fn load_settings_file(path: &Path, required: bool) -> Result<Option<Table>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let table = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok(Some(table))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if required {
                Err(ConfigError::FileNotFound(path.to_path_buf()))
            } else {
                Ok(None)
            }
        }
        Err(e) => Err(ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Converts a scalar TOML value to its string representation.
fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Datetime(dt) => Some(dt.to_string()),
        Value::Array(_) | Value::Table(_) => None,
    }
}
