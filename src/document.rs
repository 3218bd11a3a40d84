//! Feature-collection document model and loading.
//!
//! Interpretation is structural, not schema-validating: the loader depends
//! only on a top-level object carrying a `features` array, each element of
//! which may carry a `properties` object. Geometry values are carried
//! through untouched.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::constants::document::{
    FEATURES_KEY, FEATURE_COLLECTION_TYPE, GEOMETRY_KEY, IN_MEMORY_LABEL, PROPERTIES_KEY, TYPE_KEY,
};
use crate::errors::ExtractError;
use crate::types::DocumentLabel;

/// Value pulled from a feature's properties bag under the target key.
///
/// Scalars (typically strings) in practice, but structured values pass
/// through unchanged.
pub type ExtractedValue = Value;

/// One record in a feature collection: optional geometry plus optional
/// properties bag.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    /// Raw geometry value, never validated.
    pub geometry: Option<Value>,
    /// Raw properties value; an object in well-formed features.
    pub properties: Option<Value>,
}

impl Feature {
    /// The properties bag, when present and actually an object.
    pub fn properties_bag(&self) -> Option<&Map<String, Value>> {
        self.properties.as_ref().and_then(Value::as_object)
    }

    /// True when a properties value exists but is not an object.
    pub fn has_malformed_properties(&self) -> bool {
        matches!(&self.properties, Some(value) if !value.is_object())
    }

    /// Look up `key` in the properties bag.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties_bag().and_then(|bag| bag.get(key))
    }

    fn from_value(index: usize, value: Value) -> Self {
        match value {
            Value::Object(mut entry) => Self {
                geometry: entry.remove(GEOMETRY_KEY),
                properties: entry.remove(PROPERTIES_KEY),
            },
            other => {
                debug!(
                    index,
                    kind = json_kind(&other),
                    "feature entry is not an object; treating as featureless"
                );
                Self {
                    geometry: None,
                    properties: None,
                }
            }
        }
    }
}

/// Full in-memory parse of a feature-collection document.
///
/// Owns its features for the duration of the session; feature order is the
/// document's original order.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    /// Features in original document order.
    pub features: Vec<Feature>,
    label: DocumentLabel,
}

impl Document {
    /// Load and parse the document at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ExtractError> {
        let label = path.as_ref().display().to_string();
        let file = File::open(path.as_ref()).map_err(|source| ExtractError::Io {
            label: label.clone(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), label)
    }

    /// Parse a document from `reader`, labeling diagnostics with `label`.
    pub fn from_reader(
        reader: impl Read,
        label: impl Into<DocumentLabel>,
    ) -> Result<Self, ExtractError> {
        let label = label.into();
        let value = serde_json::from_reader(reader).map_err(|source| ExtractError::Decode {
            label: label.clone(),
            source,
        })?;
        Self::from_value(value, label)
    }

    /// Parse a document from in-memory JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self, ExtractError> {
        let value = serde_json::from_str(raw).map_err(|source| ExtractError::Decode {
            label: IN_MEMORY_LABEL.to_string(),
            source,
        })?;
        Self::from_value(value, IN_MEMORY_LABEL)
    }

    /// Interpret an already-parsed JSON value as a feature collection.
    pub fn from_value(value: Value, label: impl Into<DocumentLabel>) -> Result<Self, ExtractError> {
        let label = label.into();
        let Value::Object(mut root) = value else {
            return Err(ExtractError::Structure {
                label,
                details: "top-level value is not an object".to_string(),
            });
        };
        if let Some(doc_type) = root.get(TYPE_KEY).and_then(Value::as_str) {
            if doc_type != FEATURE_COLLECTION_TYPE {
                warn!(
                    document = %label,
                    doc_type,
                    "document type is not a feature collection"
                );
            }
        }
        let features_value = root.remove(FEATURES_KEY).ok_or_else(|| ExtractError::Structure {
            label: label.clone(),
            details: format!("missing top-level '{FEATURES_KEY}' member"),
        })?;
        let Value::Array(entries) = features_value else {
            return Err(ExtractError::Structure {
                label,
                details: format!("top-level '{FEATURES_KEY}' member is not an array"),
            });
        };
        let features = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| Feature::from_value(index, entry))
            .collect();
        Ok(Self { features, label })
    }

    /// Number of features in the document.
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Diagnostic label describing where this document came from.
    pub fn label(&self) -> &str {
        &self.label
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
