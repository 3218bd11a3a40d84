use std::io;

use thiserror::Error;

use crate::types::{DocumentLabel, FeatureIndex, PropertyKey};

/// Error type for document loading, structure, and extraction failures.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed reading document '{label}': {source}")]
    Io {
        label: DocumentLabel,
        #[source]
        source: io::Error,
    },
    #[error("document '{label}' is not well-formed JSON: {source}")]
    Decode {
        label: DocumentLabel,
        #[source]
        source: serde_json::Error,
    },
    #[error("document '{label}' has invalid structure: {details}")]
    Structure {
        label: DocumentLabel,
        details: String,
    },
    #[error("feature {index} has a properties value that is not an object")]
    MalformedProperties { index: FeatureIndex },
    #[error("feature {index} has no value for property '{key}'")]
    MissingValue {
        index: FeatureIndex,
        key: PropertyKey,
    },
}
