//! Property extraction over parsed documents.
//!
//! One linear pass in document order. Inclusion is gated by a two-part
//! membership check (a properties bag exists, the target key exists within
//! it) under the configured policies. No sorting, aggregation, or
//! deduplication.

use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{ExtractorConfig, MalformedPropertiesPolicy, MissingValuePolicy};
use crate::constants::extract::{SKIP_MALFORMED_MSG, SKIP_MISSING_MSG};
use crate::document::{Document, ExtractedValue};
use crate::errors::ExtractError;
use crate::metrics::ExtractionReport;
use crate::types::{FeatureIndex, PropertyKey};

/// Extracts one named property value per feature from a document.
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create an extractor from a full configuration.
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Create an extractor targeting `key` with default policies.
    pub fn with_key(key: impl Into<PropertyKey>) -> Self {
        Self::new(ExtractorConfig::new(key))
    }

    /// The active configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Read, parse, and extract from the document at `path` in one pass.
    pub fn extract_path(&self, path: impl AsRef<Path>) -> Result<Vec<ExtractedValue>, ExtractError> {
        let document = Document::from_path(path)?;
        self.extract_document(&document)
    }

    /// Extract from an already-parsed document.
    pub fn extract_document(
        &self,
        document: &Document,
    ) -> Result<Vec<ExtractedValue>, ExtractError> {
        self.extract_report(document).map(|(values, _)| values)
    }

    /// Same pass as [`Extractor::extract_document`], also returning
    /// per-disposition counts.
    pub fn extract_report(
        &self,
        document: &Document,
    ) -> Result<(Vec<ExtractedValue>, ExtractionReport), ExtractError> {
        let mut values = Vec::with_capacity(document.feature_count());
        let mut report = ExtractionReport::default();
        for (index, feature) in document.features.iter().enumerate() {
            report.features += 1;
            let malformed = feature.has_malformed_properties();
            if malformed {
                if self.config.malformed_properties == MalformedPropertiesPolicy::Fail {
                    return Err(ExtractError::MalformedProperties { index });
                }
                warn!(document = %document.label(), index, SKIP_MALFORMED_MSG);
                report.malformed_properties += 1;
            }
            let bag = feature.properties_bag();
            if let Some(value) = bag.and_then(|bag| bag.get(&self.config.key)) {
                report.extracted += 1;
                values.push(value.clone());
                continue;
            }
            if !malformed {
                if bag.is_none() {
                    report.missing_properties += 1;
                } else {
                    report.missing_key += 1;
                }
            }
            match self.config.missing {
                MissingValuePolicy::Skip => {
                    debug!(
                        document = %document.label(),
                        index,
                        key = %self.config.key,
                        SKIP_MISSING_MSG
                    );
                }
                MissingValuePolicy::Null => {
                    report.placeholders += 1;
                    values.push(Value::Null);
                }
                MissingValuePolicy::Fail => {
                    return Err(ExtractError::MissingValue {
                        index,
                        key: self.config.key.clone(),
                    });
                }
            }
        }
        Ok((values, report))
    }
}

/// Extract `key` from every feature of the document at `path`.
///
/// Uses default policies: features without a bag or without the key are
/// silently skipped, non-object properties values are treated as no bag.
pub fn extract(
    path: impl AsRef<Path>,
    key: impl Into<PropertyKey>,
) -> Result<Vec<ExtractedValue>, ExtractError> {
    Extractor::with_key(key).extract_path(path)
}

/// Index of the first feature whose `key` value equals `value`, in document
/// order.
pub fn find_feature(document: &Document, key: &str, value: &Value) -> Option<FeatureIndex> {
    document
        .features
        .iter()
        .position(|feature| feature.property(key) == Some(value))
}

/// Per-key occurrence counts across all property bags, first-seen order
/// preserved.
pub fn property_keys(document: &Document) -> IndexMap<PropertyKey, usize> {
    let mut counts: IndexMap<PropertyKey, usize> = IndexMap::new();
    for feature in &document.features {
        if let Some(bag) = feature.properties_bag() {
            for key in bag.keys() {
                *counts.entry(key.clone()).or_insert(0) += 1;
            }
        }
    }
    counts
}
