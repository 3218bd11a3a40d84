#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Extractor configuration and skip/null/fail policies.
pub mod config;
/// Centralized constants for structure keys, defaults, and log messages.
pub mod constants;
/// Feature-collection document model and loading.
pub mod document;
/// Reusable demo runners shared by the demo binaries.
pub mod example_apps;
/// Property extraction over parsed documents.
pub mod extract;
/// Aggregate counts describing extraction passes.
pub mod metrics;
/// Output rendering for extracted value sequences.
pub mod render;
/// Shared type aliases.
pub mod types;

mod errors;

pub use config::{ExtractorConfig, MalformedPropertiesPolicy, MissingValuePolicy};
pub use document::{Document, ExtractedValue, Feature};
pub use errors::ExtractError;
pub use extract::{Extractor, extract, find_feature, property_keys};
pub use metrics::ExtractionReport;
pub use render::render_values;
pub use types::{DocumentLabel, FeatureIndex, PropertyKey};
