/// Constants used by document structure interpretation.
pub mod document {
    /// Top-level member holding the ordered feature array.
    pub const FEATURES_KEY: &str = "features";
    /// Per-feature member holding the properties bag.
    pub const PROPERTIES_KEY: &str = "properties";
    /// Per-feature member holding the raw geometry value.
    pub const GEOMETRY_KEY: &str = "geometry";
    /// Top-level member naming the document type.
    pub const TYPE_KEY: &str = "type";
    /// Document type name for feature collections. A different name is
    /// logged, not rejected.
    pub const FEATURE_COLLECTION_TYPE: &str = "FeatureCollection";
    /// Origin label used for documents parsed from memory rather than a file.
    pub const IN_MEMORY_LABEL: &str = "<memory>";
}

/// Constants used by extraction defaults and skip diagnostics.
pub mod extract {
    /// Property key used when a caller does not name one.
    pub const DEFAULT_PROPERTY_KEY: &str = "circo_na_1";
    /// Log message used when a feature without the target value is skipped.
    pub const SKIP_MISSING_MSG: &str = "skipping feature without target property";
    /// Log message used when a non-object properties value is skipped.
    pub const SKIP_MALFORMED_MSG: &str = "skipping feature with non-object properties";
}
