/// Name of a property looked up inside a feature's properties bag.
/// Example: `circo_na_1`
pub type PropertyKey = String;
/// Human-readable origin label for a document, used in diagnostics.
/// Examples: `data/tunisia.geojson`, `<memory>`
pub type DocumentLabel = String;
/// Zero-based position of a feature within the document's features array.
pub type FeatureIndex = usize;
