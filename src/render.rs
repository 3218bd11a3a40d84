//! Output rendering for extracted value sequences.

use crate::document::ExtractedValue;

/// Render the sequence as a compact one-line JSON array.
/// Example: `["Tunis","Ariana","Sfax"]`
pub fn render_values(values: &[ExtractedValue]) -> String {
    let mut out = String::from("[");
    for (idx, value) in values.iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        out.push_str(&value.to_string());
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_sequence_renders_as_empty_array() {
        assert_eq!(render_values(&[]), "[]");
    }

    #[test]
    fn string_values_render_as_json_strings() {
        let values = vec![json!("Tunis"), json!("Ariana"), json!("Sfax")];
        assert_eq!(render_values(&values), r#"["Tunis","Ariana","Sfax"]"#);
    }

    #[test]
    fn mixed_scalars_render_in_order() {
        let values = vec![json!("Tunis"), json!(7), json!(null)];
        assert_eq!(render_values(&values), r#"["Tunis",7,null]"#);
    }
}
