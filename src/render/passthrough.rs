use super::Transform;

/// Identity transform, stands in until the host registers a real pipeline
pub struct Passthrough;

impl Transform for Passthrough {
    fn apply(&self, text: &str) -> String {
        text.to_string()
    }
}
