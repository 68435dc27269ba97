use std::fmt::Write;

use crate::models::Label;

/// Render labels as one `Category: .., Confidence: ..` line each, in the given order
pub fn format_labels(labels: &[Label]) -> String {
    let mut out = String::new();
    for label in labels {
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "Category: {}, Confidence: {}",
            label.text, label.confidence
        );
    }
    out
}
