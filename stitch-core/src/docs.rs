//! Extraction of structured documentation from fragment comment headers.
//!
//! Fragments open with a short `//` comment block describing the function.
//! This module turns that convention into structured data by plain text
//! scanning — it does not parse the shading language.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::parser::REQUIRES_MARKER;
use crate::registry::FunctionEntry;

/// Structured documentation for one registered function.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FunctionDoc {
    /// Function name.
    pub name: String,
    /// Category the function is registered under.
    pub category: String,
    /// Prose from the leading comment block, joined into one line. Empty if
    /// the fragment carries no header comment.
    pub summary: String,
    /// The first `fn` line of the fragment, trailing brace stripped. Empty
    /// if the fragment contains no `fn` line.
    pub signature: String,
    /// Declared direct dependencies, in declared order.
    pub requires: Vec<String>,
}

/// Extracts documentation for a single entry.
///
/// The summary is gathered from the leading `//` comment lines; the
/// `// requires:` marker line is skipped, and gathering stops at the first
/// line that is neither a comment nor blank. The signature is the first
/// `fn` line with any trailing `{` removed.
pub fn document_entry(entry: &FunctionEntry) -> FunctionDoc {
    let mut summary_lines: Vec<&str> = Vec::new();
    let mut signature = String::new();
    let mut in_header = true;

    for line in entry.source().lines() {
        let trimmed = line.trim();
        if in_header {
            if trimmed.is_empty() || trimmed.starts_with(REQUIRES_MARKER) {
                continue;
            }
            if let Some(comment) = trimmed.strip_prefix("//") {
                let text = comment.trim();
                if !text.is_empty() {
                    summary_lines.push(text);
                }
                continue;
            }
            in_header = false;
        }
        if trimmed.starts_with("fn ") {
            signature = trimmed.trim_end_matches('{').trim_end().to_owned();
            break;
        }
    }

    FunctionDoc {
        name: entry.name().to_owned(),
        category: entry.category().to_owned(),
        summary: summary_lines.join(" "),
        signature,
        requires: entry.dependencies().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Category, FunctionDef, ShaderRegistry};

    fn entry_for(source: &'static str) -> ShaderRegistry {
        ShaderRegistry::from_categories(&[Category {
            name: "fixture",
            functions: Box::leak(Box::new([FunctionDef {
                name: "subject",
                source,
            }])),
        }])
        .expect("fixture registry should build")
    }

    #[test]
    fn summary_and_signature_are_extracted() {
        let registry = entry_for(
            "// Distance falloff for spot lights.\n// Smooth between the cone angles.\n// requires: linear_step\nfn spot_falloff(angle: f32) -> f32 {\n    return linear_step(0.2, 0.4, angle);\n}\n",
        );
        let entry = registry.lookup("subject").expect("subject exists");
        let doc = document_entry(entry);

        assert_eq!(
            doc.summary,
            "Distance falloff for spot lights. Smooth between the cone angles."
        );
        assert_eq!(doc.signature, "fn spot_falloff(angle: f32) -> f32");
        assert_eq!(doc.requires, ["linear_step".to_owned()]);
        assert_eq!(doc.category, "fixture");
    }

    #[test]
    fn body_comments_are_not_collected() {
        let registry = entry_for(
            "// Header line.\nfn subject() -> f32 {\n    // body comment, not part of the summary\n    return 0.0;\n}\n",
        );
        let entry = registry.lookup("subject").expect("subject exists");
        let doc = document_entry(entry);
        assert_eq!(doc.summary, "Header line.");
    }

    #[test]
    fn missing_header_yields_empty_summary() {
        let registry = entry_for("fn subject() -> f32 {\n    return 0.0;\n}\n");
        let entry = registry.lookup("subject").expect("subject exists");
        let doc = document_entry(entry);
        assert!(doc.summary.is_empty());
        assert_eq!(doc.signature, "fn subject() -> f32");
    }
}
