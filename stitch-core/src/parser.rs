//! Extraction of declared dependencies from fragment source text.
//!
//! A fragment declares the functions it calls with a single marker line,
//! e.g. `// requires: hash21 linear_step`. The marker reads as an ordinary
//! comment to shading-language tooling and is kept verbatim in assembled
//! output; the parsed name list is what the resolver walks.

/// Marker prefix that introduces a dependency declaration line.
pub const REQUIRES_MARKER: &str = "// requires:";

/// Parses the declared direct dependencies out of `source`.
///
/// Scans for the first line whose trimmed form starts with
/// [`REQUIRES_MARKER`] and splits the remainder of that line on whitespace,
/// discarding empty tokens and preserving declared order (declared order is
/// what the resolver recurses in). Returns an empty list when no marker line
/// is present, or when the marker carries no names after the keyword — a
/// bare marker is treated as "no dependencies", not as an error.
pub fn parse_dependencies(source: &str) -> Vec<String> {
    for line in source.lines() {
        if let Some(rest) = line.trim_start().strip_prefix(REQUIRES_MARKER) {
            return rest.split_whitespace().map(str::to_owned).collect();
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_marker_yields_empty_list() {
        let source = "fn plain() -> f32 {\n    return 1.0;\n}\n";
        assert!(parse_dependencies(source).is_empty());
    }

    #[test]
    fn single_dependency_is_parsed() {
        let source = "// requires: hash21\nfn noisy() -> f32 {\n    return hash21(vec2<f32>(0.0));\n}\n";
        assert_eq!(parse_dependencies(source), vec!["hash21".to_owned()]);
    }

    #[test]
    fn multiple_dependencies_keep_declared_order() {
        let source = "// requires: ggx smith fresnel\nfn brdf() -> f32 {\n    return 0.0;\n}\n";
        assert_eq!(
            parse_dependencies(source),
            vec!["ggx".to_owned(), "smith".to_owned(), "fresnel".to_owned()]
        );
    }

    #[test]
    fn marker_after_description_comment_is_found() {
        let source = "// Blends two values.\n// requires: linear_step\nfn blend() -> f32 {\n    return 0.0;\n}\n";
        assert_eq!(parse_dependencies(source), vec!["linear_step".to_owned()]);
    }

    #[test]
    fn bare_marker_is_treated_as_no_dependencies() {
        let source = "// requires:\nfn lonely() -> f32 {\n    return 0.0;\n}\n";
        assert!(parse_dependencies(source).is_empty());
    }

    #[test]
    fn extra_whitespace_between_names_is_ignored() {
        let source = "// requires:   a    b\t c\nfn f() -> f32 {\n    return 0.0;\n}\n";
        assert_eq!(
            parse_dependencies(source),
            vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]
        );
    }

    #[test]
    fn only_first_marker_line_counts() {
        let source = "// requires: first\n// requires: second\nfn f() -> f32 {\n    return 0.0;\n}\n";
        assert_eq!(parse_dependencies(source), vec!["first".to_owned()]);
    }

    #[test]
    fn indented_marker_is_recognized() {
        let source = "    // requires: helper\nfn f() -> f32 {\n    return 0.0;\n}\n";
        assert_eq!(parse_dependencies(source), vec!["helper".to_owned()]);
    }
}
