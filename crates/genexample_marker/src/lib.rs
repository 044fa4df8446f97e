// crates/genexample_marker/src/lib.rs

//! Markers and defaults shared by the example‑to‑Markdown tool‑chain.

/// First‑line token that opts a source file into page generation.
pub const GENEXAMPLE_MARKER: &str = "//genexample";

/// Single‑line comment prefix. Lines starting with it become prose.
pub const COMMENT_PREFIX: &str = "//";

/// Language tag written after the opening fence.
pub const DEFAULT_LANGUAGE: &str = "c";

/// Extension of the annotated example sources.
pub const DEFAULT_SOURCE_EXTENSION: &str = "c";

/// Extension of the optional companion screenshot.
pub const DEFAULT_IMAGE_EXTENSION: &str = "png";

/// Extension of the generated pages.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Returns `true` if `line` (usually the first line of a file) carries the
/// generation marker. Surrounding whitespace is ignored.
pub fn is_marker_line(line: &str) -> bool {
    line.trim().starts_with(GENEXAMPLE_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_exact() {
        assert!(is_marker_line("//genexample"));
        assert!(is_marker_line("//genexample\n"));
    }

    #[test]
    fn test_marker_with_whitespace() {
        assert!(is_marker_line("   //genexample  \r\n"));
    }

    #[test]
    fn test_not_a_marker() {
        assert!(!is_marker_line("// genexample"));
        assert!(!is_marker_line("#include <stdio.h>"));
        assert!(!is_marker_line(""));
    }
}
