//! Shortcode expansion for authored page sources.
//!
//! Replaces `{% youtube <url> %}` markers with the rendered iframe fragment,
//! leaving all surrounding text untouched.

mod scan;

pub use scan::{next_shortcode, Shortcode};

use anyhow::{Context, Result};
use std::path::Path;

use crate::embed::{embed_snippet_with, EmbedOptions};

/// Expands every youtube shortcode in `input`.
///
/// Markers with another tag or a malformed body are left verbatim. A marker
/// whose URL yields no video id aborts the expansion with the offending URL
/// in the error context.
pub fn expand_document(input: &str, options: &EmbedOptions) -> Result<String> {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(sc) = next_shortcode(rest) {
        out.push_str(&rest[..sc.start]);
        let snippet = embed_snippet_with(sc.url, options)
            .with_context(|| format!("expand youtube shortcode for `{}`", sc.url))?;
        tracing::debug!("expanded youtube shortcode for {}", sc.url);
        out.push_str(&snippet);
        rest = &rest[sc.end..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Reads a page source from `path` and expands its shortcodes.
pub fn expand_file(path: &Path, options: &EmbedOptions) -> Result<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read page source: {}", path.display()))?;
    expand_document(&text, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_single_marker() {
        let input = "before {% youtube https://www.youtube.com/watch?v=abc %} after";
        let out = expand_document(input, &EmbedOptions::default()).unwrap();
        assert!(out.starts_with("before <iframe"));
        assert!(out.ends_with("></iframe> after"));
        assert!(out.contains(r#"src="https://www.youtube.com/embed/abc""#));
    }

    #[test]
    fn expands_multiple_markers() {
        let input = "{% youtube https://www.youtube.com/watch?v=one %}\n\n{% youtube https://www.youtube.com/watch?v=two %}\n";
        let out = expand_document(input, &EmbedOptions::default()).unwrap();
        assert!(out.contains(r#"src="https://www.youtube.com/embed/one""#));
        assert!(out.contains(r#"src="https://www.youtube.com/embed/two""#));
        assert!(!out.contains("{%"));
    }

    #[test]
    fn quoted_url_argument() {
        let input = r#"{% youtube "https://www.youtube.com/watch?v=abc&t=30s" %}"#;
        let out = expand_document(input, &EmbedOptions::default()).unwrap();
        assert!(out.contains(r#"src="https://www.youtube.com/embed/abc""#));
    }

    #[test]
    fn other_tags_left_verbatim() {
        let input = "{% image cat.png %} and {% youtube https://www.youtube.com/watch?v=abc %}";
        let out = expand_document(input, &EmbedOptions::default()).unwrap();
        assert!(out.starts_with("{% image cat.png %} and <iframe"));
    }

    #[test]
    fn document_without_markers_unchanged() {
        let input = "plain text, no markers at all\n";
        let out = expand_document(input, &EmbedOptions::default()).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn bad_url_aborts_with_context() {
        let input = "{% youtube not-a-watch-url %}";
        let err = expand_document(input, &EmbedOptions::default()).unwrap_err();
        assert!(format!("{err:#}").contains("not-a-watch-url"));
    }
}
