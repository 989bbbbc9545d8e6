//! Locating shortcode markers in page text.

/// One `{% youtube <url> %}` occurrence in a document.
#[derive(Debug, PartialEq, Eq)]
pub struct Shortcode<'a> {
    /// Byte offset of the opening `{%`.
    pub start: usize,
    /// Byte offset just past the closing `%}`.
    pub end: usize,
    /// URL argument with surrounding quotes removed.
    pub url: &'a str,
}

const OPEN: &str = "{%";
const CLOSE: &str = "%}";
const TAG: &str = "youtube";

/// Finds the first youtube shortcode in `text`.
///
/// Markers with another tag or a body that is not exactly `youtube <arg>`
/// are skipped; an unclosed `{%` ends the scan.
pub fn next_shortcode(text: &str) -> Option<Shortcode<'_>> {
    let mut from = 0;
    while let Some(open_rel) = text[from..].find(OPEN) {
        let open = from + open_rel;
        let body_start = open + OPEN.len();
        let close_rel = text[body_start..].find(CLOSE)?;
        let close = body_start + close_rel;
        let end = close + CLOSE.len();

        if let Some(url) = parse_body(&text[body_start..close]) {
            return Some(Shortcode {
                start: open,
                end,
                url,
            });
        }
        from = end;
    }
    None
}

/// URL argument if `body` is exactly `youtube <arg>`.
fn parse_body(body: &str) -> Option<&str> {
    let mut tokens = body.split_whitespace();
    if tokens.next() != Some(TAG) {
        return None;
    }
    let arg = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }
    Some(unquote(arg))
}

/// Strips one layer of matching single or double quotes.
fn unquote(arg: &str) -> &str {
    for quote in ['"', '\''] {
        if arg.len() >= 2 && arg.starts_with(quote) && arg.ends_with(quote) {
            return &arg[1..arg.len() - 1];
        }
    }
    arg
}
