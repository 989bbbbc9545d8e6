//! Iframe markup rendering.

use super::escape::escape_attribute;

/// Base URL the video id is appended to in the iframe `src`.
const EMBED_BASE_URL: &str = "https://www.youtube.com/embed/";

/// Iframe features the embedded player is allowed to use.
const ALLOW_FEATURES: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Player attributes for a rendered embed fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedOptions {
    /// Iframe width in pixels.
    pub width: u32,
    /// Iframe height in pixels.
    pub height: u32,
    /// Iframe `title` attribute.
    pub title: String,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            width: 560,
            height: 315,
            title: "YouTube video player".to_string(),
        }
    }
}

/// Renders the `<iframe>` fragment for a video id.
///
/// The id and title are attribute-escaped; everything else is fixed markup.
pub fn render_iframe(video_id: &str, options: &EmbedOptions) -> String {
    format!(
        r#"<iframe
    width="{width}"
    height="{height}"
    src="{base}{id}"
    title="{title}"
    frameborder="0"
    allow="{allow}"
    allowfullscreen
  ></iframe>"#,
        width = options.width,
        height = options.height,
        base = EMBED_BASE_URL,
        id = escape_attribute(video_id),
        title = escape_attribute(&options.title),
        allow = ALLOW_FEATURES,
    )
}
