//! YouTube embed-snippet generation.
//!
//! Turns a watch URL into an `<iframe>` HTML fragment by extracting the
//! video id from the `v=` query parameter and interpolating it into the
//! player markup.

mod error;
mod escape;
mod render;
mod video_id;

pub use error::EmbedError;
pub use escape::escape_attribute;
pub use render::{render_iframe, EmbedOptions};
pub use video_id::video_id_from_watch_url;

/// Converts a YouTube watch URL into an iframe embed fragment with the
/// default player attributes.
///
/// # Examples
///
/// - `embed_snippet("https://www.youtube.com/watch?v=dQw4w9WgXcQ")` yields a
///   fragment whose `src` is `https://www.youtube.com/embed/dQw4w9WgXcQ`
/// - `embed_snippet("https://www.youtube.com/playlist?list=PL1")` fails with
///   [`EmbedError::MissingVideoParam`]
pub fn embed_snippet(url: &str) -> Result<String, EmbedError> {
    embed_snippet_with(url, &EmbedOptions::default())
}

/// Same as [`embed_snippet`] but with caller-provided player attributes.
pub fn embed_snippet_with(url: &str, options: &EmbedOptions) -> Result<String, EmbedError> {
    let video_id = video_id_from_watch_url(url)?;
    Ok(render_iframe(&video_id, options))
}
