//! Error type for embed-snippet generation.

use thiserror::Error;

/// Failure to derive a video identifier from a watch URL.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmbedError {
    /// The URL carries no `v=` query parameter to take the video id from.
    #[error("no `v=` parameter in `{url}`; expected a YouTube watch URL")]
    MissingVideoParam { url: String },

    /// A `v=` parameter is present but its value is empty.
    #[error("empty video id in `{url}`")]
    EmptyVideoId { url: String },
}
