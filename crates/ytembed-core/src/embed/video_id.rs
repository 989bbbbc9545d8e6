//! Video-id extraction from watch URLs.

use super::error::EmbedError;

/// Extracts the YouTube video identifier from a watch URL.
///
/// Input that parses as an absolute URL takes the value of the last `v`
/// query parameter. Input that does not parse (e.g. a bare `watch?v=...`
/// fragment) falls back to a raw scan for the last `v=` occurrence, with
/// anything from the following `&` on dropped.
///
/// Returns [`EmbedError::MissingVideoParam`] when no `v` parameter is found
/// and [`EmbedError::EmptyVideoId`] when the parameter is present but empty.
pub fn video_id_from_watch_url(url: &str) -> Result<String, EmbedError> {
    let candidate = match url::Url::parse(url) {
        Ok(parsed) => last_v_query_value(&parsed),
        Err(_) => raw_scan_after_last_v(url),
    };

    match candidate {
        None => Err(EmbedError::MissingVideoParam {
            url: url.to_string(),
        }),
        Some(id) if id.is_empty() => Err(EmbedError::EmptyVideoId {
            url: url.to_string(),
        }),
        Some(id) => Ok(id),
    }
}

/// Value of the last `v` query parameter, if any.
fn last_v_query_value(parsed: &url::Url) -> Option<String> {
    let mut value = None;
    for (key, v) in parsed.query_pairs() {
        if key == "v" {
            value = Some(v.into_owned());
        }
    }
    value
}

/// Fallback for non-URL input: substring after the last `v=`, truncated at
/// the first `&`.
fn raw_scan_after_last_v(input: &str) -> Option<String> {
    let (_, after) = input.rsplit_once("v=")?;
    let id = match after.find('&') {
        Some(i) => &after[..i],
        None => after,
    };
    Some(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_url() {
        assert_eq!(
            video_id_from_watch_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
            Ok("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn trailing_parameters_dropped() {
        assert_eq!(
            video_id_from_watch_url("https://www.youtube.com/watch?v=abc&t=30s").as_deref(),
            Ok("abc")
        );
    }

    #[test]
    fn last_v_wins() {
        assert_eq!(
            video_id_from_watch_url("https://www.youtube.com/watch?ref=v=1&v=2").as_deref(),
            Ok("2")
        );
        assert_eq!(
            video_id_from_watch_url("https://www.youtube.com/watch?v=first&v=second").as_deref(),
            Ok("second")
        );
    }

    #[test]
    fn bare_fragment_falls_back_to_raw_scan() {
        assert_eq!(
            video_id_from_watch_url("watch?v=abc&t=30s").as_deref(),
            Ok("abc")
        );
        assert_eq!(video_id_from_watch_url("ref=v=1&v=2").as_deref(), Ok("2"));
    }

    #[test]
    fn missing_v_parameter() {
        assert_eq!(
            video_id_from_watch_url("https://www.youtube.com/playlist?list=PL1"),
            Err(EmbedError::MissingVideoParam {
                url: "https://www.youtube.com/playlist?list=PL1".to_string()
            })
        );
        assert!(matches!(
            video_id_from_watch_url("no video here"),
            Err(EmbedError::MissingVideoParam { .. })
        ));
    }

    #[test]
    fn empty_video_id() {
        assert!(matches!(
            video_id_from_watch_url("https://www.youtube.com/watch?v="),
            Err(EmbedError::EmptyVideoId { .. })
        ));
        assert!(matches!(
            video_id_from_watch_url("watch?v="),
            Err(EmbedError::EmptyVideoId { .. })
        ));
    }
}
