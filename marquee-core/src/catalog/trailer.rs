use crate::providers::dto::TmdbVideo;

pub const TRAILER_SITE: &str = "YouTube";
pub const TRAILER_TYPE: &str = "Trailer";
pub const TRAILER_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Key of the first YouTube trailer, in upstream order. No ranking beyond
/// position: teasers, clips and other sites are skipped.
pub fn resolve_trailer_key(videos: &[TmdbVideo]) -> Option<&str> {
    videos
        .iter()
        .find(|video| {
            video.site.as_deref() == Some(TRAILER_SITE)
                && video.kind.as_deref() == Some(TRAILER_TYPE)
        })
        .and_then(|video| video.key.as_deref())
        .filter(|key| !key.is_empty())
}

pub fn trailer_url(key: &str) -> String {
    format!("{TRAILER_WATCH_URL}{key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(key: &str, site: &str, kind: &str) -> TmdbVideo {
        TmdbVideo {
            key: Some(key.into()),
            site: Some(site.into()),
            kind: Some(kind.into()),
        }
    }

    #[test]
    fn first_youtube_trailer_wins() {
        let videos = vec![
            video("teaser", "YouTube", "Teaser"),
            video("vimeo", "Vimeo", "Trailer"),
            video("first", "YouTube", "Trailer"),
            video("second", "YouTube", "Trailer"),
        ];

        assert_eq!(resolve_trailer_key(&videos), Some("first"));
    }

    #[test]
    fn no_match_yields_none() {
        let videos = vec![video("clip", "YouTube", "Clip")];
        assert_eq!(resolve_trailer_key(&videos), None);
        assert_eq!(resolve_trailer_key(&[]), None);
    }

    #[test]
    fn builds_watch_url() {
        assert_eq!(
            trailer_url("vKQi3bBA1y8"),
            "https://www.youtube.com/watch?v=vKQi3bBA1y8"
        );
    }
}
