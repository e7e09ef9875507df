use url::Url;

use crate::config::VIDEO_PLACEHOLDER_IMAGE;

/// Extracts the video id from a YouTube link.
///
/// Accepts `youtube.com/watch?v=<id>` and `youtu.be/<id>` links.
pub fn youtube_id(link: &str) -> Option<String> {
    let url = Url::parse(link.trim()).ok()?;
    let host = url.host_str()?.trim_start_matches("www.").trim_start_matches("m.");
    let id = match host {
        "youtu.be" => url.path_segments()?.next().map(str::to_string),
        "youtube.com" => url
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned()),
        _ => None,
    }?;
    (!id.is_empty()).then_some(id)
}

/// Thumbnail for a video card. Links that cannot be parsed get a placeholder.
pub fn thumbnail_url(link: &str) -> String {
    match youtube_id(link) {
        Some(id) => format!("https://img.youtube.com/vi/{}/hqdefault.jpg", id),
        None => VIDEO_PLACEHOLDER_IMAGE.to_string(),
    }
}
