use regex::Regex;
use std::sync::OnceLock;

/// What kind of page a note is generated from. The backend pulls a transcript
/// for videos and scrapes everything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UrlSource {
    YouTube,
    WebPage,
}

impl UrlSource {
    pub fn classify(url: &str) -> Self {
        static RE_YOUTUBE: OnceLock<Regex> = OnceLock::new();
        let re_youtube = RE_YOUTUBE.get_or_init(|| {
            Regex::new(r"(https?://)?(www\.)?(youtube\.com|youtu\.be)/")
                .expect("valid youtube url regex")
        });

        if re_youtube.is_match(url) {
            Self::YouTube
        } else {
            Self::WebPage
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::YouTube => "YouTube video",
            Self::WebPage => "web page",
        }
    }
}

/// Video id from `watch?v=<id>` or `youtu.be/<id>` urls.
pub fn youtube_video_id(url: &str) -> Option<&str> {
    if let Some((_, rest)) = url.split_once("youtu.be/") {
        let id = rest.split(['?', '&', '#', '/']).next().unwrap_or_default();
        return (!id.is_empty()).then_some(id);
    }

    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("v="))
        .filter(|id| !id.is_empty())
}
