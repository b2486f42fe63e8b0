use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VideoUrlError {
    #[error("invalid video url: {0}")]
    Invalid(#[from] url::ParseError),

    #[error("video url must use http or https")]
    UnsupportedScheme,
}

/// Location of a hosted video lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoUrl(Url);

impl VideoUrl {
    /// # Errors
    ///
    /// Returns `VideoUrlError` if the input is not an absolute http(s) URL.
    pub fn parse(raw: &str) -> Result<Self, VideoUrlError> {
        let url = Url::parse(raw.trim())?;
        match url.scheme() {
            "http" | "https" => Ok(Self(url)),
            _ => Err(VideoUrlError::UnsupportedScheme),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// URL suitable for an embedded player.
    ///
    /// YouTube watch links (`watch?v=ID`, `youtu.be/ID`) become
    /// `https://www.youtube.com/embed/ID`; everything else is returned as is.
    #[must_use]
    pub fn embed_url(&self) -> String {
        self.youtube_id().map_or_else(
            || self.0.to_string(),
            |id| format!("https://www.youtube.com/embed/{id}"),
        )
    }

    fn youtube_id(&self) -> Option<String> {
        let host = self.0.host_str()?;
        let host = host.strip_prefix("www.").unwrap_or(host);
        let host = host.strip_prefix("m.").unwrap_or(host);
        match host {
            "youtube.com" if self.0.path() == "/watch" => self
                .0
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned())
                .filter(|id| !id.is_empty()),
            "youtu.be" => self
                .0
                .path_segments()
                .and_then(|mut segments| segments.next())
                .filter(|id| !id.is_empty())
                .map(str::to_owned),
            _ => None,
        }
    }
}

impl TryFrom<String> for VideoUrl {
    type Error = VideoUrlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<VideoUrl> for String {
    fn from(value: VideoUrl) -> Self {
        value.0.into()
    }
}
