use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

//
// ─── ERRORS (domain validation) ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaValidationError {
    #[error("Media URI cannot be empty.")]
    EmptyMediaUri,

    #[error("Media URL is not valid: {0}")]
    InvalidUrl(String),
}

//
// ─── MEDIA URI ─────────────────────────────────────────────────────────────────
//

/// Location of an image, video or thumbnail.
///
/// Serialized as a single string: absolute URLs become `Url`, anything else
/// (relative paths, bundled asset names) stays a `FilePath`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MediaUri {
    FilePath(PathBuf),
    Url(Url),
}

impl MediaUri {
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, MediaValidationError> {
        let p = path.into();
        if p.as_os_str().is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        Ok(MediaUri::FilePath(p))
    }

    pub fn from_url(url: impl AsRef<str>) -> Result<Self, MediaValidationError> {
        let s = url.as_ref().trim();
        if s.is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        let u = Url::parse(s).map_err(|_| MediaValidationError::InvalidUrl(s.to_string()))?;
        Ok(MediaUri::Url(u))
    }

    /// Picks `Url` when the input parses as an absolute URL, `FilePath` otherwise.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, MediaValidationError> {
        let s = raw.as_ref().trim();
        if s.is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        match Url::parse(s) {
            // Single-letter schemes are Windows drive letters, not URLs.
            Ok(u) if u.scheme().len() > 1 => Ok(MediaUri::Url(u)),
            _ => Self::from_file(s),
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            MediaUri::FilePath(p) => Some(p.as_path()),
            MediaUri::Url(_) => None,
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        match self {
            MediaUri::Url(u) => Some(u),
            MediaUri::FilePath(_) => None,
        }
    }
}

impl fmt::Display for MediaUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaUri::FilePath(p) => write!(f, "{}", p.display()),
            MediaUri::Url(u) => f.write_str(u.as_str()),
        }
    }
}

impl TryFrom<String> for MediaUri {
    type Error = MediaValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<MediaUri> for String {
    fn from(value: MediaUri) -> Self {
        value.to_string()
    }
}

//
// ─── IMAGE / VIDEO PAYLOADS ────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageContent {
    pub url: MediaUri,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl ImageContent {
    #[must_use]
    pub fn new(url: MediaUri) -> Self {
        Self {
            url,
            caption: None,
            alt: None,
        }
    }

    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoContent {
    pub url: MediaUri,
    /// Display label such as "12:30".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl VideoContent {
    #[must_use]
    pub fn new(url: MediaUri) -> Self {
        Self {
            url,
            duration: None,
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Embed URL for videos on a known hosting site, `None` for anything that
    /// should play in a native player.
    #[must_use]
    pub fn embed_url(&self) -> Option<String> {
        self.url.as_url().and_then(embed_url_for)
    }
}

//
// ─── VIDEO HOSTS ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoHost {
    YouTube,
    Vimeo,
}

impl VideoHost {
    #[must_use]
    pub fn detect(url: &Url) -> Option<Self> {
        let host = url.host_str()?.to_ascii_lowercase();
        let host = host.strip_prefix("www.").unwrap_or(&host);
        match host {
            "youtube.com" | "m.youtube.com" | "youtu.be" | "youtube-nocookie.com" => {
                Some(Self::YouTube)
            }
            "vimeo.com" | "player.vimeo.com" => Some(Self::Vimeo),
            _ => None,
        }
    }
}

fn embed_url_for(url: &Url) -> Option<String> {
    let host = VideoHost::detect(url)?;
    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    let video_id = match host {
        VideoHost::YouTube => {
            if url.host_str() == Some("youtu.be") {
                segments.first().map(|s| (*s).to_string())
            } else {
                match segments.as_slice() {
                    ["watch", ..] => url
                        .query_pairs()
                        .find(|(k, _)| k == "v")
                        .map(|(_, v)| v.into_owned()),
                    ["embed" | "shorts" | "live", id, ..] => Some((*id).to_string()),
                    _ => None,
                }
            }
        }
        VideoHost::Vimeo => segments
            .iter()
            .rev()
            .find(|seg| seg.chars().all(|c| c.is_ascii_digit()))
            .map(|s| (*s).to_string()),
    }
    .filter(|id| !id.is_empty())?;

    Some(match host {
        VideoHost::YouTube => format!("https://www.youtube.com/embed/{video_id}"),
        VideoHost::Vimeo => format!("https://player.vimeo.com/video/{video_id}"),
    })
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
