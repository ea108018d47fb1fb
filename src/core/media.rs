use crate::constants::VIDEO_SUFFIX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify by URL suffix alone; anything not ending in the video
    /// extension is an image.
    #[inline]
    pub fn from_src(src: &str) -> MediaKind {
        if src.to_ascii_lowercase().ends_with(VIDEO_SUFFIX) {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

/// One navigable entry of a lightbox group.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaItem {
    pub src: String,
    pub caption: String,
    pub kind: MediaKind,
}

impl MediaItem {
    pub fn new(src: impl Into<String>, caption: impl Into<String>) -> Self {
        let src = src.into();
        let kind = MediaKind::from_src(&src);
        Self {
            src,
            caption: caption.into(),
            kind,
        }
    }

    #[inline]
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// First non-empty candidate, in order of precedence; empty when none.
pub fn first_caption<I, S>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|c| !c.as_ref().is_empty())
        .map(|c| c.as_ref().to_string())
        .unwrap_or_default()
}
