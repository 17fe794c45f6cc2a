//! src/model/media.rs
//! ============================================================================
//! # Media: Resolved Items and Their Kind
//!
//! A `MediaItem` is a resolved URL plus the values the viewer derives from it
//! exactly once: the display name and the `MediaKind`. Everything downstream
//! (thumbnails, lightbox element choice) matches on the kind instead of
//! re-inspecting the URL.

use std::fmt;

/// Extensions rendered with a video element.
pub const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "webm", "ogv"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Video iff the URL ends in a video extension, case-insensitively.
    /// Anything else, including no extension at all, is an image.
    pub fn from_url(url: &str) -> Self {
        let name = file_name(url);
        match name.rsplit_once('.') {
            Some((_, ext))
                if VIDEO_EXTENSIONS
                    .iter()
                    .any(|video| video.eq_ignore_ascii_case(ext)) =>
            {
                MediaKind::Video
            }
            _ => MediaKind::Image,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            MediaKind::Image => "▣",
            MediaKind::Video => "▶",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// How a grid card previews its item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thumbnail {
    /// Inline preview that plays silently on a loop, cropped to fill the card.
    Video {
        autoplay: bool,
        muted: bool,
        looping: bool,
        cover: bool,
    },
    /// Static preview fetched only when the card scrolls into view.
    Image { lazy: bool },
}

impl Thumbnail {
    pub fn for_kind(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Video => Thumbnail::Video {
                autoplay: true,
                muted: true,
                looping: true,
                cover: true,
            },
            MediaKind::Image => Thumbnail::Image { lazy: true },
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Thumbnail::Video { .. } => "preview · muted loop",
            Thumbnail::Image { .. } => "still · lazy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub url: String,
    pub name: String,
    pub kind: MediaKind,
}

impl MediaItem {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let name = file_name(&url).to_string();
        let kind = MediaKind::from_url(&url);
        Self { url, name, kind }
    }

    pub fn thumbnail(&self) -> Thumbnail {
        Thumbnail::for_kind(self.kind)
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// Last `/`-separated segment of a path or URL.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_takes_last_segment() {
        assert_eq!(file_name("images/100 (3).png"), "100 (3).png");
        assert_eq!(file_name("100 (3).png"), "100 (3).png");
        assert_eq!(file_name("https://host/a/b/100 (1).mp4"), "100 (1).mp4");
    }

    #[test]
    fn kind_is_derived_from_extension() {
        assert_eq!(MediaKind::from_url("images/100 (1).mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_url("images/100 (1).WEBM"), MediaKind::Video);
        assert_eq!(MediaKind::from_url("images/100 (1).ogv"), MediaKind::Video);
        assert_eq!(MediaKind::from_url("images/100 (1).gif"), MediaKind::Image);
        assert_eq!(MediaKind::from_url("images/100 (1).svg"), MediaKind::Image);
        assert_eq!(MediaKind::from_url("images/noext"), MediaKind::Image);
    }

    #[test]
    fn directory_dots_do_not_count_as_extension() {
        assert_eq!(MediaKind::from_url("clips.mp4/still"), MediaKind::Image);
    }

    #[test]
    fn thumbnails_follow_kind() {
        let video = MediaItem::new("images/100 (2).mp4");
        assert_eq!(
            video.thumbnail(),
            Thumbnail::Video {
                autoplay: true,
                muted: true,
                looping: true,
                cover: true
            }
        );

        let image = MediaItem::new("images/100 (2).png");
        assert_eq!(image.thumbnail(), Thumbnail::Image { lazy: true });
        assert_eq!(image.name, "100 (2).png");
    }
}
