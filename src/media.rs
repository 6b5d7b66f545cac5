use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::projects::ProjectCard;

/// Width/height of the crop box used for card and hero media.
pub const ASPECT_RATIO: (u32, u32) = (16, 9);

/// Videos always play the bundled garden loop, whatever `mediaSrc` says.
pub const VIDEO_SOURCES: &[VideoSource] = &[
    VideoSource {
        src: "/project-garden.webm",
        mime: "video/webm",
    },
    VideoSource {
        src: "/project-garden.mp4",
        mime: "video/mp4",
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

impl FromStr for MediaType {
    type Err = SiteError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            other => Err(SiteError::UnknownMediaType(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoSource {
    pub src: &'static str,
    pub mime: &'static str,
}

/// Where the media is placed; decides the intrinsic image size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaSlot {
    Card,
    Thumbnail,
    Hero,
}

impl MediaSlot {
    /// `None` means the image fills its container.
    pub fn image_size(self) -> Option<(u32, u32)> {
        match self {
            Self::Card => Some((960, 540)),
            Self::Thumbnail => Some((56, 56)),
            Self::Hero => None,
        }
    }

    pub fn is_cropped_to_aspect_ratio(self) -> bool {
        !matches!(self, Self::Thumbnail)
    }

    /// Class of the positioned 16:9 wrapper, `None` when the media is not cropped.
    pub fn frame_class(self) -> Option<&'static str> {
        if !self.is_cropped_to_aspect_ratio() {
            return None;
        }

        match self {
            Self::Hero => Some("media-frame media-hero"),
            _ => Some("media-frame"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MediaElement {
    /// Decorative loop: autoplaying, muted, inline and without controls.
    Video {
        sources: &'static [VideoSource],
        autoplay: bool,
        looped: bool,
        muted: bool,
        plays_inline: bool,
        controls: bool,
    },
    Image {
        src: String,
        alt: String,
        size: Option<(u32, u32)>,
    },
}

impl MediaElement {
    pub fn for_project(card: &ProjectCard, slot: MediaSlot) -> Self {
        match card.media_type {
            MediaType::Video => Self::Video {
                sources: VIDEO_SOURCES,
                autoplay: true,
                looped: true,
                muted: true,
                plays_inline: true,
                controls: false,
            },
            MediaType::Image => Self::Image {
                src: card.media_src.clone(),
                alt: card.title.clone(),
                size: slot.image_size(),
            },
        }
    }

    /// Whether the element must be muted through the DOM property. The content
    /// attribute alone does not mute a script-created `<video>`.
    pub fn muted(&self) -> bool {
        matches!(self, Self::Video { muted: true, .. })
    }
}

/// CSS `aspect-ratio` value for the crop box.
pub fn aspect_ratio_css() -> String {
    let (width, height) = ASPECT_RATIO;
    format!("{width} / {height}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(media_type: MediaType) -> ProjectCard {
        ProjectCard {
            title: "Garden".to_string(),
            description: "A garden".to_string(),
            short_description: None,
            media_src: "/garden.png".to_string(),
            media_type,
            href: "/projects/garden".to_string(),
        }
    }

    #[test]
    fn video_is_a_silent_loop_without_controls() {
        let element = MediaElement::for_project(&card(MediaType::Video), MediaSlot::Card);

        assert_eq!(
            element,
            MediaElement::Video {
                sources: VIDEO_SOURCES,
                autoplay: true,
                looped: true,
                muted: true,
                plays_inline: true,
                controls: false,
            }
        );
    }

    #[test]
    fn video_ignores_media_src() {
        let MediaElement::Video { sources, .. } =
            MediaElement::for_project(&card(MediaType::Video), MediaSlot::Hero)
        else {
            panic!("expected a video element");
        };

        assert!(sources.iter().all(|source| source.src != "/garden.png"));
        assert_eq!(sources[0].mime, "video/webm");
    }

    #[test]
    fn image_uses_title_as_alt_and_slot_size() {
        let element = MediaElement::for_project(&card(MediaType::Image), MediaSlot::Card);
        assert_eq!(
            element,
            MediaElement::Image {
                src: "/garden.png".to_string(),
                alt: "Garden".to_string(),
                size: Some((960, 540)),
            }
        );

        let hero = MediaElement::for_project(&card(MediaType::Image), MediaSlot::Hero);
        assert!(matches!(hero, MediaElement::Image { size: None, .. }));
    }

    #[test]
    fn media_type_parses_known_values_only() {
        assert_eq!("video".parse::<MediaType>(), Ok(MediaType::Video));
        assert_eq!("image".parse::<MediaType>(), Ok(MediaType::Image));
        assert!("gif".parse::<MediaType>().is_err());
    }

    #[test]
    fn cards_crop_to_sixteen_by_nine() {
        assert_eq!(aspect_ratio_css(), "16 / 9");
        assert_eq!(MediaSlot::Card.frame_class(), Some("media-frame"));
        assert_eq!(MediaSlot::Hero.frame_class(), Some("media-frame media-hero"));
        assert_eq!(MediaSlot::Thumbnail.frame_class(), None);
    }

    #[test]
    fn only_video_needs_muting() {
        let video = MediaElement::for_project(&card(MediaType::Video), MediaSlot::Card);
        let image = MediaElement::for_project(&card(MediaType::Image), MediaSlot::Card);

        assert!(video.muted());
        assert!(!image.muted());
    }

    // The spotlight overlay is absolutely positioned; the media frame must be
    // positioned too so it paints above the highlight.
    #[test]
    fn media_frame_paints_above_the_overlay() {
        let stylesheet = include_str!("../styles.css");
        let rule = stylesheet
            .split(".media-frame {")
            .nth(1)
            .and_then(|rest| rest.split('}').next())
            .expect("media-frame rule");

        assert!(rule.contains("position: relative;"));
    }
}
