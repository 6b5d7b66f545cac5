use web_sys::HtmlMediaElement;
use yew::prelude::*;

use crate::media::{aspect_ratio_css, MediaElement, MediaSlot};
use crate::projects::ProjectCard;

#[derive(Properties, PartialEq)]
pub struct ProjectMediaProps {
    pub card: ProjectCard,
    pub slot: MediaSlot,
}

fn slot_class(slot: MediaSlot) -> &'static str {
    match slot {
        MediaSlot::Card | MediaSlot::Hero => "media-fill",
        MediaSlot::Thumbnail => "media-thumbnail",
    }
}

/// Project image or video, wrapped in a positioned 16:9 frame for the slots
/// that crop.
#[function_component(ProjectMedia)]
pub fn project_media(props: &ProjectMediaProps) -> Html {
    let video_ref = use_node_ref();
    let element = MediaElement::for_project(&props.card, props.slot);
    let class = slot_class(props.slot);

    {
        let video_ref = video_ref.clone();
        let muted = element.muted();
        use_effect_with(muted, move |muted| {
            if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                video.set_muted(*muted);
            }
            || ()
        });
    }

    let media = match element {
        MediaElement::Video {
            sources,
            autoplay,
            looped,
            muted,
            plays_inline,
            controls,
        } => html! {
            <video
                ref={video_ref}
                class={class}
                autoplay={autoplay}
                loop={looped}
                muted={muted}
                playsinline={plays_inline}
                controls={controls}
                aria-hidden="true"
            >
                { for sources.iter().map(|source| html! {
                    <source src={source.src} type={source.mime} />
                }) }
            </video>
        },
        MediaElement::Image { src, alt, size } => html! {
            <img
                class={class}
                src={src}
                alt={alt}
                width={size.map(|(width, _)| width.to_string())}
                height={size.map(|(_, height)| height.to_string())}
                loading="lazy"
            />
        },
    };

    match props.slot.frame_class() {
        Some(frame_class) => html! {
            <div class={frame_class} style={format!("aspect-ratio: {};", aspect_ratio_css())}>
                {media}
            </div>
        },
        None => media,
    }
}
