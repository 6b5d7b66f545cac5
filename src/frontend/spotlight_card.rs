use std::rc::Rc;

use web_sys::{Element, FocusEvent, MouseEvent};
use yew::prelude::*;

use super::media::ProjectMedia;
use crate::media::MediaSlot;
use crate::projects::ProjectCard;
use crate::spotlight::{BoundingRect, Point, SpotlightEvent, SpotlightState};
use crate::theme::Theme;

impl Reducible for SpotlightState {
    type Action = SpotlightEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SpotlightCardProps {
    pub card: ProjectCard,
    pub theme: Theme,
}

fn pointer_sample(card_ref: &NodeRef, event: &MouseEvent) -> Option<(Point, BoundingRect)> {
    let rect = card_ref.cast::<Element>()?.get_bounding_client_rect();
    let client = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));

    Some((client, BoundingRect::new(rect.left(), rect.top())))
}

/// Project card with a radial highlight that follows the pointer, and shows
/// in place while the card has keyboard focus.
#[function_component(SpotlightCard)]
pub fn spotlight_card(props: &SpotlightCardProps) -> Html {
    let card_ref = use_node_ref();
    let spotlight = use_reducer(SpotlightState::default);

    let onmousemove = {
        let card_ref = card_ref.clone();
        let spotlight = spotlight.dispatcher();
        Callback::from(move |event: MouseEvent| {
            if let Some((client, rect)) = pointer_sample(&card_ref, &event) {
                spotlight.dispatch(SpotlightEvent::PointerMove { client, rect });
            }
        })
    };

    let onmouseenter = {
        let card_ref = card_ref.clone();
        let spotlight = spotlight.clone();
        Callback::from(move |event: MouseEvent| {
            // Unmounted node: keep the last position, still show the highlight.
            let (client, rect) = pointer_sample(&card_ref, &event)
                .unwrap_or_else(|| (spotlight.position(), BoundingRect::default()));
            spotlight.dispatch(SpotlightEvent::PointerEnter { client, rect });
        })
    };

    let onmouseleave = {
        let spotlight = spotlight.dispatcher();
        Callback::from(move |_: MouseEvent| spotlight.dispatch(SpotlightEvent::PointerLeave))
    };

    let onfocus = {
        let spotlight = spotlight.dispatcher();
        Callback::from(move |_: FocusEvent| spotlight.dispatch(SpotlightEvent::Focus))
    };

    let onblur = {
        let spotlight = spotlight.dispatcher();
        Callback::from(move |_: FocusEvent| spotlight.dispatch(SpotlightEvent::Blur))
    };

    let card = &props.card;

    html! {
        <a
            ref={card_ref}
            class="spotlight-card"
            href={card.href.clone()}
            onmousemove={onmousemove}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
            onfocus={onfocus}
            onblur={onblur}
        >
            <div
                class="spotlight-overlay"
                style={spotlight.overlay_style(props.theme)}
                aria-hidden="true"
            />
            <ProjectMedia card={card.clone()} slot={MediaSlot::Card} />
            <div class="spotlight-card-body">
                <h2 class="spotlight-card-title">{card.title.clone()}</h2>
                <p class="spotlight-card-description muted">{card.display_description().to_string()}</p>
            </div>
        </a>
    }
}
