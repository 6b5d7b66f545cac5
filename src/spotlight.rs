//! Pointer-following highlight for project cards.
//!
//! Each rendered card owns one [`SpotlightState`]. Input events are fed
//! through [`SpotlightState::apply`]; the component only reads the result back
//! through [`SpotlightState::overlay_style`].

use crate::theme::Theme;

const SPOTLIGHT_RADIUS_PX: u32 = 500;
const SPOTLIGHT_FADE_STOP: &str = "40%";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Top-left corner of the card's bounding rectangle, in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingRect {
    pub left: f64,
    pub top: f64,
}

impl BoundingRect {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    pub fn to_local(self, client: Point) -> Point {
        Point::new(client.x - self.left, client.y - self.top)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    pub fn opacity(self) -> f64 {
        match self {
            Self::Hidden => 0.0,
            Self::Shown => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpotlightEvent {
    PointerMove { client: Point, rect: BoundingRect },
    PointerEnter { client: Point, rect: BoundingRect },
    PointerLeave,
    Focus,
    Blur,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpotlightState {
    position: Point,
    visibility: Visibility,
    focused: bool,
}

impl SpotlightState {
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn apply(&mut self, event: SpotlightEvent) {
        match event {
            SpotlightEvent::PointerMove { client, rect } => self.pointer_move(client, rect),
            SpotlightEvent::PointerEnter { client, rect } => self.pointer_enter(client, rect),
            SpotlightEvent::PointerLeave => self.pointer_leave(),
            SpotlightEvent::Focus => self.focus(),
            SpotlightEvent::Blur => self.blur(),
        }
    }

    /// Ignored while focused so keyboard focus keeps the highlight where it was.
    pub fn pointer_move(&mut self, client: Point, rect: BoundingRect) {
        if self.focused {
            return;
        }

        self.position = rect.to_local(client);
    }

    pub fn pointer_enter(&mut self, client: Point, rect: BoundingRect) {
        self.pointer_move(client, rect);
        self.visibility = Visibility::Shown;
    }

    // Leaves `focused` alone.
    pub fn pointer_leave(&mut self) {
        self.visibility = Visibility::Hidden;
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.visibility = Visibility::Shown;
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.visibility = Visibility::Hidden;
    }

    pub fn gradient(&self, theme: Theme) -> String {
        format!(
            "radial-gradient({SPOTLIGHT_RADIUS_PX}px circle at {}px {}px, {}, transparent {SPOTLIGHT_FADE_STOP})",
            self.position.x,
            self.position.y,
            theme.spotlight_tint()
        )
    }

    /// Inline style for the overlay layer. Pointer-events and the opacity
    /// transition live in the stylesheet.
    pub fn overlay_style(&self, theme: Theme) -> String {
        format!(
            "opacity: {}; background: {};",
            self.visibility.opacity(),
            self.gradient(theme)
        )
    }
}
