use std::str::FromStr;

use crate::error::SiteError;

pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

const LIGHT_SPOTLIGHT_TINT: &str = "hsla(0,0%,60%,.1)";
const DARK_SPOTLIGHT_TINT: &str = "hsla(360,100%,100%,.06)";

/// Light/dark color scheme. Read once by the app shell and handed down to
/// components as a plain value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "◐",
            Self::Dark => "◑",
        }
    }

    /// Low-alpha highlight color for the spotlight gradient: a dark tint on
    /// light backgrounds, a light tint on dark ones.
    pub fn spotlight_tint(self) -> &'static str {
        match self {
            Self::Light => LIGHT_SPOTLIGHT_TINT,
            Self::Dark => DARK_SPOTLIGHT_TINT,
        }
    }
}

impl FromStr for Theme {
    type Err = SiteError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(SiteError::UnknownTheme(other.to_string())),
        }
    }
}
