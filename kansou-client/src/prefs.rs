use std::str::FromStr;

use crate::{api::Error, keys, BlobStore};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Theme, ()> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

/// The theme the user explicitly picked, if any
pub fn stored_theme<B: BlobStore>(blobs: &B) -> Option<Theme> {
    let raw = blobs.get(keys::THEME)?;
    match raw.parse() {
        Ok(t) => Some(t),
        Err(()) => {
            tracing::warn!(?raw, "ignoring unknown stored theme");
            None
        }
    }
}

/// Theme to start with: the user's choice, or else the system's
pub fn initial_theme<B: BlobStore>(blobs: &B, system_prefers_dark: bool) -> Theme {
    stored_theme(blobs).unwrap_or(match system_prefers_dark {
        true => Theme::Dark,
        false => Theme::Light,
    })
}

pub fn save_theme<B: BlobStore>(blobs: &B, theme: Theme) -> Result<(), Error> {
    blobs.set(keys::THEME, theme.as_str())
}

/// Whether the welcome banner should be displayed
///
/// It is displayed only once per browser, so this marks it as shown.
pub fn take_welcome<B: BlobStore>(blobs: &B) -> bool {
    if blobs.get(keys::WELCOME_SHOWN).is_some() {
        return false;
    }
    if let Err(err) = blobs.set(keys::WELCOME_SHOWN, "true") {
        tracing::warn!(?err, "failed marking the welcome banner as shown");
    }
    true
}

pub fn commenter_name<B: BlobStore>(blobs: &B) -> Option<String> {
    blobs
        .get(keys::COMMENTER_NAME)
        .filter(|n| !n.trim().is_empty())
}

pub fn save_commenter_name<B: BlobStore>(blobs: &B, name: &str) -> Result<(), Error> {
    blobs.set(keys::COMMENTER_NAME, name)
}
