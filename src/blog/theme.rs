//! Theme preference
//!
//! A single `"light"`/`"dark"` word in the slot. Absent or unrecognized
//! values read as light, matching the journal's default; only the exact
//! word `dark` activates dark mode.

use std::fmt;

use crate::observability::Logger;

use super::errors::BlogResult;
use super::slot::{DurableSlot, THEME_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

    /// The other theme
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Lenient read of a stored value
    fn from_value(value: &str) -> Theme {
        if value == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Read the preference; absent and unreadable both default to light
    pub fn load(slot: &DurableSlot) -> Theme {
        match slot.get(THEME_KEY) {
            Ok(Some(value)) => Theme::from_value(&value),
            Ok(None) => Theme::Light,
            Err(e) => {
                Logger::warn("BLOG_THEME_UNREADABLE", &[("error", &e.to_string())]);
                Theme::Light
            }
        }
    }

    /// Persist the preference
    pub fn save(&self, slot: &DurableSlot) -> BlogResult<()> {
        slot.set(THEME_KEY, self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
