//! Translation of raw user input into navigation commands.
//!
//! Capturing keyboard, touch and click events is left to the embedding
//! layer. This module only decides what such an event means; the result is
//! applied with [`Synchronizer::dispatch`].
//!
//! [`Synchronizer::dispatch`]: crate::sync::Synchronizer::dispatch

use crate::fragment::parse_fragment;

/// Key codes that move through the presentation.
pub mod keys {
    pub const TAB: u32 = 9;
    pub const SPACE: u32 = 32;
    pub const PAGE_UP: u32 = 33;
    pub const PAGE_DOWN: u32 = 34;
    pub const LEFT: u32 = 37;
    pub const UP: u32 = 38;
    pub const RIGHT: u32 = 39;
    pub const DOWN: u32 = 40;
}

/// Share of the screen width, on each side, that counts as a tap zone.
pub const TAP_ZONE: f64 = 0.3;

/// A navigation request derived from user input.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum NavCommand {
    Next,
    Prev,
    Goto(String),
}

/// Whether the key's default browser behaviour should be suppressed.
///
/// True for every navigation key, whether or not it maps to a command.
pub fn is_navigation_key(key_code: u32) -> bool {
    key_code == keys::TAB
        || (keys::SPACE..=keys::PAGE_DOWN).contains(&key_code)
        || (keys::LEFT..=keys::DOWN).contains(&key_code)
}

/// Command for a released key.
///
/// # Example
///
/// ```rust
/// use stepsync::input::{command_for_key, keys, NavCommand};
///
/// assert_eq!(command_for_key(keys::RIGHT), Some(NavCommand::Next));
/// assert_eq!(command_for_key(keys::PAGE_UP), Some(NavCommand::Prev));
/// assert_eq!(command_for_key(65), None);
/// ```
pub fn command_for_key(key_code: u32) -> Option<NavCommand> {
    match key_code {
        keys::PAGE_UP | keys::LEFT | keys::UP => Some(NavCommand::Prev),
        keys::TAB | keys::SPACE | keys::PAGE_DOWN | keys::RIGHT | keys::DOWN => {
            Some(NavCommand::Next)
        }
        _ => None,
    }
}

/// Command for a tap at horizontal position `x` on a screen `width` wide.
///
/// Only single-finger taps count. Taps in the left zone go back, taps in
/// the right zone go forward, the middle of the screen does nothing.
pub fn command_for_tap(touches: usize, x: f64, width: f64) -> Option<NavCommand> {
    if touches != 1 {
        return None;
    }

    let zone = width * TAP_ZONE;
    if x < zone {
        Some(NavCommand::Prev)
    } else if x > width - zone {
        Some(NavCommand::Next)
    } else {
        None
    }
}

/// Command for a click on a link whose `href` points at a step.
///
/// Only in-page links (`#id` or `#/id`) qualify.
pub fn command_for_link(href: &str) -> Option<NavCommand> {
    if !href.starts_with('#') {
        return None;
    }
    Some(NavCommand::Goto(parse_fragment(href).to_string()))
}

/// Command for a click on a step element that is not the active one.
pub fn command_for_step_click(step_id: &str, is_active: bool) -> Option<NavCommand> {
    if is_active || step_id.is_empty() {
        return None;
    }
    Some(NavCommand::Goto(step_id.to_string()))
}
