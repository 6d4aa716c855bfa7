//! Pointer and keyboard input as seen by the gesture controller

use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Modifier keys that select the transform mode at gesture start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub alt: bool,
    pub shift: bool,
}

/// Keys the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Delete,
    Backspace,
    Escape,
    Alt,
    Shift,
}

/// A pointer press, already projected onto the ground plane.
///
/// `world` is None when the pointer ray misses the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerDown {
    pub button: PointerButton,
    pub world: Option<Vec3>,
}

impl PointerDown {
    pub fn primary(world: Vec3) -> Self {
        Self {
            button: PointerButton::Primary,
            world: Some(world),
        }
    }

    pub fn secondary(world: Vec3) -> Self {
        Self {
            button: PointerButton::Secondary,
            world: Some(world),
        }
    }
}
