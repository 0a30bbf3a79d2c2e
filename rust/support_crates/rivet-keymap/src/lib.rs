//! Static lookup tables mapping game key-binding identifiers (`key.keyboard.a`,
//! `key.mouse.left`, ...) to GLFW key codes and to control-event names, plus the
//! GLFW gamepad button and axis enumerations.
//!
//! Both lookups are total over strings: every identifier in the closed set resolves,
//! everything else yields `None`. The maps are built once, on first use, and never
//! change afterwards.

pub mod bindings;
pub mod gamepad;
pub mod glfw;


pub use bindings::{KeyBinding, bindings, control_event, glfw_keycode, lookup};
pub use gamepad::{GamepadAxis, GamepadButton};
