//! GLFW struct types with fixed native layouts.

mod gamepad_state;
mod image;
mod vid_mode;

pub use gamepad_state::GamepadState;
pub use image::Image;
pub use vid_mode::VidMode;

/// Size of a native pointer field.
pub const POINTER_SIZE: usize = size_of::<usize>();

/// Builds the layout of a built-in struct.
///
/// # Panics
///
/// Panics if the field table is invalid.
fn static_layout(name: &str, fields: &[crate::FieldDescriptor]) -> crate::Layout {
    crate::Layout::build(fields).unwrap_or_else(|e| panic!("invalid layout for {name}: {e}"))
}
