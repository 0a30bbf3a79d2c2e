use std::sync::LazyLock;

use rivet_common::{Result, verify_index};
use rivet_keymap::glfw::GLFW_PRESS;
use rivet_keymap::{GamepadAxis, GamepadButton};

use crate::layout::{FieldDescriptor, Layout};
use crate::view::{StructType, StructView};
use crate::window::ArrayWindow;

/// Gamepad input state, as filled in by `glfwGetGamepadState`.
///
/// ```c
/// struct GLFWgamepadstate {
///     unsigned char buttons[15];
///     float axes[6];
/// }
/// ```
///
/// The state is produced by native code and read by the caller, so views of it
/// are read-only.
pub struct GamepadState;

impl GamepadState {
    /// Field index of `buttons`.
    pub const BUTTONS: usize = 0;
    /// Field index of `axes`.
    pub const AXES: usize = 1;

    pub const BUTTON_COUNT: usize = GamepadButton::COUNT;
    pub const AXIS_COUNT: usize = GamepadAxis::COUNT;
}

static LAYOUT: LazyLock<Layout> = LazyLock::new(|| {
    super::static_layout(
        GamepadState::NAME,
        &[
            FieldDescriptor::array(1, GamepadState::BUTTON_COUNT),
            FieldDescriptor::array(4, GamepadState::AXIS_COUNT),
        ],
    )
});

impl StructType for GamepadState {
    const NAME: &'static str = "GLFWgamepadstate";
    const FIELD_NAMES: &'static [&'static str] = &["buttons", "axes"];

    fn layout() -> &'static Layout {
        &LAYOUT
    }
}

impl<'b> StructView<'b, GamepadState> {
    /// The 15 button states, `GLFW_PRESS` or `GLFW_RELEASE`.
    pub fn buttons(&self) -> ArrayWindow<'b, u8> {
        unsafe { self.window_unchecked(GamepadState::BUTTONS) }
    }

    /// State of button `index`.
    pub fn button(&self, index: usize) -> Result<u8> {
        verify_index!("buttons", index, GamepadState::BUTTON_COUNT);
        Ok(unsafe { self.buttons().get_unchecked(index) })
    }

    pub fn button_state(&self, button: GamepadButton) -> u8 {
        unsafe { self.buttons().get_unchecked(button.index()) }
    }

    pub fn is_pressed(&self, button: GamepadButton) -> bool {
        self.button_state(button) == GLFW_PRESS
    }

    /// The 6 axis values, in the range -1.0 to 1.0.
    pub fn axes(&self) -> ArrayWindow<'b, f32> {
        unsafe { self.window_unchecked(GamepadState::AXES) }
    }

    /// Value of axis `index`.
    pub fn axis(&self, index: usize) -> Result<f32> {
        verify_index!("axes", index, GamepadState::AXIS_COUNT);
        Ok(unsafe { self.axes().get_unchecked(index) })
    }

    pub fn axis_value(&self, axis: GamepadAxis) -> f32 {
        unsafe { self.axes().get_unchecked(axis.index()) }
    }

    /// Buttons currently reported as pressed.
    pub fn pressed_buttons(&self) -> impl Iterator<Item = GamepadButton> + use<'b> {
        let buttons = self.buttons();
        GamepadButton::ALL
            .into_iter()
            .filter(move |b| unsafe { buttons.get_unchecked(b.index()) } == GLFW_PRESS)
    }
}
