//! GLFW gamepad buttons and axes.
//!
//! The discriminants are the GLFW indices, i.e. the element indices into the
//! `buttons[15]` and `axes[6]` arrays of a gamepad state record.

/// Gamepad button, in GLFW index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum GamepadButton {
    A = 0,
    B = 1,
    X = 2,
    Y = 3,
    LeftBumper = 4,
    RightBumper = 5,
    Back = 6,
    Start = 7,
    Guide = 8,
    LeftThumb = 9,
    RightThumb = 10,
    DpadUp = 11,
    DpadRight = 12,
    DpadDown = 13,
    DpadLeft = 14,
}

impl GamepadButton {
    /// Number of gamepad buttons (`GLFW_GAMEPAD_BUTTON_LAST + 1`).
    pub const COUNT: usize = 15;

    pub const CROSS: GamepadButton = GamepadButton::A;
    pub const CIRCLE: GamepadButton = GamepadButton::B;
    pub const SQUARE: GamepadButton = GamepadButton::X;
    pub const TRIANGLE: GamepadButton = GamepadButton::Y;

    pub const ALL: [GamepadButton; Self::COUNT] = [
        GamepadButton::A,
        GamepadButton::B,
        GamepadButton::X,
        GamepadButton::Y,
        GamepadButton::LeftBumper,
        GamepadButton::RightBumper,
        GamepadButton::Back,
        GamepadButton::Start,
        GamepadButton::Guide,
        GamepadButton::LeftThumb,
        GamepadButton::RightThumb,
        GamepadButton::DpadUp,
        GamepadButton::DpadRight,
        GamepadButton::DpadDown,
        GamepadButton::DpadLeft,
    ];

    /// Index of this button in the gamepad state `buttons` array.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Button for a GLFW button index.
    pub fn from_index(index: usize) -> Option<GamepadButton> {
        Self::ALL.get(index).copied()
    }

    /// GLFW constant name, e.g. `GLFW_GAMEPAD_BUTTON_LEFT_BUMPER`.
    pub fn name(self) -> &'static str {
        match self {
            GamepadButton::A => "GLFW_GAMEPAD_BUTTON_A",
            GamepadButton::B => "GLFW_GAMEPAD_BUTTON_B",
            GamepadButton::X => "GLFW_GAMEPAD_BUTTON_X",
            GamepadButton::Y => "GLFW_GAMEPAD_BUTTON_Y",
            GamepadButton::LeftBumper => "GLFW_GAMEPAD_BUTTON_LEFT_BUMPER",
            GamepadButton::RightBumper => "GLFW_GAMEPAD_BUTTON_RIGHT_BUMPER",
            GamepadButton::Back => "GLFW_GAMEPAD_BUTTON_BACK",
            GamepadButton::Start => "GLFW_GAMEPAD_BUTTON_START",
            GamepadButton::Guide => "GLFW_GAMEPAD_BUTTON_GUIDE",
            GamepadButton::LeftThumb => "GLFW_GAMEPAD_BUTTON_LEFT_THUMB",
            GamepadButton::RightThumb => "GLFW_GAMEPAD_BUTTON_RIGHT_THUMB",
            GamepadButton::DpadUp => "GLFW_GAMEPAD_BUTTON_DPAD_UP",
            GamepadButton::DpadRight => "GLFW_GAMEPAD_BUTTON_DPAD_RIGHT",
            GamepadButton::DpadDown => "GLFW_GAMEPAD_BUTTON_DPAD_DOWN",
            GamepadButton::DpadLeft => "GLFW_GAMEPAD_BUTTON_DPAD_LEFT",
        }
    }

    /// Inverse of [`GamepadButton::name`].
    pub fn from_name(name: &str) -> Option<GamepadButton> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }
}

/// Gamepad axis, in GLFW index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum GamepadAxis {
    LeftX = 0,
    LeftY = 1,
    RightX = 2,
    RightY = 3,
    LeftTrigger = 4,
    RightTrigger = 5,
}

impl GamepadAxis {
    /// Number of gamepad axes (`GLFW_GAMEPAD_AXIS_LAST + 1`).
    pub const COUNT: usize = 6;

    pub const ALL: [GamepadAxis; Self::COUNT] = [
        GamepadAxis::LeftX,
        GamepadAxis::LeftY,
        GamepadAxis::RightX,
        GamepadAxis::RightY,
        GamepadAxis::LeftTrigger,
        GamepadAxis::RightTrigger,
    ];

    /// Index of this axis in the gamepad state `axes` array.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<GamepadAxis> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            GamepadAxis::LeftX => "GLFW_GAMEPAD_AXIS_LEFT_X",
            GamepadAxis::LeftY => "GLFW_GAMEPAD_AXIS_LEFT_Y",
            GamepadAxis::RightX => "GLFW_GAMEPAD_AXIS_RIGHT_X",
            GamepadAxis::RightY => "GLFW_GAMEPAD_AXIS_RIGHT_Y",
            GamepadAxis::LeftTrigger => "GLFW_GAMEPAD_AXIS_LEFT_TRIGGER",
            GamepadAxis::RightTrigger => "GLFW_GAMEPAD_AXIS_RIGHT_TRIGGER",
        }
    }

    pub fn from_name(name: &str) -> Option<GamepadAxis> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Whether the axis is a trigger, which rests at -1.0 rather than 0.0.
    pub fn is_trigger(self) -> bool {
        matches!(self, GamepadAxis::LeftTrigger | GamepadAxis::RightTrigger)
    }
}
