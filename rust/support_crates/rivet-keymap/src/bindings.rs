//! Key-binding identifier lookups.
//!
//! The closed set of identifiers is declared once, in a single static table; the lookup
//! maps are derived from it on first use.

use std::sync::LazyLock;

use ahash::AHashMap;

use crate::glfw::*;

/// One entry of the key-binding table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    /// Key-binding identifier as stored in the game options, e.g. `key.keyboard.a`.
    pub id: &'static str,
    /// GLFW key or mouse-button code.
    pub keycode: i16,
    /// Control-event name dispatched for this binding, e.g. `GLFW_KEY_A`.
    pub event: &'static str,
}

macro_rules! key_bindings {
    ($($id:literal => $code:ident),* $(,)?) => {
        static BINDINGS: &[KeyBinding] = &[
            $(KeyBinding {
                id: $id,
                keycode: $code,
                event: stringify!($code),
            }),*
        ];
    };
}

key_bindings! {
    "key.keyboard.unknown" => GLFW_KEY_UNKNOWN,
    "key.mouse.left" => GLFW_MOUSE_BUTTON_LEFT,
    "key.mouse.right" => GLFW_MOUSE_BUTTON_RIGHT,
    "key.mouse.middle" => GLFW_MOUSE_BUTTON_MIDDLE,
    "key.mouse.4" => GLFW_MOUSE_BUTTON_4,
    "key.mouse.5" => GLFW_MOUSE_BUTTON_5,
    "key.mouse.6" => GLFW_MOUSE_BUTTON_6,
    "key.mouse.7" => GLFW_MOUSE_BUTTON_7,
    "key.mouse.8" => GLFW_MOUSE_BUTTON_8,
    "key.keyboard.0" => GLFW_KEY_0,
    "key.keyboard.1" => GLFW_KEY_1,
    "key.keyboard.2" => GLFW_KEY_2,
    "key.keyboard.3" => GLFW_KEY_3,
    "key.keyboard.4" => GLFW_KEY_4,
    "key.keyboard.5" => GLFW_KEY_5,
    "key.keyboard.6" => GLFW_KEY_6,
    "key.keyboard.7" => GLFW_KEY_7,
    "key.keyboard.8" => GLFW_KEY_8,
    "key.keyboard.9" => GLFW_KEY_9,
    "key.keyboard.a" => GLFW_KEY_A,
    "key.keyboard.b" => GLFW_KEY_B,
    "key.keyboard.c" => GLFW_KEY_C,
    "key.keyboard.d" => GLFW_KEY_D,
    "key.keyboard.e" => GLFW_KEY_E,
    "key.keyboard.f" => GLFW_KEY_F,
    "key.keyboard.g" => GLFW_KEY_G,
    "key.keyboard.h" => GLFW_KEY_H,
    "key.keyboard.i" => GLFW_KEY_I,
    "key.keyboard.j" => GLFW_KEY_J,
    "key.keyboard.k" => GLFW_KEY_K,
    "key.keyboard.l" => GLFW_KEY_L,
    "key.keyboard.m" => GLFW_KEY_M,
    "key.keyboard.n" => GLFW_KEY_N,
    "key.keyboard.o" => GLFW_KEY_O,
    "key.keyboard.p" => GLFW_KEY_P,
    "key.keyboard.q" => GLFW_KEY_Q,
    "key.keyboard.r" => GLFW_KEY_R,
    "key.keyboard.s" => GLFW_KEY_S,
    "key.keyboard.t" => GLFW_KEY_T,
    "key.keyboard.u" => GLFW_KEY_U,
    "key.keyboard.v" => GLFW_KEY_V,
    "key.keyboard.w" => GLFW_KEY_W,
    "key.keyboard.x" => GLFW_KEY_X,
    "key.keyboard.y" => GLFW_KEY_Y,
    "key.keyboard.z" => GLFW_KEY_Z,
    "key.keyboard.f1" => GLFW_KEY_F1,
    "key.keyboard.f2" => GLFW_KEY_F2,
    "key.keyboard.f3" => GLFW_KEY_F3,
    "key.keyboard.f4" => GLFW_KEY_F4,
    "key.keyboard.f5" => GLFW_KEY_F5,
    "key.keyboard.f6" => GLFW_KEY_F6,
    "key.keyboard.f7" => GLFW_KEY_F7,
    "key.keyboard.f8" => GLFW_KEY_F8,
    "key.keyboard.f9" => GLFW_KEY_F9,
    "key.keyboard.f10" => GLFW_KEY_F10,
    "key.keyboard.f11" => GLFW_KEY_F11,
    "key.keyboard.f12" => GLFW_KEY_F12,
    "key.keyboard.f13" => GLFW_KEY_F13,
    "key.keyboard.f14" => GLFW_KEY_F14,
    "key.keyboard.f15" => GLFW_KEY_F15,
    "key.keyboard.f16" => GLFW_KEY_F16,
    "key.keyboard.f17" => GLFW_KEY_F17,
    "key.keyboard.f18" => GLFW_KEY_F18,
    "key.keyboard.f19" => GLFW_KEY_F19,
    "key.keyboard.f20" => GLFW_KEY_F20,
    "key.keyboard.f21" => GLFW_KEY_F21,
    "key.keyboard.f22" => GLFW_KEY_F22,
    "key.keyboard.f23" => GLFW_KEY_F23,
    "key.keyboard.f24" => GLFW_KEY_F24,
    "key.keyboard.f25" => GLFW_KEY_F25,
    "key.keyboard.num.lock" => GLFW_KEY_NUM_LOCK,
    "key.keyboard.keypad.0" => GLFW_KEY_KP_0,
    "key.keyboard.keypad.1" => GLFW_KEY_KP_1,
    "key.keyboard.keypad.2" => GLFW_KEY_KP_2,
    "key.keyboard.keypad.3" => GLFW_KEY_KP_3,
    "key.keyboard.keypad.4" => GLFW_KEY_KP_4,
    "key.keyboard.keypad.5" => GLFW_KEY_KP_5,
    "key.keyboard.keypad.6" => GLFW_KEY_KP_6,
    "key.keyboard.keypad.7" => GLFW_KEY_KP_7,
    "key.keyboard.keypad.8" => GLFW_KEY_KP_8,
    "key.keyboard.keypad.9" => GLFW_KEY_KP_9,
    "key.keyboard.keypad.add" => GLFW_KEY_KP_ADD,
    "key.keyboard.keypad.decimal" => GLFW_KEY_KP_DECIMAL,
    "key.keyboard.keypad.enter" => GLFW_KEY_KP_ENTER,
    "key.keyboard.keypad.equal" => GLFW_KEY_KP_EQUAL,
    "key.keyboard.keypad.multiply" => GLFW_KEY_KP_MULTIPLY,
    "key.keyboard.keypad.divide" => GLFW_KEY_KP_DIVIDE,
    "key.keyboard.keypad.subtract" => GLFW_KEY_KP_SUBTRACT,
    "key.keyboard.down" => GLFW_KEY_DOWN,
    "key.keyboard.left" => GLFW_KEY_LEFT,
    "key.keyboard.right" => GLFW_KEY_RIGHT,
    "key.keyboard.up" => GLFW_KEY_UP,
    "key.keyboard.apostrophe" => GLFW_KEY_APOSTROPHE,
    "key.keyboard.backslash" => GLFW_KEY_BACKSLASH,
    "key.keyboard.comma" => GLFW_KEY_COMMA,
    "key.keyboard.equal" => GLFW_KEY_EQUAL,
    "key.keyboard.grave.accent" => GLFW_KEY_GRAVE_ACCENT,
    "key.keyboard.left.bracket" => GLFW_KEY_LEFT_BRACKET,
    "key.keyboard.minus" => GLFW_KEY_MINUS,
    "key.keyboard.period" => GLFW_KEY_PERIOD,
    "key.keyboard.right.bracket" => GLFW_KEY_RIGHT_BRACKET,
    "key.keyboard.semicolon" => GLFW_KEY_SEMICOLON,
    "key.keyboard.slash" => GLFW_KEY_SLASH,
    "key.keyboard.space" => GLFW_KEY_SPACE,
    "key.keyboard.tab" => GLFW_KEY_TAB,
    "key.keyboard.left.alt" => GLFW_KEY_LEFT_ALT,
    "key.keyboard.left.control" => GLFW_KEY_LEFT_CONTROL,
    "key.keyboard.left.shift" => GLFW_KEY_LEFT_SHIFT,
    "key.keyboard.left.win" => GLFW_KEY_LEFT_SUPER,
    "key.keyboard.right.alt" => GLFW_KEY_RIGHT_ALT,
    "key.keyboard.right.control" => GLFW_KEY_RIGHT_CONTROL,
    "key.keyboard.right.shift" => GLFW_KEY_RIGHT_SHIFT,
    "key.keyboard.right.win" => GLFW_KEY_RIGHT_SUPER,
    "key.keyboard.enter" => GLFW_KEY_ENTER,
    "key.keyboard.escape" => GLFW_KEY_ESCAPE,
    "key.keyboard.backspace" => GLFW_KEY_BACKSPACE,
    "key.keyboard.delete" => GLFW_KEY_DELETE,
    "key.keyboard.end" => GLFW_KEY_END,
    "key.keyboard.home" => GLFW_KEY_HOME,
    "key.keyboard.insert" => GLFW_KEY_INSERT,
    "key.keyboard.page.down" => GLFW_KEY_PAGE_DOWN,
    "key.keyboard.page.up" => GLFW_KEY_PAGE_UP,
    "key.keyboard.caps.lock" => GLFW_KEY_CAPS_LOCK,
    "key.keyboard.pause" => GLFW_KEY_PAUSE,
    "key.keyboard.scroll.lock" => GLFW_KEY_SCROLL_LOCK,
    "key.keyboard.menu" => GLFW_KEY_MENU,
    "key.keyboard.print.screen" => GLFW_KEY_PRINT_SCREEN,
    "key.keyboard.world.1" => GLFW_KEY_WORLD_1,
    "key.keyboard.world.2" => GLFW_KEY_WORLD_2,
}

static BY_ID: LazyLock<AHashMap<&'static str, &'static KeyBinding>> =
    LazyLock::new(|| BINDINGS.iter().map(|b| (b.id, b)).collect());

/// All key bindings of the closed identifier set, in declaration order.
pub fn bindings() -> &'static [KeyBinding] {
    BINDINGS
}

/// Looks up the full table entry for a key-binding identifier.
pub fn lookup(binding: &str) -> Option<&'static KeyBinding> {
    BY_ID.get(binding).copied()
}

/// Maps a key-binding identifier to its GLFW key code.
///
/// Returns `None` for identifiers outside the closed set.
pub fn glfw_keycode(binding: &str) -> Option<i16> {
    lookup(binding).map(|b| b.keycode)
}

/// Maps a key-binding identifier to the control-event name it triggers.
///
/// Returns `None` for identifiers outside the closed set.
pub fn control_event(binding: &str) -> Option<&'static str> {
    lookup(binding).map(|b| b.event)
}
