//! GLFW input codes, as defined by `glfw3.h`.

pub const GLFW_KEY_UNKNOWN: i16 = -1;

pub const GLFW_MOUSE_BUTTON_1: i16 = 0;
pub const GLFW_MOUSE_BUTTON_2: i16 = 1;
pub const GLFW_MOUSE_BUTTON_3: i16 = 2;
pub const GLFW_MOUSE_BUTTON_4: i16 = 3;
pub const GLFW_MOUSE_BUTTON_5: i16 = 4;
pub const GLFW_MOUSE_BUTTON_6: i16 = 5;
pub const GLFW_MOUSE_BUTTON_7: i16 = 6;
pub const GLFW_MOUSE_BUTTON_8: i16 = 7;
pub const GLFW_MOUSE_BUTTON_LAST: i16 = GLFW_MOUSE_BUTTON_8;
pub const GLFW_MOUSE_BUTTON_LEFT: i16 = GLFW_MOUSE_BUTTON_1;
pub const GLFW_MOUSE_BUTTON_RIGHT: i16 = GLFW_MOUSE_BUTTON_2;
pub const GLFW_MOUSE_BUTTON_MIDDLE: i16 = GLFW_MOUSE_BUTTON_3;

// Printable keys
pub const GLFW_KEY_SPACE: i16 = 32;
pub const GLFW_KEY_APOSTROPHE: i16 = 39;
pub const GLFW_KEY_COMMA: i16 = 44;
pub const GLFW_KEY_MINUS: i16 = 45;
pub const GLFW_KEY_PERIOD: i16 = 46;
pub const GLFW_KEY_SLASH: i16 = 47;
pub const GLFW_KEY_0: i16 = 48;
pub const GLFW_KEY_1: i16 = 49;
pub const GLFW_KEY_2: i16 = 50;
pub const GLFW_KEY_3: i16 = 51;
pub const GLFW_KEY_4: i16 = 52;
pub const GLFW_KEY_5: i16 = 53;
pub const GLFW_KEY_6: i16 = 54;
pub const GLFW_KEY_7: i16 = 55;
pub const GLFW_KEY_8: i16 = 56;
pub const GLFW_KEY_9: i16 = 57;
pub const GLFW_KEY_SEMICOLON: i16 = 59;
pub const GLFW_KEY_EQUAL: i16 = 61;
pub const GLFW_KEY_A: i16 = 65;
pub const GLFW_KEY_B: i16 = 66;
pub const GLFW_KEY_C: i16 = 67;
pub const GLFW_KEY_D: i16 = 68;
pub const GLFW_KEY_E: i16 = 69;
pub const GLFW_KEY_F: i16 = 70;
pub const GLFW_KEY_G: i16 = 71;
pub const GLFW_KEY_H: i16 = 72;
pub const GLFW_KEY_I: i16 = 73;
pub const GLFW_KEY_J: i16 = 74;
pub const GLFW_KEY_K: i16 = 75;
pub const GLFW_KEY_L: i16 = 76;
pub const GLFW_KEY_M: i16 = 77;
pub const GLFW_KEY_N: i16 = 78;
pub const GLFW_KEY_O: i16 = 79;
pub const GLFW_KEY_P: i16 = 80;
pub const GLFW_KEY_Q: i16 = 81;
pub const GLFW_KEY_R: i16 = 82;
pub const GLFW_KEY_S: i16 = 83;
pub const GLFW_KEY_T: i16 = 84;
pub const GLFW_KEY_U: i16 = 85;
pub const GLFW_KEY_V: i16 = 86;
pub const GLFW_KEY_W: i16 = 87;
pub const GLFW_KEY_X: i16 = 88;
pub const GLFW_KEY_Y: i16 = 89;
pub const GLFW_KEY_Z: i16 = 90;
pub const GLFW_KEY_LEFT_BRACKET: i16 = 91;
pub const GLFW_KEY_BACKSLASH: i16 = 92;
pub const GLFW_KEY_RIGHT_BRACKET: i16 = 93;
pub const GLFW_KEY_GRAVE_ACCENT: i16 = 96;
pub const GLFW_KEY_WORLD_1: i16 = 161;
pub const GLFW_KEY_WORLD_2: i16 = 162;

// Function keys
pub const GLFW_KEY_ESCAPE: i16 = 256;
pub const GLFW_KEY_ENTER: i16 = 257;
pub const GLFW_KEY_TAB: i16 = 258;
pub const GLFW_KEY_BACKSPACE: i16 = 259;
pub const GLFW_KEY_INSERT: i16 = 260;
pub const GLFW_KEY_DELETE: i16 = 261;
pub const GLFW_KEY_RIGHT: i16 = 262;
pub const GLFW_KEY_LEFT: i16 = 263;
pub const GLFW_KEY_DOWN: i16 = 264;
pub const GLFW_KEY_UP: i16 = 265;
pub const GLFW_KEY_PAGE_UP: i16 = 266;
pub const GLFW_KEY_PAGE_DOWN: i16 = 267;
pub const GLFW_KEY_HOME: i16 = 268;
pub const GLFW_KEY_END: i16 = 269;
pub const GLFW_KEY_CAPS_LOCK: i16 = 280;
pub const GLFW_KEY_SCROLL_LOCK: i16 = 281;
pub const GLFW_KEY_NUM_LOCK: i16 = 282;
pub const GLFW_KEY_PRINT_SCREEN: i16 = 283;
pub const GLFW_KEY_PAUSE: i16 = 284;
pub const GLFW_KEY_F1: i16 = 290;
pub const GLFW_KEY_F2: i16 = 291;
pub const GLFW_KEY_F3: i16 = 292;
pub const GLFW_KEY_F4: i16 = 293;
pub const GLFW_KEY_F5: i16 = 294;
pub const GLFW_KEY_F6: i16 = 295;
pub const GLFW_KEY_F7: i16 = 296;
pub const GLFW_KEY_F8: i16 = 297;
pub const GLFW_KEY_F9: i16 = 298;
pub const GLFW_KEY_F10: i16 = 299;
pub const GLFW_KEY_F11: i16 = 300;
pub const GLFW_KEY_F12: i16 = 301;
pub const GLFW_KEY_F13: i16 = 302;
pub const GLFW_KEY_F14: i16 = 303;
pub const GLFW_KEY_F15: i16 = 304;
pub const GLFW_KEY_F16: i16 = 305;
pub const GLFW_KEY_F17: i16 = 306;
pub const GLFW_KEY_F18: i16 = 307;
pub const GLFW_KEY_F19: i16 = 308;
pub const GLFW_KEY_F20: i16 = 309;
pub const GLFW_KEY_F21: i16 = 310;
pub const GLFW_KEY_F22: i16 = 311;
pub const GLFW_KEY_F23: i16 = 312;
pub const GLFW_KEY_F24: i16 = 313;
pub const GLFW_KEY_F25: i16 = 314;
pub const GLFW_KEY_KP_0: i16 = 320;
pub const GLFW_KEY_KP_1: i16 = 321;
pub const GLFW_KEY_KP_2: i16 = 322;
pub const GLFW_KEY_KP_3: i16 = 323;
pub const GLFW_KEY_KP_4: i16 = 324;
pub const GLFW_KEY_KP_5: i16 = 325;
pub const GLFW_KEY_KP_6: i16 = 326;
pub const GLFW_KEY_KP_7: i16 = 327;
pub const GLFW_KEY_KP_8: i16 = 328;
pub const GLFW_KEY_KP_9: i16 = 329;
pub const GLFW_KEY_KP_DECIMAL: i16 = 330;
pub const GLFW_KEY_KP_DIVIDE: i16 = 331;
pub const GLFW_KEY_KP_MULTIPLY: i16 = 332;
pub const GLFW_KEY_KP_SUBTRACT: i16 = 333;
pub const GLFW_KEY_KP_ADD: i16 = 334;
pub const GLFW_KEY_KP_ENTER: i16 = 335;
pub const GLFW_KEY_KP_EQUAL: i16 = 336;
pub const GLFW_KEY_LEFT_SHIFT: i16 = 340;
pub const GLFW_KEY_LEFT_CONTROL: i16 = 341;
pub const GLFW_KEY_LEFT_ALT: i16 = 342;
pub const GLFW_KEY_LEFT_SUPER: i16 = 343;
pub const GLFW_KEY_RIGHT_SHIFT: i16 = 344;
pub const GLFW_KEY_RIGHT_CONTROL: i16 = 345;
pub const GLFW_KEY_RIGHT_ALT: i16 = 346;
pub const GLFW_KEY_RIGHT_SUPER: i16 = 347;
pub const GLFW_KEY_MENU: i16 = 348;
pub const GLFW_KEY_LAST: i16 = GLFW_KEY_MENU;

/// Button state values stored in the gamepad `buttons` array.
pub const GLFW_RELEASE: u8 = 0;
pub const GLFW_PRESS: u8 = 1;
