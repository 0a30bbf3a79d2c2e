use std::sync::LazyLock;

use crate::layout::{FieldDescriptor, Layout};
use crate::view::{StructType, StructView};

/// A monitor video mode, as returned by `glfwGetVideoMode`.
///
/// ```c
/// struct GLFWvidmode {
///     int width;
///     int height;
///     int redBits;
///     int greenBits;
///     int blueBits;
///     int refreshRate;
/// }
/// ```
pub struct VidMode;

impl VidMode {
    pub const WIDTH: usize = 0;
    pub const HEIGHT: usize = 1;
    pub const RED_BITS: usize = 2;
    pub const GREEN_BITS: usize = 3;
    pub const BLUE_BITS: usize = 4;
    pub const REFRESH_RATE: usize = 5;
}

static LAYOUT: LazyLock<Layout> =
    LazyLock::new(|| super::static_layout(VidMode::NAME, &[FieldDescriptor::scalar(4); 6]));

impl StructType for VidMode {
    const NAME: &'static str = "GLFWvidmode";
    const FIELD_NAMES: &'static [&'static str] = &[
        "width",
        "height",
        "redBits",
        "greenBits",
        "blueBits",
        "refreshRate",
    ];

    fn layout() -> &'static Layout {
        &LAYOUT
    }
}

impl StructView<'_, VidMode> {
    #[inline]
    fn int(&self, field: usize) -> i32 {
        unsafe { self.read_unchecked(VidMode::layout().offsetof(field)) }
    }

    pub fn width(&self) -> i32 {
        self.int(VidMode::WIDTH)
    }

    pub fn height(&self) -> i32 {
        self.int(VidMode::HEIGHT)
    }

    pub fn red_bits(&self) -> i32 {
        self.int(VidMode::RED_BITS)
    }

    pub fn green_bits(&self) -> i32 {
        self.int(VidMode::GREEN_BITS)
    }

    pub fn blue_bits(&self) -> i32 {
        self.int(VidMode::BLUE_BITS)
    }

    /// Refresh rate in Hz.
    pub fn refresh_rate(&self) -> i32 {
        self.int(VidMode::REFRESH_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBlock;
    use crate::sequence::StructSequenceView;

    #[test]
    fn test_mode_list() {
        let modes: [[i32; 6]; 3] = [
            [640, 480, 8, 8, 8, 60],
            [1920, 1080, 8, 8, 8, 144],
            [3840, 2160, 10, 10, 10, 120],
        ];
        let bytes: Vec<u8> = modes
            .iter()
            .flatten()
            .flat_map(|v| v.to_ne_bytes())
            .collect();
        let block: MemoryBlock = crate::memory::OwnedBlock::copy_from_slice(&bytes, 4)
            .unwrap()
            .into();

        assert_eq!(VidMode::sizeof(), 24);
        let seq = StructSequenceView::<VidMode>::new(&block).unwrap();
        assert_eq!(seq.capacity(), 3);
        let widest = seq.iter().max_by_key(|m| m.width()).unwrap();
        assert_eq!(widest.height(), 2160);
        assert_eq!(widest.red_bits(), 10);
        assert_eq!(seq.element(1).unwrap().refresh_rate(), 144);
        assert_eq!(seq.element(0).unwrap().get::<i32>(VidMode::BLUE_BITS).unwrap(), 8);
    }
}
