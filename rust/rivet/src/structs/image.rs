use std::sync::LazyLock;

use crate::layout::{FieldDescriptor, Layout};
use crate::view::{MutableStruct, StructType, StructView};

use super::POINTER_SIZE;

/// Image data, as passed to `glfwCreateCursor` and `glfwSetWindowIcon`.
///
/// ```c
/// struct GLFWimage {
///     int width;
///     int height;
///     unsigned char* pixels;
/// }
/// ```
///
/// The caller fills in the record, so views of it are writable. `pixels` holds
/// the address of `width * height` RGBA pixels owned elsewhere.
pub struct Image;

impl Image {
    pub const WIDTH: usize = 0;
    pub const HEIGHT: usize = 1;
    pub const PIXELS: usize = 2;
}

static LAYOUT: LazyLock<Layout> = LazyLock::new(|| {
    super::static_layout(
        Image::NAME,
        &[
            FieldDescriptor::scalar(4),
            FieldDescriptor::scalar(4),
            FieldDescriptor::scalar(POINTER_SIZE),
        ],
    )
});

impl StructType for Image {
    const NAME: &'static str = "GLFWimage";
    const FIELD_NAMES: &'static [&'static str] = &["width", "height", "pixels"];

    fn layout() -> &'static Layout {
        &LAYOUT
    }
}

impl MutableStruct for Image {}

impl StructView<'_, Image> {
    pub fn width(&self) -> i32 {
        unsafe { self.read_unchecked(Image::layout().offsetof(Image::WIDTH)) }
    }

    pub fn height(&self) -> i32 {
        unsafe { self.read_unchecked(Image::layout().offsetof(Image::HEIGHT)) }
    }

    /// Address of the pixel data.
    pub fn pixels(&self) -> usize {
        unsafe { self.read_unchecked(Image::layout().offsetof(Image::PIXELS)) }
    }

    pub fn set_width(&self, width: i32) -> &Self {
        unsafe { self.write_unchecked(Image::layout().offsetof(Image::WIDTH), width) };
        self
    }

    pub fn set_height(&self, height: i32) -> &Self {
        unsafe { self.write_unchecked(Image::layout().offsetof(Image::HEIGHT), height) };
        self
    }

    pub fn set_pixels(&self, address: usize) -> &Self {
        unsafe { self.write_unchecked(Image::layout().offsetof(Image::PIXELS), address) };
        self
    }

    /// Number of pixel bytes the record describes, 4 per pixel.
    pub fn pixel_bytes(&self) -> usize {
        (self.width().max(0) as usize)
            .saturating_mul(self.height().max(0) as usize)
            .saturating_mul(4)
    }
}

#[cfg(test)]
mod tests {
    use std::mem::offset_of;

    use super::*;
    use crate::memory::MemoryBlock;

    #[repr(C)]
    struct NativeImage {
        width: i32,
        height: i32,
        pixels: *mut u8,
    }

    #[test]
    fn test_layout_matches_native() {
        let layout = Image::layout();
        assert_eq!(layout.size(), size_of::<NativeImage>());
        assert_eq!(layout.alignment(), align_of::<NativeImage>());
        assert_eq!(layout.offsetof(Image::HEIGHT), offset_of!(NativeImage, height));
        assert_eq!(layout.offsetof(Image::PIXELS), offset_of!(NativeImage, pixels));
    }

    #[test]
    fn test_write_then_read() {
        let pixels = MemoryBlock::allocate_zeroed(16 * 16 * 4, 4).unwrap();
        let block = MemoryBlock::allocate_zeroed(Image::sizeof(), Image::alignof()).unwrap();
        let image = StructView::<Image>::new(&block).unwrap();
        image
            .set_width(16)
            .set_height(16)
            .set_pixels(pixels.address());
        assert_eq!(image.width(), 16);
        assert_eq!(image.height(), 16);
        assert_eq!(image.pixels(), pixels.address());
        assert_eq!(image.pixel_bytes(), pixels.len());

        image.set(Image::WIDTH, -3i32).unwrap();
        assert_eq!(image.width(), -3);
        assert_eq!(image.pixel_bytes(), 0);
        assert!(image.set(Image::PIXELS, 1u16).is_err());
        assert!(image.set(3, 1i32).unwrap_err().is_out_of_bounds());
    }
}
