//! Native scalar types that can be stored in struct fields.

use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}

/// A plain scalar that can be read from or written to a struct field.
///
/// The element size equals the field alignment declared in the struct layout:
/// a field with alignment 4 holds `i32`, `u32` or `f32` elements.
///
/// This trait is sealed.
pub trait Element: bytemuck::Pod + PartialEq + Debug + sealed::Sealed {
    /// C name of the type, used in error messages.
    const C_TYPE: &'static str;
}

macro_rules! impl_element {
    ($($t:ty => $c:literal),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl Element for $t {
                const C_TYPE: &'static str = $c;
            }
        )*
    };
}

impl_element! {
    u8 => "unsigned char",
    i8 => "signed char",
    u16 => "unsigned short",
    i16 => "short",
    u32 => "unsigned int",
    i32 => "int",
    u64 => "uint64_t",
    i64 => "int64_t",
    f32 => "float",
    f64 => "double",
    usize => "uintptr_t",
}

/// Reads an element at `ptr` without caching.
///
/// # Safety
///
/// `ptr` must be valid for reads of `size_of::<E>()` bytes and aligned for `E`.
#[inline]
pub(crate) unsafe fn read<E: Element>(ptr: *const u8) -> E {
    unsafe { ptr.cast::<E>().read_volatile() }
}

/// Writes an element at `ptr`.
///
/// # Safety
///
/// `ptr` must be valid for writes of `size_of::<E>()` bytes and aligned for `E`.
#[inline]
pub(crate) unsafe fn write<E: Element>(ptr: *mut u8, value: E) {
    unsafe { ptr.cast::<E>().write_volatile(value) }
}
