//! Typed views over a single struct record.
//!
//! A [`StructView`] is an address plus a compile-time struct type. It never copies:
//! every accessor reads from or writes to the underlying memory directly, so two
//! views over the same address observe each other's writes.
//!
//! Views borrow the [`MemoryBlock`] they were created from, which keeps the block
//! from being released or moved while any view of it is alive.

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use rivet_bytes::align::is_aligned;
use rivet_common::{Error, Result, verify_index};

use crate::element::{self, Element};
use crate::layout::{FieldLayout, Layout};
use crate::memory::MemoryBlock;
use crate::window::{ArrayWindow, ArrayWindowMut};

/// A fixed-layout native struct type.
///
/// Implementors are zero-sized markers; the layout is computed once and shared.
pub trait StructType: Sized + 'static {
    /// C name of the struct.
    const NAME: &'static str;

    /// Field names, in declaration order.
    const FIELD_NAMES: &'static [&'static str];

    fn layout() -> &'static Layout;

    /// Size of one record in bytes.
    #[inline]
    fn sizeof() -> usize {
        Self::layout().size()
    }

    /// Alignment of one record in bytes.
    #[inline]
    fn alignof() -> usize {
        Self::layout().alignment()
    }

    /// Name of the field at `index`, for diagnostics.
    fn field_name(index: usize) -> &'static str {
        Self::FIELD_NAMES.get(index).copied().unwrap_or(Self::NAME)
    }
}

/// Struct types whose views allow writes.
///
/// Read-only types, such as records filled in by native code for the caller to
/// inspect, do not implement this trait, so their views have no setters.
pub trait MutableStruct: StructType {}

/// A view of one `T` record at a fixed address.
///
/// `StructView` is `Copy`, `Send` and `Sync`. It performs no synchronization:
/// concurrent writes to the same bytes must be coordinated by the caller.
pub struct StructView<'b, T> {
    ptr: NonNull<u8>,
    _marker: PhantomData<(&'b [u8], fn() -> T)>,
}

impl<T> Clone for StructView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StructView<'_, T> {}

// SAFETY: a view is an address; reads and writes through it are raw volatile
// accesses whose synchronization is the caller's responsibility.
unsafe impl<T> Send for StructView<'_, T> {}
unsafe impl<T> Sync for StructView<'_, T> {}

impl<'b, T: StructType> StructView<'b, T> {
    /// View of the record at the start of `block`.
    pub fn new(block: &'b MemoryBlock<'_>) -> Result<Self> {
        Self::at(block, 0)
    }

    /// View of the record `offset` bytes into `block`.
    ///
    /// The record must lie entirely within the block and start at an address
    /// aligned to `T::alignof()`.
    pub fn at(block: &'b MemoryBlock<'_>, offset: usize) -> Result<Self> {
        check_range::<T>(block, offset, 1)?;
        // SAFETY: the record lies within the block, which outlives `'b`.
        let ptr = unsafe { NonNull::new_unchecked(block.as_mut_ptr().add(offset)) };
        Ok(unsafe { Self::from_non_null(ptr) })
    }

    /// View of the record at an absolute `address` inside `block`, or `None` for
    /// the null address.
    pub fn at_address(block: &'b MemoryBlock<'_>, address: usize) -> Result<Option<Self>> {
        if address == 0 {
            return Ok(None);
        }
        let offset = offset_in_block(block, address)?;
        Self::at(block, offset).map(Some)
    }

    /// View of the record at an arbitrary `address`, or `None` for the null
    /// address.
    ///
    /// # Safety
    ///
    /// `address` must point to a readable (and, for mutable types, writable)
    /// region of at least `T::sizeof()` bytes, aligned to `T::alignof()`, that
    /// stays valid for `'b`.
    pub unsafe fn from_address(address: usize) -> Option<Self> {
        NonNull::new(address as *mut u8).map(|ptr| unsafe { Self::from_non_null(ptr) })
    }

    /// # Safety
    ///
    /// See [`StructView::from_address`].
    #[inline]
    pub(crate) unsafe fn from_non_null(ptr: NonNull<u8>) -> Self {
        debug_assert!(is_aligned(ptr.as_ptr() as usize, T::alignof()));
        StructView {
            ptr,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn address(&self) -> usize {
        self.ptr.as_ptr() as usize
    }

    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr.as_ptr()
    }

    #[inline]
    pub fn layout(&self) -> &'static Layout {
        T::layout()
    }

    /// Reads scalar field `field`, or the first element of an array field.
    pub fn get<E: Element>(&self, field: usize) -> Result<E> {
        self.get_at(field, 0)
    }

    /// Reads element `index` of field `field`.
    pub fn get_at<E: Element>(&self, field: usize, index: usize) -> Result<E> {
        let f = checked_field::<T, E>(field)?;
        verify_index!(T::field_name(field), index, f.count);
        Ok(unsafe { self.read_unchecked(f.offset + index * f.element_size()) })
    }

    /// Window onto array field `field`.
    pub fn array<E: Element>(&self, field: usize) -> Result<ArrayWindow<'b, E>> {
        checked_field::<T, E>(field)?;
        Ok(unsafe { self.window_unchecked(field) })
    }

    /// Copies the record bytes into a new vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let size = T::sizeof();
        let mut out = Vec::with_capacity(size);
        // SAFETY: the view covers `size` readable bytes.
        unsafe {
            std::ptr::copy_nonoverlapping(self.ptr.as_ptr(), out.as_mut_ptr(), size);
            out.set_len(size);
        }
        out
    }

    /// # Safety
    ///
    /// `offset` must be the offset of an element of type `E` within `T`.
    #[inline]
    pub(crate) unsafe fn read_unchecked<E: Element>(&self, offset: usize) -> E {
        unsafe { element::read(self.ptr.as_ptr().add(offset)) }
    }

    /// # Safety
    ///
    /// `field` must be a valid field index whose element size is `size_of::<E>()`.
    #[inline]
    pub(crate) unsafe fn window_unchecked<E: Element>(&self, field: usize) -> ArrayWindow<'b, E> {
        let f = &T::layout().fields()[field];
        unsafe {
            ArrayWindow::new(
                self.ptr.add(f.offset),
                f.count,
                T::field_name(field),
            )
        }
    }
}

impl<'b, T: MutableStruct> StructView<'b, T> {
    /// Writes scalar field `field`, or the first element of an array field.
    pub fn set<E: Element>(&self, field: usize, value: E) -> Result<()> {
        self.set_at(field, 0, value)
    }

    /// Writes element `index` of field `field`.
    pub fn set_at<E: Element>(&self, field: usize, index: usize, value: E) -> Result<()> {
        let f = checked_field::<T, E>(field)?;
        verify_index!(T::field_name(field), index, f.count);
        unsafe { self.write_unchecked(f.offset + index * f.element_size(), value) };
        Ok(())
    }

    /// Writable window onto array field `field`.
    pub fn array_mut<E: Element>(&self, field: usize) -> Result<ArrayWindowMut<'b, E>> {
        let f = checked_field::<T, E>(field)?;
        Ok(unsafe {
            ArrayWindowMut::new(self.ptr.add(f.offset), f.count, T::field_name(field))
        })
    }

    /// Copies `bytes`, which must be exactly one record, over the record.
    pub fn copy_from_bytes(&self, bytes: &[u8]) -> Result<()> {
        if bytes.len() != T::sizeof() {
            return Err(Error::invalid_arg(
                "bytes",
                format!(
                    "expected {} bytes for {}, got {}",
                    T::sizeof(),
                    T::NAME,
                    bytes.len()
                ),
            ));
        }
        // SAFETY: the view covers `sizeof` writable bytes; `bytes` is a distinct
        // Rust allocation or a copy taken before this call.
        unsafe {
            std::ptr::copy(bytes.as_ptr(), self.ptr.as_ptr(), bytes.len());
        }
        Ok(())
    }

    /// # Safety
    ///
    /// `offset` must be the offset of an element of type `E` within `T`.
    #[inline]
    pub(crate) unsafe fn write_unchecked<E: Element>(&self, offset: usize, value: E) {
        unsafe { element::write(self.ptr.as_ptr().add(offset), value) }
    }
}

impl<T: StructType> fmt::Debug for StructView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(T::NAME)
            .field("address", &format_args!("{:#x}", self.address()))
            .finish()
    }
}

/// Field `field` of `T`, checked to hold elements of type `E`.
fn checked_field<T: StructType, E: Element>(field: usize) -> Result<&'static FieldLayout> {
    let f = T::layout().field(field)?;
    if f.element_size() != size_of::<E>() {
        return Err(Error::invalid_arg(
            T::field_name(field),
            format!(
                "field of {}-byte elements cannot be accessed as {}",
                f.element_size(),
                E::C_TYPE
            ),
        ));
    }
    Ok(f)
}

/// Checks that `count` records of `T` starting `offset` bytes into `block` lie
/// within the block and are aligned. An empty range is never misaligned.
pub(crate) fn check_range<T: StructType>(
    block: &MemoryBlock<'_>,
    offset: usize,
    count: usize,
) -> Result<()> {
    let end = count
        .checked_mul(T::sizeof())
        .and_then(|bytes| bytes.checked_add(offset));
    match end {
        Some(end) if end <= block.len() => {}
        _ => {
            return Err(Error::invalid_arg(
                "offset",
                format!(
                    "{count} x {} at offset {offset} does not fit in a block of {} bytes",
                    T::NAME,
                    block.len()
                ),
            ));
        }
    }
    if count > 0 && !block.is_aligned_at(offset, T::alignof()) {
        return Err(Error::invalid_arg(
            "offset",
            format!(
                "address {:#x} is not aligned to {} bytes as {} requires",
                block.address().wrapping_add(offset),
                T::alignof(),
                T::NAME
            ),
        ));
    }
    Ok(())
}

/// Offset of an absolute `address` from the start of `block`.
pub(crate) fn offset_in_block(block: &MemoryBlock<'_>, address: usize) -> Result<usize> {
    address
        .checked_sub(block.address())
        .filter(|&offset| offset <= block.len())
        .ok_or_else(|| {
            Error::invalid_arg(
                "address",
                format!(
                    "{address:#x} is outside the block at {:#x} ({} bytes)",
                    block.address(),
                    block.len()
                ),
            )
        })
}
