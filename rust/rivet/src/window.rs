//! Windows onto the array fields of a struct.
//!
//! A window is a view over `count` contiguous elements inside a memory block. It
//! is not a copy: every read goes to memory, so writes made through another view
//! of the same bytes, or by native code, are observed immediately.

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use rivet_common::{Error, Result, verify_index};

use crate::element::{self, Element};

/// Read-only window onto an array field.
pub struct ArrayWindow<'b, E> {
    ptr: NonNull<u8>,
    len: usize,
    name: &'static str,
    _marker: PhantomData<&'b [E]>,
}

impl<E> Clone for ArrayWindow<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ArrayWindow<'_, E> {}

// SAFETY: windows only perform raw, element-sized reads and writes; callers must
// synchronize concurrent writes to the same bytes externally.
unsafe impl<E: Element> Send for ArrayWindow<'_, E> {}
unsafe impl<E: Element> Sync for ArrayWindow<'_, E> {}

impl<'b, E: Element> ArrayWindow<'b, E> {
    /// # Safety
    ///
    /// `ptr` must be aligned for `E` and valid for `len` elements for `'b`.
    #[inline]
    pub(crate) unsafe fn new(ptr: NonNull<u8>, len: usize, name: &'static str) -> Self {
        ArrayWindow {
            ptr,
            len,
            name,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Address of the first element.
    #[inline]
    pub fn address(&self) -> usize {
        self.ptr.as_ptr() as usize
    }

    /// Name of the field this window covers.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Reads the element at `index`.
    pub fn get(&self, index: usize) -> Result<E> {
        verify_index!(self.name, index, self.len);
        Ok(unsafe { self.get_unchecked(index) })
    }

    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    #[inline]
    pub(crate) unsafe fn get_unchecked(&self, index: usize) -> E {
        unsafe { element::read(self.ptr.as_ptr().add(index * size_of::<E>())) }
    }

    pub fn iter(&self) -> ArrayWindowIter<'b, E> {
        ArrayWindowIter {
            window: *self,
            front: 0,
            back: self.len,
        }
    }

    /// Copies the current contents into a new vector.
    pub fn to_vec(&self) -> Vec<E> {
        self.iter().collect()
    }

    /// Copies the current contents into `dst`, which must have the same length.
    pub fn copy_to_slice(&self, dst: &mut [E]) -> Result<()> {
        if dst.len() != self.len {
            return Err(length_mismatch(self.name, self.len, dst.len()));
        }
        for (i, slot) in dst.iter_mut().enumerate() {
            *slot = unsafe { self.get_unchecked(i) };
        }
        Ok(())
    }
}

impl<E: Element> fmt::Debug for ArrayWindow<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'b, E: Element> IntoIterator for ArrayWindow<'b, E> {
    type Item = E;
    type IntoIter = ArrayWindowIter<'b, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of an [`ArrayWindow`], reading each element when
/// it is reached.
pub struct ArrayWindowIter<'b, E> {
    window: ArrayWindow<'b, E>,
    front: usize,
    back: usize,
}

impl<E: Element> Iterator for ArrayWindowIter<'_, E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        if self.front == self.back {
            return None;
        }
        let value = unsafe { self.window.get_unchecked(self.front) };
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<E: Element> DoubleEndedIterator for ArrayWindowIter<'_, E> {
    fn next_back(&mut self) -> Option<E> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(unsafe { self.window.get_unchecked(self.back) })
    }
}

impl<E: Element> ExactSizeIterator for ArrayWindowIter<'_, E> {}

/// Writable window onto an array field of a mutable struct.
///
/// Dereferences to [`ArrayWindow`] for reads.
#[derive(Clone, Copy)]
pub struct ArrayWindowMut<'b, E>(ArrayWindow<'b, E>);

impl<'b, E: Element> ArrayWindowMut<'b, E> {
    /// # Safety
    ///
    /// Same as [`ArrayWindow::new`], and the memory must be writable.
    #[inline]
    pub(crate) unsafe fn new(ptr: NonNull<u8>, len: usize, name: &'static str) -> Self {
        ArrayWindowMut(unsafe { ArrayWindow::new(ptr, len, name) })
    }

    pub fn as_window(&self) -> ArrayWindow<'b, E> {
        self.0
    }

    /// Writes `value` at `index`.
    pub fn set(&self, index: usize, value: E) -> Result<()> {
        verify_index!(self.0.name, index, self.0.len);
        unsafe { self.set_unchecked(index, value) };
        Ok(())
    }

    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    #[inline]
    pub(crate) unsafe fn set_unchecked(&self, index: usize, value: E) {
        unsafe { element::write(self.0.ptr.as_ptr().add(index * size_of::<E>()), value) }
    }

    pub fn fill(&self, value: E) {
        for i in 0..self.0.len {
            unsafe { self.set_unchecked(i, value) };
        }
    }

    /// Overwrites the whole array with `src`, which must have the same length.
    pub fn copy_from_slice(&self, src: &[E]) -> Result<()> {
        if src.len() != self.0.len {
            return Err(length_mismatch(self.0.name, self.0.len, src.len()));
        }
        for (i, &value) in src.iter().enumerate() {
            unsafe { self.set_unchecked(i, value) };
        }
        Ok(())
    }
}

impl<'b, E> std::ops::Deref for ArrayWindowMut<'b, E> {
    type Target = ArrayWindow<'b, E>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<E: Element> fmt::Debug for ArrayWindowMut<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cold]
fn length_mismatch(name: &str, expected: usize, actual: usize) -> Error {
    Error::invalid_arg(
        name,
        format!("expected a slice of {expected} elements, got {actual}"),
    )
}
