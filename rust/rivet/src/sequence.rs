//! Views over runs of consecutive struct records.
//!
//! A [`StructSequenceView`] covers `capacity` records laid out back to back with a
//! stride of `T::sizeof()` bytes. Besides random access it carries a cursor with
//! the familiar buffer semantics: `0 <= mark <= position <= limit <= capacity`.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Bound, RangeBounds};
use std::ptr::NonNull;

use rivet_common::{Error, Result, verify_index};

use crate::memory::MemoryBlock;
use crate::view::{StructType, StructView, check_range, offset_in_block};

/// A sequence of `T` records at a fixed base address.
///
/// Cloning a sequence copies its cursor, not the records. Like [`StructView`], a
/// sequence is `Send` and `Sync` and leaves synchronization of concurrent writes
/// to the caller.
pub struct StructSequenceView<'b, T> {
    base: NonNull<u8>,
    capacity: usize,
    position: usize,
    limit: usize,
    mark: Option<usize>,
    _marker: PhantomData<(&'b [u8], fn() -> T)>,
}

impl<T> Clone for StructSequenceView<'_, T> {
    fn clone(&self) -> Self {
        StructSequenceView {
            base: self.base,
            capacity: self.capacity,
            position: self.position,
            limit: self.limit,
            mark: self.mark,
            _marker: PhantomData,
        }
    }
}

unsafe impl<T> Send for StructSequenceView<'_, T> {}
unsafe impl<T> Sync for StructSequenceView<'_, T> {}

impl<'b, T: StructType> StructSequenceView<'b, T> {
    /// Sequence over as many whole records as fit in `block`, starting at its
    /// first byte. Trailing bytes that do not form a whole record are ignored.
    pub fn new(block: &'b MemoryBlock<'_>) -> Result<Self> {
        let count = block.len() / T::sizeof();
        Self::with_count(block, 0, count)
    }

    /// Sequence of `count` records starting `offset` bytes into `block`.
    pub fn with_count(block: &'b MemoryBlock<'_>, offset: usize, count: usize) -> Result<Self> {
        check_range::<T>(block, offset, count)?;
        // SAFETY: `offset` is within the block.
        let base = unsafe { NonNull::new_unchecked(block.as_mut_ptr().add(offset)) };
        Ok(unsafe { Self::from_non_null(base, count) })
    }

    /// Sequence of `count` records at an absolute `address` inside `block`, or
    /// `None` for the null address.
    pub fn at_address(
        block: &'b MemoryBlock<'_>,
        address: usize,
        count: usize,
    ) -> Result<Option<Self>> {
        if address == 0 {
            return Ok(None);
        }
        let offset = offset_in_block(block, address)?;
        Self::with_count(block, offset, count).map(Some)
    }

    /// Sequence of `count` records at an arbitrary `address`, or `None` for the
    /// null address.
    ///
    /// # Safety
    ///
    /// `address` must point to `count * T::sizeof()` valid bytes, aligned to
    /// `T::alignof()`, that stay valid for `'b`.
    pub unsafe fn from_address(address: usize, count: usize) -> Option<Self> {
        NonNull::new(address as *mut u8).map(|base| unsafe { Self::from_non_null(base, count) })
    }

    unsafe fn from_non_null(base: NonNull<u8>, capacity: usize) -> Self {
        StructSequenceView {
            base,
            capacity,
            position: 0,
            limit: capacity,
            mark: None,
            _marker: PhantomData,
        }
    }

    /// Address of record 0.
    #[inline]
    pub fn address(&self) -> usize {
        self.base.as_ptr() as usize
    }

    /// Distance in bytes between consecutive records.
    #[inline]
    pub fn stride(&self) -> usize {
        T::sizeof()
    }

    /// Number of records the sequence covers.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// View of record `index`, regardless of the cursor.
    pub fn element(&self, index: usize) -> Result<StructView<'b, T>> {
        verify_index!(T::NAME, index, self.capacity);
        Ok(unsafe { self.element_unchecked(index) })
    }

    /// # Safety
    ///
    /// `index` must be less than `self.capacity()`.
    #[inline]
    unsafe fn element_unchecked(&self, index: usize) -> StructView<'b, T> {
        unsafe { StructView::from_non_null(self.base.add(index * T::sizeof())) }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor. Discards the mark if it lies beyond the new position.
    pub fn set_position(&mut self, position: usize) -> Result<&mut Self> {
        if position > self.limit {
            return Err(Error::out_of_bounds("position", position, self.limit));
        }
        self.position = position;
        if self.mark.is_some_and(|mark| mark > position) {
            self.mark = None;
        }
        Ok(self)
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Sets the limit, pulling the position and mark back if they lie beyond it.
    pub fn set_limit(&mut self, limit: usize) -> Result<&mut Self> {
        if limit > self.capacity {
            return Err(Error::out_of_bounds("limit", limit, self.capacity));
        }
        self.limit = limit;
        if self.position > limit {
            self.position = limit;
        }
        if self.mark.is_some_and(|mark| mark > limit) {
            self.mark = None;
        }
        Ok(self)
    }

    /// Records between the position and the limit.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    #[inline]
    pub fn has_remaining(&self) -> bool {
        self.position < self.limit
    }

    /// Remembers the current position.
    pub fn mark(&mut self) -> &mut Self {
        self.mark = Some(self.position);
        self
    }

    /// Returns the position to the mark.
    pub fn reset(&mut self) -> Result<&mut Self> {
        let mark = self
            .mark
            .ok_or_else(|| Error::invalid_arg("mark", "no mark has been set"))?;
        self.position = mark;
        Ok(self)
    }

    /// Position to 0, mark discarded. The limit is unchanged.
    pub fn rewind(&mut self) -> &mut Self {
        self.position = 0;
        self.mark = None;
        self
    }

    /// Limit to the current position, then position to 0.
    pub fn flip(&mut self) -> &mut Self {
        self.limit = self.position;
        self.position = 0;
        self.mark = None;
        self
    }

    /// Position to 0, limit to capacity, mark discarded.
    pub fn clear(&mut self) -> &mut Self {
        self.position = 0;
        self.limit = self.capacity;
        self.mark = None;
        self
    }

    /// View of the record at the position, then advances the position.
    pub fn get(&mut self) -> Result<StructView<'b, T>> {
        let view = self.current()?;
        self.position += 1;
        Ok(view)
    }

    /// View of the record at the position, without moving it.
    pub fn current(&self) -> Result<StructView<'b, T>> {
        verify_index!(T::NAME, self.position, self.limit);
        Ok(unsafe { self.element_unchecked(self.position) })
    }

    /// Iterates over the records between the position and the limit.
    pub fn iter(&self) -> StructSequenceIter<'b, T> {
        StructSequenceIter {
            base: self.base,
            front: self.position,
            back: self.limit,
            _marker: PhantomData,
        }
    }

    /// New sequence over the records between the position and the limit. The two
    /// sequences share memory but have independent cursors.
    pub fn slice(&self) -> Self {
        // SAFETY: `position <= limit <= capacity`.
        unsafe {
            Self::from_non_null(
                self.base.add(self.position * T::sizeof()),
                self.remaining(),
            )
        }
    }

    /// New sequence over records `range` of this one, independent of the cursor.
    pub fn slice_range(&self, range: impl RangeBounds<usize>) -> Result<Self> {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => self.capacity,
        };
        if end > self.capacity {
            return Err(Error::out_of_bounds(T::NAME, end, self.capacity));
        }
        if start > end {
            return Err(Error::invalid_arg(
                "range",
                format!("start {start} is past end {end}"),
            ));
        }
        Ok(unsafe { Self::from_non_null(self.base.add(start * T::sizeof()), end - start) })
    }
}

impl<T: StructType> fmt::Debug for StructSequenceView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructSequenceView")
            .field("type", &T::NAME)
            .field("address", &format_args!("{:#x}", self.address()))
            .field("capacity", &self.capacity)
            .field("position", &self.position)
            .field("limit", &self.limit)
            .field("mark", &self.mark)
            .finish()
    }
}

impl<'s, 'b, T: StructType> IntoIterator for &'s StructSequenceView<'b, T> {
    type Item = StructView<'b, T>;
    type IntoIter = StructSequenceIter<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the records of a [`StructSequenceView`].
pub struct StructSequenceIter<'b, T> {
    base: NonNull<u8>,
    front: usize,
    back: usize,
    _marker: PhantomData<(&'b [u8], fn() -> T)>,
}

unsafe impl<T> Send for StructSequenceIter<'_, T> {}
unsafe impl<T> Sync for StructSequenceIter<'_, T> {}

impl<'b, T: StructType> Iterator for StructSequenceIter<'b, T> {
    type Item = StructView<'b, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let view = unsafe { StructView::from_non_null(self.base.add(self.front * T::sizeof())) };
        self.front += 1;
        Some(view)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T: StructType> DoubleEndedIterator for StructSequenceIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(unsafe { StructView::from_non_null(self.base.add(self.back * T::sizeof())) })
    }
}

impl<T: StructType> ExactSizeIterator for StructSequenceIter<'_, T> {}
