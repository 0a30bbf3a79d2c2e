use thiserror::Error;

use crate::align::checked_align_up;

/// A byte vector that maintains memory alignment guarantees for its underlying storage.
///
/// The data pointer is aligned to the alignment requested at construction and the
/// backing allocation is reserved in 64-byte blocks. Unlike `Vec<u8>`, every
/// allocating constructor is fallible: an exhausted allocator is reported as an
/// [`AllocError`] rather than aborting.
///
/// The vector never reallocates behind the caller's back once its capacity covers
/// the length, so `as_ptr()` stays stable for as long as no growing operation is
/// invoked.
pub struct AlignedByteVec {
    /// The underlying byte vector, may include padding at start
    inner: Vec<u8>,
    /// Offset from start of inner vec to maintain alignment
    start: u32,
    /// Required alignment, specified during vector creation.
    alignment: u32,
}

/// Allocation failure reported by the fallible [`AlignedByteVec`] constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot allocate {size} bytes aligned to {alignment}")]
pub struct AllocError {
    /// Requested size in bytes.
    pub size: usize,
    /// Requested alignment in bytes.
    pub alignment: usize,
}

impl AlignedByteVec {
    /// Largest supported alignment.
    pub const MAX_ALIGNMENT: usize = 1 << 16;

    /// Block size for capacity calculations
    const BLOCK_SIZE: usize = 64;

    /// Creates a new vector with room for at least `capacity` bytes whose data pointer
    /// is aligned to `alignment`.
    ///
    /// # Panics
    ///
    /// Panics if `alignment` is not a power of two or exceeds [`Self::MAX_ALIGNMENT`].
    pub fn try_with_capacity_and_alignment(
        capacity: usize,
        alignment: usize,
    ) -> Result<AlignedByteVec, AllocError> {
        Self::try_make(capacity, alignment)
    }

    /// Creates a new vector of `len` zero bytes, aligned to `alignment`.
    pub fn try_zeroed(len: usize, alignment: usize) -> Result<AlignedByteVec, AllocError> {
        let mut v = Self::try_make(len, alignment)?;
        unsafe {
            v.as_mut_ptr().write_bytes(0, len);
            v.set_len(len);
        }
        Ok(v)
    }

    /// Creates a new vector containing a copy of the provided slice.
    pub fn try_copy_from_slice(data: &[u8], alignment: usize) -> Result<AlignedByteVec, AllocError> {
        let mut v = Self::try_make(data.len(), alignment)?;
        v.try_extend_from_slice(data)?;
        Ok(v)
    }

    /// Returns the number of bytes in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len() - self.start_offset()
    }

    /// Returns true if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of bytes the vector can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity().saturating_sub(self.start_offset())
    }

    /// Alignment of the data pointer, as requested at construction.
    #[inline]
    pub fn alignment(&self) -> usize {
        self.alignment as usize
    }

    /// Returns a raw pointer to the vector's buffer.
    ///
    /// Without an allocation this is a dangling pointer that is still aligned to
    /// [`AlignedByteVec::alignment`].
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        if self.inner.capacity() == 0 {
            return std::ptr::without_provenance(self.alignment());
        }
        unsafe { self.inner.as_ptr().add(self.start_offset()) }
    }

    /// Returns a mutable raw pointer to the vector's buffer.
    ///
    /// Like `Vec::as_mut_ptr`, this does not materialize an intermediate reference to
    /// the contents, so previously obtained pointers stay valid.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        if self.inner.capacity() == 0 {
            return std::ptr::without_provenance_mut(self.alignment());
        }
        unsafe { self.inner.as_mut_ptr().add(self.start_offset()) }
    }

    /// Returns a slice containing the entire vector.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.as_ptr(), self.len()) }
    }

    /// Appends a slice to the vector, growing the allocation if needed.
    pub fn try_extend_from_slice(&mut self, s: &[u8]) -> Result<(), AllocError> {
        self.try_reserve(s.len())?;
        self.inner.extend_from_slice(s);
        Ok(())
    }

    /// Reserves capacity for at least `additional` more bytes.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        if self.capacity() - self.len() >= additional {
            return Ok(());
        }
        self.try_grow(additional)
    }

    /// Sets the length of the vector directly without initializing any new elements.
    ///
    /// # Safety
    ///
    /// If `new_len` is greater than the current length, the bytes between the old and
    /// new lengths are uninitialized. They must be written (through `as_mut_ptr`)
    /// before anything reads them.
    ///
    /// # Panics
    ///
    /// Panics if `new_len` exceeds the vector's current capacity.
    pub unsafe fn set_len(&mut self, new_len: usize) {
        assert!(new_len <= self.capacity());
        unsafe {
            self.inner.set_len(self.start_offset() + new_len);
        }
    }
}

impl AlignedByteVec {
    fn try_make(capacity: usize, alignment: usize) -> Result<AlignedByteVec, AllocError> {
        let alignment = alignment.max(1);
        assert!(alignment.is_power_of_two());
        assert!(alignment <= Self::MAX_ALIGNMENT);

        if capacity == 0 {
            return Ok(AlignedByteVec {
                inner: Vec::new(),
                start: 0,
                alignment: alignment as u32,
            });
        }

        let err = AllocError {
            size: capacity,
            alignment,
        };
        let vec_capacity = checked_align_up(capacity, Self::BLOCK_SIZE)
            .and_then(|n| n.checked_add(alignment))
            .ok_or(err)?;

        let mut vec = Vec::<u8>::new();
        vec.try_reserve_exact(vec_capacity).map_err(|_| err)?;

        let p = vec.as_ptr() as usize;
        let start = checked_align_up(p, alignment).ok_or(err)? - p;
        if start != 0 {
            unsafe {
                vec.as_mut_ptr().write_bytes(0, start);
                vec.set_len(start);
            }
        }

        let res = AlignedByteVec {
            inner: vec,
            start: start as u32,
            alignment: alignment as u32,
        };
        debug_assert!(res.capacity() >= capacity);
        Ok(res)
    }

    #[cold]
    fn try_grow(&mut self, additional: usize) -> Result<(), AllocError> {
        let alignment = self.alignment();
        let err = AllocError {
            size: self.len().saturating_add(additional),
            alignment,
        };
        let needed = self.len().checked_add(additional).ok_or(err)?;
        let new_cap = std::cmp::max(self.capacity().saturating_mul(2), needed);
        let mut v = Self::try_make(new_cap, alignment)?;
        if !self.is_empty() {
            v.inner.extend_from_slice(self.as_slice());
        }
        *self = v;
        Ok(())
    }

    #[inline]
    fn start_offset(&self) -> usize {
        self.start as usize
    }
}

impl std::fmt::Debug for AlignedByteVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignedByteVec")
            .field("len", &self.len())
            .field("cap", &self.capacity())
            .field("alignment", &self.alignment)
            .field("internal_offset", &self.start)
            .finish_non_exhaustive()
    }
}
