//! Memory blocks backing struct views.
//!
//! A [`MemoryBlock`] is a contiguous byte range with an explicit ownership mode:
//!
//! - [`OwnedBlock`]: allocated by this crate and released exactly once, either by
//!   [`OwnedBlock::release`] or when dropped.
//! - [`BorrowedBlock`]: memory owned elsewhere. A borrowed block is never released
//!   by this crate. Its lifetime parameter ties it to the borrowed slice when there
//!   is one, and an anchored block keeps its [`MemoryOwner`] alive by reference
//!   count.
//!
//! Blocks never hand out `&[u8]` through a shared reference: views write through
//! `&MemoryBlock`, so the contents are only readable by copy ([`MemoryBlock::copy_to_vec`])
//! or through exclusive access ([`MemoryBlock::as_mut_slice`]), which is refused
//! for blocks anchored to a shared owner.

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;
use std::sync::Arc;

use log::{trace, warn};
use rivet_bytes::AlignedByteVec;
use rivet_bytes::align::is_aligned;
use rivet_common::{Error, Result, verify_arg};
use rivet_common_traits::{MemoryAllocation, MemoryOwner};

use crate::config::AllocatorConfig;
use crate::view::StructType;

/// Who is responsible for releasing a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ownership {
    Owned,
    Borrowed,
}

/// Heap memory allocated and released by this crate.
///
/// The bytes live at a fixed address for the whole life of the block.
///
/// `OwnedBlock` implements `Send` and `Sync`. Views created over it may write
/// through shared references, so users must synchronize concurrent writes to the
/// same bytes themselves.
pub struct OwnedBlock {
    storage: AlignedByteVec,
    ptr: NonNull<u8>,
}

unsafe impl Send for OwnedBlock {}
unsafe impl Sync for OwnedBlock {}

impl OwnedBlock {
    /// Allocates `size` bytes aligned to at least `alignment`, without
    /// initializing them.
    ///
    /// # Safety
    ///
    /// The contents are uninitialized. Every byte must be written, through a
    /// writable view or by native code, before it is read.
    pub unsafe fn allocate(size: usize, alignment: usize) -> Result<OwnedBlock> {
        unsafe { Self::allocate_with(size, alignment, &AllocatorConfig::default()) }
    }

    /// Same as [`OwnedBlock::allocate`], with an explicit allocator configuration.
    ///
    /// # Safety
    ///
    /// See [`OwnedBlock::allocate`].
    pub unsafe fn allocate_with(
        size: usize,
        alignment: usize,
        config: &AllocatorConfig,
    ) -> Result<OwnedBlock> {
        let alignment = Self::check_request(size, alignment, config)?;
        let mut storage = AlignedByteVec::try_with_capacity_and_alignment(size, alignment)
            .map_err(|e| Error::allocation(e.size, e.alignment))?;
        // SAFETY: capacity is at least `size`; the caller takes responsibility for
        // initializing the bytes.
        unsafe { storage.set_len(size) };
        let block = Self::from_storage(storage);
        trace!(
            "Allocated {size} uninitialized bytes at {:#x} (alignment {alignment})",
            block.address()
        );
        Ok(block)
    }

    /// Allocates `size` zero-filled bytes aligned to at least `alignment`.
    pub fn allocate_zeroed(size: usize, alignment: usize) -> Result<OwnedBlock> {
        Self::allocate_zeroed_with(size, alignment, &AllocatorConfig::default())
    }

    pub fn allocate_zeroed_with(
        size: usize,
        alignment: usize,
        config: &AllocatorConfig,
    ) -> Result<OwnedBlock> {
        let alignment = Self::check_request(size, alignment, config)?;
        let storage = AlignedByteVec::try_zeroed(size, alignment)
            .map_err(|e| Error::allocation(e.size, e.alignment))?;
        let block = Self::from_storage(storage);
        trace!(
            "Allocated {size} zeroed bytes at {:#x} (alignment {alignment})",
            block.address()
        );
        Ok(block)
    }

    /// Allocates a block holding a copy of `bytes`.
    pub fn copy_from_slice(bytes: &[u8], alignment: usize) -> Result<OwnedBlock> {
        let config = AllocatorConfig::default();
        let alignment = Self::check_request(bytes.len(), alignment, &config)?;
        let storage = AlignedByteVec::try_copy_from_slice(bytes, alignment)
            .map_err(|e| Error::allocation(e.size, e.alignment))?;
        Ok(Self::from_storage(storage))
    }

    /// Allocates uninitialized memory for one `T`.
    ///
    /// # Safety
    ///
    /// See [`OwnedBlock::allocate`].
    pub unsafe fn for_struct<T: StructType>() -> Result<OwnedBlock> {
        unsafe { Self::allocate(T::sizeof(), T::alignof()) }
    }

    /// Allocates zeroed memory for one `T`.
    pub fn zeroed_for_struct<T: StructType>() -> Result<OwnedBlock> {
        Self::allocate_zeroed(T::sizeof(), T::alignof())
    }

    /// Allocates uninitialized memory for `count` consecutive `T`s.
    ///
    /// # Safety
    ///
    /// See [`OwnedBlock::allocate`].
    pub unsafe fn for_structs<T: StructType>(count: usize) -> Result<OwnedBlock> {
        let size = Self::array_size::<T>(count)?;
        unsafe { Self::allocate(size, T::alignof()) }
    }

    /// Allocates zeroed memory for `count` consecutive `T`s.
    pub fn zeroed_for_structs<T: StructType>(count: usize) -> Result<OwnedBlock> {
        Self::allocate_zeroed(Self::array_size::<T>(count)?, T::alignof())
    }

    fn array_size<T: StructType>(count: usize) -> Result<usize> {
        count
            .checked_mul(T::sizeof())
            .ok_or_else(|| Error::allocation(usize::MAX, T::alignof()))
    }

    /// Validates a request and returns the effective alignment.
    fn check_request(size: usize, alignment: usize, config: &AllocatorConfig) -> Result<usize> {
        config.validate()?;
        verify_arg!(alignment, alignment.is_power_of_two());
        verify_arg!(alignment, alignment <= AlignedByteVec::MAX_ALIGNMENT);
        let alignment = config.effective_alignment(alignment);
        if size > config.max_allocation {
            warn!(
                "Rejecting allocation of {size} bytes: limit is {} bytes",
                config.max_allocation
            );
            return Err(Error::allocation(size, alignment));
        }
        Ok(alignment)
    }

    fn from_storage(mut storage: AlignedByteVec) -> OwnedBlock {
        let ptr = NonNull::new(storage.as_mut_ptr()).unwrap_or(NonNull::dangling());
        OwnedBlock { storage, ptr }
    }

    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr.as_ptr()
    }

    /// Writable pointer to the first byte.
    ///
    /// Writes through it must not race with other reads or writes of the same
    /// bytes.
    #[inline]
    pub fn as_mut_ptr(&self) -> *mut u8 {
        self.ptr.as_ptr()
    }

    #[inline]
    pub fn address(&self) -> usize {
        self.ptr.as_ptr() as usize
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Alignment the block was allocated with.
    #[inline]
    pub fn alignment(&self) -> usize {
        self.storage.alignment()
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: `ptr` covers `len` initialized bytes (see `allocate`) and
        // `&mut self` excludes every view of this block.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len()) }
    }

    /// Copies the current contents into a new vector.
    pub fn copy_to_vec(&self) -> Vec<u8> {
        copy_bytes(self.ptr, self.len())
    }

    /// Returns the memory to the allocator.
    ///
    /// Consuming the block makes a second release, or any use of views created
    /// from it, a compile-time error.
    pub fn release(self) {
        drop(self)
    }

    /// Moves the block behind a reference count so that borrowed blocks can
    /// anchor to it with [`MemoryBlock::anchored`].
    pub fn into_shared(self) -> Arc<OwnedBlock> {
        Arc::new(self)
    }
}

impl Drop for OwnedBlock {
    fn drop(&mut self) {
        trace!(
            "Releasing {} bytes at {:#x}",
            self.storage.len(),
            self.address()
        );
    }
}

// SAFETY: the storage is never reallocated after construction, so the pointer and
// length stay valid and stable until the block is dropped.
unsafe impl MemoryOwner for OwnedBlock {
    fn memory(&self) -> MemoryAllocation {
        MemoryAllocation {
            ptr: self.ptr.as_ptr(),
            len: self.len(),
            alignment: self.alignment(),
        }
    }
}

impl fmt::Debug for OwnedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedBlock")
            .field("address", &format_args!("{:#x}", self.address()))
            .field("len", &self.len())
            .field("alignment", &self.alignment())
            .finish()
    }
}

enum Anchor {
    /// Caller-guaranteed validity; nothing keeps the memory alive.
    Unanchored,
    /// Exclusive borrow of a Rust slice, tracked by the block lifetime.
    Slice,
    /// Shared ownership of the memory owner.
    Owner(Arc<dyn MemoryOwner + Send + Sync>),
}

/// Memory owned elsewhere. Never released by this crate.
///
/// `BorrowedBlock` implements `Send` and `Sync` under the same external
/// synchronization rule as [`OwnedBlock`].
pub struct BorrowedBlock<'a> {
    ptr: NonNull<u8>,
    len: usize,
    alignment: usize,
    anchor: Anchor,
    _borrow: PhantomData<&'a mut [u8]>,
}

unsafe impl Send for BorrowedBlock<'_> {}
unsafe impl Sync for BorrowedBlock<'_> {}

impl<'a> BorrowedBlock<'a> {
    #[inline]
    pub fn address(&self) -> usize {
        self.ptr.as_ptr() as usize
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Largest power of two the start address is known to be aligned to.
    #[inline]
    pub fn alignment(&self) -> usize {
        self.alignment
    }

    /// Whether something keeps the memory alive for as long as this block exists.
    pub fn is_anchored(&self) -> bool {
        !matches!(self.anchor, Anchor::Unanchored)
    }

    /// The shared owner this block is anchored to, if any.
    pub fn owner(&self) -> Option<&Arc<dyn MemoryOwner + Send + Sync>> {
        match &self.anchor {
            Anchor::Owner(owner) => Some(owner),
            _ => None,
        }
    }
}

impl fmt::Debug for BorrowedBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let anchor = match self.anchor {
            Anchor::Unanchored => "none",
            Anchor::Slice => "slice",
            Anchor::Owner(_) => "owner",
        };
        f.debug_struct("BorrowedBlock")
            .field("address", &format_args!("{:#x}", self.address()))
            .field("len", &self.len)
            .field("alignment", &self.alignment)
            .field("anchor", &anchor)
            .finish()
    }
}

/// Alignment implied by an address, capped at the largest alignment this crate
/// allocates with.
fn address_alignment(address: usize) -> usize {
    if address == 0 {
        AlignedByteVec::MAX_ALIGNMENT
    } else {
        (1usize << address.trailing_zeros()).min(AlignedByteVec::MAX_ALIGNMENT)
    }
}

fn copy_bytes(ptr: NonNull<u8>, len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    // SAFETY: the block is valid for `len` bytes and `out` has room for them.
    unsafe {
        std::ptr::copy_nonoverlapping(ptr.as_ptr(), out.as_mut_ptr(), len);
        out.set_len(len);
    }
    out
}

/// A contiguous byte range that struct views are created over.
#[derive(Debug)]
pub enum MemoryBlock<'a> {
    Owned(OwnedBlock),
    Borrowed(BorrowedBlock<'a>),
}

impl MemoryBlock<'static> {
    /// Allocates `size` uninitialized bytes, owned by the returned block.
    ///
    /// # Safety
    ///
    /// See [`OwnedBlock::allocate`].
    pub unsafe fn allocate(size: usize, alignment: usize) -> Result<MemoryBlock<'static>> {
        Ok(MemoryBlock::Owned(unsafe {
            OwnedBlock::allocate(size, alignment)?
        }))
    }

    /// Allocates `size` zero-filled bytes, owned by the returned block.
    pub fn allocate_zeroed(size: usize, alignment: usize) -> Result<MemoryBlock<'static>> {
        OwnedBlock::allocate_zeroed(size, alignment).map(MemoryBlock::Owned)
    }

    /// Borrows the memory of a shared owner, keeping the owner alive for as long
    /// as the returned block exists.
    pub fn anchored(owner: Arc<dyn MemoryOwner + Send + Sync>) -> Result<MemoryBlock<'static>> {
        let memory = owner.memory();
        let ptr = NonNull::new(memory.ptr)
            .ok_or_else(|| Error::invalid_arg("owner", "memory owner returned a null address"))?;
        Ok(MemoryBlock::Borrowed(BorrowedBlock {
            ptr,
            len: memory.len,
            alignment: memory.alignment,
            anchor: Anchor::Owner(owner),
            _borrow: PhantomData,
        }))
    }
}

impl<'a> MemoryBlock<'a> {
    /// Wraps `len` bytes at `ptr` owned by someone else.
    ///
    /// The returned block is never released by this crate.
    ///
    /// # Safety
    ///
    /// The caller guarantees that `ptr` is valid for reads and writes of `len`
    /// bytes for `'a`, and that no Rust reference to those bytes is used while the
    /// block or any view created from it is alive.
    pub unsafe fn borrow(ptr: *mut u8, len: usize) -> Result<MemoryBlock<'a>> {
        let ptr = NonNull::new(ptr)
            .ok_or_else(|| Error::invalid_arg("ptr", "cannot borrow a null address"))?;
        Ok(MemoryBlock::Borrowed(BorrowedBlock {
            ptr,
            len,
            alignment: address_alignment(ptr.as_ptr() as usize),
            anchor: Anchor::Unanchored,
            _borrow: PhantomData,
        }))
    }

    /// Wraps a mutable byte slice. The slice stays exclusively borrowed for as
    /// long as the block lives.
    pub fn borrow_from(bytes: &'a mut [u8]) -> MemoryBlock<'a> {
        let len = bytes.len();
        let ptr = NonNull::new(bytes.as_mut_ptr()).unwrap_or(NonNull::dangling());
        MemoryBlock::Borrowed(BorrowedBlock {
            ptr,
            len,
            alignment: address_alignment(ptr.as_ptr() as usize),
            anchor: Anchor::Slice,
            _borrow: PhantomData,
        })
    }

    /// Recovers the owned block, or returns `self` unchanged if it is borrowed.
    pub fn try_into_owned(self) -> std::result::Result<OwnedBlock, MemoryBlock<'a>> {
        match self {
            MemoryBlock::Owned(block) => Ok(block),
            borrowed => Err(borrowed),
        }
    }

    pub fn ownership(&self) -> Ownership {
        match self {
            MemoryBlock::Owned(_) => Ownership::Owned,
            MemoryBlock::Borrowed(_) => Ownership::Borrowed,
        }
    }

    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self, MemoryBlock::Owned(_))
    }

    #[inline]
    fn non_null(&self) -> NonNull<u8> {
        match self {
            MemoryBlock::Owned(block) => block.ptr,
            MemoryBlock::Borrowed(block) => block.ptr,
        }
    }

    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.non_null().as_ptr()
    }

    /// Writable pointer to the first byte.
    #[inline]
    pub fn as_mut_ptr(&self) -> *mut u8 {
        self.non_null().as_ptr()
    }

    #[inline]
    pub fn address(&self) -> usize {
        self.as_ptr() as usize
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self {
            MemoryBlock::Owned(block) => block.len(),
            MemoryBlock::Borrowed(block) => block.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn alignment(&self) -> usize {
        match self {
            MemoryBlock::Owned(block) => block.alignment(),
            MemoryBlock::Borrowed(block) => block.alignment(),
        }
    }

    /// Whether `offset` bytes into the block is aligned to `alignment`.
    pub fn is_aligned_at(&self, offset: usize, alignment: usize) -> bool {
        is_aligned(self.address().wrapping_add(offset), alignment)
    }

    /// Exclusive access to the bytes. No view of the block can be alive while the
    /// returned slice is in use.
    ///
    /// Returns `None` for a block anchored to a shared [`MemoryOwner`]: other
    /// anchored blocks over the same owner may exist, so `&mut self` does not
    /// make the access exclusive.
    pub fn as_mut_slice(&mut self) -> Option<&mut [u8]> {
        match self {
            MemoryBlock::Owned(block) => Some(block.as_mut_slice()),
            MemoryBlock::Borrowed(BorrowedBlock {
                anchor: Anchor::Owner(_),
                ..
            }) => None,
            // SAFETY: a slice anchor holds the only borrow of the bytes, and the
            // raw borrow contract rules out other references. `&mut self` excludes
            // every view of this block.
            MemoryBlock::Borrowed(block) => Some(unsafe {
                std::slice::from_raw_parts_mut(block.ptr.as_ptr(), block.len)
            }),
        }
    }

    /// Copies the current contents into a new vector.
    pub fn copy_to_vec(&self) -> Vec<u8> {
        copy_bytes(self.non_null(), self.len())
    }
}

impl From<OwnedBlock> for MemoryBlock<'static> {
    fn from(block: OwnedBlock) -> Self {
        MemoryBlock::Owned(block)
    }
}
