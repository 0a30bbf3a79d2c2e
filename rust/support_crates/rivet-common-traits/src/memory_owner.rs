//! `MemoryOwner`: A trait for types that own raw memory other blocks can anchor to.

/// A trait for types that own a contiguous block of raw memory and lend it out
/// by address.
///
/// Unlike a slice owner, a `MemoryOwner` never hands out `&[u8]` into its block
/// from a shared reference: the bytes may be rewritten through the pointer at any
/// time (by struct views, or by native code that was given the address), so the
/// only safe way to look at them is through raw, non-caching reads.
///
/// # Safety
///
/// Implementors must guarantee that:
/// - The memory returned by `memory()` remains valid, at the same address, for the
///   entire lifetime of the owner.
/// - Memory is exclusively owned by the `MemoryOwner` instance; no other Rust
///   reference into the block exists while the owner is shared.
/// - The reported length is accurate and the pointer is aligned to the reported
///   alignment.
pub unsafe trait MemoryOwner {
    /// Returns information about the owned memory block.
    fn memory(&self) -> MemoryAllocation;
}

/// Represents a block of allocated memory with its size information.
#[derive(Debug, Clone, Copy)]
pub struct MemoryAllocation {
    /// Pointer to the start of the allocated memory.
    pub ptr: *mut u8,
    /// Length of the usable memory in bytes.
    pub len: usize,
    /// Formal alignment of the memory block.
    pub alignment: usize,
}

impl MemoryAllocation {
    /// Numeric address of the first byte.
    #[inline]
    pub fn address(&self) -> usize {
        self.ptr as usize
    }
}
