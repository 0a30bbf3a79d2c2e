//! Aligned byte storage and alignment arithmetic for the rivet infrastructure.
//!
//! [`buffer::AlignedByteVec`] is the backing store for explicitly owned memory
//! blocks: its data pointer honours a caller-chosen power-of-two alignment and its
//! allocation is fallible, so running out of memory surfaces as an error instead of
//! aborting the process.

pub mod align;
pub mod buffer;

pub use buffer::AlignedByteVec;
