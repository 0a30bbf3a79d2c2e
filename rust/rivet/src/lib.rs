//! Typed, zero-copy views over fixed-layout native structs.
//!
//! The crate describes C structs by their field alignments and counts
//! ([`Layout`]), places them in explicitly owned or borrowed memory
//! ([`MemoryBlock`]), and reads and writes their fields in place through
//! [`StructView`] and [`StructSequenceView`]. Nothing is ever copied: a view is an
//! address, and every accessor goes straight to memory.
//!
//! ```
//! use rivet::structs::GamepadState;
//! use rivet::{MemoryBlock, StructSequenceView, StructType};
//!
//! let block = MemoryBlock::allocate_zeroed(4 * GamepadState::sizeof(), GamepadState::alignof())?;
//! let states = StructSequenceView::<GamepadState>::new(&block)?;
//! assert_eq!(states.capacity(), 4);
//! assert_eq!(states.element(3)?.axes().to_vec(), vec![0.0; 6]);
//! # Ok::<(), rivet::Error>(())
//! ```

pub mod config;
pub mod element;
pub mod layout;
pub mod memory;
pub mod sequence;
pub mod structs;
pub mod view;
pub mod window;

#[cfg(test)]
mod tests;

pub use config::AllocatorConfig;
pub use element::Element;
pub use layout::{FieldDescriptor, FieldLayout, Layout};
pub use memory::{BorrowedBlock, MemoryBlock, OwnedBlock, Ownership};
pub use rivet_common::{Error, ErrorKind, Result};
pub use rivet_keymap as keymap;
pub use sequence::{StructSequenceIter, StructSequenceView};
pub use view::{MutableStruct, StructType, StructView};
pub use window::{ArrayWindow, ArrayWindowIter, ArrayWindowMut};
