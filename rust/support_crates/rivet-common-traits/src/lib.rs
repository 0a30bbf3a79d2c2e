//! Traits and definitions used throughout the rivet crates.
//!
//! # Modules
//!
//! - [`memory_owner`]: the contract an external owner must uphold so that a memory
//!   block can be anchored to it instead of owning its bytes
pub mod memory_owner;

pub use memory_owner::{MemoryAllocation, MemoryOwner};
