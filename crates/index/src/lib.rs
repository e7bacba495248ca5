//! Sylph Index - Index implementations for the sylph table engine.
//!
//! This crate provides:
//!
//! - `HashIndex`: value → ordered row-handle list, unique or not
//! - `IndexSet`: the primary-key map, one unique map per unique field and one
//!   plain map per indexed field, built from and maintained alongside a row arena
//!
//! # Example
//!
//! ```rust
//! use sylph_index::{HashIndex, Index};
//!
//! let mut hash: HashIndex<i32> = HashIndex::new(true);
//! hash.add(10, 0).unwrap();
//! assert_eq!(hash.get(&10), &[0]);
//! assert!(hash.add(10, 1).is_err());
//! ```

#![no_std]

extern crate alloc;

pub mod hash;
pub mod set;
pub mod traits;

pub use hash::HashIndex;
pub use set::IndexSet;
pub use traits::{Index, IndexError};
