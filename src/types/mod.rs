//! Supporting types: message accumulation, aggregate formatting and
//! accessor misuse reporting.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::types::{Accumulator, JoinFormat};
//!
//! let acc: Accumulator = [Some("B"), None, Some("A")].into_iter().collect();
//! assert_eq!(acc.visited(), 3);
//! assert_eq!(acc.join(&JoinFormat::default()), "B, A");
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub mod alloc_type;
pub mod join_format;
pub mod usage_error;

pub use accumulator::*;
pub use join_format::*;
pub use usage_error::*;

/// SmallVec-backed collection used for accumulating failure messages.
///
/// Inline storage covers the common case of one or two failures per
/// construction attempt without touching the heap.
pub type ErrorVec<E> = SmallVec<[E; 2]>;
