#![no_std]

//! `GrowVec`: a growable contiguous vector with explicit storage management.
//!
//! `GrowVec<T>` owns a single heap allocation and keeps its live elements in
//! the prefix of that buffer, growing the buffer automatically as elements
//! are added. It offers random access, insertion and removal at arbitrary
//! positions, push/pop at both ends, and the usual value semantics (clone,
//! equality, iteration, construction from slices, arrays, and iterators).
//!
//! # Performance Characteristics
//!
//! - `push_back()`, `pop_back()`: amortized O(1); the buffer doubles when
//!   full, so N sequential appends cost O(N) total with O(log N)
//!   reallocations.
//! - `push_front()`, `pop_front()`, `insert()`, `remove()`: O(n) — every
//!   element behind the position shifts by one slot. This is the contiguity
//!   trade-off; there is no specialized front storage.
//! - `get()`, `at()`, indexing: O(1).
//! - `swap()`: O(1), exchanges buffers without touching elements.
//! - Removal never releases capacity; a cleared vector keeps its buffer for
//!   reuse.
//!
//! Allocation failure aborts (via `handle_alloc_error`) on the infallible
//! paths; [`GrowVec::try_reserve`] is the recoverable alternative and leaves
//! the vector unchanged on error. Out-of-bounds positions are caller bugs
//! and panic.
//!
//! # Examples
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut vec: GrowVec<i32> = GrowVec::new();
//! vec.push_back(3);
//! vec.push_back(2);
//!
//! assert_eq!(vec.len(), 2);
//! assert_eq!(*vec.at(0), 3);
//! assert_eq!(vec.as_slice(), &[3, 2]);
//!
//! vec.insert(1, 7);
//! assert_eq!(vec.as_slice(), &[3, 7, 2]);
//! assert_eq!(vec.remove(0), 3);
//! assert_eq!(vec.as_slice(), &[7, 2]);
//! ```
//!
//! Construction from literals, slices, and iterators:
//!
//! ```
//! use growvec::{growvec, GrowVec};
//!
//! let a = growvec![1, 2, 3];
//! let b: GrowVec<i32> = (1..=3).collect();
//! assert_eq!(a, b);
//!
//! let zeros = growvec![0u8; 4];
//! assert_eq!(zeros.len(), 4);
//! ```
//!
//! In-place reordering and derived vectors:
//!
//! ```
//! use growvec::growvec;
//!
//! let mut vec = growvec![3, 1, 2];
//! vec.sort();
//! assert_eq!(vec.as_slice(), &[1, 2, 3]);
//! vec.reverse();
//! assert_eq!(vec.as_slice(), &[3, 2, 1]);
//!
//! let middle = vec.slice(1..3);
//! assert_eq!(middle.as_slice(), &[2, 1]);
//! ```
//!
//! # Iteration
//!
//! [`GrowVec::iter`], [`GrowVec::iter_mut`], and the owning `into_iter` are
//! double-ended and exact-size; the element count of an iterator is the
//! difference of its two buffer positions.
//!
//! ```
//! use growvec::growvec;
//!
//! let mut vec = growvec![1, 2, 3];
//! for value in vec.iter_mut() {
//!     *value *= 10;
//! }
//! let sum: i32 = vec.iter().sum();
//! assert_eq!(sum, 60);
//! ```
//!
//! # `no_std` Compatibility
//!
//! The crate is `no_std` and depends only on `core` and `alloc`. Enable the
//! `std` feature to forward to `thiserror/std`:
//!
//! ```toml
//! [dependencies]
//! growvec = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod error;
mod iter;
mod raw;
mod vec;

// Re-export public types
pub use error::GrowVecError;
pub use iter::{IntoIter, Iter, IterMut};
pub use vec::GrowVec;

/// Creates a [`GrowVec`] from a list of elements or a repeated value.
///
/// ```
/// use growvec::growvec;
///
/// let letters = growvec!['a', 'b', 'c'];
/// assert_eq!(letters.len(), 3);
///
/// let blanks = growvec![' '; 8];
/// assert_eq!(blanks.len(), 8);
/// ```
#[macro_export]
macro_rules! growvec {
    () => {
        $crate::GrowVec::new()
    };
    ($value:expr; $count:expr) => {
        $crate::GrowVec::from_elem($value, $count)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::GrowVec::from([$($value),+])
    };
}
