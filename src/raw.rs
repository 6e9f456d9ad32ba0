use core::alloc::Layout;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use alloc::alloc::{alloc, dealloc, handle_alloc_error, realloc};

use crate::error::GrowVecError;

/// Capacity policy: doubling with a floor of one slot.
///
/// Doubling keeps a run of sequential appends at amortized O(1): growing to
/// hold N elements performs O(log N) reallocations and moves O(N) elements
/// in total.
pub(crate) fn grow_capacity(current: usize, required: usize) -> usize {
    required.max(current.saturating_mul(2)).max(1)
}

/// Owns the contiguous allocation backing a `GrowVec`.
///
/// Tracks the base pointer and slot count only. Element lifecycles are the
/// container's responsibility; slots here are raw storage. The pointer
/// dangles while `cap == 0`.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: RawBuf uniquely owns its allocation, so it inherits T's
// thread-transfer properties.
unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// Empty, unallocated state.
    pub(crate) const fn new() -> Self {
        // ZSTs are never allocated; report unbounded capacity instead.
        let cap = if mem::size_of::<T>() == 0 { usize::MAX } else { 0 };
        Self {
            ptr: NonNull::dangling(),
            cap,
            _marker: PhantomData,
        }
    }

    /// Allocates exactly `cap` slots up front.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts on allocation failure.
    pub(crate) fn with_capacity(cap: usize) -> Self {
        let mut buf = Self::new();
        if cap > 0 {
            buf.grow_to(cap);
        }
        buf
    }

    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    pub(crate) fn cap(&self) -> usize {
        self.cap
    }

    /// Grows to hold at least `min_cap` slots, applying the doubling policy.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError` on capacity overflow or allocation failure.
    /// On failure the old block stays valid and unchanged.
    pub(crate) fn try_grow_to(&mut self, min_cap: usize) -> Result<(), GrowVecError> {
        if min_cap <= self.cap {
            return Ok(());
        }
        self.reallocate(grow_capacity(self.cap, min_cap))
    }

    /// Infallible growth path for operations without an error channel.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts via `handle_alloc_error` when the
    /// allocator fails.
    #[allow(clippy::expect_used)]
    pub(crate) fn grow_to(&mut self, min_cap: usize) {
        if min_cap <= self.cap {
            return;
        }
        let new_cap = grow_capacity(self.cap, min_cap);
        if let Err(err) = self.reallocate(new_cap) {
            match err {
                GrowVecError::AllocationFailed { .. } => {
                    let layout =
                        Layout::array::<T>(new_cap).expect("layout was validated by reallocate");
                    handle_alloc_error(layout)
                }
                GrowVecError::CapacityOverflow { requested } => {
                    panic!("capacity overflow: cannot hold {requested} slots")
                }
            }
        }
    }

    /// Moves the buffer to a block of exactly `new_cap` slots.
    ///
    /// `new_cap` must be non-zero and cover all live elements; `T` must not
    /// be zero-sized (ZSTs never reach this point, their capacity is
    /// saturated from the start).
    #[allow(clippy::expect_used)]
    fn reallocate(&mut self, new_cap: usize) -> Result<(), GrowVecError> {
        let layout = Layout::array::<T>(new_cap)
            .map_err(|_| GrowVecError::CapacityOverflow { requested: new_cap })?;
        if layout.size() > isize::MAX as usize {
            return Err(GrowVecError::CapacityOverflow { requested: new_cap });
        }

        let raw = if self.cap == 0 {
            // SAFETY: layout has non-zero size since new_cap > 0 and T is
            // not zero-sized.
            unsafe { alloc(layout) }
        } else {
            let old_layout = Layout::array::<T>(self.cap)
                .expect("layout was valid when the block was allocated");
            // SAFETY: ptr was allocated with old_layout. Element transfer is
            // a bitwise move, which is exactly what realloc performs. A
            // failed realloc leaves the old block intact.
            unsafe { realloc(self.ptr.as_ptr().cast(), old_layout, layout.size()) }
        };

        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => {
                self.ptr = ptr;
                self.cap = new_cap;
                Ok(())
            }
            None => Err(GrowVecError::AllocationFailed {
                bytes: layout.size(),
            }),
        }
    }
}

impl<T> Drop for RawBuf<T> {
    #[allow(clippy::expect_used)]
    fn drop(&mut self) {
        if self.cap != 0 && mem::size_of::<T>() != 0 {
            let layout = Layout::array::<T>(self.cap)
                .expect("layout was valid when the block was allocated");
            // SAFETY: live elements were destroyed by the owner before the
            // buffer is released.
            unsafe { dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_doubles_from_one() {
        let mut cap = 0;
        let mut observed = [0usize; 6];
        for slot in &mut observed {
            cap = grow_capacity(cap, cap + 1);
            *slot = cap;
        }
        assert_eq!(observed, [1, 2, 4, 8, 16, 32]);
    }

    #[test]
    fn policy_required_dominates_doubling() {
        assert_eq!(grow_capacity(4, 100), 100);
        assert_eq!(grow_capacity(0, 10), 10);
    }

    #[test]
    fn policy_doubling_dominates_small_required() {
        assert_eq!(grow_capacity(8, 9), 16);
    }

    #[test]
    fn policy_saturates() {
        assert_eq!(grow_capacity(usize::MAX, usize::MAX), usize::MAX);
    }

    #[test]
    fn zst_buffer_never_allocates() {
        let buf = RawBuf::<()>::new();
        assert_eq!(buf.cap(), usize::MAX);
    }

    #[test]
    fn with_capacity_is_exact() {
        let buf = RawBuf::<u64>::with_capacity(7);
        assert_eq!(buf.cap(), 7);
    }
}
