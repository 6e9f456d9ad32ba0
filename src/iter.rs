use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop};
use core::ptr;
use core::slice;

use crate::raw::RawBuf;
use crate::vec::GrowVec;

/// Iterator over shared references into a `GrowVec`.
///
/// Represented as a pair of positions into the buffer; the element count is
/// their difference. For zero-sized element types the `end` position is a
/// byte-offset counter and references are always produced from the aligned
/// base pointer.
pub struct Iter<'a, T> {
    start: *const T,
    end: *const T,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(elements: &'a [T]) -> Self {
        let start = elements.as_ptr();
        let end = if mem::size_of::<T>() == 0 {
            start.wrapping_byte_add(elements.len())
        } else {
            // SAFETY: one past the end of a live slice.
            unsafe { start.add(elements.len()) }
        };
        Self {
            start,
            end,
            _marker: PhantomData,
        }
    }

    /// Remaining element count, the difference of the two positions.
    #[must_use]
    pub fn len(&self) -> usize {
        let byte_span = (self.end as usize).wrapping_sub(self.start as usize);
        if mem::size_of::<T>() == 0 {
            byte_span
        } else {
            byte_span / mem::size_of::<T>()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Remaining elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [T] {
        // SAFETY: [start, start + len) is the live remainder of the buffer.
        unsafe { slice::from_raw_parts(self.start, self.len()) }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.start == self.end {
            return None;
        }
        if mem::size_of::<T>() == 0 {
            self.end = self.end.wrapping_byte_sub(1);
            // SAFETY: a reference to a ZST is valid at the aligned base.
            Some(unsafe { &*self.start })
        } else {
            let current = self.start;
            // SAFETY: current < end, so it addresses a live element.
            unsafe {
                self.start = current.add(1);
                Some(&*current)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        if mem::size_of::<T>() == 0 {
            self.end = self.end.wrapping_byte_sub(1);
            // SAFETY: a reference to a ZST is valid at the aligned base.
            Some(unsafe { &*self.start })
        } else {
            // SAFETY: end > start, so the slot before end is live.
            unsafe {
                self.end = self.end.sub(1);
                Some(&*self.end)
            }
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            end: self.end,
            _marker: PhantomData,
        }
    }
}

// SAFETY: Iter hands out shared references only.
unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

/// Iterator over exclusive references into a `GrowVec`.
///
/// Shares the position-pair representation of [`Iter`] and offers the same
/// traversal operations, yielding `&mut T` instead of `&T`.
pub struct IterMut<'a, T> {
    start: *mut T,
    end: *mut T,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(elements: &'a mut [T]) -> Self {
        let start = elements.as_mut_ptr();
        let end = if mem::size_of::<T>() == 0 {
            start.wrapping_byte_add(elements.len())
        } else {
            // SAFETY: one past the end of a live slice.
            unsafe { start.add(elements.len()) }
        };
        Self {
            start,
            end,
            _marker: PhantomData,
        }
    }

    /// Remaining element count, the difference of the two positions.
    #[must_use]
    pub fn len(&self) -> usize {
        let byte_span = (self.end as usize).wrapping_sub(self.start as usize);
        if mem::size_of::<T>() == 0 {
            byte_span
        } else {
            byte_span / mem::size_of::<T>()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.start == self.end {
            return None;
        }
        if mem::size_of::<T>() == 0 {
            self.end = self.end.wrapping_byte_sub(1);
            // SAFETY: a reference to a ZST is valid at the aligned base.
            Some(unsafe { &mut *self.start })
        } else {
            let current = self.start;
            // SAFETY: current < end, so it addresses a live element, and the
            // iterator never revisits a position.
            unsafe {
                self.start = current.add(1);
                Some(&mut *current)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        if mem::size_of::<T>() == 0 {
            self.end = self.end.wrapping_byte_sub(1);
            // SAFETY: a reference to a ZST is valid at the aligned base.
            Some(unsafe { &mut *self.start })
        } else {
            // SAFETY: end > start, so the slot before end is live and was
            // not yielded before.
            unsafe {
                self.end = self.end.sub(1);
                Some(&mut *self.end)
            }
        }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

// SAFETY: IterMut is an exclusive borrow of the container.
unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

/// Owning iterator over a `GrowVec`.
///
/// Adopts the vector's buffer; unconsumed elements are destroyed and the
/// block released when the iterator is dropped.
pub struct IntoIter<T> {
    // Held for its Drop impl, which releases the allocation.
    _buf: RawBuf<T>,
    start: *const T,
    end: *const T,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(vec: GrowVec<T>) -> Self {
        let vec = ManuallyDrop::new(vec);
        let len = vec.len();
        // SAFETY: the source is never dropped; buffer ownership moves here.
        let buf = unsafe { ptr::read(&vec.buf) };
        let start = buf.ptr().cast_const();
        let end = if mem::size_of::<T>() == 0 {
            start.wrapping_byte_add(len)
        } else {
            // SAFETY: one past the last live element.
            unsafe { start.add(len) }
        };
        Self {
            _buf: buf,
            start,
            end,
        }
    }

    /// Unconsumed elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        let len = self.len();
        // SAFETY: [start, start + len) holds unconsumed live elements.
        unsafe { slice::from_raw_parts(self.start, len) }
    }

    fn remaining(&self) -> usize {
        let byte_span = (self.end as usize).wrapping_sub(self.start as usize);
        if mem::size_of::<T>() == 0 {
            byte_span
        } else {
            byte_span / mem::size_of::<T>()
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        if mem::size_of::<T>() == 0 {
            self.end = self.end.wrapping_byte_sub(1);
            // SAFETY: a ZST value can be read from the aligned base.
            Some(unsafe { ptr::read(self.start) })
        } else {
            // SAFETY: start < end, so it addresses a live element that will
            // not be read again.
            unsafe {
                let value = ptr::read(self.start);
                self.start = self.start.add(1);
                Some(value)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        if mem::size_of::<T>() == 0 {
            self.end = self.end.wrapping_byte_sub(1);
            // SAFETY: a ZST value can be read from the aligned base.
            Some(unsafe { ptr::read(self.start) })
        } else {
            // SAFETY: end > start, so the slot before end is live and will
            // not be read again.
            unsafe {
                self.end = self.end.sub(1);
                Some(ptr::read(self.end))
            }
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.remaining()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.remaining();
        // SAFETY: [start, start + remaining) holds unconsumed live elements;
        // the buffer itself is released by _buf afterwards.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.start.cast_mut(),
                remaining,
            ));
        }
    }
}

// SAFETY: IntoIter owns its elements outright.
unsafe impl<T: Send> Send for IntoIter<T> {}
unsafe impl<T: Sync> Sync for IntoIter<T> {}
