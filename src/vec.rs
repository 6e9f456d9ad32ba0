use core::cmp::Ordering;
use core::fmt;
use core::mem;
use core::ops::{Deref, DerefMut, Range};
use core::ptr;
use core::slice;

use crate::error::GrowVecError;
use crate::iter::{IntoIter, Iter, IterMut};
use crate::raw::RawBuf;

/// A growable contiguous sequence of `T` backed by a single heap allocation.
///
/// The live elements occupy the prefix `[0, len)` of the buffer; the slots
/// in `[len, capacity)` are raw storage. Appending is amortized O(1); the
/// buffer doubles when full and is never shrunk by element removal.
pub struct GrowVec<T> {
    pub(crate) buf: RawBuf<T>,
    len: usize,
}

impl<T> GrowVec<T> {
    /// Creates an empty vector without allocating.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Creates an empty vector with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuf::with_capacity(capacity),
            len: 0,
        }
    }

    /// Creates a vector of `len` default-constructed elements.
    #[must_use]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut vec = Self::with_capacity(len);
        vec.resize(len);
        vec
    }

    /// Creates a vector holding `len` clones of `value`.
    #[must_use]
    pub fn from_elem(value: T, len: usize) -> Self
    where
        T: Clone,
    {
        let mut vec = Self::with_capacity(len);
        for _ in 0..len {
            vec.push_back(value.clone());
        }
        vec
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots the buffer can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.cap()
    }

    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    #[must_use]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }

    /// The live elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [ptr, ptr + len) holds live elements.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: [ptr, ptr + len) holds live elements.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Gets the element at `index`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Gets the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    #[allow(clippy::indexing_slicing)] // Bounds asserted above
    pub fn at(&self, index: usize) -> &T {
        assert!(
            index < self.len,
            "index {} out of bounds for vector of length {}",
            index,
            self.len
        );
        &self.as_slice()[index]
    }

    /// Mutable counterpart of [`at`](Self::at).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[allow(clippy::indexing_slicing)] // Bounds asserted above
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.len,
            "index {} out of bounds for vector of length {}",
            index,
            self.len
        );
        &mut self.as_mut_slice()[index]
    }

    /// First element, or `None` if the vector is empty.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Last element, or `None` if the vector is empty.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Ensures room for at least `additional` more elements.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts on allocation failure.
    pub fn reserve(&mut self, additional: usize) {
        let required = match self.len.checked_add(additional) {
            Some(required) => required,
            None => panic!(
                "capacity overflow: length {} plus {} slots",
                self.len, additional
            ),
        };
        self.buf.grow_to(required);
    }

    /// Fallible counterpart of [`reserve`](Self::reserve).
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError` on capacity overflow or allocation failure;
    /// the vector is left unchanged in both cases.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), GrowVecError> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(GrowVecError::CapacityOverflow {
                requested: usize::MAX,
            })?;
        self.buf.try_grow_to(required)
    }

    /// Appends an element. Amortized O(1).
    pub fn push_back(&mut self, value: T) {
        self.reserve(1);
        // SAFETY: capacity was just ensured; the slot at len is raw storage.
        unsafe { ptr::write(self.buf.ptr().add(self.len), value) };
        self.len += 1;
    }

    /// Prepends an element.
    ///
    /// O(len): every existing element shifts one slot right. Contiguity is
    /// the trade-off; there is no specialized front storage.
    pub fn push_front(&mut self, value: T) {
        self.insert(0, value);
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot at the new len held a live element that is no
        // longer tracked.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.len)) })
    }

    /// Removes and returns the first element, or `None` if empty.
    ///
    /// O(len): the remaining elements shift one slot left.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: slot 0 is live; after the read the tail is shifted over
        // it, so the value is never duplicated.
        unsafe {
            let base = self.buf.ptr();
            let value = ptr::read(base);
            self.len -= 1;
            ptr::copy(base.add(1), base, self.len);
            Some(value)
        }
    }

    /// Inserts `value` before the element at `index`, shifting the tail
    /// right. `index == len` appends.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index <= self.len,
            "insert index {} out of bounds for vector of length {}",
            index,
            self.len
        );
        self.reserve(1);
        // SAFETY: capacity ensured; the tail moves into raw storage and the
        // freed slot receives the new value.
        unsafe {
            let slot = self.buf.ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            ptr::write(slot, value);
        }
        self.len += 1;
    }

    /// Inserts `count` clones of `value` before the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert_copies(&mut self, index: usize, count: usize, value: T)
    where
        T: Clone,
    {
        assert!(
            index <= self.len,
            "insert index {} out of bounds for vector of length {}",
            index,
            self.len
        );
        if count == 0 {
            return;
        }
        self.reserve(count);
        let tail = self.len - index;
        // SAFETY: the gap opened below is filled left to right; len tracks
        // the live prefix throughout, so a panicking clone leaks the
        // detached tail instead of double-dropping it.
        unsafe {
            self.open_gap(index, count);
            let slot = self.buf.ptr().add(index);
            for offset in 0..count - 1 {
                ptr::write(slot.add(offset), value.clone());
                self.len += 1;
            }
            ptr::write(slot.add(count - 1), value);
            self.len += 1;
            self.len += tail;
        }
    }

    /// Inserts clones of `values` before the element at `index`, preserving
    /// their order.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert_from_slice(&mut self, index: usize, values: &[T])
    where
        T: Clone,
    {
        assert!(
            index <= self.len,
            "insert index {} out of bounds for vector of length {}",
            index,
            self.len
        );
        if values.is_empty() {
            return;
        }
        self.reserve(values.len());
        let tail = self.len - index;
        // SAFETY: same gap discipline as insert_copies.
        unsafe {
            self.open_gap(index, values.len());
            let slot = self.buf.ptr().add(index);
            for (offset, value) in values.iter().enumerate() {
                ptr::write(slot.add(offset), value.clone());
                self.len += 1;
            }
            self.len += tail;
        }
    }

    /// Inserts every element produced by `values` before the element at
    /// `index`, preserving their order.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert_many<I>(&mut self, index: usize, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        assert!(
            index <= self.len,
            "insert index {} out of bounds for vector of length {}",
            index,
            self.len
        );
        // The element count must be known before the tail can shift, so the
        // incoming elements are staged in a scratch vector first.
        let mut staged: GrowVec<T> = values.into_iter().collect();
        let count = staged.len;
        if count == 0 {
            return;
        }
        self.reserve(count);
        let tail = self.len - index;
        // SAFETY: the staged elements move bitwise into the gap; zeroing
        // staged.len afterwards stops its Drop from touching them.
        unsafe {
            self.open_gap(index, count);
            ptr::copy_nonoverlapping(staged.buf.ptr(), self.buf.ptr().add(index), count);
            staged.len = 0;
            self.len += count + tail;
        }
    }

    /// Shifts the tail `[index, len)` right by `count` slots and detaches it
    /// by setting `len = index`.
    ///
    /// Caller must have reserved the capacity, must construct `count`
    /// elements in the gap left to right, and must restore `len` to cover
    /// the filled gap plus the tail.
    unsafe fn open_gap(&mut self, index: usize, count: usize) {
        let slot = self.buf.ptr().add(index);
        ptr::copy(slot, slot.add(count), self.len - index);
        self.len = index;
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "remove index {} out of bounds for vector of length {}",
            index,
            self.len
        );
        // SAFETY: the slot is live; after the read the tail closes the gap,
        // so the value is never duplicated.
        unsafe {
            let slot = self.buf.ptr().add(index);
            let value = ptr::read(slot);
            self.len -= 1;
            ptr::copy(slot.add(1), slot, self.len - index);
            value
        }
    }

    /// Destroys the elements in `range` and shifts the tail left to close
    /// the gap. Capacity is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the range is decreasing or extends past `len`.
    pub fn remove_range(&mut self, range: Range<usize>) {
        assert!(
            range.start <= range.end && range.end <= self.len,
            "range {}..{} out of bounds for vector of length {}",
            range.start,
            range.end,
            self.len
        );
        let count = range.end - range.start;
        if count == 0 {
            return;
        }
        let old_len = self.len;
        // SAFETY: the range holds live elements. len is cut to the prefix
        // first, so a panicking destructor leaks the tail rather than
        // double-dropping it.
        unsafe {
            self.len = range.start;
            let slot = self.buf.ptr().add(range.start);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(slot, count));
            ptr::copy(slot.add(count), slot, old_len - range.end);
            self.len = old_len - count;
        }
    }

    /// Shortens the vector to `new_len`, destroying the trailing elements.
    /// Does nothing if `new_len >= len`. Capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let count = self.len - new_len;
        // SAFETY: the trailing elements are live; len is cut first so a
        // panicking destructor cannot cause a second drop.
        unsafe {
            self.len = new_len;
            let tail = self.buf.ptr().add(new_len);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(tail, count));
        }
    }

    /// Destroys every element. Capacity and allocation are untouched.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes to exactly `new_len` elements, default-constructing new
    /// trailing elements when growing. Shrinking never releases capacity.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        self.reserve(new_len - self.len);
        while self.len < new_len {
            // SAFETY: capacity ensured above; the slot at len is raw storage.
            unsafe { ptr::write(self.buf.ptr().add(self.len), T::default()) };
            self.len += 1;
        }
    }

    /// Reverses the element order in place. O(len) time, O(1) space.
    pub fn reverse(&mut self) {
        self.as_mut_slice().reverse();
    }

    /// Sorts the elements. The sort is not guaranteed to be stable.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.as_mut_slice().sort_unstable();
    }

    /// Sorts the elements with a comparator. The sort is not guaranteed to
    /// be stable.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_unstable_by(compare);
    }

    /// Deep copy of the elements in `range` as an independent vector.
    ///
    /// # Panics
    ///
    /// Panics if the range is decreasing or extends past `len`.
    #[must_use]
    #[allow(clippy::indexing_slicing)] // Bounds asserted above
    pub fn slice(&self, range: Range<usize>) -> Self
    where
        T: Clone,
    {
        assert!(
            range.start <= range.end && range.end <= self.len,
            "range {}..{} out of bounds for vector of length {}",
            range.start,
            range.end,
            self.len
        );
        let mut out = Self::with_capacity(range.end - range.start);
        out.extend_from_slice(&self.as_slice()[range]);
        out
    }

    /// Appends clones of `values` in order.
    pub fn extend_from_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        self.reserve(values.len());
        for value in values {
            self.push_back(value.clone());
        }
    }

    /// Exchanges the buffers of two vectors in O(1); no element is moved or
    /// copied.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Iterator over shared references, front to back.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    /// Iterator over exclusive references, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut_slice())
    }
}

impl<T> Drop for GrowVec<T> {
    fn drop(&mut self) {
        // SAFETY: [ptr, ptr + len) holds live elements; the buffer itself is
        // released by RawBuf afterwards.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), self.len));
        }
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for GrowVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for GrowVec<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone> Clone for GrowVec<T> {
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.len);
        out.extend_from_slice(self.as_slice());
        out
    }
}

impl<T: PartialEq> PartialEq for GrowVec<T> {
    /// Lengths first, then elements pairwise in order.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowVec<T> {}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Clone> From<&[T]> for GrowVec<T> {
    fn from(values: &[T]) -> Self {
        let mut out = Self::with_capacity(values.len());
        out.extend_from_slice(values);
        out
    }
}

impl<T, const N: usize> From<[T; N]> for GrowVec<T> {
    fn from(values: [T; N]) -> Self {
        let mut out = Self::with_capacity(N);
        for value in values {
            out.push_back(value);
        }
        out
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let values = values.into_iter();
        let (lower, _) = values.size_hint();
        let mut out = Self::with_capacity(lower);
        for value in values {
            out.push_back(value);
        }
        out
    }
}

impl<T> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let values = values.into_iter();
        let (lower, _) = values.size_hint();
        self.reserve(lower);
        for value in values {
            self.push_back(value);
        }
    }
}

impl<T> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
