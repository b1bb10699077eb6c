use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use log::trace;

use crate::error::{ArrayError, Result};
use crate::growth::GrowthPolicy;
use crate::slots::Slots;

/// A growable array with an explicit growth increment.
///
/// The array tracks a logical `size` and an allocated `capacity`. Slots in
/// `[size, capacity)` stay allocated and hold valid values, so shrinking the
/// size and growing it back within the capacity never reallocates.
///
/// ```rust
/// use carray::DynamicArray;
///
/// let mut arr = DynamicArray::with_increment(5, 5);
/// for i in 0..5 {
///     arr[i] = i * 2;
/// }
/// arr.add(10);
/// assert_eq!(arr.capacity(), 10);
///
/// arr.insert_at(2, 15).unwrap();
/// arr.free_extra();
/// assert_eq!(arr.data(), &[0, 2, 15, 4, 6, 8, 10]);
/// assert_eq!(arr.capacity(), 7);
/// ```
pub struct DynamicArray<T> {
    slots: Slots<T>,
    size: usize,
    growth: GrowthPolicy,
}

impl<T> DynamicArray<T> {
    /// Number of logically valid elements.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.size
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn grow_increment(&self) -> usize {
        self.growth.increment()
    }

    pub fn growth_policy(&self) -> GrowthPolicy {
        self.growth
    }

    /// Changes the increment used by later reallocations. Zero is treated as one.
    pub fn set_grow_increment(&mut self, grow_increment: usize) {
        self.growth = GrowthPolicy::new(grow_increment);
    }

    /// Index of the last element, or `-1` when the array is empty.
    pub fn upper_bound(&self) -> isize {
        self.size as isize - 1
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Reference to the element at `index`.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.slots.as_slice()[index])
    }

    /// Mutable reference to the element at `index`, for in-place updates.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        Ok(&mut self.slots.as_mut_slice()[index])
    }

    /// Overwrites the element at `index`.
    pub fn set_at(&mut self, index: usize, value: T) -> Result<()> {
        *self.at_mut(index)? = value;
        Ok(())
    }

    /// Drops the logical contents. The buffer is kept for reuse.
    pub fn remove_all(&mut self) {
        self.size = 0;
    }

    /// The live elements as a slice.
    pub fn data(&self) -> &[T] {
        &self.slots.as_slice()[..self.size]
    }

    /// The live elements as a mutable slice, for bulk updates.
    pub fn data_mut(&mut self) -> &mut [T] {
        let size = self.size;
        &mut self.slots.as_mut_slice()[..size]
    }

    /// Base pointer of the buffer.
    ///
    /// The pointer is dangling when the capacity is zero and is invalidated by
    /// any call that reallocates: `add` or `insert_at` on a full array, a
    /// growing `resize`, `reserve`, `append`, `free_extra` and `assign`.
    pub fn as_ptr(&self) -> *const T {
        self.slots.as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.size {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    fn out_of_range(&self, index: usize) -> ArrayError {
        ArrayError::OutOfRange {
            index,
            size: self.size,
        }
    }

    /// Size the array would need to hold one more increment.
    fn grown_size(&self) -> usize {
        self.size
            .checked_add(self.growth.increment())
            .expect("Capacity overflow")
    }
}

impl<T: Default> DynamicArray<T> {
    /// An empty array with a growth increment of one. Does not allocate.
    pub fn new() -> Self {
        Self::with_increment(0, 1)
    }

    /// An array of `initial_size` default elements with a growth increment of one.
    pub fn with_size(initial_size: usize) -> Self {
        Self::with_increment(initial_size, 1)
    }

    /// An array of `initial_size` default elements and no slack.
    pub fn with_increment(initial_size: usize, grow_increment: usize) -> Self {
        Self {
            slots: Slots::from_fn(initial_size, |_| T::default()),
            size: initial_size,
            growth: GrowthPolicy::new(grow_increment),
        }
    }

    /// Sets the logical size, reallocating with the current increment if
    /// `new_size` exceeds the capacity. Shrinking never releases memory.
    pub fn resize(&mut self, new_size: usize) {
        let policy = self.growth;
        self.resize_with_policy(new_size, policy);
    }

    /// Like [`resize`](Self::resize), rounding with `grow_increment` for this call only.
    pub fn resize_with_increment(&mut self, new_size: usize, grow_increment: usize) {
        self.resize_with_policy(new_size, GrowthPolicy::new(grow_increment));
    }

    /// Makes room for at least `min_capacity` elements without changing the size.
    pub fn reserve(&mut self, min_capacity: usize) {
        if min_capacity > self.capacity() {
            let new_capacity = self.growth.capacity_for(min_capacity);
            self.reallocate(new_capacity);
        }
    }

    /// Appends `value` and returns its index.
    ///
    /// A full array grows by one increment, so a run of `add` calls
    /// reallocates once every `grow_increment` elements.
    pub fn add(&mut self, value: T) -> usize {
        if self.size == self.capacity() {
            let required = self.grown_size();
            self.reserve(required);
        }

        let index = self.size;
        self.slots.as_mut_slice()[index] = value;
        self.size += 1;
        index
    }

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// `index == size()` appends.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.size {
            return Err(self.out_of_range(index));
        }

        if self.size == self.capacity() {
            let required = self.grown_size();
            self.reserve(required);
        }

        let size = self.size;
        let slots = self.slots.as_mut_slice();
        slots[size] = value;
        slots[index..=size].rotate_right(1);
        self.size += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements left.
    ///
    /// The capacity is unchanged; the vacated slot is reset to `T::default()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;

        let size = self.size;
        let slots = self.slots.as_mut_slice();
        slots[index..size].rotate_left(1);
        let removed = mem::take(&mut slots[size - 1]);
        self.size -= 1;
        Ok(removed)
    }

    /// Shrinks the capacity to the size. Does nothing if there is no slack.
    pub fn free_extra(&mut self) {
        if self.size < self.capacity() {
            self.reallocate(self.size);
        }
    }

    fn resize_with_policy(&mut self, new_size: usize, policy: GrowthPolicy) {
        if new_size > self.capacity() {
            self.reallocate(policy.capacity_for(new_size));
        }
        self.size = new_size;
    }

    /// Moves the live elements into a fresh buffer of `new_capacity` slots.
    fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.size);
        trace!(
            "reallocating array: capacity {} -> {}, size {}",
            self.capacity(),
            new_capacity,
            self.size
        );

        let size = self.size;
        let mut fresh = Slots::from_fn(new_capacity, |_| T::default());
        fresh.as_mut_slice()[..size].swap_with_slice(&mut self.slots.as_mut_slice()[..size]);
        self.slots = fresh;
    }
}

impl<T: Default + Clone> DynamicArray<T> {
    /// Appends a copy of every element of `other` and returns the index of the
    /// first one. `other` is left untouched.
    pub fn append(&mut self, other: &DynamicArray<T>) -> usize {
        let start = self.size;
        let new_size = start.checked_add(other.size).expect("Capacity overflow");
        self.reserve(new_size);

        self.slots.as_mut_slice()[start..new_size].clone_from_slice(other.data());
        self.size = new_size;
        start
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Copy of the element at `index`.
    pub fn get_at(&self, index: usize) -> Result<T> {
        self.at(index).cloned()
    }

    /// Replaces this array with a deep copy of `other`: size, capacity, growth
    /// increment and every allocated slot.
    pub fn assign(&mut self, other: &DynamicArray<T>) {
        let source = other.slots.as_slice();
        self.slots = Slots::from_fn(source.len(), |i| source[i].clone());
        self.size = other.size;
        self.growth = other.growth;
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let source = self.slots.as_slice();
        Self {
            slots: Slots::from_fn(source.len(), |i| source[i].clone()),
            size: self.size,
            growth: self.growth,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(items: &[T]) -> Self {
        Self {
            slots: Slots::from_fn(items.len(), |i| items[i].clone()),
            size: items.len(),
            growth: GrowthPolicy::default(),
        }
    }
}

impl<T: Default> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(elem) => elem,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let size = self.size;
        match self.at_mut(index) {
            Ok(elem) => elem,
            Err(_) => panic!("{}", ArrayError::OutOfRange { index, size }),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data() == other.data()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}
