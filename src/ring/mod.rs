use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp;
use core::iter;
use core::mem;

pub use odds::IndexRange as RangeArgument;
use tracing::{debug, trace};

use crate::error::{Error, InsertError};
use crate::utils::*;

mod iterator_impls;
mod trait_impls;

pub use self::iterator_impls::{IntoIter, Iter, IterMut};

/// `Ring` is a fixed capacity ring deque.
///
/// The "default" usage of this type as a queue is to use `push_back` to add to
/// the queue, and `pop_front` to remove from the queue. `extend` pushes onto
/// the back in this manner, and iterating over `Ring` goes front to back.
///
/// # Capacity
///
/// Every slot of the backing storage holds an element when the ring is full,
/// so `capacity()` is exactly the storage length. Pushing onto a full ring
/// overwrites the element at the opposite end.
///
/// Vacated slots hold `T::default()`, so a popped or evicted element is never
/// retained by the ring.
#[derive(Clone)]
pub struct Ring<T> {
    buf: Box<[T]>,
    head: usize,
    tail: usize,
    count: usize,
}

impl<T> Ring<T> {
    #[inline]
    fn wrap_add(&self, index: usize, addend: usize) -> usize {
        wrap_add(index, addend, self.buf.len())
    }

    #[inline]
    fn wrap_sub(&self, index: usize, subtrahend: usize) -> usize {
        wrap_sub(index, subtrahend, self.buf.len())
    }

    /// Storage slot of logical position `index`.
    #[inline]
    fn slot(&self, index: usize) -> usize {
        debug_assert!(index < self.count);
        self.wrap_add(self.head, index)
    }

    /// The occupied storage for logical positions `start..start + len`, as
    /// the part before the wrap and the part after it.
    fn window(&self, start: usize, len: usize) -> (&[T], &[T]) {
        if len == 0 {
            return (&[], &[]);
        }
        let first = self.slot(start);
        let end = first + len;
        let cap = self.buf.len();
        if end <= cap {
            (&self.buf[first..end], &[])
        } else {
            (&self.buf[first..], &self.buf[..end - cap])
        }
    }

    fn window_mut(&mut self, start: usize, len: usize) -> (&mut [T], &mut [T]) {
        if len == 0 {
            return (&mut [], &mut []);
        }
        let first = self.slot(start);
        let end = first + len;
        let cap = self.buf.len();
        let (left, right) = self.buf.split_at_mut(first);
        if end <= cap {
            (&mut right[..len], &mut [])
        } else {
            (right, &mut left[..end - cap])
        }
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<usize, Error> {
        if index < self.count {
            Ok(self.slot(index))
        } else {
            Err(Error::out_of_range(index, self.count))
        }
    }

    /// Returns the number of elements the `Ring` can hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::Ring;
    ///
    /// let ring: Ring<u8> = Ring::new(4);
    /// assert_eq!(ring.capacity(), 4);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of elements in the `Ring`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::Ring;
    ///
    /// let mut ring = Ring::new(4);
    /// assert_eq!(ring.len(), 0);
    /// ring.push_back(1);
    /// assert_eq!(ring.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the ring contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if every slot of the ring is occupied.
    ///
    /// A ring with capacity zero is always full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.buf.len()
    }

    /// Appends an element to the back of the ring.
    ///
    /// Return `None` if the ring still had room, or `Some(existing)` if the
    /// ring is full, where `existing` is the front element being overwritten.
    /// A ring with capacity zero hands `element` straight back.
    ///
    /// # Examples
    ///
    /// ```text
    /// [_, _, _] <-(+)- 1 => [1, _, _] -> None
    /// [1, _, _] <-(+)- 2 => [1, 2, _] -> None
    /// [1, 2, _] <-(+)- 3 => [1, 2, 3] -> None
    /// [1, 2, 3] <-(+)- 4 => [2, 3, 4] -> Some(1)
    /// ```
    ///
    /// ```
    /// use fixring::Ring;
    ///
    /// let mut ring = Ring::new(3);
    /// ring.push_back(1);
    /// ring.push_back(2);
    /// ring.push_back(3);
    /// let overflow = ring.push_back(4);
    ///
    /// assert_eq!(ring.back(), Ok(&4));
    /// assert_eq!(overflow, Some(1));
    /// ```
    pub fn push_back(&mut self, element: T) -> Option<T> {
        if self.buf.is_empty() {
            return Some(element);
        }
        let tail = self.tail;
        let existing = mem::replace(&mut self.buf[tail], element);
        self.tail = self.wrap_add(tail, 1);

        if self.is_full() {
            self.head = self.wrap_add(self.head, 1);
            Some(existing)
        } else {
            self.count += 1;
            None
        }
    }

    /// Prepends an element to the front of the ring.
    ///
    /// Return `None` if the ring still had room, or `Some(existing)` if the
    /// ring is full, where `existing` is the back element being overwritten.
    ///
    /// # Examples
    ///
    /// ```text
    /// 1 -(+)-> [_, _, _] => [1, _, _] -> None
    /// 2 -(+)-> [1, _, _] => [2, 1, _] -> None
    /// 3 -(+)-> [2, 1, _] => [3, 2, 1] -> None
    /// 4 -(+)-> [3, 2, 1] => [4, 3, 2] -> Some(1)
    /// ```
    ///
    /// ```
    /// use fixring::Ring;
    ///
    /// let mut ring = Ring::new(2);
    /// ring.push_front(1);
    /// ring.push_front(2);
    /// let overflow = ring.push_front(3);
    ///
    /// assert_eq!(ring.front(), Ok(&3));
    /// assert_eq!(overflow, Some(1));
    /// ```
    pub fn push_front(&mut self, element: T) -> Option<T> {
        if self.buf.is_empty() {
            return Some(element);
        }
        let head = self.wrap_sub(self.head, 1);
        self.head = head;
        let existing = mem::replace(&mut self.buf[head], element);

        if self.is_full() {
            self.tail = self.wrap_sub(self.tail, 1);
            Some(existing)
        } else {
            self.count += 1;
            None
        }
    }

    /// Provides a reference to the front element.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::{Error, Ring};
    ///
    /// let mut ring = Ring::new(3);
    /// assert_eq!(ring.front(), Err(Error::Empty));
    ///
    /// ring.push_back(1);
    /// ring.push_back(2);
    /// assert_eq!(ring.front(), Ok(&1));
    /// ```
    pub fn front(&self) -> Result<&T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        Ok(&self.buf[self.head])
    }

    /// Provides a mutable reference to the front element.
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let head = self.head;
        Ok(&mut self.buf[head])
    }

    /// Provides a reference to the back element.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::{Error, Ring};
    ///
    /// let mut ring = Ring::new(3);
    /// assert_eq!(ring.back(), Err(Error::Empty));
    ///
    /// ring.push_back(1);
    /// ring.push_back(2);
    /// assert_eq!(ring.back(), Ok(&2));
    /// ```
    pub fn back(&self) -> Result<&T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        Ok(&self.buf[self.wrap_sub(self.tail, 1)])
    }

    /// Provides a mutable reference to the back element.
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let back = self.wrap_sub(self.tail, 1);
        Ok(&mut self.buf[back])
    }

    /// Retrieves the element at logical `index` without removing it.
    ///
    /// Element at index 0 is the front of the ring, index `len() - 1` is the
    /// back. This lets a ring serve as a bounded log: entries are pushed at
    /// one end, evicted at the other, and all of them stay readable.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::{Error, Ring};
    ///
    /// let mut ring = Ring::new(4);
    /// ring.push_back(3);
    /// ring.push_back(4);
    /// ring.push_back(5);
    /// assert_eq!(ring.at(1), Ok(&4));
    /// assert_eq!(ring.at(3), Err(Error::OutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let slot = self.check_index(index)?;
        Ok(&self.buf[slot])
    }

    /// Retrieves the element at logical `index` mutably.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let slot = self.check_index(index)?;
        Ok(&mut self.buf[slot])
    }

    /// Replaces the element at logical `index`, dropping the old one.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::Ring;
    ///
    /// let mut ring = Ring::new(4);
    /// ring.push_back('a');
    /// ring.push_back('b');
    /// ring.set(1, 'z').unwrap();
    /// assert_eq!(ring.at(1), Ok(&'z'));
    /// assert!(ring.set(2, 'y').is_err());
    /// ```
    pub fn set(&mut self, index: usize, element: T) -> Result<(), Error> {
        let slot = self.check_index(index)?;
        self.buf[slot] = element;
        Ok(())
    }

    /// Swaps elements at logical indices `i` and `j`.
    ///
    /// `i` and `j` may be equal. Nothing moves if either index is out of
    /// range.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), Error> {
        let ri = self.check_index(i)?;
        let rj = self.check_index(j)?;
        self.buf.swap(ri, rj);
        Ok(())
    }

    /// Returns the logical index of the first element satisfying `pred`,
    /// searching from front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::Ring;
    ///
    /// let ring: Ring<char> = "Hello, 世界".chars().collect();
    /// assert_eq!(ring.index(|c| !c.is_ascii()), Some(7));
    /// assert_eq!(ring.index(|&c| c == 'l'), Some(2));
    /// assert_eq!(ring.index(|&c| c == 'x'), None);
    /// ```
    pub fn index<F>(&self, pred: F) -> Option<usize>
        where F: FnMut(&T) -> bool
    {
        self.iter().position(pred)
    }

    /// Same as `index`, but searches from back to front.
    ///
    /// The returned index still counts from the front, where index 0 is the
    /// element returned by `front()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::Ring;
    ///
    /// let ring: Ring<char> = "Hello, 世界".chars().collect();
    /// assert_eq!(ring.rindex(|c| !c.is_ascii()), Some(8));
    /// assert_eq!(ring.rindex(|&c| c == 'l'), Some(3));
    /// ```
    pub fn rindex<F>(&self, pred: F) -> Option<usize>
        where F: FnMut(&T) -> bool
    {
        self.iter().rposition(pred)
    }

    /// Returns `true` if the ring contains an element equal to `x`.
    pub fn contains(&self, x: &T) -> bool
        where T: PartialEq
    {
        let (a, b) = self.as_slices();
        a.contains(x) || b.contains(x)
    }

    /// Rotates the ring `n` steps front-to-back, or back-to-front when `n` is
    /// negative.
    ///
    /// Rotating by a multiple of `len()` does nothing, and neither does
    /// rotating a ring holding one element or less. A full ring rotates by
    /// moving its indexes only; otherwise each step moves one element across
    /// the free gap.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::Ring;
    ///
    /// let mut ring: Ring<_> = (0..5).collect();
    /// ring.rotate(2);
    /// assert_eq!(ring.iter().cloned().collect::<Vec<_>>(), [2, 3, 4, 0, 1]);
    /// ring.rotate(-3);
    /// assert_eq!(ring.iter().cloned().collect::<Vec<_>>(), [4, 0, 1, 2, 3]);
    /// ```
    pub fn rotate(&mut self, n: isize) {
        if self.count <= 1 {
            return;
        }
        let n = n % self.count as isize;
        if n == 0 {
            return;
        }
        let steps = n.unsigned_abs();

        if self.is_full() {
            self.head = if n > 0 {
                self.wrap_add(self.head, steps)
            } else {
                self.wrap_sub(self.head, steps)
            };
            self.tail = self.head;
            return;
        }

        // The slot at `tail` and the one before `head` are free and hold
        // default values, so swapping moves an element across the gap and
        // leaves the vacated slot cleared.
        if n > 0 {
            for _ in 0..steps {
                self.buf.swap(self.tail, self.head);
                self.head = self.wrap_add(self.head, 1);
                self.tail = self.wrap_add(self.tail, 1);
            }
        } else {
            for _ in 0..steps {
                self.head = self.wrap_sub(self.head, 1);
                self.tail = self.wrap_sub(self.tail, 1);
                self.buf.swap(self.head, self.tail);
            }
        }
    }

    /// Inserts an element before logical index `at`.
    ///
    /// `insert(0, e)` is the same as `push_front(e)` and `insert(len(), e)` is
    /// the same as `push_back(e)`. Unlike a push, insertion never overwrites:
    /// a full ring rejects it with `Error::Full`. A rejected element is handed
    /// back inside the `InsertError`.
    ///
    /// Whichever end is closer to `at` is shifted to make room, so the cost is
    /// linear in the lesser distance to either end.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::{Error, Ring};
    ///
    /// let mut ring = Ring::new(4);
    /// ring.push_back(10);
    /// ring.push_back(12);
    /// ring.insert(1, 11).unwrap();
    /// assert_eq!(ring.at(1), Ok(&11));
    ///
    /// ring.insert(3, 13).unwrap();
    /// let err = ring.insert(0, 9).unwrap_err();
    /// assert_eq!(err.error, Error::Full);
    /// assert_eq!(err.element, 9);
    /// ```
    pub fn insert(&mut self, at: usize, element: T) -> Result<(), InsertError<T>> {
        if at > self.count {
            return Err(InsertError::new(Error::out_of_range(at, self.count), element));
        }
        if self.is_full() {
            return Err(InsertError::new(Error::Full, element));
        }

        if at * 2 < self.count {
            self.push_front(element);
            let mut front = self.head;
            for _ in 0..at {
                let next = self.wrap_add(front, 1);
                self.buf.swap(front, next);
                front = next;
            }
        } else {
            let swaps = self.count - at;
            self.push_back(element);
            let mut back = self.wrap_sub(self.tail, 1);
            for _ in 0..swaps {
                let prev = self.wrap_sub(back, 1);
                self.buf.swap(back, prev);
                back = prev;
            }
        }
        Ok(())
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::Ring;
    ///
    /// let mut ring = Ring::new(4);
    /// ring.push_back(5);
    /// ring.push_back(3);
    /// ring.push_front(4);
    /// let b: &[_] = &[&4, &5, &3];
    /// let c: Vec<&i32> = ring.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        let (first, second) = self.as_slices();
        Iter::new(first, second)
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::Ring;
    ///
    /// let mut ring = Ring::new(4);
    /// ring.push_back(5);
    /// ring.push_back(3);
    /// ring.push_back(4);
    /// for num in ring.iter_mut() {
    ///     *num = *num - 2;
    /// }
    /// assert_eq!(ring.iter().collect::<Vec<_>>(), [&3, &1, &2]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (first, second) = self.as_mut_slices();
        IterMut::new(first, second)
    }

    /// Returns a front-to-back iterator over a logical sub-range.
    ///
    /// # Panics
    ///
    /// Panics if the starting point is greater than the end point or if
    /// the end point is greater than the length of the ring.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::Ring;
    ///
    /// let ring: Ring<_> = (0..6).collect();
    /// assert_eq!(ring.range(2..4).collect::<Vec<_>>(), [&2, &3]);
    /// assert_eq!(ring.range(4..).count(), 2);
    /// ```
    pub fn range<R>(&self, range: R) -> Iter<'_, T>
        where R: RangeArgument<usize>
    {
        let len = self.len();
        let start = range.start().unwrap_or(0);
        let end = range.end().unwrap_or(len);
        assert!(start <= end, "range lower bound was too large");
        assert!(end <= len, "range upper bound was too large");

        let (first, second) = self.window(start, end - start);
        Iter::new(first, second)
    }

    /// Returns a pair of slices which contain, in order, the contents of the
    /// `Ring`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::Ring;
    ///
    /// let mut ring = Ring::new(6);
    ///
    /// ring.push_back(0);
    /// ring.push_back(1);
    /// ring.push_back(2);
    ///
    /// assert_eq!(ring.as_slices(), (&[0, 1, 2][..], &[][..]));
    ///
    /// ring.push_front(10);
    /// ring.push_front(9);
    ///
    /// assert_eq!(ring.as_slices(), (&[9, 10][..], &[0, 1, 2][..]));
    /// ```
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        self.window(0, self.count)
    }

    /// Converts the ring into a `Vec` holding its elements front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::Ring;
    ///
    /// let mut ring = Ring::new(3);
    /// ring.extend(1..=4);
    /// assert_eq!(ring.into_vec(), [2, 3, 4]);
    /// ```
    pub fn into_vec(self) -> Vec<T> {
        let Ring { buf, head, count, .. } = self;
        let mut vec = buf.into_vec();
        vec.rotate_left(head);
        vec.truncate(count);
        vec
    }

    /// Returns a pair of mutable slices which contain, in order, the contents
    /// of the `Ring`.
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let count = self.count;
        self.window_mut(0, count)
    }
}

impl<T: Default> Ring<T> {
    /// Creates an empty `Ring` able to hold `capacity` elements.
    ///
    /// The backing storage is allocated once, here, and filled with
    /// `T::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::Ring;
    ///
    /// let ring: Ring<String> = Ring::new(16);
    /// assert_eq!(ring.capacity(), 16);
    /// assert!(ring.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Ring<T> {
        Ring {
            buf: iter::repeat_with(T::default).take(capacity).collect(),
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Removes the front element and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::{Error, Ring};
    ///
    /// let mut ring = Ring::new(3);
    /// ring.push_back(1);
    /// ring.push_back(2);
    ///
    /// assert_eq!(ring.pop_front(), Ok(1));
    /// assert_eq!(ring.pop_front(), Ok(2));
    /// assert_eq!(ring.pop_front(), Err(Error::Empty));
    /// ```
    pub fn pop_front(&mut self) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let head = self.head;
        let element = mem::take(&mut self.buf[head]);
        self.head = self.wrap_add(head, 1);
        self.count -= 1;
        Ok(element)
    }

    /// Removes the back element and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::{Error, Ring};
    ///
    /// let mut ring = Ring::new(3);
    /// assert_eq!(ring.pop_back(), Err(Error::Empty));
    /// ring.push_back(1);
    /// ring.push_back(3);
    /// assert_eq!(ring.pop_back(), Ok(3));
    /// ```
    pub fn pop_back(&mut self) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let tail = self.wrap_sub(self.tail, 1);
        self.tail = tail;
        self.count -= 1;
        Ok(mem::take(&mut self.buf[tail]))
    }

    /// Removes and returns the element at logical index `at`.
    ///
    /// `remove(0)` is the same as `pop_front()` and `remove(len() - 1)` is the
    /// same as `pop_back()`. The cost is linear in the lesser distance from
    /// `at` to either end.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::Ring;
    ///
    /// let mut ring: Ring<_> = "ABCDEFG".chars().collect();
    /// assert_eq!(ring.remove(4), Ok('E'));
    /// assert_eq!(ring.remove(2), Ok('C'));
    /// assert_eq!(ring.iter().collect::<String>(), "ABDFG");
    /// ```
    pub fn remove(&mut self, at: usize) -> Result<T, Error> {
        let mut rm = self.check_index(at)?;

        if at * 2 < self.count {
            for _ in 0..at {
                let prev = self.wrap_sub(rm, 1);
                self.buf.swap(prev, rm);
                rm = prev;
            }
            return self.pop_front();
        }
        let swaps = self.count - at - 1;
        for _ in 0..swaps {
            let next = self.wrap_add(rm, 1);
            self.buf.swap(rm, next);
            rm = next;
        }
        self.pop_back()
    }

    /// Empties the ring, keeping its storage for future writes.
    ///
    /// Every removed element is dropped right away.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::Ring;
    ///
    /// let mut ring: Ring<_> = (0..8).collect();
    /// ring.reset();
    /// assert!(ring.is_empty());
    /// assert_eq!(ring.capacity(), 8);
    /// ```
    pub fn reset(&mut self) {
        let cleared = self.count;
        for i in 0..cleared {
            let slot = self.slot(i);
            self.buf[slot] = T::default();
        }
        self.head = 0;
        self.tail = 0;
        self.count = 0;
        trace!(capacity = self.buf.len(), cleared, "ring reset");
    }

    /// Clears the ring, removing all values. Same as `reset`.
    #[inline]
    pub fn clear(&mut self) {
        self.reset();
    }

    /// Moves the elements into new storage of `capacity` slots.
    ///
    /// Logical order is kept and the front element lands in slot 0. When the
    /// ring holds more than `capacity` elements, the ones at the back are
    /// dropped. Nothing happens when `len()` already equals `capacity`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::Ring;
    ///
    /// let mut ring: Ring<_> = (0..6).collect();
    /// ring.resize(4);
    /// assert_eq!(ring.capacity(), 4);
    /// assert_eq!(ring.iter().cloned().collect::<Vec<_>>(), [0, 1, 2, 3]);
    ///
    /// ring.resize(8);
    /// ring.push_back(4);
    /// assert_eq!(ring.len(), 5);
    /// ```
    pub fn resize(&mut self, capacity: usize) {
        if self.count == capacity {
            return;
        }
        let from = self.buf.len();
        let len = cmp::min(self.count, capacity);

        let mut buf = Vec::with_capacity(capacity);
        for i in 0..len {
            let slot = self.slot(i);
            buf.push(mem::take(&mut self.buf[slot]));
        }
        buf.resize_with(capacity, T::default);

        let dropped = self.count - len;
        self.buf = buf.into_boxed_slice();
        self.head = 0;
        self.tail = if capacity == 0 { 0 } else { len % capacity };
        self.count = len;
        debug!(from, to = capacity, len, dropped, "ring resized");
    }
}
