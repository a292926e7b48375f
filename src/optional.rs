//! Queries on a ring that may not exist yet.
//!
//! A ring that was never built answers like an empty ring of capacity zero:
//! both lengths are zero, searches find nothing and rotation does nothing.
//!
//! ```
//! use fixring::{MaybeRing, MaybeRingMut, Ring};
//!
//! let mut log: Option<Ring<u32>> = None;
//! assert_eq!(log.as_ref().len(), 0);
//! assert_eq!(log.as_ref().index(|_| true), None);
//! log.as_mut().rotate(3);
//!
//! log = Some((0..4).collect());
//! assert_eq!(log.as_ref().capacity(), 4);
//! assert_eq!(log.as_ref().rindex(|&n| n < 2), Some(1));
//! ```

use crate::ring::Ring;

/// Read-only ring queries that tolerate an absent ring.
pub trait MaybeRing<T> {
    /// Capacity of the ring, or 0 when absent.
    fn capacity(&self) -> usize;

    /// Number of elements in the ring, or 0 when absent.
    fn len(&self) -> usize;

    /// Returns true when the ring is absent or holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// See [`Ring::index`]. Always `None` when absent.
    fn index<F>(&self, pred: F) -> Option<usize>
        where F: FnMut(&T) -> bool;

    /// See [`Ring::rindex`]. Always `None` when absent.
    fn rindex<F>(&self, pred: F) -> Option<usize>
        where F: FnMut(&T) -> bool;
}

/// Mutating ring operations that tolerate an absent ring.
pub trait MaybeRingMut<T> {
    /// See [`Ring::rotate`]. Does nothing when absent.
    fn rotate(&mut self, n: isize);
}

impl<'a, T> MaybeRing<T> for Option<&'a Ring<T>> {
    #[inline]
    fn capacity(&self) -> usize {
        match *self {
            Some(ring) => ring.capacity(),
            None => 0,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        match *self {
            Some(ring) => ring.len(),
            None => 0,
        }
    }

    fn index<F>(&self, pred: F) -> Option<usize>
        where F: FnMut(&T) -> bool
    {
        match *self {
            Some(ring) => ring.index(pred),
            None => None,
        }
    }

    fn rindex<F>(&self, pred: F) -> Option<usize>
        where F: FnMut(&T) -> bool
    {
        match *self {
            Some(ring) => ring.rindex(pred),
            None => None,
        }
    }
}

impl<'a, T> MaybeRingMut<T> for Option<&'a mut Ring<T>> {
    #[inline]
    fn rotate(&mut self, n: isize) {
        if let Some(ring) = self {
            ring.rotate(n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_ring_is_empty() {
        let ring: Option<&Ring<char>> = None;
        assert_eq!(ring.len(), 0);
        assert_eq!(ring.capacity(), 0);
        assert!(ring.is_empty());
        assert_eq!(ring.index(|_| true), None);
        assert_eq!(ring.rindex(|_| true), None);
    }

    #[test]
    fn absent_ring_rotate_is_noop() {
        let mut ring: Option<&mut Ring<char>> = None;
        ring.rotate(5);
        ring.rotate(-5);
        assert!(ring.is_none());
    }

    #[test]
    fn present_ring_forwards() {
        let mut owned: Ring<char> = "abcab".chars().collect();
        {
            let ring = Some(&owned);
            assert_eq!(ring.len(), 5);
            assert_eq!(ring.capacity(), 5);
            assert!(!ring.is_empty());
            assert_eq!(ring.index(|&c| c == 'b'), Some(1));
            assert_eq!(ring.rindex(|&c| c == 'b'), Some(4));
        }
        Some(&mut owned).rotate(2);
        assert_eq!(owned.iter().collect::<String>(), "cabab");
    }
}
