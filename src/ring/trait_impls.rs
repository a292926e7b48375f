use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FromIterator;
use core::ops::{Index, IndexMut};

use super::{IntoIter, Iter, IterMut, Ring};

/// An empty ring with capacity zero.
///
/// It behaves like a ring that was never built: length and capacity are zero,
/// pushes hand the element back and searches find nothing.
impl<T> Default for Ring<T> {
    #[inline]
    fn default() -> Ring<T> {
        Ring::from(Vec::new())
    }
}

impl<T: PartialEq> PartialEq for Ring<T> {
    fn eq(&self, other: &Ring<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Ring<T> {}

impl<T: PartialOrd> PartialOrd for Ring<T> {
    fn partial_cmp(&self, other: &Ring<T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for Ring<T> {
    #[inline]
    fn cmp(&self, other: &Ring<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for Ring<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for x in self {
            x.hash(state);
        }
    }
}

impl<T> Index<usize> for Ring<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(elem) => elem,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for Ring<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(elem) => elem,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Builds a full ring whose capacity is the number of elements.
impl<T> From<Vec<T>> for Ring<T> {
    fn from(vec: Vec<T>) -> Ring<T> {
        let count = vec.len();
        Ring {
            buf: vec.into_boxed_slice(),
            head: 0,
            tail: 0,
            count,
        }
    }
}

impl<T> From<Ring<T>> for Vec<T> {
    #[inline]
    fn from(ring: Ring<T>) -> Vec<T> {
        ring.into_vec()
    }
}

/// Collects into a full ring sized to the number of elements.
impl<T> FromIterator<T> for Ring<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Ring<T> {
        Ring::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> IntoIterator for Ring<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Ring<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Ring<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// Pushes every item onto the back, overwriting the front when full.
impl<T> Extend<T> for Ring<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.push_back(elt);
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for Ring<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: fmt::Debug> fmt::Debug for Ring<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
