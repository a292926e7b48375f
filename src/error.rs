//! Error values returned by `Ring` operations.

use core::fmt;

use thiserror::Error;

/// Precondition violation reported by a fallible `Ring` operation.
///
/// An operation that returns an error leaves the ring untouched.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Error)]
pub enum Error {
    /// The logical index is outside the occupied window.
    #[error("ring: index out of range {index} with length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The ring length when the call was made.
        len: usize,
    },

    /// Peek or pop on a ring holding no elements.
    #[error("ring: empty")]
    Empty,

    /// Insert into a ring with no free slot.
    #[error("ring: cannot insert into full ring")]
    Full,
}

impl Error {
    #[inline]
    pub(crate) fn out_of_range(index: usize, len: usize) -> Error {
        Error::OutOfRange { index, len }
    }
}

/// A rejected `Ring::insert`, carrying the element back to the caller.
#[derive(Clone, Copy, Eq, Hash, PartialEq, Error)]
#[error("{error}")]
pub struct InsertError<T> {
    /// Why the insert was rejected: `OutOfRange` or `Full`.
    pub error: Error,
    /// The element that was not inserted.
    pub element: T,
}

impl<T> InsertError<T> {
    #[inline]
    pub(crate) fn new(error: Error, element: T) -> InsertError<T> {
        InsertError { error, element }
    }

    /// Takes back the element that was not inserted.
    #[inline]
    pub fn into_element(self) -> T {
        self.element
    }
}

impl<T> fmt::Debug for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InsertError: {:?}", self.error)
    }
}

impl<T> From<InsertError<T>> for Error {
    #[inline]
    fn from(err: InsertError<T>) -> Error {
        err.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn messages() {
        assert_eq!(Error::out_of_range(4, 3).to_string(),
                   "ring: index out of range 4 with length 3");
        assert_eq!(Error::Empty.to_string(), "ring: empty");
        assert_eq!(Error::Full.to_string(), "ring: cannot insert into full ring");
        assert_eq!(InsertError::new(Error::Full, 'x').to_string(),
                   "ring: cannot insert into full ring");
    }

    #[test]
    fn insert_error_converts() {
        let err = InsertError::new(Error::out_of_range(2, 1), "kept".to_string());
        assert_eq!(format!("{:?}", err), "InsertError: OutOfRange { index: 2, len: 1 }");
        assert_eq!(Error::from(err.clone()), Error::out_of_range(2, 1));
        assert_eq!(err.into_element(), "kept");
    }
}
