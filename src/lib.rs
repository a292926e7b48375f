//! A ring deque with fixed capacity.
//!
//! The ring owns a single allocation made when it is built (or resized) and
//! never grows. Pushing onto a full ring overwrites the element at the
//! opposite end, which makes it a natural bounded log buffer or sliding
//! window.
//!
//! This deque has `O(1)` inserts and removals at both ends of the container.
//! It also has `O(1)` indexing like a vector, `O(1)` rotation when full, and
//! inserts and removals in the middle that only shift the shorter side.
//! The contained elements are not required to be copyable.
//!
//! # Feature Flags
//! The **fixring** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd. Without it the crate only needs `alloc`.
//!
//! # Errors
//!
//! Operations with a precondition return `Result<_, Error>` and leave the
//! ring untouched on failure. Pushes, rotation, searches, `reset` and
//! `resize` never fail.
//!
//! # Examples
//! ```
//! use fixring::Ring;
//!
//! let mut ring = Ring::new(5);
//! assert_eq!(ring.capacity(), 5);
//! assert_eq!(ring.len(), 0);
//!
//! ring.extend("hello".chars());
//! ring.push_back('w');
//! assert_eq!(ring.front(), Ok(&'e'));
//! assert_eq!(ring.back(), Ok(&'w'));
//!
//! assert_eq!(ring.pop_front(), Ok('e'));
//! assert_eq!(ring.pop_back(), Ok('w'));
//! assert_eq!(ring.len(), 3);
//! ```
//!
//! # Insert & Remove
//! ```
//! use fixring::Ring;
//!
//! let mut ring = Ring::new(8);
//!
//! ring.push_back(11);
//! ring.push_back(13);
//! ring.insert(1, 12).unwrap();
//! ring.remove(0).unwrap();
//!
//! assert_eq!(ring[0], 12);
//! assert_eq!(ring[1], 13);
//! ```
//!
//! # Rotate
//! ```
//! use fixring::Ring;
//!
//! let mut ring: Ring<_> = (0..5).collect();
//! ring.rotate(1);
//! assert_eq!(format!("{:?}", ring), "[1, 2, 3, 4, 0]");
//! ring.rotate(-6);
//! assert_eq!(format!("{:?}", ring), "[0, 1, 2, 3, 4]");
//! ```
//!
//! # Iterator
//! ```
//! use fixring::Ring;
//!
//! let mut ring = Ring::new(8);
//!
//! ring.extend(0..5);
//!
//! let iters: Vec<_> = ring.into_iter().collect();
//! assert_eq!(iters, vec![0, 1, 2, 3, 4]);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

extern crate alloc;

mod optional;
mod ring;
mod utils;
pub mod error;

pub use error::{Error, InsertError};
pub use optional::{MaybeRing, MaybeRingMut};
pub use ring::{IntoIter, Iter, IterMut, RangeArgument, Ring};
