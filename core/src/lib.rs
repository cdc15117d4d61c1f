//! Sliver: growable, aliasing views over shared backing stores.
//!
//! # Overview
//!
//! A [`BackingStore`] is one fixed-capacity block of elements. A [`View`] is a
//! lightweight `(store, offset, length, capacity)` window onto a store. Many
//! views can share a store; a write through any of them is visible through
//! every view overlapping the written slot.
//!
//! - [`View::slice`] re-slices without copying, bounded by capacity.
//! - [`View::append`] writes in place while capacity allows and otherwise
//!   moves the result to a new store chosen by a [`GrowthPolicy`].
//! - [`Grid`] composes views into rows.
//!
//! ```
//! use sliver_core::{View, view};
//!
//! let primes = view![2, 3, 5, 7, 11, 13];
//! let s = primes.slice(1..4).unwrap();
//! s.set(0, 30).unwrap();
//! assert_eq!(primes.get(1), Ok(30));
//!
//! // Room to grow: still aliases `primes`.
//! let s = s.append([70]).unwrap();
//! assert_eq!(primes.get(4), Ok(70));
//!
//! // Nil views grow into fresh stores.
//! let fresh = View::new().append([1, 2, 3]).unwrap();
//! assert!(!fresh.shares_store(&primes));
//! # let _ = s;
//! ```
//!
//! # Ownership
//!
//! Stores are reference counted and freed when the last view referencing them
//! is dropped. Views are single-threaded (`!Send`); nothing here locks.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

mod macros;

pub mod error;
pub mod grid;
pub mod growth;
pub mod iter;
pub mod options;
pub mod store;
pub mod traits;
pub mod view;

pub use error::{AllocCause, Axis, Error, ErrorKind, Result};
pub use grid::Grid;
pub use growth::{Doubling, Exact, Growth, GrowthPolicy};
pub use options::{ViewOptions, ViewOptionsOverride};
pub use store::BackingStore;
pub use traits::SequenceView;
pub use view::View;
