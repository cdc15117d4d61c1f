//! Sliver - growable views over shared, fixed-capacity backing stores
//!
//! # Overview
//!
//! A [`View`] is a window `(store, offset, length, capacity)` onto a
//! [`BackingStore`]. Views made by slicing share their parent's store, so a
//! write through one is seen through every overlapping view. Appending writes
//! into spare capacity when there is some and otherwise moves the result to a
//! larger store, after which it no longer aliases anything.
//!
//! # Quick Start
//!
//! ```
//! use sliver::{View, view};
//!
//! let names = view!["John", "Paul", "George", "Ringo"];
//! let a = names.slice(0..2).unwrap();
//! let b = names.slice(1..3).unwrap();
//!
//! b.set(0, "XXX").unwrap();
//! assert_eq!(a.to_vec(), ["John", "XXX"]);
//! assert_eq!(names.to_vec(), ["John", "XXX", "George", "Ringo"]);
//!
//! // A nil view grows into a store of its own.
//! let s = View::new().append([0]).unwrap();
//! let s = s.append([1, 2, 3, 4]).unwrap();
//! assert_eq!((s.len(), s.capacity()), (5, 8));
//! ```
//!
//! # Grids
//!
//! ```
//! use sliver::Grid;
//!
//! let grid = Grid::<u8>::grid(3, 3).unwrap();
//! grid.set_cell(1, 2, 9).unwrap();
//! assert_eq!(grid.cell(1, 2), Ok(9));
//! assert!(grid.set_cell(3, 0, 1).is_err());
//! ```
//!
//! # Configuration
//!
//! Allocation limits and the growth policy are set through [`ViewOptions`],
//! and adjusted per call with [`ViewOptionsOverride`]:
//!
//! ```
//! use sliver::{Growth, View, ViewOptions, ViewOptionsOverride, view};
//!
//! let base = ViewOptions::default();
//! let options = base.merged(&ViewOptionsOverride {
//!     growth: Some(Growth::Exact),
//!     max_capacity: Some(Some(1024)),
//! });
//!
//! let v = view![1, 2, 3].append_with([4], &options).unwrap();
//! assert_eq!(v.capacity(), 4);
//!
//! let too_big = View::<u8>::make_in(0, 4096, &options);
//! assert!(too_big.is_err());
//! ```

pub use sliver_core::{
    AllocCause, Axis, BackingStore, Doubling, Error, ErrorKind, Exact, Grid, Growth, GrowthPolicy,
    Result, SequenceView, View, ViewOptions, ViewOptionsOverride, view,
};

pub use sliver_core::{error, grid, growth, iter, options, store, traits};
