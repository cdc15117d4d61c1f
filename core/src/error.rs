//! Error types for store and view operations.
//!
//! Every fallible operation validates its inputs before touching any element,
//! so an `Err` always leaves stores and views exactly as they were.

use core::fmt;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Which dimension an indexed access failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Raw index into a [`BackingStore`](crate::BackingStore).
    Store,
    /// Element index into a [`View`](crate::View).
    Index,
    /// Row index into a grid.
    Row,
    /// Column index into a grid row.
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::Store => "store",
            Axis::Index => "view",
            Axis::Row => "row",
            Axis::Column => "column",
        };
        f.write_str(name)
    }
}

/// Why a backing store could not be allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocCause {
    /// The request exceeded [`ViewOptions::max_capacity`](crate::ViewOptions::max_capacity).
    LimitExceeded { limit: usize },
    /// The allocator refused the request, or its byte size overflowed.
    OutOfMemory,
}

impl fmt::Display for AllocCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocCause::LimitExceeded { limit } => write!(f, "limit is {limit}"),
            AllocCause::OutOfMemory => f.write_str("out of memory"),
        }
    }
}

/// The two broad classes of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A bad index or range. Always recoverable.
    OutOfBounds,
    /// A backing store could not be allocated.
    Allocation,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("index {index} out of range for {axis} of length {len}")]
    OutOfBounds { axis: Axis, index: usize, len: usize },

    #[error("slice bounds {low}..{high} (max {max}) out of range for capacity {capacity}")]
    SliceBounds {
        low: usize,
        high: usize,
        max: usize,
        capacity: usize,
    },

    #[error("length {length} exceeds capacity {capacity}")]
    LengthExceedsCapacity { length: usize, capacity: usize },

    #[error("cannot allocate backing store of {capacity} elements: {cause}")]
    Allocation { capacity: usize, cause: AllocCause },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::OutOfBounds { .. }
            | Error::SliceBounds { .. }
            | Error::LengthExceedsCapacity { .. } => ErrorKind::OutOfBounds,
            Error::Allocation { .. } => ErrorKind::Allocation,
        }
    }

    pub fn is_out_of_bounds(&self) -> bool {
        self.kind() == ErrorKind::OutOfBounds
    }

    /// The failing axis, for indexed access errors.
    pub fn axis(&self) -> Option<Axis> {
        match self {
            Error::OutOfBounds { axis, .. } => Some(*axis),
            _ => None,
        }
    }

    /// Re-label an index error with a different axis.
    ///
    /// Grids delegate to row views, which report [`Axis::Index`]; the grid
    /// turns that into [`Axis::Column`].
    pub(crate) fn on_axis(self, axis: Axis) -> Self {
        match self {
            Error::OutOfBounds { index, len, .. } => Error::OutOfBounds { axis, index, len },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn kinds() {
        let oob = Error::OutOfBounds {
            axis: Axis::Index,
            index: 3,
            len: 2,
        };
        assert_eq!(oob.kind(), ErrorKind::OutOfBounds);
        assert!(oob.is_out_of_bounds());

        let slice = Error::SliceBounds {
            low: 4,
            high: 2,
            max: 6,
            capacity: 6,
        };
        assert_eq!(slice.kind(), ErrorKind::OutOfBounds);

        let alloc = Error::Allocation {
            capacity: 10,
            cause: AllocCause::LimitExceeded { limit: 8 },
        };
        assert_eq!(alloc.kind(), ErrorKind::Allocation);
        assert!(!alloc.is_out_of_bounds());
    }

    #[test]
    fn messages() {
        let err = Error::OutOfBounds {
            axis: Axis::Row,
            index: 5,
            len: 3,
        };
        assert_eq!(err.to_string(), "index 5 out of range for row of length 3");

        let err = Error::Allocation {
            capacity: 10,
            cause: AllocCause::LimitExceeded { limit: 8 },
        };
        assert_eq!(
            err.to_string(),
            "cannot allocate backing store of 10 elements: limit is 8"
        );
    }

    #[test]
    fn relabel_axis() {
        let err = Error::OutOfBounds {
            axis: Axis::Index,
            index: 7,
            len: 3,
        }
        .on_axis(Axis::Column);
        assert_eq!(err.axis(), Some(Axis::Column));

        let untouched = Error::LengthExceedsCapacity {
            length: 2,
            capacity: 1,
        }
        .on_axis(Axis::Column);
        assert_eq!(untouched.axis(), None);
    }
}
