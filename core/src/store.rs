//! Fixed-capacity backing storage shared by views.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use crate::error::{AllocCause, Axis, Error, Result};
use crate::options::ViewOptions;

/// A contiguous block of `capacity` elements.
///
/// The capacity is fixed when the store is allocated; only views allocate new
/// stores. Stores are handed out as `Rc<BackingStore<T>>` so every view that
/// references one keeps it alive, and it is freed with the last view.
///
/// Writes go through `&self`: every view sharing the store observes them.
/// The store is `!Sync`; callers sharing it between threads must serialize
/// access themselves.
pub struct BackingStore<T> {
    cells: RefCell<Box<[T]>>,
}

impl<T: Default> BackingStore<T> {
    /// Allocate a store of `capacity` zero-valued elements.
    ///
    /// `length` is the visible length the caller intends to expose and must
    /// not exceed `capacity`.
    pub fn allocate(length: usize, capacity: usize) -> Result<Rc<Self>> {
        Self::allocate_with(length, capacity, &ViewOptions::default())
    }

    /// Like [`allocate`](Self::allocate), honoring `options.max_capacity`.
    pub fn allocate_with(length: usize, capacity: usize, options: &ViewOptions) -> Result<Rc<Self>> {
        if length > capacity {
            return Err(Error::LengthExceedsCapacity { length, capacity });
        }
        let cells = zeroed(capacity, options)?;
        Ok(Rc::new(Self::from_boxed(cells)))
    }
}

impl<T> BackingStore<T> {
    /// Wrap already-initialized elements; capacity is their count.
    pub(crate) fn from_boxed(cells: Box<[T]>) -> Self {
        tracing::trace!(
            capacity = cells.len(),
            element = core::any::type_name::<T>(),
            "allocated backing store"
        );
        Self {
            cells: RefCell::new(cells),
        }
    }

    pub fn capacity(&self) -> usize {
        self.cells.borrow().len()
    }

    pub fn write(&self, index: usize, value: T) -> Result<()> {
        let mut cells = self.cells.borrow_mut();
        let len = cells.len();
        match cells.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::OutOfBounds {
                axis: Axis::Store,
                index,
                len,
            }),
        }
    }

    /// Write `values` into consecutive slots starting at `start`.
    ///
    /// The whole range is checked first; nothing is written on failure.
    pub(crate) fn write_all(&self, start: usize, values: Vec<T>) -> Result<()> {
        let mut cells = self.cells.borrow_mut();
        let len = cells.len();
        let end = start.checked_add(values.len()).filter(|&end| end <= len);
        let Some(end) = end else {
            return Err(Error::OutOfBounds {
                axis: Axis::Store,
                index: start.saturating_add(values.len()).saturating_sub(1),
                len,
            });
        };
        for (slot, value) in cells[start..end].iter_mut().zip(values) {
            *slot = value;
        }
        Ok(())
    }
}

impl<T: Clone> BackingStore<T> {
    pub fn read(&self, index: usize) -> Result<T> {
        let cells = self.cells.borrow();
        cells.get(index).cloned().ok_or(Error::OutOfBounds {
            axis: Axis::Store,
            index,
            len: cells.len(),
        })
    }

    /// Append clones of `count` elements starting at `start` to `out`.
    ///
    /// Callers pass an in-bounds range; views guarantee it through their own
    /// invariants.
    pub(crate) fn clone_range_into(&self, start: usize, count: usize, out: &mut Vec<T>) {
        let cells = self.cells.borrow();
        out.extend_from_slice(&cells[start..start + count]);
    }
}

/// Allocate `capacity` default elements without aborting on failure.
pub(crate) fn zeroed<T: Default>(capacity: usize, options: &ViewOptions) -> Result<Box<[T]>> {
    let mut cells = reserve::<T>(capacity, options)?;
    cells.resize_with(capacity, T::default);
    Ok(cells.into_boxed_slice())
}

/// Reserve room for exactly `capacity` elements, checking the configured
/// limit and the allocator.
pub(crate) fn reserve<T>(capacity: usize, options: &ViewOptions) -> Result<Vec<T>> {
    if let Some(limit) = options.max_capacity {
        if capacity > limit {
            tracing::warn!(capacity, limit, "backing store request exceeds limit");
            return Err(Error::Allocation {
                capacity,
                cause: AllocCause::LimitExceeded { limit },
            });
        }
    }
    let mut cells = Vec::new();
    cells.try_reserve_exact(capacity).map_err(|_| Error::Allocation {
        capacity,
        cause: AllocCause::OutOfMemory,
    })?;
    Ok(cells)
}

impl<T: fmt::Debug> fmt::Debug for BackingStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cells.try_borrow() {
            Ok(cells) => f.debug_struct("BackingStore").field("cells", &&cells[..]).finish(),
            Err(_) => f.write_str("BackingStore(<borrowed>)"),
        }
    }
}
