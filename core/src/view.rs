//! Views: windows onto shared backing stores.
//!
//! A [`View`] is a `(store, offset, length, capacity)` descriptor. Slicing
//! produces another descriptor over the same store, so writes through one view
//! are visible through every view that overlaps it. Appending writes in place
//! while capacity allows, and otherwise moves the result to a fresh, larger
//! store, leaving earlier views where they were.
//!
//! ```text
//! store:   [ 2 | 3 | 5 | 7 | 11 | 13 ]
//! v        ├───────────────────────┤    offset 0, len 6, cap 6
//! v[1..4]      ├───────────┤            offset 1, len 3, cap 5
//! ```

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Bound, RangeBounds};

use crate::error::{AllocCause, Axis, Error, Result};
use crate::growth::{self, GrowthPolicy};
use crate::iter::Iter;
use crate::options::ViewOptions;
use crate::store::{self, BackingStore};

/// A growable window onto a shared [`BackingStore`].
///
/// Cloning a view is cheap and produces an alias: both clones see the same
/// elements. Views are not `Send`; see [`BackingStore`] for the threading
/// contract.
pub struct View<T> {
    /// `None` only for the nil view.
    store: Option<Rc<BackingStore<T>>>,
    offset: usize,
    len: usize,
    cap: usize,
}

static_assertions::assert_eq_size!(View<u8>, [usize; 4]);
static_assertions::assert_not_impl_any!(View<u8>: Send, Sync);

impl<T> View<T> {
    /// The nil view: no store, length and capacity 0.
    pub const fn new() -> Self {
        View {
            store: None,
            offset: 0,
            len: 0,
            cap: 0,
        }
    }

    /// Build a view over a fresh store holding exactly `values`.
    ///
    /// Length and capacity both equal the number of values. An empty literal
    /// still references a (zero-capacity) store and is not nil.
    pub fn from_literal(values: impl IntoIterator<Item = T>) -> Self {
        let cells: Vec<T> = values.into_iter().collect();
        let len = cells.len();
        View {
            store: Some(Rc::new(BackingStore::from_boxed(cells.into_boxed_slice()))),
            offset: 0,
            len,
            cap: len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Elements available from this view's first element to the end of its
    /// store.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Position of this view's first element within its store.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether this is the nil view (no store at all).
    pub fn is_nil(&self) -> bool {
        self.store.is_none()
    }

    /// The store this view references, if any.
    pub fn store(&self) -> Option<&Rc<BackingStore<T>>> {
        self.store.as_ref()
    }

    /// Whether both views reference the same backing store.
    pub fn shares_store(&self, other: &View<T>) -> bool {
        match (&self.store, &other.store) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// View identity: same store, same offset, same length.
    ///
    /// Two nil views are the same view. Element values are not compared.
    pub fn same_view(&self, other: &View<T>) -> bool {
        let same_store = match (&self.store, &other.store) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_store && self.offset == other.offset && self.len == other.len
    }

    /// Overwrite element `index`. Every view aliasing the slot sees the write.
    pub fn set(&self, index: usize, value: T) -> Result<()> {
        let store = self.checked_store(index)?;
        store.write(self.offset + index, value)
    }

    /// Re-slice within capacity.
    ///
    /// Bounds are checked against [`capacity`](Self::capacity), not length, so
    /// a view can be extended back over elements a previous slice hid.
    /// `..` is the whole view, `lo..` runs to the current length.
    ///
    /// ```
    /// use sliver_core::view;
    ///
    /// let v = view![2, 3, 5, 7, 11, 13];
    /// let t = v.slice(..0).unwrap();
    /// assert_eq!((t.len(), t.capacity()), (0, 6));
    ///
    /// let t = t.slice(..4).unwrap();
    /// assert_eq!(t.to_vec(), [2, 3, 5, 7]);
    ///
    /// let t = t.slice(2..).unwrap();
    /// assert_eq!(t.to_vec(), [5, 7]);
    /// assert_eq!(t.capacity(), 4);
    /// ```
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Result<View<T>> {
        self.slice_capped(range, self.cap)
    }

    /// Re-slice and also cap the result's capacity at `max - low`.
    ///
    /// Requires `low <= high <= max <= capacity`. Appends to the result that
    /// would reach past `max` reallocate instead of overwriting the store.
    pub fn slice_capped(&self, range: impl RangeBounds<usize>, max: usize) -> Result<View<T>> {
        let (low, high) = self.resolve(range, max)?;
        if low > high || high > max || max > self.cap {
            return Err(Error::SliceBounds {
                low,
                high,
                max,
                capacity: self.cap,
            });
        }
        Ok(View {
            store: self.store.clone(),
            offset: self.offset + low,
            len: high - low,
            cap: max - low,
        })
    }

    fn resolve(&self, range: impl RangeBounds<usize>, max: usize) -> Result<(usize, usize)> {
        let overflow = Error::SliceBounds {
            low: usize::MAX,
            high: usize::MAX,
            max,
            capacity: self.cap,
        };
        let low = match range.start_bound() {
            Bound::Included(&low) => low,
            Bound::Excluded(&low) => low.checked_add(1).ok_or_else(|| overflow.clone())?,
            Bound::Unbounded => 0,
        };
        let high = match range.end_bound() {
            Bound::Included(&high) => high.checked_add(1).ok_or(overflow)?,
            Bound::Excluded(&high) => high,
            Bound::Unbounded => self.len,
        };
        Ok((low, high))
    }

    fn checked_store(&self, index: usize) -> Result<&BackingStore<T>> {
        match &self.store {
            Some(store) if index < self.len => Ok(store),
            _ => Err(Error::OutOfBounds {
                axis: Axis::Index,
                index,
                len: self.len,
            }),
        }
    }
}

impl<T: Clone> View<T> {
    pub fn get(&self, index: usize) -> Result<T> {
        let store = self.checked_store(index)?;
        store.read(self.offset + index)
    }

    pub fn first(&self) -> Option<T> {
        self.get(0).ok()
    }

    pub fn last(&self) -> Option<T> {
        self.len.checked_sub(1).and_then(|i| self.get(i).ok())
    }

    /// Iterate over clones of the visible elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Clone the visible elements out.
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        if let Some(store) = &self.store {
            store.clone_range_into(self.offset, self.len, &mut out);
        }
        out
    }

    /// Copy `min(self.len(), src.len())` elements from `src` into this view,
    /// returning how many were copied.
    ///
    /// Overlapping views of one store are handled: the source is read in full
    /// before anything is written.
    pub fn copy_from(&self, src: &View<T>) -> usize {
        let count = self.len.min(src.len);
        let Some(store) = &self.store else {
            return 0;
        };
        if count == 0 {
            return 0;
        }
        let mut snapshot = Vec::with_capacity(count);
        if let Some(src_store) = &src.store {
            src_store.clone_range_into(src.offset, count, &mut snapshot);
        }
        match store.write_all(self.offset, snapshot) {
            Ok(()) => count,
            // `count <= self.len <= self.cap` keeps the write inside the store.
            Err(_) => unreachable!("copy_from wrote past its own view"),
        }
    }
}

impl<T: Clone + Default> View<T> {
    /// Allocate a zeroed store of `capacity` elements and view its first
    /// `length`.
    pub fn make(length: usize, capacity: usize) -> Result<Self> {
        Self::make_in(length, capacity, &ViewOptions::default())
    }

    /// Like [`make`](Self::make), honoring `options.max_capacity`.
    pub fn make_in(length: usize, capacity: usize, options: &ViewOptions) -> Result<Self> {
        let store = BackingStore::allocate_with(length, capacity, options)?;
        Ok(View {
            store: Some(store),
            offset: 0,
            len: length,
            cap: capacity,
        })
    }

    /// Append `values`, returning the resulting view.
    ///
    /// The receiver is never modified; callers rebind to the returned view.
    /// When the values fit in the remaining capacity they are written into the
    /// shared store, overwriting whatever other views see in those slots.
    /// Otherwise the result lives in a new store sized by doubling and no
    /// longer aliases anything.
    ///
    /// ```
    /// use sliver_core::View;
    ///
    /// let s = View::<i32>::new();
    /// let s = s.append([0]).unwrap();
    /// assert_eq!((s.len(), s.capacity()), (1, 1));
    ///
    /// let s = s.append([1, 2, 3, 4]).unwrap();
    /// assert_eq!(s.to_vec(), [0, 1, 2, 3, 4]);
    /// assert_eq!(s.capacity(), 8);
    /// ```
    pub fn append(&self, values: impl IntoIterator<Item = T>) -> Result<View<T>> {
        let options = ViewOptions::default();
        self.append_inner(values, &options.growth, &options)
    }

    /// Append using the growth policy and limit from `options`.
    pub fn append_with(
        &self,
        values: impl IntoIterator<Item = T>,
        options: &ViewOptions,
    ) -> Result<View<T>> {
        self.append_inner(values, &options.growth, options)
    }

    /// Append using an arbitrary growth policy.
    pub fn append_by<P>(&self, policy: &P, values: impl IntoIterator<Item = T>) -> Result<View<T>>
    where
        P: GrowthPolicy + ?Sized,
    {
        self.append_inner(values, policy, &ViewOptions::default())
    }

    /// Append the visible elements of `other`. `other` may alias `self`.
    pub fn append_view(&self, other: &View<T>) -> Result<View<T>> {
        self.append(other.to_vec())
    }

    fn append_inner<P>(
        &self,
        values: impl IntoIterator<Item = T>,
        policy: &P,
        options: &ViewOptions,
    ) -> Result<View<T>>
    where
        P: GrowthPolicy + ?Sized,
    {
        let values: Vec<T> = values.into_iter().collect();
        let needed = self.len.checked_add(values.len()).ok_or(Error::Allocation {
            capacity: usize::MAX,
            cause: AllocCause::OutOfMemory,
        })?;

        if needed <= self.cap {
            // A nil view has capacity 0, so it only gets here with no values.
            if let Some(store) = &self.store {
                store.write_all(self.offset + self.len, values)?;
            }
            return Ok(View {
                store: self.store.clone(),
                offset: self.offset,
                len: needed,
                cap: self.cap,
            });
        }

        let new_cap = growth::next_capacity(policy, self.cap, needed);
        let mut cells = store::reserve::<T>(new_cap, options)?;
        if let Some(store) = &self.store {
            store.clone_range_into(self.offset, self.len, &mut cells);
        }
        cells.extend(values);
        cells.resize_with(new_cap, T::default);
        tracing::debug!(
            old_capacity = self.cap,
            new_capacity = new_cap,
            len = needed,
            "append reallocated backing store"
        );

        Ok(View {
            store: Some(Rc::new(BackingStore::from_boxed(cells.into_boxed_slice()))),
            offset: 0,
            len: needed,
            cap: new_cap,
        })
    }
}

impl<T> Clone for View<T> {
    fn clone(&self) -> Self {
        View {
            store: self.store.clone(),
            offset: self.offset,
            len: self.len,
            cap: self.cap,
        }
    }
}

impl<T> Default for View<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for View<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> From<Vec<T>> for View<T> {
    fn from(values: Vec<T>) -> Self {
        View::from_literal(values)
    }
}

impl<T, const N: usize> From<[T; N]> for View<T> {
    fn from(values: [T; N]) -> Self {
        View::from_literal(values)
    }
}

impl<T> FromIterator<T> for View<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        View::from_literal(iter)
    }
}
