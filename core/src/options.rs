//! Allocation options and per-call overrides.

use crate::growth::Growth;

/// Options controlling how backing stores are allocated and grown.
///
/// The plain constructors and [`View::append`](crate::View::append) use
/// `ViewOptions::default()`: doubling growth, no capacity limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewOptions {
    /// Policy consulted when an append outgrows its store.
    pub growth: Growth,

    /// Largest store (in elements) that may be allocated. `None` leaves the
    /// decision to the global allocator.
    pub max_capacity: Option<usize>,
}

impl ViewOptions {
    /// Apply the fields set in `overrides` on top of these options.
    pub fn override_with(&mut self, overrides: &ViewOptionsOverride) {
        if let Some(growth) = overrides.growth {
            self.growth = growth;
        }
        if let Some(max_capacity) = overrides.max_capacity {
            self.max_capacity = max_capacity;
        }
    }

    /// Returns a copy of these options with `overrides` applied.
    pub fn merged(&self, overrides: &ViewOptionsOverride) -> Self {
        let mut merged = *self;
        merged.override_with(overrides);
        merged
    }
}

/// Partial [`ViewOptions`]: unset fields keep their base value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewOptionsOverride {
    pub growth: Option<Growth>,
    /// `Some(None)` removes a configured limit.
    pub max_capacity: Option<Option<usize>>,
}
