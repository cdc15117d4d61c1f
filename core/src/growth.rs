//! Capacity selection for appends that outgrow their store.

use core::fmt::Debug;

/// Maps `(current capacity, needed length)` to the capacity of a new store.
///
/// Called only when `needed > capacity`. Implementations should return at
/// least `needed`; [`next_capacity`] clamps anything smaller.
pub trait GrowthPolicy {
    fn next_capacity(&self, capacity: usize, needed: usize) -> usize;
}

/// Amortized doubling.
///
/// An empty view grows to exactly `needed`; otherwise the capacity doubles
/// until it covers `needed`. Total copying across `n` single-element appends
/// stays `O(n)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Doubling;

impl GrowthPolicy for Doubling {
    fn next_capacity(&self, capacity: usize, needed: usize) -> usize {
        if capacity == 0 {
            return needed;
        }
        let mut new_capacity = capacity;
        while new_capacity < needed {
            new_capacity = match new_capacity.checked_mul(2) {
                Some(doubled) => doubled,
                // Doubling overflowed; the allocator gets to refuse `needed`.
                None => return needed,
            };
        }
        new_capacity
    }
}

/// Grow to exactly the requested length. No slack, so every overflowing
/// append copies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exact;

impl GrowthPolicy for Exact {
    fn next_capacity(&self, _capacity: usize, needed: usize) -> usize {
        needed
    }
}

/// Configuration-friendly selector over the built-in policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Growth {
    #[default]
    Doubling,
    Exact,
}

impl GrowthPolicy for Growth {
    fn next_capacity(&self, capacity: usize, needed: usize) -> usize {
        match self {
            Growth::Doubling => Doubling.next_capacity(capacity, needed),
            Growth::Exact => Exact.next_capacity(capacity, needed),
        }
    }
}

impl<F> GrowthPolicy for F
where
    F: Fn(usize, usize) -> usize,
{
    fn next_capacity(&self, capacity: usize, needed: usize) -> usize {
        self(capacity, needed)
    }
}

/// Ask `policy` for a new capacity, never returning less than `needed`.
pub fn next_capacity<P: GrowthPolicy + ?Sized>(policy: &P, capacity: usize, needed: usize) -> usize {
    debug_assert!(needed > capacity);
    policy.next_capacity(capacity, needed).max(needed)
}

// Policies are plain values that get copied into options.
static_assertions::assert_impl_all!(Growth: Copy, Debug, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubling_from_empty_is_exact() {
        assert_eq!(Doubling.next_capacity(0, 1), 1);
        assert_eq!(Doubling.next_capacity(0, 5), 5);
    }

    #[test]
    fn doubling_repeats_until_enough() {
        assert_eq!(Doubling.next_capacity(1, 2), 2);
        assert_eq!(Doubling.next_capacity(1, 5), 8);
        assert_eq!(Doubling.next_capacity(6, 7), 12);
        assert_eq!(Doubling.next_capacity(3, 25), 48);
    }

    #[test]
    fn doubling_saturates_instead_of_overflowing() {
        let cap = Doubling.next_capacity(usize::MAX / 2 + 1, usize::MAX);
        assert_eq!(cap, usize::MAX);
    }

    #[test]
    fn exact_policy() {
        assert_eq!(Exact.next_capacity(4, 9), 9);
        assert_eq!(Growth::Exact.next_capacity(4, 9), 9);
        assert_eq!(Growth::Doubling.next_capacity(4, 9), 16);
    }

    #[test]
    fn closures_are_policies() {
        let plus_ten = |_cap: usize, needed: usize| needed + 10;
        assert_eq!(next_capacity(&plus_ten, 2, 3), 13);
    }

    #[test]
    fn undersized_answers_are_clamped() {
        let stingy = |_cap: usize, _needed: usize| 1;
        assert_eq!(next_capacity(&stingy, 4, 9), 9);
    }
}
