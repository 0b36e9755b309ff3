use crate::error::{HookVecError, Result};

/// Element buffer plus the capacity policy.
///
/// `capacity` is the policy's view of the allocation. The backing `Vec` is
/// always allocated to at least that many slots, but may hold more.
#[derive(Debug)]
pub(crate) struct Storage<T> {
    items: Vec<T>,
    capacity: usize,
    min_alloc: usize,
    growth: f64,
}

/// Smallest capacity reachable from `current` by repeated growth that holds `needed`.
pub(crate) fn next_capacity(current: usize, needed: usize, growth: f64) -> usize {
    let mut capacity = current;
    while capacity < needed {
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let scaled = (capacity as f64 * growth).ceil() as usize;
        capacity = scaled.max(capacity + 1);
    }
    capacity
}

impl<T> Storage<T> {
    pub(crate) fn new(growth: f64) -> Self {
        Self {
            items: Vec::new(),
            capacity: 0,
            min_alloc: 0,
            growth,
        }
    }

    /// Adopts `items` without copying; the capacity is the item count.
    pub(crate) fn from_vec(items: Vec<T>, growth: f64) -> Self {
        let capacity = items.len();
        Self {
            items,
            capacity,
            min_alloc: 0,
            growth,
        }
    }

    /// Adopts `items` with an explicit capacity and floor.
    pub(crate) fn with_layout(
        items: Vec<T>,
        capacity: usize,
        min_alloc: usize,
        growth: f64,
    ) -> Result<Self> {
        let mut storage = Self::from_vec(items, growth);
        let target = capacity.max(min_alloc).max(storage.items.len());
        storage.resize_buffer(target)?;
        storage.min_alloc = min_alloc;
        Ok(storage)
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn min_alloc(&self) -> usize {
        self.min_alloc
    }

    pub(crate) fn growth(&self) -> f64 {
        self.growth
    }

    pub(crate) fn items(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub(crate) fn into_items(self) -> Vec<T> {
        self.items
    }

    fn resize_buffer(&mut self, target: usize) -> Result<()> {
        debug_assert!(target >= self.items.len());
        if target == 0 {
            self.items = Vec::new();
        } else if target > self.items.capacity() {
            self.items
                .try_reserve_exact(target - self.items.len())
                .map_err(|_| HookVecError::AllocationFailure { requested: target })?;
        } else if target < self.capacity {
            self.items.shrink_to(target);
        }
        self.capacity = target;
        Ok(())
    }

    /// Sets the min-alloc floor, growing the buffer if it cannot hold `max(capacity, len)`.
    pub(crate) fn reserve(&mut self, capacity: usize) -> Result<()> {
        let target = capacity.max(self.items.len());
        if self.capacity < target {
            trace!("reserving {} slots (was {})", target, self.capacity);
            self.resize_buffer(target)?;
        }
        self.min_alloc = capacity;
        Ok(())
    }

    /// Makes room for `additional` more elements following the growth policy.
    pub(crate) fn grow_for(&mut self, additional: usize) -> Result<()> {
        let needed = self
            .items
            .len()
            .checked_add(additional)
            .ok_or(HookVecError::AllocationFailure {
                requested: usize::MAX,
            })?;
        if needed <= self.capacity {
            return Ok(());
        }
        let target = next_capacity(self.capacity, needed, self.growth);
        trace!("growing capacity {} -> {}", self.capacity, target);
        self.resize_buffer(target)
    }

    /// Applies the hysteresis shrink after a removal.
    pub(crate) fn shrink_after_remove(&mut self) {
        let len = self.items.len();
        if len == 0 {
            self.settle_empty();
            return;
        }
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let candidate = ((self.capacity as f64 / self.growth).floor() as usize).max(self.min_alloc);
        if candidate >= len && candidate < self.capacity && len * 2 < self.capacity {
            trace!("shrinking capacity {} -> {}", self.capacity, candidate);
            self.items.shrink_to(candidate);
            self.capacity = candidate;
        }
    }

    // capacity >= min_alloc always holds here, so this only ever shrinks
    fn settle_empty(&mut self) {
        if self.min_alloc == 0 {
            trace!("releasing buffer of {} slots", self.capacity);
            self.items = Vec::new();
            self.capacity = 0;
        } else if self.capacity > self.min_alloc {
            self.items.shrink_to(self.min_alloc);
            self.capacity = self.min_alloc;
        }
    }

    /// Drops every element; the capacity falls back to the floor.
    pub(crate) fn clear(&mut self) {
        self.items.clear();
        self.settle_empty();
    }

    /// Appends within the current capacity. Callers run `grow_for` first.
    pub(crate) fn push(&mut self, value: T) {
        debug_assert!(self.items.len() < self.capacity);
        self.items.push(value);
    }

    /// Inserts within the current capacity. Callers run `grow_for` first.
    pub(crate) fn insert(&mut self, index: usize, value: T) {
        debug_assert!(self.items.len() < self.capacity);
        self.items.insert(index, value);
    }

    /// Inserts a run of values at `index`. Callers run `grow_for` first.
    pub(crate) fn insert_all(&mut self, index: usize, values: Vec<T>) {
        debug_assert!(self.items.len() + values.len() <= self.capacity);
        self.items.splice(index..index, values);
    }

    /// Removes the element at `index` and applies the shrink policy.
    pub(crate) fn remove(&mut self, index: usize) -> T {
        let removed = self.items.remove(index);
        self.shrink_after_remove();
        removed
    }

    /// Swaps in a same-length element buffer, returning the previous one.
    /// `items` must already be allocated to at least `capacity` slots.
    pub(crate) fn replace_items(&mut self, items: Vec<T>) -> Vec<T> {
        debug_assert_eq!(items.len(), self.items.len());
        debug_assert!(items.capacity() >= self.capacity);
        core::mem::replace(&mut self.items, items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(count: usize) -> Storage<usize> {
        let mut storage = Storage::new(1.5);
        for i in 0..count {
            storage.grow_for(1).unwrap();
            storage.push(i);
        }
        storage
    }

    #[test]
    fn test_growth_sequence_from_empty() {
        let mut storage = Storage::new(1.5);
        let mut seen = Vec::new();
        for i in 0..41 {
            storage.grow_for(1).unwrap();
            storage.push(i);
            if seen.last() != Some(&storage.capacity()) {
                seen.push(storage.capacity());
            }
        }
        assert_eq!(seen, vec![1, 2, 3, 5, 8, 12, 18, 27, 41]);
    }

    #[test]
    fn test_next_capacity_minimum_increment() {
        // A multiplier barely above 1 still makes progress
        assert_eq!(next_capacity(0, 1, 1.0001), 1);
        assert_eq!(next_capacity(3, 5, 1.0001), 5);
        assert_eq!(next_capacity(10, 10, 2.0), 10);
        assert_eq!(next_capacity(10, 11, 2.0), 20);
    }

    #[test]
    fn test_batch_growth_jumps_past_needed() {
        let mut storage = filled(2);
        assert_eq!(storage.capacity(), 2);
        storage.grow_for(10).unwrap();
        // 2 -> 3 -> 5 -> 8 -> 12
        assert_eq!(storage.capacity(), 12);
        assert_eq!(storage.len(), 2);
    }

    #[test]
    fn test_shrink_hysteresis() {
        let mut storage = filled(5);
        assert_eq!(storage.capacity(), 5);

        let mut capacities = Vec::new();
        while storage.len() > 0 {
            let last = storage.len() - 1;
            storage.remove(last);
            capacities.push(storage.capacity());
        }
        assert_eq!(capacities, vec![5, 5, 3, 2, 0]);
        assert!(storage.items.capacity() == 0);
    }

    #[test]
    fn test_floor_survives_removals() {
        let mut storage = Storage::new(1.5);
        storage.reserve(10).unwrap();
        assert_eq!(storage.capacity(), 10);
        assert_eq!(storage.min_alloc(), 10);

        for i in 0..12 {
            storage.grow_for(1).unwrap();
            storage.push(i);
        }
        assert_eq!(storage.capacity(), 15);

        while storage.len() > 0 {
            storage.remove(0);
            assert!(storage.capacity() >= 10);
            assert!(storage.len() <= storage.capacity());
        }
        assert_eq!(storage.capacity(), 10);
    }

    #[test]
    fn test_reserve_never_shrinks() {
        let mut storage = filled(8);
        storage.reserve(2).unwrap();
        assert_eq!(storage.capacity(), 8);
        assert_eq!(storage.min_alloc(), 2);

        storage.reserve(20).unwrap();
        assert_eq!(storage.capacity(), 20);
        storage.reserve(0).unwrap();
        assert_eq!(storage.capacity(), 20);
        assert_eq!(storage.min_alloc(), 0);
    }

    #[test]
    fn test_clear_falls_back_to_floor() {
        let mut storage = filled(20);
        storage.clear();
        assert_eq!(storage.capacity(), 0);

        let mut storage = filled(20);
        storage.reserve(4).unwrap();
        storage.clear();
        assert_eq!(storage.len(), 0);
        assert_eq!(storage.capacity(), 4);
        assert!(storage.items.capacity() >= 4);
    }

    #[test]
    fn test_with_layout_keeps_headroom() {
        let storage = Storage::with_layout(vec![1, 2, 3], 9, 6, 2.0).unwrap();
        assert_eq!(storage.len(), 3);
        assert_eq!(storage.capacity(), 9);
        assert_eq!(storage.min_alloc(), 6);
        assert!(storage.items.capacity() >= 9);
    }

    #[test]
    fn test_grow_overflow_reports_allocation_failure() {
        let mut storage = filled(1);
        assert_eq!(
            storage.grow_for(usize::MAX).unwrap_err(),
            HookVecError::AllocationFailure {
                requested: usize::MAX
            }
        );
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.capacity(), 1);
    }
}
