use crate::core::HookVec;
use crate::error::{HookVecError, Result};
use crate::storage::Storage;

impl<T> HookVec<T> {
    /// Reverses the element order in place.
    pub fn reverse(&mut self) {
        self.as_mut_slice().reverse();
    }

    /// Removes and returns the first element, shifting the rest left.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::EmptyVector` if the container is empty.
    pub fn shift(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(HookVecError::EmptyVector);
        }
        self.remove_at(0)
    }

    /// Deep copy of the elements, owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::AllocationFailure` if the copy cannot be allocated.
    pub fn to_vec(&self) -> Result<Vec<T>> {
        self.copier().copy_all(self.as_slice(), 0)
    }

    /// Copies the inclusive range `low..=high` into a new container.
    /// `high` is clamped to the last element.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::IndexOutOfBounds` if `low >= len`, or
    /// `HookVecError::InvalidRange` if `low > high`.
    pub fn subarray(&self, low: usize, high: usize) -> Result<HookVec<T>> {
        if low > high {
            return Err(HookVecError::InvalidRange {
                start: low,
                end: high,
            });
        }
        if low >= self.len() {
            return Err(HookVecError::IndexOutOfBounds {
                index: low,
                length: self.len(),
            });
        }
        let high = high.min(self.len() - 1);
        let items = self.copier().copy_all(&self.as_slice()[low..=high], 0)?;
        Ok(self.derive(Storage::from_vec(items, self.growth_multiplier())))
    }

    /// Deep copy of the whole container, including capacity and `min_alloc`.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::AllocationFailure` if the copy cannot be allocated.
    pub fn try_clone(&self) -> Result<HookVec<T>> {
        let items = self.copier().copy_all(self.as_slice(), self.capacity())?;
        let storage = Storage::with_layout(
            items,
            self.capacity(),
            self.min_alloc(),
            self.growth_multiplier(),
        )?;
        Ok(self.derive(storage))
    }

    /// New container holding this container's elements followed by `other`'s.
    ///
    /// Each side is copied with its own copy hook; the result takes this
    /// container's kind, hooks and growth multiplier.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::AllocationFailure` if the new buffer cannot be allocated.
    pub fn concat(&self, other: &HookVec<T>) -> Result<HookVec<T>> {
        let total = self
            .len()
            .checked_add(other.len())
            .ok_or(HookVecError::AllocationFailure {
                requested: usize::MAX,
            })?;
        let mut items = self.copier().copy_all(self.as_slice(), total)?;
        items.extend(other.as_slice().iter().map(|elem| other.copy_elem(elem)));
        Ok(self.derive(Storage::from_vec(items, self.growth_multiplier())))
    }

    /// Appends copies of a contiguous batch of elements.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::InvalidArgument` if `data` is empty, or
    /// `HookVecError::AllocationFailure` if the buffer cannot be grown.
    pub fn add_all(&mut self, data: &[T]) -> Result<()> {
        if data.is_empty() {
            return Err(HookVecError::InvalidArgument {
                reason: "no elements to add",
            });
        }
        self.storage.grow_for(data.len())?;
        for elem in data {
            let value = self.copy_elem(elem);
            self.storage.push(value);
        }
        Ok(())
    }

    /// Appends copies of each listed element in order.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::AllocationFailure` if the buffer cannot be grown;
    /// elements appended before the failure stay in place.
    pub fn add_many<'a, I>(&mut self, elems: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        for elem in elems {
            self.add(elem)?;
        }
        Ok(())
    }

    /// Inserts a copy of `elem` at the front, shifting everything right.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::AllocationFailure` if the buffer cannot be grown.
    pub fn shift_right(&mut self, elem: &T) -> Result<()> {
        self.add_at(0, elem)
    }

    /// Removes up to `remove_count` elements starting at `index`, then
    /// inserts copies of `insertions` at `index` in order. Returns the
    /// removed elements.
    ///
    /// A failure while inserting leaves the removals in place.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::IndexOutOfBounds` if `index > len`, or
    /// `HookVecError::AllocationFailure` if the buffer cannot be grown.
    pub fn splice(&mut self, index: usize, remove_count: usize, insertions: &[T]) -> Result<Vec<T>> {
        if index > self.len() {
            return Err(HookVecError::IndexOutOfBounds {
                index,
                length: self.len(),
            });
        }
        let removing = remove_count.min(self.len() - index);
        let mut removed = Vec::with_capacity(removing);
        for _ in 0..removing {
            removed.push(self.storage.remove(index));
        }

        if !insertions.is_empty() {
            self.storage.grow_for(insertions.len())?;
            let values: Vec<T> = insertions.iter().map(|elem| self.copy_elem(elem)).collect();
            self.storage.insert_all(index, values);
        }
        Ok(removed)
    }

    /// Overwrites the inclusive range `start..=end` with copies of `elem`,
    /// appending when `end` reaches past the last element.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::InvalidRange` if `start > end`,
    /// `HookVecError::IndexOutOfBounds` if `start > len`, or
    /// `HookVecError::AllocationFailure` if the buffer cannot be grown.
    pub fn fill(&mut self, elem: &T, start: usize, end: usize) -> Result<()> {
        if start > end {
            return Err(HookVecError::InvalidRange { start, end });
        }
        let len = self.len();
        if start > len {
            return Err(HookVecError::IndexOutOfBounds { index: start, length: len });
        }
        let new_len = end.checked_add(1).ok_or(HookVecError::AllocationFailure {
            requested: usize::MAX,
        })?;
        if new_len > len {
            self.storage.grow_for(new_len - len)?;
        }

        let overwrite_end = end.min(len.saturating_sub(1));
        if start < len {
            for index in start..=overwrite_end {
                let value = self.copy_elem(elem);
                self.storage.items_mut()[index] = value;
            }
        }
        for _ in len..=end {
            let value = self.copy_elem(elem);
            self.storage.push(value);
        }
        Ok(())
    }

    /// Removes every element equal to any of `targets`, by the equality hook.
    /// Returns the number of elements removed.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::InvalidArgument` if `targets` is empty, or
    /// `HookVecError::MissingCallback` if no equality hook is registered.
    pub fn remove_all(&mut self, targets: &[T]) -> Result<usize> {
        if targets.is_empty() {
            return Err(HookVecError::InvalidArgument {
                reason: "no elements to remove",
            });
        }
        self.hooks.equality_hook()?;

        let mut removed = 0;
        for target in targets {
            let indexes = match self.indexes_of(target) {
                Ok(indexes) => indexes,
                Err(HookVecError::ElementNotFound) => continue,
                Err(other) => return Err(other),
            };
            for &index in indexes.iter().rev() {
                self.storage.remove(index);
                removed += 1;
            }
        }
        Ok(removed)
    }
}
