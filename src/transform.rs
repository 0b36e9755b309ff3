use crate::core::HookVec;
use crate::error::{HookVecError, Result};
use crate::storage::Storage;

impl<T> HookVec<T> {
    /// Calls `callback` on every element in order; elements may be mutated in place.
    pub fn for_each<F>(&mut self, callback: F)
    where
        F: FnMut(&mut T),
    {
        self.as_mut_slice().iter_mut().for_each(callback);
    }

    /// Concatenates the stringify hook's output for every element, separated by `separator`.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::MissingCallback` if no stringify hook is registered.
    pub fn join(&self, separator: &str) -> Result<String> {
        let stringify = self.hooks.stringify_hook()?;
        let parts: Vec<String> = self.as_slice().iter().map(|elem| stringify(elem)).collect();
        Ok(parts.join(separator))
    }

    /// Copies the elements matching `predicate` into a new container that
    /// shares this one's kind, hooks and growth multiplier.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::AllocationFailure` if the new buffer cannot be allocated.
    pub fn filter<P>(&self, mut predicate: P) -> Result<HookVec<T>>
    where
        P: FnMut(&T) -> bool,
    {
        let count = self.as_slice().iter().filter(|elem| predicate(elem)).count();
        let mut kept = Vec::new();
        kept.try_reserve_exact(count)
            .map_err(|_| HookVecError::AllocationFailure { requested: count })?;
        for elem in self.as_slice() {
            if predicate(elem) {
                kept.push(self.copy_elem(elem));
            }
        }
        Ok(self.derive(Storage::from_vec(kept, self.growth_multiplier())))
    }

    /// Folds from left to right.
    ///
    /// Without `initial`, the first element seeds the accumulator and folding
    /// starts from the second. The reducer returns the next accumulator;
    /// returning `None` aborts the fold.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::EmptyVector` if the container is empty and no
    /// initial value is given, or `HookVecError::InvalidArgument` if the
    /// reducer yields no value.
    pub fn reduce<F>(&self, reducer: F, initial: Option<&T>) -> Result<T>
    where
        F: FnMut(&T, &T) -> Option<T>,
    {
        self.fold_over(self.as_slice().iter(), reducer, initial)
    }

    /// Folds from right to left; otherwise identical to [`HookVec::reduce`].
    ///
    /// # Errors
    ///
    /// Same as [`HookVec::reduce`].
    pub fn reduce_right<F>(&self, reducer: F, initial: Option<&T>) -> Result<T>
    where
        F: FnMut(&T, &T) -> Option<T>,
    {
        self.fold_over(self.as_slice().iter().rev(), reducer, initial)
    }

    fn fold_over<'a, I, F>(&'a self, mut elems: I, mut reducer: F, initial: Option<&T>) -> Result<T>
    where
        I: Iterator<Item = &'a T>,
        F: FnMut(&T, &T) -> Option<T>,
    {
        let seed = match initial {
            Some(value) => value,
            None => elems.next().ok_or(HookVecError::EmptyVector)?,
        };
        let mut accumulator = self.copy_elem(seed);
        for elem in elems {
            accumulator = reducer(&accumulator, elem).ok_or(HookVecError::InvalidArgument {
                reason: "reducer returned no value",
            })?;
        }
        Ok(accumulator)
    }
}

#[cfg(test)]
mod tests {
    use crate::{HookVec, HookVecError, Hooks};

    #[test]
    fn test_reduce_stops_at_first_missing_step() {
        let vec = HookVec::builder()
            .build_from_vec(vec![1, 2, 3, 4])
            .unwrap();
        let mut steps = 0;
        let result = vec.reduce(
            |acc, x| {
                steps += 1;
                (*x < 3).then(|| acc + x)
            },
            None,
        );
        assert_eq!(
            result.unwrap_err(),
            HookVecError::InvalidArgument {
                reason: "reducer returned no value"
            }
        );
        assert_eq!(steps, 2);
    }

    #[test]
    fn test_filter_capacity_matches_count() {
        let vec = HookVec::builder()
            .hooks(Hooks::new())
            .reserve(32)
            .build_from_vec(vec![1, 2, 3, 4, 5, 6])
            .unwrap();
        let even = vec.filter(|x| x % 2 == 0).unwrap();
        assert_eq!(even.as_slice(), &[2, 4, 6]);
        assert_eq!(even.capacity(), 3);
        assert_eq!(even.min_alloc(), 0);
    }
}
