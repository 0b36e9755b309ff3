use crate::core::HookVec;
use crate::error::{HookVecError, Result};

impl<T> HookVec<T> {
    /// First element matching `predicate`, scanning forward.
    pub fn find_first<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.as_slice().iter().find(|elem| predicate(elem))
    }

    /// Last element matching `predicate`, scanning backward.
    pub fn find_last<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.as_slice().iter().rev().find(|elem| predicate(elem))
    }

    /// Position of the first element matching `predicate`.
    pub fn find_first_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.as_slice().iter().position(predicate)
    }

    /// Position of the last element matching `predicate`.
    pub fn find_last_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.as_slice().iter().rposition(predicate)
    }

    /// Whether any element matches `predicate`. Stops at the first match.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.as_slice().iter().any(predicate)
    }

    /// Whether an element equal to `target` is present, by the equality hook.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::MissingCallback` if no equality hook is registered.
    pub fn contains(&self, target: &T) -> Result<bool> {
        let equals = self.hooks.equality_hook()?;
        Ok(self.as_slice().iter().any(|elem| equals(elem, target)))
    }

    /// Ascending positions of every element equal to `target`, by the equality hook.
    /// The match count is the length of the returned list.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::MissingCallback` if no equality hook is registered,
    /// or `HookVecError::ElementNotFound` if nothing matches.
    pub fn indexes_of(&self, target: &T) -> Result<Vec<usize>> {
        let equals = self.hooks.equality_hook()?;
        let indexes: Vec<usize> = self
            .as_slice()
            .iter()
            .enumerate()
            .filter(|(_, elem)| equals(elem, target))
            .map(|(index, _)| index)
            .collect();
        if indexes.is_empty() {
            return Err(HookVecError::ElementNotFound);
        }
        Ok(indexes)
    }

    /// Whether both containers hold the same elements in the same order,
    /// compared with this container's equality hook.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::MissingCallback` if no equality hook is registered.
    pub fn elementwise_eq(&self, other: &HookVec<T>) -> Result<bool> {
        let equals = self.hooks.equality_hook()?;
        Ok(self.len() == other.len()
            && self
                .as_slice()
                .iter()
                .zip(other.as_slice())
                .all(|(a, b)| equals(a, b)))
    }
}
