use core::fmt;

use crate::builder::HookVecBuilder;
use crate::config::{Config, ElementKind};
use crate::error::{Hook, HookVecError, Result};
use crate::hooks::{Copier, Hooks};
use crate::storage::Storage;

/// A growable array whose element semantics come from a registry of hooks.
pub struct HookVec<T> {
    pub(crate) storage: Storage<T>,
    kind: ElementKind,
    pub(crate) hooks: Hooks<T>,
    copier: Copier<T>,
    clone_fallback: Option<fn(&T) -> T>,
}

impl<T: fmt::Debug> fmt::Debug for HookVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookVec")
            .field("items", &self.storage.items())
            .field("capacity", &self.storage.capacity())
            .field("min_alloc", &self.storage.min_alloc())
            .field("kind", &self.kind)
            .field("hooks", &self.hooks)
            .finish()
    }
}

pub(crate) fn check_kind<T>(kind: ElementKind, hooks: &Hooks<T>) -> Result<()> {
    if kind == ElementKind::Owned && !hooks.has_copy() {
        return Err(HookVecError::UnsupportedMethod {
            reason: "owned elements require a copy hook",
        });
    }
    Ok(())
}

impl<T: Clone> HookVec<T> {
    /// Creates an empty container of inline elements with the default configuration.
    /// Elements are copied by the copy hook when registered, by `Clone` otherwise.
    #[must_use]
    pub fn new(hooks: Hooks<T>) -> Self {
        Self::with_kind(ElementKind::Inline, hooks)
    }

    /// Empty container of the given kind. Callers guarantee `check_kind` holds.
    pub(crate) fn with_kind(kind: ElementKind, hooks: Hooks<T>) -> Self {
        debug_assert!(check_kind(kind, &hooks).is_ok());
        Self {
            storage: Storage::new(Config::default().growth_multiplier),
            kind,
            copier: Copier::with_clone(&hooks),
            clone_fallback: Some(T::clone as fn(&T) -> T),
            hooks,
        }
    }

    /// Creates an empty container of inline elements with `capacity` reserved.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::AllocationFailure` if the reservation cannot be allocated.
    pub fn with_reserve(hooks: Hooks<T>, capacity: usize) -> Result<Self> {
        let mut vec = Self::new(hooks);
        vec.reserve(capacity)?;
        Ok(vec)
    }
}

impl<T> HookVec<T> {
    /// Starts a `HookVecBuilder` for owned elements or a custom growth policy.
    #[must_use]
    pub fn builder() -> HookVecBuilder<T> {
        HookVecBuilder::new()
    }

    /// Assembles a container from a validated configuration and seed elements.
    /// `clone_fallback` copies elements when no copy hook is registered.
    pub(crate) fn from_config(
        config: Config,
        hooks: Hooks<T>,
        items: Vec<T>,
        clone_fallback: Option<fn(&T) -> T>,
    ) -> Result<Self> {
        config.validate()?;
        check_kind(config.kind, &hooks)?;
        let copier = Copier::resolve(&hooks, clone_fallback)
            .ok_or(HookVecError::MissingCallback { hook: Hook::Copy })?;
        let mut storage = Storage::from_vec(items, config.growth_multiplier);
        if config.reserve > 0 {
            storage.reserve(config.reserve)?;
        }
        debug!(
            "new {:?} container: {} elements, capacity {}",
            config.kind,
            storage.len(),
            storage.capacity()
        );
        Ok(Self {
            storage,
            kind: config.kind,
            hooks,
            copier,
            clone_fallback,
        })
    }

    /// A container sharing this one's kind, hooks and growth multiplier.
    pub(crate) fn derive(&self, storage: Storage<T>) -> Self {
        Self {
            storage,
            kind: self.kind,
            hooks: self.hooks.clone(),
            copier: self.copier.clone(),
            clone_fallback: self.clone_fallback,
        }
    }

    /// Number of stored elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the container holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    /// Number of elements the container can hold before growing.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// The reserved floor below which the capacity never shrinks.
    #[must_use]
    pub fn min_alloc(&self) -> usize {
        self.storage.min_alloc()
    }

    /// Factor applied to the capacity each time the container grows.
    #[must_use]
    pub fn growth_multiplier(&self) -> f64 {
        self.storage.growth()
    }

    /// How the elements are owned and copied.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The registered hooks.
    #[must_use]
    pub fn hooks(&self) -> &Hooks<T> {
        &self.hooks
    }

    /// Replaces the hook registry.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::MissingCallback` if `hooks` has no copy hook and
    /// the container either holds owned elements or was built without a
    /// `Clone` fallback. The registry is left unchanged.
    pub fn set_hooks(&mut self, hooks: Hooks<T>) -> Result<()> {
        let missing_copy = HookVecError::MissingCallback { hook: Hook::Copy };
        if self.kind == ElementKind::Owned && !hooks.has_copy() {
            return Err(missing_copy);
        }
        let copier = Copier::resolve(&hooks, self.clone_fallback).ok_or(missing_copy)?;
        self.hooks = hooks;
        self.copier = copier;
        Ok(())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.storage.items()
    }

    /// Mutable view of the elements. The length cannot change through it.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.items_mut()
    }

    fn check_bounds(&self, index: usize) -> Result<()> {
        if index >= self.len() {
            Err(HookVecError::IndexOutOfBounds {
                index,
                length: self.len(),
            })
        } else {
            Ok(())
        }
    }

    /// Gets the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::IndexOutOfBounds` if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.check_bounds(index)?;
        Ok(&self.storage.items()[index])
    }

    /// Gets the element at `index` for in-place mutation.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::IndexOutOfBounds` if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_bounds(index)?;
        Ok(&mut self.storage.items_mut()[index])
    }

    /// Removes the element at `index`, shifting the tail left.
    ///
    /// The removed element is handed to the caller.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::IndexOutOfBounds` if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_bounds(index)?;
        Ok(self.storage.remove(index))
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::EmptyVector` if the container is empty.
    pub fn remove(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(HookVecError::EmptyVector);
        }
        self.remove_at(self.len() - 1)
    }

    /// Sets the min-alloc floor to `capacity`, allocating if the buffer is smaller.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::AllocationFailure` if the buffer cannot be grown.
    pub fn reserve(&mut self, capacity: usize) -> Result<()> {
        self.storage.reserve(capacity)
    }

    /// Drops every element. The capacity becomes exactly `min_alloc()`,
    /// which releases the buffer when nothing was reserved.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Drops every element and the buffer.
    pub fn release(self) {
        trace!("releasing container of {} elements", self.len());
        drop(self);
    }

    /// Consumes the container, returning its elements.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.storage.into_items()
    }

    /// Copies `elem` the way this container copies every element.
    pub(crate) fn copy_elem(&self, elem: &T) -> T {
        self.copier.copy(elem)
    }

    pub(crate) fn copier(&self) -> &Copier<T> {
        &self.copier
    }

    /// Appends a copy of `elem`.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::AllocationFailure` if the buffer cannot be grown.
    pub fn add(&mut self, elem: &T) -> Result<()> {
        self.storage.grow_for(1)?;
        let value = self.copy_elem(elem);
        self.storage.push(value);
        Ok(())
    }

    /// Inserts a copy of `elem` at `index`, shifting the tail right.
    /// `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::IndexOutOfBounds` if `index > len`, or
    /// `HookVecError::AllocationFailure` if the buffer cannot be grown.
    pub fn add_at(&mut self, index: usize, elem: &T) -> Result<()> {
        if index > self.len() {
            return Err(HookVecError::IndexOutOfBounds {
                index,
                length: self.len(),
            });
        }
        self.storage.grow_for(1)?;
        let value = self.copy_elem(elem);
        self.storage.insert(index, value);
        Ok(())
    }

    /// Overwrites the element at `index` with a copy of `elem`.
    ///
    /// The previous element is returned; the caller owns it.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::IndexOutOfBounds` if `index >= len`.
    pub fn set(&mut self, index: usize, elem: &T) -> Result<T> {
        self.check_bounds(index)?;
        let value = self.copy_elem(elem);
        Ok(core::mem::replace(&mut self.storage.items_mut()[index], value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints() -> HookVec<i32> {
        HookVec::new(Hooks::new().equality(|a: &i32, b: &i32| a == b))
    }

    #[test]
    fn test_new_is_empty() {
        let vec = ints();
        assert!(vec.is_empty());
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 0);
        assert_eq!(vec.min_alloc(), 0);
        assert_eq!(vec.kind(), ElementKind::Inline);
        assert_eq!(vec.growth_multiplier(), 1.5);
    }

    #[test]
    fn test_owned_without_copy_is_rejected() {
        let config = Config {
            kind: ElementKind::Owned,
            ..Config::default()
        };
        let result = HookVec::<String>::from_config(config, Hooks::new(), Vec::new(), None);
        assert_eq!(
            result.unwrap_err(),
            HookVecError::UnsupportedMethod {
                reason: "owned elements require a copy hook"
            }
        );
    }

    #[test]
    fn test_set_hooks_keeps_copy_for_owned() {
        let config = Config {
            kind: ElementKind::Owned,
            ..Config::default()
        };
        let mut vec =
            HookVec::from_config(config, Hooks::new().copy(String::clone), Vec::new(), None)
                .unwrap();
        assert_eq!(
            vec.set_hooks(Hooks::new()).unwrap_err(),
            HookVecError::MissingCallback { hook: Hook::Copy }
        );
        assert!(vec.hooks().has_copy());
        assert!(vec
            .set_hooks(Hooks::new().copy(|s: &String| s.to_uppercase()))
            .is_ok());
        vec.add(&"shout".to_string()).unwrap();
        assert_eq!(vec.as_slice(), &["SHOUT".to_string()]);
    }

    #[test]
    fn test_set_hooks_falls_back_to_clone() {
        let mut vec = HookVec::new(Hooks::new().copy(|x: &i32| x * 2));
        vec.add(&1).unwrap();
        vec.set_hooks(Hooks::new()).unwrap();
        vec.add(&1).unwrap();
        assert_eq!(vec.as_slice(), &[2, 1]);
    }

    #[test]
    fn test_no_copy_path_is_rejected() {
        struct Handle;

        let result = HookVec::<Handle>::from_config(Config::default(), Hooks::new(), Vec::new(), None);
        assert!(matches!(
            result,
            Err(HookVecError::MissingCallback { hook: Hook::Copy })
        ));
    }

    #[test]
    fn test_remove_last() {
        let mut vec = ints();
        vec.add(&1).unwrap();
        vec.add(&2).unwrap();
        assert_eq!(vec.remove().unwrap(), 2);
        assert_eq!(vec.remove().unwrap(), 1);
        assert_eq!(vec.remove().unwrap_err(), HookVecError::EmptyVector);
    }

    #[test]
    fn test_debug_output() {
        let mut vec = ints();
        vec.add(&4).unwrap();
        let debug = format!("{vec:?}");
        assert!(debug.contains("items: [4]"));
        assert!(debug.contains("capacity: 1"));
    }
}
