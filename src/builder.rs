use crate::config::{Config, ElementKind};
use crate::core::{check_kind, HookVec};
use crate::error::Result;
use crate::hooks::{Copier, Hooks};

/// Fluent construction of a `HookVec`.
///
/// ```
/// # use hookvec::{HookVec, Hooks};
/// let names: HookVec<String> = HookVec::builder()
///     .owned()
///     .growth_multiplier(2.0)
///     .reserve(4)
///     .hooks(Hooks::new().copy(String::clone))
///     .build_from_slice(&["ada".to_string(), "grace".to_string()])
///     .unwrap();
///
/// assert_eq!(names.len(), 2);
/// assert_eq!(names.capacity(), 4);
/// ```
#[derive(Debug)]
pub struct HookVecBuilder<T> {
    config: Config,
    hooks: Hooks<T>,
}

impl<T> Default for HookVecBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HookVecBuilder<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            hooks: Hooks::new(),
        }
    }

    /// Replaces the whole configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: ElementKind) -> Self {
        self.config.kind = kind;
        self
    }

    /// Shorthand for `kind(ElementKind::Owned)`.
    #[must_use]
    pub fn owned(self) -> Self {
        self.kind(ElementKind::Owned)
    }

    #[must_use]
    pub fn growth_multiplier(mut self, multiplier: f64) -> Self {
        self.config.growth_multiplier = multiplier;
        self
    }

    /// Capacity reserved at construction; it becomes the min-alloc floor.
    #[must_use]
    pub fn reserve(mut self, capacity: usize) -> Self {
        self.config.reserve = capacity;
        self
    }

    #[must_use]
    pub fn hooks(mut self, hooks: Hooks<T>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Builds an empty owned container for any element type, copied only
    /// through the registered copy hook.
    ///
    /// ```
    /// # use hookvec::{HookVec, Hooks};
    /// trait Shape {
    ///     fn area(&self) -> f64;
    ///     fn boxed(&self) -> Box<dyn Shape>;
    /// }
    ///
    /// struct Square(f64);
    ///
    /// impl Shape for Square {
    ///     fn area(&self) -> f64 {
    ///         self.0 * self.0
    ///     }
    ///     fn boxed(&self) -> Box<dyn Shape> {
    ///         Box::new(Square(self.0))
    ///     }
    /// }
    ///
    /// let mut shapes: HookVec<Box<dyn Shape>> = HookVec::builder()
    ///     .hooks(Hooks::new().copy(|s: &Box<dyn Shape>| s.boxed()))
    ///     .build_owned()
    ///     .unwrap();
    /// shapes.add(&Square(3.0).boxed()).unwrap();
    /// assert_eq!(shapes.at(0).unwrap().area(), 9.0);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::UnsupportedMethod` if no copy hook is registered,
    /// `HookVecError::InvalidConfiguration` for a bad growth multiplier, or
    /// `HookVecError::AllocationFailure` if the reservation fails.
    pub fn build_owned(self) -> Result<HookVec<T>> {
        self.build_owned_from_vec(Vec::new())
    }

    /// Builds an owned container that takes ownership of `items` without copying them.
    ///
    /// # Errors
    ///
    /// Same as [`HookVecBuilder::build_owned`].
    pub fn build_owned_from_vec(self, items: Vec<T>) -> Result<HookVec<T>> {
        let config = Config {
            kind: ElementKind::Owned,
            ..self.config
        };
        HookVec::from_config(config, self.hooks, items, None)
    }
}

impl<T: Clone> HookVecBuilder<T> {
    /// Builds an empty container. Without a copy hook, elements are copied with `Clone`.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::InvalidConfiguration` for a bad growth multiplier,
    /// `HookVecError::UnsupportedMethod` for owned elements without a copy hook,
    /// or `HookVecError::AllocationFailure` if the reservation fails.
    pub fn build(self) -> Result<HookVec<T>> {
        self.build_from_vec(Vec::new())
    }

    /// Builds a container that takes ownership of `items` without copying them.
    ///
    /// # Errors
    ///
    /// Same as [`HookVecBuilder::build`].
    pub fn build_from_vec(self, items: Vec<T>) -> Result<HookVec<T>> {
        HookVec::from_config(self.config, self.hooks, items, Some(T::clone as fn(&T) -> T))
    }

    /// Builds a container seeded with copies of `data`, made by the copy hook when set.
    ///
    /// # Errors
    ///
    /// Same as [`HookVecBuilder::build`].
    pub fn build_from_slice(self, data: &[T]) -> Result<HookVec<T>> {
        self.config.validate()?;
        check_kind(self.config.kind, &self.hooks)?;
        let items = Copier::with_clone(&self.hooks).copy_all(data, 0)?;
        self.build_from_vec(items)
    }
}
