//! Per-container registry of element callbacks.

use core::cmp::Ordering;
use core::fmt;
use core::panic::Location;
use std::io;
use std::rc::Rc;

use crate::core::HookVec;
use crate::error::{Hook, HookVecError, Result};

pub type PrintHook<T> = Rc<dyn Fn(&T, &mut dyn io::Write) -> io::Result<()>>;
pub type StringifyHook<T> = Rc<dyn Fn(&T) -> String>;
pub type CompareHook<T> = Rc<dyn Fn(&T, &T) -> Ordering>;
pub type EqualityHook<T> = Rc<dyn Fn(&T, &T) -> bool>;
pub type CopyHook<T> = Rc<dyn Fn(&T) -> T>;
pub type PrintArrayHook<T> = Rc<dyn Fn(&HookVec<T>, &mut dyn io::Write) -> io::Result<()>>;
pub type ReportHook = Rc<dyn Fn(&HookVecError, &'static Location<'static>)>;

/// Optional callbacks giving generic operations element-specific behavior.
///
/// Registries are reference counted: containers derived from another one
/// (`filter`, `subarray`, `try_clone`, `concat`) share its hooks.
pub struct Hooks<T> {
    print: Option<PrintHook<T>>,
    stringify: Option<StringifyHook<T>>,
    compare: Option<CompareHook<T>>,
    equality: Option<EqualityHook<T>>,
    copy: Option<CopyHook<T>>,
    print_array: Option<PrintArrayHook<T>>,
    report: Option<ReportHook>,
}

impl<T> Default for Hooks<T> {
    fn default() -> Self {
        Self {
            print: None,
            stringify: None,
            compare: None,
            equality: None,
            copy: None,
            print_array: None,
            report: None,
        }
    }
}

impl<T> Clone for Hooks<T> {
    fn clone(&self) -> Self {
        Self {
            print: self.print.clone(),
            stringify: self.stringify.clone(),
            compare: self.compare.clone(),
            equality: self.equality.clone(),
            copy: self.copy.clone(),
            print_array: self.print_array.clone(),
            report: self.report.clone(),
        }
    }
}

impl<T> fmt::Debug for Hooks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn slot<X: ?Sized>(hook: Option<&Rc<X>>) -> &'static str {
            if hook.is_some() {
                "<fn>"
            } else {
                "None"
            }
        }
        f.debug_struct("Hooks")
            .field("print", &slot(self.print.as_ref()))
            .field("stringify", &slot(self.stringify.as_ref()))
            .field("compare", &slot(self.compare.as_ref()))
            .field("equality", &slot(self.equality.as_ref()))
            .field("copy", &slot(self.copy.as_ref()))
            .field("print_array", &slot(self.print_array.as_ref()))
            .field("report", &slot(self.report.as_ref()))
            .finish()
    }
}

impl<T> Hooks<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the single-element printer used by `HookVec::print`.
    #[must_use]
    pub fn print<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, &mut dyn io::Write) -> io::Result<()> + 'static,
    {
        self.print = Some(Rc::new(f));
        self
    }

    /// Registers the single-element string conversion used by `HookVec::join`.
    #[must_use]
    pub fn stringify<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> String + 'static,
    {
        self.stringify = Some(Rc::new(f));
        self
    }

    /// Registers the total order used by `HookVec::sort`.
    #[must_use]
    pub fn compare<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        self.compare = Some(Rc::new(f));
        self
    }

    /// Registers element equality, used by `contains`, `indexes_of` and `remove_all`.
    #[must_use]
    pub fn equality<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        self.equality = Some(Rc::new(f));
        self
    }

    /// Registers the deep copy applied on every internal element copy.
    /// Mandatory for `ElementKind::Owned` containers.
    #[must_use]
    pub fn copy<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> T + 'static,
    {
        self.copy = Some(Rc::new(f));
        self
    }

    /// Replaces the whole default output of `HookVec::print`.
    #[must_use]
    pub fn print_array<F>(mut self, f: F) -> Self
    where
        F: Fn(&HookVec<T>, &mut dyn io::Write) -> io::Result<()> + 'static,
    {
        self.print_array = Some(Rc::new(f));
        self
    }

    /// Replaces the default output of `HookVec::report`.
    #[must_use]
    pub fn report<F>(mut self, f: F) -> Self
    where
        F: Fn(&HookVecError, &'static Location<'static>) + 'static,
    {
        self.report = Some(Rc::new(f));
        self
    }

    #[must_use]
    pub fn has_copy(&self) -> bool {
        self.copy.is_some()
    }

    pub(crate) fn print_hook(&self) -> Result<&PrintHook<T>> {
        self.print
            .as_ref()
            .ok_or(HookVecError::MissingCallback { hook: Hook::Print })
    }

    pub(crate) fn stringify_hook(&self) -> Result<&StringifyHook<T>> {
        self.stringify.as_ref().ok_or(HookVecError::MissingCallback {
            hook: Hook::Stringify,
        })
    }

    pub(crate) fn compare_hook(&self) -> Result<&CompareHook<T>> {
        self.compare.as_ref().ok_or(HookVecError::MissingCallback {
            hook: Hook::Compare,
        })
    }

    pub(crate) fn equality_hook(&self) -> Result<&EqualityHook<T>> {
        self.equality.as_ref().ok_or(HookVecError::MissingCallback {
            hook: Hook::Equality,
        })
    }

    pub(crate) fn print_array_hook(&self) -> Option<&PrintArrayHook<T>> {
        self.print_array.as_ref()
    }

    pub(crate) fn report_hook(&self) -> Option<&ReportHook> {
        self.report.as_ref()
    }
}

/// The copy path a container uses: the registered copy hook, or `Clone`
/// for element types that have it.
pub(crate) enum Copier<T> {
    Hook(CopyHook<T>),
    Clone(fn(&T) -> T),
}

impl<T> Clone for Copier<T> {
    fn clone(&self) -> Self {
        match self {
            Copier::Hook(hook) => Copier::Hook(Rc::clone(hook)),
            Copier::Clone(clone) => Copier::Clone(*clone),
        }
    }
}

impl<T> Copier<T> {
    /// The registry's copy hook, else `fallback`. `None` when neither exists.
    pub(crate) fn resolve(hooks: &Hooks<T>, fallback: Option<fn(&T) -> T>) -> Option<Self> {
        match (&hooks.copy, fallback) {
            (Some(hook), _) => Some(Copier::Hook(Rc::clone(hook))),
            (None, Some(clone)) => Some(Copier::Clone(clone)),
            (None, None) => None,
        }
    }

    pub(crate) fn copy(&self, elem: &T) -> T {
        match self {
            Copier::Hook(hook) => hook(elem),
            Copier::Clone(clone) => clone(elem),
        }
    }

    /// Copies a run of elements into a new exactly-sized buffer holding at least `capacity` slots.
    pub(crate) fn copy_all(&self, elems: &[T], capacity: usize) -> Result<Vec<T>> {
        let slots = capacity.max(elems.len());
        let mut out = Vec::new();
        out.try_reserve_exact(slots)
            .map_err(|_| HookVecError::AllocationFailure { requested: slots })?;
        out.extend(elems.iter().map(|elem| self.copy(elem)));
        Ok(out)
    }
}

impl<T: Clone> Copier<T> {
    /// The registry's copy hook, falling back to `Clone`.
    pub(crate) fn with_clone(hooks: &Hooks<T>) -> Self {
        match &hooks.copy {
            Some(hook) => Copier::Hook(Rc::clone(hook)),
            None => Copier::Clone(T::clone),
        }
    }
}
