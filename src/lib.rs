//! `HookVec`: a growable array whose element semantics come from user hooks.
//!
//! `HookVec<T>` stores elements contiguously and grows by a configurable
//! multiplier. What it means to print, stringify, order, compare or deep-copy
//! an element is not fixed by the container: it is supplied through a
//! [`Hooks`] registry. A library of structural and functional algorithms
//! (splice, fill, sort, search, filter, reduce) runs on top of that registry.
//!
//! Every fallible operation returns [`Result`], carrying a [`HookVecError`]
//! with the offending indices or the missing hook.
//!
//! ```
//! # use hookvec::{HookVec, Hooks, SortMethod};
//! let hooks = Hooks::new()
//!     .compare(|a: &i32, b: &i32| a.cmp(b))
//!     .stringify(|x: &i32| x.to_string());
//! let mut vec = HookVec::new(hooks);
//!
//! vec.add_all(&[5, 3, 1, 4, 2]).unwrap();
//! vec.sort(SortMethod::Insertion).unwrap();
//!
//! assert_eq!(vec.join(", ").unwrap(), "1, 2, 3, 4, 5");
//! ```
//!
//! # Capacity Policy
//!
//! The container tracks its own capacity instead of deferring to `Vec`:
//!
//! - Growth: when an insertion needs more room, the capacity is multiplied
//!   by the growth multiplier (default 1.5, rounded up, at least +1) until
//!   the elements fit. From empty the sequence is 1, 2, 3, 5, 8, 12, ...
//! - Shrink: after a removal, the capacity drops to `capacity / multiplier`
//!   only when the container is less than half full and the result still
//!   holds every element. This keeps alternating add/remove cheap.
//! - Floor: [`HookVec::reserve`] sets a min-alloc floor that shrinking never
//!   goes below. Emptying a container with no floor releases its buffer.
//!
//! ```
//! # use hookvec::{HookVec, Hooks};
//! let mut vec = HookVec::new(Hooks::<u32>::new());
//! for i in 0..5 {
//!     vec.add(&i).unwrap();
//! }
//! assert_eq!(vec.capacity(), 5);
//!
//! vec.reserve(16).unwrap();
//! vec.clear();
//! assert_eq!(vec.capacity(), 16);
//! ```
//!
//! # Hooks
//!
//! Operations check for the hook they need and fail with
//! [`HookVecError::MissingCallback`] when it is absent:
//!
//! - `print` needs the print hook unless a whole-array print hook replaces it
//! - `sort` needs compare (`sort_by` takes an explicit comparator instead)
//! - `contains`, `indexes_of`, `remove_all` and `elementwise_eq` need equality
//! - `join` needs stringify
//!
//! ```
//! # use hookvec::{Hook, HookVec, HookVecError, Hooks};
//! let vec = HookVec::new(Hooks::<i32>::new());
//! assert_eq!(
//!     vec.contains(&1).unwrap_err(),
//!     HookVecError::MissingCallback { hook: Hook::Equality }
//! );
//! ```
//!
//! # Owned Elements
//!
//! Containers built with [`ElementKind::Owned`] must register a copy hook:
//! every internal copy (add, set, splice, subarray, sort scratch and so on)
//! goes through it. Inline containers fall back to `Clone`. Element types
//! without `Clone`, such as boxed trait objects, are built with
//! [`HookVecBuilder::build_owned`] and rely on the copy hook alone.
//!
//! ```
//! # use hookvec::{HookVec, HookVecError, Hooks};
//! let missing = HookVec::<String>::builder().owned().build();
//! assert!(matches!(missing, Err(HookVecError::UnsupportedMethod { .. })));
//!
//! let mut names = HookVec::builder()
//!     .owned()
//!     .hooks(Hooks::new().copy(|s: &String| s.to_uppercase()))
//!     .build()
//!     .unwrap();
//! names.add(&"ada".to_string()).unwrap();
//! assert_eq!(names.at(0).unwrap(), "ADA");
//! ```
//!
//! # Presets
//!
//! The [`presets`] module has ready-made containers for `i32`, `f32`,
//! `char` and `String`:
//!
//! ```
//! # use hookvec::presets;
//! let mut vec = presets::ints();
//! vec.add_many([1, 2, 1, 3, 1].iter()).unwrap();
//! assert_eq!(vec.indexes_of(&1).unwrap(), vec![0, 2, 4]);
//!
//! let mut out = Vec::new();
//! vec.print_to(&mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "HookVec [size: 5, min_alloc: 0] =>\n1 2 1 3 1 \n"
//! );
//! ```
//!
//! # Logging
//!
//! With the `logging` feature, growth, shrink and sort decisions are emitted
//! through the `log` facade. No logger is installed by the crate.

#[macro_use]
mod logging;

mod builder;
mod config;
mod core;
mod error;
mod hooks;
mod iter;
pub mod presets;
mod report;
mod search;
mod sort;
mod storage;
mod structural;
mod transform;

// Re-export public types
pub use crate::core::HookVec;
pub use builder::HookVecBuilder;
pub use config::{Config, ElementKind, DEFAULT_GROWTH_MULTIPLIER};
pub use error::{Hook, HookVecError, Result};
pub use hooks::{
    CompareHook, CopyHook, EqualityHook, Hooks, PrintArrayHook, PrintHook, ReportHook,
    StringifyHook,
};
pub use report::write_report;
pub use sort::SortMethod;
