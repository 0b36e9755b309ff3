//! Ready-made registries for common element types.
//!
//! Everything here goes through the public `Hooks` builder, so these double
//! as examples of registering hooks by hand.

use core::cmp::Ordering;
use core::fmt::Display;

use crate::config::ElementKind;
use crate::core::HookVec;
use crate::hooks::Hooks;

/// Print, stringify, compare and equality hooks for any displayable type.
///
/// Elements print as `"{x} "`. Incomparable pairs (such as NaN) compare as equal.
#[must_use]
pub fn display_hooks<T>() -> Hooks<T>
where
    T: Display + PartialOrd + Clone + 'static,
{
    Hooks::new()
        .print(|x: &T, out| write!(out, "{x} "))
        .stringify(|x: &T| x.to_string())
        .compare(|a: &T, b: &T| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .equality(|a: &T, b: &T| a == b)
}

/// Empty `i32` container.
#[must_use]
pub fn ints() -> HookVec<i32> {
    HookVec::new(display_hooks())
}

/// Empty `f32` container; elements print and stringify with two decimals.
///
/// Ordering is IEEE 754 total order, so NaN sorts after every number.
#[must_use]
pub fn floats() -> HookVec<f32> {
    let hooks = display_hooks()
        .print(|x: &f32, out| write!(out, "{x:.2} "))
        .stringify(|x: &f32| format!("{x:.2}"))
        .compare(|a: &f32, b: &f32| a.total_cmp(b));
    HookVec::new(hooks)
}

#[must_use]
pub fn chars() -> HookVec<char> {
    HookVec::new(display_hooks())
}

/// Empty container of owned strings, deep-copied on every internal copy.
#[must_use]
pub fn strings() -> HookVec<String> {
    HookVec::with_kind(ElementKind::Owned, display_hooks().copy(String::clone))
}
