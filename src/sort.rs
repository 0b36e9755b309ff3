use core::cmp::Ordering;

use crate::core::HookVec;
use crate::error::Result;

/// Algorithm used by `HookVec::sort`. None of them is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMethod {
    /// The standard library's unstable O(n log n) sort.
    #[default]
    Library,
    Bubble,
    Insertion,
    Selection,
}

fn bubble_sort<T, F>(items: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = items.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if compare(&items[j], &items[j + 1]) == Ordering::Greater {
                items.swap(j, j + 1);
            }
        }
    }
}

fn insertion_sort<T, F>(items: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn selection_sort<T, F>(items: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = items.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if compare(&items[j], &items[min]) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            items.swap(i, min);
        }
    }
}

pub(crate) fn sort_slice<T, F>(items: &mut [T], method: SortMethod, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    match method {
        SortMethod::Library => items.sort_unstable_by(|a, b| compare(a, b)),
        SortMethod::Bubble => bubble_sort(items, &mut compare),
        SortMethod::Insertion => insertion_sort(items, &mut compare),
        SortMethod::Selection => selection_sort(items, &mut compare),
    }
}

impl<T> HookVec<T> {
    /// Sorts with the registered compare hook.
    ///
    /// The elements are copied into scratch storage through the copy hook,
    /// sorted there, and the scratch buffer replaces the current elements.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::MissingCallback` if no compare hook is registered,
    /// or `HookVecError::AllocationFailure` if the scratch buffer cannot be allocated.
    pub fn sort(&mut self, method: SortMethod) -> Result<()> {
        let compare = self.hooks.compare_hook()?.clone();
        self.sort_by(method, |a, b| compare(a, b))
    }

    /// Sorts with an explicit comparator, ignoring the registered one.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::AllocationFailure` if the scratch buffer cannot be allocated.
    pub fn sort_by<F>(&mut self, method: SortMethod, compare: F) -> Result<()>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        debug!("sorting {} elements with {:?}", self.len(), method);
        let mut scratch = self
            .copier()
            .copy_all(self.storage.items(), self.storage.capacity())?;
        sort_slice(&mut scratch, method, compare);
        drop(self.storage.replace_items(scratch));
        Ok(())
    }
}
