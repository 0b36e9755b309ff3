use std::cell::Cell;
use std::rc::Rc;

use hookvec::{ElementKind, HookVec, HookVecError, Hooks, SortMethod};

/// Element without `Clone` that counts how many instances are alive.
#[derive(Debug)]
struct Tracked {
    value: i32,
    live: Rc<Cell<usize>>,
}

impl Tracked {
    fn new(value: i32, live: &Rc<Cell<usize>>) -> Self {
        live.set(live.get() + 1);
        Self {
            value,
            live: Rc::clone(live),
        }
    }

    fn duplicate(&self) -> Self {
        Self::new(self.value, &self.live)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

fn tracked_vec(copies: &Rc<Cell<usize>>) -> HookVec<Tracked> {
    let copies = Rc::clone(copies);
    let hooks = Hooks::new()
        .copy(move |t: &Tracked| {
            copies.set(copies.get() + 1);
            t.duplicate()
        })
        .equality(|a: &Tracked, b: &Tracked| a.value == b.value);
    HookVec::builder().hooks(hooks).build_owned().unwrap()
}

fn filled(values: &[i32], live: &Rc<Cell<usize>>, copies: &Rc<Cell<usize>>) -> HookVec<Tracked> {
    let mut vec = tracked_vec(copies);
    for &value in values {
        vec.add(&Tracked::new(value, live)).unwrap();
    }
    vec
}

fn values(vec: &HookVec<Tracked>) -> Vec<i32> {
    vec.iter().map(|t| t.value).collect()
}

#[test]
fn test_owned_without_copy_hook_is_rejected() {
    let result = HookVec::<Tracked>::builder().build_owned();
    assert!(matches!(
        result,
        Err(HookVecError::UnsupportedMethod { .. })
    ));
}

#[test]
fn test_non_clone_elements_are_copied_by_hook() {
    let live = Rc::new(Cell::new(0));
    let copies = Rc::new(Cell::new(0));
    let mut vec = tracked_vec(&copies);
    assert_eq!(vec.kind(), ElementKind::Owned);

    let first = Tracked::new(1, &live);
    vec.add(&first).unwrap();
    vec.add_at(0, &first).unwrap();
    assert_eq!(live.get(), 3);
    assert_eq!(copies.get(), 2);
    drop(first);

    let previous = vec.set(1, &Tracked::new(2, &live)).unwrap();
    assert_eq!(previous.value, 1);
    drop(previous);
    assert_eq!(values(&vec), vec![1, 2]);
    assert_eq!(live.get(), 2);

    assert_eq!(vec.remove_all(&[Tracked::new(1, &live)]).unwrap(), 1);
    assert_eq!(live.get(), 1);
    drop(vec);
    assert_eq!(live.get(), 0);
}

#[test]
fn test_sort_releases_scratch_copies() {
    let live = Rc::new(Cell::new(0));
    let copies = Rc::new(Cell::new(0));
    let mut vec = filled(&[3, 1, 2], &live, &copies);
    assert_eq!(live.get(), 3);
    let before = copies.get();

    vec.sort_by(SortMethod::Library, |a, b| a.value.cmp(&b.value)).unwrap();
    assert_eq!(values(&vec), vec![1, 2, 3]);
    assert_eq!(copies.get(), before + 3);
    assert_eq!(live.get(), 3);
}

#[test]
fn test_splice_copies_insertions_and_hands_back_removals() {
    let live = Rc::new(Cell::new(0));
    let copies = Rc::new(Cell::new(0));
    let mut vec = filled(&[1, 2, 3], &live, &copies);
    let insertions = [Tracked::new(8, &live), Tracked::new(9, &live)];
    assert_eq!(live.get(), 5);

    let removed = vec.splice(1, 1, &insertions).unwrap();
    assert_eq!(values(&vec), vec![1, 8, 9, 3]);
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].value, 2);
    assert_eq!(live.get(), 7);

    drop(removed);
    drop(insertions);
    assert_eq!(live.get(), vec.len());
}

#[test]
fn test_fill_and_shift_right_copy_each_slot() {
    let live = Rc::new(Cell::new(0));
    let copies = Rc::new(Cell::new(0));
    let mut vec = filled(&[1, 2], &live, &copies);
    let zero = Tracked::new(0, &live);

    vec.fill(&zero, 1, 3).unwrap();
    assert_eq!(values(&vec), vec![1, 0, 0, 0]);
    assert_eq!(live.get(), 5);

    vec.shift_right(&zero).unwrap();
    assert_eq!(values(&vec), vec![0, 1, 0, 0, 0]);
    drop(zero);
    assert_eq!(live.get(), vec.len());
}

#[test]
fn test_derived_containers_own_their_copies() {
    let live = Rc::new(Cell::new(0));
    let copies = Rc::new(Cell::new(0));
    let vec = filled(&[1, 2, 3], &live, &copies);

    let sub = vec.subarray(1, 5).unwrap();
    assert_eq!(values(&sub), vec![2, 3]);
    assert_eq!(live.get(), 5);

    let odd = vec.filter(|t| t.value % 2 == 1).unwrap();
    assert_eq!(values(&odd), vec![1, 3]);
    assert_eq!(live.get(), 7);

    let joined = vec.concat(&sub).unwrap();
    assert_eq!(values(&joined), vec![1, 2, 3, 2, 3]);
    assert_eq!(live.get(), 12);

    let cloned = vec.try_clone().unwrap();
    assert!(cloned.elementwise_eq(&vec).unwrap());
    let everything = vec.filter(|_| true).unwrap();
    assert!(everything.elementwise_eq(&vec).unwrap());
    assert_eq!(live.get(), 18);

    drop((sub, odd, joined, cloned, everything));
    assert_eq!(live.get(), 3);
    drop(vec);
    assert_eq!(live.get(), 0);
}

trait Shape {
    fn area(&self) -> f64;
    fn boxed(&self) -> Box<dyn Shape>;
}

struct Rect(f64, f64);

impl Shape for Rect {
    fn area(&self) -> f64 {
        self.0 * self.1
    }

    fn boxed(&self) -> Box<dyn Shape> {
        Box::new(Rect(self.0, self.1))
    }
}

#[test]
fn test_trait_objects() {
    let hooks = Hooks::new()
        .copy(|s: &Box<dyn Shape>| s.boxed())
        .compare(|a: &Box<dyn Shape>, b: &Box<dyn Shape>| a.area().total_cmp(&b.area()));
    let mut shapes: HookVec<Box<dyn Shape>> =
        HookVec::builder().hooks(hooks).build_owned().unwrap();
    shapes.add(&Rect(3.0, 3.0).boxed()).unwrap();
    shapes.add(&Rect(1.0, 2.0).boxed()).unwrap();
    shapes.add(&Rect(2.0, 2.0).boxed()).unwrap();

    shapes.sort(SortMethod::Insertion).unwrap();
    let areas: Vec<f64> = shapes.iter().map(|s| s.area()).collect();
    assert_eq!(areas, vec![2.0, 4.0, 9.0]);

    let big = shapes.filter(|s| s.area() > 3.0).unwrap();
    assert_eq!(big.len(), 2);
}
