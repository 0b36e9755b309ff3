use hookvec::{presets, ElementKind, HookVec, SortMethod};

fn printed<T>(vec: &HookVec<T>) -> String {
    let mut out = Vec::new();
    vec.print_to(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_ints() {
    let mut vec = presets::ints();
    vec.add_all(&[3, -1, 2]).unwrap();
    vec.sort(SortMethod::Library).unwrap();
    assert_eq!(printed(&vec), "HookVec [size: 3, min_alloc: 0] =>\n-1 2 3 \n");
    assert!(vec.contains(&2).unwrap());
}

#[test]
fn test_floats_two_decimals() {
    let mut vec = presets::floats();
    vec.add_all(&[1.0, 0.25]).unwrap();
    vec.reserve(4).unwrap();
    assert_eq!(printed(&vec), "HookVec [size: 2, min_alloc: 4] =>\n1.00 0.25 \n");
    assert_eq!(vec.join("|").unwrap(), "1.00|0.25");
}

#[test]
fn test_chars() {
    let mut vec = presets::chars();
    vec.add_all(&['c', 'a', 'b']).unwrap();
    vec.sort(SortMethod::Bubble).unwrap();
    assert_eq!(vec.join("").unwrap(), "abc");
    assert_eq!(vec.indexes_of(&'b').unwrap(), vec![1]);
}

#[test]
fn test_strings() {
    let mut vec = presets::strings();
    assert_eq!(vec.kind(), ElementKind::Owned);
    for word in ["pear", "apple", "fig"] {
        vec.add(&word.to_string()).unwrap();
    }
    vec.sort(SortMethod::Selection).unwrap();
    assert_eq!(printed(&vec), "HookVec [size: 3, min_alloc: 0] =>\napple fig pear \n");

    let fruit = vec.filter(|s| s.len() > 3).unwrap();
    assert_eq!(fruit.kind(), ElementKind::Owned);
    assert_eq!(fruit.join(",").unwrap(), "apple,pear");
}

#[test]
fn test_strings_reject_hooks_without_copy() {
    let mut vec = presets::strings();
    assert!(vec.set_hooks(presets::display_hooks()).is_err());
    assert!(vec.hooks().has_copy());
}
