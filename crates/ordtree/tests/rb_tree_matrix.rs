use std::cmp::Ordering;

use ordtree::{
    AllocError, Color, Cursor, Error, First, Identity, NodeAlloc, RbMapTree, RbSet, RbTree,
    TreeConfig,
};

fn collect<T: Ord + Clone>(set: &RbSet<T>) -> Vec<T> {
    set.iter().cloned().collect()
}

#[test]
fn rb_tree_insert_then_erase_scenario_matrix() {
    let mut set = RbSet::new();
    for v in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
        let (_, inserted) = set.insert(v);
        assert!(inserted);
        set.verify().unwrap();
    }
    assert_eq!(collect(&set), vec![1, 3, 4, 6, 7, 8, 10, 13, 14]);
    assert_eq!(set.node(set.root().unwrap()).color, Color::Black);

    for v in [7, 14, 3, 8] {
        assert_eq!(set.erase(&v), 1);
        set.verify().unwrap();
    }
    assert_eq!(collect(&set), vec![1, 4, 6, 10, 13]);
    assert_eq!(set.len(), 5);
}

#[test]
fn rb_tree_erase_inner_node_scenario_matrix() {
    let mut set: RbSet<i32> = [8, 4, 10, 6, 1, 5].into_iter().collect();
    set.verify().unwrap();
    assert_eq!(set.erase(&6), 1);
    set.verify().unwrap();
    assert_eq!(collect(&set), vec![1, 4, 5, 8, 10]);
}

#[test]
fn rb_tree_duplicate_insert_keeps_existing_matrix() {
    let mut map = RbMapTree::<i32, &str>::with_key_of(First);
    let (first, inserted) = map.insert((1, "one"));
    assert!(inserted);
    let (again, inserted) = map.insert((1, "uno"));
    assert!(!inserted);
    assert_eq!(first, again);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&1), Some(&(1, "one")));
}

#[test]
fn rb_tree_erase_missing_key_matrix() {
    let mut set: RbSet<i32> = (0..10).collect();
    assert_eq!(set.erase(&42), 0);
    assert_eq!(set.remove(&42), None);
    assert_eq!(set.len(), 10);

    let mut empty = RbSet::<i32>::new();
    assert_eq!(empty.erase(&1), 0);
    assert!(empty.is_empty());
}

#[test]
fn rb_tree_erase_everything_matrix() {
    let mut set: RbSet<i32> = (0..100).collect();
    for v in [50, 0, 99, 25, 75] {
        set.erase(&v);
    }
    for v in 0..100 {
        set.erase(&v);
        set.verify().unwrap();
    }
    assert!(set.is_empty());
    assert_eq!(set.root(), None);
    assert!(set.begin().is_end());
}

#[test]
fn rb_tree_lookup_matrix() {
    let set: RbSet<i32> = [10, 20, 30, 40].into_iter().collect();
    assert_eq!(set.get_at(set.find(&30)), Some(&30));
    assert!(set.find(&35).is_end());
    assert!(set.contains(&10));
    assert!(!set.contains(&11));
    assert_eq!(set.count(&20), 1);
    assert_eq!(set.count(&21), 0);
    assert_eq!(set.at(&40).unwrap(), &40);
    assert!(matches!(set.at(&41), Err(Error::KeyNotFound)));
}

#[test]
fn rb_tree_bounds_matrix() {
    let set: RbSet<i32> = [10, 20, 30, 40].into_iter().collect();
    assert_eq!(set.get_at(set.lower_bound(&20)), Some(&20));
    assert_eq!(set.get_at(set.lower_bound(&21)), Some(&30));
    assert_eq!(set.get_at(set.lower_bound(&0)), Some(&10));
    assert!(set.lower_bound(&41).is_end());

    assert_eq!(set.get_at(set.upper_bound(&20)), Some(&30));
    assert_eq!(set.get_at(set.upper_bound(&5)), Some(&10));
    assert!(set.upper_bound(&40).is_end());

    let (lo, hi) = set.equal_range(&30);
    assert_eq!(set.get_at(lo), Some(&30));
    assert_eq!(set.get_at(hi), Some(&40));
    let (lo, hi) = set.equal_range(&25);
    assert_eq!(lo, hi);
    assert_eq!(set.get_at(lo), Some(&30));
}

#[test]
fn rb_tree_cursor_walk_matrix() {
    let set: RbSet<i32> = [3, 1, 2].into_iter().collect();
    let mut out = Vec::new();
    let mut c = set.begin();
    while !c.is_end() {
        out.push(*set.get_at(c).unwrap());
        c = set.next(c);
    }
    assert_eq!(out, vec![1, 2, 3]);
    assert!(set.next(set.end()).is_end());

    let last = set.prev(set.end());
    assert_eq!(set.get_at(last), Some(&3));
    assert!(set.prev(set.begin()).is_end());
    assert_eq!(set.get_at(set.end()), None);
    assert_eq!(Cursor::default(), set.end());
}

#[test]
fn rb_tree_cursor_survives_other_mutations_matrix() {
    let mut set = RbSet::new();
    for v in 0..50 {
        set.insert(v * 2);
    }
    let (c, _) = set.insert(51);
    for v in 100..300 {
        set.insert(v);
    }
    for v in (0..50).map(|v| v * 2) {
        set.erase(&v);
    }
    set.verify().unwrap();
    assert_eq!(set.get_at(c), Some(&51));
    assert_eq!(set.find(&51), c);
}

#[test]
fn rb_tree_stale_cursor_aliases_reused_slot_matrix() {
    let mut set: RbSet<i32> = [1, 2].into_iter().collect();
    let stale = set.find(&1);
    set.erase(&1);
    let (fresh, _) = set.insert(3);
    assert_eq!(fresh, stale);
    assert_eq!(set.get_at(stale), Some(&3));
}

#[test]
#[should_panic]
fn rb_tree_stale_cursor_on_vacant_slot_panics_matrix() {
    let mut set: RbSet<i32> = [1, 2].into_iter().collect();
    let stale = set.find(&2);
    set.erase(&2);
    set.get_at(stale);
}

#[test]
fn rb_tree_erase_at_returns_successor_matrix() {
    let mut set: RbSet<i32> = (1..=5).collect();
    let c = set.find(&3);
    let next = set.erase_at(c);
    assert_eq!(set.get_at(next), Some(&4));
    set.verify().unwrap();

    let last = set.find(&5);
    assert!(set.erase_at(last).is_end());
    assert!(set.erase_at(set.end()).is_end());
    assert_eq!(collect(&set), vec![1, 2, 4]);
}

#[test]
fn rb_tree_remove_hands_back_value_matrix() {
    let mut map = RbMapTree::<String, Vec<u8>>::with_key_of(First);
    map.insert(("a".to_string(), vec![1]));
    map.insert(("b".to_string(), vec![2, 2]));
    assert_eq!(
        map.remove(&"b".to_string()),
        Some(("b".to_string(), vec![2, 2]))
    );
    assert_eq!(map.len(), 1);
    map.verify().unwrap();
}

#[test]
fn rb_tree_iter_both_ends_matrix() {
    let set: RbSet<i32> = (0..10).collect();
    let mut it = set.iter();
    assert_eq!(it.len(), 10);
    assert_eq!(it.next(), Some(&0));
    assert_eq!(it.next_back(), Some(&9));
    assert_eq!(it.len(), 8);
    let rest: Vec<_> = it.rev().copied().collect();
    assert_eq!(rest, vec![8, 7, 6, 5, 4, 3, 2, 1]);

    let mut total = 0;
    for v in &set {
        total += v;
    }
    assert_eq!(total, 45);
    assert_eq!(set.first(), Some(&0));
    assert_eq!(set.last(), Some(&9));
}

#[test]
fn rb_tree_custom_comparator_matrix() {
    let mut set = RbTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    set.extend([1, 5, 3, 4, 2]);
    set.verify().unwrap();
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
    assert_eq!(set.get_at(set.lower_bound(&6)), Some(&5));
    assert_eq!(set.get_at(set.upper_bound(&3)), Some(&2));
    assert_eq!((set.comparator())(&1, &2), Ordering::Greater);
}

#[test]
fn rb_tree_map_pairs_matrix() {
    let map: RbMapTree<i32, &str> = [(3, "c"), (1, "a"), (2, "b")].into_iter().collect();
    assert_eq!(map.get(&2), Some(&(2, "b")));
    let keys: Vec<i32> = map.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![1, 2, 3]);
    assert!(map.get(&4).is_none());
}

#[test]
fn rb_tree_clone_eq_debug_matrix() {
    let set: RbSet<i32> = [2, 1, 3].into_iter().collect();
    let c = set.find(&2);
    let copy = set.clone();
    assert_eq!(set, copy);
    assert_eq!(copy.get_at(c), Some(&2));
    copy.verify().unwrap();
    assert_eq!(format!("{set:?}"), "{1, 2, 3}");

    let other: RbSet<i32> = [1, 2].into_iter().collect();
    assert_ne!(set, other);
}

#[test]
fn rb_tree_clear_and_swap_matrix() {
    let mut a: RbSet<i32> = (0..5).collect();
    let mut b: RbSet<i32> = (10..12).collect();
    a.swap(&mut b);
    assert_eq!(collect(&a), vec![10, 11]);
    assert_eq!(collect(&b), vec![0, 1, 2, 3, 4]);

    b.clear();
    assert!(b.is_empty());
    assert_eq!(b.root(), None);
    assert!(b.allocator().is_empty());
    b.insert(7);
    b.verify().unwrap();
    assert_eq!(collect(&b), vec![7]);
}

#[test]
fn rb_tree_node_limit_matrix() {
    let config = TreeConfig::new().capacity(8).node_limit(3);
    let mut set: RbTree<i32, Identity, _> = RbTree::with_config(config, Identity, i32::cmp);
    for v in [1, 2, 3] {
        set.try_insert(v).unwrap();
    }
    assert_eq!(set.allocator().limit(), Some(3));

    let err = set.try_insert(4).unwrap_err();
    assert!(matches!(
        err,
        Error::Alloc(AllocError::LimitReached { limit: 3 })
    ));
    assert_eq!(set.len(), 3);
    set.verify().unwrap();
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

    // A duplicate never needs a node.
    let (c, inserted) = set.try_insert(2).unwrap();
    assert!(!inserted);
    assert_eq!(set.get_at(c), Some(&2));

    set.erase(&1);
    assert!(set.try_insert(4).unwrap().1);
}

#[test]
#[should_panic(expected = "insertion failed")]
fn rb_tree_insert_panics_at_node_limit_matrix() {
    let config = TreeConfig::new().node_limit(1);
    let mut set: RbTree<i32, Identity, _> = RbTree::with_config(config, Identity, i32::cmp);
    set.insert(1);
    set.insert(2);
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Even(u32);

impl TryFrom<i64> for Even {
    type Error = String;

    fn try_from(v: i64) -> Result<Self, Self::Error> {
        match u32::try_from(v) {
            Ok(v) if v % 2 == 0 => Ok(Even(v)),
            _ => Err(format!("{v} is not a small even number")),
        }
    }
}

impl From<u32> for Even {
    fn from(v: u32) -> Self {
        Even(v * 2)
    }
}

#[test]
fn rb_tree_emplace_matrix() {
    let mut set = RbSet::<Even>::new();
    let (c, inserted) = set.emplace(3u32);
    assert!(inserted);
    assert_eq!(set.get_at(c), Some(&Even(6)));

    assert!(set.try_emplace(4i64).unwrap().1);
    let err = set.try_emplace(5i64).unwrap_err();
    assert!(matches!(err, Error::Construction(_)));
    assert_eq!(err.to_string(), "value construction failed: 5 is not a small even number");
    assert_eq!(set.len(), 2);
    set.verify().unwrap();
}
