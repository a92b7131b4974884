/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use super::*;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use pretty_assertions::assert_eq;
use static_assertions::assert_impl_all;

assert_impl_all!(OrderedSet<i32>: Send, Sync);

#[allow(dead_code)]
fn compile_time_macro_ordered_set_is_send_and_sync() -> impl Send + Sync {
    ordered_set!(0)
}

mod iter {
    use super::*;
    use pretty_assertions::assert_eq;

    #[allow(clippy::explicit_iter_loop)]
    #[allow(clippy::never_loop)]
    #[test]
    fn test_iter_empty() {
        let set: OrderedSet<i32> = OrderedSet::new();

        for _ in set.iter() {
            panic!("iterator should be empty");
        }
    }

    #[allow(clippy::explicit_iter_loop)]
    #[test]
    fn test_iter() {
        let mut set = OrderedSet::new();
        let limit: usize = 100;

        for i in 0..limit {
            set.add(i);
        }

        let mut touched = vec![false; limit];

        for v in set.iter() {
            assert!(!touched[*v]);
            touched[*v] = true;
        }

        assert!(touched.iter().all(|b| *b));
    }

    #[test]
    fn test_iter_size_hint() {
        let set = ordered_set![0, 1, 2];
        let mut iterator = set.iter();

        assert_eq!(iterator.size_hint(), (3, Some(3)));

        iterator.next();

        assert_eq!(iterator.size_hint(), (2, Some(2)));

        iterator.next();

        assert_eq!(iterator.size_hint(), (1, Some(1)));

        iterator.next();

        assert_eq!(iterator.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_iter_sorted() {
        let set = ordered_set![5, 6, 2, 1];
        let mut iterator = set.iter();

        assert_eq!(iterator.next(), Some(&1));
        assert_eq!(iterator.next(), Some(&2));
        assert_eq!(iterator.next(), Some(&5));
        assert_eq!(iterator.next(), Some(&6));
        assert_eq!(iterator.next(), None);
    }

    #[test]
    fn test_descending_iter() {
        let set = ordered_set![5, 6, 2, 1];
        let descending: Vec<i32> = set.descending_iter().copied().collect();

        assert_eq!(descending, vec![6, 5, 2, 1]);
    }

    #[test]
    fn test_iter_restarts() {
        let set = ordered_set![3, 1, 2];

        let first_pass: Vec<i32> = set.iter().copied().collect();
        let second_pass: Vec<i32> = set.iter().copied().collect();

        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn test_into_iterator() {
        let set = ordered_set![3, 1, 2];
        let mut left = 3;

        for _ in &set {
            left -= 1;
            assert!(left >= 0);
        }

        assert_eq!(left, 0);
    }

    #[test]
    fn test_into_iterator_owned() {
        let set = ordered_set![String::from("b"), String::from("a")];
        let values: Vec<String> = set.into_iter().collect();

        assert_eq!(values, vec![String::from("a"), String::from("b")]);
    }

    #[test]
    fn test_sorted_round_trip() {
        let input = [7, 3, 9, 3, 1, 7, 7, 0, 12, 9];
        let set: OrderedSet<i32> = input.iter().copied().collect();

        let mut expected: Vec<i32> = input.to_vec();
        expected.sort_unstable();
        expected.dedup();

        assert_eq!(set.iter().copied().collect::<Vec<_>>(), expected);

        expected.reverse();

        assert_eq!(set.descending_iter().copied().collect::<Vec<_>>(), expected);
    }
}

mod scenario {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_and_size() {
        let mut set = OrderedSet::new();

        set.add(5);
        set.add(10);
        set.add(3);

        assert_eq!(set.size(), 3);

        set.add(1);

        assert_eq!(set.size(), 4);
        assert!(!set.add(5));
        assert_eq!(set.size(), 4);
    }

    #[test]
    fn test_ceiling_floor() {
        let set = ordered_set![5, 10, 15, 20];

        assert_eq!(set.ceiling(&12), Some(&15));
        assert_eq!(set.floor(&12), Some(&10));
        assert_eq!(set.ceiling(&5), Some(&5));
        assert_eq!(set.floor(&20), Some(&20));
        assert_eq!(set.ceiling(&25), None);
        assert_eq!(set.floor(&4), None);
    }

    #[test]
    fn test_higher_lower() {
        let set = ordered_set![3, 6, 9];

        assert_eq!(set.higher(&4), Some(&6));
        assert_eq!(set.lower(&8), Some(&6));
        assert_eq!(set.higher(&9), None);
        assert_eq!(set.lower(&3), None);
    }

    #[test]
    fn test_poll() {
        let mut set = ordered_set![1, 2, 3];

        assert_eq!(set.poll_first(), Some(1));
        assert_eq!(set.size(), 2);
        assert_eq!(set.poll_last(), Some(3));
        assert_eq!(set.size(), 1);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_sequential_thousand() {
        let mut set: OrderedSet<i32> = OrderedSet::new();

        for i in 0..1000 {
            assert!(set.add(i));
        }

        assert_eq!(set.first(), Some(&0));
        assert_eq!(set.last(), Some(&999));
        assert!((0..1000).all(|i| set.contains(&i)));

        for i in 0..1000 {
            assert!(set.remove(&i));
            assert_eq!(set.size(), 999 - i as usize);
        }

        assert!(set.is_empty());
    }

    #[test]
    fn test_strings() {
        let mut set = OrderedSet::new();

        set.add("banana");
        set.add("apple");
        set.add("cherry");

        assert_eq!(set.first(), Some(&"apple"));
        assert_eq!(set.last(), Some(&"cherry"));
        assert_eq!(set.ceiling(&"b"), Some(&"banana"));
    }
}

#[test]
fn test_new() {
    let empty_set: OrderedSet<i32> = OrderedSet::new();

    assert_eq!(empty_set.size(), 0);
    assert!(empty_set.is_empty());
}

#[test]
fn test_macro_ordered_set() {
    let mut set_1 = OrderedSet::new();

    set_1.add(1);

    let mut set_1_2_3 = OrderedSet::new();

    set_1_2_3.add(1);
    set_1_2_3.add(2);
    set_1_2_3.add(3);

    assert_eq!(OrderedSet::<u32>::new(), ordered_set![]);
    assert_eq!(set_1, ordered_set![1]);
    assert_eq!(set_1_2_3, ordered_set![1, 2, 3]);
}

#[test]
fn test_add_all() {
    let mut set = ordered_set![1, 2];

    assert!(set.add_all(vec![2, 3, 4]));
    assert!(!set.add_all(vec![1, 4]));
    assert!(!set.add_all(Vec::new()));
    assert_eq!(set, ordered_set![1, 2, 3, 4]);
}

#[test]
fn test_remove() {
    let mut set = ordered_set!["foo", "bar", "mumble", "baz"];

    assert!(set.remove(&"mumble"));
    assert!(!set.remove(&"mumble"));
    assert_eq!(set.size(), 3);
    assert!(!set.contains(&"mumble"));
}

#[test]
fn test_remove_from_empty() {
    let mut set: OrderedSet<i32> = OrderedSet::new();

    assert!(!set.remove(&1));
    assert!(set.is_empty());
}

#[test]
fn test_take() {
    let mut set: OrderedSet<String> = ordered_set![String::from("a"), String::from("b")];

    assert_eq!(set.take("a"), Some(String::from("a")));
    assert_eq!(set.take("a"), None);
    assert_eq!(set.size(), 1);
}

#[test]
fn test_get() {
    let set: OrderedSet<String> = ordered_set![String::from("x")];

    assert_eq!(set.get("x"), Some(&String::from("x")));
    assert_eq!(set.get("y"), None);
}

#[test]
fn test_clear() {
    let mut set = ordered_set![1, 2, 3];

    set.clear();

    assert!(set.is_empty());
    assert_eq!(set.first(), None);
    assert!(set.add(4));
}

#[test]
fn test_empty_queries() {
    let mut set: OrderedSet<i32> = OrderedSet::new();

    assert_eq!(set.first(), None);
    assert_eq!(set.last(), None);
    assert_eq!(set.ceiling(&0), None);
    assert_eq!(set.floor(&0), None);
    assert_eq!(set.higher(&0), None);
    assert_eq!(set.lower(&0), None);
    assert_eq!(set.at_index(0), None);
    assert_eq!(set.poll_first(), None);
    assert_eq!(set.poll_last(), None);
}

#[test]
fn test_at_index_and_rank() {
    let set = ordered_set![40, 10, 30, 20];

    assert_eq!(set.at_index(0), Some(&10));
    assert_eq!(set.at_index(3), Some(&40));
    assert_eq!(set.at_index(4), None);
    assert_eq!(set.rank(&30), 2);
    assert_eq!(set.rank(&25), 2);
}

#[test]
fn test_first_last_after_removal() {
    let mut set = ordered_set![10, 20, 30];

    set.remove(&10);
    set.remove(&30);

    assert_eq!(set.first(), Some(&20));
    assert_eq!(set.last(), Some(&20));
}

#[test]
fn test_from_iterator() {
    let vec: Vec<&str> = vec!["two", "five"];
    let set: OrderedSet<&str> = vec.iter().copied().collect();
    let expected_set = ordered_set!["two", "five"];

    assert_eq!(set, expected_set);
}

#[test]
fn test_extend() {
    let mut set = ordered_set![1];

    set.extend(vec![3, 2, 1]);

    assert_eq!(set, ordered_set![1, 2, 3]);
}

#[test]
fn test_default() {
    let set: OrderedSet<u32> = OrderedSet::default();

    assert_eq!(set.size(), 0);
    assert!(set.is_empty());
}

#[test]
fn test_display() {
    let empty_set: OrderedSet<i32> = OrderedSet::new();
    let singleton_set = ordered_set!["hi"];
    let set = ordered_set![5, 12];

    assert_eq!(empty_set.to_string(), "{}");
    assert_eq!(singleton_set.to_string(), "{hi}");
    assert_eq!(set.to_string(), "{5, 12}");
}

#[test]
fn test_eq() {
    let set_1 = ordered_set!["a", "a"];
    let set_1_prime = ordered_set!["a"];
    let set_1_prime_prime = ordered_set!["a"];
    let set_2 = ordered_set!["b"];

    assert_eq!(set_1, set_1_prime);
    assert_eq!(set_1, set_1_prime_prime);
    assert_eq!(set_1, set_1);
    assert_eq!(set_2, set_2);

    #[allow(clippy::eq_op)]
    {
        assert!(set_1.ne(&set_2));
    }
}

#[test]
fn test_partial_ord() {
    let set_1 = ordered_set!["a"];
    let set_1_prime = ordered_set!["a"];
    let set_2 = ordered_set!["b"];

    assert_eq!(set_1.partial_cmp(&set_1_prime), Some(Ordering::Equal));
    assert_eq!(set_1.partial_cmp(&set_2), Some(Ordering::Less));
    assert_eq!(set_2.partial_cmp(&set_1), Some(Ordering::Greater));
}

#[test]
fn test_ord() {
    let set_1 = ordered_set!["a"];
    let set_1_prime = ordered_set!["a"];
    let set_2 = ordered_set!["b"];

    assert_eq!(set_1.cmp(&set_1_prime), Ordering::Equal);
    assert_eq!(set_1.cmp(&set_2), Ordering::Less);
    assert_eq!(set_2.cmp(&set_1), Ordering::Greater);
}

fn hash<T: Hash>(set: &OrderedSet<T>) -> u64 {
    #[allow(deprecated)]
    let mut hasher = core::hash::SipHasher::new();

    set.hash(&mut hasher);

    hasher.finish()
}

#[test]
fn test_hash() {
    let set_1 = ordered_set!["a"];
    let set_1_prime = ordered_set!["a"];
    let set_2 = ordered_set!["b", "a"];

    assert_eq!(hash(&set_1), hash(&set_1));
    assert_eq!(hash(&set_1), hash(&set_1_prime));
    assert_ne!(hash(&set_1), hash(&set_2));
}

#[test]
fn test_clone() {
    let mut set = ordered_set!["hello", "there"];
    let clone = set.clone();

    set.add("extra");

    assert_eq!(clone.size(), 2);
    assert!(clone.contains(&"hello"));
    assert!(clone.contains(&"there"));
    assert!(!clone.contains(&"extra"));
}

#[test]
fn test_debug() {
    let set = ordered_set![2, 1];

    assert_eq!(alloc::format!("{:?}", set), "OrderedSet { tree: {1, 2} }");
}
