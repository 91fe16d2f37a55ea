use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use triad::{FenwickTree, PrefixTree, SkipList};

#[derive(Debug, Clone)]
enum TrieOp {
    Insert(String),
    Search(String),
    Delete(String),
    StartsWith(String),
}

#[derive(Debug, Clone)]
enum FenwickOp {
    Update(usize, i64),
    Query(usize),
    Range(usize, usize),
}

#[derive(Debug, Clone)]
enum SkipOp {
    Insert(i16),
    Search(i16),
    Delete(i16),
}

// Small alphabet so that words share prefixes often.
fn word() -> impl Strategy<Value = String> {
    "[abc]{0,5}"
}

proptest! {
    #[test]
    fn test_prefix_tree_matches_btree_set(ops in proptest::collection::vec(
        prop_oneof![
            word().prop_map(TrieOp::Insert),
            word().prop_map(TrieOp::Search),
            word().prop_map(TrieOp::Delete),
            word().prop_map(TrieOp::StartsWith),
        ],
        1..200
    )) {
        let mut model = BTreeSet::new();
        let mut trie = PrefixTree::new();

        for op in ops {
            match op {
                TrieOp::Insert(w) => {
                    prop_assert_eq!(trie.insert(&w), model.insert(w.clone()), "insert {}", w);
                }
                TrieOp::Search(w) => {
                    prop_assert_eq!(trie.search(&w), model.contains(&w), "search {}", w);
                }
                TrieOp::Delete(w) => {
                    prop_assert_eq!(trie.delete(&w), model.remove(&w), "delete {}", w);
                }
                TrieOp::StartsWith(p) => {
                    // Paths survive deletion, so only a live word proves the
                    // prefix; the converse is checked below.
                    if model.iter().any(|w| w.starts_with(p.as_str())) {
                        prop_assert!(trie.starts_with(&p), "starts_with {}", p);
                    }
                }
            }
        }

        prop_assert_eq!(trie.len(), model.len());
        for prefix in ["", "a", "ab", "ba", "cc"] {
            let expected: Vec<String> = model
                .iter()
                .filter(|w| w.starts_with(prefix))
                .cloned()
                .collect();
            prop_assert_eq!(trie.get_all_words_with_prefix(prefix), expected);
        }
    }

    #[test]
    fn test_prefix_tree_prefixes_of_inserted_words(words in proptest::collection::vec("[a-z]{1,8}", 1..30)) {
        let trie: PrefixTree = words.iter().collect();
        for w in &words {
            prop_assert!(trie.search(w));
            for (end, _) in w.char_indices() {
                prop_assert!(trie.starts_with(&w[..end]));
            }
        }
    }

    #[test]
    fn test_fenwick_tree_matches_naive_sums(
        initial in proptest::collection::vec(-1000i64..1000, 1..64),
        raw_ops in proptest::collection::vec(
            prop_oneof![
                (any::<usize>(), -500i64..500).prop_map(|(i, d)| FenwickOp::Update(i, d)),
                any::<usize>().prop_map(FenwickOp::Query),
                (any::<usize>(), any::<usize>()).prop_map(|(l, r)| FenwickOp::Range(l, r)),
            ],
            0..100
        )
    ) {
        let n = initial.len();
        let mut model = initial.clone();
        let mut ft = FenwickTree::<i64>::new(n);
        ft.build_from_array(&initial).unwrap();

        let prefix = |values: &[i64], i: usize| values[..=i].iter().sum::<i64>();

        for op in raw_ops {
            match op {
                FenwickOp::Update(i, d) => {
                    let i = i % n;
                    model[i] += d;
                    ft.update(i, d).unwrap();
                }
                FenwickOp::Query(i) => {
                    let i = i % n;
                    prop_assert_eq!(ft.query(i).unwrap(), prefix(&model, i));
                }
                FenwickOp::Range(a, b) => {
                    let (l, r) = ((a % n).min(b % n), (a % n).max(b % n));
                    let expected: i64 = model[l..=r].iter().sum();
                    prop_assert_eq!(ft.range_query(l, r).unwrap(), expected);
                    let via_prefix = if l == 0 {
                        ft.query(r).unwrap()
                    } else {
                        ft.query(r).unwrap() - ft.query(l - 1).unwrap()
                    };
                    prop_assert_eq!(via_prefix, expected);
                }
            }
        }

        prop_assert_eq!(&FenwickTree::from_slice(&model), &{
            let mut rebuilt = FenwickTree::<i64>::new(n);
            rebuilt.build_from_array(model.as_slice()).unwrap();
            rebuilt
        });
        prop_assert_eq!(ft.total(), model.iter().sum::<i64>());
    }

    #[test]
    fn test_skip_list_matches_multiset(
        seed in any::<u64>(),
        ops in proptest::collection::vec(
            prop_oneof![
                (-50i16..50).prop_map(SkipOp::Insert),
                (-50i16..50).prop_map(SkipOp::Search),
                (-50i16..50).prop_map(SkipOp::Delete),
            ],
            1..300
        )
    ) {
        let mut model: BTreeMap<i16, usize> = BTreeMap::new();
        let mut list = SkipList::with_seed(10, 0.5, seed).unwrap();

        for op in ops {
            match op {
                SkipOp::Insert(k) => {
                    *model.entry(k).or_default() += 1;
                    list.insert(k);
                }
                SkipOp::Search(k) => {
                    prop_assert_eq!(list.search(&k), model.contains_key(&k));
                }
                SkipOp::Delete(k) => {
                    let expected = match model.get_mut(&k) {
                        Some(count) => {
                            *count -= 1;
                            if *count == 0 {
                                model.remove(&k);
                            }
                            true
                        }
                        None => false,
                    };
                    prop_assert_eq!(list.delete(&k), expected);
                }
            }
            prop_assert!(list.check_invariants());
        }

        let expected: Vec<i16> = model
            .iter()
            .flat_map(|(&k, &count)| std::iter::repeat(k).take(count))
            .collect();
        let walked: Vec<i16> = list.iter().copied().collect();
        prop_assert_eq!(walked.len(), list.len());
        prop_assert_eq!(walked, expected);
    }

    #[test]
    fn test_skip_list_insert_delete_inverse(
        seed in any::<u64>(),
        keys in proptest::collection::vec(any::<i32>(), 0..100),
        extra in any::<i32>()
    ) {
        let mut list = SkipList::with_seed(16, 0.5, seed).unwrap();
        list.extend(keys.iter().copied());
        let before: Vec<i32> = list.iter().copied().collect();

        let was_present = list.search(&extra);
        list.insert(extra);
        prop_assert!(list.delete(&extra));

        prop_assert_eq!(list.len(), keys.len());
        prop_assert_eq!(list.search(&extra), was_present);
        let after: Vec<i32> = list.iter().copied().collect();
        prop_assert_eq!(before, after);
    }
}
