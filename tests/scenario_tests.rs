use triad::{Error, FenwickTree, PrefixTree, SkipList};

#[test]
fn test_fenwick_tree_reference_scenario() {
    let mut ft = FenwickTree::<i64>::new(6);
    ft.build_from_array(&[1, 3, 5, 7, 9, 11]).unwrap();

    assert_eq!(ft.query(0).unwrap(), 1);
    assert_eq!(ft.query(2).unwrap(), 9);
    assert_eq!(ft.query(5).unwrap(), 36);
    assert_eq!(ft.range_query(1, 3).unwrap(), 15);
    assert_eq!(ft.range_query(2, 4).unwrap(), 21);

    ft.update(2, 10).unwrap();
    assert_eq!(ft.query(2).unwrap(), 19);
    assert_eq!(ft.query(5).unwrap(), 46);

    ft.update(0, 5).unwrap();
    ft.update(4, -4).unwrap();
    assert_eq!(ft.total(), 47);
}

#[test]
fn test_fenwick_tree_single_element() {
    let mut ft = FenwickTree::<i64>::new(1);
    ft.update(0, 42).unwrap();
    assert_eq!(ft.query(0).unwrap(), 42);
    assert_eq!(ft.range_query(0, 0).unwrap(), 42);
    assert_eq!(ft.update(1, 1), Err(Error::OutOfRange { index: 1, len: 1 }));
}

#[test]
fn test_fenwick_tree_large_uniform() {
    let size = 1000;
    let ft = FenwickTree::<i64>::from_slice(&vec![1; size]);
    for i in 0..size {
        assert_eq!(ft.query(i).unwrap(), i64::try_from(i).unwrap() + 1);
    }
    assert_eq!(ft.range_query(100, 199).unwrap(), 100);
}

#[test]
fn test_fenwick_tree_partial_build() {
    let mut ft = FenwickTree::<i64>::new(5);
    ft.build_from_array(&[2, 2]).unwrap();
    assert_eq!(ft.query(4).unwrap(), 4);
    // A second build accumulates.
    ft.build_from_array(&[1, 1, 1, 1, 1]).unwrap();
    assert_eq!(ft.query(4).unwrap(), 9);
}

#[test]
fn test_prefix_tree_reference_scenario() {
    let mut trie = PrefixTree::new();
    for word in ["hello", "help", "heap"] {
        trie.insert(word);
    }

    assert!(!trie.search("hell"));
    assert!(trie.starts_with("hell"));

    let mut words = trie.get_all_words_with_prefix("he");
    words.sort();
    assert_eq!(words, vec!["heap", "hello", "help"]);

    assert!(trie.delete("hello"));
    assert!(!trie.search("hello"));
    assert!(trie.search("help"));
    assert_eq!(trie.word_count(), 2);
}

#[test]
fn test_prefix_tree_demo_words() {
    let trie: PrefixTree = ["hello", "world", "help", "heap", "wonder"]
        .into_iter()
        .collect();
    assert_eq!(trie.len(), 5);
    assert!(trie.starts_with("wo"));
    assert!(!trie.starts_with("xyz"));
    assert_eq!(trie.get_all_words_with_prefix("wo"), vec!["wonder", "world"]);
    assert!(trie.get_all_words_with_prefix("xyz").is_empty());
}

#[test]
fn test_prefix_tree_duplicate_insert_is_idempotent() {
    let mut trie = PrefixTree::new();
    trie.insert("apple");
    trie.insert("apple");
    assert_eq!(trie.len(), 1);
    assert!(trie.delete("apple"));
    assert!(!trie.search("apple"));
    assert!(trie.is_empty());
}

#[test]
fn test_skip_list_reference_scenario() {
    let mut list = SkipList::with_seed(16, 0.5, 2024).unwrap();
    for key in [3, 6, 7, 9, 12, 19, 17, 26, 21, 25] {
        list.insert(key);
    }
    assert_eq!(list.len(), 10);

    assert!(list.search(&12));
    assert!(list.search(&7));
    assert!(!list.search(&10));
    assert!(!list.search(&100));

    assert!(list.delete(&7));
    assert!(!list.search(&7));
    assert_eq!(list.len(), 9);
    assert!(!list.delete(&100));

    assert!(list.delete(&3));
    assert!(list.delete(&26));
    assert_eq!(list.len(), 7);

    list.insert(9);
    assert!(list.search(&9));
    let keys: Vec<_> = list.iter().copied().collect();
    assert_eq!(keys, vec![6, 9, 9, 12, 17, 19, 21, 25]);
    assert!(list.check_invariants());
}

#[test]
fn test_skip_list_edge_cases() {
    let mut empty: SkipList<i32> = SkipList::with_seed(16, 0.5, 1).unwrap();
    assert!(!empty.search(&1));
    assert!(!empty.delete(&1));

    let mut single = SkipList::with_seed(16, 0.5, 2).unwrap();
    single.insert(42);
    assert!(single.search(&42));
    assert!(single.delete(&42));
    assert!(!single.search(&42));
    assert!(single.is_empty());

    let mut negatives = SkipList::with_seed(16, 0.5, 3).unwrap();
    negatives.insert(-5);
    negatives.insert(-10);
    assert!(negatives.search(&-5));
    assert!(negatives.search(&-10));
    assert_eq!(negatives.first(), Some(&-10));
}

#[test]
fn test_skip_list_large_sequential() {
    let mut list = SkipList::with_seed(16, 0.5, 4).unwrap();
    for key in (0..1000).step_by(2) {
        list.insert(key);
    }
    assert!(list.search(&500));
    assert!(list.search(&0));
    assert!(list.search(&998));
    assert!(!list.search(&501));
    assert!(list.check_invariants());
}

#[test]
fn test_skip_list_string_keys() {
    let mut list = SkipList::with_seed(8, 0.25, 5).unwrap();
    for word in ["pear", "apple", "fig", "apple"] {
        list.insert(word.to_string());
    }
    assert!(list.search(&"fig".to_string()));
    assert!(list.delete(&"apple".to_string()));
    assert!(list.search(&"apple".to_string()));
    assert_eq!(list.len(), 3);
}
