//! Basic usage of the three structures

use triad::{FenwickTree, PrefixTree, SkipList};

fn main() -> Result<(), triad::Error> {
    println!("Prefix Tree");
    println!("===========");

    let mut trie = PrefixTree::new();
    for word in ["car", "card", "care", "cat", "dog"] {
        trie.insert(word);
    }
    println!("  Words stored: {}", trie.len());
    println!("  'car' stored: {}", trie.search("car"));
    println!("  'ca' stored: {} / prefix exists: {}", trie.search("ca"), trie.starts_with("ca"));
    println!("  Completions of 'car': {:?}", trie.get_all_words_with_prefix("car"));

    trie.delete("car");
    println!("  After deleting 'car': {:?}", trie.get_all_words_with_prefix("car"));

    println!("\nFenwick Tree");
    println!("============");

    // Daily sales, queried as running totals
    let sales = [12i64, 7, 0, 30, 18, 4, 9];
    let mut ft = FenwickTree::from_slice(&sales);
    println!("  Total sales: {}", ft.total());
    println!("  Days 2-4: {}", ft.range_query(2, 4)?);
    ft.update(2, 25)?;
    println!("  Day 2 corrected to {}: days 2-4 now {}", ft.point_value(2)?, ft.range_query(2, 4)?);

    println!("\nSkip List");
    println!("=========");

    // Seeded so the tower layout is the same on every run
    let mut list = SkipList::with_seed(8, 0.5, 2024)?;
    list.extend([42, 7, 19, 7, 88, 3]);
    println!("  Sorted: {list:?}");
    println!("  Smallest: {:?}", list.first());
    println!("  Active level: {} of {}", list.level(), list.max_level());
    list.delete(&7);
    println!("  After deleting one 7: {list:?}");

    Ok(())
}
