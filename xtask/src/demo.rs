use anyhow::Result;
use triad::{FenwickTree, PrefixTree, SkipList};

use crate::DemoTarget;

const RULE: &str = "======================================================================";

fn banner(title: &str) {
    println!("\n{RULE}\n{title}\n{RULE}");
}

pub fn run(target: DemoTarget) -> Result<()> {
    match target {
        DemoTarget::Trie => demo_trie(),
        DemoTarget::Fenwick => demo_fenwick_tree()?,
        DemoTarget::SkipList => demo_skip_list()?,
        DemoTarget::All => {
            demo_trie();
            demo_fenwick_tree()?;
            demo_skip_list()?;
            banner("All demos complete");
        }
    }
    Ok(())
}

fn demo_trie() {
    banner("TRIE (PREFIX TREE)");

    let words = ["hello", "world", "help", "heap", "wonder"];
    println!("\n1. Inserting words: {words:?}");
    let mut trie: PrefixTree = words.into_iter().collect();
    println!("   Words inserted: {}", trie.word_count());

    println!("\n2. Searching for words:");
    println!("   Search 'hello': {}", trie.search("hello"));
    println!("   Search 'hell': {} (not a complete word)", trie.search("hell"));
    println!("   Search 'world': {}", trie.search("world"));

    println!("\n3. Prefix search:");
    for prefix in ["hel", "wo", "xyz"] {
        println!("   Starts with '{prefix}': {}", trie.starts_with(prefix));
    }

    println!("\n4. Get all words with prefix 'he':");
    println!("   Words: {:?}", trie.get_all_words_with_prefix("he"));

    println!("\n5. Delete 'hello':");
    trie.delete("hello");
    println!("   Search 'hello': {}", trie.search("hello"));
    println!("   Search 'help': {} (still exists)", trie.search("help"));
    println!("   Total words: {}", trie.word_count());
    println!("   Nodes retained: {}", trie.node_count());
}

fn demo_fenwick_tree() -> Result<()> {
    banner("FENWICK TREE (BINARY INDEXED TREE)");

    let values = [1i64, 3, 5, 7, 9, 11];
    println!("\n1. Creating array: {values:?}");
    let mut ft = FenwickTree::<i64>::new(values.len());
    ft.build_from_array(&values)?;

    println!("\n2. Prefix sum queries:");
    println!("   Sum of index 0: {}", ft.query(0)?);
    println!("   Sum of index 0-2: {} = 1+3+5", ft.query(2)?);
    println!("   Sum of index 0-5: {} = 1+3+5+7+9+11", ft.query(5)?);

    println!("\n3. Range sum queries:");
    println!("   Sum of range [1, 3]: {} = 3+5+7", ft.range_query(1, 3)?);
    println!("   Sum of range [2, 4]: {} = 5+7+9", ft.range_query(2, 4)?);

    println!("\n4. Update operations:");
    println!("   Adding 10 to index 2 (5 becomes 15)");
    ft.update(2, 10)?;
    println!("   New sum of index 0-2: {} = 1+3+15", ft.query(2)?);
    println!("   New sum of all elements: {}", ft.total());

    println!("\n5. Multiple updates:");
    ft.update(0, 5)?;
    ft.update(4, -4)?;
    println!("   After +5 at 0 and -4 at 4: sum of all = {}", ft.total());

    println!("\n6. Out-of-range update:");
    if let Err(err) = ft.update(values.len(), 1) {
        println!("   Rejected: {err}");
    }
    Ok(())
}

fn demo_skip_list() -> Result<()> {
    banner("SKIP LIST");

    let mut list = SkipList::new(16, 0.5)?;

    let values = [3, 6, 7, 9, 12, 19, 17, 26, 21, 25];
    println!("\n1. Inserting values: {values:?}");
    list.extend(values);
    println!("   Values inserted: {}", list.len());
    println!("   Active level: {}", list.level());
    println!("   Level 0 walk: {list:?}");

    println!("\n2. Searching for values:");
    for key in [7, 12] {
        println!("   Search {key}: {}", list.search(&key));
    }
    for key in [10, 100] {
        println!("   Search {key}: {} (not in list)", list.search(&key));
    }

    println!("\n3. Delete operations:");
    println!("   Deleting 7: {}", list.delete(&7));
    println!("   Search 7 after deletion: {}", list.search(&7));
    println!("   Size after deletion: {}", list.len());

    println!("\n4. More deletions:");
    println!("   Deleting 3: {}", list.delete(&3));
    println!("   Deleting 26: {}", list.delete(&26));
    println!("   Size now: {}", list.len());

    println!("\n5. Try to delete non-existent value:");
    println!("   Deleting 100: {} (should be false)", list.delete(&100));

    println!("\n6. Insert duplicate:");
    list.insert(9);
    println!("   Inserted 9 again (duplicates allowed)");
    println!("   Search 9: {}", list.search(&9));
    println!("   Level 0 walk: {list:?}");
    Ok(())
}
