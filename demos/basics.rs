use chainset::{hash, ChainedHashTable};

fn main() {
    const NUM_KEYS: usize = 250;

    // Create a table with the default 101 buckets.
    let mut table = ChainedHashTable::new();
    println!("capacity: {}", table.capacity());

    // Insert 250 titles. The table rehashes twice on the way: 101 -> 211 -> 431.
    for i in 0..NUM_KEYS {
        table.insert(format!("Friday the 13th Part {i}"));
        // The load factor never stays above 1.0.
        assert!(table.len() <= table.capacity());
    }
    println!("capacity after {NUM_KEYS} inserts: {}", table.capacity());
    println!("{:?}", table.chain_stats());

    // Duplicates are ignored.
    assert!(!table.insert("Friday the 13th Part 0".to_string()));

    // Remove every other title.
    for i in (0..NUM_KEYS).step_by(2) {
        assert!(table.remove(format!("Friday the 13th Part {i}").as_str()));
    }

    // Verify the result.
    for i in 0..NUM_KEYS {
        let key = format!("Friday the 13th Part {i}");
        assert_eq!(table.contains(key.as_str()), i % 2 == 1);
    }

    // The standalone string hash gives the same bucket on every run.
    for title in ["Alien", "Psycho", "Halloween"] {
        println!("{title} -> bucket {} of 101", hash(title, 101));
    }
}
