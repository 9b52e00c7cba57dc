use std::collections::HashMap;
use once_cell::sync::Lazy;

/// Letter values borrowed from Scrabble
pub static LETTER_VALUES: Lazy<HashMap<char, u32>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // 1 point letters
    for ch in ['a', 'e', 'i', 'o', 'u', 'l', 'n', 'r', 's', 't'] {
        map.insert(ch, 1);
    }

    // 2 points
    for ch in ['d', 'g'] {
        map.insert(ch, 2);
    }

    // 3 points
    for ch in ['b', 'c', 'm', 'p'] {
        map.insert(ch, 3);
    }

    // 4 points
    for ch in ['f', 'h', 'v', 'w', 'y'] {
        map.insert(ch, 4);
    }

    // 5 points
    map.insert('k', 5);

    // 8 points
    for ch in ['j', 'x'] {
        map.insert(ch, 8);
    }

    // 10 points
    for ch in ['q', 'z'] {
        map.insert(ch, 10);
    }

    map
});

/// Get the point value for a letter, ignoring case.
/// Returns `None` for anything outside the table.
pub fn get_letter_value(letter: char) -> Option<u32> {
    LETTER_VALUES.get(&letter.to_ascii_lowercase()).copied()
}

/// Every letter in the table, in alphabetical order
pub fn letter_pool() -> Vec<char> {
    let mut pool: Vec<char> = LETTER_VALUES.keys().copied().collect();
    pool.sort_unstable();
    pool
}
