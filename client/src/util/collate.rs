//! Swedish base-letter collation for table sorting and name ordering.
//!
//! Comparison ignores case and accents except for the three Swedish
//! letters, which sort after `z` as `å`, `ä`, `ö`. Danish/Norwegian `æ`/`ø`
//! collate with `ä`/`ö` and `ü` with `y`, as Swedish dictionaries do.

#[cfg(test)]
#[path = "collate_test.rs"]
mod collate_test;

use std::cmp::Ordering;

const AFTER_Z: u32 = 'z' as u32;

fn weight(c: char) -> u32 {
    let folded = match c {
        'å' => return AFTER_Z + 1,
        'ä' | 'æ' => return AFTER_Z + 2,
        'ö' | 'ø' => return AFTER_Z + 3,
        'á' | 'à' | 'â' | 'ã' => 'a',
        'ç' => 'c',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ó' | 'ò' | 'ô' | 'õ' => 'o',
        'ú' | 'ù' | 'û' => 'u',
        'ü' | 'ý' | 'ÿ' => 'y',
        other => other,
    };
    folded as u32
}

/// Primary collation key for `text`.
pub fn sort_key(text: &str) -> Vec<u32> {
    text.chars().flat_map(char::to_lowercase).map(weight).collect()
}

/// Compare two strings in Swedish order, case- and accent-insensitively.
pub fn swedish_cmp(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}
