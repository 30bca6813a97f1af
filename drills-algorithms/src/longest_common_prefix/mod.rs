use drills_challenges::longest_common_prefix::{Challenge, Solution};

pub mod binary_search;
pub mod divide_and_conquer;
pub mod horizontal_scan;
pub mod trie;
pub mod vertical_scan;

register_algorithms!(
    recommended: vertical_scan,
    [vertical_scan, horizontal_scan, divide_and_conquer, binary_search, trie]
);

// Byte-wise comparison can stop inside a multi-byte char; back off to the
// char that contains it.
pub(crate) fn floor_char_boundary(s: &str, mut len: usize) -> usize {
    while !s.is_char_boundary(len) {
        len -= 1;
    }
    len
}

pub(crate) fn common_byte_len(a: &str, b: &str) -> usize {
    a.bytes().zip(b.bytes()).take_while(|(x, y)| x == y).count()
}
