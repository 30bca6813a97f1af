use drills_algorithms::{extra_characters, longest_common_prefix, longest_substring};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_longest_common_prefix() {
    use longest_common_prefix::{binary_search, divide_and_conquer, horizontal_scan, vertical_scan};

    for f in [
        vertical_scan::longest_common_prefix,
        horizontal_scan::longest_common_prefix,
        divide_and_conquer::longest_common_prefix,
        binary_search::longest_common_prefix,
    ] {
        assert_eq!(f(&strings(&["flower", "flow", "flight"])), "fl");
        assert_eq!(f(&strings(&["dog", "racecar", "car"])), "");
        assert_eq!(f(&strings(&["alone"])), "alone");
        assert_eq!(f(&strings(&["same", "same"])), "same");
        assert_eq!(f(&strings(&["", "abc"])), "");
        assert_eq!(f(&[]), "");
        // 'é' and 'è' share their first UTF-8 byte
        assert_eq!(f(&strings(&["caféx", "cafèx"])), "caf");
    }
}

#[test]
fn test_longest_common_prefix_trie() {
    use longest_common_prefix::trie;

    assert_eq!(
        trie::longest_common_prefix(&strings(&["flower", "flow", "flight"])),
        Some("fl".to_string())
    );
    assert_eq!(trie::longest_common_prefix(&[]), Some(String::new()));
    assert_eq!(trie::longest_common_prefix(&strings(&["Flower", "flow"])), None);
}

#[test]
fn test_min_extra_char() {
    use extra_characters::{dp_hashset, dp_trie, memoized_recursion};

    let cases: &[(&str, &[&str], usize)] = &[
        ("leetscode", &["leet", "code", "leetcode"], 1),
        ("sayhelloworld", &["hello", "world"], 3),
        ("", &["a"], 0),
        ("abc", &[], 3),
        ("aaaa", &["aa", "aaa"], 0),
        ("abcabc", &["", "abc"], 0),
    ];
    for &(text, dictionary, expected) in cases {
        let dictionary = strings(dictionary);
        assert_eq!(dp_trie::min_extra_char(text, &dictionary), Some(expected), "{}", text);
        assert_eq!(dp_hashset::min_extra_char(text, &dictionary), expected, "{}", text);
        assert_eq!(memoized_recursion::min_extra_char(text, &dictionary), Some(expected), "{}", text);
    }

    let dictionary = strings(&["zé"]);
    assert_eq!(dp_trie::min_extra_char("azé", &dictionary), None);
    assert_eq!(dp_hashset::min_extra_char("azé", &dictionary), 1);
    assert_eq!(memoized_recursion::min_extra_char("azé", &dictionary), Some(1));
}

#[test]
fn test_min_extra_char_long_text() {
    use extra_characters::{dp_hashset, memoized_recursion};

    let dictionary = strings(&["b"]);
    let text = "a".repeat(200_000);
    assert_eq!(memoized_recursion::min_extra_char(&text, &dictionary), None);
    assert_eq!(dp_hashset::min_extra_char(&text, &dictionary), 200_000);

    let text = "ab".repeat(memoized_recursion::MAX_CHARS / 2);
    assert_eq!(
        memoized_recursion::min_extra_char(&text, &dictionary),
        Some(memoized_recursion::MAX_CHARS / 2)
    );

    let challenge = extra_characters::Challenge {
        seed: [0u8; 32],
        text: "a".repeat(memoized_recursion::MAX_CHARS + 1),
        dictionary,
    };
    assert_eq!(memoized_recursion::solve_challenge(&challenge).unwrap(), None);
}

#[test]
fn test_length_of_longest_substring() {
    use longest_substring::{brute_force, last_seen_window, set_window};

    for f in [
        last_seen_window::length_of_longest_substring,
        set_window::length_of_longest_substring,
        brute_force::length_of_longest_substring,
    ] {
        assert_eq!(f("abcabcbb"), 3);
        assert_eq!(f("bbbbb"), 1);
        assert_eq!(f("pwwkew"), 3);
        assert_eq!(f("abba"), 2);
        assert_eq!(f(""), 0);
        assert_eq!(f("日本日本語"), 3);
    }
}
