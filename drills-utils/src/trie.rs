pub const ALPHABET_SIZE: usize = 26;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: [Option<usize>; ALPHABET_SIZE],
    terminal: bool,
}

/// Prefix tree over lowercase ASCII words.
///
/// Nodes live in a flat arena and link to each other through a fixed 26-slot
/// child table indexed by `byte - b'a'`. Node `0` is the root.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    num_words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

pub fn slot(byte: u8) -> Option<usize> {
    byte.is_ascii_lowercase().then(|| (byte - b'a') as usize)
}

impl Trie {
    pub const ROOT: usize = 0;

    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            num_words: 0,
        }
    }

    /// Builds a trie from `words`, or `None` if any word leaves the alphabet.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Option<Self> {
        let mut trie = Self::new();
        for word in words {
            if !trie.insert(word.as_ref()) {
                return None;
            }
        }
        Some(trie)
    }

    /// Returns `false` (and inserts nothing) if `word` contains a byte outside `a..=z`.
    pub fn insert(&mut self, word: &str) -> bool {
        if !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return false;
        }
        let mut node = Self::ROOT;
        for b in word.bytes() {
            let s = (b - b'a') as usize;
            node = match self.nodes[node].children[s] {
                Some(child) => child,
                None => {
                    self.nodes.push(TrieNode::default());
                    let child = self.nodes.len() - 1;
                    self.nodes[node].children[s] = Some(child);
                    child
                }
            };
        }
        if !self.nodes[node].terminal {
            self.nodes[node].terminal = true;
            self.num_words += 1;
        }
        true
    }

    fn find_node(&self, prefix: &str) -> Option<usize> {
        prefix
            .bytes()
            .try_fold(Self::ROOT, |node, b| self.child(node, b))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find_node(word)
            .is_some_and(|node| self.nodes[node].terminal)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.find_node(prefix).is_some()
    }

    pub fn child(&self, node: usize, byte: u8) -> Option<usize> {
        self.nodes.get(node)?.children[slot(byte)?]
    }

    pub fn is_terminal(&self, node: usize) -> bool {
        self.nodes.get(node).is_some_and(|n| n.terminal)
    }

    pub fn num_words(&self) -> usize {
        self.num_words
    }

    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }

    /// Longest prefix shared by every inserted word: the path from the root
    /// while nodes have a single child and do not end a word.
    pub fn longest_common_prefix(&self) -> String {
        let mut prefix = String::new();
        if self.is_empty() {
            return prefix;
        }
        let mut node = Self::ROOT;
        loop {
            let current = &self.nodes[node];
            if current.terminal {
                break;
            }
            let mut children = current
                .children
                .iter()
                .enumerate()
                .filter_map(|(s, c)| c.map(|c| (s, c)));
            match (children.next(), children.next()) {
                (Some((s, child)), None) => {
                    prefix.push((b'a' + s as u8) as char);
                    node = child;
                }
                _ => break,
            }
        }
        prefix
    }

    /// Lengths of every word in the trie that is a prefix of `text`, shortest first.
    pub fn prefix_lengths<'a>(&'a self, text: &'a [u8]) -> impl Iterator<Item = usize> + 'a {
        let mut node = Some(Self::ROOT);
        text.iter().enumerate().map_while(move |(i, &b)| {
            let next = self.child(node?, b)?;
            node = Some(next);
            Some((i + 1, self.nodes[next].terminal))
        })
        .filter_map(|(len, terminal)| terminal.then_some(len))
    }
}
