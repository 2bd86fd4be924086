//! Persistent (immutable) prefix tree over string keys.
//!
//! This module provides [`PersistentTrie`], an immutable set of words that
//! shares common prefixes between entries and whole subtrees between
//! versions.
//!
//! # Overview
//!
//! Each node carries a terminal flag (a stored word ends here) and a child
//! table sorted by character. The table lives in a [`SmallVec`] so the
//! common case of a handful of children needs no extra allocation. Mutating
//! operations copy only the nodes along the affected word's path; `remove`
//! prunes nodes that end up childless and non-terminal on the way back up.
//!
//! # Examples
//!
//! ```rust
//! use permafrost::persistent::PersistentTrie;
//!
//! let trie: PersistentTrie = ["car", "cart", "cat"].into_iter().collect();
//!
//! assert!(trie.contains("car"));
//! assert!(trie.contains_prefix("ca"));
//! assert!(!trie.contains("ca"));
//!
//! let trimmed = trie.remove("cart");
//! assert_eq!(trie.len(), 3);    // Original unchanged
//! assert_eq!(trimmed.len(), 2); // New version
//! ```

use std::fmt;
use std::str::Chars;

use smallvec::SmallVec;

use super::ReferenceCounter;

/// Inline capacity of a node's child table.
///
/// Natural-language tries branch narrowly below the first level, so most
/// child tables fit inline without a heap allocation.
const CHILD_INLINE_CAPACITY: usize = 4;

/// Child table: `(character, node)` pairs kept sorted by character.
type Children = SmallVec<[(char, ReferenceCounter<Node>); CHILD_INLINE_CAPACITY]>;

// =============================================================================
// Node Definition
// =============================================================================

/// Internal node structure for the trie.
#[derive(Clone)]
struct Node {
    /// True when a stored word ends at this node.
    terminal: bool,
    /// Children sorted by character for ordered traversal.
    children: Children,
}

impl Node {
    /// Creates a non-terminal node with no children.
    fn empty() -> Self {
        Self {
            terminal: false,
            children: SmallVec::new(),
        }
    }

    /// Looks up the child reached through the given character.
    fn child(&self, character: char) -> Option<&ReferenceCounter<Self>> {
        self.children
            .binary_search_by_key(&character, |(existing, _)| *existing)
            .ok()
            .map(|position| &self.children[position].1)
    }

    /// Creates a copy of this node with the given child replaced or added at
    /// its sorted position.
    fn with_child(&self, character: char, child: ReferenceCounter<Self>) -> Self {
        let mut children = self.children.clone();
        match children.binary_search_by_key(&character, |(existing, _)| *existing) {
            Ok(position) => children[position].1 = child,
            Err(position) => children.insert(position, (character, child)),
        }
        Self {
            terminal: self.terminal,
            children,
        }
    }

    /// Creates a copy of this node without the given child.
    fn without_child(&self, character: char) -> Self {
        let mut children = self.children.clone();
        if let Ok(position) =
            children.binary_search_by_key(&character, |(existing, _)| *existing)
        {
            children.remove(position);
        }
        Self {
            terminal: self.terminal,
            children,
        }
    }

    /// Returns `true` if this node holds no word end and no children, which
    /// makes it prunable.
    fn is_prunable(&self) -> bool {
        !self.terminal && self.children.is_empty()
    }
}

// =============================================================================
// PersistentTrie Definition
// =============================================================================

/// A persistent (immutable) prefix tree storing a set of words.
///
/// `PersistentTrie` shares common prefixes between stored words and shares
/// unchanged subtrees between versions. Inserting a word that is already
/// present is idempotent.
///
/// # Time Complexity
///
/// | Operation         | Complexity |
/// |-------------------|------------|
/// | `insert`          | O(k)       |
/// | `remove`          | O(k)       |
/// | `contains`        | O(k)       |
/// | `contains_prefix` | O(k)       |
/// | `len`             | O(1)       |
///
/// k is the word length in characters; child lookups within a node are
/// logarithmic in its (typically tiny) child count.
///
/// # Examples
///
/// ```rust
/// use permafrost::persistent::PersistentTrie;
///
/// let trie = PersistentTrie::new().insert("rust").insert("rune");
/// assert_eq!(trie.len(), 2);
/// assert_eq!(trie.words(), vec!["rune".to_string(), "rust".to_string()]);
/// ```
#[derive(Clone)]
pub struct PersistentTrie {
    /// Root node; represents the empty prefix and is never pruned.
    root: ReferenceCounter<Node>,
    /// Cached word count.
    length: usize,
}

impl PersistentTrie {
    /// Creates a new empty trie.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentTrie;
    ///
    /// let trie = PersistentTrie::new();
    /// assert!(trie.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: ReferenceCounter::new(Node::empty()),
            length: 0,
        }
    }

    /// Returns the number of words in the trie.
    ///
    /// # Complexity
    ///
    /// O(1) - the count is cached
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentTrie;
    ///
    /// let trie = PersistentTrie::new().insert("a").insert("b");
    /// assert_eq!(trie.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the trie contains no words.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentTrie;
    ///
    /// assert!(PersistentTrie::new().is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns a new trie with the word inserted.
    ///
    /// Inserting a word that is already present is idempotent: the returned
    /// trie equals the original and the count is unchanged. The empty string
    /// is a valid word, stored as a terminal flag on the root.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert
    ///
    /// # Complexity
    ///
    /// O(k) where k = `word.chars().count()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentTrie;
    ///
    /// let trie = PersistentTrie::new().insert("rust");
    /// assert!(trie.contains("rust"));
    ///
    /// let same = trie.insert("rust");
    /// assert_eq!(same.len(), 1);
    /// ```
    #[must_use]
    pub fn insert(&self, word: &str) -> Self {
        let (new_root, added) = Self::insert_into_node(self.root.as_ref(), word.chars());
        Self {
            root: ReferenceCounter::new(new_root),
            length: if added { self.length + 1 } else { self.length },
        }
    }

    /// Recursive helper for insert.
    /// Returns (`new_node`, `was_added`) where `was_added` is false for duplicates.
    fn insert_into_node(node: &Node, mut characters: Chars<'_>) -> (Node, bool) {
        match characters.next() {
            None => {
                let added = !node.terminal;
                let new_node = Node {
                    terminal: true,
                    children: node.children.clone(),
                };
                (new_node, added)
            }
            Some(character) => {
                let (new_child, added) = match node.child(character) {
                    Some(child) => Self::insert_into_node(child.as_ref(), characters),
                    None => Self::insert_into_node(&Node::empty(), characters),
                };
                (
                    node.with_child(character, ReferenceCounter::new(new_child)),
                    added,
                )
            }
        }
    }

    /// Returns a new trie with the word removed.
    ///
    /// Removing an absent word returns an equal trie. Nodes left childless
    /// and non-terminal by the removal are pruned on the way back up, so a
    /// trie never retains dead branches.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to remove
    ///
    /// # Complexity
    ///
    /// O(k) where k = `word.chars().count()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentTrie;
    ///
    /// let trie: PersistentTrie = ["car", "cart"].into_iter().collect();
    /// let trimmed = trie.remove("cart");
    ///
    /// assert!(trie.contains("cart"));     // Original unchanged
    /// assert!(!trimmed.contains("cart"));
    /// assert!(trimmed.contains("car"));
    /// ```
    #[must_use]
    pub fn remove(&self, word: &str) -> Self {
        if !self.contains(word) {
            return self.clone();
        }

        let new_root = Self::remove_from_node(self.root.as_ref(), word.chars())
            .unwrap_or_else(Node::empty);
        Self {
            root: ReferenceCounter::new(new_root),
            length: self.length.saturating_sub(1),
        }
    }

    /// Recursive helper for remove.
    /// Returns `None` when the rebuilt node is prunable.
    fn remove_from_node(node: &Node, mut characters: Chars<'_>) -> Option<Node> {
        match characters.next() {
            None => {
                let new_node = Node {
                    terminal: false,
                    children: node.children.clone(),
                };
                (!new_node.is_prunable()).then_some(new_node)
            }
            Some(character) => {
                let Some(child) = node.child(character) else {
                    return Some(node.clone());
                };
                let new_node = match Self::remove_from_node(child.as_ref(), characters) {
                    Some(new_child) => {
                        node.with_child(character, ReferenceCounter::new(new_child))
                    }
                    None => node.without_child(character),
                };
                (!new_node.is_prunable()).then_some(new_node)
            }
        }
    }

    /// Returns `true` if the trie contains the given word.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to look for
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentTrie;
    ///
    /// let trie = PersistentTrie::new().insert("cart");
    /// assert!(trie.contains("cart"));
    /// assert!(!trie.contains("car")); // Prefix of a word, not a word
    /// ```
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.find_node(word).is_some_and(|node| node.terminal)
    }

    /// Returns `true` if any stored word starts with the given prefix.
    ///
    /// Every word is a prefix of itself, and the empty prefix matches any
    /// non-empty trie.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to look for
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentTrie;
    ///
    /// let trie = PersistentTrie::new().insert("cart");
    /// assert!(trie.contains_prefix("ca"));
    /// assert!(trie.contains_prefix("cart"));
    /// assert!(!trie.contains_prefix("cat"));
    /// ```
    #[must_use]
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        self.find_node(prefix).is_some()
    }

    /// Walks the trie along the given path.
    fn find_node(&self, path: &str) -> Option<&Node> {
        let mut current: &Node = self.root.as_ref();
        for character in path.chars() {
            current = current.child(character)?.as_ref();
        }
        Some(current)
    }

    /// Returns all stored words in lexicographic order.
    ///
    /// # Complexity
    ///
    /// O(total characters stored)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentTrie;
    ///
    /// let trie: PersistentTrie = ["cat", "car"].into_iter().collect();
    /// assert_eq!(trie.words(), vec!["car".to_string(), "cat".to_string()]);
    /// ```
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.length);
        let mut prefix = String::new();
        Self::collect_words(self.root.as_ref(), &mut prefix, &mut words);
        words
    }

    /// Depth-first collection; sorted child tables make the output
    /// lexicographic.
    fn collect_words(node: &Node, prefix: &mut String, words: &mut Vec<String>) {
        if node.terminal {
            words.push(prefix.clone());
        }
        for (character, child) in &node.children {
            prefix.push(*character);
            Self::collect_words(child.as_ref(), prefix, words);
            prefix.pop();
        }
    }

    /// Returns an iterator over the stored words in lexicographic order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentTrie;
    ///
    /// let trie: PersistentTrie = ["b", "a"].into_iter().collect();
    /// let collected: Vec<String> = trie.iter().collect();
    /// assert_eq!(collected, vec!["a".to_string(), "b".to_string()]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> std::vec::IntoIter<String> {
        self.words().into_iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl Default for PersistentTrie {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FromIterator<&'a str> for PersistentTrie {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut trie = Self::new();
        for word in iter {
            trie = trie.insert(word);
        }
        trie
    }
}

impl FromIterator<String> for PersistentTrie {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut trie = Self::new();
        for word in iter {
            trie = trie.insert(&word);
        }
        trie
    }
}

impl IntoIterator for PersistentTrie {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words().into_iter()
    }
}

impl<'a> IntoIterator for &'a PersistentTrie {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for PersistentTrie {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.words() == other.words()
    }
}

impl Eq for PersistentTrie {}

impl fmt::Debug for PersistentTrie {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.words()).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Construction Tests
    // =========================================================================

    #[rstest]
    fn test_new_creates_empty() {
        let trie = PersistentTrie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
        assert!(trie.words().is_empty());
    }

    #[rstest]
    fn test_from_iter_of_str() {
        let trie: PersistentTrie = ["cat", "car", "dog"].into_iter().collect();
        assert_eq!(trie.len(), 3);
        assert!(trie.contains("car"));
    }

    #[rstest]
    fn test_from_iter_of_string() {
        let words = vec!["cat".to_string(), "car".to_string()];
        let trie: PersistentTrie = words.into_iter().collect();
        assert_eq!(trie.len(), 2);
    }

    // =========================================================================
    // Insert Tests
    // =========================================================================

    #[rstest]
    fn test_insert_grows_count() {
        let trie = PersistentTrie::new().insert("a").insert("b");
        assert_eq!(trie.len(), 2);
    }

    #[rstest]
    fn test_insert_duplicate_is_idempotent() {
        let trie = PersistentTrie::new().insert("rust");
        let same = trie.insert("rust");

        assert_eq!(same.len(), 1);
        assert_eq!(same, trie);
    }

    #[rstest]
    fn test_insert_shares_prefix_between_words() {
        let trie: PersistentTrie = ["car", "cart", "cat"].into_iter().collect();
        assert_eq!(trie.len(), 3);
        assert!(trie.contains_prefix("ca"));
    }

    #[rstest]
    fn test_insert_leaves_original_unchanged() {
        let original = PersistentTrie::new().insert("car");
        let extended = original.insert("cat");

        assert_eq!(original.len(), 1);
        assert!(!original.contains("cat"));
        assert_eq!(extended.len(), 2);
        assert!(extended.contains("cat"));
    }

    #[rstest]
    fn test_insert_empty_word() {
        let trie = PersistentTrie::new().insert("");
        assert_eq!(trie.len(), 1);
        assert!(trie.contains(""));
        assert_eq!(trie.words(), vec![String::new()]);
    }

    #[rstest]
    fn test_insert_prefix_of_existing_word() {
        let trie = PersistentTrie::new().insert("cart").insert("car");
        assert_eq!(trie.len(), 2);
        assert!(trie.contains("car"));
        assert!(trie.contains("cart"));
    }

    // =========================================================================
    // Remove Tests
    // =========================================================================

    #[rstest]
    fn test_remove_word_keeps_shared_prefix() {
        let trie: PersistentTrie = ["car", "cart", "cat"].into_iter().collect();
        let trimmed = trie.remove("cart");

        assert_eq!(trimmed.len(), 2);
        assert!(!trimmed.contains("cart"));
        assert!(trimmed.contains("car"));
        assert!(trimmed.contains("cat"));
    }

    #[rstest]
    fn test_remove_prefix_word_keeps_longer_word() {
        let trie: PersistentTrie = ["car", "cart"].into_iter().collect();
        let trimmed = trie.remove("car");

        assert!(!trimmed.contains("car"));
        assert!(trimmed.contains("cart"));
        assert!(trimmed.contains_prefix("car"));
    }

    #[rstest]
    fn test_remove_prunes_dead_branch() {
        let trie = PersistentTrie::new().insert("abc");
        let trimmed = trie.remove("abc");

        assert!(trimmed.is_empty());
        assert!(!trimmed.contains_prefix("a"));
    }

    #[rstest]
    fn test_remove_absent_word_returns_equal_trie() {
        let trie = PersistentTrie::new().insert("car");
        let same = trie.remove("cat");

        assert_eq!(same.len(), 1);
        assert_eq!(same, trie);
    }

    #[rstest]
    fn test_remove_leaves_original_unchanged() {
        let original: PersistentTrie = ["car", "cat"].into_iter().collect();
        let trimmed = original.remove("car");

        assert_eq!(original.len(), 2);
        assert!(original.contains("car"));
        assert_eq!(trimmed.len(), 1);
    }

    // =========================================================================
    // Query Tests
    // =========================================================================

    #[rstest]
    #[case("car", true)]
    #[case("cart", true)]
    #[case("ca", false)]
    #[case("carts", false)]
    #[case("dog", false)]
    fn test_contains_matches_whole_words_only(#[case] word: &str, #[case] expected: bool) {
        let trie: PersistentTrie = ["car", "cart"].into_iter().collect();
        assert_eq!(trie.contains(word), expected);
    }

    #[rstest]
    #[case("", true)]
    #[case("c", true)]
    #[case("cart", true)]
    #[case("cat", false)]
    fn test_contains_prefix(#[case] prefix: &str, #[case] expected: bool) {
        let trie: PersistentTrie = ["car", "cart"].into_iter().collect();
        assert_eq!(trie.contains_prefix(prefix), expected);
    }

    #[rstest]
    fn test_contains_prefix_on_empty_trie() {
        let trie = PersistentTrie::new();
        assert!(!trie.contains_prefix(""));
        assert!(!trie.contains_prefix("a"));
    }

    #[rstest]
    fn test_words_are_lexicographic() {
        let trie: PersistentTrie = ["dog", "cat", "car", "cart"].into_iter().collect();
        assert_eq!(
            trie.words(),
            vec![
                "car".to_string(),
                "cart".to_string(),
                "cat".to_string(),
                "dog".to_string(),
            ]
        );
    }

    #[rstest]
    fn test_iter_yields_words_in_order() {
        let trie: PersistentTrie = ["b", "a", "c"].into_iter().collect();
        let collected: Vec<String> = trie.iter().collect();
        assert_eq!(
            collected,
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    // =========================================================================
    // Standard Trait Tests
    // =========================================================================

    #[rstest]
    fn test_eq_ignores_insertion_order() {
        let trie1: PersistentTrie = ["a", "b"].into_iter().collect();
        let trie2: PersistentTrie = ["b", "a"].into_iter().collect();
        let trie3: PersistentTrie = ["a", "c"].into_iter().collect();

        assert_eq!(trie1, trie2);
        assert_ne!(trie1, trie3);
    }

    #[rstest]
    fn test_default_is_empty() {
        assert!(PersistentTrie::default().is_empty());
    }

    #[rstest]
    fn test_debug_lists_words() {
        let trie: PersistentTrie = ["b", "a"].into_iter().collect();
        assert_eq!(format!("{trie:?}"), r#"{"a", "b"}"#);
    }
}
