//! In-memory read collections keyed by read identifier.
//!
//! [`ReadSet`] behaves like an insertion-ordered map from read id to a
//! [`Read`] (raw sequence + raw quality string). Filtering never mutates a
//! `ReadSet`; it builds a new one from the survivors.

use std::collections::HashMap;

/// One sequencing read as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Read {
    pub sequence: String,
    pub quality: String,
}

impl Read {
    pub fn new(sequence: impl Into<String>, quality: impl Into<String>) -> Self {
        Self {
            sequence: sequence.into(),
            quality: quality.into(),
        }
    }
}

impl<S: Into<String>, Q: Into<String>> From<(S, Q)> for Read {
    fn from((sequence, quality): (S, Q)) -> Self {
        Read::new(sequence, quality)
    }
}

/// Insertion-ordered mapping from read id to [`Read`].
#[derive(Debug, Clone, Default)]
pub struct ReadSet {
    entries: Vec<(String, Read)>,
    index: HashMap<String, usize>,
}

impl ReadSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a read. An existing id keeps its position and the previous
    /// read is returned.
    pub fn insert(&mut self, id: impl Into<String>, read: impl Into<Read>) -> Option<Read> {
        let id = id.into();
        let read = read.into();
        match self.index.get(&id) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, read)),
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, read));
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Read> {
        self.index.get(id).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(id, read)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Read)> {
        self.entries.iter().map(|(id, read)| (id.as_str(), read))
    }

    /// Read ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// A new set holding clones of the reads for which `keep` returns true.
    pub fn select(&self, mut keep: impl FnMut(&Read) -> bool) -> ReadSet {
        self.iter()
            .filter(|(_, read)| keep(read))
            .map(|(id, read)| (id.to_string(), read.clone()))
            .collect()
    }
}

impl PartialEq for ReadSet {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for ReadSet {}

impl<K: Into<String>, R: Into<Read>> FromIterator<(K, R)> for ReadSet {
    fn from_iter<I: IntoIterator<Item = (K, R)>>(iter: I) -> Self {
        let mut set = ReadSet::new();
        set.extend(iter);
        set
    }
}

impl<K: Into<String>, R: Into<Read>> Extend<(K, R)> for ReadSet {
    fn extend<I: IntoIterator<Item = (K, R)>>(&mut self, iter: I) {
        for (id, read) in iter {
            self.insert(id, read);
        }
    }
}

impl IntoIterator for ReadSet {
    type Item = (String, Read);
    type IntoIter = std::vec::IntoIter<(String, Read)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let set: ReadSet = [
            ("r3", ("AC", "II")),
            ("r1", ("GG", "II")),
            ("r2", ("TT", "II")),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.ids().collect::<Vec<_>>(), vec!["r3", "r1", "r2"]);
    }

    #[test]
    fn reinsert_keeps_position() {
        let mut set = ReadSet::new();
        set.insert("a", ("A", "I"));
        set.insert("b", ("C", "I"));
        let old = set.insert("a", ("G", "#"));
        assert_eq!(old, Some(Read::new("A", "I")));
        assert_eq!(set.len(), 2);
        assert_eq!(set.ids().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(set.get("a").unwrap().sequence, "G");
    }

    #[test]
    fn select_builds_new_set() {
        let set: ReadSet = [("a", ("AAAA", "IIII")), ("b", ("AA", "II"))]
            .into_iter()
            .collect();
        let long = set.select(|r| r.sequence.len() > 2);
        assert_eq!(long.len(), 1);
        assert!(long.contains("a"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn missing_id() {
        let set = ReadSet::new();
        assert!(set.get("nope").is_none());
        assert!(set.is_empty());
    }
}
