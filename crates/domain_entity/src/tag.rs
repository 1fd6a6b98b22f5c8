//! Tags
//!
//! Tags on a record form a set keyed by name that remembers insertion
//! order. The wire format for writes is a bare list of names; the
//! in-memory entry is an object so server-returned tags hydrate directly.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;

/// A tag attached to a record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Ordered tag set, unique by name
#[derive(Debug, Clone, Default)]
pub struct Tags {
    entries: Vec<Tag>,
    names: HashSet<String>,
}

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[Tag] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.entries.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Tag names in order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|tag| tag.name.as_str()).collect()
    }

    /// Appends `name` unless it is already present. Returns whether it was added.
    pub fn add(&mut self, name: String) -> bool {
        if self.names.contains(&name) {
            return false;
        }
        self.names.insert(name.clone());
        self.entries.push(Tag { name });
        true
    }

    /// Removes every tag whose name is in `names`. Returns how many were removed.
    pub fn remove_all(&mut self, names: &[String]) -> usize {
        let doomed: HashSet<&str> = names.iter().map(String::as_str).collect();
        let before = self.entries.len();
        self.entries.retain(|tag| !doomed.contains(tag.name.as_str()));
        for name in &doomed {
            self.names.remove(*name);
        }
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.names.clear();
    }
}

impl PartialEq for Tags {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl FromIterator<Tag> for Tags {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut tags = Self::new();
        for tag in iter {
            tags.add(tag.name);
        }
        tags
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for Tags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.entries.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut tags = Tags::new();
        assert!(tags.add("vip".to_string()));
        assert!(!tags.add("vip".to_string()));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_remove_keeps_order_of_survivors() {
        let mut tags: Tags = ["a", "b", "c", "d"].into_iter().map(Tag::new).collect();
        let removed = tags.remove_all(&["b".to_string(), "zzz".to_string()]);
        assert_eq!(removed, 1);
        assert_eq!(tags.names(), vec!["a", "c", "d"]);
        assert!(!tags.contains("b"));
    }

    #[test]
    fn test_from_iter_collapses_duplicates() {
        let tags: Tags = ["x", "y", "x"].into_iter().map(Tag::new).collect();
        assert_eq!(tags.names(), vec!["x", "y"]);
    }
}
