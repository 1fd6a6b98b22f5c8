//! Scalar-or-collection arguments
//!
//! Tag and custom field operations accept either a single item or a batch.
//! Both shapes normalize to a `Vec` before any processing.

use crate::custom_field::FieldId;

/// Either a single item or a collection of items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Normalizes into a collection
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(items: Vec<T>) -> Self {
        OneOrMany::Many(items)
    }
}

// Tag names

impl From<String> for OneOrMany<String> {
    fn from(name: String) -> Self {
        OneOrMany::One(name)
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(name: &str) -> Self {
        OneOrMany::One(name.to_string())
    }
}

impl From<&String> for OneOrMany<String> {
    fn from(name: &String) -> Self {
        OneOrMany::One(name.clone())
    }
}

impl From<Vec<&str>> for OneOrMany<String> {
    fn from(names: Vec<&str>) -> Self {
        OneOrMany::Many(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for OneOrMany<String> {
    fn from(names: &[&str]) -> Self {
        OneOrMany::Many(names.iter().map(|name| name.to_string()).collect())
    }
}

impl From<&[String]> for OneOrMany<String> {
    fn from(names: &[String]) -> Self {
        OneOrMany::Many(names.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany<String> {
    fn from(names: [&str; N]) -> Self {
        OneOrMany::Many(names.into_iter().map(str::to_string).collect())
    }
}

// Custom field ids

impl From<FieldId> for OneOrMany<FieldId> {
    fn from(id: FieldId) -> Self {
        OneOrMany::One(id)
    }
}

impl From<i64> for OneOrMany<FieldId> {
    fn from(id: i64) -> Self {
        OneOrMany::One(FieldId::Int(id))
    }
}

impl From<&str> for OneOrMany<FieldId> {
    fn from(id: &str) -> Self {
        OneOrMany::One(FieldId::Str(id.to_string()))
    }
}

impl From<Vec<i64>> for OneOrMany<FieldId> {
    fn from(ids: Vec<i64>) -> Self {
        OneOrMany::Many(ids.into_iter().map(FieldId::Int).collect())
    }
}

impl From<&[i64]> for OneOrMany<FieldId> {
    fn from(ids: &[i64]) -> Self {
        OneOrMany::Many(ids.iter().copied().map(FieldId::Int).collect())
    }
}

impl<const N: usize> From<[i64; N]> for OneOrMany<FieldId> {
    fn from(ids: [i64; N]) -> Self {
        OneOrMany::Many(ids.into_iter().map(FieldId::Int).collect())
    }
}
