// src/matching/input.rs
use std::fmt::Display;

/// One side of a comparison: a single name, a list of variants (aliases,
/// alternate spellings) for the same entity, or nothing at all.
///
/// Values are coerced to strings once, here, so the scoring code only ever
/// sees `&str`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameInput {
    Missing,
    Single(String),
    Variants(Vec<String>),
}

impl NameInput {
    pub fn variants<T: Display>(values: impl IntoIterator<Item = T>) -> Self {
        NameInput::Variants(values.into_iter().map(|v| v.to_string()).collect())
    }

    /// True when there is nothing to compare: missing, an empty string, or an
    /// empty variant list.
    pub fn is_empty(&self) -> bool {
        match self {
            NameInput::Missing => true,
            NameInput::Single(name) => name.is_empty(),
            NameInput::Variants(names) => names.is_empty(),
        }
    }

    pub fn names(&self) -> &[String] {
        match self {
            NameInput::Missing => &[],
            NameInput::Single(name) => std::slice::from_ref(name),
            NameInput::Variants(names) => names,
        }
    }
}

impl From<&str> for NameInput {
    fn from(name: &str) -> Self {
        NameInput::Single(name.to_string())
    }
}

impl From<String> for NameInput {
    fn from(name: String) -> Self {
        NameInput::Single(name)
    }
}

impl From<&String> for NameInput {
    fn from(name: &String) -> Self {
        NameInput::Single(name.clone())
    }
}

impl<T: Display> From<Vec<T>> for NameInput {
    fn from(values: Vec<T>) -> Self {
        NameInput::variants(values)
    }
}

impl<T: Display> From<&[T]> for NameInput {
    fn from(values: &[T]) -> Self {
        NameInput::variants(values)
    }
}

impl<T: Display, const N: usize> From<[T; N]> for NameInput {
    fn from(values: [T; N]) -> Self {
        NameInput::variants(values)
    }
}

impl<T: Into<NameInput>> From<Option<T>> for NameInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(NameInput::Missing, Into::into)
    }
}
