use core::fmt::{self, Display, Formatter};
use itertools::Itertools;

/// A set of class tokens in their order of appearance.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Parses a class attribute value.
    pub fn parse(value: &str) -> Self {
        Self {
            tokens: value
                .split_ascii_whitespace()
                .unique()
                .map(ToOwned::to_owned)
                .collect(),
        }
    }

    /// Returns `true` if the list contains a token.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|other| other == token)
    }

    /// Returns tokens.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Returns the number of tokens.
    pub const fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the list has no token.
    pub const fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub(crate) fn insert(&mut self, token: &str) {
        if !self.contains(token) {
            self.tokens.push(token.to_owned());
        }
    }
}

impl Display for ClassList {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.tokens.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_empty() {
        assert!(ClassList::parse("").is_empty());
        assert!(ClassList::parse(" \t\n").is_empty());
    }

    #[test]
    fn parse_tokens() {
        let list = ClassList::parse(" foo\tbar\nbaz ");

        assert_eq!(list.iter().collect::<Vec<_>>(), ["foo", "bar", "baz"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn collapse_duplicates() {
        assert_eq!(
            ClassList::parse("b a b a c").iter().collect::<Vec<_>>(),
            ["b", "a", "c"]
        );
    }

    #[test]
    fn insert_token() {
        let mut list = ClassList::parse("foo");

        list.insert("bar");
        list.insert("foo");

        assert_eq!(list.to_string(), "foo bar");
    }

    #[test]
    fn contain_token() {
        let list = ClassList::parse("foo bar");

        assert!(list.contains("foo"));
        assert!(!list.contains("fo"));
    }
}
