//! CSS class lists as structured data instead of ad hoc string
//! appending: an ordered set of tokens, serialized to the
//! space-joined attribute value only when rendering.

use std::fmt::{self, Display};

use itertools::Itertools;
use kstring::KString;

use crate::myfrom::MyFrom;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<KString>);

impl ClassList {
    pub fn new() -> ClassList {
        ClassList(Vec::new())
    }

    /// Parse a space-separated `class` attribute value. Token order
    /// is kept, repeated tokens are dropped.
    pub fn from_attribute(value: &str) -> ClassList {
        let mut classes = ClassList::new();
        for token in value.split_ascii_whitespace() {
            classes.add(token);
        }
        classes
    }

    /// Append `token` unless it is already present (or empty).
    pub fn add<T>(&mut self, token: T)
    where KString: MyFrom<T>
    {
        let token = KString::myfrom(token);
        if token.is_empty() || self.contains(&token) {
            return;
        }
        self.0.push(token);
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t.as_str() == token)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KString> {
        self.0.iter()
    }

    /// The value to put into a `class` attribute.
    pub fn to_attribute(&self) -> KString {
        KString::from_string(self.0.iter().join(" "))
    }
}

impl Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}
