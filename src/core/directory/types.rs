//! Directory entry, search and filter types

use crate::utils::error::{MonitorError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// DN of the root of the monitoring tree
pub const MONITOR_ROOT_DN: &str = "cn=monitor";

/// Attribute that carries an entry's kinds
pub const OBJECT_CLASS: &str = "objectClass";

/// Wildcard that requests every user attribute
pub const ALL_USER_ATTRIBUTES: &str = "*";

/// How far below the base a search reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Only the base entry itself
    Base,
    /// The base entry and everything below it
    Subtree,
}

/// Search filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// `(attribute=value)`
    Equality { attribute: String, value: String },
    /// `(attribute=*)`
    Present(String),
}

impl Filter {
    pub fn equality(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Equality {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    pub fn present(attribute: impl Into<String>) -> Self {
        Self::Present(attribute.into())
    }

    /// Entries of the given kind
    pub fn object_class(kind: impl Into<String>) -> Self {
        Self::equality(OBJECT_CLASS, kind)
    }

    /// `(objectClass=*)`, which every entry matches
    pub fn any() -> Self {
        Self::present(OBJECT_CLASS)
    }

    /// Attribute the filter is about
    pub fn attribute(&self) -> &str {
        match self {
            Self::Equality { attribute, .. } | Self::Present(attribute) => attribute,
        }
    }

    /// Evaluate the filter against an entry
    ///
    /// Attribute names and values are compared case-insensitively.
    pub fn matches(&self, entry: &DirectoryEntry) -> bool {
        match self {
            Self::Present(attribute) if attribute.eq_ignore_ascii_case(OBJECT_CLASS) => true,
            Self::Present(attribute) => entry.attribute(attribute).is_some(),
            Self::Equality { attribute, value } => entry
                .attribute(attribute)
                .is_some_and(|a| a.values.iter().any(|v| v.eq_ignore_ascii_case(value))),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equality { attribute, value } => {
                write!(f, "({}={})", attribute, escape_filter_value(value))
            }
            Self::Present(attribute) => write!(f, "({}=*)", attribute),
        }
    }
}

/// Escape a filter assertion value (RFC 4515)
pub fn escape_filter_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '*' => escaped.push_str("\\2a"),
            '(' => escaped.push_str("\\28"),
            ')' => escaped.push_str("\\29"),
            '\\' => escaped.push_str("\\5c"),
            '\0' => escaped.push_str("\\00"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// One attribute of an entry with its values in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub values: Vec<String>,
}

impl Attribute {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// An entry returned by a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    dn: String,
    attributes: Vec<Attribute>,
}

impl DirectoryEntry {
    pub fn new(dn: impl Into<String>) -> Self {
        Self {
            dn: dn.into(),
            attributes: Vec::new(),
        }
    }

    /// Add values to an attribute, creating it if needed
    pub fn with_attribute<I, S>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_values(name, values);
        self
    }

    pub fn add_values<I, S>(&mut self, name: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into);
        match self
            .attributes
            .iter_mut()
            .find(|a| a.name.eq_ignore_ascii_case(name))
        {
            Some(attribute) => attribute.values.extend(values),
            None => self.attributes.push(Attribute::new(name, values)),
        }
    }

    pub fn dn(&self) -> &str {
        &self.dn
    }

    /// Attributes in the order the entry holds them
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Attribute by name, matched the way a directory matches attribute types
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// First value of an attribute
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attribute(name)
            .and_then(|a| a.values.first())
            .map(String::as_str)
    }

    /// All values of an attribute, empty when the attribute is absent
    pub fn attribute_values(&self, name: &str) -> &[String] {
        self.attribute(name).map(|a| a.values.as_slice()).unwrap_or(&[])
    }

    /// First value of an attribute read as an integer
    pub fn attribute_value_as_integer(&self, name: &str) -> Result<Option<i64>> {
        match self.attribute_value(name) {
            None => Ok(None),
            Some(value) => value.trim().parse::<i64>().map(Some).map_err(|_| {
                MonitorError::encoding(format!(
                    "Value '{}' of attribute {} in entry {} is not an integer",
                    value, name, self.dn
                ))
            }),
        }
    }

    /// Copy of the entry restricted to the requested attributes
    ///
    /// An empty request or `*` keeps every attribute.
    pub(crate) fn select(&self, requested: &[&str]) -> Self {
        if requested.is_empty() || requested.contains(&ALL_USER_ATTRIBUTES) {
            return self.clone();
        }

        Self {
            dn: self.dn.clone(),
            attributes: self
                .attributes
                .iter()
                .filter(|a| requested.iter().any(|r| r.eq_ignore_ascii_case(&a.name)))
                .cloned()
                .collect(),
        }
    }
}

/// Read access to a monitoring tree
#[async_trait]
pub trait MonitorDirectory: Send + Sync {
    /// Search below `base` and return the matching entries
    ///
    /// A base entry that does not exist yields an empty result rather than an
    /// error.
    async fn search(
        &self,
        base: &str,
        scope: SearchScope,
        filter: &Filter,
        attributes: &[&str],
    ) -> Result<Vec<DirectoryEntry>>;
}
