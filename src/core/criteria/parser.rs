//! Tokenizer for `<name>:<attribute>:<value>[,<value>...]`
//!
//! The name runs up to the first colon and the attribute up to the second.
//! Everything after that is the value list, which may itself contain colons.

use super::types::MonitorAvailabilityCriteria;
use crate::utils::error::{MonitorError, Result};
use std::str::FromStr;

/// Human readable form of the criteria grammar
pub const CRITERIA_FORMAT: &str = "<name>:<attribute>:<value>[,<value>...]";

struct CriteriaTokens<'a> {
    name: &'a str,
    attribute: &'a str,
    values: Vec<&'a str>,
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_name_char(c: char) -> bool {
    is_word_char(c) || c == '-' || c.is_ascii_whitespace()
}

fn is_attribute_char(c: char) -> bool {
    is_word_char(c) || c == '-'
}

fn tokenize(text: &str) -> std::result::Result<CriteriaTokens<'_>, String> {
    let (name, rest) = text
        .split_once(':')
        .ok_or_else(|| "missing ':' after the monitor entry name".to_string())?;
    let (attribute, values) = rest
        .split_once(':')
        .ok_or_else(|| "missing ':' after the availability attribute".to_string())?;

    if name.is_empty() {
        return Err("monitor entry name is empty".to_string());
    }
    if let Some(c) = name.chars().find(|c| !is_name_char(*c)) {
        return Err(format!("invalid character {:?} in monitor entry name", c));
    }

    if attribute.is_empty() {
        return Err("availability attribute is empty".to_string());
    }
    if let Some(c) = attribute.chars().find(|c| !is_attribute_char(*c)) {
        return Err(format!("invalid character {:?} in availability attribute", c));
    }

    if values.contains(['\n', '\r']) {
        return Err("value list cannot span lines".to_string());
    }
    let values: Vec<&str> = values.split(',').filter(|v| !v.is_empty()).collect();
    if values.is_empty() {
        return Err("no acceptable values given".to_string());
    }

    Ok(CriteriaTokens {
        name,
        attribute,
        values,
    })
}

impl MonitorAvailabilityCriteria {
    /// Parse a criteria from its textual form
    pub fn parse(text: &str) -> Result<Self> {
        let tokens = tokenize(text).map_err(|reason| {
            MonitorError::Config(format!(
                "Monitor criteria '{}' does not match '{}': {}",
                text, CRITERIA_FORMAT, reason
            ))
        })?;

        Ok(Self::new(tokens.name, tokens.attribute, tokens.values))
    }
}

impl FromStr for MonitorAvailabilityCriteria {
    type Err = MonitorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
