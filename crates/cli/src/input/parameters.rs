// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pre-parsed parameter values handed to a command.
//!
//! Keys follow the console convention: `--name` and `-n` address options,
//! anything else addresses an argument.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Name-to-value map for one execution, in insertion-independent order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Parameters {
    values: BTreeMap<String, String>,
}

/// A parameter key after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Key<'a> {
    Argument(&'a str),
    Option(&'a str),
    Shortcut(char),
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = (Key<'_>, &str)> {
        self.iter().map(|(k, v)| (classify(k), v))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Parameters::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

fn classify(key: &str) -> Key<'_> {
    if let Some(name) = key.strip_prefix("--") {
        return Key::Option(name);
    }
    if let Some(rest) = key.strip_prefix('-') {
        let mut chars = rest.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Key::Shortcut(c);
        }
        return Key::Option(rest);
    }
    Key::Argument(key)
}

#[cfg(test)]
#[path = "parameters_tests.rs"]
mod tests;
