// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Name-to-command lookup.
//!
//! Testers never consult a global table; callers hand them a registry (or any
//! lookup function) explicitly.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::command::Command;
use crate::error::{Error, Result};

#[derive(Default)]
pub struct Registry {
    commands: BTreeMap<String, Arc<dyn Command>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under its own name, replacing any previous one.
    pub fn add<C: Command + 'static>(&mut self, command: C) -> &mut Self {
        self.add_arc(Arc::new(command))
    }

    pub fn add_arc(&mut self, command: Arc<dyn Command>) -> &mut Self {
        self.commands.insert(command.name().to_string(), command);
        self
    }

    pub fn find(&self, name: &str) -> Result<Arc<dyn Command>> {
        self.lookup(name).ok_or_else(|| Error::CommandNotFound(name.to_string()))
    }

    /// Lookup usable with [`crate::tester::CommandTester::resolve`].
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.commands.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Command names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Command>> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
