// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The unit of logic a tester executes.

use crate::error::{Error, Result};
use crate::input::{Definition, InputArgument, InputOption, ScriptedInput};
use crate::output::BufferedOutput;

/// A named command that runs against an input and an output.
///
/// Implementations must finish all work before `execute` returns.
pub trait Command: Send + Sync {
    /// Command name (e.g., "greet").
    fn name(&self) -> &str;

    /// One-line description for listings.
    fn description(&self) -> &str {
        ""
    }

    /// Declared arguments and options.
    fn definition(&self) -> &Definition;

    /// Run the command and return its status code (0 = success).
    fn execute(&self, input: &mut ScriptedInput, output: &mut BufferedOutput) -> Result<i32>;
}

/// Conversion from a command body's return value to a status code.
pub trait IntoStatusCode {
    fn into_status_code(self) -> i32;
}

/// A body that returns nothing succeeded.
impl IntoStatusCode for () {
    fn into_status_code(self) -> i32 {
        0
    }
}

impl IntoStatusCode for i32 {
    fn into_status_code(self) -> i32 {
        self
    }
}

impl IntoStatusCode for bool {
    fn into_status_code(self) -> i32 {
        if self { 0 } else { 1 }
    }
}

type Body = Box<dyn Fn(&mut ScriptedInput, &mut BufferedOutput) -> Result<i32> + Send + Sync>;

/// A command whose body is a closure supplied at construction.
///
/// Anything the body needs must be moved into the closure.
pub struct ClosureCommand {
    name: String,
    description: String,
    definition: Definition,
    body: Option<Body>,
}

impl ClosureCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), description: String::new(), definition: Definition::new(), body: None }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn argument(mut self, argument: InputArgument) -> Self {
        self.definition.add_argument(argument);
        self
    }

    pub fn option(mut self, option: InputOption) -> Self {
        self.definition.add_option(option);
        self
    }

    /// Set the body. It may return `()`, an `i32`, or a `bool`.
    pub fn code<F, R>(mut self, body: F) -> Self
    where
        F: Fn(&mut ScriptedInput, &mut BufferedOutput) -> Result<R> + Send + Sync + 'static,
        R: IntoStatusCode,
    {
        self.body = Some(Box::new(move |input: &mut ScriptedInput, output: &mut BufferedOutput| {
            body(input, output).map(IntoStatusCode::into_status_code)
        }));
        self
    }
}

impl Command for ClosureCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn definition(&self) -> &Definition {
        &self.definition
    }

    fn execute(&self, input: &mut ScriptedInput, output: &mut BufferedOutput) -> Result<i32> {
        match &self.body {
            Some(body) => body(input, output),
            None => Err(Error::MissingCode(self.name.clone())),
        }
    }
}

impl std::fmt::Debug for ClosureCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosureCommand")
            .field("name", &self.name)
            .field("definition", &self.definition)
            .field("has_code", &self.body.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
