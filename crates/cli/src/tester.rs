// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Execution driver: runs one command against scripted input and keeps
//! what it wrote.
//!
//! Each [`CommandTester::execute`] builds a fresh input and output. Errors
//! from the command, including [`Error::Aborted`], are returned unchanged;
//! the failed run's input and output stay inspectable.
//!
//! Answers installed with [`CommandTester::set_inputs`] are not refilled
//! between executions: a second `execute` without a new `set_inputs` sees
//! whatever the first one left unconsumed.

use std::sync::Arc;

use crate::command::Command;
use crate::error::{Error, Result};
use crate::input::{AnswerQueue, Parameters, ScriptedInput};
use crate::options::ExecuteOptions;
use crate::output::BufferedOutput;

const NOT_EXECUTED: &str = "Output not initialized, did you execute the command before requesting the display?";

/// State recorded by the most recent execution.
struct Execution {
    input: ScriptedInput,
    output: BufferedOutput,
    /// Absent when the command returned an error.
    status: Option<i32>,
}

pub struct CommandTester {
    command: Arc<dyn Command>,
    inputs: Option<AnswerQueue>,
    last: Option<Execution>,
}

impl CommandTester {
    pub fn new<C: Command + 'static>(command: C) -> Self {
        Self::from_arc(Arc::new(command))
    }

    pub fn from_arc(command: Arc<dyn Command>) -> Self {
        Self { command, inputs: None, last: None }
    }

    /// Resolve the command through an injected lookup (e.g. [`crate::Registry::lookup`]).
    pub fn resolve<F>(name: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<Arc<dyn Command>>,
    {
        let command = lookup(name).ok_or_else(|| Error::CommandNotFound(name.to_string()))?;
        Ok(Self::from_arc(command))
    }

    pub fn command(&self) -> &dyn Command {
        self.command.as_ref()
    }

    /// Install the answers prompts will read, in order.
    pub fn set_inputs<I, S>(&mut self, answers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs = Some(AnswerQueue::new(answers));
        self
    }

    /// Run the command once and return its status code.
    pub fn execute(&mut self, parameters: &Parameters, options: ExecuteOptions) -> Result<i32> {
        let previous = self.last.take();
        let answers = match self.inputs.take() {
            Some(answers) => answers,
            None => previous.map(|mut e| e.input.take_remaining_answers()).unwrap_or_default(),
        };

        let name = self.command.name();
        // A failed bind consumed nothing; keep the answers for the next execute.
        let mut input = match ScriptedInput::bind(
            self.command.definition(),
            name,
            parameters,
            options.interactive,
            answers.clone(),
        ) {
            Ok(input) => input,
            Err(err) => {
                self.inputs = Some(answers);
                return Err(err);
            }
        };
        let mut output = BufferedOutput::new(options.verbosity, options.decorated);
        if options.capture_stderr_separately {
            output = output.with_separate_errors();
        }

        tracing::debug!(command = name, ?options, "executing command");
        let result = self.command.execute(&mut input, &mut output);
        match &result {
            Ok(status) => tracing::debug!(command = name, status, "command finished"),
            Err(err) => tracing::debug!(command = name, error = %err, "command failed"),
        }

        self.last = Some(Execution { input, output, status: result.as_ref().ok().copied() });
        result
    }

    /// Everything the last execution wrote to the primary channel.
    pub fn display(&self, normalize: bool) -> Result<String> {
        Ok(self.execution()?.output.contents(normalize))
    }

    /// The separately captured error channel of the last execution.
    pub fn error_output(&self, normalize: bool) -> Result<String> {
        self.execution()?.output.error_contents(normalize)
    }

    pub fn status_code(&self) -> Result<i32> {
        self.execution()?
            .status
            .ok_or(Error::InvalidState("Status code not initialized, the last execution failed."))
    }

    pub fn input(&self) -> Result<&ScriptedInput> {
        Ok(&self.execution()?.input)
    }

    pub fn output(&self) -> Result<&BufferedOutput> {
        Ok(&self.execution()?.output)
    }

    fn execution(&self) -> Result<&Execution> {
        self.last.as_ref().ok_or(Error::InvalidState(NOT_EXECUTED))
    }
}

impl std::fmt::Debug for CommandTester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandTester")
            .field("command", &self.command.name())
            .field("inputs", &self.inputs)
            .field("executed", &self.last.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "tester_tests.rs"]
mod tests;
