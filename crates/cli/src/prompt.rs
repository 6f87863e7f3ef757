// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolves questions against the scripted answer queue.
//!
//! Each `ask` consumes at most one answer per attempt and never blocks: an
//! empty queue in interactive mode aborts the execution with
//! [`Error::Aborted`]. Non-interactive inputs get the default straight away.

use crate::color::scheme;
use crate::error::{Error, Result};
use crate::input::ScriptedInput;
use crate::output::BufferedOutput;
use crate::question::{Confirmation, Question};

/// Separator written after a choice list, before the answer.
pub const CHOICE_PROMPT: &str = " > ";

/// A prompt bound to one input/output pair.
pub struct QuestionPrompt<'a> {
    input: &'a mut ScriptedInput,
    output: &'a mut BufferedOutput,
}

impl<'a> QuestionPrompt<'a> {
    pub fn new(input: &'a mut ScriptedInput, output: &'a mut BufferedOutput) -> Self {
        Self { input, output }
    }

    /// Ask `question` and return the resolved answer.
    ///
    /// An absent default resolves to the empty string. Invalid answers are
    /// reported on the error channel and the question is asked again; the
    /// loop ends with `Aborted` when answers run out, or with
    /// `InvalidAnswer` once `max_attempts` is reached.
    pub fn ask(&mut self, question: &Question) -> Result<String> {
        self.ask_with(question, write_prompt)
    }

    /// Ask a yes/no question.
    pub fn confirm(&mut self, question: &Confirmation) -> Result<bool> {
        if !self.input.is_interactive() {
            return Ok(question.default());
        }
        self.output.write(question.text());
        let answer = self.read_answer()?;
        Ok(question.interpret(answer.trim()))
    }

    pub(crate) fn input(&mut self) -> &mut ScriptedInput {
        self.input
    }

    pub(crate) fn output(&mut self) -> &mut BufferedOutput {
        self.output
    }

    /// Shared ask loop; `render` writes the prompt before each attempt.
    pub(crate) fn ask_with(
        &mut self,
        question: &Question,
        render: fn(&mut BufferedOutput, &Question),
    ) -> Result<String> {
        if !self.input.is_interactive() {
            return Ok(question.non_interactive_answer());
        }

        let mut attempts = 0;
        loop {
            attempts += 1;
            render(self.output, question);
            let raw = self.read_answer()?;
            let answer = if question.is_trimmable() { raw.trim() } else { raw.as_str() };
            let candidate = match question.default() {
                Some(default) if answer.is_empty() => default,
                _ => answer,
            };

            match question.validate(candidate) {
                Ok(accepted) => return Ok(accepted),
                Err(message) => {
                    tracing::debug!(attempts, %message, "rejected answer");
                    self.output.writeln_error(&message);
                    if question.max_attempts().is_some_and(|max| attempts >= max) {
                        return Err(Error::InvalidAnswer(message));
                    }
                }
            }
        }
    }

    fn read_answer(&mut self) -> Result<String> {
        match self.input.next_answer() {
            Ok(answer) => {
                tracing::debug!(answer = %answer, "consumed scripted answer");
                Ok(answer)
            }
            Err(Error::InputExhausted) => {
                tracing::debug!("scripted answers exhausted");
                Err(Error::Aborted)
            }
            Err(err) => Err(err),
        }
    }
}

/// Write the question text; choice questions also list their choices.
fn write_prompt(output: &mut BufferedOutput, question: &Question) {
    let Some(choices) = question.choices() else {
        output.write(question.text());
        return;
    };
    output.writeln(question.text());
    write_choices(output, choices);
    output.write(CHOICE_PROMPT);
}

/// One `  [i] choice` line per choice, keys padded to the widest index.
pub(crate) fn write_choices(output: &mut BufferedOutput, choices: &[String]) {
    let width = choices.len().saturating_sub(1).to_string().len();
    for (i, choice) in choices.iter().enumerate() {
        output.write("  [");
        output.write_styled(&format!("{i:<width$}"), &scheme::choice_key());
        output.writeln(&format!("] {choice}"));
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
