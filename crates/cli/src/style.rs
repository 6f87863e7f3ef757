// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Styled prompts and message blocks on top of [`QuestionPrompt`].
//!
//! Questions render as ` {text} [{default}]:` on their own line followed by
//! ` > `; interactive answers are followed by a blank line.

use crate::color::scheme;
use crate::error::Result;
use crate::input::ScriptedInput;
use crate::output::BufferedOutput;
use crate::prompt::{CHOICE_PROMPT, QuestionPrompt, write_choices};
use crate::question::{Confirmation, Question};

pub struct Style<'a> {
    prompt: QuestionPrompt<'a>,
}

impl<'a> Style<'a> {
    pub fn new(input: &'a mut ScriptedInput, output: &'a mut BufferedOutput) -> Self {
        Self { prompt: QuestionPrompt::new(input, output) }
    }

    pub fn ask(&mut self, text: &str) -> Result<String> {
        self.ask_question(&Question::new(text))
    }

    pub fn ask_with_default(&mut self, text: &str, default: &str) -> Result<String> {
        self.ask_question(&Question::new(text).with_default(default))
    }

    pub fn choice(&mut self, text: &str, choices: &[&str], default: Option<&str>) -> Result<String> {
        let mut question = Question::choice(text, choices.iter().copied());
        if let Some(default) = default {
            question = question.with_default(default);
        }
        self.ask_question(&question)
    }

    pub fn confirm(&mut self, text: &str, default: bool) -> Result<bool> {
        let confirmation = Confirmation::new(text).with_default(default);
        let question = Question::new(format!("{text} (yes/no)"))
            .with_default(if default { "yes" } else { "no" });
        let answer = self.ask_question(&question)?;
        Ok(confirmation.interpret(&answer))
    }

    pub fn ask_question(&mut self, question: &Question) -> Result<String> {
        let answer = self.prompt.ask_with(question, write_styled_prompt)?;
        if self.prompt.input().is_interactive() {
            self.prompt.output().writeln("");
        }
        Ok(answer)
    }

    /// Plain indented text.
    pub fn text(&mut self, message: &str) {
        self.prompt.output().writeln(&format!(" {message}"));
    }

    pub fn success(&mut self, message: &str) {
        let output = self.prompt.output();
        output.write(" ");
        output.write_styled("[OK]", &scheme::pass());
        output.writeln(&format!(" {message}"));
        output.writeln("");
    }

    /// Error block, written to the error channel.
    pub fn error(&mut self, message: &str) {
        let errors = self.prompt.output().error_output();
        errors.write(" ");
        errors.write_styled("[ERROR]", &scheme::fail());
        errors.writeln(&format!(" {message}"));
        errors.writeln("");
    }
}

fn write_styled_prompt(output: &mut BufferedOutput, question: &Question) {
    output.write(" ");
    output.write_styled(question.text(), &scheme::question());
    if question.default().is_some() {
        output.write(" [");
        output.write_styled(&question.non_interactive_answer(), &scheme::default_value());
        output.write("]");
    }
    output.writeln(":");
    if let Some(choices) = question.choices() {
        write_choices(output, choices);
    }
    output.write(CHOICE_PROMPT);
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
