// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commands bundled with the `rehearse` binary.

use crate::command::ClosureCommand;
use crate::input::{InputArgument, InputOption};
use crate::prompt::QuestionPrompt;
use crate::question::Question;
use crate::registry::Registry;
use crate::style::Style;

/// Registry holding every built-in command.
pub fn registry() -> Registry {
    let mut registry = Registry::new();
    registry.add(greet()).add(pick()).add(echo());
    registry
}

/// Asks three questions and prints a greeting built from the answers.
pub fn greet() -> ClosureCommand {
    ClosureCommand::new("greet")
        .with_description("Ask who you are and greet you")
        .option(InputOption::flag("yell").with_shortcut('y').with_description("Shout the greeting"))
        .code(|input, output| {
            let yell = input.flag("yell")?;
            let mut prompt = QuestionPrompt::new(input, output);
            let name = prompt.ask(&Question::new("What's your name?").with_default("stranger"))?;
            let mood = prompt.ask(&Question::new("How are you?").with_default("fine"))?;
            let origin =
                prompt.ask(&Question::new("Where do you come from?").with_default("nowhere"))?;

            let mut greeting = format!("Hello {name}, glad you are {mood}. Greetings to {origin}!");
            if yell {
                greeting = greeting.to_uppercase();
            }
            output.writeln("");
            output.writeln(&greeting);
            if output.is_verbose() {
                output.writeln("(asked 3 questions)");
            }
            Ok(())
        })
}

/// Asks for a color from a closed list and confirms it.
pub fn pick() -> ClosureCommand {
    ClosureCommand::new("pick")
        .with_description("Pick a color from a list")
        .code(|input, output| {
            let mut io = Style::new(input, output);
            let color = io.choice("Pick a color", &["red", "green", "blue"], Some("0"))?;
            if !io.confirm(&format!("Use {color}?"), true)? {
                io.error("Nothing picked.");
                return Ok(1);
            }
            io.success(&format!("You picked {color}."));
            Ok(0)
        })
}

/// Prints its `message` argument to stdout or the error channel.
pub fn echo() -> ClosureCommand {
    ClosureCommand::new("echo")
        .with_description("Print a message")
        .argument(InputArgument::required("message").with_description("Text to print"))
        .option(InputOption::flag("stderr").with_description("Write to the error channel"))
        .code(|input, output| {
            let message = input.argument("message")?.unwrap_or_default().to_string();
            if output.is_verbose() {
                output.writeln(&format!("echoing {} characters", message.chars().count()));
            }
            if input.flag("stderr")? {
                output.write_error(&message);
            } else {
                output.write(&message);
            }
            Ok(())
        })
}

#[cfg(test)]
#[path = "builtin_tests.rs"]
mod tests;
