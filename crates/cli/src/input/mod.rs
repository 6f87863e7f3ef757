// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted stand-in for terminal input.
//!
//! Holds the bound argument and option values of one execution, the
//! interactivity flag, and the queue of scripted answers prompts draw from.

mod answers;
mod definition;
mod parameters;

use std::collections::BTreeMap;

pub use answers::AnswerQueue;
pub use definition::{ArgumentMode, Definition, InputArgument, InputOption, OptionMode};
pub use parameters::Parameters;

use crate::error::{Error, Result};
use parameters::Key;

/// Name of the argument that receives the command name when left unset.
pub const COMMAND_ARGUMENT: &str = "command";

/// Bound input for a single execution.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    definition: Definition,
    arguments: BTreeMap<String, Option<String>>,
    options: BTreeMap<String, Option<String>>,
    interactive: bool,
    answers: AnswerQueue,
}

impl ScriptedInput {
    /// Bind `parameters` against `definition`.
    ///
    /// Unset parameters take their declared default. An unset `command`
    /// argument takes `command_name`.
    pub fn bind(
        definition: &Definition,
        command_name: &str,
        parameters: &Parameters,
        interactive: bool,
        answers: AnswerQueue,
    ) -> Result<Self> {
        let mut arguments: BTreeMap<String, Option<String>> = BTreeMap::new();
        let mut options: BTreeMap<String, Option<String>> = BTreeMap::new();

        for (key, value) in parameters.keys() {
            match key {
                Key::Argument(name) => {
                    if definition.argument(name).is_none() {
                        return Err(Error::undeclared_argument(name));
                    }
                    arguments.insert(name.to_string(), Some(value.to_string()));
                }
                Key::Option(name) => {
                    let option =
                        definition.option(name).ok_or_else(|| Error::undeclared_option(name))?;
                    options.insert(option.name.clone(), bind_option_value(option, value)?);
                }
                Key::Shortcut(c) => {
                    let option = definition
                        .option_by_shortcut(c)
                        .ok_or_else(|| Error::undeclared_option(&c.to_string()))?;
                    options.insert(option.name.clone(), bind_option_value(option, value)?);
                }
            }
        }

        let mut missing = Vec::new();
        for argument in definition.arguments() {
            if arguments.contains_key(&argument.name) {
                continue;
            }
            if argument.name == COMMAND_ARGUMENT {
                arguments.insert(argument.name.clone(), Some(command_name.to_string()));
            } else if argument.is_required() {
                missing.push(argument.name.clone());
            } else {
                arguments.insert(argument.name.clone(), argument.default.clone());
            }
        }
        if !missing.is_empty() {
            return Err(Error::MissingArguments(missing));
        }

        for option in definition.options() {
            if !options.contains_key(&option.name) {
                let default = if option.is_flag() {
                    Some(option.default.clone().unwrap_or_else(|| "false".to_string()))
                } else {
                    option.default.clone()
                };
                options.insert(option.name.clone(), default);
            }
        }

        tracing::debug!(
            arguments = arguments.len(),
            options = options.len(),
            answers = answers.remaining().len(),
            interactive,
            "bound input"
        );

        Ok(Self { definition: definition.clone(), arguments, options, interactive, answers })
    }

    /// Value of a declared argument (`None` when unset without default).
    pub fn argument(&self, name: &str) -> Result<Option<&str>> {
        self.arguments
            .get(name)
            .map(|v| v.as_deref())
            .ok_or_else(|| Error::undeclared_argument(name))
    }

    /// Value of a declared option (`"true"`/`"false"` for flags).
    pub fn option(&self, name: &str) -> Result<Option<&str>> {
        self.options.get(name).map(|v| v.as_deref()).ok_or_else(|| Error::undeclared_option(name))
    }

    /// Whether a flag option is set.
    pub fn flag(&self, name: &str) -> Result<bool> {
        Ok(self.option(name)? == Some("true"))
    }

    pub fn arguments(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.arguments.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn options(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Pop the next scripted answer.
    pub fn next_answer(&mut self) -> Result<String> {
        match self.answers.pop() {
            Some(answer) => Ok(answer.to_string()),
            None => Err(Error::InputExhausted),
        }
    }

    pub fn answers(&self) -> &AnswerQueue {
        &self.answers
    }

    /// Hand the unconsumed answers to the next execution.
    pub(crate) fn take_remaining_answers(&mut self) -> AnswerQueue {
        std::mem::take(&mut self.answers).into_remaining()
    }
}

fn bind_option_value(option: &InputOption, value: &str) -> Result<Option<String>> {
    match option.mode {
        OptionMode::Flag => match value {
            "true" | "" => Ok(Some("true".to_string())),
            "false" => Ok(Some("false".to_string())),
            other => Err(Error::InvalidOptionValue {
                name: option.name.clone(),
                reason: format!("the flag does not accept the value \"{other}\""),
            }),
        },
        OptionMode::ValueRequired if value.is_empty() => Err(Error::InvalidOptionValue {
            name: option.name.clone(),
            reason: "a value is required".to_string(),
        }),
        OptionMode::ValueOptional if value.is_empty() => Ok(option.default.clone()),
        _ => Ok(Some(value.to_string())),
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
