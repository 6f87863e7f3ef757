// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Declared arguments and options of a command.

/// Whether an argument must be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentMode {
    Required,
    Optional,
}

/// How an option takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMode {
    /// A boolean switch (`--force`).
    Flag,
    /// Must carry a value when given (`--name=x`).
    ValueRequired,
    /// May be given bare or with a value.
    ValueOptional,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputArgument {
    pub name: String,
    pub mode: ArgumentMode,
    pub default: Option<String>,
    pub description: String,
}

impl InputArgument {
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode: ArgumentMode::Optional,
            default: None,
            description: String::new(),
        }
    }

    pub fn required(name: impl Into<String>) -> Self {
        Self { mode: ArgumentMode::Required, ..Self::optional(name) }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_required(&self) -> bool {
        self.mode == ArgumentMode::Required
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOption {
    pub name: String,
    pub shortcut: Option<char>,
    pub mode: OptionMode,
    pub default: Option<String>,
    pub description: String,
}

impl InputOption {
    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shortcut: None,
            mode: OptionMode::Flag,
            default: None,
            description: String::new(),
        }
    }

    pub fn value(name: impl Into<String>) -> Self {
        Self { mode: OptionMode::ValueRequired, ..Self::flag(name) }
    }

    pub fn optional_value(name: impl Into<String>) -> Self {
        Self { mode: OptionMode::ValueOptional, ..Self::flag(name) }
    }

    pub fn with_shortcut(mut self, shortcut: char) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_flag(&self) -> bool {
        self.mode == OptionMode::Flag
    }
}

/// Ordered set of declarations a command accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definition {
    arguments: Vec<InputArgument>,
    options: Vec<InputOption>,
}

impl Definition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an argument. A later declaration with the same name replaces the earlier one.
    pub fn add_argument(&mut self, argument: InputArgument) {
        self.arguments.retain(|a| a.name != argument.name);
        self.arguments.push(argument);
    }

    pub fn add_option(&mut self, option: InputOption) {
        self.options.retain(|o| o.name != option.name);
        self.options.push(option);
    }

    pub fn arguments(&self) -> &[InputArgument] {
        &self.arguments
    }

    pub fn options(&self) -> &[InputOption] {
        &self.options
    }

    pub fn argument(&self, name: &str) -> Option<&InputArgument> {
        self.arguments.iter().find(|a| a.name == name)
    }

    pub fn option(&self, name: &str) -> Option<&InputOption> {
        self.options.iter().find(|o| o.name == name)
    }

    pub fn option_by_shortcut(&self, shortcut: char) -> Option<&InputOption> {
        self.options.iter().find(|o| o.shortcut == Some(shortcut))
    }
}
