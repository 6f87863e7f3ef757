// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rehearse library.
//!
//! Runs console commands against scripted answers and captures what they
//! write, so tests can assert on display text, error text and status code
//! without a terminal.
//!
//! ```
//! use rehearse::{ClosureCommand, CommandTester, ExecuteOptions, Parameters, Question, QuestionPrompt};
//!
//! let command = ClosureCommand::new("hello").code(|input, output| {
//!     let name = QuestionPrompt::new(input, output).ask(&Question::new("Name? "))?;
//!     output.writeln(&format!("Hello {name}"));
//!     Ok(())
//! });
//!
//! let mut tester = CommandTester::new(command);
//! tester.set_inputs(["Bobby"]);
//! assert_eq!(tester.execute(&Parameters::new(), ExecuteOptions::default())?, 0);
//! assert_eq!(tester.display(true)?, "Name? Hello Bobby\n");
//! # Ok::<(), rehearse::Error>(())
//! ```

pub mod builtin;
pub mod cli;
pub mod color;
pub mod command;
pub mod error;
pub mod input;
pub mod options;
pub mod output;
pub mod prompt;
pub mod question;
pub mod registry;
pub mod scenario;
pub mod style;
pub mod tester;
pub mod verbose;
pub mod verbosity;

#[cfg(test)]
pub mod test_utils;

pub use command::{ClosureCommand, Command, IntoStatusCode};
pub use error::{Error, Result};
pub use input::{AnswerQueue, Definition, InputArgument, InputOption, Parameters, ScriptedInput};
pub use options::ExecuteOptions;
pub use output::BufferedOutput;
pub use prompt::QuestionPrompt;
pub use question::{Confirmation, Question};
pub use registry::Registry;
pub use scenario::{Expect, Outcome, Scenario};
pub use style::Style;
pub use tester::CommandTester;
pub use verbosity::Verbosity;
