// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Questions a command can ask through the prompt.

/// Custom validation: the accepted (possibly normalized) value, or a message.
pub type Validator = Box<dyn Fn(&str) -> Result<String, String> + Send + Sync>;

/// A single prompt: text, optional default, optional closed set of choices.
pub struct Question {
    text: String,
    default: Option<String>,
    choices: Option<Vec<String>>,
    validator: Option<Validator>,
    max_attempts: Option<usize>,
    trimmable: bool,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            default: None,
            choices: None,
            validator: None,
            max_attempts: None,
            trimmable: true,
        }
    }

    /// A question restricted to `choices`.
    ///
    /// Answers match a choice exactly, by zero-based index, or by a unique
    /// case-insensitive match, in that order.
    pub fn choice<I, S>(text: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { choices: Some(choices.into_iter().map(Into::into).collect()), ..Self::new(text) }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Run `validator` on every candidate answer after choice matching.
    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> Result<String, String> + Send + Sync + 'static,
    {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Stop re-asking after `attempts` invalid answers (unlimited by default).
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts.max(1));
        self
    }

    /// Keep surrounding whitespace in answers.
    pub fn without_trimming(mut self) -> Self {
        self.trimmable = false;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn choices(&self) -> Option<&[String]> {
        self.choices.as_deref()
    }

    pub fn max_attempts(&self) -> Option<usize> {
        self.max_attempts
    }

    pub fn is_trimmable(&self) -> bool {
        self.trimmable
    }

    pub fn is_validated(&self) -> bool {
        self.choices.is_some() || self.validator.is_some()
    }

    /// Check a candidate answer against the choices and the validator.
    pub fn validate(&self, answer: &str) -> Result<String, String> {
        let accepted = match &self.choices {
            Some(choices) => match_choice(choices, answer)?,
            None => answer.to_string(),
        };
        match &self.validator {
            Some(validator) => validator(&accepted),
            None => Ok(accepted),
        }
    }

    /// Answer used when nothing can be asked.
    ///
    /// A numeric default on a choice question selects the choice at that index.
    pub(crate) fn non_interactive_answer(&self) -> String {
        let Some(default) = self.default.as_deref() else {
            return String::new();
        };
        let indexed = self
            .choices
            .as_deref()
            .and_then(|choices| parse_index(default).and_then(|i| choices.get(i)));
        match indexed {
            Some(choice) => choice.clone(),
            None => default.to_string(),
        }
    }
}

impl std::fmt::Debug for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Question")
            .field("text", &self.text)
            .field("default", &self.default)
            .field("choices", &self.choices)
            .field("validator", &self.validator.is_some())
            .field("max_attempts", &self.max_attempts)
            .finish()
    }
}

fn match_choice(choices: &[String], answer: &str) -> Result<String, String> {
    if let Some(exact) = choices.iter().find(|c| c.as_str() == answer) {
        return Ok(exact.clone());
    }
    if let Some(indexed) = parse_index(answer).and_then(|i| choices.get(i)) {
        return Ok(indexed.clone());
    }
    let lowered = answer.to_lowercase();
    let folded: Vec<&String> = choices.iter().filter(|c| c.to_lowercase() == lowered).collect();
    match folded.as_slice() {
        [only] => Ok((*only).clone()),
        [] => Err(format!("Value \"{answer}\" is invalid")),
        _ => Err(format!(
            "The provided answer is ambiguous. Value should be one of {}.",
            folded.iter().map(|c| c.as_str()).collect::<Vec<_>>().join(" or ")
        )),
    }
}

/// Plain decimal digits only; `parse` alone would accept a leading `+`.
fn parse_index(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// A yes/no question.
#[derive(Debug, Clone)]
pub struct Confirmation {
    text: String,
    default: bool,
}

impl Confirmation {
    /// Defaults to yes.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), default: true }
    }

    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn default(&self) -> bool {
        self.default
    }

    /// Empty means the default; otherwise yes iff the answer starts with `y`.
    pub fn interpret(&self, answer: &str) -> bool {
        if answer.is_empty() {
            return self.default;
        }
        answer.starts_with(['y', 'Y'])
    }
}

#[cfg(test)]
#[path = "question_tests.rs"]
mod tests;
