// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted answer queue.

/// Ordered answers with a read cursor.
///
/// The answers themselves never change; consuming one only advances the
/// cursor, so what was consumed and what remains can both be inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerQueue {
    answers: Vec<String>,
    cursor: usize,
}

impl AnswerQueue {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { answers: answers.into_iter().map(Into::into).collect(), cursor: 0 }
    }

    /// Take the next answer, or `None` once the queue is exhausted.
    pub fn pop(&mut self) -> Option<&str> {
        let answer = self.answers.get(self.cursor)?;
        self.cursor += 1;
        Some(answer)
    }

    pub fn consumed(&self) -> &[String] {
        &self.answers[..self.cursor]
    }

    pub fn remaining(&self) -> &[String] {
        &self.answers[self.cursor..]
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.answers.len()
    }

    /// Number of answers given, consumed or not.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// The unconsumed tail as a fresh queue.
    pub(crate) fn into_remaining(self) -> Self {
        Self::new(self.answers.into_iter().skip(self.cursor))
    }
}

#[cfg(test)]
#[path = "answers_tests.rs"]
mod tests;
