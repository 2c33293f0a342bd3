use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use portal_core::page::Page;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use strum::IntoEnumIterator;

use crate::commands::COMMANDS;

/// Rustyline helper that completes, hints and highlights portal commands.
#[derive(Clone)]
pub struct ReplHelper {
    commands: Vec<String>,
    pages: Vec<String>,
}

impl ReplHelper {
    pub fn new() -> Self {
        let mut commands: Vec<String> = COMMANDS.iter().map(|(name, _)| name.to_string()).collect();
        commands.push("exit".to_string());
        Self {
            commands,
            pages: Page::iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Candidates for the word ending at the cursor, with its start offset.
    fn candidates(&self, line: &str) -> (usize, Vec<&String>) {
        match line.strip_prefix("go ") {
            Some(page) => (
                3,
                self.pages.iter().filter(|p| p.starts_with(page)).collect(),
            ),
            None if !line.contains(' ') => (
                0,
                self.commands.iter().filter(|c| c.starts_with(line)).collect(),
            ),
            None => (0, Vec::new()),
        }
    }

    fn is_command(&self, line: &str) -> bool {
        line.split_whitespace()
            .next()
            .is_some_and(|word| self.commands.iter().any(|c| c == word))
    }
}

impl Helper for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, candidates) = self.candidates(&line[..pos]);
        let pairs = candidates
            .into_iter()
            .map(|c| Pair {
                display: c.clone(),
                replacement: c.clone(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.is_command(line) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() {
            return None;
        }
        let (start, candidates) = self.candidates(line);
        let typed = &line[start..];
        candidates
            .into_iter()
            .find(|c| c.len() > typed.len())
            .map(|c| c[typed.len()..].to_string())
    }
}

impl Validator for ReplHelper {}
