//! `ADD`, `REPLACE` and `FAIL`, parsed once and applied to the name buffer.

use super::tags::{Resolver, Tag};
use crate::error::{RenameError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::ControlFlow;

static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%[A-Za-z0-9]{3}").expect("placeholder regex should compile"));

static REPLACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^'([^']*)'[^']*'([^']*)'").expect("replace arguments regex should compile")
});

/// Piece of an `ADD` template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(Tag),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append the rendered template.
    Add(Vec<Segment>),
    /// Replace every literal occurrence of `from` in the buffer.
    Replace { from: String, to: String },
    /// Abandon the rename.
    Fail,
}

impl Action {
    /// Parse the text following `DO`.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let (verb, rest) = match text.find(char::is_whitespace) {
            Some(at) => (&text[..at], text[at..].trim()),
            None => (text, ""),
        };

        if verb.eq_ignore_ascii_case("ADD") {
            Ok(Action::Add(parse_template(&rest.replace('\'', ""))))
        } else if verb.eq_ignore_ascii_case("REPLACE") {
            let caps = REPLACE_REGEX
                .captures(rest)
                .ok_or_else(|| RenameError::MalformedAction(text.to_string()))?;
            let from = caps[1].to_string();
            if from.is_empty() {
                return Err(RenameError::MalformedAction(text.to_string()));
            }
            Ok(Action::Replace {
                from,
                to: caps[2].to_string(),
            })
        } else if verb.eq_ignore_ascii_case("FAIL") && rest.is_empty() {
            Ok(Action::Fail)
        } else {
            Err(RenameError::MalformedAction(text.to_string()))
        }
    }

    /// Apply to `buffer`. `Break` means the script asked to fail.
    pub fn apply(&self, mut buffer: String, resolver: &Resolver<'_>) -> ControlFlow<(), String> {
        match self {
            Action::Add(segments) => {
                for segment in segments {
                    match segment {
                        Segment::Literal(text) => buffer.push_str(text),
                        Segment::Placeholder(tag) => buffer.push_str(&resolver.render(*tag)),
                    }
                }
                ControlFlow::Continue(buffer)
            }
            Action::Replace { from, to } => ControlFlow::Continue(buffer.replace(from, to)),
            Action::Fail => ControlFlow::Break(()),
        }
    }
}

/// Split `ADD` text into literals and known placeholders. Unknown `%xxx`
/// sequences stay literal.
fn parse_template(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut last = 0;

    for found in PLACEHOLDER_REGEX.find_iter(text) {
        let Some(tag) = Tag::from_code(&found.as_str()[1..]) else {
            continue;
        };
        literal.push_str(&text[last..found.start()]);
        if !literal.is_empty() {
            segments.push(Segment::Literal(std::mem::take(&mut literal)));
        }
        segments.push(Segment::Placeholder(tag));
        last = found.end();
    }

    literal.push_str(&text[last..]);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}
