//! Rename script parsing.
//!
//! A script is plain text, one statement per line:
//!
//! ```text
//! // comment
//! DO ADD '[%grp] '
//! IF I(eng) DO ADD '%eng '
//! IF T(!Movie) DO ADD '- %enr'
//! DO REPLACE ' ' '_'
//! IF G(unknown) DO FAIL
//! ```
//!
//! Lines are parsed independently. A line that does not parse is recorded as
//! skipped and never affects the others.

pub mod action;
pub mod condition;
pub mod operand;
pub mod predicates;
pub mod tags;

pub use action::{Action, Segment};
pub use condition::{Condition, Test};
pub use operand::{Operand, Relation};
pub use predicates::Predicate;
pub use tags::{Resolver, Tag};

use crate::error::{RenameError, Result};
use namecraft_model::FileMetadata;
use tracing::{debug, warn};

/// A parsed statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `DO <action>`
    Always(Action),
    /// `IF <tests> DO <action>`
    When(Condition, Action),
}

/// A statement together with its 1-based line number in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub number: usize,
    pub line: Line,
}

impl ScriptLine {
    pub fn action(&self) -> &Action {
        match &self.line {
            Line::Always(action) | Line::When(_, action) => action,
        }
    }

    pub fn matches(&self, meta: &FileMetadata) -> bool {
        match &self.line {
            Line::Always(_) => true,
            Line::When(condition, _) => condition.evaluate(meta),
        }
    }
}

/// A source line that was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub number: usize,
    pub text: String,
    pub reason: RenameError,
}

/// A parsed rename script. Cheap to share between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    lines: Vec<ScriptLine>,
    skipped: Vec<SkippedLine>,
}

impl Script {
    /// Parse script text. Never fails; bad lines end up in [`Script::skipped`].
    pub fn parse(text: &str) -> Self {
        let mut script = Script::default();

        for (index, raw) in text.lines().enumerate() {
            let number = index + 1;
            let stripped = strip_comment(raw).trim();
            if stripped.is_empty() {
                continue;
            }

            match parse_line(stripped) {
                Ok(line) => script.lines.push(ScriptLine { number, line }),
                Err(reason) => {
                    warn!("skipping script line {}: {}", number, reason);
                    script.skipped.push(SkippedLine {
                        number,
                        text: stripped.to_string(),
                        reason,
                    });
                }
            }
        }

        debug!(
            "parsed rename script: {} statements, {} skipped",
            script.lines.len(),
            script.skipped.len()
        );
        script
    }

    pub fn lines(&self) -> &[ScriptLine] {
        &self.lines
    }

    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl std::str::FromStr for Script {
    type Err = std::convert::Infallible;

    fn from_str(text: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Script::parse(text))
    }
}

fn parse_line(line: &str) -> Result<Line> {
    if let Some(rest) = strip_keyword(line, "DO") {
        return Ok(Line::Always(Action::parse(rest)?));
    }
    if let Some(rest) = strip_keyword(line, "IF") {
        let (condition, rest) = Condition::parse_prefix(rest)?;
        let action = strip_keyword(rest.trim_start(), "DO")
            .ok_or_else(|| RenameError::MalformedLine(line.to_string()))?;
        return Ok(Line::When(condition, Action::parse(action)?));
    }
    Err(RenameError::MalformedLine(line.to_string()))
}

/// Strip a case-insensitive keyword that must be followed by whitespace.
fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let head = line.get(..keyword.len())?;
    let rest = &line[keyword.len()..];
    (head.eq_ignore_ascii_case(keyword) && rest.starts_with(char::is_whitespace)).then_some(rest)
}

/// Drop a `//` comment that starts outside single quotes.
fn strip_comment(line: &str) -> &str {
    let mut quoted = false;
    let mut previous_slash = false;
    for (at, ch) in line.char_indices() {
        match ch {
            '\'' => {
                quoted = !quoted;
                previous_slash = false;
            }
            '/' if !quoted && previous_slash => return &line[..at - 1],
            '/' => previous_slash = !quoted,
            _ => previous_slash = false,
        }
    }
    line
}
