//! Test chains between `IF` and `DO`.
//!
//! `;` joins tests that must all pass together with the first one. `,`
//! joins fallbacks that are only consulted when the first test failed and no
//! `;` test exists. Mixing both keeps that order: the `;` tests are checked
//! first, and the `,` tests can never rescue a line that has any.

use super::predicates::Predicate;
use crate::error::{RenameError, Result};
use namecraft_model::FileMetadata;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static TEST_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Za-z])\s*\(([^)]*)\)").expect("test regex should compile")
});

/// One `Letter(parameter)` test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Test {
    pub letter: char,
    /// `None` for letters that name no test; such a test never passes.
    pub predicate: Option<Predicate>,
    pub parameter: String,
}

impl Test {
    pub fn evaluate(&self, meta: &FileMetadata) -> bool {
        match self.predicate {
            Some(predicate) => predicate.evaluate(&self.parameter, meta),
            None => {
                debug!("unknown test {}({}) evaluated false", self.letter, self.parameter);
                false
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub first: Test,
    /// `;`-joined tests.
    pub all: Vec<Test>,
    /// `,`-joined tests.
    pub any: Vec<Test>,
}

impl Condition {
    /// Parse a test chain from the start of `text`, returning the condition
    /// and whatever follows the last test.
    pub fn parse_prefix(text: &str) -> Result<(Self, &str)> {
        let (first, mut rest) = next_test(text)?;
        if first.predicate.is_none() {
            return Err(RenameError::UnknownTest(first.letter));
        }

        let mut condition = Condition {
            first,
            all: Vec::new(),
            any: Vec::new(),
        };

        loop {
            let trimmed = rest.trim_start();
            let (joined, after) = if let Some(after) = trimmed.strip_prefix(';') {
                (&mut condition.all, after)
            } else if let Some(after) = trimmed.strip_prefix(',') {
                (&mut condition.any, after)
            } else {
                break;
            };
            let (test, after) = next_test(after)?;
            joined.push(test);
            rest = after;
        }

        Ok((condition, rest))
    }

    pub fn evaluate(&self, meta: &FileMetadata) -> bool {
        let first = self.first.evaluate(meta);

        if !self.all.is_empty() {
            return first && self.all.iter().all(|test| test.evaluate(meta));
        }
        if first {
            return true;
        }
        self.any.iter().any(|test| test.evaluate(meta))
    }
}

fn next_test(text: &str) -> Result<(Test, &str)> {
    let caps = TEST_REGEX
        .captures(text)
        .ok_or_else(|| RenameError::MalformedLine(text.trim().to_string()))?;
    let whole = caps.get(0).map_or(0, |m| m.end());
    let letter = caps[1].chars().next().unwrap_or_default();

    let test = Test {
        letter,
        predicate: Predicate::from_letter(letter).ok(),
        parameter: caps[2].trim().to_string(),
    };
    Ok((test, &text[whole..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use namecraft_model::{EpisodeKind, EpisodeRecord, MediaFile, ReleaseRecord};

    fn meta(version: u32) -> FileMetadata {
        let mut release = ReleaseRecord::new(1);
        release.version = version;
        release.source = Some("DVD".into());
        FileMetadata::new(MediaFile::new("a.mkv", "abc", 1))
            .with_release(release)
            .with_episode(EpisodeRecord::new(1, 2, 3, EpisodeKind::Normal))
    }

    fn parse(text: &str) -> Condition {
        Condition::parse_prefix(text).unwrap().0
    }

    #[test]
    fn test_parse_chain_and_remainder() {
        let (condition, rest) = Condition::parse_prefix("F(!1); R(DVD) , E(3) DO ADD 'x'").unwrap();
        assert_eq!(condition.first.predicate, Some(Predicate::FileVersion));
        assert_eq!(condition.first.parameter, "!1");
        assert_eq!(condition.all.len(), 1);
        assert_eq!(condition.any.len(), 1);
        assert_eq!(rest.trim(), "DO ADD 'x'");
    }

    #[test]
    fn test_unknown_first_letter_is_an_error() {
        assert_eq!(
            Condition::parse_prefix("Q(1) DO FAIL"),
            Err(RenameError::UnknownTest('Q'))
        );
        assert!(matches!(
            Condition::parse_prefix("F 1 DO FAIL"),
            Err(RenameError::MalformedLine(_))
        ));
    }

    #[test]
    fn test_unknown_joined_letter_is_false() {
        let condition = parse("F(1),Q(1)");
        assert_eq!(condition.any[0].predicate, None);
        assert!(condition.evaluate(&meta(1)));
        assert!(!condition.evaluate(&meta(2)));
    }

    #[test]
    fn test_and_chain() {
        let condition = parse("F(2);R(DVD)");
        assert!(condition.evaluate(&meta(2)));
        assert!(!condition.evaluate(&meta(3)));
        assert!(!parse("F(2);R(TV)").evaluate(&meta(2)));
    }

    #[test]
    fn test_or_chain() {
        let condition = parse("F(5),F(2),F(3)");
        assert!(condition.evaluate(&meta(2)));
        assert!(condition.evaluate(&meta(3)));
        assert!(!condition.evaluate(&meta(4)));
    }

    #[test]
    fn test_or_cannot_rescue_failed_and() {
        // First test fails, the `;` test passes, the `,` test passes.
        let condition = parse("F(9);R(DVD),F(2)");
        assert!(!condition.evaluate(&meta(2)));

        // First and `;` tests pass, so the `,` test is irrelevant.
        let condition = parse("F(2);R(DVD),F(9)");
        assert!(condition.evaluate(&meta(2)));
    }
}
