//! Operator prefixes on test parameters.
//!
//! A parameter may start with `!` and then with one of `>=`, `>`, `<=`, `<`,
//! stripped in that order. Negation only applies to the equality path: once a
//! relational operator is present the `!` is parsed but has no effect, so
//! `F(!>5)` behaves exactly like `F(>5)`.

/// Relational operator stripped from a numeric parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
}

impl Relation {
    /// Whether `actual <op> expected` holds.
    pub fn holds<T: Ord>(self, actual: T, expected: T) -> bool {
        match self {
            Relation::Greater => actual > expected,
            Relation::GreaterOrEqual => actual >= expected,
            Relation::Less => actual < expected,
            Relation::LessOrEqual => actual <= expected,
        }
    }
}

/// A test parameter with its operator prefixes removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand<'a> {
    pub negated: bool,
    pub relation: Option<Relation>,
    /// Remaining comparand, trimmed.
    pub value: &'a str,
}

impl<'a> Operand<'a> {
    /// Strip negation and at most one relational operator.
    pub fn parse(raw: &'a str) -> Self {
        let (negated, rest) = strip_negation(raw.trim());

        let (relation, rest) = if let Some(rest) = rest.strip_prefix(">=") {
            (Some(Relation::GreaterOrEqual), rest)
        } else if let Some(rest) = rest.strip_prefix('>') {
            (Some(Relation::Greater), rest)
        } else if let Some(rest) = rest.strip_prefix("<=") {
            (Some(Relation::LessOrEqual), rest)
        } else if let Some(rest) = rest.strip_prefix('<') {
            (Some(Relation::Less), rest)
        } else {
            (None, rest)
        };

        Self {
            negated,
            relation,
            value: rest.trim(),
        }
    }

    /// Strip negation only. Text tests compare the rest literally, so
    /// `R(>DVD)` looks for a source called `>DVD`.
    pub fn negation_only(raw: &'a str) -> Self {
        let (negated, rest) = strip_negation(raw.trim());
        Self {
            negated,
            relation: None,
            value: rest.trim(),
        }
    }

    /// Numeric comparison. Equality honors negation, relations do not.
    pub fn compare<T: Ord>(&self, actual: T, expected: T) -> bool {
        match self.relation {
            None => (actual == expected) != self.negated,
            Some(relation) => relation.holds(actual, expected),
        }
    }

    /// Apply negation to the outcome of an equality test.
    pub fn apply(&self, hit: bool) -> bool {
        hit != self.negated
    }
}

fn strip_negation(raw: &str) -> (bool, &str) {
    match raw.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value() {
        let op = Operand::parse("5");
        assert_eq!(
            op,
            Operand {
                negated: false,
                relation: None,
                value: "5"
            }
        );
    }

    #[test]
    fn test_negation_is_stripped_before_relation() {
        let op = Operand::parse("!>=10");
        assert!(op.negated);
        assert_eq!(op.relation, Some(Relation::GreaterOrEqual));
        assert_eq!(op.value, "10");

        // Relation first, then `!`, is not a negation.
        let op = Operand::parse(">!10");
        assert!(!op.negated);
        assert_eq!(op.relation, Some(Relation::Greater));
        assert_eq!(op.value, "!10");
    }

    #[test]
    fn test_at_most_one_relation() {
        let op = Operand::parse("<=<3");
        assert_eq!(op.relation, Some(Relation::LessOrEqual));
        assert_eq!(op.value, "<3");

        let op = Operand::parse("< 3");
        assert_eq!(op.relation, Some(Relation::Less));
        assert_eq!(op.value, "3");
    }

    #[test]
    fn test_compare_honors_negation_only_without_relation() {
        assert!(Operand::parse("5").compare(5, 5));
        assert!(!Operand::parse("!5").compare(5, 5));
        assert!(Operand::parse("!5").compare(4, 5));

        for version in 0..10 {
            assert_eq!(
                Operand::parse("!>5").compare(version, 5),
                Operand::parse(">5").compare(version, 5)
            );
        }
        assert!(Operand::parse("<=5").compare(5, 5));
        assert!(!Operand::parse("<5").compare(5, 5));
        assert!(Operand::parse(">=5").compare(6, 5));
    }

    #[test]
    fn test_negation_only_keeps_relation_characters() {
        let op = Operand::negation_only("!>DVD");
        assert!(op.negated);
        assert_eq!(op.relation, None);
        assert_eq!(op.value, ">DVD");
        assert!(!op.apply(true));
        assert!(op.apply(false));
    }
}
