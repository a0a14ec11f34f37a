use std::fmt;
use std::str::FromStr;

use super::errors::RuleError;

pub const UPPERCASE_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL_CHARACTERS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Count the characters of `value` that belong to `character_class`.
pub fn count_matching(value: &str, character_class: &str) -> usize {
    value
        .chars()
        .filter(|c| character_class.contains(*c))
        .count()
}

/// Built-in character class rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    ContainsUppercase,
    ContainsLowercase,
    ContainsNumber,
    ContainsSpecialChar,
}

impl RuleKind {
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::ContainsUppercase => "contains-uppercase",
            RuleKind::ContainsLowercase => "contains-lowercase",
            RuleKind::ContainsNumber => "contains-number",
            RuleKind::ContainsSpecialChar => "contains-special-char",
        }
    }

    pub fn character_class(&self) -> &'static str {
        match self {
            RuleKind::ContainsUppercase => UPPERCASE_LETTERS,
            RuleKind::ContainsLowercase => LOWERCASE_LETTERS,
            RuleKind::ContainsNumber => DIGITS,
            RuleKind::ContainsSpecialChar => SPECIAL_CHARACTERS,
        }
    }
}

impl FromStr for RuleKind {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contains-uppercase" => Ok(RuleKind::ContainsUppercase),
            "contains-lowercase" => Ok(RuleKind::ContainsLowercase),
            "contains-number" => Ok(RuleKind::ContainsNumber),
            "contains-special-char" => Ok(RuleKind::ContainsSpecialChar),
            other => Err(RuleError::UnknownRule(other.to_string())),
        }
    }
}

/// A character class rule with its minimum count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub kind: RuleKind,
    pub min: usize,
}

impl Rule {
    pub fn new(kind: RuleKind, min: usize) -> Self {
        Self { kind, min }
    }

    pub fn uppercase(min: usize) -> Self {
        Self::new(RuleKind::ContainsUppercase, min)
    }

    pub fn lowercase(min: usize) -> Self {
        Self::new(RuleKind::ContainsLowercase, min)
    }

    pub fn number(min: usize) -> Self {
        Self::new(RuleKind::ContainsNumber, min)
    }

    pub fn special_char(min: usize) -> Self {
        Self::new(RuleKind::ContainsSpecialChar, min)
    }

    pub fn is_satisfied_by(&self, value: &str) -> bool {
        count_matching(value, self.kind.character_class()) >= self.min
    }
}

/// Parses a single `name=threshold` declaration, e.g. `contains-number=2`.
impl FromStr for Rule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, param) = s
            .split_once('=')
            .ok_or_else(|| RuleError::MissingThreshold(s.to_string()))?;
        let kind = name.trim().parse::<RuleKind>()?;
        let min = param
            .trim()
            .parse::<usize>()
            .map_err(|_| RuleError::InvalidThreshold {
                rule: kind.name().to_string(),
                param: param.to_string(),
            })?;

        Ok(Rule::new(kind, min))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.kind.name(), self.min)
    }
}
