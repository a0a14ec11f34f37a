use std::fmt;

use thiserror::Error;

/// Error for rule declarations that cannot be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("Unknown validation rule: {0}")]
    UnknownRule(String),

    #[error("Rule {0} has no threshold (expected name=count)")]
    MissingThreshold(String),

    #[error("Rule {rule} has a non-integer threshold: {param}")]
    InvalidThreshold { rule: String, param: String },
}

/// One failing field and rule pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name in lower camel case
    pub field: String,
    pub rule: &'static str,
    pub param: usize,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.rule, self.param)
    }
}

/// All rule failures of a single validation, in declaration order.
///
/// Only describes the caller's own input, so it is safe to return verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{}", join(.0))]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages as individual strings.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
