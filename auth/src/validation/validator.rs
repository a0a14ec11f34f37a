use std::collections::HashMap;

use super::errors::FieldError;
use super::errors::FieldErrors;
use super::errors::RuleError;
use super::rules::Rule;

/// Input structure whose fields can be looked up by declared name.
pub trait Fields {
    fn field(&self, name: &str) -> Option<&str>;
}

impl Fields for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldRules {
    name: String,
    rules: Vec<Rule>,
}

/// Character class complexity validator.
///
/// The rule set is fixed once the validator is built: an ordered list of
/// fields, each with an ordered list of rules. Validation only reads it, so
/// a single instance can be shared freely.
///
/// ```
/// use auth::validation::ComplexityValidator;
///
/// let validator = ComplexityValidator::new()
///     .with_tag(
///         "Password",
///         "contains-uppercase=1,contains-lowercase=1,contains-number=1,contains-special-char=1",
///     )
///     .unwrap();
///
/// assert!(validator.validate_value("Password", "Test123/").is_ok());
///
/// let err = validator.validate_value("Password", "test").unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "password contains-uppercase 1, password contains-number 1, password contains-special-char 1"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplexityValidator {
    fields: Vec<FieldRules>,
}

impl ComplexityValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a rule for a field.
    ///
    /// Declaring a rule kind the field already has replaces its threshold,
    /// so repeating a declaration leaves the rule set unchanged.
    pub fn with_rule(mut self, field: &str, rule: Rule) -> Self {
        let declared = self.fields.iter().position(|f| f.name == field);
        let position = match declared {
            Some(position) => position,
            None => {
                self.fields.push(FieldRules {
                    name: field.to_string(),
                    rules: Vec::new(),
                });
                self.fields.len() - 1
            }
        };

        let rules = &mut self.fields[position].rules;
        let existing = rules.iter().position(|r| r.kind == rule.kind);
        match existing {
            Some(index) => rules[index].min = rule.min,
            None => rules.push(rule),
        }
        self
    }

    pub fn with_rules(self, field: &str, rules: impl IntoIterator<Item = Rule>) -> Self {
        rules
            .into_iter()
            .fold(self, |validator, rule| validator.with_rule(field, rule))
    }

    /// Declare rules for a field from a tag such as
    /// `"contains-uppercase=1,contains-number=2"`.
    ///
    /// # Errors
    /// * `UnknownRule` - Rule name is not a built-in rule
    /// * `MissingThreshold` / `InvalidThreshold` - Threshold absent or not an integer
    pub fn with_tag(self, field: &str, tag: &str) -> Result<Self, RuleError> {
        let rules = tag
            .split(',')
            .filter(|declaration| !declaration.trim().is_empty())
            .map(str::parse::<Rule>)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.with_rules(field, rules))
    }

    /// Rules declared for `field`, in declaration order.
    pub fn rules(&self, field: &str) -> &[Rule] {
        self.fields
            .iter()
            .find(|f| f.name == field)
            .map(|f| f.rules.as_slice())
            .unwrap_or(&[])
    }

    /// Evaluate every declared rule against every declared field.
    ///
    /// A field the input does not expose is validated as an empty string.
    ///
    /// # Errors
    /// * `FieldErrors` - One entry per failing field and rule, in declaration order
    pub fn validate<T: Fields + ?Sized>(&self, input: &T) -> Result<(), FieldErrors> {
        let errors: Vec<FieldError> = self
            .fields
            .iter()
            .flat_map(|field| {
                let value = input.field(&field.name).unwrap_or("");
                field
                    .rules
                    .iter()
                    .filter(move |rule| !rule.is_satisfied_by(value))
                    .map(move |rule| FieldError {
                        field: lower_camel(&field.name),
                        rule: rule.kind.name(),
                        param: rule.min,
                    })
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(FieldErrors(errors))
        }
    }

    /// Validate a single named value.
    pub fn validate_value(&self, field: &str, value: &str) -> Result<(), FieldErrors> {
        self.validate(&SingleField { name: field, value })
    }
}

struct SingleField<'a> {
    name: &'a str,
    value: &'a str,
}

impl Fields for SingleField<'_> {
    fn field(&self, name: &str) -> Option<&str> {
        (name == self.name).then_some(self.value)
    }
}

fn lower_camel(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
