pub mod errors;
pub mod rules;
pub mod validator;

pub use errors::FieldError;
pub use errors::FieldErrors;
pub use errors::RuleError;
pub use rules::count_matching;
pub use rules::Rule;
pub use rules::RuleKind;
pub use validator::ComplexityValidator;
pub use validator::Fields;
