//! Validation and transform directives.
//!
//! A directive is one decorator attached above a class member. Directives
//! are data until rendered, so styles can be inspected in tests without
//! string matching.

use crate::typescript::runtime::Coercion;
use declforge_schema::Field;
use std::fmt;

/// One validation or transform decorator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Value must be present.
    IsNotEmpty {
        /// Field key used in the message.
        key: String,
    },
    /// Value may be absent.
    IsOptional,
    /// Coerce the incoming value with a runtime helper.
    Transform(Coercion),
    /// Value must be a number.
    IsNumber {
        /// Field key used in the message.
        key: String,
        /// Validate each element.
        each: bool,
    },
    /// Value must be a boolean.
    IsBoolean {
        /// Field key used in the message.
        key: String,
        /// Validate each element.
        each: bool,
    },
    /// Value must be a string.
    IsString {
        /// Field key used in the message.
        key: String,
        /// Validate each element.
        each: bool,
    },
    /// Value must be a member of an enumeration.
    IsEnum {
        /// Field key used in the message.
        key: String,
        /// Enumeration name.
        enum_name: String,
        /// Validate each element.
        each: bool,
    },
    /// Value must be an array.
    IsArray,
    /// Validate the nested object(s).
    ValidateNested {
        /// Validate each element.
        each: bool,
    },
    /// Value must be an object.
    IsObject,
    /// Instantiate the nested value as the named type.
    Type {
        /// Target type name.
        name: String,
    },
}

fn each_suffix(each: bool) -> &'static str {
    if each { ", each: true" } else { "" }
}

/// Escapes text for a single-quoted TypeScript string literal.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IsNotEmpty { key } => write!(
                f,
                "@IsNotEmpty({{ message: '{} cannot be empty' }})",
                escape(key)
            ),
            Self::IsOptional => write!(f, "@IsOptional()"),
            Self::Transform(coercion) => write!(f, "@Transform({})", coercion.helper_name()),
            Self::IsNumber { key, each } => write!(
                f,
                "@IsNumber({{}}, {{ message: '{} must be a number (decimal)'{} }})",
                escape(key),
                each_suffix(*each)
            ),
            Self::IsBoolean { key, each } => write!(
                f,
                "@IsBoolean({{ message: '{} must be a boolean'{} }})",
                escape(key),
                each_suffix(*each)
            ),
            Self::IsString { key, each } => write!(
                f,
                "@IsString({{ message: '{} must be a string'{} }})",
                escape(key),
                each_suffix(*each)
            ),
            Self::IsEnum {
                key,
                enum_name,
                each,
            } => write!(
                f,
                "@IsEnum({enum_name}, {{ message: '{} must be enum {enum_name}'{} }})",
                escape(key),
                each_suffix(*each)
            ),
            Self::IsArray => write!(f, "@IsArray()"),
            Self::ValidateNested { each: true } => write!(f, "@ValidateNested({{ each: true }})"),
            Self::ValidateNested { each: false } => write!(f, "@ValidateNested()"),
            Self::IsObject => write!(f, "@IsObject()"),
            Self::Type { name } => write!(f, "@Type(() => {name})"),
        }
    }
}

/// Builds the directives attached above a field's member declaration.
pub trait DirectiveBuilder: Send + Sync {
    /// Returns the directives for a field, in emission order.
    fn directives(&self, field: &Field) -> Vec<Directive>;
}
