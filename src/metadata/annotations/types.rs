use std::sync::Arc;

use crate::metadata::typesystem::TypeName;

/// A reference-counted pointer to an `AnnotationValue`
pub type AnnotationValueRc = Arc<AnnotationValue>;
/// A vector that holds a list of `AnnotationValue` instances for storage on parent objects
pub type AnnotationValueList = Arc<boxcar::Vec<AnnotationValueRc>>;

/// Represents one captured annotation with its arguments and named arguments
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationValue {
    /// The annotation type this value is an instance of
    pub kind: TypeName,
    /// Fixed arguments in declaration order
    pub fixed_args: Vec<AnnotationArgument>,
    /// Named arguments
    pub named_args: Vec<AnnotationNamedArgument>,
}

impl AnnotationValue {
    /// Creates an annotation value of the given kind with no arguments
    #[must_use]
    pub fn new(kind: TypeName) -> Self {
        AnnotationValue {
            kind,
            fixed_args: Vec::new(),
            named_args: Vec::new(),
        }
    }

    /// Appends a fixed argument
    #[must_use]
    pub fn with_arg(mut self, value: AnnotationArgument) -> Self {
        self.fixed_args.push(value);
        self
    }

    /// Appends a named argument
    #[must_use]
    pub fn with_named_arg(mut self, name: impl Into<String>, value: AnnotationArgument) -> Self {
        self.named_args.push(AnnotationNamedArgument {
            name: name.into(),
            value,
        });
        self
    }

    /// Returns true if this value is an instance of the given annotation type
    #[must_use]
    pub fn is_kind(&self, kind: &TypeName) -> bool {
        self.kind == *kind
    }
}

/// Represents a single annotation argument value
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationArgument {
    /// Boolean value
    Bool(bool),
    /// Signed 32-bit integer
    I32(i32),
    /// Signed 64-bit integer
    I64(i64),
    /// 64-bit floating point
    F64(f64),
    /// UTF-8 string
    Str(String),
    /// Type reference
    Type(TypeName),
    /// Array of arguments
    Array(Vec<AnnotationArgument>),
    /// Enum value (enum type + value)
    Enum(TypeName, Box<AnnotationArgument>),
}

/// Represents a named argument in an annotation
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationNamedArgument {
    /// Name of the argument
    pub name: String,
    /// Value of the argument
    pub value: AnnotationArgument,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_value_builder() {
        let value = AnnotationValue::new(TypeName::new("bindscope::bind", "QueryParam"))
            .with_arg(AnnotationArgument::Str("page".into()))
            .with_named_arg("default", AnnotationArgument::I32(1));

        assert_eq!(value.kind, TypeName::new("bindscope::bind", "QueryParam"));
        assert_eq!(value.fixed_args, vec![AnnotationArgument::Str("page".into())]);
        assert_eq!(value.named_args.len(), 1);
        assert_eq!(value.named_args[0].name, "default");
        assert_eq!(value.named_args[0].value, AnnotationArgument::I32(1));
    }

    #[test]
    fn test_is_kind() {
        let value = AnnotationValue::new(TypeName::new("bindscope::bind", "Header"));

        assert!(value.is_kind(&TypeName::new("bindscope::bind", "Header")));
        assert!(!value.is_kind(&TypeName::new("bindscope::bind", "QueryParam")));
    }

    #[test]
    fn test_nested_arguments() {
        let value = AnnotationValue::new(TypeName::new("bindscope::bind", "Accepts")).with_arg(
            AnnotationArgument::Array(vec![
                AnnotationArgument::Str("application/json".into()),
                AnnotationArgument::Str("text/plain".into()),
            ]),
        );

        match &value.fixed_args[0] {
            AnnotationArgument::Array(items) => assert_eq!(items.len(), 2),
            other => panic!("expected array argument, got {:?}", other),
        }
    }
}
