use std::fmt;

/// Runtime value representation
///
/// `Null` is the "no value yet" state of a binding declared without an
/// initializer; there is no null literal in the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value (binding declared without an initializer)
    Null,
    /// Boolean value
    Bool(bool),
    /// Double-precision number (the only numeric type)
    Number(f64),
    /// String value
    Str(String),
}

impl Value {
    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
        }
    }

    /// Returns true if the value is truthy in a conditional context
    ///
    /// Null is falsy, a boolean is itself, every number and string is
    /// truthy (including `0` and `""`).
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(_) | Value::Str(_) => true,
        }
    }

    /// Returns the numeric payload, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// The textual form used by `print` and by `+` concatenation
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Bool(true).type_name(), "boolean");
        assert_eq!(Value::Number(42.0).type_name(), "number");
        assert_eq!(Value::Str("test".to_string()).type_name(), "string");
    }

    #[test]
    fn test_truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        // Unlike many languages, zero and the empty string are truthy
        assert!(Value::Number(0.0).is_truthy());
        assert!(Value::Str(String::new()).is_truthy());
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(Value::Number(10.0).to_string(), "10");
        assert_eq!(Value::Number(3.5).to_string(), "3.5");
        assert_eq!(Value::Str("hi".to_string()).to_string(), "hi");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn test_as_number() {
        assert_eq!(Value::Number(2.5).as_number(), Some(2.5));
        assert_eq!(Value::Str("2.5".to_string()).as_number(), None);
        assert_eq!(Value::Bool(true).as_number(), None);
    }
}
