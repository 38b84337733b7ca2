use serde::{Deserialize, Serialize};

use crate::lexer::Token;

/// Expressions
///
/// The closed set of expression node kinds the parser produces and the
/// interpreter dispatches on. Operator nodes keep the operator token so
/// runtime errors can point back at the source location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Number literal expression
    NumberLiteral(f64),
    /// String literal expression
    StringLiteral(String),
    /// Boolean literal expression
    BoolLiteral(bool),

    /// Parenthesized expression
    Grouping(Box<Expression>),

    /// Unary operation expression (only `-` exists in the grammar)
    Unary {
        /// Operator token
        operator: Token,
        /// Operand expression
        operand: Box<Expression>,
    },

    /// Binary operation expression
    Binary {
        /// Left operand expression
        left: Box<Expression>,
        /// Operator token
        operator: Token,
        /// Right operand expression
        right: Box<Expression>,
    },

    /// Variable reference expression (name token)
    Variable(Token),

    /// Assignment expression; yields the assigned value
    Assignment {
        /// Name token of the assignment target
        name: Token,
        /// Expression producing the new value
        value: Box<Expression>,
    },
}

/// Statements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// Expression evaluated for its side effects, value discarded
    Expression(Expression),

    /// Print statement: writes the value's textual form plus a newline
    Print(Expression),

    /// Variable declaration: `let x: number = 5;`
    Variable {
        /// Name token of the binding
        name: Token,
        /// Optional initializer expression
        initializer: Option<Expression>,
        /// Declared static type (mandatory in the grammar)
        declared_type: DeclaredType,
        /// Declaring keyword, `let` or `const`
        keyword: BindingKind,
    },

    /// Block statement: a new scope around an ordered statement list
    Block(Vec<Statement>),

    /// If statement; introduces no scope of its own
    If {
        /// Condition expression evaluated for truthiness
        condition: Expression,
        /// Statement executed when the condition is truthy
        then_branch: Box<Statement>,
        /// Optional statement executed otherwise
        else_branch: Option<Box<Statement>>,
    },
}

/// The declared static type of a binding, fixed for its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclaredType {
    /// `number` annotation (double-precision)
    Number,
    /// `string` annotation
    String,
    /// `boolean` annotation
    Boolean,
}

impl DeclaredType {
    /// The annotation keyword as written in source
    pub fn keyword(&self) -> &'static str {
        match self {
            DeclaredType::Number => "number",
            DeclaredType::String => "string",
            DeclaredType::Boolean => "boolean",
        }
    }
}

/// The declaring keyword of a binding, fixed for its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BindingKind {
    /// `let`: value may be reassigned (type-checked on every write)
    Let,
    /// `const`: value can never be reassigned
    Const,
}
