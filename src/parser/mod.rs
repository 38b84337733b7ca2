//! Recursive-descent parsing: tokens into the statement/expression AST

mod ast;
mod descent;

pub use ast::{BindingKind, DeclaredType, Expression, Statement};
pub use descent::Parser;
