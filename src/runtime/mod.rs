//! Runtime: values, the scope-chain environment, and the tree-walking
//! interpreter

mod environment;
mod interpreter;
mod value;

pub use environment::{check_declared_type, Declaration, Environment, ScopeId};
pub use interpreter::Interpreter;
pub use value::Value;
