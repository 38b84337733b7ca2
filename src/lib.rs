//! # Typelet
//!
//! A small scripting language with statically typed, mutability-tagged
//! `let`/`const` bindings, executed by a direct AST interpreter.
//!
//! ## Quick start
//!
//! ```rust
//! use typelet::{Interpreter, Parser, Scanner};
//!
//! # fn main() -> typelet::Result<()> {
//! let source = r#"
//!     let greeting: string = "hello";
//!     let count: number = 2;
//!     print greeting + " x" + count;
//! "#;
//!
//! // Tokenize (scan)
//! let tokens = Scanner::new(source).scan_tokens()?;
//!
//! // Parse into AST
//! let statements = Parser::new(tokens).parse()?;
//!
//! // Execute
//! let mut out = Vec::new();
//! Interpreter::new().interpret(&statements, &mut out)?;
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "hello x2\n");
//! # Ok(())
//! # }
//! ```
//!
//! Or use [`run`] to chain the whole pipeline:
//!
//! ```rust
//! let mut out = Vec::new();
//! typelet::run("print 1 + 2;", &mut out).unwrap();
//! assert_eq!(out, b"3\n");
//! ```
//!
//! ## Language overview
//!
//! - **Types**: `number` (double-precision), `string`, `boolean`. Every
//!   declaration carries a mandatory type annotation:
//!   `let x: number = 5;`
//! - **Mutability**: `let` bindings may be reassigned (type-checked on
//!   every write); `const` bindings never change.
//! - **Statements**: declarations, expression statements, `print`,
//!   blocks `{ ... }` with lexical scoping and shadowing, and
//!   `if`/`else`.
//! - **Operators**: `< <= > >=` comparisons and `- * /` arithmetic over
//!   numbers; `+` adds numbers or falls back to string concatenation of
//!   both operands' textual forms.
//!
//! ## Architecture
//!
//! A classic interpreter pipeline:
//!
//! ```text
//! Source Code → Scanner → Tokens → Parser → AST → Interpreter → Output
//! ```
//!
//! - [`Scanner`] - Tokenizes source code into tokens
//! - [`Parser`] - Parses tokens into an abstract syntax tree
//! - [`Interpreter`] - Executes the AST against an [`Environment`]
//! - [`Value`] - Runtime value representation
//!
//! Each stage fails fast: the first lexing, parsing, or runtime error
//! aborts the pipeline and is surfaced as an [`Error`] for the caller to
//! report.

/// Version of the Typelet interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{Scanner, Token, TokenKind};
pub use parser::{BindingKind, DeclaredType, Expression, Parser, Statement};
pub use runtime::{Environment, Interpreter, Value};

/// Runs source text through the full pipeline, writing print output to
/// `out`
///
/// Equivalent to scan → parse → interpret with each stage's error
/// propagated unmodified.
pub fn run(source: &str, out: &mut dyn std::io::Write) -> Result<()> {
    let tokens = Scanner::new(source).scan_tokens()?;
    tracing::debug!(tokens = tokens.len(), "scanned source");

    let statements = Parser::new(tokens).parse()?;
    tracing::debug!(statements = statements.len(), "parsed program");

    Interpreter::new().interpret(&statements, out)
}
