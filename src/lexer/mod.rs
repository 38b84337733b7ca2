//! Lexical scanning: raw source text into an EOF-terminated token sequence

mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Token, TokenKind};
