/*!
# Rust Language Module

This Rust module provides lexical analysis of SRPN input lines.

*/

#[macro_use]
mod error;
mod comment;
mod lex;
mod number;
mod token;

pub use comment::CommentState;
pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use token::Operator;
pub use token::Token;
