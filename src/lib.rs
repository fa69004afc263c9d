#![allow(clippy::module_inception)]

//! Lexer for a small arithmetic expression language: the front end of what
//! will become a complete interpreter. The single entry point is
//! [`lexer::lexer::tokenize`], which turns an expression string into a token
//! list or the first lexical error.

pub mod errors;
pub mod lexer;
