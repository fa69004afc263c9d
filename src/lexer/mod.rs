//! Lexical analysis module for the interpreter.
//!
//! This module contains the lexer (tokenizer) that converts an arithmetic
//! expression into a stream of tokens for parsing. It handles:
//!
//! - Character-by-character scanning of the input expression
//! - Integer and float literals, including decimal-point handling
//! - Single-character operators and brackets
//! - Whitespace skipping and unrecognized-character errors

pub mod lexer;
pub mod tokens;
