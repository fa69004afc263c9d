//! Error types and error handling for the lexer.
//!
//! This module defines the error types produced while scanning. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexical failures
//! - Error formatting and display functionality

pub mod errors;
