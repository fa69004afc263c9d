use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref SYMBOL_LOOKUP: HashMap<char, Token> = {
        let mut map = HashMap::new();
        map.insert('+', Token::Plus);
        map.insert('-', Token::Minus);
        map.insert('*', Token::Multiply);
        map.insert('/', Token::Divide);
        map.insert('(', Token::LBracket);
        map.insert(')', Token::RBracket);
        map
    };
}

/// A single lexical unit. Only the numeric variants carry a payload; the
/// operator and bracket variants are bare kinds.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    Integer(i64),
    Float(f64),

    Plus,     // +
    Minus,    // -
    Multiply, // *
    Divide,   // /

    LBracket, // (
    RBracket, // )
}

impl Token {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Integer(_) => "INT",
            Token::Float(_) => "FLOAT",
            Token::Plus => "PLUS",
            Token::Minus => "MINUS",
            Token::Multiply => "MULTIPLY",
            Token::Divide => "DIVISION",
            Token::LBracket => "LBRACKET",
            Token::RBracket => "RBRACKET",
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Matching on the variant rather than testing the payload keeps
        // Integer(0) rendering its value.
        match self {
            Token::Integer(value) => write!(f, "{}: {}", self.kind_name(), value),
            Token::Float(value) => write!(f, "{}: {}", self.kind_name(), value),
            _ => write!(f, "{}", self.kind_name()),
        }
    }
}
