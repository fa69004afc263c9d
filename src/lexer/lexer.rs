use crate::errors::errors::{Error, ErrorImpl};

use super::tokens::{Token, SYMBOL_LOOKUP};

/// Scanning state for a single pass over one expression. A `Lexer` is
/// created, drained once by [`Lexer::get_tokens`], and discarded; the
/// cursor only ever moves forward.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    current: Option<char>,
}

impl Lexer {
    pub fn new(text: &str) -> Lexer {
        let chars: Vec<char> = text.chars().collect();
        let current = chars.first().copied();

        Lexer {
            chars,
            pos: 0,
            current,
        }
    }

    fn advance(&mut self) {
        self.pos += 1;
        self.current = self.chars.get(self.pos).copied();
    }

    /// Drains the whole input into a token list, or stops at the first
    /// unrecognized character. On failure every token accumulated so far is
    /// discarded; the caller gets the error and nothing else.
    pub fn get_tokens(&mut self) -> Result<Vec<Token>, Error> {
        let mut tokens = vec![];

        while let Some(current) = self.current {
            if current == ' ' || current == '\t' {
                self.advance();
            } else if current.is_ascii_digit() {
                tokens.push(self.get_number()?);
            } else if let Some(token) = SYMBOL_LOOKUP.get(&current) {
                tokens.push(*token);
                self.advance();
            } else {
                let position = self.pos;
                // The cursor steps past the offending character even though
                // the scan ends here; the reported position is unaffected.
                self.advance();
                return Err(Error::new(
                    ErrorImpl::UnexpectedCharacter { character: current },
                    position,
                ));
            }
        }

        Ok(tokens)
    }

    /// Scans one numeric literal. Accepts digits and at most one decimal
    /// point; a second point ends the literal and is left under the cursor
    /// for the dispatch loop to deal with. A trailing point is legal, so
    /// `5.` lexes as the float 5.0.
    fn get_number(&mut self) -> Result<Token, Error> {
        let start = self.pos;
        let mut parsed_str = String::new();
        let mut num_dots = 0;

        while let Some(current) = self.current {
            if current == '.' {
                if num_dots > 0 {
                    break;
                }
                num_dots += 1;
            } else if !current.is_ascii_digit() {
                break;
            }

            parsed_str.push(current);
            self.advance();
        }

        if num_dots == 0 {
            let value = parsed_str.parse::<i64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        literal: parsed_str.clone(),
                    },
                    start,
                )
            })?;

            Ok(Token::Integer(value))
        } else {
            let value = parsed_str.parse::<f64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        literal: parsed_str.clone(),
                    },
                    start,
                )
            })?;

            Ok(Token::Float(value))
        }
    }
}

pub fn tokenize(text: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(text);
    lexer.get_tokens()
}
