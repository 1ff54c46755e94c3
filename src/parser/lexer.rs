use itertools::{Itertools, PeekingNext};

use super::{CompileError, CompileErrorType, LineResult, Result};
use crate::error_handling::Span;

#[derive(PartialEq, Debug)]
pub enum Token {
    Equals,
    Or,
    Nonterminal(String),
    Terminal(String)
}

#[derive(PartialEq, Debug)]
pub struct Lexeme {
    pub token: Token,
    pub span: Span
}

fn ends_nonterminal(c: char) -> bool {
    c.is_whitespace() || c == '=' || c == '|' || c == '\"'
}

pub fn lex_terminal(line: &mut impl PeekingNext<Item = (usize, char)>) -> Result<Token> {
    line.next(); // Consume open quote
    let token_text = line.peeking_take_while(|&(_, c)| c != '\"').map(|(_, c)| c).collect();

    // Check if there is a close quote and consume it if there is
    if line.next().map(|(_, c)| c) != Some('\"') {
        return Err(CompileErrorType::UnmatchedQuote);
    }

    Ok(Token::Terminal(token_text))
}

pub fn lex_nonterminal(line: &mut impl PeekingNext<Item = (usize, char)>) -> Result<Token> {
    Ok(Token::Nonterminal(line.peeking_take_while(|&(_, c)| !ends_nonterminal(c)).map(|(_, c)| c).collect()))
}

// Lexes one line of a grammar file. `offset` is where the line starts in the
// file and is added to every span.
pub fn lex_line(line: &str, offset: usize) -> LineResult<Vec<Lexeme>> {
    let mut lexemes = Vec::new();

    let mut line_chars = line.char_indices().peekable();

    while let Some(&(start, c)) = line_chars.peek() {
        let token = if c == '=' {
            line_chars.next();
            Token::Equals
        } else if c == '|' {
            line_chars.next();
            Token::Or
        } else if c == '\"' {
            lex_terminal(&mut line_chars).map_err(|error| CompileError {
                span: Span::new(offset + start, offset + line.len()),
                error
            })?
        } else if !c.is_whitespace() {
            lex_nonterminal(&mut line_chars).map_err(|error| CompileError {
                span: Span::new(offset + start, offset + line.len()),
                error
            })?
        } else {
            line_chars.next();
            continue;
        };

        let end = line_chars.peek().map_or(line.len(), |&(end, _)| end);
        lexemes.push(Lexeme {
            token,
            span: Span::new(offset + start, offset + end)
        });
    }

    return Ok(lexemes);
}
