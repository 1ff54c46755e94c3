use std::fmt::Display;

use crate::diagnostics::SyntaxError;

pub trait ErrorType: Display + PartialEq {}

// Byte range into the grammar source
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Span {
    pub start: usize,
    pub end: usize
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn to(self, other: Span) -> Span {
        Span::new(self.start, other.end)
    }
}

#[derive(Debug, PartialEq)]
pub struct Error<T: ErrorType> {
    pub span: Span,
    pub error: T
}

impl<T: ErrorType> Error<T> {
    pub fn to_syntax_error(&self) -> SyntaxError {
        SyntaxError {
            start: self.span.start,
            end: self.span.end,
            message: self.error.to_string()
        }
    }
}

pub type Errors<T> = Vec<Error<T>>;
